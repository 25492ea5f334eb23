//! Identification block codec.
//!
//! The identification block is 8 bytes at [`ID_BLOCK`](crate::tag::layout::ID_BLOCK)
//! and is a pure function of a record's id, type and series:
//!
//! ```text
//! ┌──────┬──────┬─────────┬──────┬──────┬──────┬────────┬─────────┐
//! │  0   │  1   │    2    │  3   │  4   │  5   │   6    │    7    │
//! ├──────┴──────┼─────────┼──────┼──────┴──────┼────────┼─────────┤
//! │ game & char │ variant │ type │    model    │ series │ version │
//! │  (u16, BE)  │         │      │  (u16, BE)  │        │  0x02   │
//! └─────────────┴─────────┴──────┴─────────────┴────────┴─────────┘
//! ```
//!
//! In terms of the hex strings of a record:
//!
//! - game & character: `head[0..6] ++ tail[0..2]`, truncated to 16 bits
//! - variant: `head[6..8]`
//! - model: `head[2..4] ++ tail[2..4]`
//!
//! There is no checksum inside the block; encoder and decoder must agree on
//! big-endian order for the multi-byte fields.

mod tables;

use std::fmt::Display;

pub use self::tables::{AmiiboType, Series};

use crate::error::CodecError;
use crate::record::{AmiiboId, AmiiboRecord};
use crate::tag::layout::{ID_BLOCK_SIZE, constants::FORMAT_VERSION};

/// Encoded 8-byte identification block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentificationBlock([u8; ID_BLOCK_SIZE]);

impl IdentificationBlock {
	/// Packs an already validated id with its type and series
	pub fn from_parts(id: &AmiiboId, kind: AmiiboType, series: Series) -> Self {
		let head = id.head();
		let tail = id.tail();

		let game_char_id = u16::from_be_bytes([head[2], tail[0]]);
		let model_number = u16::from_be_bytes([head[1], tail[1]]);

		let mut block = [0u8; ID_BLOCK_SIZE];
		block[0..2].copy_from_slice(&game_char_id.to_be_bytes());
		block[2] = head[3];
		block[3] = kind.code();
		block[4..6].copy_from_slice(&model_number.to_be_bytes());
		block[6] = series.code();
		block[7] = FORMAT_VERSION;
		Self(block)
	}

	/// Returns the raw bytes
	pub fn as_bytes(&self) -> &[u8; ID_BLOCK_SIZE] {
		&self.0
	}

	/// Unpacks the block into its fields
	pub fn fields(&self) -> DecodedFields {
		let b = &self.0;
		DecodedFields {
			game_char_id: u16::from_be_bytes([b[0], b[1]]),
			variant: b[2],
			type_code: b[3],
			model_number: u16::from_be_bytes([b[4], b[5]]),
			series_code: b[6],
			format_version: b[7],
		}
	}
}

impl From<[u8; ID_BLOCK_SIZE]> for IdentificationBlock {
	fn from(bytes: [u8; ID_BLOCK_SIZE]) -> Self {
		Self(bytes)
	}
}

impl TryFrom<&[u8]> for IdentificationBlock {
	type Error = CodecError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		let bytes: [u8; ID_BLOCK_SIZE] = value.try_into().map_err(|_| CodecError::InvalidLength {
			expected: ID_BLOCK_SIZE,
			actual: value.len(),
		})?;
		Ok(Self(bytes))
	}
}

impl Display for IdentificationBlock {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let parts: Vec<String> = self.0.iter().map(|b| format!("{b:02X}")).collect();
		write!(f, "{}", parts.join(" "))
	}
}

/// Numeric fields of an identification block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedFields {
	/// Game and character id
	pub game_char_id: u16,
	/// Character variant
	pub variant: u8,
	/// Raw tag type code
	pub type_code: u8,
	/// Model number
	pub model_number: u16,
	/// Raw series code
	pub series_code: u8,
	/// Format version, `0x02` for every image this crate builds
	pub format_version: u8,
}

impl DecodedFields {
	/// Maps the type code back to a known type
	pub fn amiibo_type(&self) -> Option<AmiiboType> {
		AmiiboType::from_code(self.type_code)
	}

	/// Maps the series code back to a known series
	pub fn series(&self) -> Option<Series> {
		Series::from_code(self.series_code)
	}
}

impl Display for DecodedFields {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Identification:\n\
			- Game & Character: 0x{:04X}\n\
			- Variant: 0x{:02X}\n\
			- Type: 0x{:02X}\n\
			- Model: 0x{:04X}\n\
			- Series: 0x{:02X}\n\
			- Format Version: 0x{:02X}",
			self.game_char_id,
			self.variant,
			self.type_code,
			self.model_number,
			self.series_code,
			self.format_version
		)
	}
}

/// Encodes the identification block of a record.
///
/// Unknown types encode as [`AmiiboType::Figure`] and unknown series as `0x00`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidRecord`] if `head` or `tail` is not exactly 8
/// hex digits.
pub fn encode(record: &AmiiboRecord) -> Result<IdentificationBlock, CodecError> {
	let id = record.id()?;
	Ok(IdentificationBlock::from_parts(&id, record.kind, record.series_code()))
}

/// Decodes an 8-byte identification block.
///
/// Type and series codes are returned raw; see [`DecodedFields::amiibo_type`]
/// and [`DecodedFields::series`] for name lookups.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if `block` is not exactly 8 bytes.
pub fn decode(block: &[u8]) -> Result<DecodedFields, CodecError> {
	IdentificationBlock::try_from(block).map(|block| block.fields())
}

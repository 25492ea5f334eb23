//! Memory map of a 540-byte NTAG215 amiibo image.
//!
//! Every other component addresses the image through the [`Field`] constants
//! defined here; no offsets are spelled out anywhere else.
//!
//! ```text
//! 0x000 ┌──────────────────────────────┐
//!       │ UID (9, incl. BCC0/BCC1)     │
//! 0x009 │ Static lock (3)              │
//! 0x00C │ Capability container (4)     │
//! 0x010 │ NTAG config (4)              │
//!       │ ...                          │
//! 0x034 │ Tag hash (32)                │
//! 0x054 │ Identification block (8)     │
//!       │ ...                          │
//! 0x060 │ Keygen salt (32)             │
//! 0x080 │ Data hash (32)               │
//!       │ ...                          │
//! 0x180 │ Application ID (4)           │
//!       │ ...                          │
//! 0x208 │ AppData (8)                  │
//! 0x210 │ Settings tail (12)           │
//! 0x21C └──────────────────────────────┘
//! ```

use std::fmt::Display;
use std::ops::Range;

/// Total size of a tag image in bytes
pub const IMAGE_SIZE: usize = 540;

/// Size of the identification block in bytes
pub const ID_BLOCK_SIZE: usize = 8;

/// Number of meaningful UID bytes (without check bytes)
pub const UID_SIZE: usize = 7;

/// Size of the UID region on the tag, check bytes included
pub const UID_REGION_SIZE: usize = UID_SIZE + 2;

/// A named byte range inside the tag image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
	/// Human readable name
	pub name: &'static str,
	/// Absolute offset from the start of the image
	pub offset: usize,
	/// Length in bytes
	pub len: usize,
}

impl Field {
	const fn new(name: &'static str, offset: usize, len: usize) -> Self {
		Self {
			name,
			offset,
			len,
		}
	}

	/// Offset one past the last byte of the field
	pub const fn end(&self) -> usize {
		self.offset + self.len
	}

	/// Byte range covered by the field
	pub const fn range(&self) -> Range<usize> {
		self.offset..self.end()
	}

	/// Returns `true` if `other` lies entirely inside this field
	pub const fn contains(&self, other: &Field) -> bool {
		other.offset >= self.offset && other.end() <= self.end()
	}

	/// Returns `true` if the two fields share at least one byte
	pub const fn overlaps(&self, other: &Field) -> bool {
		self.offset < other.end() && other.offset < self.end()
	}

	/// Returns `true` if the absolute byte offset falls inside this field
	pub const fn covers(&self, offset: usize) -> bool {
		offset >= self.offset && offset < self.end()
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} [0x{:03X}..0x{:03X})", self.name, self.offset, self.end())
	}
}

/// UID0..2, BCC0, UID3..6, BCC1
pub const UID: Field = Field::new("uid", 0x000, UID_REGION_SIZE);

/// Internal byte and static lock bits
pub const STATIC_LOCK: Field = Field::new("static lock", 0x009, 3);

/// NDEF capability container
pub const CAPABILITY_CONTAINER: Field = Field::new("capability container", 0x00C, 4);

/// Amiibo magic byte, write counter and version
pub const NTAG_CONFIG: Field = Field::new("ntag config", 0x010, 4);

/// Signature over the locked section, filled in by the lock primitive
pub const TAG_HASH: Field = Field::new("tag hash", 0x034, 32);

/// Packed character/series/type/model identification
pub const ID_BLOCK: Field = Field::new("identification block", 0x054, ID_BLOCK_SIZE);

/// Salt mixed into key derivation
pub const KEYGEN_SALT: Field = Field::new("keygen salt", 0x060, 32);

/// Signature over the data section, filled in by the lock primitive
pub const DATA_HASH: Field = Field::new("data hash", 0x080, 32);

/// Application identifier slot used by game-specific save data
pub const APP_ID: Field = Field::new("application id", 0x180, 4);

/// Game-specific data defaults.
///
/// The nominal 0x208..0x288 window does not fit a 540-byte image; the field is
/// the part of it that precedes the settings tail.
pub const APP_DATA: Field = Field::new("app data", 0x208, 8);

/// Trailing settings bytes, left zero
pub const SETTINGS_TAIL: Field = Field::new("settings tail", 0x210, 12);

/// Every top-level field, in offset order
pub const LAYOUT: [Field; 11] = [
	UID,
	STATIC_LOCK,
	CAPABILITY_CONTAINER,
	NTAG_CONFIG,
	TAG_HASH,
	ID_BLOCK,
	KEYGEN_SALT,
	DATA_HASH,
	APP_ID,
	APP_DATA,
	SETTINGS_TAIL,
];

/// Fields that type/series defaults may write to
pub const APPLICATION_FIELDS: [Field; 2] = [APP_ID, APP_DATA];

/// Sub-fields of the static lock area.
pub mod lock {
	use super::Field;

	/// The two lock-bit bytes following the internal byte
	pub const STATIC_LOCK_BITS: Field = Field::new("static lock bits", 0x00A, 2);
}

/// Sub-fields of the application area.
pub mod app {
	use super::Field;

	/// Animal Crossing card country code
	pub const COUNTRY_CODE: Field = Field::new("country code", 0x208, 8);

	/// Animal Crossing card write counter
	pub const WRITE_COUNTER: Field = Field::new("write counter", 0x20C, 2);

	/// Baseline cleared for bands, yarn and blocks
	pub const TYPE_BASELINE: Field = Field::new("type baseline", 0x208, 8);

	/// Every sub-field the region initializer addresses
	pub const ALL: [Field; 3] = [COUNTRY_CODE, WRITE_COUNTER, TYPE_BASELINE];
}

/// Format-mandated constants written into every image.
pub mod constants {
	/// Internal byte followed by static lock bytes 0 and 1
	pub const STATIC_LOCK_BYTES: [u8; 3] = [0x48, 0x0F, 0xE0];

	/// Static lock bytes of a write-locked tag
	pub const LOCKED_BITS: [u8; 2] = [0x0F, 0xE0];

	/// NDEF capability container of an NTAG215
	pub const CAPABILITY_CONTAINER_BYTES: [u8; 4] = [0xF1, 0x10, 0xFF, 0xEE];

	/// Magic byte, write counter and version
	pub const NTAG_CONFIG_BYTES: [u8; 4] = [0xA5, 0x01, 0x00, 0x00];

	/// First byte of [`NTAG_CONFIG_BYTES`]; identifies an amiibo image
	pub const AMIIBO_MAGIC: u8 = 0xA5;

	/// Identification block format version
	pub const FORMAT_VERSION: u8 = 0x02;

	/// NXP manufacturer code, first UID byte
	pub const UID_MANUFACTURER: u8 = 0x04;

	/// Cascade tag folded into BCC0
	pub const CASCADE_TAG: u8 = 0x88;

	/// Super Smash Bros. application ID pattern
	pub const SMASH_APP_ID: [u8; 4] = [0x00, 0x10, 0x11, 0x0E];
}

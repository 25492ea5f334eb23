//! Tag UID derivation and NTAG encoding.
//!
//! An NTAG215 UID is 7 bytes. On the tag it is stored as two cascade levels,
//! each followed by a check byte:
//!
//! ```text
//! [UID0 UID1 UID2 BCC0] [UID3 UID4 UID5 UID6] [BCC1]
//! BCC0 = 0x88 ^ UID0 ^ UID1 ^ UID2
//! BCC1 = UID3 ^ UID4 ^ UID5 ^ UID6
//! ```

use std::fmt::Display;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::InvalidRecord;
use crate::record::AmiiboRecord;
use crate::tag::layout::{
	UID_REGION_SIZE, UID_SIZE,
	constants::{CASCADE_TAG, UID_MANUFACTURER},
};

/// How a UID is derived from a record.
///
/// Both strategies pin the first byte to the NXP manufacturer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UidStrategy {
	/// Bytes 1..7 of `head ++ tail` after the manufacturer byte
	#[default]
	Direct,
	/// First 6 bytes of the MD5 digest of the `head ++ tail` text, hashed as
	/// written in the record
	Digest,
}

/// The 7 meaningful UID bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_SIZE]);

impl Uid {
	/// Wraps raw UID bytes
	pub fn new(bytes: [u8; UID_SIZE]) -> Self {
		Self(bytes)
	}

	/// Derives the UID of a record
	///
	/// # Errors
	///
	/// Returns [`InvalidRecord`] if `head` or `tail` is malformed.
	pub fn derive(record: &AmiiboRecord, strategy: UidStrategy) -> Result<Self, InvalidRecord> {
		let id = record.id()?;
		let mut uid = [0u8; UID_SIZE];
		uid[0] = UID_MANUFACTURER;
		match strategy {
			UidStrategy::Direct => uid[1..].copy_from_slice(&id.to_bytes()[1..UID_SIZE]),
			UidStrategy::Digest => {
				// hex case is significant here
				let mut hasher = Md5::new();
				hasher.update(record.head.as_bytes());
				hasher.update(record.tail.as_bytes());
				uid[1..].copy_from_slice(&hasher.finalize()[..UID_SIZE - 1]);
			}
		}
		Ok(Self(uid))
	}

	/// Parses 14 hex digits
	///
	/// # Errors
	///
	/// Returns [`InvalidRecord`] if `value` is not exactly 14 hex digits.
	pub fn from_hex(value: &str) -> Result<Self, InvalidRecord> {
		let mut bytes = [0u8; UID_SIZE];
		hex::decode_to_slice(value, &mut bytes).map_err(|_| InvalidRecord {
			field: "uid",
			value: value.to_owned(),
			expected_digits: UID_SIZE * 2,
		})?;
		Ok(Self(bytes))
	}

	/// Returns the raw bytes
	pub fn as_bytes(&self) -> &[u8; UID_SIZE] {
		&self.0
	}

	/// Encodes the UID the way it is laid out on the tag
	pub fn to_tag_bytes(&self) -> [u8; UID_REGION_SIZE] {
		let u = &self.0;
		let bcc0 = CASCADE_TAG ^ u[0] ^ u[1] ^ u[2];
		let bcc1 = u[3] ^ u[4] ^ u[5] ^ u[6];
		[u[0], u[1], u[2], bcc0, u[3], u[4], u[5], u[6], bcc1]
	}

	/// Reads a UID back from its tag layout, ignoring the check bytes
	pub fn from_tag_bytes(region: &[u8; UID_REGION_SIZE]) -> Self {
		Self([region[0], region[1], region[2], region[4], region[5], region[6], region[7]])
	}

	/// Returns `true` if both check bytes of a tag UID region are consistent
	pub fn check_bytes_valid(region: &[u8; UID_REGION_SIZE]) -> bool {
		Self::from_tag_bytes(region).to_tag_bytes() == *region
	}
}

impl Display for Uid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", hex::encode_upper(self.0))
	}
}

impl FromStr for Uid {
	type Err = InvalidRecord;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

//! Master key material.
//!
//! The combined key blob is 160 bytes: two 80-byte master keys, the data key
//! ("unfixed infos") followed by the tag key ("locked secret").
//!
//! ```text
//! ┌────────────────────────┐
//! │ HMAC key (16)          │  0x00
//! │ Type string (14)       │  0x10
//! │ RFU (1)                │  0x1E
//! │ Magic bytes size (1)   │  0x1F
//! │ Magic bytes (16)       │  0x20
//! │ XOR pad (32)           │  0x30
//! └────────────────────────┘  0x50
//! ```
//!
//! Keys are immutable after loading and can be shared between worker threads.

use std::path::Path;

use crate::error::KeyError;

/// Size of one master key in bytes
pub const MASTER_KEY_SIZE: usize = 80;

/// Size of the combined key blob in bytes
pub const COMBINED_KEY_SIZE: usize = 2 * MASTER_KEY_SIZE;

/// Maximum number of magic bytes a master key can carry
pub const MAX_MAGIC_BYTES: usize = 16;

/// One master key used for key derivation
#[derive(Clone, PartialEq, Eq)]
pub struct MasterKey {
	pub(crate) hmac_key: [u8; 16],
	pub(crate) type_string: [u8; 14],
	pub(crate) rfu: u8,
	pub(crate) magic_size: u8,
	pub(crate) magic_bytes: [u8; MAX_MAGIC_BYTES],
	pub(crate) xor_pad: [u8; 32],
}

impl MasterKey {
	/// Parses an 80-byte master key.
	///
	/// # Errors
	///
	/// Returns [`KeyError::InvalidKeyMaterial`] for a wrong size and
	/// [`KeyError::InvalidMagicSize`] if the declared magic size exceeds 16.
	pub fn from_bytes(data: &[u8], name: &'static str) -> Result<Self, KeyError> {
		if data.len() != MASTER_KEY_SIZE {
			return Err(KeyError::InvalidKeyMaterial {
				expected: MASTER_KEY_SIZE,
				actual: data.len(),
			});
		}

		let magic_size = data[0x1F];
		if magic_size as usize > MAX_MAGIC_BYTES {
			return Err(KeyError::InvalidMagicSize {
				key: name,
				size: magic_size,
			});
		}

		let mut key = Self {
			hmac_key: [0; 16],
			type_string: [0; 14],
			rfu: data[0x1E],
			magic_size,
			magic_bytes: [0; MAX_MAGIC_BYTES],
			xor_pad: [0; 32],
		};
		key.hmac_key.copy_from_slice(&data[0x00..0x10]);
		key.type_string.copy_from_slice(&data[0x10..0x1E]);
		key.magic_bytes.copy_from_slice(&data[0x20..0x30]);
		key.xor_pad.copy_from_slice(&data[0x30..0x50]);
		Ok(key)
	}

	/// Serializes the key back to its 80-byte form
	pub fn to_bytes(&self) -> [u8; MASTER_KEY_SIZE] {
		let mut out = [0u8; MASTER_KEY_SIZE];
		out[0x00..0x10].copy_from_slice(&self.hmac_key);
		out[0x10..0x1E].copy_from_slice(&self.type_string);
		out[0x1E] = self.rfu;
		out[0x1F] = self.magic_size;
		out[0x20..0x30].copy_from_slice(&self.magic_bytes);
		out[0x30..0x50].copy_from_slice(&self.xor_pad);
		out
	}

	/// Type string up to (not including) its NUL terminator
	pub fn type_name(&self) -> String {
		let end = self.type_string.iter().position(|&b| b == 0).unwrap_or(self.type_string.len());
		String::from_utf8_lossy(&self.type_string[..end]).into_owned()
	}
}

impl std::fmt::Debug for MasterKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MasterKey")
			.field("type", &self.type_name())
			.field("magic_size", &self.magic_size)
			.finish_non_exhaustive()
	}
}

/// The data and tag master keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterKeys {
	/// Key for the data section ("unfixed infos")
	pub data: MasterKey,
	/// Key for the tag section ("locked secret")
	pub tag: MasterKey,
}

impl MasterKeys {
	/// Parses a 160-byte combined key blob.
	///
	/// # Errors
	///
	/// Returns [`KeyError::InvalidKeyMaterial`] if `data` is not exactly 160
	/// bytes, or [`KeyError::InvalidMagicSize`] if either key is corrupt.
	pub fn from_combined_bytes(data: &[u8]) -> Result<Self, KeyError> {
		if data.len() != COMBINED_KEY_SIZE {
			return Err(KeyError::InvalidKeyMaterial {
				expected: COMBINED_KEY_SIZE,
				actual: data.len(),
			});
		}
		let (data_key, tag_key) = data.split_at(MASTER_KEY_SIZE);
		Self::from_separate_bytes(data_key, tag_key)
	}

	/// Parses the two 80-byte keys from separate blobs
	pub fn from_separate_bytes(data_key: &[u8], tag_key: &[u8]) -> Result<Self, KeyError> {
		Ok(Self {
			data: MasterKey::from_bytes(data_key, "data")?,
			tag: MasterKey::from_bytes(tag_key, "tag")?,
		})
	}

	/// Loads a combined key file
	pub fn open(path: impl AsRef<Path>) -> Result<Self, KeyError> {
		let data = std::fs::read(path)?;
		Self::from_combined_bytes(&data)
	}

	/// Serializes both keys back to the combined form
	pub fn to_combined_bytes(&self) -> [u8; COMBINED_KEY_SIZE] {
		let mut out = [0u8; COMBINED_KEY_SIZE];
		out[..MASTER_KEY_SIZE].copy_from_slice(&self.data.to_bytes());
		out[MASTER_KEY_SIZE..].copy_from_slice(&self.tag.to_bytes());
		out
	}
}

impl TryFrom<&[u8]> for MasterKeys {
	type Error = KeyError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_combined_bytes(value)
	}
}

//! Error types for tag assembly, inspection and key handling.

use thiserror::Error;

/// A catalog record whose identifier fields cannot be turned into tag bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid record: {field} {value:?} is not a {expected_digits}-digit hex string")]
pub struct InvalidRecord {
	/// Name of the offending field (`head`, `tail` or `uid`)
	pub field: &'static str,
	/// Value as it was supplied
	pub value: String,
	/// Number of hex digits the field requires
	pub expected_digits: usize,
}

/// Errors raised by the identification block codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
	/// The record's `head` or `tail` is malformed
	#[error(transparent)]
	InvalidRecord(#[from] InvalidRecord),

	/// The block to decode is not exactly 8 bytes
	#[error("Invalid identification block length: expected {expected} bytes, got {actual} bytes")]
	InvalidLength {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},
}

/// Errors that can occur when loading master key material
#[derive(Debug, Error)]
pub enum KeyError {
	/// The key blob has the wrong size
	#[error("Invalid key material: expected {expected} bytes, got {actual} bytes")]
	InvalidKeyMaterial {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A master key declares more magic bytes than it can hold
	#[error("Invalid key material: {key} key declares {size} magic bytes (max 16)")]
	InvalidMagicSize {
		/// Which master key is corrupt (`data` or `tag`)
		key: &'static str,
		/// Declared magic byte count
		size: u8,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors reported by a lock/unlock primitive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
	/// The image does not carry the NTAG215 amiibo magic byte
	#[error("Unrecognized image: magic byte is 0x{found:02X}, expected 0x{expected:02X}")]
	UnrecognizedImage {
		/// Expected magic byte
		expected: u8,
		/// Magic byte found in the image
		found: u8,
	},

	/// The stored signatures do not match the ones derived from the keys
	#[error("Signature mismatch: image was not produced with the given keys ({which} hash)")]
	SignatureMismatch {
		/// Which signature failed (`tag` or `data`)
		which: &'static str,
	},
}

/// Errors that can occur while building a locked image from a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The record failed validation; nothing was assembled
	#[error(transparent)]
	InvalidRecord(#[from] InvalidRecord),

	/// The lock primitive rejected the assembled plaintext
	#[error("Encryption failed: {0}")]
	EncryptionFailed(#[source] CipherError),
}

/// Errors that can occur while inspecting a locked image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
	/// The buffer is not exactly one tag image long
	#[error("Size mismatch: expected {expected} bytes, got {actual} bytes")]
	SizeMismatch {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// The unlock primitive rejected the buffer
	#[error("Decryption failed: {0}")]
	DecryptionFailed(#[source] CipherError),
}

/// Errors that can occur when reading a record catalog
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The document is not valid catalog JSON
	#[error("Invalid catalog JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

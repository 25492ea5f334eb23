//! Fixed-size tag image buffer.

use std::fmt::Display;

use crate::error::InspectError;

use super::layout::{Field, ID_BLOCK, ID_BLOCK_SIZE, IMAGE_SIZE, UID, UID_REGION_SIZE};

/// A complete 540-byte tag image, plaintext or locked.
///
/// Writes are addressed by [`Field`]; writing past a field is a contract
/// violation and panics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TagImage {
	data: [u8; IMAGE_SIZE],
}

impl TagImage {
	/// Size of the image in bytes
	pub const SIZE: usize = IMAGE_SIZE;

	/// Creates a zero-filled image
	pub fn new() -> Self {
		Self {
			data: [0u8; IMAGE_SIZE],
		}
	}

	/// Copies an image out of a byte slice.
	///
	/// # Errors
	///
	/// Returns [`InspectError::SizeMismatch`] if `data` is not exactly
	/// [`IMAGE_SIZE`] bytes long.
	pub fn from_bytes(data: &[u8]) -> Result<Self, InspectError> {
		let data: [u8; IMAGE_SIZE] = data.try_into().map_err(|_| InspectError::SizeMismatch {
			expected: IMAGE_SIZE,
			actual: data.len(),
		})?;
		Ok(Self {
			data,
		})
	}

	/// Returns the raw bytes
	pub fn as_bytes(&self) -> &[u8; IMAGE_SIZE] {
		&self.data
	}

	/// Returns mutable raw bytes
	pub fn as_bytes_mut(&mut self) -> &mut [u8; IMAGE_SIZE] {
		&mut self.data
	}

	/// Consumes the image and returns its bytes
	pub fn into_bytes(self) -> [u8; IMAGE_SIZE] {
		self.data
	}

	/// Returns the bytes of a field
	pub fn field(&self, field: Field) -> &[u8] {
		assert!(field.end() <= IMAGE_SIZE, "{field} exceeds the {IMAGE_SIZE}-byte image");
		&self.data[field.range()]
	}

	/// Overwrites a whole field.
	///
	/// # Panics
	///
	/// Panics if `bytes` is not exactly `field.len` long or if the field does
	/// not fit the image.
	pub fn write_field(&mut self, field: Field, bytes: &[u8]) {
		assert_eq!(
			bytes.len(),
			field.len,
			"{field} takes {} bytes, got {}",
			field.len,
			bytes.len()
		);
		assert!(field.end() <= IMAGE_SIZE, "{field} exceeds the {IMAGE_SIZE}-byte image");
		self.data[field.range()].copy_from_slice(bytes);
	}

	/// Sets every byte of a field to zero
	pub fn clear_field(&mut self, field: Field) {
		self.write_field(field, &vec![0u8; field.len]);
	}

	/// Returns the identification block bytes
	pub fn id_block(&self) -> [u8; ID_BLOCK_SIZE] {
		let mut block = [0u8; ID_BLOCK_SIZE];
		block.copy_from_slice(self.field(ID_BLOCK));
		block
	}

	/// Returns the UID region (including check bytes)
	pub fn uid_region(&self) -> [u8; UID_REGION_SIZE] {
		let mut region = [0u8; UID_REGION_SIZE];
		region.copy_from_slice(self.field(UID));
		region
	}
}

impl Default for TagImage {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TagImage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TagImage")
			.field("uid", &hex::encode_upper(self.field(UID)))
			.field("id_block", &hex::encode_upper(self.field(ID_BLOCK)))
			.finish_non_exhaustive()
	}
}

impl Display for TagImage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (row, chunk) in self.data.chunks(16).enumerate() {
			writeln!(f, "{:03X}: {}", row * 16, hex::encode_upper(chunk))?;
		}
		Ok(())
	}
}

impl TryFrom<&[u8]> for TagImage {
	type Error = InspectError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl From<[u8; IMAGE_SIZE]> for TagImage {
	fn from(data: [u8; IMAGE_SIZE]) -> Self {
		Self {
			data,
		}
	}
}

impl From<TagImage> for Vec<u8> {
	fn from(image: TagImage) -> Self {
		image.data.to_vec()
	}
}

impl AsRef<[u8]> for TagImage {
	fn as_ref(&self) -> &[u8] {
		&self.data
	}
}

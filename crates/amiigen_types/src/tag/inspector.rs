//! Reads the identification fields back out of a locked image.

use std::fmt::Display;

use log::debug;

use crate::cipher::{AmiiboCipher, TagCipher};
use crate::error::InspectError;
use crate::keys::MasterKeys;

use super::TagImage;
use super::ident::{DecodedFields, IdentificationBlock};
use super::uid::Uid;

/// What an inspected image carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectedTag {
	/// UID read from the unlocked image
	pub uid: Uid,
	/// Whether both UID check bytes are consistent
	pub uid_check_bytes_valid: bool,
	/// Decoded identification block
	pub fields: DecodedFields,
	/// Whether the static lock bits are set
	pub locked: bool,
}

impl Display for InspectedTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "UID: {}", self.uid)?;
		writeln!(f, "UID check bytes: {}", if self.uid_check_bytes_valid { "ok" } else { "invalid" })?;
		writeln!(f, "Locked: {}", self.locked)?;
		write!(f, "{}", self.fields)
	}
}

/// Unlocks `data` with any lock primitive and decodes it.
///
/// The input is never modified; the size is checked before `cipher` is called.
///
/// # Errors
///
/// Returns [`InspectError::SizeMismatch`] if `data` is not exactly 540 bytes
/// and [`InspectError::DecryptionFailed`] if `cipher` rejects it.
pub fn inspect_image_with<C: TagCipher + ?Sized>(
	data: &[u8],
	cipher: &C,
) -> Result<InspectedTag, InspectError> {
	let image = TagImage::from_bytes(data)?;
	let unlocked = cipher.unlock(&image).map_err(InspectError::DecryptionFailed)?;

	let plaintext = &unlocked.plaintext;
	let fields = IdentificationBlock::from(plaintext.id_block()).fields();
	let inspected = InspectedTag {
		uid: unlocked.uid,
		uid_check_bytes_valid: Uid::check_bytes_valid(&plaintext.uid_region()),
		fields,
		locked: unlocked.is_locked,
	};
	debug!("Inspected image with UID {}", inspected.uid);
	Ok(inspected)
}

/// Unlocks `data` with the retail cipher and decodes it
pub fn inspect_image(data: &[u8], keys: &MasterKeys) -> Result<InspectedTag, InspectError> {
	inspect_image_with(data, &AmiiboCipher::new(keys))
}

//! Builds a locked tag image from a catalog record.
//!
//! Every record goes through the same steps, and any failure ends the record
//! without producing output:
//!
//! 1. validate `head` and `tail`
//! 2. allocate a zero-filled image
//! 3. write the format constants (static lock, capability container, config)
//! 4. derive and write the UID
//! 5. encode and write the identification block
//! 6. apply the region defaults
//! 7. lock the plaintext

use log::debug;

use crate::cipher::{AmiiboCipher, TagCipher};
use crate::error::{BuildError, InvalidRecord};
use crate::keys::MasterKeys;
use crate::record::AmiiboRecord;

use super::TagImage;
use super::ident::IdentificationBlock;
use super::layout::{
	CAPABILITY_CONTAINER, ID_BLOCK, NTAG_CONFIG, STATIC_LOCK, UID,
	constants::{CAPABILITY_CONTAINER_BYTES, NTAG_CONFIG_BYTES, STATIC_LOCK_BYTES},
};
use super::region::apply_defaults;
use super::uid::{Uid, UidStrategy};

/// Assembles the plaintext image of a record without locking it.
///
/// Hash and salt fields stay zero; the lock primitive fills the hashes.
///
/// # Errors
///
/// Returns [`InvalidRecord`] if `head` or `tail` is malformed.
pub fn assemble_plaintext(
	record: &AmiiboRecord,
	strategy: UidStrategy,
) -> Result<(TagImage, Uid), InvalidRecord> {
	let id = record.id()?;
	let mut image = TagImage::new();

	image.write_field(STATIC_LOCK, &STATIC_LOCK_BYTES);
	image.write_field(CAPABILITY_CONTAINER, &CAPABILITY_CONTAINER_BYTES);
	image.write_field(NTAG_CONFIG, &NTAG_CONFIG_BYTES);

	let uid = Uid::derive(record, strategy)?;
	image.write_field(UID, &uid.to_tag_bytes());
	debug!("{id}: UID {uid} ({strategy:?})");

	let block = IdentificationBlock::from_parts(&id, record.kind, record.series_code());
	image.write_field(ID_BLOCK, block.as_bytes());
	debug!("{id}: identification block {block}");

	apply_defaults(&mut image, record.kind, record.series_code());

	Ok((image, uid))
}

/// Builds a locked image with any lock primitive.
///
/// # Errors
///
/// Returns [`BuildError::InvalidRecord`] for a malformed record and
/// [`BuildError::EncryptionFailed`] if `cipher` rejects the plaintext.
pub fn build_image_with<C: TagCipher + ?Sized>(
	record: &AmiiboRecord,
	cipher: &C,
	strategy: UidStrategy,
) -> Result<TagImage, BuildError> {
	let (plaintext, uid) = assemble_plaintext(record, strategy)?;
	let locked = cipher.lock(&plaintext, &uid).map_err(BuildError::EncryptionFailed)?;
	debug!("Built image for {}", record.name);
	Ok(locked)
}

/// Builds a locked image with the retail cipher and the default UID strategy
pub fn build_image(record: &AmiiboRecord, keys: &MasterKeys) -> Result<TagImage, BuildError> {
	build_image_with(record, &AmiiboCipher::new(keys), UidStrategy::default())
}

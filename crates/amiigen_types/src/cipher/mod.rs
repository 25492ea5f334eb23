//! Lock and unlock primitive for amiibo tag images.
//!
//! Locking signs the plaintext with two HMAC-SHA256 signatures (tag and data)
//! and encrypts the data section with AES-128-CTR. Both directions operate on
//! the internal section order.
//!
//! The assembler and inspector only depend on the [`TagCipher`] seam, so other
//! implementations can be plugged in for testing or alternative key schemes.

mod keygen;
mod sections;
#[cfg(test)]
pub(crate) mod stub;

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{KeyIvInit, StreamCipher};
use log::trace;

use crate::error::CipherError;
use crate::keys::MasterKeys;
use crate::tag::TagImage;
use crate::tag::layout::{
	IMAGE_SIZE, NTAG_CONFIG, UID,
	constants::{AMIIBO_MAGIC, LOCKED_BITS},
	lock::STATIC_LOCK_BITS,
};
use crate::tag::uid::Uid;

use keygen::{DerivedKeys, derive, hmac_sha256};
use sections::{
	INTERNAL_DATA_HASH, INTERNAL_ENCRYPTED_START, INTERNAL_SIZE, INTERNAL_TAG_HASH, INTERNAL_UID,
	INTERNAL_WRITE_COUNTER, internal_to_tag, tag_to_internal,
};

const HASH_SIZE: usize = 32;

/// Result of unlocking a tag image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlocked {
	/// Decrypted image in tag order
	pub plaintext: TagImage,
	/// UID read from the image
	pub uid: Uid,
	/// Whether the static lock bits of the image are set
	pub is_locked: bool,
}

/// A primitive that turns plaintext images into locked ones and back.
///
/// Implementations must be deterministic: the same plaintext, UID and key
/// material always lock to the same bytes.
pub trait TagCipher {
	/// Writes `uid` into a copy of `plaintext`, then signs and encrypts it
	fn lock(&self, plaintext: &TagImage, uid: &Uid) -> Result<TagImage, CipherError>;

	/// Decrypts `ciphertext` and verifies its signatures
	fn unlock(&self, ciphertext: &TagImage) -> Result<Unlocked, CipherError>;
}

impl<T: TagCipher + ?Sized> TagCipher for &T {
	fn lock(&self, plaintext: &TagImage, uid: &Uid) -> Result<TagImage, CipherError> {
		(**self).lock(plaintext, uid)
	}

	fn unlock(&self, ciphertext: &TagImage) -> Result<Unlocked, CipherError> {
		(**self).unlock(ciphertext)
	}
}

/// Returns `true` if the static lock bits of an image are set
pub fn is_locked(image: &TagImage) -> bool {
	image.field(STATIC_LOCK_BITS) == LOCKED_BITS
}

/// The retail amiibo cipher, driven by a pair of master keys
#[derive(Debug, Clone, Copy)]
pub struct AmiiboCipher<'a> {
	keys: &'a MasterKeys,
}

impl<'a> AmiiboCipher<'a> {
	/// Creates a cipher borrowing the given keys
	pub fn new(keys: &'a MasterKeys) -> Self {
		Self {
			keys,
		}
	}

	/// Returns the keys this cipher uses
	pub fn keys(&self) -> &'a MasterKeys {
		self.keys
	}

	fn derive_all(&self, internal: &[u8]) -> (DerivedKeys, DerivedKeys) {
		(derive(&self.keys.data, internal), derive(&self.keys.tag, internal))
	}
}

impl TagCipher for AmiiboCipher<'_> {
	fn lock(&self, plaintext: &TagImage, uid: &Uid) -> Result<TagImage, CipherError> {
		let mut tag = *plaintext.as_bytes();
		check_magic(&tag)?;
		tag[UID.range()].copy_from_slice(&uid.to_tag_bytes());

		let mut internal = tag_to_internal(&tag);
		let (data_keys, tag_keys) = self.derive_all(&internal);

		let tag_hash = tag_signature(&tag_keys, &internal);
		internal[INTERNAL_TAG_HASH..INTERNAL_TAG_HASH + HASH_SIZE].copy_from_slice(&tag_hash);
		let data_hash = data_signature(&data_keys, &internal);
		internal[INTERNAL_DATA_HASH..INTERNAL_DATA_HASH + HASH_SIZE].copy_from_slice(&data_hash);

		apply_keystream(&data_keys, &mut internal[INTERNAL_ENCRYPTED_START..INTERNAL_TAG_HASH]);
		trace!("Locked image for UID {uid}");

		Ok(TagImage::from(internal_to_tag(&internal)))
	}

	fn unlock(&self, ciphertext: &TagImage) -> Result<Unlocked, CipherError> {
		let tag = ciphertext.as_bytes();
		check_magic(tag)?;

		let mut internal = tag_to_internal(tag);
		let (data_keys, tag_keys) = self.derive_all(&internal);
		apply_keystream(&data_keys, &mut internal[INTERNAL_ENCRYPTED_START..INTERNAL_TAG_HASH]);

		if tag_signature(&tag_keys, &internal)
			!= internal[INTERNAL_TAG_HASH..INTERNAL_TAG_HASH + HASH_SIZE]
		{
			return Err(CipherError::SignatureMismatch {
				which: "tag",
			});
		}
		if data_signature(&data_keys, &internal)
			!= internal[INTERNAL_DATA_HASH..INTERNAL_DATA_HASH + HASH_SIZE]
		{
			return Err(CipherError::SignatureMismatch {
				which: "data",
			});
		}

		let plaintext = TagImage::from(internal_to_tag(&internal));
		let uid = Uid::from_tag_bytes(&plaintext.uid_region());
		trace!("Unlocked image for UID {uid}");

		Ok(Unlocked {
			plaintext,
			uid,
			is_locked: is_locked(ciphertext),
		})
	}
}

fn check_magic(tag: &[u8; IMAGE_SIZE]) -> Result<(), CipherError> {
	let found = tag[NTAG_CONFIG.offset];
	if found != AMIIBO_MAGIC {
		return Err(CipherError::UnrecognizedImage {
			expected: AMIIBO_MAGIC,
			found,
		});
	}
	Ok(())
}

/// Signs the UID, keygen salt and ID block
fn tag_signature(keys: &DerivedKeys, internal: &[u8; IMAGE_SIZE]) -> [u8; HASH_SIZE] {
	hmac_sha256(&keys.hmac_key, &[&internal[INTERNAL_UID..INTERNAL_SIZE]])
}

/// Signs everything from the write counter on, tag signature included
fn data_signature(keys: &DerivedKeys, internal: &[u8; IMAGE_SIZE]) -> [u8; HASH_SIZE] {
	hmac_sha256(&keys.hmac_key, &[&internal[INTERNAL_WRITE_COUNTER..INTERNAL_SIZE]])
}

/// AES-128-CTR with a 128-bit big-endian counter
type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Applies the keystream starting at the IV
fn apply_keystream(keys: &DerivedKeys, data: &mut [u8]) {
	let mut cipher = Aes128Ctr::new(
		GenericArray::from_slice(&keys.aes_key),
		GenericArray::from_slice(&keys.aes_iv),
	);
	cipher.apply_keystream(data);
}

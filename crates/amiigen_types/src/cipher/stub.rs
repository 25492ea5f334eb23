//! Test doubles for the lock primitive.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{TagCipher, Unlocked, is_locked};
use crate::error::CipherError;
use crate::tag::TagImage;
use crate::tag::layout::UID;
use crate::tag::uid::Uid;

/// Writes the UID and otherwise leaves the image untouched; counts calls
#[derive(Debug, Default)]
pub(crate) struct PassthroughCipher {
	pub locks: AtomicUsize,
	pub unlocks: AtomicUsize,
}

impl TagCipher for PassthroughCipher {
	fn lock(&self, plaintext: &TagImage, uid: &Uid) -> Result<TagImage, CipherError> {
		self.locks.fetch_add(1, Ordering::SeqCst);
		let mut image = plaintext.clone();
		image.write_field(UID, &uid.to_tag_bytes());
		Ok(image)
	}

	fn unlock(&self, ciphertext: &TagImage) -> Result<Unlocked, CipherError> {
		self.unlocks.fetch_add(1, Ordering::SeqCst);
		Ok(Unlocked {
			plaintext: ciphertext.clone(),
			uid: Uid::from_tag_bytes(&ciphertext.uid_region()),
			is_locked: is_locked(ciphertext),
		})
	}
}

/// Rejects every image
#[derive(Debug, Default)]
pub(crate) struct RejectingCipher;

impl RejectingCipher {
	pub const ERROR: CipherError = CipherError::SignatureMismatch {
		which: "data",
	};
}

impl TagCipher for RejectingCipher {
	fn lock(&self, _plaintext: &TagImage, _uid: &Uid) -> Result<TagImage, CipherError> {
		Err(Self::ERROR)
	}

	fn unlock(&self, _ciphertext: &TagImage) -> Result<Unlocked, CipherError> {
		Err(Self::ERROR)
	}
}

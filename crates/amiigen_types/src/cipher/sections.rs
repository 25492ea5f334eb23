//! Reordering between tag order and the internal order used for signing.
//!
//! Signatures and key derivation operate on a contiguous "internal" view of the
//! first 0x208 bytes. The NTAG config pages after 0x208 are not part of it and
//! keep their position.

use crate::tag::layout::IMAGE_SIZE;

/// Size of the signed/encrypted part of the image
pub(crate) const INTERNAL_SIZE: usize = 0x208;

/// `(internal offset, tag offset, length)` for every section
const SECTIONS: [(usize, usize, usize); 7] = [
	(0x000, 0x008, 0x008),
	(0x008, 0x080, 0x020),
	(0x028, 0x010, 0x024),
	(0x04C, 0x0A0, 0x168),
	(0x1B4, 0x034, 0x020),
	(0x1D4, 0x000, 0x008),
	(0x1DC, 0x054, 0x02C),
];

/// Data signature, internal order
pub(crate) const INTERNAL_DATA_HASH: usize = 0x008;
/// Write counter bytes, internal order
pub(crate) const INTERNAL_WRITE_COUNTER: usize = 0x029;
/// Start of the encrypted range, internal order
pub(crate) const INTERNAL_ENCRYPTED_START: usize = 0x02C;
/// Tag signature (end of the encrypted range), internal order
pub(crate) const INTERNAL_TAG_HASH: usize = 0x1B4;
/// UID, internal order
pub(crate) const INTERNAL_UID: usize = 0x1D4;
/// Keygen salt, internal order
pub(crate) const INTERNAL_SALT: usize = 0x1E8;

/// Converts an image from tag order to internal order
pub(crate) fn tag_to_internal(tag: &[u8; IMAGE_SIZE]) -> [u8; IMAGE_SIZE] {
	let mut internal = [0u8; IMAGE_SIZE];
	for (intl, at, len) in SECTIONS {
		internal[intl..intl + len].copy_from_slice(&tag[at..at + len]);
	}
	internal[INTERNAL_SIZE..].copy_from_slice(&tag[INTERNAL_SIZE..]);
	internal
}

/// Converts an image from internal order back to tag order
pub(crate) fn internal_to_tag(internal: &[u8; IMAGE_SIZE]) -> [u8; IMAGE_SIZE] {
	let mut tag = [0u8; IMAGE_SIZE];
	for (intl, at, len) in SECTIONS {
		tag[at..at + len].copy_from_slice(&internal[intl..intl + len]);
	}
	tag[INTERNAL_SIZE..].copy_from_slice(&internal[INTERNAL_SIZE..]);
	tag
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tag::layout::{DATA_HASH, ID_BLOCK, KEYGEN_SALT, TAG_HASH, UID};

	#[test]
	fn test_sections_cover_internal_range_once() {
		let mut seen = [0u8; INTERNAL_SIZE];
		for (intl, at, len) in SECTIONS {
			assert!(at + len <= INTERNAL_SIZE);
			for slot in &mut seen[intl..intl + len] {
				*slot += 1;
			}
		}
		assert!(seen.iter().all(|&count| count == 1));
	}

	#[test]
	fn test_reorder_round_trip() {
		let mut tag = [0u8; IMAGE_SIZE];
		for (i, byte) in tag.iter_mut().enumerate() {
			*byte = (i * 31 % 251) as u8;
		}
		assert_eq!(internal_to_tag(&tag_to_internal(&tag)), tag);
	}

	#[test]
	fn test_internal_offsets_match_layout() {
		let mut tag = [0u8; IMAGE_SIZE];
		tag[UID.offset] = 0x04;
		tag[ID_BLOCK.offset] = 0x11;
		tag[KEYGEN_SALT.offset] = 0x22;
		tag[TAG_HASH.offset] = 0x33;
		tag[DATA_HASH.offset] = 0x44;

		let internal = tag_to_internal(&tag);
		assert_eq!(internal[INTERNAL_UID], 0x04);
		assert_eq!(internal[0x1DC], 0x11);
		assert_eq!(internal[INTERNAL_SALT], 0x22);
		assert_eq!(internal[INTERNAL_TAG_HASH], 0x33);
		assert_eq!(internal[INTERNAL_DATA_HASH], 0x44);
	}
}

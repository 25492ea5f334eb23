//! Per-image key derivation.
//!
//! A 64-byte base seed is taken from the image (write counter, UID and keygen
//! salt), mixed with a master key's type string, magic bytes and XOR pad, and
//! expanded with an HMAC-SHA256 counter DRBG into an AES key, an AES IV and an
//! HMAC key.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::keys::MasterKey;

use super::sections::{INTERNAL_SALT, INTERNAL_UID, INTERNAL_WRITE_COUNTER};

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Keys derived for one image and one master key
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct DerivedKeys {
	pub aes_key: [u8; 16],
	pub aes_iv: [u8; 16],
	pub hmac_key: [u8; 16],
}

/// HMAC-SHA256 of the concatenation of `parts`
pub(crate) fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> [u8; 32] {
	let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
	for part in parts {
		mac.update(part);
	}
	let mut out = [0u8; 32];
	out.copy_from_slice(&mac.finalize().into_bytes());
	out
}

/// Builds the 64-byte base seed from an image in internal order
fn base_seed(internal: &[u8]) -> [u8; 64] {
	let mut seed = [0u8; 64];
	seed[0x00..0x02].copy_from_slice(&internal[INTERNAL_WRITE_COUNTER..INTERNAL_WRITE_COUNTER + 2]);
	seed[0x10..0x18].copy_from_slice(&internal[INTERNAL_UID..INTERNAL_UID + 8]);
	seed[0x18..0x20].copy_from_slice(&internal[INTERNAL_UID..INTERNAL_UID + 8]);
	seed[0x20..0x40].copy_from_slice(&internal[INTERNAL_SALT..INTERNAL_SALT + 32]);
	seed
}

/// Mixes the base seed with the master key's constants
fn prepare_seed(key: &MasterKey, base: &[u8; 64]) -> Vec<u8> {
	let mut seed = Vec::with_capacity(14 + 16 + 16 + 32);

	// type string including its terminator
	let type_len = key
		.type_string
		.iter()
		.position(|&b| b == 0)
		.map_or(key.type_string.len(), |nul| nul + 1);
	seed.extend_from_slice(&key.type_string[..type_len]);

	let magic_size = key.magic_size as usize;
	seed.extend_from_slice(&base[..16 - magic_size]);
	seed.extend_from_slice(&key.magic_bytes[..magic_size]);
	seed.extend_from_slice(&base[0x10..0x20]);
	seed.extend(base[0x20..0x40].iter().zip(key.xor_pad.iter()).map(|(b, pad)| b ^ pad));
	seed
}

/// Expands a seed with a 16-bit big-endian counter DRBG
fn drbg(hmac_key: &[u8], seed: &[u8], output: &mut [u8]) {
	for (iteration, chunk) in output.chunks_mut(32).enumerate() {
		let counter = (iteration as u16).to_be_bytes();
		let block = hmac_sha256(hmac_key, &[&counter, seed]);
		chunk.copy_from_slice(&block[..chunk.len()]);
	}
}

/// Derives the image keys for `key` from an image in internal order
pub(crate) fn derive(key: &MasterKey, internal: &[u8]) -> DerivedKeys {
	let seed = prepare_seed(key, &base_seed(internal));
	let mut output = [0u8; 48];
	drbg(&key.hmac_key, &seed, &mut output);

	let mut keys = DerivedKeys {
		aes_key: [0; 16],
		aes_iv: [0; 16],
		hmac_key: [0; 16],
	};
	keys.aes_key.copy_from_slice(&output[0..16]);
	keys.aes_iv.copy_from_slice(&output[16..32]);
	keys.hmac_key.copy_from_slice(&output[32..48]);
	keys
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keys::tests::sample_keys;

	#[test]
	fn test_prepared_seed_length() {
		let keys = sample_keys();
		let base = [0u8; 64];
		// 14 type bytes + 16 seed/magic bytes + 16 uid bytes + 32 salt bytes
		assert_eq!(prepare_seed(&keys.data, &base).len(), 78);
		assert_eq!(prepare_seed(&keys.tag, &base).len(), 78);
	}

	#[test]
	fn test_prepared_seed_mixes_magic_and_pad() {
		let keys = sample_keys();
		let mut base = [0u8; 64];
		base[0] = 0xAB;
		base[1] = 0xCD;
		let seed = prepare_seed(&keys.data, &base);

		// data key carries 14 magic bytes, so 2 write counter bytes lead
		assert_eq!(&seed[..14], b"unfixed infos\0");
		assert_eq!(&seed[14..16], &[0xAB, 0xCD]);
		assert_eq!(&seed[16..30], &keys.data.magic_bytes[..14]);
		assert_eq!(&seed[46..], &keys.data.xor_pad);
	}

	#[test]
	fn test_drbg_is_counter_mode() {
		let mut output = [0u8; 48];
		drbg(b"key", b"seed", &mut output);
		assert_eq!(&output[..32], &hmac_sha256(b"key", &[&[0, 0], b"seed"]));
		assert_eq!(&output[32..], &hmac_sha256(b"key", &[&[0, 1], b"seed"])[..16]);
	}

	#[test]
	fn test_derivation_depends_on_uid() {
		let keys = sample_keys();
		let mut internal = [0u8; 0x21C];
		let a = derive(&keys.data, &internal);
		internal[INTERNAL_UID] = 0x04;
		let b = derive(&keys.data, &internal);
		assert!(a.aes_key != b.aes_key);
		assert!(derive(&keys.tag, &internal) != b);
	}
}

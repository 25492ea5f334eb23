//! Build and inspect round trips through the public API

use amiigen::prelude::*;
use amiigen::tag::layout::{APP_DATA, APP_ID, IMAGE_SIZE};

use crate::fixtures::{CATALOG, VALID_RECORDS, keys};

#[test_log::test]
fn test_every_valid_record_round_trips() {
	let keys = keys();
	let catalog = Catalog::from_json_str(CATALOG).unwrap();

	for record in catalog.iter().filter(|r| r.id().is_ok()) {
		let image = build_image(record, &keys).unwrap();
		assert_eq!(image.as_bytes().len(), IMAGE_SIZE);

		let inspected = inspect_image(image.as_bytes(), &keys).unwrap();
		assert_eq!(inspected.uid, Uid::derive(record, UidStrategy::Direct).unwrap(), "{record}");
		assert_eq!(inspected.fields, encode(record).unwrap().fields(), "{record}");
		assert!(inspected.uid_check_bytes_valid);
		assert!(inspected.locked);
	}
}

#[test_log::test]
fn test_build_is_byte_identical_across_runs() {
	let keys = keys();
	let catalog = Catalog::from_json_str(CATALOG).unwrap();
	let cipher = AmiiboCipher::new(&keys);

	let first = build_batch(&catalog.amiibo, &cipher, UidStrategy::Digest);
	let second = build_batch(&catalog.amiibo, &cipher, UidStrategy::Digest);
	assert_eq!(first, second);
	assert_eq!(first.built(), VALID_RECORDS);
}

#[test_log::test]
fn test_unrecognized_series_boundary() {
	let keys = keys();
	let record =
		AmiiboRecord::new("00000000", "00000000", AmiiboType::Figure, "Unrecognized Series", "Nobody");

	let image = build_image(&record, &keys).unwrap();
	let inspected = inspect_image(image.as_bytes(), &keys).unwrap();
	assert_eq!(inspected.fields.type_code, 0x01);
	assert_eq!(inspected.fields.series_code, 0x00);
	assert_eq!(inspected.fields.format_version, 0x02);

	let plaintext = AmiiboCipher::new(&keys).unlock(&image).unwrap().plaintext;
	assert_eq!(plaintext.id_block(), [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02]);
	assert_eq!(plaintext.field(APP_DATA), &[0u8; 8]);
	assert_eq!(plaintext.field(APP_ID), &[0u8; 4]);
}

#[test_log::test]
fn test_smash_figure_carries_application_id() {
	let keys = keys();
	let record =
		AmiiboRecord::new("00000002", "00020304", AmiiboType::Figure, "Super Smash Bros.", "Smash");

	let image = build_image(&record, &keys).unwrap();
	let plaintext = AmiiboCipher::new(&keys).unlock(&image).unwrap().plaintext;
	assert_eq!(plaintext.id_block()[3], 0x01);
	assert_eq!(plaintext.id_block()[6], 0x01);
	assert_eq!(&plaintext.as_bytes()[0x180..0x184], &[0x00, 0x10, 0x11, 0x0E]);
}

#[test_log::test]
fn test_same_id_different_series() {
	let smash = AmiiboRecord::new("01000000", "00040002", AmiiboType::Figure, "Super Smash Bros.", "A");
	let renamed = AmiiboRecord::new("01000000", "00040002", AmiiboType::Figure, "Super Smash Bros.", "B");
	let kirby = AmiiboRecord::new("01000000", "00040002", AmiiboType::Figure, "Kirby", "A");
	let card = AmiiboRecord::new("01000000", "00040002", AmiiboType::Card, "Super Smash Bros.", "A");

	let block = encode(&smash).unwrap();
	assert_eq!(block, encode(&renamed).unwrap());
	assert_eq!(encode(&kirby).unwrap().as_bytes()[6], 0x0E);
	assert_eq!(encode(&card).unwrap().as_bytes()[3], 0x00);
	assert_ne!(block, encode(&kirby).unwrap());
	assert_ne!(block, encode(&card).unwrap());
}

#[test_log::test]
fn test_inspect_rejects_wrong_sizes() {
	let keys = keys();
	for len in [539, 541] {
		assert_eq!(
			inspect_image(&vec![0u8; len], &keys),
			Err(InspectError::SizeMismatch {
				expected: 540,
				actual: len
			})
		);
	}
}

#[test_log::test]
fn test_inspect_with_other_keys_fails() {
	let keys = keys();
	let record = AmiiboRecord::new("00000000", "00000002", AmiiboType::Figure, "Super Smash Bros.", "Mario");
	let image = build_image(&record, &keys).unwrap();

	let mut blob = crate::fixtures::key_blob();
	blob[0x85] ^= 0x5A;
	let other = MasterKeys::from_combined_bytes(&blob).unwrap();
	assert!(matches!(
		inspect_image(image.as_bytes(), &other),
		Err(InspectError::DecryptionFailed(CipherError::SignatureMismatch { .. }))
	));
}

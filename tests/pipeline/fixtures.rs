//! Shared test data

use std::path::Path;

use amiigen::prelude::*;

fn master_key(seed: u8, type_string: &[u8; 14], magic_size: u8) -> Vec<u8> {
	let mut key = Vec::with_capacity(80);
	key.extend((0..16).map(|i| seed.wrapping_add(i)));
	key.extend_from_slice(type_string);
	key.push(0x00);
	key.push(magic_size);
	key.extend((0..16).map(|i| seed ^ (0xC0 + i)));
	key.extend((0..32).map(|i| seed.wrapping_mul(5).wrapping_add(i * 3)));
	key
}

/// A well-formed but fake 160-byte key blob
pub(crate) fn key_blob() -> Vec<u8> {
	let mut blob = master_key(0x21, b"unfixed infos\0", 14);
	blob.extend(master_key(0x6B, b"locked secret\0", 16));
	blob
}

pub(crate) fn keys() -> MasterKeys {
	MasterKeys::from_combined_bytes(&key_blob()).unwrap()
}

pub(crate) const CATALOG: &str = r#"{
	"amiibo": [
		{ "head": "00000000", "tail": "00000002", "type": "Figure", "amiiboSeries": "Super Smash Bros.", "name": "Mario" },
		{ "head": "01810000", "tail": "024f0502", "type": "Card", "amiiboSeries": "Animal Crossing", "name": "Isabelle" },
		{ "head": "3f000000", "tail": "02380602", "type": "Band", "amiiboSeries": "Super Nintendo World", "name": "Power-Up Band" },
		{ "head": "09d00301", "tail": "02bb0e02", "type": "Yarn", "amiiboSeries": "Yoshi's Woolly World", "name": "Green Yarn Yoshi" },
		{ "head": "00000000", "tail": "00000000", "type": "Figure", "amiiboSeries": "Unrecognized Series", "name": "Nobody" },
		{ "head": "0000000", "tail": "00000002", "type": "Figure", "amiiboSeries": "Super Smash Bros.", "name": "Short head" },
		{ "head": "zzzzzzzz", "tail": "00000002", "type": "Card", "amiiboSeries": "Animal Crossing", "name": "Not hex" }
	]
}"#;

/// Number of well-formed records in [`CATALOG`]
pub(crate) const VALID_RECORDS: usize = 5;

/// Writes keys and catalog into `dir` and returns a matching config file
pub(crate) fn write_workspace(dir: &Path, uid_strategy: &str, verify: bool) -> std::path::PathBuf {
	let key_file = dir.join("key_retail.bin");
	let catalog_file = dir.join("amiibo.json");
	std::fs::write(&key_file, key_blob()).unwrap();
	std::fs::write(&catalog_file, CATALOG).unwrap();

	let config_file = dir.join("amiigen.toml");
	std::fs::write(
		&config_file,
		format!(
			"key_file = {:?}\ncatalog_file = {:?}\nuid_strategy = \"{uid_strategy}\"\nverify = {verify}\n",
			key_file.display().to_string(),
			catalog_file.display().to_string()
		),
	)
	.unwrap();
	config_file
}

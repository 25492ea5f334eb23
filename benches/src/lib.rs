//! Benchmark helper utilities for amiigen
//!
//! Benchmarks run against synthetic key material and records so that no retail
//! key file is needed.

use amiigen_types::keys::MasterKeys;
use amiigen_types::record::AmiiboRecord;
use amiigen_types::tag::AmiiboType;

const SERIES: [&str; 6] = [
	"Super Smash Bros.",
	"Animal Crossing",
	"Legend Of Zelda",
	"Yoshi's Woolly World",
	"Super Nintendo World",
	"Unrecognized Series",
];

fn synthetic_master_key(seed: u8, type_string: &[u8; 14], magic_size: u8) -> Vec<u8> {
	let mut key = Vec::with_capacity(80);
	key.extend((0..16).map(|i| seed.wrapping_add(i)));
	key.extend_from_slice(type_string);
	key.push(0x00);
	key.push(magic_size);
	key.extend((0..16).map(|i| seed ^ i));
	key.extend((0..32).map(|i| seed.wrapping_mul(7).wrapping_add(i)));
	key
}

/// Generates a well-formed but fake key set
pub fn synthetic_keys() -> MasterKeys {
	let mut blob = synthetic_master_key(0x3C, b"unfixed infos\0", 14);
	blob.extend(synthetic_master_key(0x97, b"locked secret\0", 16));
	MasterKeys::from_combined_bytes(&blob).expect("synthetic key blob is well-formed")
}

/// Generates `count` valid records cycling through types and series
pub fn synthetic_records(count: usize) -> Vec<AmiiboRecord> {
	(0..count)
		.map(|i| {
			let kind = AmiiboType::ALL[i % AmiiboType::ALL.len()];
			let series = SERIES[i % SERIES.len()];
			AmiiboRecord::new(
				format!("{:08x}", i * 0x0101),
				format!("{:06x}02", i * 7),
				kind,
				series,
				format!("Record {i}"),
			)
		})
		.collect()
}

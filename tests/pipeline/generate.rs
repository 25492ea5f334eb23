//! Settings-driven generator runs

use amiigen::generator::run;
use amiigen::prelude::*;

use crate::fixtures::{VALID_RECORDS, keys, write_workspace};

#[test_log::test]
fn test_run_with_verification() {
	let dir = tempfile::tempdir().unwrap();
	let config_file = write_workspace(dir.path(), "direct", true);

	let report = run(Some(config_file.as_path())).unwrap();
	assert_eq!(report.batch.outcomes.len(), VALID_RECORDS + 2);
	assert_eq!(report.batch.built(), VALID_RECORDS);
	assert_eq!(report.batch.invalid(), 2);
	assert_eq!(report.verified, VALID_RECORDS);
	assert!(report.verification_failures.is_empty());
	assert!(!report.is_clean());
}

#[test_log::test]
fn test_run_without_verification() {
	let dir = tempfile::tempdir().unwrap();
	let config_file = write_workspace(dir.path(), "digest", false);

	let report = run(Some(config_file.as_path())).unwrap();
	assert_eq!(report.batch.built(), VALID_RECORDS);
	assert_eq!(report.verified, 0);
}

#[test_log::test]
fn test_digest_strategy_changes_images() {
	let catalog = Catalog::from_json_str(crate::fixtures::CATALOG).unwrap();
	let direct = Generator::new(keys(), UidStrategy::Direct, true).generate(&catalog.amiibo);
	let digest = Generator::new(keys(), UidStrategy::Digest, true).generate(&catalog.amiibo);

	assert!(direct.verification_failures.is_empty());
	assert!(digest.verification_failures.is_empty());
	for ((_, a), (_, b)) in direct.batch.images().zip(digest.batch.images()) {
		assert_ne!(a, b);
	}
}

#[test_log::test]
fn test_corrupt_key_file_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	let config_file = write_workspace(dir.path(), "direct", false);
	std::fs::write(dir.path().join("key_retail.bin"), [0u8; 159]).unwrap();

	assert!(matches!(
		run(Some(config_file.as_path())),
		Err(GeneratorError::Keys(KeyError::InvalidKeyMaterial {
			expected: 160,
			actual: 159
		}))
	));
}

#[test_log::test]
fn test_missing_catalog_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let config_file = write_workspace(dir.path(), "direct", false);
	std::fs::remove_file(dir.path().join("amiibo.json")).unwrap();

	assert!(matches!(run(Some(config_file.as_path())), Err(GeneratorError::Catalog(CatalogError::IOError(_)))));
}

#[test_log::test]
fn test_malformed_config_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let config_file = write_workspace(dir.path(), "sideways", false);

	assert!(matches!(run(Some(config_file.as_path())), Err(GeneratorError::Config(_))));
}

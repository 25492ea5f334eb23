//! Runs the build pipeline over a catalog with loaded keys.
//!
//! Key errors are fatal to a run; record errors are not. With `verify` set,
//! every built image is inspected again and compared with what its record
//! should produce.

use std::fmt::Display;
use std::path::Path;

use amiigen_types::batch::{BatchReport, build_batch};
use amiigen_types::cipher::AmiiboCipher;
use amiigen_types::error::{CatalogError, InspectError, KeyError};
use amiigen_types::keys::MasterKeys;
use amiigen_types::record::{AmiiboRecord, Catalog};
use amiigen_types::tag::{DecodedFields, TagImage, Uid, UidStrategy, encode, inspect_image_with};
use log::{info, warn};
use thiserror::Error;

use crate::config::Settings;

/// Errors that end a generator run
#[derive(Debug, Error)]
pub enum GeneratorError {
	/// Settings could not be loaded
	#[error("Invalid settings: {0}")]
	Config(#[from] ::config::ConfigError),

	/// Key material is missing or malformed
	#[error("Cannot load keys: {0}")]
	Keys(#[from] KeyError),

	/// The record catalog could not be read
	#[error("Cannot load catalog: {0}")]
	Catalog(#[from] CatalogError),
}

/// Why a built image failed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
	/// The image could not be inspected
	Inspect(InspectError),
	/// The image carries a different UID
	Uid {
		/// UID derived from the record
		expected: Uid,
		/// UID read from the image
		actual: Uid,
	},
	/// The image carries different identification fields
	Fields {
		/// Fields encoded from the record
		expected: DecodedFields,
		/// Fields read from the image
		actual: DecodedFields,
	},
}

impl Display for Mismatch {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Inspect(e) => write!(f, "{e}"),
			Self::Uid {
				expected,
				actual,
			} => write!(f, "UID {actual}, expected {expected}"),
			Self::Fields {
				..
			} => write!(f, "identification fields differ"),
		}
	}
}

/// A built image that did not verify
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFailure {
	/// Position of the record in the input
	pub index: usize,
	/// What differed
	pub mismatch: Mismatch,
}

/// Outcome of a generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
	/// Per-record build outcomes
	pub batch: BatchReport,
	/// Number of images that were inspected again
	pub verified: usize,
	/// Images that failed verification
	pub verification_failures: Vec<VerificationFailure>,
}

impl GenerationReport {
	/// Returns `true` if every record built and every checked image verified
	pub fn is_clean(&self) -> bool {
		self.batch.failed() == 0 && self.verification_failures.is_empty()
	}
}

/// Builds images for records with a fixed key set
#[derive(Debug, Clone)]
pub struct Generator {
	keys: MasterKeys,
	strategy: UidStrategy,
	verify: bool,
}

impl Generator {
	/// Creates a generator from loaded keys
	pub fn new(keys: MasterKeys, strategy: UidStrategy, verify: bool) -> Self {
		Self {
			keys,
			strategy,
			verify,
		}
	}

	/// Loads the key file named by `settings`
	pub fn from_settings(settings: &Settings) -> Result<Self, GeneratorError> {
		let keys = MasterKeys::open(&settings.key_file)?;
		info!("Loaded keys from {}", settings.key_file.display());
		Ok(Self::new(keys, settings.uid_strategy, settings.verify))
	}

	/// Returns the key set
	pub fn keys(&self) -> &MasterKeys {
		&self.keys
	}

	/// Returns the UID strategy
	pub fn strategy(&self) -> UidStrategy {
		self.strategy
	}

	/// Builds every record and verifies the results if enabled
	pub fn generate(&self, records: &[AmiiboRecord]) -> GenerationReport {
		let cipher = AmiiboCipher::new(&self.keys);
		let batch = build_batch(records, &cipher, self.strategy);

		let mut report = GenerationReport {
			batch,
			..Default::default()
		};
		if !self.verify {
			return report;
		}

		for (outcome, image) in report.batch.images() {
			report.verified += 1;
			if let Err(mismatch) = self.verify_image(&records[outcome.index], image, &cipher) {
				warn!("Record #{} ({}) failed verification: {mismatch}", outcome.index, outcome.name);
				report.verification_failures.push(VerificationFailure {
					index: outcome.index,
					mismatch,
				});
			}
		}
		info!(
			"Verified {} images, {} mismatches",
			report.verified,
			report.verification_failures.len()
		);
		report
	}

	/// Reads a catalog file and builds all of its records
	pub fn generate_catalog(&self, path: impl AsRef<Path>) -> Result<GenerationReport, GeneratorError> {
		let catalog = Catalog::open(path.as_ref())?;
		info!("Loaded {} records from {}", catalog.len(), path.as_ref().display());
		Ok(self.generate(&catalog.amiibo))
	}

	fn verify_image(
		&self,
		record: &AmiiboRecord,
		image: &TagImage,
		cipher: &AmiiboCipher<'_>,
	) -> Result<(), Mismatch> {
		let inspected = inspect_image_with(image.as_bytes(), cipher).map_err(Mismatch::Inspect)?;

		// built images always carry a valid record
		let (Ok(expected), Ok(block)) = (Uid::derive(record, self.strategy), encode(record)) else {
			return Ok(());
		};

		if inspected.uid != expected {
			return Err(Mismatch::Uid {
				expected,
				actual: inspected.uid,
			});
		}
		if inspected.fields != block.fields() {
			return Err(Mismatch::Fields {
				expected: block.fields(),
				actual: inspected.fields,
			});
		}
		Ok(())
	}
}

/// Loads settings and keys, then builds the configured catalog
pub fn run(config_file: Option<&Path>) -> Result<GenerationReport, GeneratorError> {
	let settings = Settings::load(config_file)?;
	Generator::from_settings(&settings)?.generate_catalog(&settings.catalog_file)
}

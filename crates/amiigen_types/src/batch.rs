//! Building many records at once.
//!
//! Records are independent: each one is assembled and locked on its own, and a
//! failing record is reported without affecting the rest. With the
//! `multithreading` feature the records are spread over the rayon thread pool;
//! the output order always matches the input order.

use log::{info, warn};
#[cfg(feature = "multithreading")]
use rayon::prelude::*;

use crate::cipher::TagCipher;
use crate::error::BuildError;
use crate::record::AmiiboRecord;
use crate::tag::{TagImage, UidStrategy, build_image_with};

/// Result of building one record of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
	/// Position of the record in the input
	pub index: usize,
	/// Character name of the record
	pub name: String,
	/// The locked image, or why the record was skipped
	pub result: Result<TagImage, BuildError>,
}

/// Outcomes of a whole batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
	/// One outcome per input record
	pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
	/// Number of records that produced an image
	pub fn built(&self) -> usize {
		self.outcomes.iter().filter(|o| o.result.is_ok()).count()
	}

	/// Number of records rejected during validation
	pub fn invalid(&self) -> usize {
		self.count_errors(|e| matches!(e, BuildError::InvalidRecord(_)))
	}

	/// Number of records the lock primitive rejected
	pub fn encryption_failed(&self) -> usize {
		self.count_errors(|e| matches!(e, BuildError::EncryptionFailed(_)))
	}

	/// Number of records that produced no image
	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.built()
	}

	/// Iterates over the successfully built images
	pub fn images(&self) -> impl Iterator<Item = (&RecordOutcome, &TagImage)> {
		self.outcomes.iter().filter_map(|o| o.result.as_ref().ok().map(|image| (o, image)))
	}

	fn count_errors(&self, predicate: impl Fn(&BuildError) -> bool) -> usize {
		self.outcomes.iter().filter(|o| o.result.as_ref().is_err_and(&predicate)).count()
	}
}

fn build_one<C: TagCipher + ?Sized>(
	index: usize,
	record: &AmiiboRecord,
	cipher: &C,
	strategy: UidStrategy,
) -> RecordOutcome {
	let result = build_image_with(record, cipher, strategy);
	if let Err(e) = &result {
		warn!("Skipping record #{index} ({}): {e}", record.name);
	}
	RecordOutcome {
		index,
		name: record.name.clone(),
		result,
	}
}

/// Builds every record; failures are logged and reported per record
pub fn build_batch<C: TagCipher + Sync + ?Sized>(
	records: &[AmiiboRecord],
	cipher: &C,
	strategy: UidStrategy,
) -> BatchReport {
	#[cfg(feature = "multithreading")]
	let outcomes: Vec<RecordOutcome> = records
		.par_iter()
		.enumerate()
		.map(|(index, record)| build_one(index, record, cipher, strategy))
		.collect();

	#[cfg(not(feature = "multithreading"))]
	let outcomes: Vec<RecordOutcome> = records
		.iter()
		.enumerate()
		.map(|(index, record)| build_one(index, record, cipher, strategy))
		.collect();

	let report = BatchReport {
		outcomes,
	};
	info!(
		"Built {} of {} images ({} invalid, {} encryption failures)",
		report.built(),
		records.len(),
		report.invalid(),
		report.encryption_failed()
	);
	report
}

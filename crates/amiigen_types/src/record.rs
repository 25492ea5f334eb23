//! Catalog metadata records.
//!
//! Records are usually deserialized from an amiiboapi-style JSON document:
//!
//! ```json
//! {
//!   "amiibo": [
//!     {
//!       "head": "00000000",
//!       "tail": "00000002",
//!       "type": "Figure",
//!       "amiiboSeries": "Super Mario Bros.",
//!       "name": "Mario"
//!     }
//!   ]
//! }
//! ```
//!
//! Missing fields deserialize to empty values so that validation, not parsing,
//! reports them per record.

use std::fmt::Display;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, InvalidRecord};
use crate::tag::ident::{AmiiboType, Series};

/// Number of hex digits in `head` and in `tail`
pub const HALF_ID_DIGITS: usize = 8;

/// One character/series/type entry from the metadata catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmiiboRecord {
	/// First half of the amiibo id (8 hex digits)
	pub head: String,
	/// Second half of the amiibo id (8 hex digits)
	pub tail: String,
	/// Physical form
	#[serde(rename = "type")]
	pub kind: AmiiboType,
	/// Series display name, mapped through the series table
	#[serde(rename = "amiiboSeries")]
	pub series: String,
	/// Character display name, never written to the tag
	pub name: String,
}

impl AmiiboRecord {
	/// Creates a record from its parts
	pub fn new(
		head: impl Into<String>,
		tail: impl Into<String>,
		kind: AmiiboType,
		series: impl Into<String>,
		name: impl Into<String>,
	) -> Self {
		Self {
			head: head.into(),
			tail: tail.into(),
			kind,
			series: series.into(),
			name: name.into(),
		}
	}

	/// Validates `head` and `tail` and returns the parsed id
	///
	/// # Errors
	///
	/// Returns [`InvalidRecord`] if either half is not exactly 8 hex digits.
	pub fn id(&self) -> Result<AmiiboId, InvalidRecord> {
		AmiiboId::from_hex(&self.head, &self.tail)
	}

	/// Series looked up in the fixed table
	pub fn series_code(&self) -> Series {
		Series::from_name(&self.series)
	}
}

impl Display for AmiiboRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({}, {}) {}{}", self.name, self.series, self.kind, self.head, self.tail)
	}
}

/// The validated 8-byte amiibo id (`head ++ tail`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmiiboId {
	head: [u8; 4],
	tail: [u8; 4],
}

impl AmiiboId {
	/// Creates an id from raw halves
	pub fn new(head: [u8; 4], tail: [u8; 4]) -> Self {
		Self {
			head,
			tail,
		}
	}

	/// Parses the two 8-digit hex halves
	///
	/// # Errors
	///
	/// Returns [`InvalidRecord`] naming the first malformed half.
	pub fn from_hex(head: &str, tail: &str) -> Result<Self, InvalidRecord> {
		Ok(Self {
			head: parse_half("head", head)?,
			tail: parse_half("tail", tail)?,
		})
	}

	/// Raw `head` bytes
	pub fn head(&self) -> [u8; 4] {
		self.head
	}

	/// Raw `tail` bytes
	pub fn tail(&self) -> [u8; 4] {
		self.tail
	}

	/// `head ++ tail` as 8 bytes
	pub fn to_bytes(&self) -> [u8; 8] {
		let mut bytes = [0u8; 8];
		bytes[..4].copy_from_slice(&self.head);
		bytes[4..].copy_from_slice(&self.tail);
		bytes
	}
}

impl Display for AmiiboId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", hex::encode(self.to_bytes()))
	}
}

fn parse_half(field: &'static str, value: &str) -> Result<[u8; 4], InvalidRecord> {
	let mut bytes = [0u8; 4];
	hex::decode_to_slice(value, &mut bytes).map_err(|_| InvalidRecord {
		field,
		value: value.to_owned(),
		expected_digits: HALF_ID_DIGITS,
	})?;
	Ok(bytes)
}

/// A catalog document: `{"amiibo": [records...]}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
	/// Catalog entries in document order
	pub amiibo: Vec<AmiiboRecord>,
}

impl Catalog {
	/// Parses a catalog from a JSON string
	pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Parses a catalog from a reader
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
		Ok(serde_json::from_reader(reader)?)
	}

	/// Opens and parses a catalog file
	pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(std::io::BufReader::new(file))
	}

	/// Number of records
	pub fn len(&self) -> usize {
		self.amiibo.len()
	}

	/// Returns `true` if the catalog has no records
	pub fn is_empty(&self) -> bool {
		self.amiibo.is_empty()
	}

	/// Iterates over the records
	pub fn iter(&self) -> impl Iterator<Item = &AmiiboRecord> {
		self.amiibo.iter()
	}
}

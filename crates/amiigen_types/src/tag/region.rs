//! Type and series specific defaults for the application area.
//!
//! Runs after the assembler has zero-filled the image; only the
//! [`APPLICATION_FIELDS`] may be touched.

use std::fmt::Display;

use log::debug;

use super::TagImage;
use super::ident::{AmiiboType, Series};
use super::layout::{APP_ID, APPLICATION_FIELDS, Field, app, constants::SMASH_APP_ID};

/// Default pattern chosen for a `(type, series)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionPreset {
	/// Clear the country code and write counter of an Animal Crossing card
	AnimalCrossingCard,
	/// Write the Super Smash Bros. application ID of a figure
	SmashFigure,
	/// Clear the baseline shared by bands, yarn and blocks
	TypeBaseline,
	/// Leave the application area zeroed
	None,
}

impl RegionPreset {
	/// Picks the preset for a type and series
	pub fn select(kind: AmiiboType, series: Series) -> Self {
		match (kind, series) {
			(AmiiboType::Card, Series::AnimalCrossing) => Self::AnimalCrossingCard,
			(AmiiboType::Figure, Series::SuperSmashBros) => Self::SmashFigure,
			(AmiiboType::Band | AmiiboType::Yarn | AmiiboType::Block, _) => Self::TypeBaseline,
			_ => Self::None,
		}
	}

	/// Writes the preset into a plaintext image
	pub fn apply(self, image: &mut TagImage) {
		let mut area = ApplicationArea::new(image);
		match self {
			Self::AnimalCrossingCard => {
				area.clear(app::COUNTRY_CODE);
				area.clear(app::WRITE_COUNTER);
			}
			Self::SmashFigure => area.write(APP_ID, &SMASH_APP_ID),
			Self::TypeBaseline => area.clear(app::TYPE_BASELINE),
			Self::None => {}
		}
	}
}

impl Display for RegionPreset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AnimalCrossingCard => write!(f, "Animal Crossing card"),
			Self::SmashFigure => write!(f, "Smash Bros. figure"),
			Self::TypeBaseline => write!(f, "type baseline"),
			Self::None => write!(f, "none"),
		}
	}
}

/// Applies the defaults for `(kind, series)` and returns the preset used
pub fn apply_defaults(image: &mut TagImage, kind: AmiiboType, series: Series) -> RegionPreset {
	let preset = RegionPreset::select(kind, series);
	debug!("Applying region preset '{preset}' for {kind} / {series}");
	preset.apply(image);
	preset
}

/// Write guard restricted to the application fields
struct ApplicationArea<'a> {
	image: &'a mut TagImage,
}

impl<'a> ApplicationArea<'a> {
	fn new(image: &'a mut TagImage) -> Self {
		Self {
			image,
		}
	}

	fn write(&mut self, field: Field, bytes: &[u8]) {
		assert!(
			APPLICATION_FIELDS.iter().any(|area| area.contains(&field)),
			"{field} lies outside the application area"
		);
		self.image.write_field(field, bytes);
	}

	fn clear(&mut self, field: Field) {
		self.write(field, &vec![0u8; field.len]);
	}
}

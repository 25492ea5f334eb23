#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `amiigen` builds device-ready NTAG215 amiibo images from catalog records,
//! without a template dump, and reads their identification fields back.
//!
//! The tag model and pipeline live in [`amiigen_types`] and are re-exported
//! here; this crate adds layered [`config`] settings and the [`generator`] that
//! ties keys, catalog and verification together.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use amiigen::prelude::*;
//!
//! let settings = Settings::load(Some(Path::new("amiigen.toml"))).unwrap();
//! let report = Generator::from_settings(&settings)
//! 	.unwrap()
//! 	.generate_catalog(&settings.catalog_file)
//! 	.unwrap();
//! println!("{} images built", report.batch.built());
//! ```

pub use amiigen_types::*;

pub mod config;
pub mod generator;

/// `use amiigen::prelude::*;` to import commonly used items.
pub mod prelude;

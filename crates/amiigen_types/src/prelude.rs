//! Prelude module for `amiigen_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```no_run
//! use amiigen_types::prelude::*;
//!
//! let keys = MasterKeys::open("key_retail.bin").unwrap();
//! let record = AmiiboRecord::new("00000000", "00000002", AmiiboType::Figure, "Super Smash Bros.", "Mario");
//! let image = build_image(&record, &keys).unwrap();
//! let inspected = inspect_image(image.as_bytes(), &keys).unwrap();
//! ```

#[doc(inline)]
pub use crate::batch::{BatchReport, RecordOutcome, build_batch};

#[doc(inline)]
pub use crate::cipher::{AmiiboCipher, TagCipher, Unlocked};

#[doc(inline)]
pub use crate::error::{
	BuildError, CatalogError, CipherError, CodecError, InspectError, InvalidRecord, KeyError,
};

#[doc(inline)]
pub use crate::keys::{MasterKey, MasterKeys};

#[doc(inline)]
pub use crate::record::{AmiiboId, AmiiboRecord, Catalog};

#[doc(inline)]
pub use crate::tag::{
	AmiiboType, DecodedFields, IdentificationBlock, InspectedTag, Series, TagImage, Uid,
	UidStrategy, build_image, build_image_with, decode, encode, inspect_image, inspect_image_with,
};

// Re-export the tag module for layout-level access
#[doc(inline)]
pub use crate::tag;

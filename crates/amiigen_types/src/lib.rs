//! This crate provides the tag image model and the build/inspect pipeline for `amiigen`.
//!
//! # Modules
//!
//! - **tag**: the NTAG215 byte map, identification block codec, UID derivation,
//!   region defaults, and the assembler and inspector built on them
//! - **record**: catalog records and JSON catalogs
//! - **keys**: the 160-byte master key blob
//! - **cipher**: the lock/unlock seam and the retail amiibo cipher
//! - **batch**: independent per-record builds, optionally on rayon
//!
//! # Examples
//!
//! ```no_run
//! use amiigen_types::prelude::*;
//!
//! let keys = MasterKeys::open("key_retail.bin").unwrap();
//! let catalog = Catalog::open("amiibo.json").unwrap();
//! let report = build_batch(&catalog.amiibo, &AmiiboCipher::new(&keys), UidStrategy::Direct);
//! println!("{} built, {} skipped", report.built(), report.failed());
//! ```

pub mod batch;
pub mod cipher;
pub mod error;
pub mod keys;
pub mod record;
pub mod tag;

/// `use amiigen_types::prelude::*;` to import commonly used items.
pub mod prelude;

//! Generator settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `AMIIGEN_*` environment variables (`AMIIGEN_KEY_FILE`, `AMIIGEN_VERIFY`, ...).

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use amiigen_types::tag::UidStrategy;
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "AMIIGEN";

/// Default key file name
pub const DEFAULT_KEY_FILE: &str = "key_retail.bin";

/// Default catalog file name
pub const DEFAULT_CATALOG_FILE: &str = "amiibo.json";

/// Settings for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// Path of the 160-byte combined key blob
	pub key_file: PathBuf,
	/// Path of the JSON record catalog
	pub catalog_file: PathBuf,
	/// How UIDs are derived from amiibo ids
	pub uid_strategy: UidStrategy,
	/// Inspect every built image and compare it with its record
	pub verify: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			key_file: PathBuf::from(DEFAULT_KEY_FILE),
			catalog_file: PathBuf::from(DEFAULT_CATALOG_FILE),
			uid_strategy: UidStrategy::default(),
			verify: false,
		}
	}
}

impl Settings {
	/// Loads defaults, the optional file at `path` and the environment.
	///
	/// A missing file is not an error; a malformed one is.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let mut builder = defaults()?;
		if let Some(path) = path {
			builder = builder.add_source(File::from(path).required(false));
		}
		builder.add_source(environment()).build()?.try_deserialize()
	}

	/// Parses settings from a TOML document on top of the defaults.
	///
	/// The environment is not consulted.
	pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
		defaults()?.add_source(File::from_str(toml, FileFormat::Toml)).build()?.try_deserialize()
	}

	/// Like [`Settings::from_toml_str`], with `vars` standing in for the process
	/// environment
	pub fn from_toml_str_with_env(
		toml: &str,
		vars: impl IntoIterator<Item = (String, String)>,
	) -> Result<Self, ConfigError> {
		defaults()?
			.add_source(File::from_str(toml, FileFormat::Toml))
			.add_source(environment().source(Some(vars.into_iter().collect())))
			.build()?
			.try_deserialize()
	}
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
	Config::builder()
		.set_default("key_file", DEFAULT_KEY_FILE)?
		.set_default("catalog_file", DEFAULT_CATALOG_FILE)?
		.set_default("uid_strategy", "direct")?
		.set_default("verify", false)
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

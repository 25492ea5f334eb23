//! End-to-end tests for `amiigen`

mod build;
mod fixtures;
mod generate;

//! NTAG215 amiibo tag images.
//!
//! [`layout`] is the byte map every other module writes through. Images are
//! assembled as plaintext by [`assembler`], locked by a
//! [`TagCipher`](crate::cipher::TagCipher), and read back by [`inspector`].

pub mod assembler;
pub mod ident;
mod image;
pub mod inspector;
pub mod layout;
pub mod region;
pub mod uid;

pub use assembler::{assemble_plaintext, build_image, build_image_with};
pub use ident::{AmiiboType, DecodedFields, IdentificationBlock, Series, decode, encode};
pub use image::TagImage;
pub use inspector::{InspectedTag, inspect_image, inspect_image_with};
pub use region::{RegionPreset, apply_defaults};
pub use uid::{Uid, UidStrategy};

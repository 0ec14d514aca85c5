#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{CatalogEntry, CatalogError, DeckCatalog};
pub use error::Error;

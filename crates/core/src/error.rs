use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{CardError, DeckError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

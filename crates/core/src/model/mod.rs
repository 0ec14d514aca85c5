mod app_state;
mod card;
mod deck;
mod ids;
mod lenient;
mod progress;

pub use ids::{DeckKey, ParseKeyError};

pub use app_state::{AppState, Theme};
pub use card::{Card, CardError};
pub use deck::{Deck, DeckError};
pub use progress::{CardStatus, DeckProgress, Grade};

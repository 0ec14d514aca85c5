#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use flash_core::DeckCatalog;
use flash_core::model::{Card, Deck, DeckKey};
use services::ProgressStore;
use storage::repository::{InMemoryRepository, StateSlotRepository, StorageError};

pub fn key(raw: &str) -> DeckKey {
    DeckKey::parse(raw).unwrap()
}

pub fn deck(title: &str, cards: usize) -> Deck {
    let cards = (1..=cards)
        .map(|i| Card::new(format!("{title} Q{i}"), format!("{title} A{i}")).unwrap())
        .collect();
    Deck::new(title, cards).unwrap()
}

/// `ml` (3 cards, default) and `math` (10 cards).
pub fn catalog() -> Arc<DeckCatalog> {
    Arc::new(
        DeckCatalog::new(vec![(key("ml"), deck("ML", 3)), (key("math"), deck("Math", 10))])
            .unwrap(),
    )
}

/// A store plus a handle on its backing slots.
pub fn store() -> (ProgressStore, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    (ProgressStore::new(Arc::new(repo.clone())), repo)
}

/// Storage that is always offline.
pub struct FailingRepository;

#[async_trait]
impl StateSlotRepository for FailingRepository {
    async fn read_slot(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("storage offline".into()))
    }

    async fn write_slot(&self, _key: &str, value: &str) -> Result<(), StorageError> {
        Err(StorageError::QuotaExceeded {
            len: value.len(),
            limit: 0,
        })
    }
}

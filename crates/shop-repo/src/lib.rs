//! In-memory adapters for the shop ports.

pub mod memory;

use memory::{InMemoryClientRepo, InMemoryOrderRepo, InMemoryProductRepo};

/// One adapter per port. Clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct Repos {
    pub clients: InMemoryClientRepo,
    pub products: InMemoryProductRepo,
    pub orders: InMemoryOrderRepo,
}

pub fn build_repos() -> Repos {
    Repos::default()
}

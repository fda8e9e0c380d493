//! Review store adapters

mod lock;
mod memory;

pub use memory::InMemoryReviewStore;

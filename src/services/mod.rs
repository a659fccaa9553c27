// Service exports
pub mod roster_store;

pub use roster_store::{RosterStore, RosterStoreError};

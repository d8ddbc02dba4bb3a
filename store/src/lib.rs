pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod sqlite;
pub mod traits;

pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{PlayerRow, RosterRow, ShotRow};
pub use sqlite::SqliteStore;
pub use traits::{MatchRegistry, PlayerDirectory, ShotStore};

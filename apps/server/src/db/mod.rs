//! Database layer - repositories and data access

pub mod directory;
pub mod memory;
pub mod search;
pub mod store;
pub mod traits;

pub use directory::PostgresDirectoryRepository;
pub use memory::{Dataset, InMemoryEmployeeStore};
pub use store::PostgresEmployeeStore;
pub use traits::{CampusFilter, DirectoryStore, EmployeeSearchStore};

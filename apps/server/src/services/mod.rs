//! Service layer - business logic between the HTTP handlers and storage

pub mod directory;
pub mod search;

pub use directory::DirectoryService;
pub use search::SearchService;

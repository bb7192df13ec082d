#![forbid(unsafe_code)]

pub mod repository;
pub mod text;

pub use repository::{InMemoryRepository, Storage, StorageError};
pub use text::{CatalogSource, TextFileRepository, TextInitError};

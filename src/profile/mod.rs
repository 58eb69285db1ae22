//! User data snapshot and its storage

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{ProfileRepository, ProfileStorage, StorageError};

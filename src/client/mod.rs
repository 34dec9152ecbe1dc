// Client exports
pub mod favorites;
pub mod render;
pub mod session;
pub mod storage;

pub use favorites::{FavoritesStore, FAVORITES_STORAGE_KEY};
pub use session::{SearchSession, SearchState, ViewMode, FETCH_FAILED_MESSAGE};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};

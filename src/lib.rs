pub mod codec;
pub mod error;
pub mod persisted;
pub mod preferences;
pub mod storage;
pub mod store;

pub use error::{PreferenceError, StorageError};
pub use persisted::{Persisted, Subscription};
pub use storage::{InMemoryStorage, PreferenceStorage};
pub use store::PreferenceStore;

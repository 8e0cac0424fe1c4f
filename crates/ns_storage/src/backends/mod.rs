pub mod file;
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[cfg(feature = "sqlite")]
pub use sqlite::SQLiteStorage;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;
pub mod storage;
pub mod types;

pub use config::Settings;
pub use error::{Error, Result};
pub use models::RemoteSummarizer;
pub use source::ArticleSource;
pub use storage::DigestStore;
pub use types::{Article, Digest, DigestItem, Summary};

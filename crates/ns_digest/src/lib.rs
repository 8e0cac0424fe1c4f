pub mod builder;
pub mod scheduler;
pub mod service;

pub use builder::{DigestBuilder, DigestOutcome, SkippedArticle};
pub use scheduler::{next_run_delay, DailyScheduler};
pub use service::DigestService;

pub mod prelude {
    pub use super::{DailyScheduler, DigestBuilder, DigestOutcome, DigestService, SkippedArticle};
    pub use ns_core::{Digest, DigestItem, Error, Result};
}

pub mod frequency;
pub mod models;
pub mod service;
pub mod splitter;

pub use frequency::FrequencySummarizer;
pub use models::create_remote;
pub use service::SummarizationService;
pub use splitter::split_sentences;

pub mod prelude {
    pub use super::models::{create_remote, DummyModel, OpenAiModel};
    pub use super::{FrequencySummarizer, SummarizationService};
    pub use ns_core::{Error, RemoteSummarizer, Result, Summary};
}

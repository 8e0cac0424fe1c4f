use std::sync::Arc;

use ns_core::ArticleSource;
use ns_digest::DigestService;
use ns_inference::SummarizationService;

pub struct AppState {
    pub summarizer: SummarizationService,
    pub digests: Arc<DigestService>,
    pub source: Arc<dyn ArticleSource>,
    pub default_country: String,
}

use std::sync::Arc;

use ns_core::{RemoteSummarizer, Result, Settings};

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Builds the remote summarizer described by `settings`.
///
/// Returns `None` when no API key is configured; the capability is then
/// considered absent and never invoked.
pub fn create_remote(settings: &Settings) -> Result<Option<Arc<dyn RemoteSummarizer>>> {
    if !settings.remote_configured() {
        tracing::info!("No OpenAI API key configured, using frequency summarizer only");
        return Ok(None);
    }
    let model = OpenAiModel::from_settings(settings)?;
    tracing::info!("🧠 Remote summarizer configured (using {})", model.name());
    Ok(Some(Arc::new(model)))
}

use async_trait::async_trait;

#[async_trait]
pub trait RemoteSummarizer: Send + Sync {
    /// Name of the backing model, used in logs
    fn name(&self) -> &str;

    /// Ask the remote model for a summary of at most `max_sentences` sentences.
    ///
    /// Never fails: transport errors, timeouts and empty answers all yield `None`.
    async fn try_summarize(&self, text: &str, max_sentences: usize) -> Option<String>;
}

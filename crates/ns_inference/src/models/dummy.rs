use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ns_core::RemoteSummarizer;

/// Remote stand-in that answers with a fixed reply, or fails when it has none.
/// Counts how often it was asked.
pub struct DummyModel {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel")
            .field("reply", &self.reply)
            .field("calls", &self.calls())
            .finish()
    }
}

impl DummyModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSummarizer for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn try_summarize(&self, _text: &str, _max_sentences: usize) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .as_deref()
            .map(str::trim)
            .filter(|reply| !reply.is_empty())
            .map(str::to_string)
    }
}

//! Token accounting for a conversation.

use std::collections::BTreeMap;

use crate::completion::Reply;
use crate::TokenUsage;

/// Replies served by one model and the tokens they cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelUsage {
    pub replies: u64,
    pub usage: TokenUsage,
}

/// Sums the usage reported by successful replies, keyed by the model that
/// answered. Failed completions report nothing and are never recorded.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    by_model: BTreeMap<String, ModelUsage>,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reply: &Reply) {
        let entry = self.by_model.entry(reply.model.clone()).or_default();
        entry.replies += 1;
        entry.usage = entry.usage.combine(&reply.usage);
    }

    /// Usage summed over every model.
    pub fn total(&self) -> TokenUsage {
        self.by_model
            .values()
            .fold(TokenUsage::default(), |acc, m| acc.combine(&m.usage))
    }

    pub fn replies(&self) -> u64 {
        self.by_model.values().map(|m| m.replies).sum()
    }

    /// Per-model breakdown, ordered by model name.
    pub fn models(&self) -> impl Iterator<Item = (&str, &ModelUsage)> {
        self.by_model.iter().map(|(model, usage)| (model.as_str(), usage))
    }
}

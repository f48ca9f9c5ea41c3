//! Process-wide model selection: the operator's preference and the resolved model.
//!
//! One owned cell shared by every chat task. Writers hold the lock only to swap values;
//! provider calls happen outside it. Writes computed for an older preference are dropped.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Snapshot of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub preference: String,
    /// `None` until resolved, and again after the preference changes or the model is not found.
    pub resolved: Option<String>,
}

/// Shared handle to the model selection. Clones refer to the same cell.
#[derive(Debug, Clone)]
pub struct ModelState {
    inner: Arc<RwLock<ModelSelection>>,
}

impl ModelState {
    pub fn new(preference: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ModelSelection {
                preference: preference.into(),
                resolved: None,
            })),
        }
    }

    pub async fn snapshot(&self) -> ModelSelection {
        self.inner.read().await.clone()
    }

    pub async fn preference(&self) -> String {
        self.inner.read().await.preference.clone()
    }

    pub async fn resolved(&self) -> Option<String> {
        self.inner.read().await.resolved.clone()
    }

    /// Sets a new preference and clears the resolved model so the next call re-resolves.
    pub async fn set_preference(&self, preference: impl Into<String>) {
        let preference = preference.into();
        let mut guard = self.inner.write().await;
        info!(
            from = %guard.preference,
            to = %preference,
            "Model preference changed"
        );
        guard.preference = preference;
        guard.resolved = None;
    }

    /// Records `model` as resolved if the preference is still `for_preference`. Returns whether it was applied.
    pub async fn record_resolved(&self, for_preference: &str, model: &str) -> bool {
        let mut guard = self.inner.write().await;
        if guard.preference != for_preference {
            debug!(
                stale_preference = %for_preference,
                current_preference = %guard.preference,
                model = %model,
                "Dropping resolution computed for an older preference"
            );
            return false;
        }
        guard.resolved = Some(model.to_string());
        true
    }

    /// Clears the resolved model if the preference is still `for_preference`.
    pub async fn invalidate(&self, for_preference: &str) {
        let mut guard = self.inner.write().await;
        if guard.preference == for_preference {
            guard.resolved = None;
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::bank::Bank;
use crate::models::stats::{BoardroomView, LaunchPhase, ProtocolOverview};
use crate::traits::event_handler::DashboardEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn DashboardEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn DashboardEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardEventHandler for CompositeEventHandler {
    async fn on_banks_refreshed(&self, banks: &[Bank]) {
        for handler in &self.handlers {
            handler.on_banks_refreshed(banks).await;
        }
    }

    async fn on_overview(&self, overview: &ProtocolOverview) {
        for handler in &self.handlers {
            handler.on_overview(overview).await;
        }
    }

    async fn on_phase_change(&self, phase: LaunchPhase) {
        for handler in &self.handlers {
            handler.on_phase_change(phase).await;
        }
    }

    async fn on_boardroom(&self, view: &BoardroomView) {
        for handler in &self.handlers {
            handler.on_boardroom(view).await;
        }
    }

    async fn on_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.on_error(error).await;
        }
    }
}

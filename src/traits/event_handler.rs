use async_trait::async_trait;

use crate::models::bank::Bank;
use crate::models::stats::{BoardroomView, LaunchPhase, ProtocolOverview};

/// Handler for dashboard state events
#[async_trait]
pub trait DashboardEventHandler: Send + Sync {
    /// Called after a session-ready refresh replaced the bank list
    async fn on_banks_refreshed(&self, banks: &[Bank]);

    /// Called once per poll tick with the freshly derived overview
    async fn on_overview(&self, overview: &ProtocolOverview);

    /// Called when the launch gate transitions, once per transition
    async fn on_phase_change(&self, phase: LaunchPhase);

    /// Called once per poll tick with the boardroom view-model
    async fn on_boardroom(&self, view: &BoardroomView);

    /// Handle error - using reference to avoid cloning issues
    async fn on_error(&self, error: &anyhow::Error);
}

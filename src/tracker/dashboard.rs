//src/tracker/dashboard.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy::primitives::Address;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::tracker::gate::LaunchGate;
use crate::tracker::overview;
use crate::tracker::resolve::resolve_banks;
use crate::tracker::store::BankStore;
use crate::traits::chain_session::ChainSession;
use crate::traits::event_handler::DashboardEventHandler;
use crate::traits::stats_provider::StatsProvider;

/// Main dashboard tracker.
///
/// Owns the published bank list and the launch gate, reacts to the
/// session-ready event, and drives the poll loop that rebuilds the derived
/// view-models.
pub struct DashboardTracker {
    session: Arc<dyn ChainSession>,
    stats: Arc<dyn StatsProvider>,
    event_handler: Arc<dyn DashboardEventHandler>,
    store: Arc<BankStore>,
    gate: Arc<Mutex<LaunchGate>>,
    operator: Address,
    allocation_period: chrono::Duration,
}

impl DashboardTracker {
    /// Create a new dashboard tracker
    pub fn new(
        config: &Config,
        session: Arc<dyn ChainSession>,
        stats: Arc<dyn StatsProvider>,
        event_handler: Arc<dyn DashboardEventHandler>,
    ) -> Self {
        Self {
            session,
            stats,
            event_handler,
            store: Arc::new(BankStore::new()),
            gate: Arc::new(Mutex::new(LaunchGate::new(config.boardroom_launches_at))),
            operator: config.operator,
            allocation_period: config.allocation_period,
        }
    }

    /// The published bank list
    pub fn store(&self) -> Arc<BankStore> {
        self.store.clone()
    }

    /// Input event: the provider session became usable.
    ///
    /// Resolves the pool set once and atomically replaces the published
    /// bank list. The poll timer never re-runs resolution; call this again
    /// only when a new session appears. Returns the number of published
    /// banks so the caller can decide how to report failures.
    pub async fn session_ready(&self) -> anyhow::Result<usize> {
        if !self.session.is_connected() {
            debug!("session-ready event with a disconnected session, ignoring");
            return Ok(0);
        }

        let banks = resolve_banks(self.session.as_ref()).await?;
        let count = banks.len();
        info!("session ready, publishing {} banks", count);

        self.store.replace(banks).await;
        let snapshot = self.store.snapshot().await;
        self.event_handler.on_banks_refreshed(&snapshot).await;
        Ok(count)
    }

    /// One poll tick: advance the launch gate, rebuild the derived
    /// view-models, and hand everything to the event handler.
    pub async fn tick(&self) {
        let now = Utc::now();

        let (transition, phase, launches_at) = {
            let mut gate = self.gate.lock().await;
            (gate.poll(now), gate.phase(), gate.launches_at())
        };
        if let Some(new_phase) = transition {
            self.event_handler.on_phase_change(new_phase).await;
        }

        let overview = overview::build_overview(self.stats.as_ref(), self.allocation_period).await;
        let cash_scaling_factor = overview.cash_scaling_factor.clone();
        self.event_handler.on_overview(&overview).await;

        let view = overview::boardroom_view(
            phase,
            launches_at,
            now,
            self.stats.as_ref(),
            self.operator,
            cash_scaling_factor,
        )
        .await;
        self.event_handler.on_boardroom(&view).await;
    }

    /// Start polling-based tracking
    pub async fn start_tracking_polling(&self, tick_interval_ms: u64) {
        info!("Starting polling-based tracking with interval: {}ms", tick_interval_ms);

        let mut timedelta = Instant::now();

        // Initial tick so the dashboard renders before the first interval
        self.tick().await;

        loop {
            let sleep_ms = tick_interval_ms as i128 - timedelta.elapsed().as_millis() as i128;
            if sleep_ms > 0 {
                tokio::time::sleep(Duration::from_millis(sleep_ms as u64)).await;
            }
            timedelta = Instant::now();

            let started = Instant::now();
            self.tick().await;
            debug!("tick completed in {:?}", started.elapsed());
        }
    }
}

// Implement Clone for DashboardTracker
impl Clone for DashboardTracker {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            stats: self.stats.clone(),
            event_handler: self.event_handler.clone(),
            store: self.store.clone(),
            gate: self.gate.clone(),
            operator: self.operator,
            allocation_period: self.allocation_period,
        }
    }
}

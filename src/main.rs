use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use seigniorage_tracker::config::{Config, Deployments};
use seigniorage_tracker::handlers::console::ConsoleEventHandler;
use seigniorage_tracker::providers::rpc::{http_provider, RpcChainSession, RpcStatsProvider};
use seigniorage_tracker::providers::static_session::{StaticChainSession, StaticStatsProvider};
use seigniorage_tracker::tracker::dashboard::DashboardTracker;
use seigniorage_tracker::traits::chain_session::ChainSession;
use seigniorage_tracker::traits::event_handler::DashboardEventHandler;
use seigniorage_tracker::traits::stats_provider::StatsProvider;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = Config::from_env()?;
        let deployments = Deployments::mainnet()?;

        info!("Initializing dashboard tracker v{}...", seigniorage_tracker::VERSION);
        info!("RPC URL: {}", config.rpc_url);
        info!("Operator: {}", config.operator);
        info!("Boardroom launches at: {}", config.boardroom_launches_at);

        let backend = std::env::var("TRACKER_BACKEND").unwrap_or_else(|_| "rpc".to_string());

        let (session, stats): (Arc<dyn ChainSession>, Arc<dyn StatsProvider>) =
            if backend == "static" {
                info!("Using static in-memory backend");
                (
                    Arc::new(StaticChainSession::sample()),
                    Arc::new(StaticStatsProvider::new()),
                )
            } else {
                let provider = http_provider(&config.rpc_url)?;
                (
                    Arc::new(RpcChainSession::new(provider.clone(), deployments.clone())),
                    Arc::new(RpcStatsProvider::new(provider, &deployments)?),
                )
            };

        let handler: Arc<dyn DashboardEventHandler> = Arc::new(ConsoleEventHandler::new());
        let tracker = Arc::new(DashboardTracker::new(
            &config,
            session,
            stats,
            handler.clone(),
        ));

        // The provider is usable as soon as it is built; fire the one-shot
        // session-ready event that resolves and publishes the bank list.
        match tracker.session_ready().await {
            Ok(count) => info!("Resolved {} banks", count),
            Err(e) => {
                error!("Bank resolution failed: {:#}", e);
                handler.on_error(&e).await;
            }
        }

        let tracker_for_task = tracker.clone();
        let tick_interval = config.poll_interval_ms;
        tokio::spawn(async move {
            tracker_for_task.start_tracking_polling(tick_interval).await;
        });

        info!("Dashboard tracker is running. Press Ctrl+C to stop.");

        // Keep the program running
        tokio::signal::ctrl_c().await?;

        info!("Shutting down...");

        Ok(())
    })
}

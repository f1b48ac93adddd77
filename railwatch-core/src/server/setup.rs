use crate::board::RecordBuilder;
use crate::broadcast::BroadcastHub;
use crate::conf::ValidatedConfig;
use crate::scheduler::{SchedulerSettings, UpdateScheduler, now};
use crate::server::pid;
use crate::server::routes::router;
use crate::server::state::AppState;
use crate::shutdown::ShutdownHandle;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::source::{HttpFetcher, TroubleTableExtractor};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Run the service on its own runtime until Ctrl-C or SIGTERM.
pub fn run(config: ValidatedConfig) -> Result<()> {
    use tokio::runtime::Builder;

    let pid_file = config.config.server.pid_file.clone();

    // Attempt to write pid file (best-effort)
    if let Some(pid_file) = &pid_file {
        match pid::write_pid(pid_file) {
            Ok(()) => tracing::info!(pid_file = %pid_file.display(), "pid file written"),
            Err(e) => {
                tracing::warn!(error = %e, pid_file = %pid_file.display(), "failed to write pid file; continuing")
            }
        }
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let shutdown = ShutdownHandle::new();
    let result = runtime.block_on(async {
        tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                if let Err(e) = shutdown.install_signal_handler().await {
                    tracing::error!(error = %e, "failed to install signal handler");
                }
            }
        });

        serve(config, shutdown).await
    });

    if let Some(pid_file) = &pid_file {
        pid::remove_pid(pid_file);
    }
    result
}

/// Bind the configured address and serve until `shutdown` fires.
pub async fn serve(config: ValidatedConfig, shutdown: ShutdownHandle) -> Result<()> {
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    serve_on(listener, config, shutdown).await
}

/// Serve on an already bound listener.
///
/// Starts the update loop, runs the HTTP server, and on shutdown waits for
/// the update loop to stop before returning.
pub async fn serve_on(
    listener: TcpListener,
    config: ValidatedConfig,
    shutdown: ShutdownHandle,
) -> Result<()> {
    let settings = SchedulerSettings::from_config(&config);
    let board = &config.config.board;

    let store = Arc::new(
        SnapshotStore::new(Snapshot::placeholder(now(settings.timezone)))
            .context("failed to encode placeholder snapshot")?,
    );
    let hub = BroadcastHub::new();
    let fetcher =
        HttpFetcher::new(settings.fetch_timeout).context("failed to build HTTP client")?;

    let scheduler = UpdateScheduler::new(
        settings,
        Arc::new(fetcher),
        Arc::new(TroubleTableExtractor),
        RecordBuilder::canonical(board.classifier, board.order),
        store.clone(),
        hub.clone(),
    )
    .spawn(shutdown.signal());

    let app = router(AppState {
        store,
        hub,
        shutdown: shutdown.signal(),
    });

    let local = listener.local_addr().context("listener has no local address")?;
    tracing::info!(listen = %local, "listening");

    let mut stop = shutdown.signal();
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move { stop.wait().await })
        .await
        .context("HTTP server failed");

    // Covers the server failing on its own.
    shutdown.trigger();
    scheduler.await.context("update loop panicked")?;

    tracing::info!("shutdown complete");
    served
}

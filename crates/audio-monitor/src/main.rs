mod bootstrap;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use amon_core::settings::Settings;
use amon_core::telemetry::TelemetryStore;
use amon_host::sim::SimulatedHost;
use amon_host::ServerId;
use amon_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Audio Monitor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Server: {}, FPS: {}, Theme: {}",
        settings.server,
        settings.fps,
        settings.theme
    );

    let server = ServerId(settings.server);
    let store = TelemetryStore::new();

    // The simulated host stands in for the plugin runtime: it answers level
    // polls and recording commands, and drives scripted talk events into the
    // store from its own task.
    let host = Arc::new(SimulatedHost::new());
    let feed = host.clone().spawn_talk_feed(store.clone(), server);

    let app = App::new(&settings.theme, settings.fps);

    // Run the monitor loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(store, host.clone(), server) => {
            feed.abort();
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down talk feed");
            feed.abort();
        }
    }

    tracing::info!("Audio Monitor closed");
    Ok(())
}

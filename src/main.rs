//! LRT News Digest — Binary Entrypoint
//! Resolves the scheduled digest mode for the current Vilnius time, assembles
//! the digest and delivers it. Off-schedule invocations exit cleanly.

use tracing_subscriber::{fmt, EnvFilter};

use lrt_digest::config::LOCAL_TZ;
use lrt_digest::run::{run_digest, RunOutcome};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let now = chrono::Utc::now().with_timezone(&LOCAL_TZ);
    match run_digest(now).await? {
        RunOutcome::NotScheduled => {}
        RunOutcome::Sent {
            mode,
            items,
            sent,
            failed,
        } => {
            tracing::info!(mode = mode.label(), items, sent, failed, "digest run finished");
        }
    }
    Ok(())
}

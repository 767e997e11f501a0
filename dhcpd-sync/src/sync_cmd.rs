use std::thread;

use anyhow::{Context, Result};
use tracing::error;

use dhcpd_sync::config::SyncConfig;
use dhcpd_sync::cycle::apply_payload;
use dhcpd_sync::fetch::Fetcher;
use dhcpd_sync::reload::ReloadManager;

use crate::cli::SyncArgs;

pub fn run_sync(args: SyncArgs) -> Result<()> {
    let config = SyncConfig::load(&args.config)?;
    let fetcher = Fetcher::new(
        config.api_url.clone(),
        config.api_token.clone(),
        config.fetch_timeout(),
    )
    .context("failed to build HTTP client")?;
    let mut reload = ReloadManager::new();

    // Any cycle error is fatal; the external supervisor restarts the
    // process and thereby retries.
    loop {
        if let Err(err) = run_cycle(&config, &fetcher, &mut reload) {
            error!("sync cycle failed: {err:#}");
            return Err(err);
        }
        if args.once {
            return Ok(());
        }
        thread::sleep(config.poll_interval());
    }
}

fn run_cycle(config: &SyncConfig, fetcher: &Fetcher, reload: &mut ReloadManager) -> Result<()> {
    let payload = fetcher.fetch()?;
    apply_payload(config, &payload, reload)?;
    Ok(())
}

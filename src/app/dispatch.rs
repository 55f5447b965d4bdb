use crate::channels::{CliChannel, run_hook_loop};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::links::{HookReport, UrlHook};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Load the config named on the command line, or the per-user default.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load_or_init(),
    }
}

/// Run one message through the hook, printing replies to stdout.
pub async fn check_message(hook: &UrlHook, message: &str) -> HookReport {
    let channel = CliChannel::new();
    let inbound = CliChannel::message(message);
    hook.on_message(&channel, &inbound.reply_target, &inbound.sender, &inbound.content)
        .await
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let hook = Arc::new(UrlHook::from_config(&config)?);

    match cli.command {
        Commands::Run => {
            info!(config = %config.config_path.display(), "starting stdin url hook");
            run_hook_loop(Arc::new(CliChannel::new()), hook).await
        }
        Commands::Check { message } => {
            let report = check_message(&hook, &message).await;
            info!(
                detected = report.detected,
                replied = report.replied,
                failed = report.failed,
                "message checked"
            );
            Ok(())
        }
    }
}

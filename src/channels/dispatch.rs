use super::traits::{Channel, ChannelMessage};
use crate::links::UrlHook;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

const INBOX_CAPACITY: usize = 32;

/// Feed every inbound message on `channel` through the URL hook.
///
/// Messages are handled one at a time, in arrival order; within a message the
/// hook fans out over its URLs. Returns once the listener stops and the
/// inbox drains.
pub async fn run_hook_loop(channel: Arc<dyn Channel>, hook: Arc<UrlHook>) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<ChannelMessage>(INBOX_CAPACITY);

    let listener = {
        let channel = Arc::clone(&channel);
        tokio::spawn(async move { channel.listen(tx).await })
    };

    tracing::info!(channel = channel.name(), "url hook listening");

    while let Some(msg) = rx.recv().await {
        let report = hook
            .on_message(
                channel.as_ref(),
                &msg.reply_target,
                &msg.sender,
                &msg.content,
            )
            .await;
        tracing::debug!(
            channel = %msg.channel,
            sender = %msg.sender,
            detected = report.detected,
            replied = report.replied,
            failed = report.failed,
            "message processed"
        );
    }

    listener.await??;
    Ok(())
}

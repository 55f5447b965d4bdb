use super::traits::{Channel, ChannelMessage};
use std::future::Future;
use std::pin::Pin;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use uuid::Uuid;

/// CLI channel — each stdin line is a message, replies go to stdout
pub struct CliChannel;

impl CliChannel {
    pub fn new() -> Self {
        Self
    }

    pub fn message(content: impl Into<String>) -> ChannelMessage {
        ChannelMessage {
            id: Uuid::new_v4().to_string(),
            sender: "user".to_string(),
            content: content.into(),
            channel: "cli".to_string(),
            reply_target: "stdout".to_string(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        }
    }
}

impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    fn send<'a>(
        &'a self,
        message: &'a str,
        _recipient: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut stdout = io::stdout();
            stdout.write_all(format!("{message}\n").as_bytes()).await?;
            stdout.flush().await?;
            Ok(())
        })
    }

    fn listen<'a>(
        &'a self,
        tx: tokio::sync::mpsc::Sender<ChannelMessage>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let stdin = io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if line == "/quit" || line == "/exit" {
                    break;
                }

                if tx.send(Self::message(line)).await.is_err() {
                    break;
                }
            }
            Ok(())
        })
    }
}

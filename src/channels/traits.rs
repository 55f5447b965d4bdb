use std::future::Future;
use std::pin::Pin;

/// A message received from a channel.
///
/// `sender` identifies the user (e.g. IRC nick).
/// `reply_target` is where replies go: the channel the message arrived in, or
/// the sender for private messages.
#[derive(Debug, Clone)]
pub struct ChannelMessage {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub channel: String,
    pub reply_target: String,
    pub timestamp: u64,
}

/// Core channel trait — implement for any messaging platform
pub trait Channel: Send + Sync {
    /// Human-readable channel name
    fn name(&self) -> &str;

    /// Send one line of text to `recipient`
    fn send<'a>(
        &'a self,
        message: &'a str,
        recipient: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

    /// Start listening for incoming messages (long-running)
    fn listen<'a>(
        &'a self,
        tx: tokio::sync::mpsc::Sender<ChannelMessage>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;
}

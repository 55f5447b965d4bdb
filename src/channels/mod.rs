pub mod cli;
pub mod dispatch;
#[cfg(test)]
pub(crate) mod testing;
pub mod traits;

pub use cli::CliChannel;
pub use dispatch::run_hook_loop;
pub use traits::{Channel, ChannelMessage};

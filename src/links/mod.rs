pub mod detector;
pub mod extractor;
pub mod fetcher;
pub mod format;
pub mod hook;
pub mod shortener;
pub mod sites;
pub mod types;

pub use detector::detect_urls;
pub use extractor::extract;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use format::format_reply;
pub use hook::UrlHook;
pub use shortener::{BitlyShortener, Shortener, shorten};
pub use sites::Site;
pub use types::{FetchedPage, HookReport, Summary};

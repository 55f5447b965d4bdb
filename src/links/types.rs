use std::fmt;
use url::Url;

/// A response that made it past the fetcher (anything but a transport error or 404).
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    pub status: u16,
    /// Raw `Content-Type` header, parameters included.
    pub content_type: Option<String>,
    pub body: String,
}

/// One-line description of a fetched resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Non-200 responses carry neither a title nor a content type.
    Empty,
    ContentType(String),
    Title(String),
    Video {
        title: String,
        views: u64,
        /// Percentage of likes among all votes. NaN when nobody voted.
        rating: f64,
    },
    Tweet {
        user: String,
        text: String,
        retweets: u64,
        favorites: u64,
    },
    Post {
        title: String,
        score: String,
        comments: String,
    },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::ContentType(text) | Self::Title(text) => f.write_str(text),
            Self::Video {
                title,
                views,
                rating,
            } => write!(f, "{title} | {views} views {rating}% like"),
            Self::Tweet {
                user,
                text,
                retweets,
                favorites,
            } => write!(
                f,
                "{user} {text} ({retweets} retweets, {favorites} favorites)"
            ),
            Self::Post {
                title,
                score,
                comments,
            } => write!(f, "{title} ({score} upvotes, {comments})"),
        }
    }
}

/// What a single hook invocation did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookReport {
    pub detected: usize,
    pub replied: usize,
    pub failed: usize,
}

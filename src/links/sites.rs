//! Site-specific summaries for a handful of well-known domains.
//!
//! Selectors target the server-rendered markup each site hands to a desktop
//! browser. When the markup is missing (layout change, login wall), counts
//! degrade to zero and text to empty rather than failing the pipeline.

use super::types::Summary;
use scraper::{Html, Selector};
use url::Url;

const YOUTUBE_TITLE: &str = "#eow-title";
const YOUTUBE_VIEWS: &str = ".watch-view-count";
const YOUTUBE_LIKES: &str = ".like-button-renderer-like-button";
const YOUTUBE_DISLIKES: &str = ".like-button-renderer-dislike-button";

const TWEET_USER: &str = ".permalink-tweet .username";
const TWEET_TEXT: &str = ".permalink-tweet .tweet-text";
const TWEET_RETWEETS: &str = ".permalink-tweet .js-stat-retweets strong";
const TWEET_FAVORITES: &str = ".permalink-tweet .js-stat-favorites strong";

const REDDIT_TITLE: &str = "#siteTable a.title";
const REDDIT_SCORE: &str = "#siteTable .score.unvoted";
const REDDIT_COMMENTS: &str = "#siteTable a.comments";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Generic,
    YouTube,
    Twitter,
    Reddit,
}

impl Site {
    /// Pick the extraction rule for a URL by registrable domain and path.
    pub fn classify(url: &Url) -> Self {
        let Some(host) = url.host_str() else {
            return Self::Generic;
        };
        let path = url.path();

        match registrable_domain(host) {
            "youtube.com" if path.starts_with("/watch") => Self::YouTube,
            "twitter.com" if is_tweet_path(path) => Self::Twitter,
            "reddit.com" if is_comments_path(path) => Self::Reddit,
            _ => Self::Generic,
        }
    }

    /// Site summary for the parsed page, or `None` for [`Site::Generic`].
    pub fn extract(self, document: &Html) -> Option<Summary> {
        match self {
            Self::Generic => None,
            Self::YouTube => Some(youtube(document)),
            Self::Twitter => Some(tweet(document)),
            Self::Reddit => Some(reddit(document)),
        }
    }
}

/// Last two dot-separated labels of a hostname (`www.youtube.com` → `youtube.com`).
pub fn registrable_domain(host: &str) -> &str {
    let host = host.trim_end_matches('.');
    match host.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &host[idx + 1..],
        None => host,
    }
}

/// `/<user>/status/<id>`
fn is_tweet_path(path: &str) -> bool {
    let mut segments = path.trim_start_matches('/').split('/');
    matches!(
        (segments.next(), segments.next(), segments.next()),
        (Some(user), Some("status"), Some(id))
            if !user.is_empty() && !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
    )
}

/// `/r/<subreddit>/comments...`
fn is_comments_path(path: &str) -> bool {
    let mut segments = path.trim_start_matches('/').split('/');
    matches!(
        (segments.next(), segments.next(), segments.next()),
        (Some("r"), Some(sub), Some("comments")) if !sub.is_empty()
    )
}

/// Whitespace-normalized text of the first element matching `selector`.
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = document.select(&sel).next()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Digits of a rendered count (`"1,234 views"` → 1234). Anything unreadable is 0.
fn parse_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

fn select_count(document: &Html, selector: &str) -> u64 {
    select_text(document, selector).map_or(0, |t| parse_count(&t))
}

/// Percentage of likes, rounded. Zero votes yields NaN.
#[allow(clippy::cast_precision_loss)]
pub fn approval_rating(likes: u64, dislikes: u64) -> f64 {
    let likes = likes as f64;
    let dislikes = dislikes as f64;
    (100.0 * likes / (likes + dislikes)).round()
}

fn youtube(document: &Html) -> Summary {
    let likes = select_count(document, YOUTUBE_LIKES);
    let dislikes = select_count(document, YOUTUBE_DISLIKES);
    Summary::Video {
        title: select_text(document, YOUTUBE_TITLE).unwrap_or_default(),
        views: select_count(document, YOUTUBE_VIEWS),
        rating: approval_rating(likes, dislikes),
    }
}

fn tweet(document: &Html) -> Summary {
    let user = select_text(document, TWEET_USER)
        .map(|u| u.replace(' ', ""))
        .map(|u| if u.starts_with('@') { u } else { format!("@{u}") })
        .unwrap_or_default();
    Summary::Tweet {
        user,
        text: select_text(document, TWEET_TEXT).unwrap_or_default(),
        retweets: select_count(document, TWEET_RETWEETS),
        favorites: select_count(document, TWEET_FAVORITES),
    }
}

fn reddit(document: &Html) -> Summary {
    Summary::Post {
        title: select_text(document, REDDIT_TITLE).unwrap_or_default(),
        score: select_text(document, REDDIT_SCORE).unwrap_or_else(|| "0".into()),
        comments: select_text(document, REDDIT_COMMENTS).unwrap_or_else(|| "0 comments".into()),
    }
}

use super::types::Summary;

/// `"<summary> | <url>"`. An empty summary still produces a line.
pub fn format_reply(summary: &Summary, url: &str) -> String {
    format!("{summary} | {url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_url() {
        let summary = Summary::Title("Example Domain".into());
        assert_eq!(
            format_reply(&summary, "http://bit.ly/abc"),
            "Example Domain | http://bit.ly/abc"
        );
    }

    #[test]
    fn empty_summary_keeps_separator() {
        assert_eq!(
            format_reply(&Summary::Empty, "http://example.com"),
            " | http://example.com"
        );
    }
}

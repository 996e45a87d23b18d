/// Get the quote feed URL from the environment or use the default
pub fn get_feed_url() -> String {
    std::env::var("QUOTEBAR_FEED_URL")
        .unwrap_or_else(|_| crate::constants::DEFAULT_FEED_URL.to_string())
}

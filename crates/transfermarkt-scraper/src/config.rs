use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("TRANSFERMARKT_BASE_URL")
                .unwrap_or_else(|_| "https://www.transfermarkt.com".to_string()),
            user_agent: env::var("SCRAPER_USER_AGENT")
                .unwrap_or_else(|_| "transfermarkt-scraper/0.1".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

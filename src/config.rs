use std::path::PathBuf;
use std::time::Duration;

const FEED_HOST: &str = "https://www.goodreads.com";
const USER_ID: &str = "39570859";
const OUTPUT_PATH: &str = "bookshelf.json";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";
const TIMEOUT_SECS: u64 = 10;

// Year shelves have to exist on the account. Extend this as years pass.
const YEARS: [i32; 11] = [
    2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025,
];

pub const CURRENTLY_READING: &str = "currently-reading";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_host: String,
    pub user_id: String,
    pub years: Vec<i32>,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_host: FEED_HOST.to_string(),
            user_id: USER_ID.to_string(),
            years: YEARS.to_vec(),
            output_path: PathBuf::from(OUTPUT_PATH),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// RSS URL of one of the user's shelves.
    pub fn shelf_url(&self, shelf: &str) -> String {
        format!(
            "{}/review/list_rss/{}?shelf={}",
            self.feed_host.trim_end_matches('/'),
            urlencoding::encode(&self.user_id),
            urlencoding::encode(shelf)
        )
    }

    pub fn currently_reading_url(&self) -> String {
        self.shelf_url(CURRENTLY_READING)
    }

    pub fn year_url(&self, year: i32) -> String {
        self.shelf_url(&year.to_string())
    }
}

use env_logger::Target;
use log::{error, LevelFilter};
use std::env;

use config::Config;
use feed::HttpFeed;

mod book;
mod bookshelf;
mod config;
mod feed;

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.target(Target::Stdout).filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() {
    init_logging();

    let config = Config::default();

    let feed = match HttpFeed::new(&config) {
        Ok(feed) => feed,
        Err(err) => {
            error!("Couldn't build HTTP client: {}", err);
            return;
        }
    };

    bookshelf::run(&config, &feed);
}

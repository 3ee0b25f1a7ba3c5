use serde::Serialize;
use std::collections::BTreeMap;

pub mod extract;

pub const UNKNOWN: &str = "N/A";
pub const NO_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub link: String,
    pub image_url: String,
    pub shelves: Vec<String>,
    pub read_at: Option<String>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookshelf {
    pub currently_reading: Vec<BookRecord>,
    pub read_books_by_year: BTreeMap<i32, Vec<BookRecord>>,
}

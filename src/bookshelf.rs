use log::{debug, error, info};
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::book::extract::extract;
use crate::book::{BookRecord, Bookshelf};
use crate::config::{Config, CURRENTLY_READING};
use crate::feed::FeedSource;

fn books_on_shelf(source: &impl FeedSource, url: &str) -> Vec<BookRecord> {
    match source.fetch(url) {
        Some(root) => root.descendants("item").filter_map(extract).collect(),
        None => Vec::new(),
    }
}

// Dated books first, newest first. Undated books trail, by title descending.
fn compare(a: &BookRecord, b: &BookRecord) -> Ordering {
    match (&a.read_at, &b.read_at) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.title.cmp(&a.title),
    }
}

pub fn sort_bucket(books: &mut [BookRecord]) {
    books.sort_by(compare);
}

pub fn collect(config: &Config, source: &impl FeedSource) -> Bookshelf {
    let mut shelf = Bookshelf::default();

    shelf.currently_reading = books_on_shelf(source, &config.currently_reading_url());
    info!("{}: {} books", CURRENTLY_READING, shelf.currently_reading.len());

    for &year in &config.years {
        let books = books_on_shelf(source, &config.year_url(year));
        if books.is_empty() {
            debug!("{}: no books, leaving the year out", year);
            continue;
        }

        info!("{}: {} books", year, books.len());
        shelf.read_books_by_year.entry(year).or_default().extend(books);
    }

    for books in shelf.read_books_by_year.values_mut() {
        sort_bucket(books);
    }

    shelf
}

/// Writes the shelf as indented JSON. The old file is only replaced once the
/// new one is fully on disk.
pub fn write(shelf: &Bookshelf, path: &Path) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let result = (|| -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, shelf)?;
        writer.flush()?;
        fs::rename(tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }

    result
}

pub fn run(config: &Config, source: &impl FeedSource) {
    let shelf = collect(config, source);
    let path = &config.output_path;

    match write(&shelf, path) {
        Ok(()) => info!("Bookshelf data successfully saved to {}", path.display()),
        Err(err) => error!("Error writing JSON file {}: {}", path.display(), err),
    }
}

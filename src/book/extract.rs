use log::warn;
use thiserror::Error;

use crate::book::{BookRecord, NO_LINK, UNKNOWN};
use crate::feed::xml::{Element, TextError};

mod description;

#[derive(Debug, Error)]
#[error("unreadable <{field}>: {source}")]
pub struct ExtractError {
    field: &'static str,
    source: TextError,
}

// Missing and empty elements both fall back to the default.
fn field(item: &Element, name: &'static str, default: &str) -> Result<String, ExtractError> {
    let text = match item.child(name) {
        Some(element) => element.text().map_err(|source| ExtractError {
            field: name,
            source,
        })?,
        None => String::new(),
    };

    if text.is_empty() {
        return Ok(default.to_string());
    }

    Ok(text)
}

fn book_record(item: &Element) -> Result<BookRecord, ExtractError> {
    let title = field(item, "title", UNKNOWN)?;
    let author = field(item, "author_name", UNKNOWN)?;
    let link = field(item, "link", NO_LINK)?;
    let image_url = field(item, "book_small_image_url", "")?;
    let description = field(item, "description", "")?;

    Ok(BookRecord {
        title,
        author,
        link,
        image_url,
        shelves: description::shelves(&description),
        read_at: description::read_at(&description),
    })
}

/// Pulls a [`BookRecord`] out of one feed `<item>`. Unreadable items are
/// logged and skipped.
pub fn extract(item: &Element) -> Option<BookRecord> {
    match book_record(item) {
        Ok(book) => Some(book),
        Err(err) => {
            warn!("Could not fully extract data for an item: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::xml::parse;
    use pretty_assertions::assert_eq;

    fn item(xml: &str) -> Element {
        parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn extracts_every_field() {
        let item = item(
            r#"<item>
  <title>The Left Hand of Darkness</title>
  <link>https://www.goodreads.com/review/show/1</link>
  <book_small_image_url>https://images.example.com/lhod.jpg</book_small_image_url>
  <author_name>Ursula K. Le Guin</author_name>
  <description><![CDATA[
    author: Ursula K. Le Guin<br/>
    read at: 2024/03/09<br/>
    date added: 2024/01/02<br/>
    shelves: 2024, sci-fi, favorites<br/>
  ]]></description>
</item>"#,
        );

        assert_eq!(
            extract(&item),
            Some(BookRecord {
                title: "The Left Hand of Darkness".to_string(),
                author: "Ursula K. Le Guin".to_string(),
                link: "https://www.goodreads.com/review/show/1".to_string(),
                image_url: "https://images.example.com/lhod.jpg".to_string(),
                shelves: vec![
                    "2024".to_string(),
                    "sci-fi".to_string(),
                    "favorites".to_string()
                ],
                read_at: Some("2024/03/09".to_string()),
            })
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(
            extract(&item("<item/>")),
            Some(BookRecord {
                title: "N/A".to_string(),
                author: "N/A".to_string(),
                link: "#".to_string(),
                image_url: String::new(),
                shelves: Vec::new(),
                read_at: None,
            })
        );
    }

    #[test]
    fn empty_fields_use_defaults() {
        let book = extract(&item(
            "<item><title></title><link/><description></description></item>",
        ))
        .unwrap();
        assert_eq!(book.title, "N/A");
        assert_eq!(book.link, "#");
        assert!(book.shelves.is_empty());
        assert_eq!(book.read_at, None);
    }

    #[test]
    fn only_direct_children_are_read() {
        let book = extract(&item("<item><wrapper><title>Hidden</title></wrapper></item>")).unwrap();
        assert_eq!(book.title, "N/A");
    }

    #[test]
    fn entities_are_resolved() {
        let book = extract(&item("<item><title>Salt &amp; Sugar</title></item>")).unwrap();
        assert_eq!(book.title, "Salt & Sugar");
    }

    #[test]
    fn unreadable_item_is_skipped() {
        assert_eq!(extract(&item("<item><title>&nope;</title></item>")), None);
    }

    #[test]
    fn error_names_the_field() {
        let err = book_record(&item("<item><author_name>&nope;</author_name></item>")).unwrap_err();
        assert!(err.to_string().starts_with("unreadable <author_name>"));
    }
}

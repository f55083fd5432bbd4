use scraper::{Html, Selector};

use crate::model::player::PlayerDirectory;

use super::{trailing_segment, ParsingError};

/// Builds the tag -> id directory from the league's player listing page.
///
/// Player profile links sit in the listing table; the id is the trailing
/// segment of each link. The page always carries one anchor with no label
/// text, so unlabeled anchors are skipped wholesale.
pub fn parse_player_listing(html: &str) -> Result<PlayerDirectory, ParsingError> {
    let document = Html::parse_document(html);
    let table = Selector::parse("table.table.table-hover").unwrap();
    let anchors = Selector::parse("table.table.table-hover a").unwrap();

    if document.select(&table).next().is_none() {
        return Err(ParsingError::MissingElement("player listing table".into()));
    }

    let mut directory = PlayerDirectory::new();
    for anchor in document.select(&anchors) {
        let tag = anchor.text().collect::<String>().trim().to_string();
        if tag.is_empty() {
            continue;
        }
        let id = anchor.value().attr("href").and_then(trailing_segment);
        match id {
            Some(id) => directory.insert(tag, id.into()),
            None => continue,
        }
    }
    Ok(directory)
}

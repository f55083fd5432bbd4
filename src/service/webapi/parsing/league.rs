use scraper::{Html, Selector};

use super::ParsingError;

/// League display name from the league home page header.
pub fn parse_league_name(html: &str) -> Result<String, ParsingError> {
    let document = Html::parse_document(html);
    let title = Selector::parse("div.content_header-body h1 a").unwrap();

    document
        .select(&title)
        .next()
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParsingError::MissingElement("league title".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comes_from_the_header_anchor() {
        let html = r#"
            <div class="content_header-body">
              <h1><a href="/league/NCMelee"> NC Melee </a></h1>
            </div>"#;
        assert_eq!(parse_league_name(html).unwrap(), "NC Melee");
    }

    #[test]
    fn missing_header_is_an_error() {
        let result = parse_league_name("<html><body><h1>not it</h1></body></html>");
        assert!(matches!(result, Err(ParsingError::MissingElement(_))));
    }
}

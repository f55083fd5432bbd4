use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::model::{
    ids::PlayerId,
    ranking::{Main, RankingEntry},
};

use super::{trailing_segment, ParsingError};

/// Extracts the league ranking table, keyed by player id.
///
/// The embedded ranking page renders two tables: the first describes the
/// ranking system, the second lists the players. Row cells are positional:
/// [rank] [avatar] [name + main icons] [social links] [?] [score].
pub fn parse_ranking(html: &str) -> Result<HashMap<PlayerId, RankingEntry>, ParsingError> {
    let document = Html::parse_document(html);
    let tables = Selector::parse("table").unwrap();
    let rows = Selector::parse("tbody tr").unwrap();
    let anchors = Selector::parse("a").unwrap();
    let icons = Selector::parse("img").unwrap();

    let table = document
        .select(&tables)
        .nth(1)
        .ok_or_else(|| ParsingError::MissingElement("ranking player table".into()))?;

    let mut ranking = HashMap::new();
    for row in table.select(&rows) {
        let cells: Vec<ElementRef> = row.children().filter_map(ElementRef::wrap).collect();
        if cells.len() < 6 {
            continue;
        }

        let anchor = match cells[2].select(&anchors).next() {
            Some(anchor) => anchor,
            None => continue,
        };
        let id = match anchor.value().attr("href").and_then(trailing_segment) {
            Some(id) => PlayerId::from(id),
            None => continue,
        };

        let name = anchor.text().collect::<String>().trim().to_string();
        let rank = cells[0].text().collect::<String>().trim().to_string();
        let score = cells[5].text().collect::<String>().trim().to_string();

        let mains = cells[2]
            .select(&icons)
            .map(|img| Main {
                name: img.value().attr("title").unwrap_or_default().to_string(),
                icon: img.value().attr("src").unwrap_or_default().to_string(),
            })
            .collect();

        let twitter = cells[3]
            .select(&anchors)
            .filter_map(|link| link.value().attr("href"))
            .find(|href| href.contains("twitter.com"))
            .map(str::to_string);

        ranking.insert(
            id,
            RankingEntry {
                name,
                rank,
                mains,
                twitter,
                score,
            },
        );
    }
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKING_PAGE: &str = r#"
        <html><body>
        <table class="info"><tbody><tr><td>TrueSkill</td></tr></tbody></table>
        <table class="table">
          <tbody>
            <tr>
              <td>1</td>
              <td><img src="/avatar/1.png"></td>
              <td>
                <a href="/league/NCMelee/player/aaaa-1111">Mango</a>
                <img title="Fox" src="/icons/fox.png">
                <img title="Falco" src="/icons/falco.png">
              </td>
              <td><a href="https://twitter.com/C9Mang0">tw</a></td>
              <td></td>
              <td>1500</td>
            </tr>
            <tr>
              <td>2</td>
              <td></td>
              <td><a href="/league/NCMelee/player/bbbb-2222">Armada</a></td>
              <td></td>
              <td></td>
              <td>1450</td>
            </tr>
            <tr><td colspan="6">separator row</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn rows_decode_into_entries_by_id() {
        let ranking = parse_ranking(RANKING_PAGE).unwrap();
        assert_eq!(ranking.len(), 2);

        let mango = &ranking[&PlayerId::from("aaaa-1111")];
        assert_eq!(mango.name, "Mango");
        assert_eq!(mango.rank, "1");
        assert_eq!(mango.score, "1500");
        assert_eq!(mango.twitter.as_deref(), Some("https://twitter.com/C9Mang0"));
        assert_eq!(
            mango.mains,
            vec![
                Main { name: "Fox".into(), icon: "/icons/fox.png".into() },
                Main { name: "Falco".into(), icon: "/icons/falco.png".into() },
            ]
        );

        let armada = &ranking[&PlayerId::from("bbbb-2222")];
        assert_eq!(armada.rank, "2");
        assert!(armada.mains.is_empty());
        assert!(armada.twitter.is_none());
    }

    #[test]
    fn single_table_page_is_an_error() {
        let html = "<table><tbody><tr><td>only one</td></tr></tbody></table>";
        assert!(matches!(
            parse_ranking(html),
            Err(ParsingError::MissingElement(_))
        ));
    }
}

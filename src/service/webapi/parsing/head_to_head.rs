use std::collections::HashMap;

use scraper::{ElementRef, Html, Node, Selector};

use crate::model::head_to_head::{HeadToHead, RecentMatch};

use super::{stripped_strings, ParsingError};

/// Extracts the comparison data from a head-to-head page.
///
/// The page has no stable ids or classes around the compare widgets, so both
/// sections are located by their heading text and the panel that follows it.
/// A page without either heading is not a valid comparison page.
pub fn parse_head_to_head(html: &str) -> Result<HeadToHead, ParsingError> {
    let document = Html::parse_document(html);

    let stats_panel = panel_after_heading(&document, "Head to Head")
        .ok_or_else(|| ParsingError::MissingElement("head to head panel".into()))?;
    let stats = decode_stat_tokens(cell_tokens(stats_panel));

    let matches_panel = panel_after_heading(&document, "Matches history")
        .ok_or_else(|| ParsingError::MissingElement("matches history panel".into()))?;
    let recent = decode_recent_match(cell_tokens(matches_panel));

    Ok(HeadToHead { stats, recent })
}

/// Finds the first text node containing `heading` and walks the following
/// siblings of its parent until one serializes with a panel-body marker.
/// Heading and panel are siblings in the upstream layout.
fn panel_after_heading<'a>(document: &'a Html, heading: &str) -> Option<ElementRef<'a>> {
    for node in document.tree.nodes() {
        let text = match node.value() {
            Node::Text(text) => text,
            _ => continue,
        };
        if !text.contains(heading) {
            continue;
        }

        let mut sibling = node.parent()?.next_sibling();
        while let Some(candidate) = sibling {
            if let Some(element) = ElementRef::wrap(candidate) {
                if element.html().contains("panel-body") {
                    return Some(element);
                }
            }
            sibling = candidate.next_sibling();
        }
        return None;
    }
    None
}

/// Flattened stripped text of every table cell in the panel, in document
/// order.
fn cell_tokens(panel: ElementRef) -> Vec<String> {
    let cells = Selector::parse("table tbody tr td").unwrap();
    panel
        .select(&cells)
        .flat_map(|cell| stripped_strings(cell))
        .collect()
}

/// Pairs each integer token with the label token immediately before it.
///
/// The compare panel emits a strict label-then-value stream ("Win", "0",
/// "Draw", "0", ...). A stray token upstream would silently shift every later
/// pairing, so any future layout fix belongs in this function alone.
fn decode_stat_tokens(tokens: Vec<String>) -> HashMap<String, i64> {
    let mut stats = HashMap::new();
    let mut label: Option<String> = None;
    for token in tokens {
        match token.parse::<i64>() {
            Ok(value) => {
                if let Some(label) = label.take() {
                    stats.insert(label, value);
                }
            }
            Err(_) => label = Some(token.to_lowercase()),
        }
    }
    stats
}

/// The most recent match sits at fixed offsets of the flattened history
/// tokens: [event, player, result, opponent, score, date, ...]. Fewer than
/// six tokens means the pair never played.
fn decode_recent_match(tokens: Vec<String>) -> RecentMatch {
    if tokens.len() < 6 {
        return RecentMatch::NoMatches;
    }
    RecentMatch::Match {
        name: tokens[0].clone(),
        score: tokens[4].clone(),
        date: tokens[5].clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPARE_PAGE: &str = r#"
        <html><body>
        <div class="panel">
          <div class="panel-heading">Head to Head</div>
          <div class="panel-body">
            <table><tbody><tr>
              <td>Win</td><td>0</td>
              <td>Draw</td><td>0</td>
              <td>Lose</td><td>5</td>
              <td>+</td><td>3</td>
              <td>-</td><td>13</td>
              <td>+/-</td><td>-10</td>
            </tr></tbody></table>
          </div>
        </div>
        <div class="panel">
          <div class="panel-heading">Matches history</div>
          <div class="panel-body">
            <table><tbody><tr>
              <td>Geeks Weekly 57</td>
              <td>Mango</td>
              <td>W</td>
              <td>Armada</td>
              <td>1-2</td>
              <td>2018-08-02</td>
            </tr></tbody></table>
          </div>
        </div>
        </body></html>"#;

    const NEVER_PLAYED: &str = r#"
        <div>
          <div class="heading">Head to Head</div>
          <div class="panel-body">
            <table><tbody><tr><td>Win</td><td>0</td><td>Lose</td><td>0</td></tr></tbody></table>
          </div>
        </div>
        <div>
          <div class="heading">Matches history</div>
          <div class="panel-body">
            <table><tbody><tr><td>No result found</td></tr></tbody></table>
          </div>
        </div>"#;

    #[test]
    fn stats_pair_labels_with_following_integers() {
        let result = parse_head_to_head(COMPARE_PAGE).unwrap();
        assert_eq!(result.stats.get("win"), Some(&0));
        assert_eq!(result.stats.get("draw"), Some(&0));
        assert_eq!(result.stats.get("lose"), Some(&5));
        assert_eq!(result.stats.get("+"), Some(&3));
        assert_eq!(result.stats.get("-"), Some(&13));
        assert_eq!(result.stats.get("+/-"), Some(&-10));
    }

    #[test]
    fn recent_match_reads_fixed_offsets() {
        let result = parse_head_to_head(COMPARE_PAGE).unwrap();
        assert_eq!(
            result.recent,
            RecentMatch::Match {
                name: "Geeks Weekly 57".into(),
                score: "1-2".into(),
                date: "2018-08-02".into(),
            }
        );
    }

    #[test]
    fn short_history_is_no_matches_not_an_error() {
        let result = parse_head_to_head(NEVER_PLAYED).unwrap();
        assert_eq!(result.recent, RecentMatch::NoMatches);
        assert_eq!(result.stats.get("win"), Some(&0));
    }

    #[test]
    fn missing_heading_is_a_hard_failure() {
        let html = "<html><body><div class='panel-body'>nothing here</div></body></html>";
        assert!(matches!(
            parse_head_to_head(html),
            Err(ParsingError::MissingElement(_))
        ));
    }
}

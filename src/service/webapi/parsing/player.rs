use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::model::stats::{Performance, PlayerStats, Rank, RankingInfo};

use super::{stripped_strings, ParsingError};

const RANKING_PANEL: &str = "section div.row div.col-lg-6 \
    div.panel.panel-default.my-box-shadow div.panel-body \
    div.my-dashboard-values-main";
const SUB_PANELS: &str = "section div.row div.col-lg-6 \
    div.panel.panel-default.my-box-shadow div.panel-body \
    div.my-dashboard-values-sub";
const INACTIVE_MARKER: &str = "section div.row div.col-lg-6 \
    div.panel.panel-default.my-box-shadow div.panel-body \
    div.my-dashboard-values-sub div i.fa-exclamation-triangle";
const PERFORMANCE_PANEL: &str = "div.panel.panel-default.my-box-shadow.my-panel-collapsed \
    div.panel-body div.alert div.my-dashboard-values-main";
const PERFORMANCE_ROWS: &str = "div.panel.panel-default.my-box-shadow.my-panel-collapsed \
    div.panel-body table.table tbody tr";

// the population renders as "/ 2333" after rank and suffix
static OUT_OF: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*([0-9]+)$").unwrap());
// "56% win rate" and similar; the number leads
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)").unwrap());

/// Extracts tag, ranking and performance statistics from a player page.
///
/// Only the tag is mandatory; a page without it is not a player page. The
/// ranking and performance panels are optional and degrade to `Rank::Unranked`
/// and an empty `Performance` instead of failing the call.
pub fn parse_player_page(html: &str) -> Result<PlayerStats, ParsingError> {
    let document = Html::parse_document(html);

    let tag_header = Selector::parse("tr td h4.ellipsis").unwrap();
    let tag = document
        .select(&tag_header)
        .next()
        .map(|header| header.text().collect::<String>().trim().to_string())
        .ok_or_else(|| ParsingError::MissingElement("player tag".into()))?;

    let ranking = parse_ranking_panel(&document);
    let performance = parse_performance_panel(&document);

    Ok(PlayerStats {
        tag,
        ranking,
        performance,
    })
}

fn parse_ranking_panel(document: &Html) -> RankingInfo {
    let panel = Selector::parse(RANKING_PANEL).unwrap();
    let rank = document
        .select(&panel)
        .next()
        .and_then(|panel| decode_rank(&stripped_strings(panel)));
    let rank = match rank {
        Some(rank) => rank,
        None => {
            warn!("no ranking panel on player page, treating player as unranked");
            Rank::Unranked
        }
    };

    // sub-panels carry label/value pairs: ranking type, date range, activity
    // requirement, raw score; later panels overwrite earlier keys
    let sub_panels = Selector::parse(SUB_PANELS).unwrap();
    let mut fields = HashMap::new();
    for sub_panel in document.select(&sub_panels) {
        let tokens = stripped_strings(sub_panel);
        if let Some((key, rest)) = tokens.split_first() {
            fields.insert(key.to_lowercase(), rest.join(" "));
        }
    }

    let score = match fields.get("score").map(|value| value.parse::<i64>()) {
        Some(Ok(score)) => {
            fields.remove("score");
            Some(score)
        }
        _ => None,
    };

    let marker = Selector::parse(INACTIVE_MARKER).unwrap();
    let inactive = document.select(&marker).next().is_some();

    RankingInfo {
        rank,
        score,
        fields,
        inactive,
    }
}

fn decode_rank(tokens: &[String]) -> Option<Rank> {
    if tokens.len() < 3 {
        return None;
    }
    let rank = tokens[0].parse::<u32>().ok()?;
    let out_of = OUT_OF
        .captures(&tokens[2])?
        .get(1)?
        .as_str()
        .parse::<u32>()
        .ok()?;
    Some(Rank::Ranked {
        rank,
        suffix: tokens[1].clone(),
        out_of,
    })
}

fn parse_performance_panel(document: &Html) -> Performance {
    let panel = Selector::parse(PERFORMANCE_PANEL).unwrap();
    let summary = match document.select(&panel).next() {
        Some(summary) => stripped_strings(summary),
        None => return Performance::default(),
    };

    let win_rate = summary
        .first()
        .and_then(|token| LEADING_INT.captures(token))
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<f64>().ok())
        .map(|percent| percent / 100.0);

    // win/draw/loss counts, +/- spreads, placement tiers; rows that do not
    // strip to exactly a label and a value are headers or separators
    let rows = Selector::parse(PERFORMANCE_ROWS).unwrap();
    let mut stats = HashMap::new();
    for row in document.select(&rows) {
        let tokens = stripped_strings(row);
        if tokens.len() != 2 {
            continue;
        }
        if let Ok(value) = tokens[1].parse::<i64>() {
            stats.insert(tokens[0].to_lowercase(), value);
        }
    }

    Performance { win_rate, stats }
}

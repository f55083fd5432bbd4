use std::cmp::Ordering;

use crate::model::player::{MatchCandidate, PlayerDirectory};

/// Search results are capped at the eight best candidates.
pub const MAX_RESULTS: usize = 8;

/// Scores every directory entry against `query` and returns the best
/// candidates, most relevant first.
///
/// The score is the similarity ratio of the lower-cased strings, plus a flat
/// 1.0 bonus when the query is a literal substring of the tag. An empty query
/// is a substring of every tag, so it boosts everything to 1.0 and the result
/// is simply the first eight entries; that quirk is kept as-is. Picking a
/// single winner (e.g. only accepting a top score >= 0.9) is left to callers.
pub fn rank_players(query: &str, directory: &PlayerDirectory) -> Vec<MatchCandidate> {
    let needle = query.trim().to_lowercase();

    let mut candidates: Vec<MatchCandidate> = directory
        .iter()
        .map(|entry| {
            let haystack = entry.tag.to_lowercase();
            let mut score = similarity(&needle, &haystack);
            if haystack.contains(&needle) {
                score += 1.0;
            }
            MatchCandidate {
                tag: entry.tag.clone(),
                id: entry.id.clone(),
                score,
            }
        })
        .collect();

    // stable sort, so tied scores keep directory order
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(MAX_RESULTS);
    candidates
}

/// Ratcliff/Obershelp similarity of two strings: twice the total length of
/// the recursively matched common blocks, divided by the combined length.
/// Ranges over [0, 1]; two empty strings count as identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_chars(&a[..start_a], &b[..start_b])
        + matched_chars(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common contiguous block of the two slices, earliest occurrence
/// winning ties. Returns (start in a, start in b, length).
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut suffix_lens = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        let mut current = vec![0usize; b.len() + 1];
        for j in 0..b.len() {
            if a[i] == b[j] {
                let len = suffix_lens[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        suffix_lens = current;
    }
    best
}

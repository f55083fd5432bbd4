use std::collections::HashMap;

use super::ids::PlayerId;

#[derive(Debug, Clone)]
pub struct PlayerEntry {
    pub tag: String,
    pub id: PlayerId,
}

/// One search result, scored in [0, 2]: similarity ratio in [0, 1] plus a
/// fixed 1.0 bonus when the query is a substring of the tag.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub tag: String,
    pub id: PlayerId,
    pub score: f64,
}

/// Tag -> id mapping for a league, preserving insertion order.
///
/// Inserting a tag that already exists replaces its id in place and keeps the
/// original position, so two players sharing a display tag silently collapse
/// to the later one. That matches the upstream listing semantics and is
/// intentional; the stable handle for a player is always the id.
#[derive(Debug, Default, Clone)]
pub struct PlayerDirectory {
    entries: Vec<PlayerEntry>,
    index: HashMap<String, usize>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: String, id: PlayerId) {
        match self.index.get(&tag) {
            Some(&pos) => self.entries[pos].id = id,
            None => {
                self.index.insert(tag.clone(), self.entries.len());
                self.entries.push(PlayerEntry { tag, id });
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&PlayerId> {
        self.index.get(tag).map(|&pos| &self.entries[pos].id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut dir = PlayerDirectory::new();
        dir.insert("Foo".into(), "id1".into());
        dir.insert("Bar".into(), "id2".into());
        dir.insert("Baz".into(), "id3".into());

        let tags: Vec<_> = dir.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn duplicate_tag_overwrites_in_place() {
        let mut dir = PlayerDirectory::new();
        dir.insert("Foo".into(), "id1".into());
        dir.insert("Bar".into(), "id2".into());
        dir.insert("Foo".into(), "id9".into());

        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("Foo"), Some(&"id9".into()));
        let tags: Vec<_> = dir.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["Foo", "Bar"]);
    }
}

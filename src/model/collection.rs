use super::{CardRecord, Category};
use std::ops::Deref;

/// Cards held in catalog order (price, then name).
///
/// Every constructor sorts, so any collection handed out is already ordered.
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardCollection {
    cards: Vec<CardRecord>,
}

impl CardCollection {
    pub fn new(mut cards: Vec<CardRecord>) -> Self {
        // sort_by is stable: records equal on (price, name) keep their input order
        cards.sort_by(CardRecord::catalog_cmp);
        Self { cards }
    }

    /// The first `limit` cards, or all of them if there are fewer
    pub fn head(&self, limit: usize) -> &[CardRecord] {
        &self.cards[..limit.min(self.cards.len())]
    }

    /// First card with the given id, in catalog order
    pub fn find_by_id(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards whose `category` field contains `query` (case-sensitive)
    pub fn search(&self, query: &str, category: Category) -> CardCollection {
        let matches: Vec<CardRecord> = self
            .cards
            .iter()
            .filter(|c| category.field(c).contains(query))
            .cloned()
            .collect();
        log::debug!(
            "search {:?} in '{}': {} of {} cards",
            query,
            category,
            matches.len(),
            self.cards.len()
        );
        CardCollection::new(matches)
    }
}

impl Deref for CardCollection {
    type Target = [CardRecord];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardCollection {
        CardCollection::new(vec![
            CardRecord::new("3", "Kuriboh", 0.25).with_race("Fiend"),
            CardRecord::new("1", "Dark Magician", 1.5).with_race("Spellcaster"),
            CardRecord::new("2", "Blue-Eyes White Dragon", 1.5).with_race("Dragon"),
            CardRecord::new("4", "Pot of Greed", 12.0).with_type("Spell Card"),
            CardRecord::new("5", "Magician of Faith", 0.25).with_race("Spellcaster"),
        ])
    }

    fn assert_sorted(cards: &[CardRecord]) {
        for pair in cards.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.price < b.price || (a.price == b.price && a.name <= b.name),
                "{} should not precede {}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_new_sorts_by_price_then_name() {
        let cards = sample();
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Kuriboh",
                "Magician of Faith",
                "Blue-Eyes White Dragon",
                "Dark Magician",
                "Pot of Greed"
            ]
        );
        assert_sorted(&cards);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sample();
        let twice = CardCollection::new(once.to_vec());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_stable_for_full_ties() {
        let cards = CardCollection::new(vec![
            CardRecord::new("b", "Same", 1.0),
            CardRecord::new("a", "Same", 1.0),
            CardRecord::new("c", "Same", 1.0),
        ]);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_search_by_race() {
        let cards = sample();
        let found = cards.search("Spell", Category::Race);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Magician of Faith");
        assert_eq!(found[1].name, "Dark Magician");
    }

    #[test]
    fn test_search_containment_both_ways() {
        let cards = sample();
        let query = "ag";
        let found = cards.search(query, Category::Name);
        assert_sorted(&found);
        for card in cards.iter() {
            let hit = found.iter().any(|f| f == card);
            assert_eq!(hit, card.name.contains(query), "{}", card);
        }
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let cards = sample();
        assert!(cards.search("kuriboh", Category::Name).is_empty());
        assert_eq!(cards.search("Kuriboh", Category::Name).len(), 1);
    }

    // "card price" matches against the price's decimal text, not its value
    #[test]
    fn test_search_card_price_is_substring_of_text() {
        let cards = sample();
        assert_eq!(cards.search("1.5", Category::CardPrice).len(), 2);
        assert_eq!(cards.search("12.0", Category::CardPrice).len(), 1);
        assert_eq!(cards.search(".25", Category::CardPrice).len(), 2);
        assert!(cards.search("12.00", Category::CardPrice).is_empty());
        assert!(cards.search("0.5", Category::CardPrice).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let cards = sample();
        assert_eq!(cards.search("", Category::Archetype).len(), cards.len());
    }

    #[test]
    fn test_head_and_find() {
        let cards = sample();
        assert_eq!(cards.head(2).len(), 2);
        assert_eq!(cards.head(50).len(), 5);
        assert_eq!(cards.find_by_id("4").map(|c| c.name.as_str()), Some("Pot of Greed"));
        assert!(cards.find_by_id("missing").is_none());
    }
}

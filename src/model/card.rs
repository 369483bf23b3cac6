use std::cmp::Ordering;
use std::fmt;

/// Names longer than this are cut at parse time
pub const NAME_MAX_CHARS: usize = 45;

/// One catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub card_type: String,
    pub description: String,
    pub race: String,
    pub archetype: String,
    pub price: f64,
}

impl CardRecord {
    pub fn new(id: impl Into<String>, name: &str, price: f64) -> Self {
        Self {
            id: id.into(),
            name: truncate_name(name),
            card_type: String::new(),
            description: String::new(),
            race: String::new(),
            archetype: String::new(),
            price,
        }
    }

    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = archetype.into();
        self
    }

    /// Price as text, always with a fractional part ("1.0", "0.25").
    ///
    /// Very large or small prices use Rust's exponent form ("1e16", "1e-5"),
    /// with no `+` sign and no zero padding on the exponent.
    pub fn price_text(&self) -> String {
        format!("{:?}", self.price)
    }

    /// Catalog order: price ascending, then name ascending
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        self.price
            .partial_cmp(&other.price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {:.2}", self.name, self.id, self.price)
    }
}

/// Sum of the prices of `cards`
pub fn total_price(cards: &[CardRecord]) -> f64 {
    cards.iter().map(|c| c.price).sum()
}

/// Keep the first `NAME_MAX_CHARS` characters of a name
pub fn truncate_name(name: &str) -> String {
    name.chars().take(NAME_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_name() {
        let raw = "A".repeat(50);
        let card = CardRecord::new("1", &raw, 1.0);
        assert_eq!(card.name.chars().count(), 45);
        assert_eq!(card.name, "A".repeat(45));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let raw = "é".repeat(50);
        assert_eq!(truncate_name(&raw), "é".repeat(45));
        assert_eq!(truncate_name("Dark Magician"), "Dark Magician");
    }

    #[test]
    fn test_price_text() {
        assert_eq!(CardRecord::new("1", "X", 1.0).price_text(), "1.0");
        assert_eq!(CardRecord::new("1", "X", 0.25).price_text(), "0.25");
        assert_eq!(CardRecord::new("1", "X", 12.5).price_text(), "12.5");
    }

    #[test]
    fn test_price_text_exponent_form() {
        assert_eq!(CardRecord::new("1", "X", 1e16).price_text(), "1e16");
        assert_eq!(CardRecord::new("1", "X", 1e-5).price_text(), "1e-5");
    }

    #[test]
    fn test_total_price() {
        let cards = vec![
            CardRecord::new("1", "A", 0.25),
            CardRecord::new("2", "B", 15.25),
        ];
        assert!((total_price(&cards) - 15.5).abs() < 1e-9);
        assert_eq!(total_price(&[]), 0.0);
    }

    #[test]
    fn test_catalog_cmp() {
        let cheap = CardRecord::new("1", "Zombie", 0.5);
        let pricey = CardRecord::new("2", "Angel", 3.0);
        let cheap_b = CardRecord::new("3", "Beast", 0.5);
        assert_eq!(cheap.catalog_cmp(&pricey), Ordering::Less);
        assert_eq!(cheap_b.catalog_cmp(&cheap), Ordering::Less);
        assert_eq!(cheap.catalog_cmp(&cheap.clone()), Ordering::Equal);
    }
}

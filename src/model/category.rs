use crate::error::CatalogError;
use crate::model::CardRecord;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A searchable card field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Id,
    Name,
    Type,
    Desc,
    Race,
    Archetype,
    CardPrice,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Id,
        Category::Name,
        Category::Type,
        Category::Desc,
        Category::Race,
        Category::Archetype,
        Category::CardPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Id => "id",
            Category::Name => "name",
            Category::Type => "type",
            Category::Desc => "desc",
            Category::Race => "race",
            Category::Archetype => "archetype",
            Category::CardPrice => "card price",
        }
    }

    /// The text of `card` this category searches.
    ///
    /// `CardPrice` yields the price's decimal text, so a search on it is a
    /// substring match against that text and not a numeric comparison.
    pub fn field<'a>(&self, card: &'a CardRecord) -> Cow<'a, str> {
        match self {
            Category::Id => Cow::Borrowed(&card.id),
            Category::Name => Cow::Borrowed(&card.name),
            Category::Type => Cow::Borrowed(&card.card_type),
            Category::Desc => Cow::Borrowed(&card.description),
            Category::Race => Cow::Borrowed(&card.race),
            Category::Archetype => Cow::Borrowed(&card.archetype),
            Category::CardPrice => Cow::Owned(card.price_text()),
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Case-insensitive; surrounding whitespace is significant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| CatalogError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

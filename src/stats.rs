//! Price statistics over a card collection

use crate::error::{CatalogError, Result};
use crate::model::{CardCollection, CardRecord};

/// A price and every card in the collection priced exactly at it
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGroup<'a> {
    pub price: f64,
    pub cards: Vec<&'a CardRecord>,
}

impl<'a> PriceGroup<'a> {
    fn matching(price: f64, collection: &'a CardCollection) -> Self {
        let cards = collection.iter().filter(|c| c.price == price).collect();
        Self { price, cards }
    }
}

/// Minimum, maximum and positional-median price groups.
///
/// The median is the price at index `n / 2` of the sorted collection, so for
/// an even count it is the upper of the two middle prices. Groups may overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats<'a> {
    pub min: PriceGroup<'a>,
    pub max: PriceGroup<'a>,
    pub median: PriceGroup<'a>,
}

impl<'a> PriceStats<'a> {
    pub fn compute(collection: &'a CardCollection) -> Result<Self> {
        let first = collection.first().ok_or(CatalogError::EmptyCollection)?;

        let (min, max) = collection
            .iter()
            .fold((first.price, first.price), |(lo, hi), c| {
                (lo.min(c.price), hi.max(c.price))
            });
        let median = collection[collection.len() / 2].price;

        Ok(Self {
            min: PriceGroup::matching(min, collection),
            max: PriceGroup::matching(max, collection),
            median: PriceGroup::matching(median, collection),
        })
    }
}

//! Plain-text tables and price summaries

use crate::model::{total_price, CardRecord};
use crate::stats::{PriceGroup, PriceStats};
use std::fmt::Write;

/// Format a price with two decimals and comma thousands separators
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac)
}

/// Render cards as a fixed-width table followed by a price total
pub fn render_table(cards: &[CardRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<50} {:<30} {:<20} {:<40} {:<12}",
        "Name", "Type", "Race", "Archetype", "TCGPlayer"
    );

    for card in cards {
        let _ = writeln!(
            out,
            "{:<50} {:<30} {:<20} {:<40} {:>12}",
            card.name,
            card.card_type,
            card.race,
            card.archetype,
            format_price(card.price)
        );
    }

    let _ = writeln!(
        out,
        "\n{:<50} {:<30} {:<20} {:<40} {:>12}",
        "Totals",
        "",
        "",
        "",
        format_price(total_price(cards))
    );
    out
}

/// Render the min, max and median price groups with card names
pub fn render_stats(stats: &PriceStats<'_>) -> String {
    let mut out = String::new();
    write_group(&mut out, "least expensive", &stats.min);
    write_group(&mut out, "most expensive", &stats.max);
    write_group(&mut out, "median", &stats.median);
    out
}

fn write_group(out: &mut String, label: &str, group: &PriceGroup<'_>) {
    let _ = writeln!(
        out,
        "\nThe price of the {} card(s) is {}",
        label,
        format_price(group.price)
    );
    for card in &group.cards {
        let _ = writeln!(out, "\t{}", card.name);
    }
}

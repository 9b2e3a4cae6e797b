use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// One merged ingredient line of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAggregateRow {
    pub ingredient_name: String,
    pub unit: String,
    pub total_amount: i64,
}

impl CartAggregateRow {
    pub fn new(ingredient_name: impl Into<String>, unit: impl Into<String>, total_amount: i64) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            unit: unit.into(),
            total_amount,
        }
    }
}

/// Merges rows sharing the same ingredient name and unit, summing their
/// amounts, and orders the result by name (then unit). Sums saturate at the
/// `i64` bounds.
pub fn merge_rows(rows: impl IntoIterator<Item = CartAggregateRow>) -> Vec<CartAggregateRow> {
    let mut merged: BTreeMap<(String, String), i64> = BTreeMap::new();
    for row in rows {
        let total = merged.entry((row.ingredient_name, row.unit)).or_insert(0);
        *total = total.saturating_add(row.total_amount);
    }

    merged
        .into_iter()
        .map(|((ingredient_name, unit), total_amount)| CartAggregateRow {
            ingredient_name,
            unit,
            total_amount,
        })
        .collect()
}

/// A rendered shopping list ready to be downloaded.
#[derive(Debug, Clone)]
pub struct ShoppingListFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl ShoppingListFile {
    pub fn new(content: Vec<u8>, generated_at: DateTime<Utc>) -> Self {
        Self {
            filename: format!("shopping_list_{}.pdf", generated_at.format("%Y%m%d_%H%M")),
            content,
        }
    }
}

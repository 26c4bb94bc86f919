//! Catalog ingestion from the cocktails CSV export.
//!
//! The export carries one row per recipe. The `ingredients` and
//! `ingredientMeasures` columns hold list literals
//! (`['Vodka', "Lime juice"]`) rather than nested CSV, so they go through
//! a small literal parser before validation. The file is read once, in
//! full, before the engine is built; any malformed row aborts the load.

use mixtail_core::{Error, Recipe, Result};
use serde::Deserialize;
use std::path::Path;

/// One raw CSV row, prior to list parsing and validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: u64,
    name: String,
    alcoholic: String,
    category: String,
    #[serde(rename = "glassType")]
    glass_type: String,
    instructions: String,
    #[serde(rename = "drinkThumbnail")]
    thumbnail: String,
    ingredients: String,
    #[serde(rename = "ingredientMeasures")]
    measures: String,
}

/// Load and validate the full catalog.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Catalog(format!("failed to open {}: {}", path.display(), e)))?;

    let mut recipes = Vec::new();
    for (row, record) in reader.deserialize::<RawRecord>().enumerate() {
        let record = record
            .map_err(|e| Error::Catalog(format!("row {}: {}", row + 1, e)))?;

        let recipe = Recipe {
            id: record.id,
            name: record.name,
            category: record.category,
            alcoholic: record.alcoholic,
            glass_type: record.glass_type,
            instructions: record.instructions,
            ingredients: parse_list_literal(&record.ingredients)
                .map_err(|e| Error::Catalog(format!("row {}, ingredients: {}", row + 1, e)))?,
            measures: parse_list_literal(&record.measures)
                .map_err(|e| Error::Catalog(format!("row {}, measures: {}", row + 1, e)))?,
            thumbnail: record.thumbnail,
        };
        recipe.validate()?;
        recipes.push(recipe);
    }

    if recipes.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    Ok(recipes)
}

/// Parse a bracketed list literal of quoted strings.
///
/// Accepts single- or double-quoted items with backslash escapes, e.g.
/// `['Vodka', "Lime juice", 'Rose\'s lime']`. An empty list (`[]`) is
/// valid: some catalog rows genuinely list nothing.
fn parse_list_literal(raw: &str) -> std::result::Result<Vec<String>, String> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("expected a bracketed list, got {raw:?}"))?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',') {
            chars.next();
        }
        let quote = match chars.next() {
            None => break,
            Some(c @ ('\'' | '"')) => c,
            Some(c) => return Err(format!("expected a quoted item, got {c:?}")),
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                None => return Err("unterminated quoted item".to_string()),
                Some('\\') => match chars.next() {
                    Some(escaped) => item.push(escaped),
                    None => return Err("dangling escape".to_string()),
                },
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
            }
        }
        items.push(item);
    }

    Ok(items)
}

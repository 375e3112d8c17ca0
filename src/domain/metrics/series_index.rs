//! Lookup of the next book in a series.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::entities::CatalogEntry;

/// Index from `(series, position)` to catalog entry, built from one catalog snapshot.
#[derive(Debug, Default, Clone)]
pub struct SeriesIndex {
    by_position: HashMap<(String, u32), CatalogEntry>,
}

impl SeriesIndex {
    /// Indexes every entry with both a series name and a position.
    ///
    /// If two entries claim the same position the first one wins.
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Self {
        let mut by_position: HashMap<(String, u32), CatalogEntry> = HashMap::new();
        for entry in entries {
            let (Some(series), Some(number)) = (entry.series_name(), entry.series_number) else {
                continue;
            };
            let key = (series.to_owned(), number);
            if let Some(existing) = by_position.get(&key) {
                warn!(
                    series,
                    number,
                    kept = %existing.title,
                    ignored = %entry.title,
                    "Duplicate series position in catalog"
                );
                continue;
            }
            by_position.insert(key, entry.clone());
        }
        Self { by_position }
    }

    /// Entry at `number + 1` in the same series, if any.
    pub fn successor_of(&self, entry: &CatalogEntry) -> Option<&CatalogEntry> {
        let series = entry.series_name()?;
        let next = entry.series_number?.checked_add(1)?;
        self.by_position.get(&(series.to_owned(), next))
    }

    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }
}

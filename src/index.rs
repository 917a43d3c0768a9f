use crate::model::InventoryEntry;
use crate::normalize::normalize;
use ahash::AHashMap;

/// A lookup from normalized base name to the total quantity on hand.
///
/// Entries sharing a base name are summed regardless of unit or location.
/// Units are not reconciled: `1 kg` and `200 g` of rice add up to `201`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryIndex {
    totals: AHashMap<String, f64>,
}

impl InventoryIndex {
    pub fn build<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a InventoryEntry>,
    {
        let mut totals: AHashMap<String, f64> = AHashMap::new();
        for entry in entries {
            *totals.entry(entry.normalized_name()).or_insert(0.0) += entry.available();
        }
        Self { totals }
    }

    /// Quantity available under `name`, which is normalized first.
    /// Unknown names have zero stock.
    pub fn available(&self, name: &str) -> f64 {
        self.available_normalized(&normalize(name))
    }

    /// Same as [`available`](Self::available) for a key that is already normalized.
    pub fn available_normalized(&self, key: &str) -> f64 {
        self.totals.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.totals.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl<'a> FromIterator<&'a InventoryEntry> for InventoryIndex {
    fn from_iter<T: IntoIterator<Item = &'a InventoryEntry>>(iter: T) -> Self {
        Self::build(iter)
    }
}

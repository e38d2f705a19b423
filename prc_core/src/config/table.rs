//! Lookup table whose entries may be scoped to one side

use crate::types::{PerSide, Side};
use std::collections::HashMap;

/// Name → value table, held separately for each side
///
/// An entry inserted without a side applies to both. Re-inserting a name
/// replaces its value but keeps its original position in the listing order.
#[derive(Debug, Clone)]
pub struct SidedTable<V> {
    order: PerSide<Vec<String>>,
    values: PerSide<HashMap<String, V>>,
}

impl<V> Default for SidedTable<V> {
    fn default() -> Self {
        SidedTable {
            order: PerSide::default(),
            values: PerSide::new(HashMap::new(), HashMap::new()),
        }
    }
}

impl<V: Copy> SidedTable<V> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for one side, or for both when `side` is `None`
    pub fn insert(&mut self, side: Option<Side>, name: &str, value: V) {
        let sides: &[Side] = match side {
            Some(Side::Friendly) => &[Side::Friendly],
            Some(Side::Enemy) => &[Side::Enemy],
            None => Side::all(),
        };
        for &side in sides {
            if self.values[side].insert(name.to_string(), value).is_none() {
                self.order[side].push(name.to_string());
            }
        }
    }

    /// Get the value of `name` for `side`
    pub fn get(&self, side: Side, name: &str) -> Option<V> {
        self.values[side].get(name).copied()
    }

    /// Names available to a side, in insertion order
    pub fn names(&self, side: Side) -> &[String] {
        &self.order[side]
    }

    /// Number of distinct names across both sides
    pub fn len(&self) -> usize {
        let mut names: Vec<&String> = self.order.friendly.iter().chain(&self.order.enemy).collect();
        names.sort();
        names.dedup();
        names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.friendly.is_empty() && self.order.enemy.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_entry_applies_to_both_sides() {
        let mut table = SidedTable::new();
        table.insert(None, "Bia 155", 0.8);
        assert_eq!(table.get(Side::Friendly, "Bia 155"), Some(0.8));
        assert_eq!(table.get(Side::Enemy, "Bia 155"), Some(0.8));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_scoped_entries() {
        let mut table = SidedTable::new();
        table.insert(Some(Side::Friendly), "BGE", 3.0);
        table.insert(Some(Side::Enemy), "BGE", 2.5);
        table.insert(Some(Side::Enemy), "Pel GE", 0.2);

        assert_eq!(table.get(Side::Friendly, "BGE"), Some(3.0));
        assert_eq!(table.get(Side::Enemy, "BGE"), Some(2.5));
        assert_eq!(table.get(Side::Friendly, "Pel GE"), None);
        assert_eq!(table.names(Side::Enemy), &["BGE".to_string(), "Pel GE".to_string()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_reinsert_keeps_order() {
        let mut table = SidedTable::new();
        table.insert(None, "a", 1.0);
        table.insert(None, "b", 2.0);
        table.insert(None, "a", 5.0);
        assert_eq!(table.names(Side::Friendly), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.get(Side::Friendly, "a"), Some(5.0));
    }
}

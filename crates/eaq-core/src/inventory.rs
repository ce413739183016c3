//! Bounded item inventory.
//!
//! Items are counted by name. The number of distinct names is capped; once
//! the cap is reached new names are turned away silently, while items already
//! held can still stack.

use std::collections::BTreeMap;

use crate::config::DEFAULT_INVENTORY_CAPACITY;

/// A bounded multiset of named items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INVENTORY_CAPACITY)
    }
}

impl Inventory {
    /// Create an empty inventory with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty inventory holding at most `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            capacity,
        }
    }

    /// Rebuild an inventory from saved contents.
    ///
    /// Saved contents are taken as-is; entries with a zero quantity are dropped.
    pub fn restore(items: BTreeMap<String, u32>, capacity: usize) -> Self {
        let items = items.into_iter().filter(|(_, qty)| *qty > 0).collect();
        Self { items, capacity }
    }

    /// Add `quantity` of an item. Returns false if a new item would exceed
    /// capacity or the stack would overflow.
    pub fn add_item(&mut self, name: &str, quantity: u32) -> bool {
        if let Some(held) = self.items.get_mut(name) {
            return match held.checked_add(quantity) {
                Some(total) => {
                    *held = total;
                    true
                }
                None => false,
            };
        }
        if self.items.len() >= self.capacity || quantity == 0 {
            return false;
        }
        self.items.insert(name.to_string(), quantity);
        true
    }

    /// Remove `quantity` of an item. Returns false if not enough is held.
    pub fn remove_item(&mut self, name: &str, quantity: u32) -> bool {
        let Some(held) = self.items.get_mut(name) else {
            return false;
        };
        if *held < quantity {
            return false;
        }
        *held -= quantity;
        if *held == 0 {
            self.items.remove(name);
        }
        true
    }

    /// Check whether an item is held.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Quantity held of an item (0 if absent).
    pub fn quantity(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of distinct items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over `(name, quantity)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// A copy of the contents, as written to a save file.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.items.clone()
    }
}

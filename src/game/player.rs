//! Player state management.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::game::{Item, MAX_ITEM_QUANTITY};

/// Unique identifier for a player, assigned in entry order starting at 1.
pub type PlayerId = u8;

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Remaining health; zero means eliminated.
    pub health: u8,
    /// Held items. An item absent from the map is held zero times.
    pub items: BTreeMap<Item, u8>,
    /// Whether this player is the operator running the tool.
    pub is_user: bool,
}

impl Player {
    /// Create a player with no health and no items.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_user: bool) -> Self {
        Self {
            id,
            name: name.into(),
            health: 0,
            items: BTreeMap::new(),
            is_user,
        }
    }

    /// Check if this player still has health left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// How many of an item this player holds.
    #[must_use]
    pub fn item_quantity(&self, item: Item) -> u8 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// Total number of items held, across all kinds.
    #[must_use]
    pub fn item_total(&self) -> u32 {
        self.items.values().map(|&q| u32::from(q)).sum()
    }

    /// Set an item's quantity. Zero removes the entry; values above
    /// [`MAX_ITEM_QUANTITY`] are ignored.
    ///
    /// Returns `true` if the value was accepted.
    pub fn set_item_quantity(&mut self, item: Item, quantity: u8) -> bool {
        if quantity > MAX_ITEM_QUANTITY {
            return false;
        }
        if quantity == 0 {
            self.items.remove(&item);
        } else {
            self.items.insert(item, quantity);
        }
        true
    }

    /// Add one of an item, up to [`MAX_ITEM_QUANTITY`].
    pub fn increment_item(&mut self, item: Item) -> bool {
        let quantity = self.item_quantity(item);
        quantity < MAX_ITEM_QUANTITY && self.set_item_quantity(item, quantity + 1)
    }

    /// Remove one of an item. Returns `false` if none was held.
    pub fn decrement_item(&mut self, item: Item) -> bool {
        let quantity = self.item_quantity(item);
        quantity > 0 && self.set_item_quantity(item, quantity - 1)
    }

    /// Lose `amount` health, stopping at zero.
    pub fn take_damage(&mut self, amount: u8) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Items held with a positive quantity, in catalog order.
    pub fn held_items(&self) -> impl Iterator<Item = (Item, u8)> + '_ {
        self.items
            .iter()
            .filter(|&(_, &q)| q > 0)
            .map(|(&item, &q)| (item, q))
    }
}

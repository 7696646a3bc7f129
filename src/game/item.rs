//! The item catalog.

use std::fmt;

use serde::Serialize;

/// Highest quantity of a single item a player can hold.
pub const MAX_ITEM_QUANTITY: u8 = 9;

/// One of the nine item kinds a player can hold.
///
/// Declaration order is catalog order: setup pages through items in this
/// order and a player's inventory iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Item {
    /// Doubles the damage of the next live round.
    #[serde(rename = "Hand Saw")]
    HandSaw,
    /// Reveals the chambered shell.
    #[serde(rename = "Magnifying Glass")]
    MagnifyingGlass,
    /// Makes an opponent skip a turn.
    #[serde(rename = "Jammer")]
    Jammer,
    /// Restores one health.
    #[serde(rename = "Cigarette Pack")]
    CigarettePack,
    /// Racks the shotgun, ejecting the chambered shell.
    #[serde(rename = "Beer")]
    Beer,
    /// Reveals a shell further down the magazine.
    #[serde(rename = "Burner Phone")]
    BurnerPhone,
    /// Steals an item from an opponent.
    #[serde(rename = "Adrenaline")]
    Adrenaline,
    /// Swaps the polarity of the chambered shell.
    #[serde(rename = "Inverter")]
    Inverter,
    /// Reverses turn order.
    #[serde(rename = "Remote")]
    Remote,
}

impl Item {
    /// Every item, in catalog order.
    pub const ALL: [Item; 9] = [
        Item::HandSaw,
        Item::MagnifyingGlass,
        Item::Jammer,
        Item::CigarettePack,
        Item::Beer,
        Item::BurnerPhone,
        Item::Adrenaline,
        Item::Inverter,
        Item::Remote,
    ];

    /// Display name of the item.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Item::HandSaw => "Hand Saw",
            Item::MagnifyingGlass => "Magnifying Glass",
            Item::Jammer => "Jammer",
            Item::CigarettePack => "Cigarette Pack",
            Item::Beer => "Beer",
            Item::BurnerPhone => "Burner Phone",
            Item::Adrenaline => "Adrenaline",
            Item::Inverter => "Inverter",
            Item::Remote => "Remote",
        }
    }

    /// Item at a catalog position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Item> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        assert_eq!(Item::ALL.len(), 9);
        assert_eq!(Item::from_index(0), Some(Item::HandSaw));
        assert_eq!(Item::from_index(4), Some(Item::Beer));
        assert_eq!(Item::from_index(8), Some(Item::Remote));
        assert_eq!(Item::from_index(9), None);
    }

    #[test]
    fn test_catalog_is_sorted() {
        let mut sorted = Item::ALL;
        sorted.sort();
        assert_eq!(sorted, Item::ALL);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Item::CigarettePack.to_string(), "Cigarette Pack");
        assert_eq!(
            serde_json::to_string(&Item::BurnerPhone).unwrap(),
            "\"Burner Phone\""
        );
    }
}

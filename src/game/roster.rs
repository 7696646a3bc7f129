//! The ordered set of players in a match.
//!
//! Mutators that name an unknown player id do nothing. The tool runs live
//! alongside a physical game, so a stray id must never take a match down.

use crate::game::{Item, Player, PlayerId};

/// Fewest players a match can have.
pub const MIN_PLAYERS: u8 = 2;
/// Most players a match can have.
pub const MAX_PLAYERS: u8 = 8;
/// Lowest health a player can be given at setup.
pub const MIN_HEALTH: u8 = 1;
/// Highest health a player can be given at setup.
pub const MAX_HEALTH: u8 = 6;

/// Ordered collection of players. The first player is the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create `count` players, clamped to `[MIN_PLAYERS, MAX_PLAYERS]`.
    ///
    /// Player 1 is the operator named `user_name`; the rest are labelled
    /// `OPPONENT 1`, `OPPONENT 2`, ... All start with zero health and no
    /// items.
    #[must_use]
    pub fn create_players(count: u8, user_name: &str) -> Self {
        let count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let players = (0..count)
            .map(|i| {
                if i == 0 {
                    Player::new(1, user_name, true)
                } else {
                    Player::new(i + 1, format!("OPPONENT {i}"), false)
                }
            })
            .collect();
        Self { players }
    }

    /// All players in entry order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Get a player by position in entry order.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The operator's player.
    #[must_use]
    pub fn user(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_user)
    }

    /// Set a player's health. Values outside `[MIN_HEALTH, MAX_HEALTH]`
    /// are ignored.
    pub fn set_health(&mut self, id: PlayerId, value: u8) {
        if !(MIN_HEALTH..=MAX_HEALTH).contains(&value) {
            return;
        }
        if let Some(player) = self.get_mut(id) {
            player.health = value;
        }
    }

    /// Set how many of an item a player holds. Zero removes the item.
    pub fn set_item_quantity(&mut self, id: PlayerId, item: Item, quantity: u8) {
        if let Some(player) = self.get_mut(id) {
            player.set_item_quantity(item, quantity);
        }
    }

    /// Give a player one more of an item.
    pub fn increment_item(&mut self, id: PlayerId, item: Item) {
        if let Some(player) = self.get_mut(id) {
            player.increment_item(item);
        }
    }

    /// Take one of an item from a player.
    ///
    /// Returns `true` if the player held at least one.
    pub fn decrement_item(&mut self, id: PlayerId, item: Item) -> bool {
        self.get_mut(id).is_some_and(|p| p.decrement_item(item))
    }

    /// Reduce a player's health by `amount`, never below zero.
    pub fn apply_damage(&mut self, id: PlayerId, amount: u8) {
        if let Some(player) = self.get_mut(id) {
            player.take_damage(amount);
        }
    }

    /// Number of players with health left.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Players with health left.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// A player's items with positive quantity, in catalog order.
    ///
    /// Empty for an unknown id.
    #[must_use]
    pub fn available_items(&self, id: PlayerId) -> Vec<(Item, u8)> {
        self.get(id)
            .map(|p| p.held_items().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_players() {
        let roster = Roster::create_players(3, "ACE");
        assert_eq!(roster.len(), 3);

        let names: Vec<_> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ACE", "OPPONENT 1", "OPPONENT 2"]);

        let ids: Vec<_> = roster.players().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(roster.players().iter().all(|p| p.health == 0 && p.items.is_empty()));
        assert_eq!(roster.user().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_create_players_clamps_count() {
        assert_eq!(Roster::create_players(0, "ACE").len(), 2);
        assert_eq!(Roster::create_players(20, "ACE").len(), 8);
    }

    #[test]
    fn test_exactly_one_user() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            let roster = Roster::create_players(count, "ACE");
            assert_eq!(roster.players().iter().filter(|p| p.is_user).count(), 1);
        }
    }

    #[test]
    fn test_set_health_bounds() {
        let mut roster = Roster::create_players(2, "ACE");
        roster.set_health(1, 4);
        assert_eq!(roster.get(1).map(|p| p.health), Some(4));

        roster.set_health(1, 0);
        roster.set_health(1, 7);
        assert_eq!(roster.get(1).map(|p| p.health), Some(4));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut roster = Roster::create_players(2, "ACE");
        let before = roster.clone();

        roster.set_health(9, 3);
        roster.set_item_quantity(9, Item::Beer, 2);
        roster.increment_item(9, Item::Beer);
        assert!(!roster.decrement_item(9, Item::Beer));
        roster.apply_damage(9, 1);

        assert_eq!(roster, before);
        assert!(roster.available_items(9).is_empty());
    }

    #[test]
    fn test_apply_damage_and_alive_count() {
        let mut roster = Roster::create_players(3, "ACE");
        for id in 1..=3 {
            roster.set_health(id, 2);
        }
        assert_eq!(roster.alive_count(), 3);

        roster.apply_damage(2, 1);
        assert_eq!(roster.get(2).map(|p| p.health), Some(1));

        roster.apply_damage(2, 5);
        assert_eq!(roster.get(2).map(|p| p.health), Some(0));
        assert_eq!(roster.alive_count(), 2);

        // Eliminated players stay in the roster
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_item_mutators() {
        let mut roster = Roster::create_players(2, "ACE");
        roster.set_item_quantity(2, Item::Beer, 1);
        roster.increment_item(2, Item::Inverter);
        assert_eq!(
            roster.available_items(2),
            vec![(Item::Beer, 1), (Item::Inverter, 1)]
        );

        assert!(roster.decrement_item(2, Item::Beer));
        assert!(!roster.decrement_item(2, Item::Beer));
        assert_eq!(roster.available_items(2), vec![(Item::Inverter, 1)]);
    }
}

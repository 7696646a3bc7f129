//! Append-only record of resolved actions: the match history.

use std::fmt;

use serde::Serialize;

use crate::game::{Item, Shell};

/// What a logged action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Fired the shotgun at a target.
    Shoot,
    /// Used an item.
    Item,
}

/// One resolved action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    /// Name of the acting player.
    pub actor: String,
    /// Kind of action.
    #[serde(rename = "action")]
    pub kind: ActionKind,
    /// Name of the player shot at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Item used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    /// Shell that was fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Shell>,
    /// Damage dealt by the shot (0 or 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u8>,
}

impl ActionEntry {
    /// Entry for a shot.
    #[must_use]
    pub fn shot(actor: impl Into<String>, target: impl Into<String>, outcome: Shell) -> Self {
        Self {
            actor: actor.into(),
            kind: ActionKind::Shoot,
            target: Some(target.into()),
            item: None,
            outcome: Some(outcome),
            damage: Some(u8::from(outcome == Shell::Live)),
        }
    }

    /// Entry for an item use.
    #[must_use]
    pub fn item_use(actor: impl Into<String>, item: Item) -> Self {
        Self {
            actor: actor.into(),
            kind: ActionKind::Item,
            target: None,
            item: Some(item),
            outcome: None,
            damage: None,
        }
    }
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActionKind::Shoot => write!(f, "{}: shoot", self.actor)?,
            ActionKind::Item => write!(f, "{}: item", self.actor)?,
        }
        if let Some(item) = self.item {
            write!(f, " [{item}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " → {target}")?;
        }
        if let Some(outcome) = self.outcome {
            write!(f, " ({outcome})")?;
            if let Some(damage) = self.damage.filter(|&d| d > 0) {
                write!(f, " -{damage}HP")?;
            }
        }
        Ok(())
    }
}

/// The full history of a match. Entries can be appended but never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: ActionEntry) {
        log::debug!("recorded action: {entry}");
        self.entries.push(entry);
    }

    /// Every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[ActionEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_entry() {
        let live = ActionEntry::shot("ACE", "OPPONENT 1", Shell::Live);
        assert_eq!(live.kind, ActionKind::Shoot);
        assert_eq!(live.damage, Some(1));
        assert_eq!(live.to_string(), "ACE: shoot → OPPONENT 1 (live) -1HP");

        let blank = ActionEntry::shot("ACE", "ACE", Shell::Blank);
        assert_eq!(blank.damage, Some(0));
        assert_eq!(blank.to_string(), "ACE: shoot → ACE (blank)");
    }

    #[test]
    fn test_item_entry_has_no_outcome() {
        let entry = ActionEntry::item_use("ACE", Item::Beer);
        assert_eq!(entry.kind, ActionKind::Item);
        assert!(entry.outcome.is_none());
        assert!(entry.damage.is_none());
        assert!(entry.target.is_none());
        assert_eq!(entry.to_string(), "ACE: item [Beer]");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "item");
        assert_eq!(json["item"], "Beer");
        assert!(json.get("outcome").is_none());
        assert!(json.get("damage").is_none());
    }

    #[test]
    fn test_recent() {
        let mut log = ActionLog::new();
        assert!(log.recent(3).is_empty());

        for i in 0..5 {
            log.append(ActionEntry::item_use(format!("P{i}"), Item::Beer));
        }
        assert_eq!(log.len(), 5);

        let recent = log.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].actor, "P2");
        assert_eq!(recent[2].actor, "P4");
        assert_eq!(log.recent(10).len(), 5);
    }
}

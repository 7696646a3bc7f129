//! Tactical recommendations from shell odds and the operator's health.
//!
//! Rules are checked in order; the first that matches decides the advice.
//! Threshold comparisons use exact ratios, and only the percentage shown in
//! the message is rounded.

use serde::Serialize;

use crate::game::{AmmoPool, MatchState};

/// Live share above which the threat is high.
pub const HIGH_THREAT_PERCENT: u8 = 70;
/// Live share below which the threat is low.
pub const LOW_THREAT_PERCENT: u8 = 30;
/// Health at or below which the operator is in critical condition.
pub const CRITICAL_HEALTH: u8 = 1;

/// Category of advice, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    /// One player or none left standing.
    GameOver,
    /// The magazine is empty.
    MissionComplete,
    /// Only blanks remain.
    SafeZone,
    /// Only live rounds remain.
    DangerZone,
    /// High live odds and the operator is on their last health.
    Critical,
    /// High live odds.
    High,
    /// Low live odds.
    Low,
    /// Medium odds with the operator on their last health.
    Caution,
    /// Medium odds.
    Medium,
}

/// A recommendation: its category and the message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    /// Category of the advice.
    pub level: ThreatLevel,
    /// Text shown to the operator.
    pub message: String,
}

/// Everything the recommendation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceInputs<'a> {
    /// Remaining shells.
    pub ammo: AmmoPool,
    /// Players with health left.
    pub alive_count: usize,
    /// Name of the last player standing, when `alive_count` is 1.
    pub survivor: Option<&'a str>,
    /// The operator's callsign.
    pub user_name: &'a str,
    /// The operator's remaining health.
    pub user_health: u8,
}

impl<'a> AdviceInputs<'a> {
    /// Gather inputs from a match.
    #[must_use]
    pub fn from_state(state: &'a MatchState) -> Self {
        Self {
            ammo: state.ammo,
            alive_count: state.roster.alive_count(),
            survivor: state.winner().map(|p| p.name.as_str()),
            user_name: state.roster.user().map_or("", |p| p.name.as_str()),
            user_health: state.user_health(),
        }
    }
}

/// Recommend a move for the current match.
#[must_use]
pub fn recommend(state: &MatchState) -> Advice {
    evaluate(&AdviceInputs::from_state(state))
}

/// Apply the recommendation rules to `inputs`.
#[must_use]
pub fn evaluate(inputs: &AdviceInputs<'_>) -> Advice {
    let user = inputs.user_name;
    let ammo = &inputs.ammo;
    let hp = inputs.user_health;
    let live = ammo.live_display_percent();

    let (level, message) = if inputs.alive_count <= 1 {
        let message = match inputs.survivor {
            Some(name) => format!("GAME OVER - {name} WINS! Returning to setup..."),
            None => "GAME OVER - Returning to setup...".to_string(),
        };
        (ThreatLevel::GameOver, message)
    } else if ammo.total_remaining() == 0 {
        (
            ThreatLevel::MissionComplete,
            format!("{user}: MISSION COMPLETE - Return to setup"),
        )
    } else if ammo.live() == 0 {
        (
            ThreatLevel::SafeZone,
            format!("{user}: SAFE ZONE - Only blanks remaining, proceed with confidence"),
        )
    } else if ammo.blank() == 0 {
        (
            ThreatLevel::DangerZone,
            format!("{user}: DANGER ZONE - Only live rounds left, extreme caution advised"),
        )
    } else if ammo.live_share_above(HIGH_THREAT_PERCENT) {
        if hp <= CRITICAL_HEALTH {
            (
                ThreatLevel::Critical,
                format!(
                    "{user}: CRITICAL - High live chance ({live}%), you have {hp} HP. AVOID SELF-TARGETING"
                ),
            )
        } else {
            (
                ThreatLevel::High,
                format!("{user}: HIGH THREAT - {live}% live chance. Target opponents, avoid yourself"),
            )
        }
    } else if ammo.live_share_below(LOW_THREAT_PERCENT) {
        (
            ThreatLevel::Low,
            format!(
                "{user}: LOW THREAT - Only {live}% live chance. Self-targeting is relatively safe"
            ),
        )
    } else if hp <= CRITICAL_HEALTH {
        (
            ThreatLevel::Caution,
            format!(
                "{user}: CAUTION - You're at {hp} HP with {live}% live chance. Use items for intel"
            ),
        )
    } else {
        (
            ThreatLevel::Medium,
            format!("{user}: MEDIUM THREAT - {live}% live chance. Gather intelligence before deciding"),
        )
    };

    Advice { level, message }
}

//! Plain-text rendering of a [`Snapshot`].
//!
//! Used by the headless script runner and anywhere a terminal UI is not
//! available. Output format:
//!
//! ```text
//! === TACTICAL ASSISTANT ===
//!
//! AMMO: 2 LIVE / 2 BLANK (50% / 50%), 4 OF 4 LEFT
//!
//! PLAYERS:
//! - ACE [YOU]: 3 HP | Beer x1
//! - OPPONENT 1: 0 HP [ELIMINATED]
//!
//! TURN: SELECT TARGET (ACE)
//! > OPPONENT 1 (Health: 1)
//!
//! RECENT ACTIONS:
//! - ACE: shoot → OPPONENT 1 (live) -1HP
//!
//! ADVICE [HIGH]: ACE: HIGH THREAT - ...
//! ```

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use crate::advice::ThreatLevel;
use crate::game::{Item, Player, Shell};
use crate::setup::{SetupStep, SetupView};
use crate::snapshot::{AmmoView, MatchView, ScreenView, Snapshot};
use crate::turn::TurnPhase;

/// Title shown at the top of every screen.
pub const TITLE: &str = "TACTICAL ASSISTANT";

/// Render a snapshot as plain text.
#[must_use]
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut output = format!("=== {TITLE} ===\n\n");

    match &snapshot.screen {
        ScreenView::Callsign { text, can_confirm } => {
            output.push_str(&format!("ENTER CALLSIGN: {text}_\n"));
            if *can_confirm {
                output.push_str("[ENTER] Confirm\n");
            }
        }
        ScreenView::Setup(view) => render_setup(&mut output, view, &snapshot.players),
        ScreenView::Match(view) => {
            if let Some(ammo) = snapshot.ammo {
                render_ammo(&mut output, ammo);
            }
            render_players(&mut output, &snapshot.players);
            render_turn(&mut output, view);
            if !snapshot.recent_actions.is_empty() {
                output.push_str("\nRECENT ACTIONS:\n");
                for entry in &snapshot.recent_actions {
                    output.push_str(&format!("- {entry}\n"));
                }
            }
        }
    }

    if let Some(advice) = &snapshot.recommendation {
        output.push_str(&format!(
            "\nADVICE [{}]: {}\n",
            threat_label(advice.level),
            advice.message
        ));
    }

    output
}

fn render_setup(output: &mut String, view: &SetupView, players: &[Player]) {
    let current = players.get(view.player_index);
    let name = current.map_or("", |p| p.name.as_str());

    match view.step {
        SetupStep::PlayerCount => {
            output.push_str(&format!("SETUP: PLAYER COUNT\nPlayers: {}\n", view.player_count));
        }
        SetupStep::Naming => {
            output.push_str(&format!(
                "SETUP: PLAYER {} OF {}\nName: {name}\n",
                view.player_index + 1,
                view.player_count
            ));
        }
        SetupStep::Health => {
            let health = if view.health == 0 {
                "-".to_string()
            } else {
                view.health.to_string()
            };
            output.push_str(&format!("SETUP: HEALTH FOR {name}\nHealth: {health}\n"));
        }
        SetupStep::Items => {
            output.push_str(&format!("SETUP: ITEMS FOR {name}\n"));
            for (i, item) in Item::ALL.iter().enumerate() {
                let marker = if i == view.item_cursor { '>' } else { ' ' };
                let quantity = current.map_or(0, |p| p.item_quantity(*item));
                output.push_str(&format!("{marker} {item}: {quantity}\n"));
            }
        }
        SetupStep::Ammo => {
            output.push_str("SETUP: LOAD SHOTGUN\n");
            for (shell, count) in [(Shell::Live, view.live), (Shell::Blank, view.blank)] {
                let marker = if shell == view.ammo_field { '>' } else { ' ' };
                output.push_str(&format!("{marker} {}: {count}\n", shell.label()));
            }
        }
    }

    if view.can_confirm {
        output.push_str("[ENTER] Confirm\n");
    }
}

fn render_ammo(output: &mut String, ammo: AmmoView) {
    output.push_str(&format!(
        "AMMO: {} LIVE / {} BLANK ({}% / {}%), {} OF {} LEFT\n",
        ammo.live,
        ammo.blank,
        ammo.live_percent,
        ammo.blank_percent,
        ammo.total,
        u16::from(ammo.initial_live) + u16::from(ammo.initial_blank)
    ));
}

fn render_players(output: &mut String, players: &[Player]) {
    output.push_str("\nPLAYERS:\n");
    for player in players {
        output.push_str(&format!("- {}", player.name));
        if player.is_user {
            output.push_str(" [YOU]");
        }
        output.push_str(&format!(": {} HP", player.health));
        if !player.is_alive() {
            output.push_str(" [ELIMINATED]");
        }
        let items: Vec<String> = player
            .held_items()
            .map(|(item, quantity)| format!("{item} x{quantity}"))
            .collect();
        if !items.is_empty() {
            output.push_str(&format!(" | {}", items.join(", ")));
        }
        output.push('\n');
    }
}

fn render_turn(output: &mut String, view: &MatchView) {
    if view.over {
        output.push_str("\nMATCH OVER\n");
        if view.returning {
            output.push_str("Returning to setup...\n");
        }
        return;
    }

    let step = match view.phase {
        TurnPhase::SelectActor => "SELECT ACTOR",
        TurnPhase::SelectActionKind => "SELECT ACTION",
        TurnPhase::SelectTarget => "SELECT TARGET",
        TurnPhase::SelectItem => "SELECT ITEM",
        TurnPhase::SelectOutcome => "SELECT OUTCOME",
    };
    output.push_str(&format!("\nTURN: {step}"));
    match (&view.actor, &view.target) {
        (Some(actor), Some(target)) => output.push_str(&format!(" ({actor} → {target})")),
        (Some(actor), None) => output.push_str(&format!(" ({actor})")),
        _ => {}
    }
    output.push('\n');

    if view.options.is_empty() {
        output.push_str("  (nothing to choose)\n");
    }
    for (i, option) in view.options.iter().enumerate() {
        let marker = if i == view.cursor { '>' } else { ' ' };
        output.push_str(&format!("{marker} {option}\n"));
    }
}

/// Short label for a threat level.
#[must_use]
pub fn threat_label(level: ThreatLevel) -> &'static str {
    match level {
        ThreatLevel::GameOver => "GAME OVER",
        ThreatLevel::MissionComplete => "COMPLETE",
        ThreatLevel::SafeZone => "SAFE",
        ThreatLevel::DangerZone => "DANGER",
        ThreatLevel::Critical => "CRITICAL",
        ThreatLevel::High => "HIGH",
        ThreatLevel::Low => "LOW",
        ThreatLevel::Caution => "CAUTION",
        ThreatLevel::Medium => "MEDIUM",
    }
}

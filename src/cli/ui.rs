//! Terminal drawing for the play command.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tactician::game::{Item, Player, Shell};
use tactician::render::{TITLE, threat_label};
use tactician::setup::{SetupStep, SetupView};
use tactician::snapshot::{AmmoView, MatchView, ScreenView, Snapshot};
use tactician::turn::TurnPhase;
use tactician::{Advice, ThreatLevel};

/// Draw one frame.
pub(super) fn draw(f: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Advice
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], snapshot);

    match &snapshot.screen {
        ScreenView::Callsign { text, can_confirm } => {
            render_callsign(f, chunks[1], text, *can_confirm);
        }
        ScreenView::Setup(view) => render_setup(f, chunks[1], view, &snapshot.players),
        ScreenView::Match(view) => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);
            render_turn(f, main_chunks[0], view);
            render_status(f, main_chunks[1], snapshot);
        }
    }

    render_advice(f, chunks[2], snapshot.recommendation.as_ref());
    render_footer(f, chunks[3], snapshot);
}

fn render_header(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let operator = snapshot
        .players
        .iter()
        .find(|p| p.is_user)
        .map(|p| format!(" | Operator: {}", p.name))
        .unwrap_or_default();
    let header = Paragraph::new(format!(" {TITLE}{operator} "))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_callsign(f: &mut Frame, area: Rect, text: &str, can_confirm: bool) {
    let mut lines = vec![
        Line::from(""),
        Line::from("Enter your callsign:"),
        Line::from(Span::styled(
            format!("> {text}_"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    if !can_confirm {
        lines.push(Line::from(Span::styled(
            "Letters, digits and spaces",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Callsign "));
    f.render_widget(widget, area);
}

fn render_setup(f: &mut Frame, area: Rect, view: &SetupView, players: &[Player]) {
    let current = players.get(view.player_index);
    let name = current.map_or("", |p| p.name.as_str());
    let mut lines = vec![Line::from("")];

    let title = match view.step {
        SetupStep::PlayerCount => {
            lines.push(Line::from("How many players at the table?"));
            lines.push(value_line(&view.player_count.to_string()));
            " Setup: Players "
        }
        SetupStep::Naming => {
            lines.push(Line::from(format!(
                "Player {} of {}",
                view.player_index + 1,
                view.player_count
            )));
            lines.push(value_line(name));
            " Setup: Names "
        }
        SetupStep::Health => {
            lines.push(Line::from(format!("Starting health for {name} (1-6)")));
            let health = if view.health == 0 {
                "-".to_string()
            } else {
                view.health.to_string()
            };
            lines.push(value_line(&health));
            " Setup: Health "
        }
        SetupStep::Items => {
            lines.push(Line::from(format!("Items held by {name}")));
            for (i, item) in Item::ALL.iter().enumerate() {
                let quantity = current.map_or(0, |p| p.item_quantity(*item));
                lines.push(option_line(&format!("{item}: {quantity}"), i == view.item_cursor));
            }
            " Setup: Items "
        }
        SetupStep::Ammo => {
            lines.push(Line::from("Shells loaded (both must be above 0)"));
            for (shell, count) in [(Shell::Live, view.live), (Shell::Blank, view.blank)] {
                lines.push(option_line(
                    &format!("{}: {count}", shell.label()),
                    shell == view.ammo_field,
                ));
            }
            " Setup: Ammo "
        }
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_turn(f: &mut Frame, area: Rect, view: &MatchView) {
    let mut lines = vec![Line::from("")];

    let title = if view.over {
        lines.push(Line::from(Span::styled(
            "MATCH OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        if view.returning {
            lines.push(Line::from("Returning to setup..."));
        }
        " Match "
    } else {
        match (&view.actor, &view.target) {
            (Some(actor), Some(target)) => lines.push(Line::from(format!("{actor} → {target}"))),
            (Some(actor), None) => lines.push(Line::from(format!("Actor: {actor}"))),
            _ => {}
        }
        if view.options.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing to choose. [←] Back",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for (i, option) in view.options.iter().enumerate() {
            lines.push(option_line(option, i == view.cursor));
        }
        match view.phase {
            TurnPhase::SelectActor => " Who acts? ",
            TurnPhase::SelectActionKind => " Action ",
            TurnPhase::SelectTarget => " Target ",
            TurnPhase::SelectItem => " Item ",
            TurnPhase::SelectOutcome => " Shell fired ",
        }
    };

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let mut lines = Vec::new();

    if let Some(ammo) = snapshot.ammo {
        lines.extend(ammo_lines(ammo));
        lines.push(Line::from(""));
    }

    for player in &snapshot.players {
        let color = match (player.is_alive(), player.is_user) {
            (false, _) => Color::DarkGray,
            (true, true) => Color::Cyan,
            (true, false) => Color::White,
        };
        let status = if player.is_alive() { "" } else { " [ELIMINATED]" };
        lines.push(Line::from(vec![
            Span::styled(player.name.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {} HP{status}", player.health)),
        ]));
        let items: Vec<String> = player
            .held_items()
            .map(|(item, quantity)| format!("{item} x{quantity}"))
            .collect();
        if !items.is_empty() {
            lines.push(Line::from(format!("  {}", items.join(", "))));
        }
    }

    if !snapshot.recent_actions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Recent actions",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for entry in &snapshot.recent_actions {
            lines.push(Line::from(entry.to_string()));
        }
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Table "))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn ammo_lines(ammo: AmmoView) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("LIVE {}", ammo.live), Style::default().fg(Color::Red)),
            Span::raw(format!(" ({}%)  ", ammo.live_percent)),
            Span::styled(format!("BLANK {}", ammo.blank), Style::default().fg(Color::Blue)),
            Span::raw(format!(" ({}%)", ammo.blank_percent)),
        ]),
        Line::from(format!(
            "{} of {} shells left",
            ammo.total,
            u16::from(ammo.initial_live) + u16::from(ammo.initial_blank)
        )),
    ]
}

fn render_advice(f: &mut Frame, area: Rect, advice: Option<&Advice>) {
    let widget = match advice {
        Some(advice) => Paragraph::new(advice.message.as_str())
            .style(Style::default().fg(threat_color(advice.level)).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Advice: {} ", threat_label(advice.level))),
            ),
        None => Paragraph::new("").block(Block::default().borders(Borders::ALL).title(" Advice ")),
    };
    f.render_widget(widget, area);
}

fn threat_color(level: ThreatLevel) -> Color {
    match level {
        ThreatLevel::GameOver | ThreatLevel::MissionComplete => Color::Magenta,
        ThreatLevel::SafeZone | ThreatLevel::Low => Color::Green,
        ThreatLevel::DangerZone | ThreatLevel::Critical => Color::Red,
        ThreatLevel::High => Color::LightRed,
        ThreatLevel::Caution | ThreatLevel::Medium => Color::Yellow,
    }
}

fn render_footer(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let controls = match &snapshot.screen {
        ScreenView::Callsign { .. } => " [Type] Callsign  [Enter] Confirm  [Ctrl-C] Quit ",
        ScreenView::Setup(view) => match view.step {
            SetupStep::Naming => " [Enter] Next  [q] Quit ",
            SetupStep::Items => " [↑/↓] Item  [0-9/+/-] Quantity  [Enter] Next  [q] Quit ",
            SetupStep::Ammo => " [↑/↓] Field  [0-8/+/-] Count  [Enter] Start  [q] Quit ",
            SetupStep::PlayerCount | SetupStep::Health => {
                " [0-9/+/-] Value  [Enter] Confirm  [q] Quit "
            }
        },
        ScreenView::Match(_) => " [↑/↓] Select  [Enter] Confirm  [←] Back  [Esc] Setup  [q] Quit ",
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn value_line(value: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("> {value}"),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn option_line(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {label}"),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ))
    } else {
        Line::from(format!("  {label}"))
    }
}

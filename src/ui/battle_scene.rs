use crate::battle::{BattleState, Combatant, LogKind};
use crate::constants::MAX_HEALTH;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Draws the whole duel scene: health bars, status panel, controls, log.
pub fn draw_battle_scene(frame: &mut Frame, area: Rect, state: &BattleState) {
    let outer = Block::default().borders(Borders::ALL).title(" Duel ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Monster health bar
            Constraint::Length(3), // Player health bar
            Constraint::Length(4), // Game-over panel / status line
            Constraint::Length(1), // Controls
            Constraint::Min(3),    // Battle log
        ])
        .split(inner);

    draw_health_bar(frame, chunks[0], "Monster", state.monster_health);
    draw_health_bar(frame, chunks[1], "Your Health", state.player_health);
    draw_status(frame, chunks[2], state);
    draw_controls(frame, chunks[3], state);
    draw_battle_log(frame, chunks[4], state);
}

fn health_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_health_bar(frame: &mut Frame, area: Rect, title: &str, health: u32) {
    let ratio = health as f64 / MAX_HEALTH as f64;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(
            Style::default()
                .fg(health_color(ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("{}/{}", health, MAX_HEALTH))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &BattleState) {
    let lines = if state.game_over {
        let outcome_color = if state.player_won {
            Color::Green
        } else {
            Color::Red
        };
        vec![
            Line::from(Span::styled(
                "Game Over!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                state.outcome_label(),
                Style::default()
                    .fg(outcome_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press 'n' to start a new game",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        let special_status = if state.special_ready {
            Span::styled(
                "Special ready!",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!(
                "Special charges in {} attack(s)",
                charge_attacks_remaining(state)
            ))
        };
        vec![
            Line::from(vec![
                Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    "In Combat",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(special_status),
        ]
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Attacks left until the special charge lands (1..=3 while unready).
fn charge_attacks_remaining(state: &BattleState) -> u32 {
    let threshold = crate::constants::SPECIAL_UNLOCK_ATTACKS;
    threshold - state.attack_count % threshold
}

fn draw_controls(frame: &mut Frame, area: Rect, state: &BattleState) {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let in_progress = !state.game_over;
    let spans = vec![
        Span::styled("[a]ttack", if in_progress { enabled } else { disabled }),
        Span::raw("  "),
        Span::styled(
            "[h]eal",
            if in_progress && !state.heal_used {
                enabled
            } else {
                disabled
            },
        ),
        Span::raw("  "),
        Span::styled(
            "[s]pecial",
            if in_progress && state.special_ready {
                enabled
            } else {
                disabled
            },
        ),
        Span::raw("  "),
        Span::styled("[f]orfeit", if in_progress { enabled } else { disabled }),
        Span::raw("  "),
        Span::styled("[n]ew game", enabled),
        Span::raw("  "),
        Span::styled("[q]uit", enabled),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_battle_log(frame: &mut Frame, area: Rect, state: &BattleState) {
    let items: Vec<ListItem> = state
        .battle_log
        .iter()
        .map(|entry| {
            let actor_style = match entry.actor {
                Combatant::Player => Style::default().fg(Color::Cyan),
                Combatant::Monster => Style::default().fg(Color::Red),
            };
            let kind_style = match entry.kind {
                LogKind::Damage => Style::default().fg(Color::Yellow),
                LogKind::Heal => Style::default().fg(Color::Green),
            };
            ListItem::new(Line::from(vec![
                Span::styled(entry.actor.name(), actor_style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    entry.text[entry.actor.name().len()..].to_string(),
                    kind_style,
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Battle Log"));
    frame.render_widget(list, area);
}

mod battle;
mod build_info;
mod constants;
mod ui;

use battle::{process_input, BattleInput, BattleState};
use constants::INPUT_POLL_INTERVAL_MS;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use ui::draw_battle_scene;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "duel {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Duel - Terminal Monster Duel\n");
                println!("Usage: duel\n");
                println!("In-game keys:");
                println!("  a          Attack the monster");
                println!("  h          Heal (once per game)");
                println!("  s          Special attack (charges every 3 attacks)");
                println!("  f          Forfeit the duel");
                println!("  n          Start a new game");
                println!("  q / Esc    Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'duel --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = BattleState::new();
    let mut rng = rand::thread_rng();

    // Main loop: draw, then handle at most one key per iteration. Every
    // action resolves fully before the next redraw.
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            draw_battle_scene(frame, area, &state);
        })?;

        if event::poll(Duration::from_millis(INPUT_POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                let input = match key_event.code {
                    KeyCode::Char('a') => Some(BattleInput::Attack),
                    KeyCode::Char('h') => Some(BattleInput::Heal),
                    KeyCode::Char('s') => Some(BattleInput::Special),
                    KeyCode::Char('f') => Some(BattleInput::Forfeit),
                    KeyCode::Char('n') => Some(BattleInput::Reset),
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => None,
                };
                if let Some(input) = input {
                    // Unavailable actions are no-ops; the controls line
                    // already shows them dimmed.
                    process_input(&mut state, input, &mut rng);
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}

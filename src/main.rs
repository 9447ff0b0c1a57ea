// Terminal Sokoban on the built-in level
// Controls: W/A/S/D or arrow keys to move, F2 or R for a new game, Esc or Q to quit.
// Tiles: '#' wall, '@' agent, '$' box, '.' target, '*' box on target, '+' agent on target, ' ' floor.

mod console_interface;
mod models;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use crate::models::GameRenderState;
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban::core::GridState;
use sokoban::error::ShellError;
use sokoban::replay::{moves_from_args, run_replay};
use std::io;

const LOG_FILE: &str = "sokoban.log";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("interactive".to_string());

    match switch.as_str() {
        "replay" => {
            init_logging(false)?;
            let moves = moves_from_args(args)?;
            run_replay(&moves)?;
        }
        "interactive" => {
            init_logging(true)?;
            run_interactive()?;
        }
        _ => {
            init_logging(true)?;
            warn!("unknown mode {}, defaulting to interactive", switch);
            run_interactive()?;
            // the alternate screen would have hidden this before the game
            eprintln!(
                "Unknown mode: {}. Use 'interactive' or 'replay'. defaulted to interactive",
                switch
            );
        }
    }

    Ok(())
}

/// Logging is off unless `RUST_LOG` asks for more than warnings. The terminal
/// interface owns the screen, so when it runs with logging requested the
/// output goes to a file instead.
fn init_logging(interactive: bool) -> Result<(), ShellError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if interactive && std::env::var_os("RUST_LOG").is_some() {
        let file = std::fs::File::create(LOG_FILE)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run_interactive() -> Result<(), ShellError> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // restore the screen so the panic message is readable
        let _ = cleanup_terminal();
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = play(&mut terminal);
    cleanup_terminal()?;
    result
}

fn play(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), ShellError> {
    let mut game = GridState::new();
    info!("starting interactive game");

    render_game(terminal, &GameRenderState {
        game: &game,
        last_outcome: None,
    })?;

    loop {
        match handle_input()? {
            Quit => break,
            UserAction(user_action) => {
                let last_outcome = game.perform(user_action);
                render_game(terminal, &GameRenderState {
                    game: &game,
                    last_outcome,
                })?;
            }
            Timeout | Unknown => {}
        }
    }

    info!("quit after {} moves", game.move_count());
    Ok(())
}

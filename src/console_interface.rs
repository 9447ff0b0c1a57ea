use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use sokoban::core::{Direction, MoveOutcome, UserAction};
use sokoban::error::ShellError;
use std::io;

const WIN_BANNER: &str = "Congratulations, you solved the game!";

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, ShellError> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), ShellError> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), ShellError> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = state.game.render_to_string();
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        if state.won() {
            let banner_area = centered_line(chunks[0], WIN_BANNER.len() as u16 + 4);
            let banner = Paragraph::new(WIN_BANNER)
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(Clear, banner_area);
            f.render_widget(banner, banner_area);
        }

        f.render_widget(status_paragraph(state), chunks[1]);
    })?;
    Ok(())
}

fn status_paragraph(state: &GameRenderState) -> Paragraph<'static> {
    let status = format!(
        "Moves: {} | F2 = new game | Esc = exit game",
        state.game.move_count()
    );
    let status = match state.last_outcome {
        Some(MoveOutcome::NoOp(reason)) => format!("{} | {}", status, reason),
        _ => status,
    };

    Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
}

/// A three-row box of `width` in the middle of `area`
fn centered_line(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let height = area.height.min(3);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, ShellError> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::F(2) | KeyCode::Char('r') | KeyCode::Char('R') => {
                    ConsoleInput::UserAction(UserAction::Restart)
                }
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

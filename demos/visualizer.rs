//! Terminal pathfinding visualizer using crossterm.
//!
//! Builds a random board, then animates Dijkstra and A* over it in turn,
//! redrawing the grid once per processed vertex. Esc or q cancels the
//! running search; after each run any key advances, Esc or q quits.
//!
//! Run: cargo run --bin visualizer

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::Grid;
use pathviz_demos::{BOARD_SIZE, build_board, state_glyph};
use pathviz_search::{Algorithm, CancelToken, SearchEngine, SearchOutcome};

const LEGEND: &str = "S start  D destination  \u{2588} wall  o frontier  x visited  @ path";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )?;

    let result = drive();

    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn drive() -> Result<(), Box<dyn std::error::Error>> {
    let board = build_board(BOARD_SIZE, rand::rng())?;

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        let mut grid = board.clone();
        let start = grid.start();
        let destination = grid.destination();
        let token = CancelToken::new();
        let mut engine = SearchEngine::for_grid(&grid);

        execute!(io::stdout(), terminal::Clear(ClearType::All))?;
        draw_grid(&grid)?;
        status(
            grid.size(),
            &format!("{algorithm:?}: searching (Esc or q cancels)"),
        )?;

        let tok = token.clone();
        let outcome = engine.run(
            &mut grid,
            algorithm,
            start,
            destination,
            |g, _| {
                let _ = draw_grid(g);
                let _ = pump_keys(&tok);
            },
            &token,
        )?;

        draw_grid(&grid)?;
        let line = match outcome {
            SearchOutcome::Found => match destination.and_then(|d| engine.cost_at(d)) {
                Some(cost) => format!(
                    "{algorithm:?}: path of cost {cost} after {} expansions, press any key",
                    engine.expansions()
                ),
                None => format!("{algorithm:?}: path found, press any key"),
            },
            SearchOutcome::NotFound => format!(
                "{algorithm:?}: no path after {} expansions, press any key",
                engine.expansions()
            ),
            SearchOutcome::Cancelled => format!("{algorithm:?}: cancelled, press any key"),
        };
        status(grid.size(), &line)?;

        if matches!(wait_key()?, KeyCode::Esc | KeyCode::Char('q')) {
            break;
        }
    }
    Ok(())
}

/// Redraw the whole board in place. Cells render two columns wide so the
/// board stays roughly square in a terminal.
fn draw_grid(grid: &Grid) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, cursor::MoveTo(0, 0))?;
    for v in grid.iter() {
        if v.col() == 0 && v.row() > 0 {
            queue!(stdout, Print("\r\n"))?;
        }
        let (ch, color) = state_glyph(v.state());
        queue!(stdout, SetForegroundColor(color), Print(ch), Print(' '))?;
    }
    queue!(stdout, ResetColor)?;
    stdout.flush()
}

fn status(size: i32, line: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveTo(0, size as u16 + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(line),
        cursor::MoveTo(0, size as u16 + 2),
        terminal::Clear(ClearType::CurrentLine),
        Print(LEGEND)
    )
}

/// Drain pending input, flipping the token on Esc or q. The initial poll
/// timeout doubles as animation pacing.
fn pump_keys(token: &CancelToken) -> io::Result<()> {
    if !event::poll(Duration::from_millis(16))? {
        return Ok(());
    }
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                token.cancel();
            }
        }
    }
    Ok(())
}

fn wait_key() -> io::Result<KeyCode> {
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            return Ok(code);
        }
    }
}

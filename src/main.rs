//! Binary entry point: CLI flags, terminal setup and teardown, and the
//! fixed-cadence frame loop.

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flappy::game::logic;
use flappy::game::types::{GamePhase, Session, FRAME_MS};
use flappy::input::{self, Action};
use flappy::persistence::BestScoreStore;
use flappy::{build_info, ui};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "flappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Arcade Game\n");
                println!("Usage: flappy\n");
                println!("Controls:");
                println!("  Space / Up / Enter / mouse click   Jump");
                println!("  Enter or R (game over)             Restart");
                println!("  Q or Esc                           Quit\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = BestScoreStore::new();
    let mut session = Session::new(store.load_best());
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &store, &mut rng);

    // Restore the terminal even if the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    result
}

/// Frame loop: draw, spend the remaining frame budget polling for input,
/// then run one tick while Playing. Input handlers and the tick routine run
/// to completion on this one thread; nothing else touches the session.
fn run<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    store: &BestScoreStore,
    rng: &mut R,
) -> io::Result<()> {
    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::render_game(frame, session))?;

        let timeout = frame_budget.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => input::map_key(key, session.phase),
                Event::Mouse(mouse) => input::map_mouse(mouse),
                _ => Action::None,
            };
            match action {
                Action::Jump => logic::jump(session),
                Action::Restart => logic::restart(session),
                Action::Quit => return Ok(()),
                Action::None => {}
            }
        }

        if last_tick.elapsed() >= frame_budget {
            if session.phase == GamePhase::Playing {
                logic::tick(session, rng);
                if session.phase == GamePhase::GameOver {
                    // Best-effort persist on the Playing -> GameOver edge
                    store.save_best(session.best_score);
                }
            }
            last_tick = Instant::now();
        }
    }
}

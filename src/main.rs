mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{error, info};

use space_survival::{GameConfig, GameController, GameModel};

use display::View;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Frames between simulation ticks (≈4 ticks/sec).
const TICK_FRAMES: u64 = 8;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: stderr output would tear through the raw-mode screen.
fn init_logging() {
    let path = std::env::temp_dir().join("space_survival.log");
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match std::fs::File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → restart.
fn game_loop<W: Write>(
    out: &mut W,
    controller: &mut GameController,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let started = Instant::now();
    let mut frame: u64 = 0;
    let mut tick: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let game_over = controller.model().ship().is_destroyed();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            let symbol = match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('r') | KeyCode::Char('R') if game_over => return Ok(false),
                KeyCode::Up => 'w',
                KeyCode::Left => 'a',
                KeyCode::Down => 's',
                KeyCode::Right => 'd',
                KeyCode::Char(' ') => 'f',
                KeyCode::Char(c) => c,
                _ => continue,
            };
            if game_over {
                continue;
            }
            // Rejected input is already logged by the controller.
            let _ = controller.handle_input(&symbol.to_string());
        }

        if !game_over && frame % TICK_FRAMES == 0 && controller.on_tick(tick) {
            tick += 1;
            if controller.model().ship().is_destroyed() {
                info!(
                    "Ship destroyed after {} ticks with score {}",
                    tick,
                    controller.model().ship().score()
                );
            }
        }

        let items = controller.frame();
        let stats = controller.stats(started.elapsed());
        let view = View {
            frame: &items,
            stats: &stats,
            paused: controller.is_paused(),
            game_over: controller.model().ship().is_destroyed(),
        };
        display::render(out, controller.model().config(), &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
) -> std::io::Result<()> {
    loop {
        let model = GameModel::new(config.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let mut controller = GameController::new(model);
        if game_loop(out, &mut controller, rx)? {
            break;
        }
        info!("Restarting");
    }
    Ok(())
}

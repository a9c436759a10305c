//! Terminal wireframe renderer (default binary).
//!
//! Shows a menu, then animates the reference cube on a fixed 80x24 grid.
//! Uses crossterm for input and a framebuffer-based renderer.

use std::env;
use std::fs::File;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use wirecube::core::{Menu, MenuOutcome};
use wirecube::engine::{Animation, AnimationConfig, FrameSink, FrameStatus, Pace};
use wirecube::input::{map_menu_key, poll_terminal_key, wait_for_stop};
use wirecube::screens::{
    apply_setting, main_menu, settings_menu, MainChoice, SettingsChoice, HELP_LINES,
};
use wirecube::term::{render_message, FrameBuffer, MenuView, TerminalRenderer};
use wirecube::types::{MenuInput, GRID_HEIGHT, GRID_WIDTH};

fn main() -> Result<()> {
    init_logging();

    let config = AnimationConfig::from_env();
    log::info!("starting with {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    // The terminal is in raw mode while we run; logs to stderr would land on
    // top of the frame.
    let log_path = env::var("WIRECUBE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(path) = log_path {
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("cannot open log file {path}: {e}"),
        }
    }

    let _ = builder.try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Main,
    Settings,
}

fn run(term: &mut TerminalRenderer, mut config: AnimationConfig) -> Result<()> {
    let mut main = main_menu();
    let mut settings = settings_menu(&config);
    let mut screen = Screen::Main;

    let view = MenuView::new();
    let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);

    loop {
        let menu: &mut Menu = match screen {
            Screen::Main => &mut main,
            Screen::Settings => &mut settings,
        };

        let (w, h) = crossterm::terminal::size().unwrap_or((GRID_WIDTH, GRID_HEIGHT));
        fb.resize(w, h);
        view.render_into(menu, &mut fb);
        term.draw(&fb)?;

        let outcome = menu.apply(read_menu_input()?);
        match (screen, outcome) {
            (_, MenuOutcome::Continue) => {}
            (Screen::Main, MenuOutcome::Back) => return Ok(()),
            (Screen::Settings, MenuOutcome::Back) => screen = Screen::Main,
            (Screen::Main, MenuOutcome::Selected(i)) => match MainChoice::from_index(i) {
                Some(MainChoice::Play) => play(term, config)?,
                Some(MainChoice::Settings) => screen = Screen::Settings,
                Some(MainChoice::Help) => show_message(term, &mut fb, &HELP_LINES)?,
                Some(MainChoice::Quit) => return Ok(()),
                Some(MainChoice::LoadScene) | None => {
                    let label = main.item(i).map(|it| it.label.clone()).unwrap_or_default();
                    let line = format!("Feature '{label}' not implemented yet!");
                    show_message(term, &mut fb, &[line.as_str(), "Press any key to continue..."])?;
                }
            },
            (Screen::Settings, MenuOutcome::Selected(i)) => {
                if let Some(choice) = SettingsChoice::from_index(i) {
                    if apply_setting(choice, &mut config, &mut settings) {
                        screen = Screen::Main;
                    }
                }
            }
        }
    }
}

fn play(term: &mut TerminalRenderer, config: AnimationConfig) -> Result<()> {
    let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    render_message(&mut fb, &["Press q or Esc to stop"]);
    term.draw(&fb)?;

    let mut anim = Animation::new(config);
    let summary = anim.run(&mut TerminalSink { term: &mut *term })?;

    let done = if summary.cancelled {
        format!("Animation stopped after {} frames.", summary.frames_rendered)
    } else {
        "Animation complete!".to_string()
    };
    show_message(term, &mut fb, &[done.as_str(), "Press any key to continue..."])
}

fn show_message(term: &mut TerminalRenderer, fb: &mut FrameBuffer, lines: &[&str]) -> Result<()> {
    render_message(fb, lines);
    term.draw(fb)?;
    wait_key()?;
    Ok(())
}

/// Block until a key press and map it.
fn read_menu_input() -> Result<MenuInput> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_menu_key(key)),
        _ => Ok(MenuInput::None),
    }
}

fn wait_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Presents frames on the terminal and paces them while polling for input,
/// so a stop key is noticed during the pause.
struct TerminalSink<'a> {
    term: &'a mut TerminalRenderer,
}

impl FrameSink for TerminalSink<'_> {
    fn present(&mut self, fb: &FrameBuffer, status: &FrameStatus) -> Result<()> {
        let headline = status.headline();
        self.term.present(fb, &[headline.as_str(), status.motion()])
    }

    fn wait(&mut self, delay: Duration) -> Result<Pace> {
        if wait_for_stop(delay, poll_terminal_key)? {
            Ok(Pace::Stop)
        } else {
            Ok(Pace::Continue)
        }
    }
}

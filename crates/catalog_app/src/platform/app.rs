use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use catalog_core::{update, AppState, FetchResult, Msg};
use catalog_engine::EngineHandle;
use catalog_logging::{catalog_info, catalog_warn};
use chrono::{DateTime, Local};
use clap::Parser;

use super::config::{load_config, Cli};
use super::effects::EffectRunner;
use super::location::AddressBar;
use super::logging;
use super::ui::commands::{parse_command, Command};
use super::ui::{layout, render};

/// Everything the main loop reacts to.
pub enum AppEvent {
    Input(Command),
    Engine(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?.apply_cli(&cli);
    config.validate()?;
    logging::initialize(config.log);
    catalog_info!(
        "Starting catalog base_url={} page_size={} pagination={:?}",
        config.base_url,
        config.page_size,
        config.pagination
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let engine = EngineHandle::new(config.fetch_settings()).context("starting fetch engine")?;
    let runner = EffectRunner::new(engine, AddressBar::parse(&cli.location), event_tx.clone());
    spawn_input_reader(event_tx);

    let state = AppState::new()
        .with_page_size(config.page_size)
        .with_pagination(config.pagination_mode());
    let mut app = App::new(state, runner, io::stdout());

    app.write(&layout::banner())?;
    let initial_query = app.runner.address().query().to_string();
    app.dispatch(Msg::LocationLoaded(initial_query))?;

    run_loop(&mut app, &event_rx)?;
    app.runner.shutdown();

    catalog_info!("Catalog session ended");
    Ok(())
}

/// Runs until `quit`, or until input has closed and no fetch is outstanding.
fn run_loop<W: Write>(app: &mut App<W>, event_rx: &mpsc::Receiver<AppEvent>) -> io::Result<()> {
    let mut input_open = true;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Engine(msg) => app.dispatch(msg)?,
            AppEvent::Input(command) if input_open => {
                if !app.handle_command(command)? {
                    return Ok(());
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::InputClosed => {
                catalog_info!("Input closed; waiting for outstanding fetch");
                input_open = false;
            }
        }
        if !input_open && !app.state.fetch_result().is_pending() {
            break;
        }
    }
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if event_tx.send(AppEvent::Input(parse_command(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    loaded_at: Option<DateTime<Local>>,
    out: W,
}

impl<W: Write> App<W> {
    fn new(state: AppState, runner: EffectRunner, out: W) -> Self {
        Self {
            state,
            runner,
            loaded_at: None,
            out,
        }
    }

    /// Returns `false` when the session should end.
    fn handle_command(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Dispatch(msg) => self.dispatch(msg)?,
            Command::Open(location) => {
                let address = AddressBar::parse(&location);
                let query = address.query().to_string();
                self.runner.navigate(address);
                self.dispatch(Msg::LocationLoaded(query))?;
            }
            Command::Categories => {
                let menu = layout::category_menu(&self.state.view_state().category);
                self.write(&menu)?;
            }
            Command::Help => self.write(&layout::help_text())?,
            Command::Refresh => self.render()?,
            Command::Quit => return Ok(false),
            Command::Invalid(reason) => {
                catalog_warn!("Rejected input: {}", reason);
                self.write(&format!("{reason}; type `help` for commands\n"))?;
            }
        }
        Ok(true)
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let was_loaded = is_loaded(&state);
        let (mut state, effects) = update(state, msg);
        if !was_loaded && is_loaded(&state) {
            self.loaded_at = Some(Local::now());
        }
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.run(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        let text = render::render(&view, self.runner.address(), self.loaded_at.as_ref());
        self.write(&text)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

fn is_loaded(state: &AppState) -> bool {
    matches!(state.fetch_result(), FetchResult::Success(_))
}

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use news_core::{update, AppState, Msg, QuerySettings};
use news_engine::{Connectivity, PipelineEvent, TcpProbe, DEFAULT_API_KEY};
use news_logging::{news_info, news_warn};

use super::effects::{self, EffectRunner};
use super::input::{parse_command, Command};
use super::logging::{self, LOG_FILE};
use super::opener::SystemOpener;
use super::settings::{self, SettingsStore};
use super::ui;

const API_KEY_ENV: &str = "GUARDIAN_API_KEY";

enum Inbox {
    Msg(Msg),
    Command(Command),
    InvalidInput(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(Path::new(LOG_FILE));
    news_info!("news_app starting up");

    let store = SettingsStore::new(settings::default_dir());
    let initial_settings = store.load();
    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

    let (event_tx, event_rx) = mpsc::channel::<PipelineEvent>();
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();

    let runner = EffectRunner::new(event_tx, msg_tx, store, Box::new(SystemOpener), api_key)
        .context("failed to start the fetch pipeline")?;

    spawn_forwarder(event_rx, inbox_tx.clone(), |event| {
        Inbox::Msg(effects::finished_msg(event))
    });
    spawn_forwarder(msg_rx, inbox_tx.clone(), Inbox::Msg);
    spawn_input_reader(inbox_tx);

    let connectivity = TcpProbe::guardian();
    let mut screen = Screen::new(AppState::with_settings(initial_settings), runner);
    screen.print(ui::constants::HELP_LINES.iter().map(|line| line.to_string()));
    screen.dispatch(Msg::ViewStarted {
        connected: connectivity.is_connected(),
    });

    while let Ok(event) = inbox_rx.recv() {
        match event {
            Inbox::Msg(msg) => screen.dispatch(msg),
            Inbox::Command(Command::Quit) | Inbox::InputClosed => break,
            Inbox::Command(Command::Help) => {
                screen.print(ui::constants::HELP_LINES.iter().map(|line| line.to_string()))
            }
            Inbox::Command(Command::ShowSettings) => {
                let lines = ui::render::render_settings(screen.state.settings());
                screen.print(lines);
            }
            Inbox::Command(command) => {
                if let Some(msg) = command_to_msg(command, &screen.state, &connectivity) {
                    screen.dispatch(msg);
                }
            }
            Inbox::InvalidInput(err) => screen.print([err]),
        }
    }

    screen.dispatch(Msg::Teardown);
    screen.runner.shutdown();
    news_info!("news_app shutting down");
    Ok(())
}

/// Commands that touch the pipeline probe connectivity first, synchronously.
fn command_to_msg(
    command: Command,
    state: &AppState,
    connectivity: &dyn Connectivity,
) -> Option<Msg> {
    let with_settings = |settings: QuerySettings| Msg::SettingsChanged {
        settings,
        connected: connectivity.is_connected(),
    };

    match command {
        Command::Open(number) => number
            .checked_sub(1)
            .map(|index| Msg::ArticleActivated { index }),
        Command::Refresh => Some(Msg::RefreshRequested {
            connected: connectivity.is_connected(),
        }),
        Command::SetOrderBy(order_by) => Some(with_settings(QuerySettings {
            order_by,
            ..state.settings().clone()
        })),
        Command::SetPageSize(page_size) => Some(with_settings(QuerySettings {
            page_size,
            ..state.settings().clone()
        })),
        Command::ShowSettings | Command::Help | Command::Quit => None,
    }
}

fn spawn_forwarder<T: Send + 'static>(
    rx: mpsc::Receiver<T>,
    inbox_tx: mpsc::Sender<Inbox>,
    wrap: impl Fn(T) -> Inbox + Send + 'static,
) {
    thread::spawn(move || {
        for item in rx {
            if inbox_tx.send(wrap(item)).is_err() {
                break;
            }
        }
    });
}

fn spawn_input_reader(inbox_tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => match parse_command(&line) {
                    Ok(command) => Inbox::Command(command),
                    Err(err) => Inbox::InvalidInput(err),
                },
                Err(err) => {
                    news_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if inbox_tx.send(event).is_err() {
                return;
            }
        }
        let _ = inbox_tx.send(Inbox::InputClosed);
    });
}

struct Screen {
    state: AppState,
    runner: EffectRunner,
    out: io::Stdout,
}

impl Screen {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            out: io::stdout(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            self.print(ui::render::render(&view));
        }
    }

    fn print(&mut self, lines: impl IntoIterator<Item = String>) {
        let mut out = self.out.lock();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = write!(out, "{}", ui::constants::PROMPT);
        let _ = out.flush();
    }
}

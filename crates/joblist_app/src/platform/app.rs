use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, engine_warn};
use joblist_core::{update, LoaderState, Msg};
use joblist_engine::ReqwestFetcher;

use super::args::Args;
use super::effects::EffectRunner;
use super::input::{parse_command, UserCommand};
use super::logging;
use super::render::{Renderer, HELP_TEXT};

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log_destination(), args.log_level());

    let fetcher = ReqwestFetcher::new(args.fetch_settings())
        .with_context(|| format!("cannot use endpoint {}", args.base_url))?;
    let runner = EffectRunner::new(fetcher).context("failed to start fetch runtime")?;
    engine_info!("Browsing {}", args.base_url);

    let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let command = match line {
                Ok(line) => parse_command(&line),
                Err(err) => {
                    engine_warn!("stdin read failed: {}", err);
                    UserCommand::Quit
                }
            };
            let quit = command == UserCommand::Quit;
            if cmd_tx.send(command).is_err() || quit {
                return;
            }
        }
        let _ = cmd_tx.send(UserCommand::Quit);
    });

    let mut session = Session::new(runner);
    // The list loads its first page as soon as it is shown.
    session.dispatch(Msg::LoadMoreRequested);
    session.render()?;

    loop {
        match cmd_rx.recv_timeout(POLL_INTERVAL) {
            Ok(UserCommand::Dispatch(msg)) => session.dispatch(msg),
            Ok(UserCommand::Help) => println!("{HELP_TEXT}"),
            Ok(UserCommand::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
        for msg in session.runner.poll() {
            session.dispatch(msg);
        }
        session.render()?;
    }

    engine_info!("Session ended with {} jobs", session.state.items().len());
    Ok(())
}

struct Session {
    state: LoaderState,
    runner: EffectRunner,
    renderer: Renderer,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: LoaderState::new(),
            runner,
            renderer: Renderer::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Redraws only when the state changed since the last frame.
    fn render(&mut self) -> io::Result<()> {
        if !self.state.consume_dirty() {
            return Ok(());
        }
        let view = self.state.view();
        self.renderer.render(&view, &mut io::stdout().lock())
    }
}

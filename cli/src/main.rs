//! Quizflow CLI - binary entry point and terminal session loop.
//!
//! # Event Loop
//!
//! A fixed tick drives the session:
//!
//! 1. Wait for the next tick
//! 2. Drain typed lines (non-blocking via [`input::LinePump`])
//! 3. Apply each line to the flow
//! 4. Advance the flow clock (`flow.tick(elapsed)`)
//! 5. Redraw if the screen changed
//!
//! The loop ends on `q`, end of input, or Ctrl-C. Telemetry requests still
//! in flight are given a short grace period before exit.

mod command;
mod input;
mod render;

use anyhow::Result;
use std::{
    fs::{self, File, OpenOptions},
    io::{Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::signal;
use tokio::time::{self, MissedTickBehavior};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use command::Command;
use input::{InputMsg, LinePump};
use quizflow_config::QuizflowConfig;
use quizflow_engine::{FlowError, QuizFlow};
use quizflow_telemetry::sink_from_settings;
use render::ScreenKey;

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const TELEMETRY_GRACE: Duration = Duration::from_millis(300);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than interleave logs with the quiz.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.quizflow/logs/quizflow.log
    if let Some(config_path) = QuizflowConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("quizflow.log"));
    }

    // Fallback: ./.quizflow/logs/quizflow.log
    candidates.push(PathBuf::from(".quizflow").join("logs").join("quizflow.log"));

    candidates
}

fn load_config() -> QuizflowConfig {
    match QuizflowConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => QuizflowConfig::default(),
        Err(e) => {
            tracing::warn!(path = %e.path().display(), "Using default config: {e}");
            QuizflowConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let settings = config.quiz_settings();
    let sink = sink_from_settings(&config.telemetry_settings());
    let mut flow = QuizFlow::new(settings, sink);

    let outcome = run(&mut flow).await;
    flow.teardown();

    // Let spawned telemetry posts finish before the runtime shuts down.
    time::sleep(TELEMETRY_GRACE).await;

    outcome
}

async fn run(flow: &mut QuizFlow) -> Result<()> {
    let mut out = stdout();
    let mut input = LinePump::spawn();
    let mut ticks = time::interval(TICK_INTERVAL);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last_tick = Instant::now();
    let mut shown: Option<ScreenKey> = None;

    let result: Result<()> = loop {
        tokio::select! {
            _ = ticks.tick() => {}
            _ = &mut ctrl_c => break Ok(()),
        }

        let mut quit = false;
        for msg in input.drain() {
            match msg {
                InputMsg::Line(line) => {
                    if apply(flow, &mut out, &line)? {
                        quit = true;
                        break;
                    }
                }
                InputMsg::Closed => {
                    quit = true;
                    break;
                }
                InputMsg::Error(e) => {
                    tracing::warn!("Input error: {e}");
                    quit = true;
                    break;
                }
            }
        }
        if quit {
            break Ok(());
        }

        let now = Instant::now();
        flow.tick(now.duration_since(last_tick));
        last_tick = now;

        let key = ScreenKey::of(flow);
        if shown != Some(key) {
            if let Err(e) = render::screen(&mut out, flow) {
                break Err(e.into());
            }
            shown = Some(key);
        }
    };

    input.shutdown();
    result
}

/// Apply one typed line. Returns `true` when the user asked to quit.
fn apply(flow: &mut QuizFlow, out: &mut impl Write, line: &str) -> Result<bool> {
    let outcome: Result<(), FlowError> = match command::parse(line, flow) {
        Command::Quit => return Ok(true),
        Command::Ignore => Ok(()),
        Command::Invalid(raw) => {
            render::notice(out, &format!("Not an option here: {raw:?}"))?;
            Ok(())
        }
        Command::Start => flow.start(),
        Command::Answer { question, value } => flow.submit_answer(question, value),
        Command::Continue => flow.continue_from_info(),
        Command::Back => flow.go_back(),
        Command::AcceptOffer => match flow.cta_clicked() {
            Ok(url) => {
                render::link(out, url)?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::DeclineOffer => flow.decline_offer(),
        Command::AcceptPopup => match flow.popup_cta_clicked() {
            Ok(url) => {
                render::link(out, url)?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::DismissPopup => {
            flow.dismiss_popup();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        tracing::debug!("Rejected input {line:?}: {e}");
        render::notice(out, &e.to_string())?;
    }
    Ok(false)
}

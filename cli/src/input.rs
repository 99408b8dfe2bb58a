//! Line input for the terminal front-end.
//!
//! Stdin is read on a dedicated OS thread and handed to the event loop
//! through a bounded channel. The loop drains it without blocking.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

const INPUT_CHANNEL_CAPACITY: usize = 64; // bounded: no OOM
const MAX_LINES_PER_TICK: usize = 8; // never starve the clock

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    Line(String),
    /// Stdin reached end of file.
    Closed,
    Error(String),
}

pub struct LinePump {
    rx: mpsc::Receiver<InputMsg>,
}

impl LinePump {
    /// Start reading stdin.
    ///
    /// The reader is a detached thread rather than a blocking Tokio task: a
    /// pending `read_line` cannot be cancelled, and the runtime would wait for
    /// it on shutdown.
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        thread::spawn(move || read_loop(&mut io::stdin().lock(), &tx));
        Self { rx }
    }

    #[cfg(test)]
    fn from_reader(mut reader: impl BufRead + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        thread::spawn(move || read_loop(&mut reader, &tx));
        Self { rx }
    }

    /// Take whatever input is ready, up to a per-tick limit.
    pub fn drain(&mut self) -> Vec<InputMsg> {
        let mut out = Vec::new();
        while out.len() < MAX_LINES_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => {
                    let last = !matches!(msg, InputMsg::Line(_));
                    out.push(msg);
                    if last {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    out.push(InputMsg::Closed);
                    break;
                }
            }
        }
        out
    }

    pub fn shutdown(&mut self) {
        self.rx.close();
    }
}

fn read_loop(reader: &mut impl BufRead, tx: &mpsc::Sender<InputMsg>) {
    let mut line = String::new();
    loop {
        line.clear();
        let msg = match reader.read_line(&mut line) {
            Ok(0) => InputMsg::Closed,
            Ok(_) => InputMsg::Line(line.trim_end_matches(['\r', '\n']).to_owned()),
            Err(e) => InputMsg::Error(e.to_string()),
        };
        let last = !matches!(msg, InputMsg::Line(_));
        if tx.blocking_send(msg).is_err() || last {
            break;
        }
    }
}

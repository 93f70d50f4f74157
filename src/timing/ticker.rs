//! Background thread that posts clock ticks into the input channel.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::turn::GameInput;

/// Sends `GameInput::ClockTick(interval)` every `interval` until stopped or
/// until the receiver hangs up.
///
/// Ticks travel through the same channel as clicks, so the rule thread
/// sees them in order with every other input.
#[derive(Debug)]
pub struct Ticker {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking into `sender`.
    pub fn spawn(interval: Duration, sender: Sender<GameInput>) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let thread = thread::Builder::new()
            .name("santorini-ticker".to_string())
            .spawn(move || {
                loop {
                    thread::sleep(interval);
                    if flag.load(Ordering::Relaxed) {
                        break;
                    }
                    if sender.send(GameInput::ClockTick(interval)).is_err() {
                        break;
                    }
                }
                debug!("ticker stopped");
            })?;
        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }

    /// Stop ticking and wait for the thread to finish.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

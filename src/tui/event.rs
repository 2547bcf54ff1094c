//! Event handling for the TUI
//!
//! Terminal input is read on a dedicated thread and forwarded over a channel
//! together with periodic ticks. Background work (the submission request)
//! reports back through the same channel via [`EventHandler::sender`].

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::models::AttemptId;
use crate::submission::SubmissionError;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A submission request finished
    Submission {
        /// Attempt that finished
        attempt: AttemptId,
        /// What the endpoint answered
        result: Result<(), SubmissionError>,
    },
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    // Calculate timeout for next tick
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    Some(Event::Resize(width, height))
                                }
                                Ok(_) => None,
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to read terminal event");
                                    return;
                                }
                            };
                            if let Some(event) = forwarded {
                                if sender.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(e) => {
                            tracing::error!(error = %e, "failed to poll terminal events");
                            return;
                        }
                    }

                    // Send tick event if needed
                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender for posting events from other threads or tasks
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

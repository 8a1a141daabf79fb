use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Polls the terminal on a background task and forwards what it reads.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        let event = if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            match event::read() {
                                // Windows reports both press and release
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                                Ok(_) => None,
                                Err(e) => {
                                    tracing::warn!("Failed to read terminal event: {}", e);
                                    None
                                }
                            }
                        } else {
                            Some(Event::Tick)
                        };

                        if let Some(event) = event {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

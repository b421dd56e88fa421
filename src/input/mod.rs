use tokio::sync::broadcast;

use crate::errors::{DotPaintError, DotPaintResult};
use crate::geometry::ScreenPoint;

/// Events the interactive operations care about. Cancellation is just another
/// event variant, so waiting on clicks and waiting for the cancel key is a
/// single `recv()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Left button pressed at the tracked cursor position.
    Click(ScreenPoint),
    /// The cancel key (Esc) was pressed.
    Cancel,
}

/// Fan-out point for global input events. One OS thread runs the rdev hook
/// for the whole process (rdev listeners cannot be stopped once started);
/// each operation subscribes when it begins and therefore never observes
/// events from before its subscription.
pub struct InputBus {
    tx: broadcast::Sender<InputEvent>,
}

impl InputBus {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self { tx }
    }

    /// Creates the bus and spawns the global listener thread.
    pub fn start() -> DotPaintResult<Self> {
        let bus = Self::new();
        let tx = bus.tx.clone();
        std::thread::Builder::new()
            .name("input-listener".into())
            .spawn(move || listener_thread(tx))
            .map_err(|e| DotPaintError::Input(e.to_string()))?;
        Ok(bus)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InputEvent> {
        self.tx.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn emit(&self, event: InputEvent) {
        let _ = self.tx.send(event);
    }
}

/// Translates raw device events into `InputEvent`s. Button presses carry no
/// position in rdev, so the cursor is tracked from move events and stamped
/// onto each press.
fn listener_thread(tx: broadcast::Sender<InputEvent>) {
    let mut cursor = (0.0_f64, 0.0_f64);
    let result = rdev::listen(move |event: rdev::Event| match event.event_type {
        rdev::EventType::MouseMove { x, y } => {
            cursor = (x, y);
        }
        rdev::EventType::ButtonPress(rdev::Button::Left) => {
            let point = ScreenPoint {
                x: cursor.0 as i32,
                y: cursor.1 as i32,
            };
            // Send fails only when nobody is listening; that is fine.
            let _ = tx.send(InputEvent::Click(point));
        }
        rdev::EventType::KeyPress(rdev::Key::Escape) => {
            let _ = tx.send(InputEvent::Cancel);
        }
        _ => {}
    });
    if let Err(e) = result {
        tracing::error!(error = ?e, "global input listener failed");
    }
}

mod highlight;
mod planner;
mod runner;

pub use highlight::highlight_region;
pub use planner::{DrawAction, DrawPlan, DOT_SPACING};
pub use runner::{run_draw, DrawOutcome};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;

use crate::input::{InputBus, InputEvent};

/// Shared cancellation flag, flipped once and polled between device actions.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Flips `token` as soon as the bus delivers a Cancel event. The caller
/// aborts the task once its operation is over.
fn spawn_cancel_watcher(bus: &InputBus, token: CancelToken) -> tokio::task::JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(InputEvent::Cancel) => {
                    token.cancel();
                    break;
                }
                Ok(_) => {}
                Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_clear_and_latches() {
        let token = CancelToken::new();
        assert!(!token.is_canceled());
        token.cancel();
        assert!(token.is_canceled());
        assert!(token.clone().is_canceled());
    }
}

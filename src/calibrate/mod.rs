mod picker;
mod region;

pub use picker::calibrate_picker;
pub use region::calibrate_region;

use tokio::sync::broadcast::error::RecvError;

use crate::geometry::ScreenPoint;
use crate::input::{InputBus, InputEvent};

/// Blocks until `want` left clicks have been observed or the user cancels.
/// `on_click` runs after every accepted click with the count collected so
/// far, which is where the scripted guidance prompts live. Returns `None` on
/// cancel; partial clicks are discarded with it.
async fn collect_clicks(
    bus: &InputBus,
    want: usize,
    mut on_click: impl FnMut(usize),
) -> Option<Vec<ScreenPoint>> {
    let mut rx = bus.subscribe();
    let mut clicks = Vec::with_capacity(want);

    while clicks.len() < want {
        match rx.recv().await {
            Ok(InputEvent::Click(point)) => {
                clicks.push(point);
                on_click(clicks.len());
            }
            Ok(InputEvent::Cancel) => return None,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "input events dropped during calibration");
            }
            Err(RecvError::Closed) => return None,
        }
    }

    Some(clicks)
}

use console::style;

use crate::config::TimingConfig;
use crate::errors::DotPaintResult;
use crate::executor::Pointer;
use crate::geometry::{Region, ScreenPoint};
use crate::input::InputBus;

use super::{spawn_cancel_watcher, CancelToken};

/// Sweeps the pointer around the region's inscribed circle so the user can
/// confirm the calibration landed on the editor. One-degree steps, cancelable
/// like a draw.
pub async fn highlight_region(
    bus: &InputBus,
    pointer: &Pointer,
    timing: &TimingConfig,
    region: Region,
) -> DotPaintResult<()> {
    println!("{}", style("Highlighting Region").blue().bold());
    println!("Press ESC at any time to cancel.");

    let token = CancelToken::new();
    let watcher = spawn_cancel_watcher(bus, token.clone());
    let result = sweep(pointer, timing, region, &token).await;
    watcher.abort();

    if result.is_ok() {
        if token.is_canceled() {
            println!("Highlighting canceled.");
        } else {
            println!("Highlighting finished.");
        }
    }
    result
}

async fn sweep(
    pointer: &Pointer,
    timing: &TimingConfig,
    region: Region,
    token: &CancelToken,
) -> DotPaintResult<()> {
    let radius = f64::from(region.side) / 2.0;
    let step = timing.highlight_step();

    for deg in 0..360 {
        if token.is_canceled() {
            break;
        }
        let rad = f64::from(deg).to_radians();
        pointer.move_to(ScreenPoint {
            x: (f64::from(region.origin.x) + radius + rad.sin() * radius).round() as i32,
            y: (f64::from(region.origin.y) + radius + rad.cos() * radius).round() as i32,
        })?;
        tokio::time::sleep(step).await;
    }
    Ok(())
}

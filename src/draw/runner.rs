use std::path::Path;

use crate::config::TimingConfig;
use crate::errors::DotPaintResult;
use crate::executor::Pointer;
use crate::geometry::Region;
use crate::input::InputBus;
use crate::palette::Palette;

use super::{spawn_cancel_watcher, CancelToken, DrawAction, DrawPlan};

/// How a draw ended. Cancellation is a normal outcome, not an error; the
/// partially drawn canvas is left as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Completed { dots: u32 },
    Canceled { dots: u32 },
}

/// Loads the image and executes the plan, one swatch click and one canvas
/// click per dot. Esc cancels between pixels; a decode failure returns before
/// the pointer moves at all.
pub async fn run_draw(
    bus: &InputBus,
    pointer: &Pointer,
    timing: &TimingConfig,
    region: Region,
    palette: &Palette,
    path: &Path,
) -> DotPaintResult<DrawOutcome> {
    let token = CancelToken::new();
    let watcher = spawn_cancel_watcher(bus, token.clone());
    let outcome = drive(pointer, timing, region, palette, path, token).await;
    watcher.abort();
    outcome
}

async fn drive(
    pointer: &Pointer,
    timing: &TimingConfig,
    region: Region,
    palette: &Palette,
    path: &Path,
    token: CancelToken,
) -> DotPaintResult<DrawOutcome> {
    let plan = DrawPlan::load(path, region, palette, token.clone())?;

    println!("Don't move your mouse!");
    println!("Press ESC at any time to cancel.");

    let delay = timing.click_delay();
    let mut actions = 0u32;
    for action in plan {
        let DrawAction::ClickAt(point) = action;
        pointer.click(point)?;
        actions += 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let dots = actions / 2;
    if token.is_canceled() {
        println!("Drawing canceled.");
        tracing::info!(dots, "draw canceled by user");
        Ok(DrawOutcome::Canceled { dots })
    } else {
        println!("Drawing finished.");
        tracing::info!(dots, "draw completed");
        Ok(DrawOutcome::Completed { dots })
    }
}

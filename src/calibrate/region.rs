use console::style;

use crate::geometry::Region;
use crate::input::InputBus;

use super::collect_clicks;

const REGION_CLICKS: usize = 3;

/// Drives region calibration: three boundary clicks, countdown after each,
/// `None` if the user cancels first.
pub async fn calibrate_region(bus: &InputBus) -> Option<Region> {
    println!("{}", style("Calibration Region").blue().bold());
    println!(
        "Please set the editor region by clicking on any 3 of the 4 farthest \
         sides of the cell editor. One for the top, left, etc... Neither the \
         order nor the sides matter, as long as you click on a side you \
         haven't clicked before."
    );
    println!("Press ESC at any time to cancel.");

    let clicks = collect_clicks(bus, REGION_CLICKS, |collected| {
        let remaining = REGION_CLICKS - collected;
        if remaining > 0 {
            println!(
                "{} more click{}...",
                remaining,
                if remaining == 1 { "" } else { "s" }
            );
        }
    })
    .await;

    let Some(clicks) = clicks else {
        println!("Calibration canceled.");
        return None;
    };
    println!("Calibration finished.");

    let region = Region::from_clicks(&clicks);
    tracing::info!(
        x = region.origin.x,
        y = region.origin.y,
        side = region.side,
        "region calibrated"
    );
    Some(region)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::ScreenPoint;
    use crate::input::InputEvent;

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::Click(ScreenPoint { x, y })
    }

    #[tokio::test]
    async fn three_clicks_produce_a_region() {
        let bus = Arc::new(InputBus::new());
        let emitter = bus.clone();
        // Runs once the calibration future parks on its first recv().
        tokio::spawn(async move {
            emitter.emit(click(10, 50));
            emitter.emit(click(90, 20));
            emitter.emit(click(40, 90));
        });

        let region = calibrate_region(&bus).await.unwrap();
        assert_eq!(region.origin, ScreenPoint { x: 10, y: 20 });
        assert_eq!(region.side, 80);
    }

    #[tokio::test]
    async fn cancel_before_third_click_yields_none() {
        let bus = Arc::new(InputBus::new());
        let emitter = bus.clone();
        tokio::spawn(async move {
            emitter.emit(click(10, 50));
            emitter.emit(click(90, 20));
            emitter.emit(InputEvent::Cancel);
        });

        assert!(calibrate_region(&bus).await.is_none());
    }
}

use console::style;

use crate::geometry::ScreenPoint;
use crate::input::InputBus;
use crate::palette::{Palette, PALETTE_SIZE, REFERENCE_COLORS};

use super::collect_clicks;

/// Walks the user through the ten reference colors in declaration order, one
/// click per swatch. The Nth click is bound to the Nth color no matter where
/// it lands; clicking the same spot twice is accepted silently. Cancellation
/// discards everything collected so far.
pub async fn calibrate_picker(bus: &InputBus) -> Option<Palette> {
    println!("{}", style("Calibrate Color Picker").blue().bold());
    println!("First, click the {} dot.", REFERENCE_COLORS[0].1);

    let clicks = collect_clicks(bus, PALETTE_SIZE, |collected| {
        if collected >= PALETTE_SIZE {
            println!("Now you're all done!");
        } else {
            let (_, name) = REFERENCE_COLORS[collected];
            if collected == 3 {
                println!("Yes, for every color now... And then the {name} dot.");
            } else {
                println!("And then the {name} dot.");
            }
        }
    })
    .await?;

    let points: [ScreenPoint; PALETTE_SIZE] = clicks.try_into().ok()?;
    tracing::info!("color picker calibrated");
    Some(Palette::bind(points))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::input::InputEvent;

    #[tokio::test]
    async fn clicks_bind_to_colors_in_declared_order() {
        let bus = Arc::new(InputBus::new());
        let emitter = bus.clone();
        tokio::spawn(async move {
            for i in 0..PALETTE_SIZE {
                emitter.emit(InputEvent::Click(ScreenPoint {
                    x: 100 + i as i32,
                    y: 700,
                }));
            }
        });

        let palette = calibrate_picker(&bus).await.unwrap();
        let spots = palette.spots();
        assert_eq!(spots[0].name, "green");
        assert_eq!(spots[0].point, ScreenPoint { x: 100, y: 700 });
        assert_eq!(spots[9].name, "black");
        assert_eq!(spots[9].point, ScreenPoint { x: 109, y: 700 });
    }

    #[tokio::test]
    async fn cancel_discards_partial_palette() {
        let bus = Arc::new(InputBus::new());
        let emitter = bus.clone();
        tokio::spawn(async move {
            for i in 0..4 {
                emitter.emit(InputEvent::Click(ScreenPoint { x: i, y: 0 }));
            }
            emitter.emit(InputEvent::Cancel);
        });

        assert!(calibrate_picker(&bus).await.is_none());
    }
}

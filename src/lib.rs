pub mod calibrate;
pub mod config;
pub mod draw;
pub mod errors;
pub mod executor;
pub mod geometry;
pub mod input;
pub mod menu;
pub mod palette;
pub mod session;

use console::style;

use crate::errors::{DotPaintError, DotPaintResult};
use crate::menu::MenuAction;
use crate::session::Session;

/// Interactive session loop: present the menu, dispatch the chosen operation,
/// commit completed calibrations into the session. Exit and interrupts both
/// leave the loop without further output.
pub async fn run() -> DotPaintResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::load_or_default();
    let bus = input::InputBus::start()?;
    let pointer = executor::Pointer::new()?;
    let mut session = Session::default();

    loop {
        println!();
        let snapshot = session.clone();
        let action = match tokio::task::spawn_blocking(move || menu::choose(&snapshot)).await {
            Ok(Ok(action)) => action,
            // Interrupted or failed prompt: leave quietly.
            Ok(Err(_)) | Err(_) => break,
        };

        match action {
            MenuAction::Exit => break,
            MenuAction::Help => menu::print_help(&session),
            MenuAction::CalibrateRegion => {
                if let Some(region) = calibrate::calibrate_region(&bus).await {
                    session.region = Some(region);
                }
            }
            MenuAction::HighlightRegion => {
                let Some(region) = session.region else { continue };
                if let Err(e) =
                    draw::highlight_region(&bus, &pointer, &config.timing, region).await
                {
                    tracing::error!(error = %e, "highlight failed");
                }
            }
            MenuAction::CalibratePicker => {
                if let Some(palette) = calibrate::calibrate_picker(&bus).await {
                    session.palette = Some(palette);
                }
            }
            MenuAction::DrawImage => {
                let Some(region) = session.region else { continue };
                let Some(palette) = session.palette.clone() else { continue };

                println!("{}", style("Drawing Image").blue().bold());
                println!("Be sure to select the smallest brush for best quality.");
                let path = match tokio::task::spawn_blocking(menu::prompt_image_path).await {
                    Ok(Ok(path)) => path,
                    Ok(Err(_)) | Err(_) => break,
                };

                match draw::run_draw(&bus, &pointer, &config.timing, region, &palette, &path)
                    .await
                {
                    Ok(_) => {}
                    Err(e @ DotPaintError::ImageLoad { .. }) => {
                        println!("{}", style(e.to_string()).red());
                    }
                    Err(e) => tracing::error!(error = %e, "draw failed"),
                }
            }
        }
    }

    Ok(())
}

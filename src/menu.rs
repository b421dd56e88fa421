use std::path::PathBuf;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::errors::{DotPaintError, DotPaintResult};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    Help,
    CalibrateRegion,
    HighlightRegion,
    CalibratePicker,
    DrawImage,
}

/// One menu row: a label, the action it dispatches, and a predicate over the
/// session deciding whether it is offered at all.
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
    pub available: fn(&Session) -> bool,
}

fn always(_: &Session) -> bool {
    true
}

fn has_region(session: &Session) -> bool {
    session.region.is_some()
}

fn ready_to_draw(session: &Session) -> bool {
    session.region.is_some() && session.palette.is_some()
}

pub static MENU: [MenuEntry; 6] = [
    MenuEntry {
        label: "Exit",
        action: MenuAction::Exit,
        available: always,
    },
    MenuEntry {
        label: "Help",
        action: MenuAction::Help,
        available: always,
    },
    MenuEntry {
        label: "Calibrate Region",
        action: MenuAction::CalibrateRegion,
        available: always,
    },
    MenuEntry {
        label: "Highlight Region",
        action: MenuAction::HighlightRegion,
        available: has_region,
    },
    MenuEntry {
        label: "Calibrate Color Picker",
        action: MenuAction::CalibratePicker,
        available: always,
    },
    MenuEntry {
        label: "Draw Image",
        action: MenuAction::DrawImage,
        available: ready_to_draw,
    },
];

pub fn visible_entries(session: &Session) -> Vec<&'static MenuEntry> {
    MENU.iter().filter(|entry| (entry.available)(session)).collect()
}

/// Presents the filtered menu and blocks for a choice. Runs on the blocking
/// pool; an interrupted prompt surfaces as an error and ends the session.
pub fn choose(session: &Session) -> DotPaintResult<MenuAction> {
    let entries = visible_entries(session);
    let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Menu")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| DotPaintError::Prompt(e.to_string()))?;
    Ok(entries[picked].action)
}

pub fn prompt_image_path() -> DotPaintResult<PathBuf> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Location of the image file to draw")
        .interact_text()
        .map_err(|e| DotPaintError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(path))
}

/// State-dependent pointer to the next sensible step.
pub fn print_help(session: &Session) {
    println!("{}", style("Help").blue().bold());
    println!("What To Do Next");
    if session.region.is_none() {
        println!(
            "Run {} to calibrate the location of your skin editor, then run {} \
             to confirm your selection is correct.",
            style("Calibrate Region").blue().bold(),
            style("Highlight Region").blue().bold(),
        );
    } else if session.palette.is_none() {
        println!(
            "Run {} to calibrate the location of your skin editor's color palette.",
            style("Calibrate Color Picker").blue().bold(),
        );
    } else {
        println!(
            "Run {} to draw any image to the canvas. Once you're done, you can \
             run {}, or press Ctrl + C to exit.",
            style("Draw Image").blue().bold(),
            style("Exit").blue().bold(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Region, ScreenPoint};
    use crate::palette::{Palette, PALETTE_SIZE};

    fn labels(session: &Session) -> Vec<&'static str> {
        visible_entries(session).iter().map(|e| e.label).collect()
    }

    fn calibrated_region() -> Region {
        Region {
            origin: ScreenPoint { x: 0, y: 0 },
            side: 100,
        }
    }

    fn calibrated_palette() -> Palette {
        Palette::bind([ScreenPoint { x: 0, y: 0 }; PALETTE_SIZE])
    }

    #[test]
    fn fresh_session_hides_region_dependent_entries() {
        let session = Session::default();
        assert_eq!(
            labels(&session),
            vec!["Exit", "Help", "Calibrate Region", "Calibrate Color Picker"]
        );
    }

    #[test]
    fn region_unlocks_highlight_but_not_draw() {
        let session = Session {
            region: Some(calibrated_region()),
            palette: None,
        };
        let visible = labels(&session);
        assert!(visible.contains(&"Highlight Region"));
        assert!(!visible.contains(&"Draw Image"));
    }

    #[test]
    fn full_calibration_unlocks_everything() {
        let session = Session {
            region: Some(calibrated_region()),
            palette: Some(calibrated_palette()),
        };
        assert_eq!(labels(&session).len(), MENU.len());
    }

    #[test]
    fn palette_alone_does_not_unlock_draw() {
        let session = Session {
            region: None,
            palette: Some(calibrated_palette()),
        };
        assert!(!labels(&session).contains(&"Draw Image"));
    }
}

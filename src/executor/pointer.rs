use std::sync::Mutex;

use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

use crate::errors::{DotPaintError, DotPaintResult};
use crate::geometry::ScreenPoint;

/// Synthesizes pointer activity on the target editor. Enigo is not Sync, so
/// the handle lives behind a mutex; only one operation drives the pointer at
/// a time anyway.
pub struct Pointer {
    enigo: Mutex<Enigo>,
}

impl Pointer {
    pub fn new() -> DotPaintResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| DotPaintError::Pointer(e.to_string()))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    pub fn move_to(&self, point: ScreenPoint) -> DotPaintResult<()> {
        self.enigo
            .lock()
            .unwrap()
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| DotPaintError::Pointer(e.to_string()))
    }

    /// Move to `point`, then press and release the left button.
    pub fn click(&self, point: ScreenPoint) -> DotPaintResult<()> {
        let mut enigo = self.enigo.lock().unwrap();
        enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| DotPaintError::Pointer(e.to_string()))?;
        enigo
            .button(Button::Left, Direction::Press)
            .map_err(|e| DotPaintError::Pointer(e.to_string()))?;
        enigo
            .button(Button::Left, Direction::Release)
            .map_err(|e| DotPaintError::Pointer(e.to_string()))
    }
}

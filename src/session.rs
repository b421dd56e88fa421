use crate::geometry::Region;
use crate::palette::Palette;

/// Mutable state of one interactive run. Slots are written only by completed
/// calibrations; a canceled calibration leaves the previous value in place.
/// Nothing here survives process exit.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub region: Option<Region>,
    pub palette: Option<Palette>,
}

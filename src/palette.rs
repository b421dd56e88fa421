use image::Rgb;

use crate::geometry::ScreenPoint;

pub const PALETTE_SIZE: usize = 10;

/// The colors the target editor's picker is expected to offer, in the order
/// the user is asked to click them. This order is also the canonical tie-break
/// order for nearest-color matching; changing it changes which swatch wins an
/// exact distance tie.
pub const REFERENCE_COLORS: [(Rgb<u8>, &str); PALETTE_SIZE] = [
    (Rgb([105, 221, 0]), "green"),
    (Rgb([255, 204, 0]), "yellow"),
    (Rgb([255, 126, 0]), "orange"),
    (Rgb([255, 61, 61]), "red"),
    (Rgb([192, 0, 255]), "purple"),
    (Rgb([255, 62, 212]), "magenta"),
    (Rgb([0, 120, 255]), "blue"),
    (Rgb([0, 222, 255]), "cyan"),
    (Rgb([255, 255, 255]), "white"),
    (Rgb([42, 42, 42]), "black"),
];

/// One calibrated swatch: a reference color and where to click to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSpot {
    pub color: Rgb<u8>,
    pub name: &'static str,
    pub point: ScreenPoint,
}

/// A complete mapping from the reference colors to their on-screen swatches.
/// Only constructible from a full set of calibration points, so a partial
/// calibration can never leak into the session.
#[derive(Debug, Clone)]
pub struct Palette {
    spots: Vec<PaletteSpot>,
}

impl Palette {
    /// Binds the Nth calibration click to the Nth reference color, wherever
    /// that click landed.
    pub fn bind(points: [ScreenPoint; PALETTE_SIZE]) -> Self {
        let spots = REFERENCE_COLORS
            .iter()
            .zip(points)
            .map(|(&(color, name), point)| PaletteSpot { color, name, point })
            .collect();
        Self { spots }
    }

    pub fn spots(&self) -> &[PaletteSpot] {
        &self.spots
    }

    pub fn nearest(&self, target: Rgb<u8>) -> &PaletteSpot {
        nearest_spot(&self.spots, target)
    }
}

/// Squared Euclidean distance in RGB space. Squaring is monotonic, so minima
/// and ties come out the same as for the true distance.
pub fn distance_sq(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    let dr = i32::from(a[0]) - i32::from(b[0]);
    let dg = i32::from(a[1]) - i32::from(b[1]);
    let db = i32::from(a[2]) - i32::from(b[2]);
    (dr * dr + dg * dg + db * db) as u32
}

/// Returns the candidate closest to `target`; the first minimal candidate in
/// slice order wins ties. Panics on an empty slice, which is a caller bug.
pub fn nearest_spot(spots: &[PaletteSpot], target: Rgb<u8>) -> &PaletteSpot {
    spots
        .iter()
        .min_by_key(|spot| distance_sq(spot.color, target))
        .expect("candidate set must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(color: Rgb<u8>) -> PaletteSpot {
        PaletteSpot {
            color,
            name: "test",
            point: ScreenPoint { x: 0, y: 0 },
        }
    }

    #[test]
    fn nearest_to_black_is_the_dark_candidate() {
        let candidates = [
            spot(Rgb([105, 221, 0])),
            spot(Rgb([42, 42, 42])),
            spot(Rgb([255, 255, 255])),
        ];
        let found = nearest_spot(&candidates, Rgb([0, 0, 0]));
        assert_eq!(found.color, Rgb([42, 42, 42]));
    }

    #[test]
    fn nearest_returns_a_candidate_and_is_idempotent() {
        let candidates: Vec<PaletteSpot> =
            REFERENCE_COLORS.iter().map(|&(color, _)| spot(color)).collect();
        let found = nearest_spot(&candidates, Rgb([17, 130, 200]));
        assert!(candidates.iter().any(|s| s.color == found.color));

        let again = nearest_spot(&candidates, found.color);
        assert_eq!(again.color, found.color);
    }

    #[test]
    fn exact_ties_go_to_the_first_candidate() {
        // Both candidates are distance 10 from the target on one channel.
        let candidates = [spot(Rgb([10, 0, 0])), spot(Rgb([0, 10, 0]))];
        let found = nearest_spot(&candidates, Rgb([0, 0, 0]));
        assert_eq!(found.color, Rgb([10, 0, 0]));
    }

    #[test]
    fn bind_pairs_points_with_reference_order() {
        let points: [ScreenPoint; PALETTE_SIZE] =
            std::array::from_fn(|i| ScreenPoint { x: i as i32 * 11, y: 400 });
        let palette = Palette::bind(points);

        assert_eq!(palette.spots().len(), PALETTE_SIZE);
        assert_eq!(palette.spots()[0].name, "green");
        assert_eq!(palette.spots()[0].point, ScreenPoint { x: 0, y: 400 });
        assert_eq!(palette.spots()[9].name, "black");
        assert_eq!(palette.spots()[9].point, ScreenPoint { x: 99, y: 400 });
    }
}

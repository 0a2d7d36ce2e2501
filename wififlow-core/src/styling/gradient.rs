//! Fixed red -> yellow -> green colour scale

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

const STOPS: [[f64; 3]; 3] = [
    // red
    [1.0, 0.0, 0.0],
    // yellow
    [1.0, 1.0, 0.0],
    // green (#008000)
    [0.0, 128.0 / 255.0, 0.0],
];

/// Colour for a speed relative to the hour's fastest edge.
///
/// `ratio` is clamped to `[0, 1]` (NaN maps to 0) and interpolated
/// linearly between the two bracketing stops.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn speed_color(ratio: f64) -> Rgb {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let scaled = ratio * (STOPS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(STOPS.len() - 2);
    let t = scaled - idx as f64;

    let (from, to) = (STOPS[idx], STOPS[idx + 1]);
    let channel = |c: usize| ((from[c] + (to[c] - from[c]) * t) * 255.0).round() as u8;
    Rgb::new(channel(0), channel(1), channel(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_exact() {
        assert_eq!(speed_color(0.0).to_hex(), "#ff0000");
        assert_eq!(speed_color(0.5).to_hex(), "#ffff00");
        assert_eq!(speed_color(1.0).to_hex(), "#008000");
    }

    #[test]
    fn midpoints_interpolate() {
        assert_eq!(speed_color(0.25), Rgb::new(255, 128, 0));
        let three_quarters = speed_color(0.75);
        assert_eq!((three_quarters.r, three_quarters.b), (128, 0));
        assert!((191..=192).contains(&three_quarters.g));
    }

    #[test]
    fn out_of_range_ratios_are_clamped() {
        assert_eq!(speed_color(-1.0), speed_color(0.0));
        assert_eq!(speed_color(3.0), speed_color(1.0));
        assert_eq!(speed_color(f64::NAN), speed_color(0.0));
    }

    #[test]
    fn faster_moves_towards_green() {
        let mut prev = speed_color(0.0);
        for step in 1..=100 {
            let cur = speed_color(f64::from(step) / 100.0);
            if step <= 50 {
                // red -> yellow: green channel rises
                assert!(cur.g >= prev.g && cur.r == 255);
            } else {
                // yellow -> green: red channel falls
                assert!(cur.r <= prev.r);
            }
            prev = cur;
        }
        assert!(speed_color(0.3).g > speed_color(0.2).g);
        assert!(speed_color(0.9).r < speed_color(0.8).r);
    }
}

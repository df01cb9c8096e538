use las::point::Classification;
use las::Color;

/// Full-scale value of a 16-bit LAS color channel.
pub const MAX_COLOR_VALUE: u16 = u16::MAX;

/// Mid-scale value used for the neutral gray of unclassified points.
pub const GRAY_COLOR_VALUE: u16 = 32768;

pub const RED: Color = Color {
    red: MAX_COLOR_VALUE,
    green: 0,
    blue: 0,
};

pub const GRAY: Color = Color {
    red: GRAY_COLOR_VALUE,
    green: GRAY_COLOR_VALUE,
    blue: GRAY_COLOR_VALUE,
};

/// Classes assigned to written points, with their ASPRS codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointClass {
    Unclassified = 1,
    /// ASPRS "wire conductor".
    Cable = 14,
}

impl From<PointClass> for Classification {
    fn from(class: PointClass) -> Self {
        match class {
            PointClass::Unclassified => Classification::Unclassified,
            PointClass::Cable => Classification::WireConductor,
        }
    }
}

/// Class and color of a point with the given intensity.
///
/// Positive intensity marks a cable point, colored red with the red channel
/// scaled by intensity (clamped to `[0, 1]`). Anything else is unclassified
/// gray.
pub fn classify(intensity: f32) -> (PointClass, Color) {
    if intensity > 0.0 {
        let scaled = f32::from(MAX_COLOR_VALUE) * intensity.min(1.0);
        let red = Color {
            red: scaled.round() as u16,
            ..RED
        };
        (PointClass::Cable, red)
    } else {
        (PointClass::Unclassified, GRAY)
    }
}

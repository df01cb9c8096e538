use crate::traits::{HasIntensity, HasPosition};

/// A real-valued position, the unit of clouds read from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointXYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PointXYZ {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A position plus a scalar intensity, nominally in `[0, 1]`.
///
/// Values `<= 0` mean "no signal".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointXYZI {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub intensity: f32,
}

impl PointXYZI {
    pub fn new(x: f64, y: f64, z: f64, intensity: f32) -> Self {
        Self { x, y, z, intensity }
    }

    pub fn has_signal(&self) -> bool {
        self.intensity > 0.0
    }
}

impl HasPosition for PointXYZ {
    fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl HasPosition for PointXYZI {
    fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl HasIntensity for PointXYZI {
    fn intensity(&self) -> f32 {
        self.intensity
    }
}

impl From<PointXYZI> for PointXYZ {
    fn from(p: PointXYZI) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

pub trait HasPosition {
    fn position(&self) -> [f64; 3];
}

pub trait HasIntensity {
    fn intensity(&self) -> f32;
}

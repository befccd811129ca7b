use ndarray::{Array2, ArrayView2};

/// Rectified linear unit, `max(z, 0)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Relu;

impl Relu {
    pub fn f(&self, z: f32) -> f32 {
        z.max(0.)
    }

    /// The derivative mask: 1 where `z` is positive, 0 elsewhere (including at 0).
    pub fn df(&self, z: f32) -> f32 {
        if z > 0. { 1. } else { 0. }
    }

    pub fn forward(&self, z: ArrayView2<f32>) -> Array2<f32> {
        z.mapv(|z| self.f(z))
    }

    pub fn mask(&self, z: ArrayView2<f32>) -> Array2<f32> {
        z.mapv(|z| self.df(z))
    }
}

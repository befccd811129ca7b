use ndarray::{Array2, ArrayView2};

/// Column-wise softmax: every column of the output is a probability distribution.
///
/// The column maximum is subtracted before exponentiating. This gives the same
/// values as `exp(z) / sum(exp(z))` but keeps large logits from overflowing `f32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Softmax;

impl Softmax {
    pub fn forward(&self, z: ArrayView2<f32>) -> Array2<f32> {
        let mut a = z.to_owned();

        for mut col in a.columns_mut() {
            let max = col.fold(f32::NEG_INFINITY, |max, &z| max.max(z));
            col.mapv_inplace(|z| (z - max).exp());
            let sum = col.sum();
            col /= sum;
        }

        a
    }
}

use ndarray::{Array2, ArrayView2};

pub trait LossFn {
    /// The loss of the predictions `y_pred` against the targets `y`, averaged over the batch.
    fn loss(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> f32;

    /// The error signal that seeds the backward pass at the output layer.
    fn loss_prime(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32>;
}

use ndarray::{Array2, ArrayView2, Zip};

use super::LossFn;

/// Categorical cross-entropy over softmax outputs, one example per column.
#[derive(Default, Clone, Copy)]
pub struct CrossEntropy;

impl CrossEntropy {
    /// Returns a new `CrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for CrossEntropy {
    fn loss(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> f32 {
        let m = y_pred.ncols();
        if m == 0 {
            return 0.;
        }

        let total = Zip::from(&y_pred)
            .and(&y)
            .fold(0., |acc, &p, &t| if t > 0. { acc - t * p.ln() } else { acc });

        total / m as f32
    }

    /// Gradient with respect to the softmax *logits*: the softmax Jacobian and the
    /// cross-entropy derivative collapse into `y_pred - y`.
    fn loss_prime(&self, y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32> {
        &y_pred - &y
    }
}

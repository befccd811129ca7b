use super::Optimizer;
use crate::{
    Result,
    arch::{Gradients, Params, check_shape},
};

const NAMES: [(&str, &str); 3] = [("dW1", "db1"), ("dW2", "db2"), ("dW3", "db3")];

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grads` - The gradient used for taking the step.
    fn update_params(&mut self, params: &mut Params, grads: &Gradients) -> Result<()> {
        for ((names, (w, b)), (dw, db)) in NAMES.iter().zip(params.layers()).zip(grads.layers()) {
            check_shape(names.0, dw.dim(), w.dim())?;
            check_shape(names.1, db.dim(), b.dim())?;
        }

        let lr = self.learning_rate;
        for ((w, b), (dw, db)) in params.layers_mut().into_iter().zip(grads.layers()) {
            w.scaled_add(-lr, dw);
            b.scaled_add(-lr, db);
        }

        Ok(())
    }
}

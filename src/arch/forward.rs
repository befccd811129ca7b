use ndarray::{Array2, ArrayView2};

use super::{
    Params,
    activations::{Relu, Softmax},
};
use crate::{MlErr, Result};

/// Every intermediate value of a forward pass, one column per example.
///
/// `z_k` is the linear output of layer `k` and `a_k` the same values after its nonlinearity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    pub z1: Array2<f32>,
    pub a1: Array2<f32>,
    pub z2: Array2<f32>,
    pub a2: Array2<f32>,
    pub z3: Array2<f32>,
    pub a3: Array2<f32>,
}

impl Activations {
    /// The class probabilities, one distribution per column.
    pub fn output(&self) -> ArrayView2<'_, f32> {
        self.a3.view()
    }

    /// The amount of examples that went through the network.
    pub fn batch_size(&self) -> usize {
        self.a3.ncols()
    }
}

/// Makes a forward pass through the network.
///
/// # Arguments
/// * `params` - The network's parameters.
/// * `x` - The input batch, one example per column.
///
/// # Returns
/// The activations of every layer or an error if the batch is empty or doesn't fit the
/// first layer.
pub fn forward(params: &Params, x: ArrayView2<f32>) -> Result<Activations> {
    params.validate()?;
    check_batch(params, x)?;

    let z1 = linear(&params.w1, &params.b1, x);
    let a1 = Relu.forward(z1.view());
    let z2 = linear(&params.w2, &params.b2, a1.view());
    let a2 = Relu.forward(z2.view());
    let z3 = linear(&params.w3, &params.b3, a2.view());
    let a3 = Softmax.forward(z3.view());

    Ok(Activations {
        z1,
        a1,
        z2,
        a2,
        z3,
        a3,
    })
}

fn check_batch(params: &Params, x: ArrayView2<f32>) -> Result<()> {
    if x.nrows() != params.w1.ncols() {
        return Err(MlErr::SizeMismatch {
            what: "input rows",
            got: x.nrows(),
            expected: params.w1.ncols(),
        });
    }

    if x.ncols() == 0 {
        return Err(MlErr::EmptyBatch);
    }

    Ok(())
}

/// `w · x + b`, with `b` broadcast over the columns of `x`.
fn linear(w: &Array2<f32>, b: &Array2<f32>, x: ArrayView2<f32>) -> Array2<f32> {
    w.dot(&x) + b
}

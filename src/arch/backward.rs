use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use super::{
    Activations, Params,
    activations::Relu,
    check_shape,
    loss::{CrossEntropy, LossFn, one_hot},
};
use crate::{MlErr, Result};

/// The gradients of the mean cross-entropy with respect to every parameter.
///
/// Each field has the shape of the parameter it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw1: Array2<f32>,
    pub db1: Array2<f32>,
    pub dw2: Array2<f32>,
    pub db2: Array2<f32>,
    pub dw3: Array2<f32>,
    pub db3: Array2<f32>,
}

impl Gradients {
    /// The `(weights, biases)` gradient pairs, in the same order as [`Params::layers`].
    pub fn layers(&self) -> [(&Array2<f32>, &Array2<f32>); 3] {
        [
            (&self.dw1, &self.db1),
            (&self.dw2, &self.db2),
            (&self.dw3, &self.db3),
        ]
    }
}

/// Computes the gradients of the loss for a batch using the activations of its forward pass.
///
/// Every gradient is averaged over `m`, the amount of columns of `x`.
///
/// # Arguments
/// * `act` - The activations `forward` produced for `x`.
/// * `params` - The parameters used in that forward pass.
/// * `x` - The input batch.
/// * `y` - The label of every column of `x`.
///
/// # Returns
/// The gradients or an error if the operands don't describe the same batch.
pub fn backward(
    act: &Activations,
    params: &Params,
    x: ArrayView2<f32>,
    y: ArrayView1<usize>,
) -> Result<Gradients> {
    params.validate()?;

    let m = x.ncols();
    if m == 0 {
        return Err(MlErr::EmptyBatch);
    }

    if y.len() != m {
        return Err(MlErr::SizeMismatch {
            what: "labels",
            got: y.len(),
            expected: m,
        });
    }

    let arch = params.architecture();
    if x.nrows() != arch.input {
        return Err(MlErr::SizeMismatch {
            what: "input rows",
            got: x.nrows(),
            expected: arch.input,
        });
    }

    check_shape("Z1", act.z1.dim(), (arch.hidden1, m))?;
    check_shape("A1", act.a1.dim(), (arch.hidden1, m))?;
    check_shape("Z2", act.z2.dim(), (arch.hidden2, m))?;
    check_shape("A2", act.a2.dim(), (arch.hidden2, m))?;
    check_shape("A3", act.a3.dim(), (arch.output, m))?;

    let scale = 1. / m as f32;
    let targets = one_hot(y, arch.output)?;

    let dz3 = CrossEntropy::new().loss_prime(act.a3.view(), targets.view());
    let (dw3, db3) = layer_grads(&dz3, act.a2.view(), scale);

    let dz2 = params.w3.t().dot(&dz3) * Relu.mask(act.z2.view());
    let (dw2, db2) = layer_grads(&dz2, act.a1.view(), scale);

    let dz1 = params.w2.t().dot(&dz2) * Relu.mask(act.z1.view());
    let (dw1, db1) = layer_grads(&dz1, x, scale);

    Ok(Gradients {
        dw1,
        db1,
        dw2,
        db2,
        dw3,
        db3,
    })
}

fn layer_grads(
    dz: &Array2<f32>,
    input: ArrayView2<f32>,
    scale: f32,
) -> (Array2<f32>, Array2<f32>) {
    let dw = dz.dot(&input.t()) * scale;
    let db = dz.sum_axis(Axis(1)).insert_axis(Axis(1)) * scale;
    (dw, db)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array, concatenate, s};

    use super::*;
    use crate::arch::{Architecture, forward};

    const TOL: f32 = 1e-5;

    fn assert_close(got: &Array2<f32>, expected: &Array2<f32>) {
        assert_eq!(got.dim(), expected.dim());
        for (g, e) in got.iter().zip(expected.iter()) {
            assert!((g - e).abs() < TOL, "got {got}, expected {expected}");
        }
    }

    fn small_params() -> Params {
        Params::from_tensors(
            array![[0.1, -0.2, 0.3], [-0.4, 0.5, -0.1]],
            array![[0.05], [-0.05]],
            array![[0.6, -0.3], [0.2, 0.4]],
            array![[0.0], [0.1]],
            array![[0.5, -0.5], [-0.3, 0.7]],
            array![[0.1], [-0.1]],
        )
        .unwrap()
    }

    fn small_batch() -> (Array2<f32>, Array1<usize>) {
        (array![[1.0, 0.0], [0.5, 1.0], [0.0, 1.0]], array![0, 1])
    }

    #[test]
    fn forward_matches_hand_computation() {
        let params = small_params();
        let (x, _) = small_batch();
        let act = forward(&params, x.view()).unwrap();

        assert_close(&act.z1, &array![[0.05, 0.15], [-0.2, 0.35]]);
        assert_close(&act.a1, &array![[0.05, 0.15], [0.0, 0.35]]);
        assert_close(&act.z2, &array![[0.03, -0.015], [0.11, 0.27]]);
        assert_close(&act.a2, &array![[0.03, 0.0], [0.11, 0.27]]);
        assert_close(&act.z3, &array![[0.06, -0.035], [-0.032, 0.089]]);
        assert_close(
            &act.a3,
            &array![
                [0.522_983_8, 0.469_039_66],
                [0.477_016_2, 0.530_960_3]
            ],
        );
    }

    #[test]
    fn gradients_match_hand_computation() {
        let params = small_params();
        let (x, y) = small_batch();
        let act = forward(&params, x.view()).unwrap();
        let grads = backward(&act, &params, x.view(), y.view()).unwrap();

        assert_close(
            &grads.dw1,
            &array![
                [-0.057_241_945, -0.084_905_73, -0.056_284_76],
                [0.0, -0.112_569_52, -0.112_569_52]
            ],
        );
        assert_close(&grads.db1, &array![[-0.113_526_7], [-0.112_569_52]]);
        assert_close(
            &grads.dw2,
            &array![[-0.009_540_324, 0.0], [-0.027_903_083, -0.098_498_33]],
        );
        assert_close(&grads.db2, &array![[-0.190_806_48], [0.004_785_929]]);
        assert_close(
            &grads.dw3,
            &array![
                [-0.007_155_243, 0.037_084_463],
                [0.007_155_243, -0.037_084_463]
            ],
        );
        assert_close(&grads.db3, &array![[-0.003_988_274], [0.003_988_274]]);
    }

    #[test]
    fn gradients_have_parameter_shapes() {
        let params = Params::initialize(Architecture::MNIST, Some(11)).unwrap();
        let x = Array2::from_elem((784, 4), 0.25);
        let y = array![1, 7, 7, 0];
        let act = forward(&params, x.view()).unwrap();
        let grads = backward(&act, &params, x.view(), y.view()).unwrap();

        for ((w, b), (dw, db)) in params.layers().into_iter().zip(grads.layers()) {
            assert_eq!(w.dim(), dw.dim());
            assert_eq!(b.dim(), db.dim());
        }
    }

    #[test]
    fn duplicated_examples_average_to_the_single_example() {
        let params = small_params();
        let (x, y) = small_batch();
        let single = x.slice(s![.., 0..1]);
        let doubled = concatenate![Axis(1), single, single];
        let labels = array![y[0], y[0]];

        let act = forward(&params, single).unwrap();
        let expected = backward(&act, &params, single, y.slice(s![0..1])).unwrap();

        let act = forward(&params, doubled.view()).unwrap();
        let got = backward(&act, &params, doubled.view(), labels.view()).unwrap();

        for ((dw, db), (ew, eb)) in got.layers().into_iter().zip(expected.layers()) {
            assert_close(dw, ew);
            assert_close(db, eb);
        }
    }

    #[test]
    fn divisor_is_the_batch_width() {
        let params = Params::initialize(Architecture::new(3, 4, 4, 3), Some(5)).unwrap();
        let x = array![
            [0.1, 0.9, 0.4, 0.3],
            [0.5, 0.2, 0.8, 0.6],
            [0.7, 0.3, 0.0, 1.0]
        ];
        let y = array![2, 0, 1, 1];
        let act = forward(&params, x.view()).unwrap();
        let full = backward(&act, &params, x.view(), y.view()).unwrap();

        // The mean over the whole batch is the mean of the per-example gradients.
        let mut summed = full.db3.clone() * 0.;
        for j in 0..4 {
            let xj = x.slice(s![.., j..j + 1]);
            let act = forward(&params, xj).unwrap();
            let g = backward(&act, &params, xj, y.slice(s![j..j + 1])).unwrap();
            summed = summed + g.db3;
        }

        assert_close(&full.db3, &(summed / 4.));
    }

    #[test]
    fn broken_params_fail_instead_of_panicking() {
        let params = small_params();
        let (x, y) = small_batch();
        let act = forward(&params, x.view()).unwrap();
        let broken = Params {
            w3: Array2::zeros((2, 5)),
            ..params
        };

        assert!(matches!(
            backward(&act, &broken, x.view(), y.view()).unwrap_err(),
            MlErr::ShapeMismatch { what: "W3", .. }
        ));
    }

    #[test]
    fn label_count_must_match_batch() {
        let params = small_params();
        let (x, _) = small_batch();
        let act = forward(&params, x.view()).unwrap();

        assert_eq!(
            backward(&act, &params, x.view(), array![0].view()).unwrap_err(),
            MlErr::SizeMismatch {
                what: "labels",
                got: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn activations_of_another_batch_fail() {
        let params = small_params();
        let (x, y) = small_batch();
        let act = forward(&params, x.slice(s![.., 0..1])).unwrap();

        assert!(matches!(
            backward(&act, &params, x.view(), y.view()).unwrap_err(),
            MlErr::ShapeMismatch { what: "Z1", .. }
        ));
    }

    #[test]
    fn out_of_range_label_fails() {
        let params = small_params();
        let (x, _) = small_batch();
        let act = forward(&params, x.view()).unwrap();

        assert_eq!(
            backward(&act, &params, x.view(), array![0, 2].view()).unwrap_err(),
            MlErr::InvalidLabel {
                index: 1,
                label: 2,
                classes: 2,
            }
        );
    }
}

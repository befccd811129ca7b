use log::{debug, info};
use ndarray::{ArrayView1, ArrayView2};
use serde::Serialize;

use crate::{
    Result,
    arch::{
        Architecture, Params, backward, forward,
        loss::{CrossEntropy, LossFn, one_hot},
    },
    optimization::Optimizer,
    predict::{accuracy, argmax, evaluate},
};

/// Accuracy is reported on every iteration that is a multiple of this.
pub const REPORT_INTERVAL: usize = 10;

/// Progress of the training at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub iteration: usize,
    /// Training accuracy of the predictions made *before* this iteration's update.
    pub accuracy: f32,
    /// Accuracy on the validation batch of the parameters *after* this iteration's update.
    pub validation_accuracy: Option<f32>,
}

/// The outcome of a training run.
#[derive(Debug, Clone)]
pub struct Training {
    pub params: Params,
    pub reports: Vec<Report>,
}

/// Full-batch trainer: every iteration is a forward pass, a backward pass and an
/// optimizer step over the whole batch.
pub struct Trainer<O: Optimizer> {
    optimizer: O,
    architecture: Architecture,
    iterations: usize,
    seed: Option<u64>,
}

impl<O: Optimizer> Trainer<O> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The rule used to update the parameters.
    /// * `architecture` - The widths of the network that will be trained.
    /// * `iterations` - The amount of passes over the batch.
    /// * `seed` - Seed for the initial weights, `None` to draw one from the OS.
    pub fn new(
        optimizer: O,
        architecture: Architecture,
        iterations: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            optimizer,
            architecture,
            iterations,
            seed,
        }
    }

    /// Initializes fresh parameters and trains them on `x` and `y`.
    ///
    /// # Arguments
    /// * `x` - The training batch, one example per column.
    /// * `y` - The label of every column of `x`.
    /// * `validation` - A batch evaluated on every report, if any.
    ///
    /// # Returns
    /// The trained parameters and every report made or the first error found.
    pub fn train(
        &mut self,
        x: ArrayView2<f32>,
        y: ArrayView1<usize>,
        validation: Option<(ArrayView2<f32>, ArrayView1<usize>)>,
    ) -> Result<Training> {
        let params = Params::initialize(self.architecture, self.seed)?;
        self.train_from(params, x, y, validation)
    }

    /// Same as [`Trainer::train`] but starting from the given parameters.
    pub fn train_from(
        &mut self,
        mut params: Params,
        x: ArrayView2<f32>,
        y: ArrayView1<usize>,
        validation: Option<(ArrayView2<f32>, ArrayView1<usize>)>,
    ) -> Result<Training> {
        let mut reports = Vec::with_capacity(self.iterations.div_ceil(REPORT_INTERVAL));

        info!(
            "training for {} iterations on {} examples",
            self.iterations,
            x.ncols()
        );

        for i in 0..self.iterations {
            let act = forward(&params, x)?;
            let grads = backward(&act, &params, x, y)?;

            let acc = if i % REPORT_INTERVAL == 0 {
                let targets = one_hot(y, params.w3.nrows())?;
                let loss = CrossEntropy::new().loss(act.output(), targets.view());
                debug!(iteration = i, loss = loss; "cross-entropy");

                Some(accuracy(argmax(act.output()).view(), y)?)
            } else {
                None
            };

            self.optimizer.update_params(&mut params, &grads)?;

            if let Some(acc) = acc {
                let validation_accuracy = match validation {
                    Some((vx, vy)) => Some(evaluate(&params, vx, vy)?),
                    None => None,
                };

                match validation_accuracy {
                    Some(val) => info!("iteration={i} accuracy={acc:.4} validation={val:.4}"),
                    None => info!("iteration={i} accuracy={acc:.4}"),
                }

                reports.push(Report {
                    iteration: i,
                    accuracy: acc,
                    validation_accuracy,
                });
            }
        }

        info!("training finished");
        Ok(Training { params, reports })
    }
}

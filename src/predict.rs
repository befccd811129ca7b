use ndarray::{Array1, ArrayView1, ArrayView2, s};
use serde::Serialize;

use crate::{
    MlErr, Result,
    arch::{Params, forward},
};

/// The index of the largest value of every column. Ties resolve to the lowest index.
pub fn argmax(probs: ArrayView2<f32>) -> Array1<usize> {
    probs
        .columns()
        .into_iter()
        .map(|col| {
            col.iter()
                .enumerate()
                .fold((0, f32::NEG_INFINITY), |(best, max), (i, &p)| {
                    if p > max { (i, p) } else { (best, max) }
                })
                .0
        })
        .collect()
}

/// Predicts the class of every column of `x`.
pub fn predict(params: &Params, x: ArrayView2<f32>) -> Result<Array1<usize>> {
    let act = forward(params, x)?;
    Ok(argmax(act.output()))
}

/// The fraction of `predictions` equal to their label.
///
/// # Errors
/// `MlErr::SizeMismatch` if the lengths differ, `MlErr::EmptyBatch` if both are empty.
pub fn accuracy(predictions: ArrayView1<usize>, labels: ArrayView1<usize>) -> Result<f32> {
    if predictions.len() != labels.len() {
        return Err(MlErr::SizeMismatch {
            what: "predictions",
            got: predictions.len(),
            expected: labels.len(),
        });
    }

    if labels.is_empty() {
        return Err(MlErr::EmptyBatch);
    }

    let hits = predictions
        .iter()
        .zip(labels)
        .filter(|(p, l)| p == l)
        .count();

    Ok(hits as f32 / labels.len() as f32)
}

/// Predicts `x` and scores the predictions against `y`.
pub fn evaluate(params: &Params, x: ArrayView2<f32>, y: ArrayView1<usize>) -> Result<f32> {
    let predictions = predict(params, x)?;
    accuracy(predictions.view(), y)
}

/// The prediction made for a single example of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplePrediction {
    pub index: usize,
    pub predicted: usize,
    pub label: usize,
}

impl SamplePrediction {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.label
    }
}

/// Predicts column `index` of `x` on its own.
///
/// # Errors
/// `MlErr::SizeMismatch` if `x` and `y` disagree on the amount of examples,
/// `MlErr::SampleOutOfBounds` if `index` isn't one of them.
pub fn predict_sample(
    params: &Params,
    x: ArrayView2<f32>,
    y: ArrayView1<usize>,
    index: usize,
) -> Result<SamplePrediction> {
    if y.len() != x.ncols() {
        return Err(MlErr::SizeMismatch {
            what: "labels",
            got: y.len(),
            expected: x.ncols(),
        });
    }

    let len = x.ncols();
    if index >= len {
        return Err(MlErr::SampleOutOfBounds { index, len });
    }

    let predicted = predict(params, x.slice(s![.., index..index + 1]))?;

    Ok(SamplePrediction {
        index,
        predicted: predicted[0],
        label: y[index],
    })
}

use ndarray::{Array2, ArrayView1};

use crate::{MlErr, Result};

/// Encodes `labels` as a `(classes, m)` matrix whose column `i` is the indicator of `labels[i]`.
///
/// # Errors
/// `MlErr::InvalidLabel` if a label is not lower than `classes`.
pub fn one_hot(labels: ArrayView1<usize>, classes: usize) -> Result<Array2<f32>> {
    let mut encoded = Array2::zeros((classes, labels.len()));

    for (index, &label) in labels.iter().enumerate() {
        if label >= classes {
            return Err(MlErr::InvalidLabel {
                index,
                label,
                classes,
            });
        }

        encoded[[label, index]] = 1.;
    }

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Axis, array};

    use super::*;
    use crate::predict::argmax;

    #[test]
    fn columns_are_indicators() {
        let encoded = one_hot(array![3, 0, 9, 3].view(), 10).unwrap();

        assert_eq!(encoded.dim(), (10, 4));
        assert_eq!(encoded.sum_axis(Axis(0)), array![1., 1., 1., 1.]);
        assert_eq!(encoded[[3, 0]], 1.);
        assert_eq!(encoded[[0, 1]], 1.);
        assert_eq!(encoded[[9, 2]], 1.);
        assert_eq!(encoded[[3, 3]], 1.);
    }

    #[test]
    fn argmax_round_trips() {
        let labels = array![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9, 0, 5];
        let encoded = one_hot(labels.view(), 10).unwrap();

        assert_eq!(argmax(encoded.view()), labels);
    }

    #[test]
    fn empty_labels_give_an_empty_matrix() {
        let encoded = one_hot(Array1::<usize>::zeros(0).view(), 10).unwrap();
        assert_eq!(encoded.dim(), (10, 0));
    }

    #[test]
    fn out_of_range_label_fails() {
        let err = one_hot(array![1, 10].view(), 10).unwrap_err();
        assert_eq!(
            err,
            MlErr::InvalidLabel {
                index: 1,
                label: 10,
                classes: 10
            }
        );
    }
}

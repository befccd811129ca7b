use log::debug;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::Uniform;

use super::Architecture;
use crate::{MlErr, Result};

/// Inclusive lower bound of the initial weights.
const WEIGHT_LOW: f32 = -0.5;
/// Exclusive upper bound of the initial weights.
const WEIGHT_HIGH: f32 = 0.5;

/// The trainable state of the network: three weight matrices and three bias columns.
///
/// `w_k` has one row per unit of layer `k` and one column per unit of the layer before it,
/// `b_k` is a `(rows of w_k, 1)` column broadcast over the examples of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub w1: Array2<f32>,
    pub b1: Array2<f32>,
    pub w2: Array2<f32>,
    pub b2: Array2<f32>,
    pub w3: Array2<f32>,
    pub b3: Array2<f32>,
}

impl Params {
    /// Creates the parameters of a freshly initialized network.
    ///
    /// Weights are sampled independently from a uniform distribution over `[-0.5, 0.5)` and
    /// biases start at zero.
    ///
    /// # Arguments
    /// * `architecture` - The widths of the layers.
    /// * `seed` - Seed for the weights, `None` draws a seed from the operating system.
    ///
    /// # Returns
    /// The new parameters or an error if the weight distribution couldn't be built.
    pub fn initialize(architecture: Architecture, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::initialize_with(architecture, &mut rng)
    }

    /// Same as [`Params::initialize`] but sampling from the given generator.
    pub fn initialize_with<R: Rng>(architecture: Architecture, rng: &mut R) -> Result<Self> {
        let distribution = Uniform::new(WEIGHT_LOW, WEIGHT_HIGH)?;
        let [s1, s2, s3] = architecture.weight_shapes();

        let params = Self {
            w1: Array2::random_using(s1, &distribution, rng),
            b1: Array2::zeros((s1.0, 1)),
            w2: Array2::random_using(s2, &distribution, rng),
            b2: Array2::zeros((s2.0, 1)),
            w3: Array2::random_using(s3, &distribution, rng),
            b3: Array2::zeros((s3.0, 1)),
        };

        debug!(size = architecture.size(); "parameters initialized");
        Ok(params)
    }

    /// Builds the parameters from explicit tensors.
    ///
    /// # Errors
    /// `MlErr::ShapeMismatch` if the tensors don't chain into a valid network.
    pub fn from_tensors(
        w1: Array2<f32>,
        b1: Array2<f32>,
        w2: Array2<f32>,
        b2: Array2<f32>,
        w3: Array2<f32>,
        b3: Array2<f32>,
    ) -> Result<Self> {
        let params = Self {
            w1,
            b1,
            w2,
            b2,
            w3,
            b3,
        };

        params.validate()?;
        Ok(params)
    }

    /// Returns the layer widths these parameters describe.
    pub fn architecture(&self) -> Architecture {
        Architecture::new(
            self.w1.ncols(),
            self.w1.nrows(),
            self.w2.nrows(),
            self.w3.nrows(),
        )
    }

    /// Checks that every weight matrix consumes the output of the previous layer and that
    /// every bias is a column with one row per unit.
    pub fn validate(&self) -> Result<()> {
        let arch = self.architecture();
        let [s1, s2, s3] = arch.weight_shapes();

        check_shape("W2", self.w2.dim(), s2)?;
        check_shape("W3", self.w3.dim(), s3)?;
        check_shape("b1", self.b1.dim(), (s1.0, 1))?;
        check_shape("b2", self.b2.dim(), (s2.0, 1))?;
        check_shape("b3", self.b3.dim(), (s3.0, 1))
    }

    /// The `(weights, biases)` pairs of the three layers, from the input to the output.
    pub fn layers(&self) -> [(&Array2<f32>, &Array2<f32>); 3] {
        [
            (&self.w1, &self.b1),
            (&self.w2, &self.b2),
            (&self.w3, &self.b3),
        ]
    }

    pub fn layers_mut(&mut self) -> [(&mut Array2<f32>, &mut Array2<f32>); 3] {
        [
            (&mut self.w1, &mut self.b1),
            (&mut self.w2, &mut self.b2),
            (&mut self.w3, &mut self.b3),
        ]
    }
}

pub(crate) fn check_shape(
    what: &'static str,
    got: (usize, usize),
    expected: (usize, usize),
) -> Result<()> {
    if got != expected {
        return Err(MlErr::ShapeMismatch {
            what,
            got,
            expected,
        });
    }

    Ok(())
}

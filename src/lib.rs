//! A digit classifier trained with hand-written backpropagation.
//!
//! The network is a `784 → 64 → 32 → 10` perceptron with two ReLU hidden layers and a softmax
//! output, trained with full-batch gradient descent on the mean cross-entropy.

pub mod arch;
pub mod config;
pub mod data;
pub mod error;
pub mod optimization;
pub mod predict;
pub mod training;

pub use error::{MlErr, Result};

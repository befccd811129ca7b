use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used in the entire training engine.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The training engine's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    /// Two tensors that must agree on a whole shape don't.
    ShapeMismatch {
        what: &'static str,
        got: (usize, usize),
        expected: (usize, usize),
    },
    /// A single dimension or length doesn't match its operand.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A batch with no columns, the gradients would divide by zero.
    EmptyBatch,
    InvalidLabel {
        index: usize,
        label: usize,
        classes: usize,
    },
    SampleOutOfBounds {
        index: usize,
        len: usize,
    },
    InvalidConfig(&'static str),
    Initialization(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch for {what}: got {}x{}, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            MlErr::EmptyBatch => write!(f, "the batch has no examples"),
            MlErr::InvalidLabel {
                index,
                label,
                classes,
            } => write!(
                f,
                "label {label} of example {index} is out of range for {classes} classes"
            ),
            MlErr::SampleOutOfBounds { index, len } => {
                write!(f, "sample index {index} is out of bounds for {len} examples")
            }
            MlErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            MlErr::Initialization(msg) => write!(f, "failed to initialize parameters: {msg}"),
        }
    }
}

impl Error for MlErr {}

impl From<UniformError> for MlErr {
    fn from(value: UniformError) -> Self {
        Self::Initialization(value.to_string())
    }
}

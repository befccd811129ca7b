//! Loading of labeled digit images from CSV files.
//!
//! Every row of a file is a label followed by the 784 intensities of a 28×28 grayscale image,
//! in row-major order and in `[0, 255]`. The first row is a header and is skipped.

mod dataset;
mod error;
mod render;

pub use dataset::{Dataset, LabeledBatch, Record};
pub use error::DataErr;
pub use render::render;

/// Width and height of an image.
pub const IMAGE_SIDE: usize = 28;
/// Amount of pixels of an image.
pub const PIXELS: usize = IMAGE_SIDE * IMAGE_SIDE;
/// Largest raw pixel intensity.
pub const MAX_PIXEL: u8 = 255;
/// Amount of distinct labels.
pub const CLASSES: usize = 10;

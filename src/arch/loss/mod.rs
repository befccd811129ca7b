mod cross_entropy;
mod loss_fn;
mod one_hot;

pub use cross_entropy::CrossEntropy;
pub use loss_fn::LossFn;
pub use one_hot::one_hot;

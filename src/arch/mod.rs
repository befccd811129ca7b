pub mod activations;
mod architecture;
mod backward;
mod forward;
pub mod loss;
mod params;

pub use architecture::Architecture;
pub use backward::{Gradients, backward};
pub use forward::{Activations, forward};
pub use params::Params;
pub(crate) use params::check_shape;

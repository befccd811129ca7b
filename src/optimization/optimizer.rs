use crate::{
    Result,
    arch::{Gradients, Params},
};

pub trait Optimizer {
    /// Takes one step on `params` using `grads`. On error `params` is left untouched.
    fn update_params(&mut self, params: &mut Params, grads: &Gradients) -> Result<()>;
}

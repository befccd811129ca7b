/// The widths of the network's layers, from the input to the output.
///
/// The engine works with any widths; the digit classifier uses [`Architecture::MNIST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Architecture {
    pub input: usize,
    pub hidden1: usize,
    pub hidden2: usize,
    pub output: usize,
}

impl Architecture {
    /// 28x28 pixel images, two hidden layers and one unit per digit.
    pub const MNIST: Self = Self::new(784, 64, 32, 10);

    pub const fn new(input: usize, hidden1: usize, hidden2: usize, output: usize) -> Self {
        Self {
            input,
            hidden1,
            hidden2,
            output,
        }
    }

    /// Returns the `(rows, cols)` shape of each of the three weight matrices.
    pub fn weight_shapes(&self) -> [(usize, usize); 3] {
        [
            (self.hidden1, self.input),
            (self.hidden2, self.hidden1),
            (self.output, self.hidden2),
        ]
    }

    /// Returns the amount of scalar parameters, weights and biases included.
    pub fn size(&self) -> usize {
        self.weight_shapes()
            .iter()
            .map(|&(rows, cols)| rows * (cols + 1))
            .sum()
    }
}

impl Default for Architecture {
    fn default() -> Self {
        Self::MNIST
    }
}

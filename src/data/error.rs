use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// Errors found while reading a dataset.
///
/// Rows are counted from 1 without the header, columns from 0 with the label at 0.
#[derive(Debug)]
pub enum DataErr {
    Io(io::Error),
    Csv(csv::Error),
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
    RowLength {
        row: usize,
        got: usize,
        expected: usize,
    },
    PixelRange {
        row: usize,
        column: usize,
        value: u32,
    },
    LabelRange {
        row: usize,
        label: u32,
    },
    Empty,
}

impl Display for DataErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataErr::Io(e) => write!(f, "io error: {e}"),
            DataErr::Csv(e) => write!(f, "csv error: {e}"),
            DataErr::Parse { row, column, value } => {
                write!(f, "row {row}, column {column}: {value:?} is not an integer")
            }
            DataErr::RowLength { row, got, expected } => {
                write!(f, "row {row} has {got} fields, expected {expected}")
            }
            DataErr::PixelRange { row, column, value } => {
                write!(f, "row {row}, column {column}: pixel {value} is out of range")
            }
            DataErr::LabelRange { row, label } => {
                write!(f, "row {row}: label {label} is not a digit")
            }
            DataErr::Empty => write!(f, "the dataset has no records"),
        }
    }
}

impl Error for DataErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataErr::Io(e) => Some(e),
            DataErr::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DataErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for DataErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

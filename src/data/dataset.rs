use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use ndarray::{Array1, Array2};
use rand::{Rng, seq::SliceRandom};

use super::{CLASSES, DataErr, MAX_PIXEL, PIXELS};

/// A single labeled image with its raw intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: usize,
    pub pixels: Vec<u8>,
}

/// A batch ready for the network: normalized pixels one example per column and their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledBatch {
    pub x: Array2<f32>,
    pub y: Array1<usize>,
}

impl LabeledBatch {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// An ordered collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Reads a dataset from the CSV file at `path`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, DataErr> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a dataset from CSV data with a header row.
    ///
    /// # Errors
    /// A `DataErr` for the first malformed row, or `DataErr::Empty` if there are no rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataErr> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            records.push(parse_record(i + 1, &row?)?);
        }

        if records.is_empty() {
            return Err(DataErr::Empty);
        }

        debug!(records = records.len(); "dataset loaded");
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }

    /// Splits the dataset into its first `dev_size` records and the rest.
    ///
    /// `dev_size` is clamped to the length of the dataset.
    pub fn split(mut self, dev_size: usize) -> (Dataset, Dataset) {
        let rest = self.records.split_off(dev_size.min(self.records.len()));
        (self, Dataset { records: rest })
    }

    /// Builds the `(784, m)` input matrix, with intensities scaled to `[0, 1]`, and the labels.
    pub fn to_batch(&self) -> LabeledBatch {
        let max = f32::from(MAX_PIXEL);
        let x = Array2::from_shape_fn((PIXELS, self.len()), |(p, j)| {
            f32::from(self.records[j].pixels[p]) / max
        });
        let y = self.records.iter().map(|r| r.label).collect();

        LabeledBatch { x, y }
    }
}

fn parse_record(row: usize, fields: &StringRecord) -> Result<Record, DataErr> {
    if fields.len() != PIXELS + 1 {
        return Err(DataErr::RowLength {
            row,
            got: fields.len(),
            expected: PIXELS + 1,
        });
    }

    let mut values = fields
        .iter()
        .enumerate()
        .map(|(column, field)| parse_field(row, column, field));

    let label = values.next().transpose()?.unwrap_or_default();
    if label as usize >= CLASSES {
        return Err(DataErr::LabelRange { row, label });
    }

    let pixels = values
        .enumerate()
        .map(|(p, value)| {
            let value = value?;
            u8::try_from(value).map_err(|_| DataErr::PixelRange {
                row,
                column: p + 1,
                value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record {
        label: label as usize,
        pixels,
    })
}

fn parse_field(row: usize, column: usize, field: &str) -> Result<u32, DataErr> {
    field.trim().parse().map_err(|_| DataErr::Parse {
        row,
        column,
        value: field.to_string(),
    })
}

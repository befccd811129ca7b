mod trainer;

pub use trainer::{REPORT_INTERVAL, Report, Trainer, Training};

pub mod calendar;
pub mod engine;
pub mod excel;
pub mod pipeline;

pub use crate::domain::model::{Extraction, HolidaySet, Issue, ReportData, ReportRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

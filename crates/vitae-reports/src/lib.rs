pub mod error;
pub mod report_queue;

pub use error::{ReportError, Result};
pub use report_queue::ReportQueue;

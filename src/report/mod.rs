pub mod csv;
pub mod markdown;
mod number;

pub use csv::{export_file_name, CsvExport, CsvReport};
pub use markdown::{report_file_name, MarkdownReport};
pub use number::{full_precision, two_decimals};

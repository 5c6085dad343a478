//! Binary document export.

mod xlsx;

pub use xlsx::{class_list_workbook, XLSX_CONTENT_TYPE};

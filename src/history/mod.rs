//! Movement history in CSV form: `date,kind,amount` with a header row.

pub mod csv_parser;
pub mod csv_printer;

pub use csv_parser::{HistoryError, read_movements};
pub use csv_printer::write_movements;

//! Tax table data: CSV parsing and bundled 2024 federal reference tables.

mod bundled;
mod loader;

pub use bundled::{fica_2024, tax_tables_2024};
pub use loader::{BracketRecord, DeductionRecord, TableError, TableLoader, TaxTables};

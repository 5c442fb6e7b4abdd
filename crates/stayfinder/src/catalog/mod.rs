//! Hotel inventory: the built-in seed, JSON catalog loading, and the CSV
//! importer that turns marketing exports into catalog records.

mod domain;
mod import;
mod seed;

pub use domain::{Catalog, HotelRecord};
pub use import::{CsvCatalogImporter, CsvImportSummary};
pub use seed::seed_catalog;

/// Failures raised while loading or validating hotel inventory.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate hotel id '{0}'")]
    DuplicateId(String),
    #[error("invalid hotel record '{hotel}': {detail}")]
    InvalidRecord { hotel: String, detail: String },
}

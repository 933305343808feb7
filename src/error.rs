use thiserror::Error;

/// Failure to build a catalog from an attribute table.
///
/// Runtime lookups never fail; only loading a table can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("entry '{entry}' is missing required attribute '{field}'")]
    MissingField { entry: String, field: &'static str },

    #[error("entry '{entry}' has invalid {field} '{value}'")]
    InvalidValue { entry: String, field: &'static str, value: String },
}

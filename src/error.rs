// ⚠️ Error taxonomy - the fallible edges of the system
// Filtering, stats and toggles never fail; entry, import and config can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// A required text field was empty after trimming
    #[error("field '{field}' must not be blank")]
    BlankField { field: &'static str },

    /// Item references a venue id that is not in the registry
    #[error("unknown venue id '{id}'")]
    UnknownVenue { id: String },

    /// Reference to an item id that is not in the catalog
    #[error("unknown item id '{id}'")]
    UnknownItem { id: String },

    /// Price is negative, NaN or infinite
    #[error("invalid price {price}: must be a non-negative finite number")]
    InvalidPrice { price: f64 },

    /// Configuration values are present but unusable
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for MenuError {
    fn from(err: figment::Error) -> Self {
        MenuError::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface for AI-assisted content.
///
/// Synchronous by design: the providers in scope are deterministic and local.
/// A networked provider would wrap its client behind this same seam.
pub trait ContentAssist {
    /// Suggest a menu-facing description for an item name.
    fn generate_description(&self, name: &str) -> Result<String, AssistError>;

    /// Suggest a sell price in minor currency units for an item name within
    /// a category (category passed as a label so this crate stays free of
    /// domain types).
    fn suggest_price(&self, name: &str, category_label: &str) -> Result<i64, AssistError>;
}

use crate::assist::{AssistError, ContentAssist};

/// Deterministic offline provider.
///
/// Backs tests and no-network sessions: suggestions are derived entirely from
/// the input, so the same name always produces the same content.
#[derive(Debug, Clone, Default)]
pub struct CannedAssist;

impl CannedAssist {
    pub fn new() -> Self {
        Self
    }

    fn base_price(category_label: &str) -> i64 {
        match category_label {
            "meat" | "seafood" => 2_500,
            "dairy" | "frozen" => 900,
            "beverages" => 600,
            "spices" => 1_200,
            _ => 800,
        }
    }
}

impl ContentAssist for CannedAssist {
    fn generate_description(&self, name: &str) -> Result<String, AssistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AssistError::InvalidInput("name cannot be empty".to_string()));
        }
        Ok(format!(
            "{name}, prepared fresh daily with seasonal ingredients."
        ))
    }

    fn suggest_price(&self, name: &str, category_label: &str) -> Result<i64, AssistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AssistError::InvalidInput("name cannot be empty".to_string()));
        }
        // Deterministic spread over the category base so distinct names do
        // not all land on one price point.
        let spread = (name.len() as i64 % 7) * 50;
        Ok(Self::base_price(category_label) + spread)
    }
}

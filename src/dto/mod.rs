use crate::error::AppError;

pub mod auth;
pub mod browse;
pub mod cart;
pub mod orders;
pub mod products;
pub mod tenants;

/// Collects the names of missing required fields so a validation failure
/// reports all of them at once instead of the first.
#[derive(Debug, Default)]
pub struct MissingFields(Vec<&'static str>);

impl MissingFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required string field: absent, empty, or whitespace-only counts
    /// as missing. Returns the trimmed value (empty when missing).
    pub fn require_str(&mut self, name: &'static str, value: &Option<String>) -> String {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                self.0.push(name);
                String::new()
            }
        }
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(
                self.0.into_iter().map(str::to_string).collect(),
            ))
        }
    }
}

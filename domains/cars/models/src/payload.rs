use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

/// First year a production automobile existed.
pub const MIN_YEAR: u32 = 1886;

/// Every mutable field of a car, used for both creation and update.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct CarPayload {
    #[builder(setter(into))]
    pub make: String,
    #[builder(setter(into))]
    pub model: String,
    #[builder(setter(into))]
    pub color: String,
    #[builder(setter(into))]
    pub owner: String,
    pub year: u32,
    #[builder(default)]
    pub is_booked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadValidationError {
    #[error("field `{field}` must not be empty")]
    BlankField { field: &'static str },
    #[error("year {year} is outside the plausible range {min}..={max}")]
    ImplausibleYear { year: u32, min: u32, max: u32 },
}

impl PayloadValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field } => field,
            Self::ImplausibleYear { .. } => "year",
        }
    }
}

impl CarPayload {
    /// Validate against the current calendar year.
    pub fn validate(&self) -> Result<(), PayloadValidationError> {
        let current_year = u32::try_from(Utc::now().year()).unwrap_or(MIN_YEAR);
        self.validate_for_year(current_year)
    }

    /// Validate with an explicit reference year; the upper bound allows the
    /// next model year.
    pub fn validate_for_year(
        &self, current_year: u32,
    ) -> Result<(), PayloadValidationError> {
        let text_fields = [
            ("make", &self.make),
            ("model", &self.model),
            ("color", &self.color),
            ("owner", &self.owner),
        ];

        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(PayloadValidationError::BlankField { field });
            }
        }

        let max = current_year.saturating_add(1).max(MIN_YEAR);
        if !(MIN_YEAR..=max).contains(&self.year) {
            return Err(PayloadValidationError::ImplausibleYear {
                year: self.year,
                min: MIN_YEAR,
                max,
            });
        }

        Ok(())
    }
}

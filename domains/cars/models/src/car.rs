use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::CarPayload;

pub type CarId = u64;

/// Nanoseconds since the Unix epoch.
pub type Timestamp = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub color: String,
    pub owner: String,
    pub year: u32,
    pub is_booked: bool,
    pub created_at: Timestamp,
    /// Absent until the first successful update.
    pub updated_at: Option<Timestamp>,
}

impl Car {
    pub fn new(id: CarId, payload: CarPayload, created_at: Timestamp) -> Self {
        let CarPayload {
            make,
            model,
            color,
            owner,
            year,
            is_booked,
        } = payload;

        Self {
            id,
            make,
            model,
            color,
            owner,
            year,
            is_booked,
            created_at,
            updated_at: None,
        }
    }

    /// Overwrites every mutable field and stamps `updated_at`.
    ///
    /// The stamp never precedes `created_at`, so a wall clock that stepped
    /// backwards cannot break the ordering between the two.
    pub fn apply_update(&mut self, payload: CarPayload, now: Timestamp) {
        self.make = payload.make;
        self.model = payload.model;
        self.color = payload.color;
        self.owner = payload.owner;
        self.year = payload.year;
        self.is_booked = payload.is_booked;
        self.updated_at = Some(now.max(self.created_at));
    }

    /// The mutable half of the record, as a caller would have sent it.
    pub fn payload(&self) -> CarPayload {
        CarPayload {
            make: self.make.clone(),
            model: self.model.clone(),
            color: self.color.clone(),
            owner: self.owner.clone(),
            year: self.year,
            is_booked: self.is_booked,
        }
    }
}

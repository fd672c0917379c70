// ABOUTME: Membership (fee) record model for the Sparta membership system
// ABOUTME: One record per member, created or replaced wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A member's payment/validity record
///
/// At most one per member, keyed by the member id in the store. Replaced
/// wholesale on every put; there is no partial membership update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    /// Payment date
    pub datum_uplate: NaiveDate,
    /// Expiry date
    pub datum_isteka: NaiveDate,
    /// Amount paid, non-negative
    pub iznos: f64,
    /// Free-text status string, stored as-is
    pub status: String,
}

/// Membership put payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewMembership {
    pub datum_uplate: NaiveDate,
    pub datum_isteka: NaiveDate,
    pub iznos: f64,
    pub status: String,
}

impl NewMembership {
    /// Validate the payload and produce a typed [`Membership`]
    ///
    /// # Errors
    ///
    /// Returns a field-tagged validation error when the amount is negative.
    pub fn validate(self) -> AppResult<Membership> {
        if self.iznos < 0.0 {
            return Err(AppError::validation(
                "iznos",
                format!("must be non-negative, got {}", self.iznos),
            ));
        }

        Ok(Membership {
            datum_uplate: self.datum_uplate,
            datum_isteka: self.datum_isteka,
            iznos: self.iznos,
            status: self.status,
        })
    }
}

// ABOUTME: Training session model for the Sparta membership system
// ABOUTME: Weekday set, capacity bounds, and session registration validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::member::Group;

/// Capacity bounds enforced at session creation
pub const MIN_CAPACITY: i64 = 1;
pub const MAX_CAPACITY: i64 = 20;

/// Training day; the club trains Monday through Saturday
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Weekday {
    #[serde(rename = "ponedjeljak")]
    Monday,
    #[serde(rename = "utorak")]
    Tuesday,
    #[serde(rename = "srijeda")]
    Wednesday,
    #[serde(rename = "četvrtak")]
    Thursday,
    #[serde(rename = "petak")]
    Friday,
    #[serde(rename = "subota")]
    Saturday,
}

impl Weekday {
    /// Convert to the lower-cased storage and wire string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "ponedjeljak",
            Self::Tuesday => "utorak",
            Self::Wednesday => "srijeda",
            Self::Thursday => "četvrtak",
            Self::Friday => "petak",
            Self::Saturday => "subota",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    /// Case-insensitive; the stored form is always lower-cased
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ponedjeljak" => Ok(Self::Monday),
            "utorak" => Ok(Self::Tuesday),
            "srijeda" => Ok(Self::Wednesday),
            "četvrtak" => Ok(Self::Thursday),
            "petak" => Ok(Self::Friday),
            "subota" => Ok(Self::Saturday),
            _ => Err(AppError::validation(
                "dan",
                format!("'{s}' is not a training day (ponedjeljak-subota)"),
            )),
        }
    }
}

/// A recurring training slot for a given group
///
/// Immutable after creation; members reference it through their `termin`
/// field. There is no session update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingSession {
    /// Unique session identifier, externally assigned
    pub id: i64,
    /// Skill group this session trains
    pub grupa: Group,
    /// Training day, stored lower-cased
    pub dan: Weekday,
    /// Time of day (HH:MM:SS)
    pub vrijeme: NaiveTime,
    /// Maximum number of enrolled members, in [1,20]
    pub max_clanova: u32,
}

/// Session registration payload, untyped fields as they arrive on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub id: i64,
    pub grupa: String,
    pub dan: String,
    pub vrijeme: NaiveTime,
    pub max_clanova: i64,
}

impl NewSession {
    /// Validate the registration and produce a typed [`TrainingSession`]
    ///
    /// # Errors
    ///
    /// Returns a field-tagged validation error when the group or day is
    /// outside its allowed set, or the capacity falls outside [1,20].
    pub fn validate(self) -> AppResult<TrainingSession> {
        let grupa = Group::from_str(&self.grupa)?;
        let dan = Weekday::from_str(&self.dan)?;

        if self.max_clanova < MIN_CAPACITY || self.max_clanova > MAX_CAPACITY {
            return Err(AppError::validation(
                "max_clanova",
                format!(
                    "must be between {MIN_CAPACITY} and {MAX_CAPACITY}, got {}",
                    self.max_clanova
                ),
            ));
        }

        Ok(TrainingSession {
            id: self.id,
            grupa,
            dan,
            vrijeme: self.vrijeme,
            // Safe: bounds-checked against [1,20] above
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            max_clanova: self.max_clanova as u32,
        })
    }
}

// ABOUTME: Member model for the Sparta membership system
// ABOUTME: Group, MemberStatus, Member, and the pure validation of registrations and patches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Phone numbers are normalized to digits only and must land in this range
const PHONE_MIN_DIGITS: usize = 8;
const PHONE_MAX_DIGITS: usize = 15;

/// Skill group a member (and a session) belongs to
///
/// Assignment to a session requires an exact group match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    /// Beginners ("početni")
    #[serde(rename = "početni")]
    Beginner,
    /// Intermediate ("srednji")
    #[serde(rename = "srednji")]
    Intermediate,
    /// Advanced ("napredni")
    #[serde(rename = "napredni")]
    Advanced,
}

impl Group {
    /// All allowed groups, in report order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Convert to string for storage and wire format
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "početni",
            Self::Intermediate => "srednji",
            Self::Advanced => "napredni",
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Group {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "početni" => Ok(Self::Beginner),
            "srednji" => Ok(Self::Intermediate),
            "napredni" => Ok(Self::Advanced),
            _ => Err(AppError::validation(
                "grupa",
                format!("'{s}' is not one of: početni, srednji, napredni"),
            )),
        }
    }
}

/// Member account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MemberStatus {
    /// Active member ("aktivan")
    #[serde(rename = "aktivan")]
    Active,
    /// Inactive member ("neaktivan")
    #[serde(rename = "neaktivan")]
    Inactive,
}

impl MemberStatus {
    /// Check whether the member counts toward activity reports
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Convert to string for storage and wire format
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "aktivan",
            Self::Inactive => "neaktivan",
        }
    }
}

impl Display for MemberStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aktivan" => Ok(Self::Active),
            "neaktivan" => Ok(Self::Inactive),
            _ => Err(AppError::validation(
                "status",
                format!("'{s}' is not one of: aktivan, neaktivan"),
            )),
        }
    }
}

/// A registered club member
///
/// Only constructed through [`NewMember::validate`] or a store read, so every
/// in-memory `Member` already satisfies the field invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// Unique member identifier, externally assigned
    pub id: i64,
    /// First name
    pub ime: String,
    /// Last name
    pub prezime: String,
    /// Email address, unique across all members
    pub email: String,
    /// Phone number, digits only, 8-15 digits
    pub mobitel: String,
    /// Skill group
    pub grupa: Group,
    /// Account status
    pub status: MemberStatus,
    /// Assigned training session, at most one at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termin: Option<i64>,
}

/// Strip everything but ASCII digits and enforce the digit-count bounds
pub fn normalize_phone(raw: &str) -> AppResult<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < PHONE_MIN_DIGITS || digits.len() > PHONE_MAX_DIGITS {
        return Err(AppError::validation(
            "mobitel",
            format!(
                "must contain between {PHONE_MIN_DIGITS} and {PHONE_MAX_DIGITS} digits, got {}",
                digits.len()
            ),
        ));
    }
    Ok(digits)
}

/// Member registration payload, untyped fields as they arrive on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    pub id: i64,
    pub ime: String,
    pub prezime: String,
    pub email: String,
    pub mobitel: String,
    pub grupa: String,
    pub status: String,
}

impl NewMember {
    /// Validate the registration and produce a typed [`Member`]
    ///
    /// Pure function: checks group and status against their allowed sets and
    /// normalizes the phone number. Fails on the first violation.
    ///
    /// # Errors
    ///
    /// Returns a field-tagged validation error when the group, status, or
    /// phone number is outside its allowed set.
    pub fn validate(self) -> AppResult<Member> {
        let grupa = Group::from_str(&self.grupa)?;
        let status = MemberStatus::from_str(&self.status)?;
        let mobitel = normalize_phone(&self.mobitel)?;

        Ok(Member {
            id: self.id,
            ime: self.ime,
            prezime: self.prezime,
            email: self.email,
            mobitel,
            grupa,
            status,
            termin: None,
        })
    }
}

/// Partial member update; only supplied fields are validated and applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberPatch {
    pub ime: Option<String>,
    pub prezime: Option<String>,
    pub email: Option<String>,
    pub mobitel: Option<String>,
    pub grupa: Option<String>,
    pub status: Option<String>,
}

/// A validated patch, ready to be applied to a stored member
#[derive(Debug, Clone, Default)]
pub struct ValidatedPatch {
    pub ime: Option<String>,
    pub prezime: Option<String>,
    pub email: Option<String>,
    pub mobitel: Option<String>,
    pub grupa: Option<Group>,
    pub status: Option<MemberStatus>,
}

impl MemberPatch {
    /// Validate only the supplied fields; absent fields stay untouched
    ///
    /// # Errors
    ///
    /// Returns a field-tagged validation error for the first supplied field
    /// that violates its rule.
    pub fn validate(self) -> AppResult<ValidatedPatch> {
        let grupa = self.grupa.as_deref().map(Group::from_str).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(MemberStatus::from_str)
            .transpose()?;
        let mobitel = self
            .mobitel
            .as_deref()
            .map(normalize_phone)
            .transpose()?;

        Ok(ValidatedPatch {
            ime: self.ime,
            prezime: self.prezime,
            email: self.email,
            mobitel,
            grupa,
            status,
        })
    }
}

impl ValidatedPatch {
    /// Check whether the patch changes anything at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ime.is_none()
            && self.prezime.is_none()
            && self.email.is_none()
            && self.mobitel.is_none()
            && self.grupa.is_none()
            && self.status.is_none()
    }

    /// Apply the patch to a member, overwriting only the supplied fields
    pub fn apply(self, member: &mut Member) {
        if let Some(ime) = self.ime {
            member.ime = ime;
        }
        if let Some(prezime) = self.prezime {
            member.prezime = prezime;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(mobitel) = self.mobitel {
            member.mobitel = mobitel;
        }
        if let Some(grupa) = self.grupa {
            member.grupa = grupa;
        }
        if let Some(status) = self.status {
            member.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewMember {
        NewMember {
            id: 1,
            ime: "Ana".into(),
            prezime: "Marić".into(),
            email: "ana.maric@test.com".into(),
            mobitel: "091/234-5678".into(),
            grupa: "početni".into(),
            status: "aktivan".into(),
        }
    }

    #[test]
    fn test_validate_normalizes_phone() {
        let member = candidate().validate().unwrap();
        assert_eq!(member.mobitel, "0912345678");
        assert_eq!(member.grupa, Group::Beginner);
        assert!(member.termin.is_none());
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(normalize_phone("1234567").is_err());
        assert!(normalize_phone("12345678").is_ok());
        assert!(normalize_phone("123456789012345").is_ok());
        assert!(normalize_phone("1234567890123456").is_err());
        // non-digits never count toward the bounds
        assert!(normalize_phone("+++123-45/67").is_err());
    }

    #[test]
    fn test_invalid_group_rejected() {
        let mut req = candidate();
        req.grupa = "rekreativni".into();
        let err = req.validate().unwrap_err();
        assert_eq!(err.details["field"], "grupa");
    }

    #[test]
    fn test_invalid_status_rejected() {
        let mut req = candidate();
        req.status = "pauziran".into();
        let err = req.validate().unwrap_err();
        assert_eq!(err.details["field"], "status");
    }

    #[test]
    fn test_patch_validates_only_supplied_fields() {
        // invalid group elsewhere must not matter when the field is absent
        let patch = MemberPatch {
            ime: Some("Maja".into()),
            ..MemberPatch::default()
        };
        let validated = patch.validate().unwrap();
        assert_eq!(validated.ime.as_deref(), Some("Maja"));
        assert!(validated.grupa.is_none());

        let bad = MemberPatch {
            grupa: Some("nepoznata".into()),
            ..MemberPatch::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_patch_apply_leaves_absent_fields() {
        let mut member = candidate().validate().unwrap();
        let patch = MemberPatch {
            status: Some("neaktivan".into()),
            mobitel: Some("098 111 2233".into()),
            ..MemberPatch::default()
        };
        patch.validate().unwrap().apply(&mut member);

        assert_eq!(member.status, MemberStatus::Inactive);
        assert_eq!(member.mobitel, "0981112233");
        assert_eq!(member.ime, "Ana");
        assert_eq!(member.email, "ana.maric@test.com");
    }
}

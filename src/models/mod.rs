// ABOUTME: Domain models for the Sparta membership system
// ABOUTME: Member, TrainingSession, and Membership definitions with pure validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

/// Member model, skill groups, and member validation
pub mod member;

/// Membership (fee) record model
pub mod membership;

/// Training session model and session validation
pub mod session;

pub use member::{Group, Member, MemberPatch, MemberStatus, NewMember, ValidatedPatch};
pub use membership::{Membership, NewMembership};
pub use session::{NewSession, TrainingSession, Weekday};

// ABOUTME: Core data models for family members, weight observations, and goals
// ABOUTME: Re-exports the model types shared by the engine, stores, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weight goals and goal types
pub mod goal;
/// Family members tracked by the application
pub mod member;
/// Weight observations recorded for members
pub mod observation;

pub use goal::{Goal, GoalType, NewGoal};
pub use member::{FamilyMember, Gender, MemberId, MemberUpdate, NewMember, Relation};
pub use observation::{
    chronological_cmp, latest_of, NewObservation, ObservationId, ObservationUpdate,
    WeightObservation,
};

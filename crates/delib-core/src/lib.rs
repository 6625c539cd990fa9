//! # delib-core
//!
//! Core types, vocabulary, and error types for deliberation provenance.
//!
//! This crate provides the foundational types shared across all delib crates:
//! - Entity structs for reconstructed history (steps, chains, vote records)
//! - Event and lifecycle enums, including the lifecycle state machine
//! - Predicate and class vocabulary expected in the fact store
//! - Lenient timestamp parsing and URI label derivation
//! - Cross-cutting error types
//! - Serde helpers for chrono durations

pub mod duration_serde;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod labels;
pub mod time;
pub mod vocab;

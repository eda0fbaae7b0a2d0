//! Core domain logic for rebrand
//!
//! This module contains pure business logic with no direct I/O.
//! All filesystem interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, Target, RunPlan, FileReport)
//! - `services/` - Replacement and per-target run orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

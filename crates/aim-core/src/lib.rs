//! # aim-core
//!
//! Core types, catalog data, and error types for AI-governance maturity
//! assessments.
//!
//! This crate provides the foundational types shared across all aim crates:
//! - Entity structs for pillars, questions, assessments, answers, and pillar scores
//! - Status enums with state machine transitions
//! - Risk categories and maturity levels
//! - ID prefix constants and the stable question ID scheme
//! - Cross-cutting error types
//! - Response contracts consumed by report and comparison collaborators
//! - The built-in question catalog

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;

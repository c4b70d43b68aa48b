//! Repository modules implementing storage operations for assessment entities.
//!
//! Each module adds methods to `AimService` via `impl AimService` blocks.

pub mod answer;
pub mod assessment;
pub mod compare;
pub mod dashboard;
pub mod pillar;
pub mod pillar_score;
pub mod question;
pub mod scoring;

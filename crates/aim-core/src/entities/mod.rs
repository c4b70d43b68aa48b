//! Entity structs for all assessment domain objects.
//!
//! Each entity maps to a table in the libSQL database (see `aim-db/migrations`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod answer;
mod assessment;
mod pillar;
mod pillar_score;
mod question;

pub use answer::{Answer, AnswerSubmission};
pub use assessment::Assessment;
pub use pillar::Pillar;
pub use pillar_score::{PillarScore, PillarScoreDetail};
pub use question::Question;

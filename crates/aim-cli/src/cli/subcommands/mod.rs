mod assessment;
mod pillar;

pub use assessment::AssessmentCommands;
pub use pillar::PillarCommands;

pub mod assessment;
pub mod dashboard;
pub mod dispatch;
pub mod init;
pub mod pillar;
pub mod shared;

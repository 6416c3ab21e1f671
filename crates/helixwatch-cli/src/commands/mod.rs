pub mod analyze;
pub mod contest;
pub mod monitor;

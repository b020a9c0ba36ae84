pub mod appointment;
pub mod patient;
pub mod stats;
pub mod user;

pub use appointment::*;
pub use patient::*;
pub use stats::*;
pub use user::*;

pub mod capacity;
pub mod model;
pub mod report;
pub mod session;

pub use capacity::{calculate, compute, validate, CapacityResult, ValidationError};
pub use model::{Member, Role, Sprint, SprintParameters};
pub use session::{Outcome, Session};

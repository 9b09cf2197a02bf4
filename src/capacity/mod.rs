pub mod calculator;
mod error;
mod model;

pub use calculator::{calculate, compute, validate, HOURS_PER_DAY};
pub use error::ValidationError;
pub use model::{CapacityResult, CapacityTotals, MemberCapacity, RoleTotals};

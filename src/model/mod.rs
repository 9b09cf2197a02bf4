mod member;
mod number;
mod result;
mod sprint;

pub use member::{Member, Role, UnknownRole};
pub use result::Result;
pub use sprint::{Sprint, SprintParameters};

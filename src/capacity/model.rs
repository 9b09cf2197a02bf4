use crate::capacity::HOURS_PER_DAY;
use crate::model::{Member, Role, SprintParameters};
use indexmap::IndexMap;
use serde::Serialize;

pub type RoleTotals = IndexMap<Role, CapacityTotals>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityResult {
    pub parameters: SprintParameters,
    pub overall_effective_days: f64,
    pub overall_total_hours: f64,
    pub overall_total_capacity_days: f64,
    pub members: Vec<MemberCapacity>,
    /// Always holds every [`Role`], in [`Role::ALL`] order.
    pub role_totals: RoleTotals,
}

impl CapacityResult {
    pub fn totals(&self, role: Role) -> CapacityTotals {
        self.role_totals.get(&role).copied().unwrap_or_default()
    }

    pub fn dev_totals(&self) -> CapacityTotals {
        self.totals(Role::Dev)
    }

    pub fn qa_totals(&self) -> CapacityTotals {
        self.totals(Role::Qa)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberCapacity {
    pub name: String,
    pub role: Role,
    pub leaves: f64,
    pub effective_days: f64,
    pub hours: f64,
    pub days: f64,
}

impl MemberCapacity {
    pub fn from_member(member: &Member, parameters: &SprintParameters) -> Self {
        let leaves = member.leave_days();
        let effective_days =
            (parameters.working_days - parameters.holidays - leaves).max(0.0);
        let hours = effective_days * parameters.productive_hours_per_day;
        Self {
            name: member.name.clone(),
            role: member.role,
            leaves,
            effective_days,
            hours,
            days: hours / HOURS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CapacityTotals {
    pub hours: f64,
    pub days: f64,
}

impl CapacityTotals {
    pub fn new(hours: f64, days: f64) -> Self {
        Self { hours, days }
    }

    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a MemberCapacity>) -> Self {
        members.into_iter().fold(Self::default(), |mut acc, m| {
            acc.hours += m.hours;
            acc.days += m.days;
            acc
        })
    }

    /// Sums members per role. Every role gets an entry, even without members.
    pub fn by_role(members: &[MemberCapacity]) -> RoleTotals {
        Role::ALL
            .iter()
            .map(|role| {
                let totals = Self::from_members(members.iter().filter(|m| m.role == *role));
                (*role, totals)
            })
            .collect()
    }
}

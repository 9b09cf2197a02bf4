use crate::capacity::{CapacityResult, CapacityTotals, MemberCapacity, ValidationError};
use crate::model::{Member, SprintParameters};

/// Fixed conversion from hours to capacity days, independent of the
/// productive hours per day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Checks the top-level parameters in order and stops at the first failure.
pub fn validate(parameters: &SprintParameters) -> Result<(), ValidationError> {
    if !is_positive(parameters.total_persons) {
        return Err(ValidationError::InvalidTotalPersons);
    }
    if !is_positive(parameters.productive_hours_per_day) {
        return Err(ValidationError::InvalidProductiveHours);
    }
    if !is_non_negative(parameters.working_days) {
        return Err(ValidationError::InvalidWorkingDays);
    }
    if !is_non_negative(parameters.holidays) {
        return Err(ValidationError::InvalidHolidays);
    }
    Ok(())
}

/// Derives the capacity of a validated sprint. Members with a blank name are
/// left out; the roster order of the rest is kept.
pub fn compute(parameters: &SprintParameters, members: &[Member]) -> CapacityResult {
    let overall_effective_days = (parameters.working_days - parameters.holidays).max(0.0);
    let overall_total_hours =
        parameters.total_persons * parameters.productive_hours_per_day * overall_effective_days;

    let mut skipped = 0;
    let mut included = Vec::with_capacity(members.len());
    for member in members {
        if !member.is_named() {
            skipped += 1;
            continue;
        }
        let capacity = MemberCapacity::from_member(member, parameters);
        if let Some(leaves) = member.leaves {
            if capacity.leaves != leaves {
                tracing::warn!(
                    "Leaves `{}` of member `{}` is not a valid number of days, using 0",
                    leaves,
                    member.name
                );
            }
        }
        included.push(capacity);
    }
    if skipped > 0 {
        tracing::debug!("Skipping {} member(s) without a name", skipped);
    }
    let members = included;
    let role_totals = CapacityTotals::by_role(&members);

    tracing::debug!(
        "Computed capacity: {} effective days, {} hours, {} member(s)",
        overall_effective_days,
        overall_total_hours,
        members.len()
    );

    CapacityResult {
        parameters: *parameters,
        overall_effective_days,
        overall_total_hours,
        overall_total_capacity_days: overall_total_hours / HOURS_PER_DAY,
        members,
        role_totals,
    }
}

/// Validates, then computes.
pub fn calculate(
    parameters: &SprintParameters,
    members: &[Member],
) -> Result<CapacityResult, ValidationError> {
    validate(parameters)?;
    Ok(compute(parameters, members))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

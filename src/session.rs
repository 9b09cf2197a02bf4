//! The calculator's working state.
//!
//! A [`Session`] is never edited in place: every action returns the session
//! that replaces it.

use crate::capacity::{self, CapacityResult, ValidationError};
use crate::model::{Member, Sprint, SprintParameters};
use crate::report::CsvExport;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Calculated(CapacityResult),
    Rejected(ValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    sprint: Sprint,
    roster: Vec<Member>,
    outcome: Option<Outcome>,
}

impl Session {
    /// An empty roster is replaced by a single blank member.
    pub fn new(sprint: Sprint, roster: Vec<Member>) -> Self {
        let roster = if roster.is_empty() {
            vec![Member::blank()]
        } else {
            roster
        };
        Self {
            sprint,
            roster,
            outcome: None,
        }
    }

    pub fn sprint(&self) -> &Sprint {
        &self.sprint
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn result(&self) -> Option<&CapacityResult> {
        match &self.outcome {
            Some(Outcome::Calculated(result)) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match &self.outcome {
            Some(Outcome::Rejected(err)) => Some(*err),
            _ => None,
        }
    }
}

// Actions
impl Session {
    pub fn with_sprint(&self, sprint: Sprint) -> Self {
        Self {
            sprint,
            ..self.clone()
        }
    }

    pub fn add_member(&self) -> Self {
        let mut roster = self.roster.clone();
        roster.push(Member::blank());
        Self {
            roster,
            ..self.clone()
        }
    }

    /// Out of range indexes leave the session unchanged.
    pub fn edit_member(&self, index: usize, member: Member) -> Self {
        let mut roster = self.roster.clone();
        if let Some(slot) = roster.get_mut(index) {
            *slot = member;
        }
        Self {
            roster,
            ..self.clone()
        }
    }

    /// The last remaining member cannot be removed.
    pub fn remove_member(&self, index: usize) -> Self {
        if self.roster.len() <= 1 || index >= self.roster.len() {
            return self.clone();
        }
        let mut roster = self.roster.clone();
        roster.remove(index);
        Self {
            roster,
            ..self.clone()
        }
    }

    /// Drops any previous outcome and replaces it with a fresh one.
    pub fn calculate(&self) -> Self {
        let outcome = match capacity::calculate(&self.sprint.parameters, &self.roster) {
            Ok(result) => Outcome::Calculated(result),
            Err(err) => {
                tracing::debug!("Calculation rejected: {}", err);
                Outcome::Rejected(err)
            }
        };
        Self {
            outcome: Some(outcome),
            ..self.clone()
        }
    }

    /// Clears parameters, roster and outcome. Sprint name, team and dates
    /// are kept.
    pub fn reset(&self) -> Self {
        let sprint = Sprint {
            parameters: SprintParameters::blank(),
            ..self.sprint.clone()
        };
        Self::new(sprint, vec![])
    }

    /// Available only once a result has been calculated.
    pub fn export(&self) -> Option<CsvExport> {
        self.result()
            .map(|result| CsvExport::new(&self.sprint, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn session() -> Session {
        let sprint = Sprint::new("Sprint 25", "Phoenix", SprintParameters::new(6.0, 6.5, 10.0, 1.0));
        Session::new(sprint, vec![Member::new("John", Role::Dev, Some(2.0))])
    }

    #[test]
    fn empty_roster_gets_blank_member() {
        let session = Session::new(Sprint::blank(), vec![]);
        assert_eq!(session.roster(), &[Member::blank()]);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn adds_edits_and_removes_members() {
        let session = session().add_member();
        assert_eq!(session.roster().len(), 2);
        assert_eq!(session.roster()[1], Member::blank());

        let session = session.edit_member(1, Member::new("Jane", Role::Qa, Some(1.0)));
        assert_eq!(session.roster()[1].name, "Jane");

        let unchanged = session.edit_member(5, Member::blank());
        assert_eq!(unchanged, session);

        let session = session.remove_member(0);
        assert_eq!(session.roster(), &[Member::new("Jane", Role::Qa, Some(1.0))]);
    }

    #[test]
    fn keeps_last_member() {
        let session = session().remove_member(0);
        assert_eq!(session.roster().len(), 1);
    }

    #[test]
    fn actions_do_not_touch_previous_session() {
        let before = session();
        let after = before.add_member().calculate();

        assert_eq!(before.roster().len(), 1);
        assert!(before.result().is_none());
        assert!(after.result().is_some());
    }

    #[test]
    fn calculate_produces_result() {
        let session = session().calculate();

        let result = session.result().unwrap();
        assert_eq!(result.overall_total_hours, 351.0);
        assert_eq!(result.members[0].hours, 45.5);
        assert!(session.error().is_none());
    }

    #[test]
    fn failed_calculation_clears_previous_result() {
        let session = session().calculate();
        assert!(session.result().is_some());

        let mut sprint = session.sprint().clone();
        sprint.parameters.total_persons = 0.0;
        let session = session.with_sprint(sprint).calculate();

        assert!(session.result().is_none());
        assert_eq!(session.error(), Some(ValidationError::InvalidTotalPersons));
        assert!(session.export().is_none());
    }

    #[test]
    fn reset_keeps_sprint_identity() {
        let session = session().add_member().calculate().reset();

        assert_eq!(session.sprint().name, "Sprint 25");
        assert_eq!(session.sprint().team, "Phoenix");
        assert!(session.sprint().parameters.total_persons.is_nan());
        assert_eq!(session.roster(), &[Member::blank()]);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn exports_after_calculation() {
        assert!(session().export().is_none());

        let export = session().calculate().export().unwrap();
        assert_eq!(export.file_name, "sprint_25_capacity.csv");
        assert!(export.content.contains("John,DEV,2,7,45.5,5.69"));
    }
}

use crate::capacity::CapacityResult;
use crate::model::{Role, Sprint};
use crate::report::csv::safe_name;
use crate::report::{full_precision, two_decimals};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::{Path, PathBuf};

pub trait MarkdownReport {
    fn report_markdown(&self, sprint: &Sprint) -> crate::model::Result<String>;
    fn report_create(&self, sprint: &Sprint, dir: &Path) -> crate::model::Result<PathBuf>;
}

impl MarkdownReport for CapacityResult {
    fn report_markdown(&self, sprint: &Sprint) -> crate::model::Result<String> {
        let mut doc = Markdown::new();

        doc.header1("Sprint capacity");
        doc.add_sprint(sprint);
        doc.add_overall(self)?;
        doc.add_roles(self)?;
        if !self.members.is_empty() {
            doc.add_members(self)?;
        }

        Ok(doc.render())
    }

    fn report_create(&self, sprint: &Sprint, dir: &Path) -> crate::model::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(report_file_name(sprint));
        fs::write(&path, self.report_markdown(sprint)?)?;
        tracing::info!("Wrote capacity report to `{}`", path.display());
        Ok(path)
    }
}

/// Named after the team, or the sprint when no team is set.
pub fn report_file_name(sprint: &Sprint) -> String {
    let name = if sprint.team.trim().is_empty() {
        &sprint.name
    } else {
        &sprint.team
    };
    format!("{}.md", safe_name(name.trim(), "sprint"))
}

trait MarkdownExt {
    fn add_sprint(&mut self, sprint: &Sprint);
    fn add_overall(&mut self, result: &CapacityResult) -> crate::model::Result<()>;
    fn add_roles(&mut self, result: &CapacityResult) -> crate::model::Result<()>;
    fn add_members(&mut self, result: &CapacityResult) -> crate::model::Result<()>;
    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> crate::model::Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_sprint(&mut self, sprint: &Sprint) {
        let name = if sprint.name.is_empty() {
            "Sprint".to_string()
        } else {
            sprint.name.clone()
        };
        match (sprint.since, sprint.until) {
            (Some(since), Some(until)) => self.header2(format!(
                "{} ({} - {})",
                name,
                since.format("%d.%m.%Y"),
                until.format("%d.%m.%Y"),
            )),
            _ => self.header2(name),
        };
        if !sprint.team.is_empty() {
            self.paragraph(format!("Team: **{}**", sprint.team));
        }
    }

    fn add_overall(&mut self, result: &CapacityResult) -> crate::model::Result<()> {
        self.paragraph("**Overall capacity**".to_string());
        let row = vec![
            full_precision(result.overall_effective_days),
            full_precision(result.overall_total_hours),
            two_decimals(result.overall_total_capacity_days),
        ];
        self.add_table(
            &["Effective Days (Overall)", "Total Capacity (hrs)", "Total Capacity (days)"],
            vec![row],
        )
    }

    fn add_roles(&mut self, result: &CapacityResult) -> crate::model::Result<()> {
        self.paragraph("**Team capacity by role**".to_string());
        let rows = Role::ALL
            .iter()
            .map(|role| (role, result.totals(*role)))
            .map(|(role, totals)| {
                vec![
                    format!("*{role}*"),
                    full_precision(totals.hours),
                    two_decimals(totals.days),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(&["Role", "Capacity (hrs)", "Capacity (days)"], rows)
    }

    fn add_members(&mut self, result: &CapacityResult) -> crate::model::Result<()> {
        self.paragraph("**Individual capacity**".to_string());
        let rows = result
            .members
            .iter()
            .map(|member| {
                vec![
                    format!("**{}**", member.name),
                    member.role.to_string(),
                    full_precision(member.leaves),
                    full_precision(member.effective_days),
                    full_precision(member.hours),
                    two_decimals(member.days),
                ]
            })
            .collect::<Vec<_>>();
        self.add_table(
            &["Member", "Role", "Leaves", "Effective Days", "Hours", "Days"],
            rows,
        )
    }

    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> crate::model::Result<()> {
        let header = headings
            .iter()
            .enumerate()
            .map(|(index, heading)| {
                let alignment = if index == 0 {
                    None
                } else {
                    Some(HeadingAlignment::Center)
                };
                Heading::new(heading.to_string(), alignment)
            })
            .collect::<Vec<_>>();

        let mut md_table = MarkdownTable::new(rows);
        md_table.with_headings(header);

        let table = md_table
            .as_markdown()
            .map_err(|err| format!("Failed to render table: {:?}", err))?;
        self.paragraph(table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::compute;
    use crate::model::{Member, SprintParameters};
    use chrono::DateTime;

    fn sprint() -> Sprint {
        Sprint::new("Sprint 25", "Phoenix", SprintParameters::new(6.0, 6.5, 10.0, 1.0)).with_dates(
            DateTime::parse_from_rfc3339("2024-03-04T00:00:00+00:00").ok(),
            DateTime::parse_from_rfc3339("2024-03-15T00:00:00+00:00").ok(),
        )
    }

    #[test]
    fn renders_all_sections() {
        let sprint = sprint();
        let members = [
            Member::new("John", Role::Dev, Some(2.0)),
            Member::new("Jane", Role::Qa, None),
        ];
        let result = compute(&sprint.parameters, &members);

        let report = result.report_markdown(&sprint).unwrap();

        assert!(report.contains("Sprint capacity"));
        assert!(report.contains("Sprint 25 (04.03.2024 - 15.03.2024)"));
        assert!(report.contains("Team: **Phoenix**"));
        assert!(report.contains("43.88"));
        assert!(report.contains("*DEV*"));
        assert!(report.contains("5.69"));
        assert!(report.contains("Individual capacity"));
        assert!(report.contains("**John**"));
        assert!(report.contains("**Jane**"));
    }

    #[test]
    fn omits_members_when_none_included() {
        let sprint = Sprint::new("", "", SprintParameters::new(1.0, 8.0, 5.0, 0.0));
        let result = compute(&sprint.parameters, &[Member::blank()]);

        let report = result.report_markdown(&sprint).unwrap();

        assert!(report.contains("Team capacity by role"));
        assert!(!report.contains("Individual capacity"));
        assert!(!report.contains("Team:"));
    }

    #[test]
    fn names_report_after_team() {
        assert_eq!(report_file_name(&sprint()), "phoenix.md");
        let unnamed = Sprint::new("Sprint 7", " ", SprintParameters::blank());
        assert_eq!(report_file_name(&unnamed), "sprint_7.md");
        assert_eq!(report_file_name(&Sprint::blank()), "sprint.md");
        let slashed = Sprint::new("", "QA/Ops", SprintParameters::blank());
        assert_eq!(report_file_name(&slashed), "qa_ops.md");
    }

    #[test]
    fn writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let sprint = sprint();
        let result = compute(&sprint.parameters, &[]);

        let path = result.report_create(&sprint, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("phoenix.md"));
        assert!(fs::read_to_string(path).unwrap().contains("Sprint capacity"));
    }
}

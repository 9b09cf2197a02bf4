use crate::capacity::CapacityResult;
use crate::model::{Role, Sprint};
use crate::report::{full_precision, two_decimals};
use itertools::Itertools;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const SUMMARY_HEADER: [&str; 9] = [
    "Sprint Name",
    "Team Name",
    "Total Person",
    "Productive Hrs",
    "Working Days",
    "Holidays",
    "Effective Days (Overall)",
    "Total Capacity (Hours)",
    "Total Capacity (Days)",
];
const ROLE_HEADER: [&str; 3] = ["Role", "Total Hours", "Total Days"];
const MEMBER_HEADER: [&str; 6] = [
    "Name",
    "Role",
    "Leaves",
    "Effective Days",
    "Capacity (Hours)",
    "Capacity (Days)",
];

pub trait CsvReport {
    fn to_csv(&self, sprint: &Sprint) -> String;
}

impl CsvReport for CapacityResult {
    fn to_csv(&self, sprint: &Sprint) -> String {
        let parameters = &self.parameters;
        let mut lines = vec![];

        lines.push(row(SUMMARY_HEADER));
        lines.push(row([
            sprint.name.clone(),
            sprint.team.clone(),
            full_precision(parameters.total_persons),
            full_precision(parameters.productive_hours_per_day),
            full_precision(parameters.working_days),
            full_precision(parameters.holidays),
            full_precision(self.overall_effective_days),
            full_precision(self.overall_total_hours),
            two_decimals(self.overall_total_capacity_days),
        ]));
        lines.push(String::new());

        lines.push("Role Totals".to_string());
        lines.push(row(ROLE_HEADER));
        for role in Role::ALL {
            let totals = self.totals(role);
            lines.push(row([
                role.to_string(),
                full_precision(totals.hours),
                two_decimals(totals.days),
            ]));
        }
        lines.push(String::new());

        lines.push("Member Details".to_string());
        lines.push(row(MEMBER_HEADER));
        for member in &self.members {
            lines.push(row([
                member.name.clone(),
                member.role.to_string(),
                full_precision(member.leaves),
                full_precision(member.effective_days),
                full_precision(member.hours),
                two_decimals(member.days),
            ]));
        }

        lines.join("\n") + "\n"
    }
}

/// A rendered CSV export and the file name it is saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

impl CsvExport {
    pub fn new(sprint: &Sprint, result: &CapacityResult) -> Self {
        Self {
            file_name: export_file_name(&sprint.name),
            content: result.to_csv(sprint),
        }
    }

    pub fn write_to(&self, dir: &Path) -> crate::model::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        tracing::info!("Exported capacity to `{}`", path.display());
        Ok(path)
    }
}

/// `Sprint 25` → `sprint_25_capacity.csv`; an empty name falls back to
/// `sprint`.
pub fn export_file_name(sprint_name: &str) -> String {
    format!("{}_capacity.csv", safe_name(sprint_name, "sprint"))
}

const UNSAFE_FILE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Lower-cases `name`, replaces every whitespace run with `_` and every
/// character not allowed in a file name with `_`. The result never contains a
/// path separator, so it always names a file inside the export directory.
pub(crate) fn safe_name(name: &str, fallback: &str) -> String {
    let name = if name.is_empty() { fallback } else { name };
    let mut safe = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                safe.push('_');
            }
            in_whitespace = true;
        } else if c.is_control() || UNSAFE_FILE_CHARS.contains(&c) {
            safe.push('_');
            in_whitespace = false;
        } else {
            safe.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    safe
}

fn row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| escape(field.as_ref()).into_owned())
        .join(",")
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

use crate::model::number::number_from;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::{from_str, Value};
use std::fs;

/// The four top-level inputs of a capacity calculation.
///
/// Values read from config that are missing or not numeric are kept as `NaN`
/// so that validation reports them against the right field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintParameters {
    pub total_persons: f64,
    pub productive_hours_per_day: f64,
    pub working_days: f64,
    pub holidays: f64,
}

impl SprintParameters {
    pub fn new(
        total_persons: f64,
        productive_hours_per_day: f64,
        working_days: f64,
        holidays: f64,
    ) -> Self {
        Self {
            total_persons,
            productive_hours_per_day,
            working_days,
            holidays,
        }
    }

    pub fn blank() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprint {
    pub name: String,
    pub team: String,
    pub since: Option<DateTime<FixedOffset>>,
    pub until: Option<DateTime<FixedOffset>>,
    pub parameters: SprintParameters,
}

// Create
impl Sprint {
    pub fn from_config(path: &str) -> crate::model::Result<Self> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(name: impl ToString, team: impl ToString, parameters: SprintParameters) -> Self {
        Self {
            name: name.to_string(),
            team: team.to_string(),
            since: None,
            until: None,
            parameters,
        }
    }

    pub fn blank() -> Self {
        Self::new("", "", SprintParameters::blank())
    }

    pub fn with_dates(
        mut self,
        since: Option<DateTime<FixedOffset>>,
        until: Option<DateTime<FixedOffset>>,
    ) -> Self {
        self.since = since;
        self.until = until;
        self
    }
}

// Parser
impl Sprint {
    fn parse(json_str: &str) -> crate::model::Result<Self> {
        let details: Value = from_str(json_str)?;
        if !details.is_object() {
            return Err("Sprint config must be a JSON object".into());
        }
        let name = optional_str(&details, "name")?;
        let team = optional_str(&details, "team")?;
        let since = optional_datetime(&details, "since")?;
        let until = optional_datetime(&details, "until")?;
        let parameters = SprintParameters::new(
            number_from(&details["totalPersons"]).unwrap_or(f64::NAN),
            number_from(&details["productiveHours"]).unwrap_or(f64::NAN),
            number_from(&details["workingDays"]).unwrap_or(f64::NAN),
            number_from(&details["holidays"]).unwrap_or(f64::NAN),
        );
        Ok(Self::new(name, team, parameters).with_dates(since, until))
    }
}

fn optional_str(details: &Value, field: &str) -> crate::model::Result<String> {
    match &details[field] {
        Value::Null => Ok(String::new()),
        Value::String(value) => Ok(value.clone()),
        _ => Err(format!("Field '{field}' must be a string").into()),
    }
}

fn optional_datetime(
    details: &Value,
    field: &str,
) -> crate::model::Result<Option<DateTime<FixedOffset>>> {
    let value = match &details[field] {
        Value::Null => return Ok(None),
        Value::String(value) => value,
        _ => return Err(format!("Field '{field}' must be a string").into()),
    };
    let Ok(datetime) = DateTime::parse_from_rfc3339(value) else {
        return Err(format!("Not a valid date time: {}", value).into());
    };
    Ok(Some(datetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let sprint = Sprint::parse(
            r#"{
                "name": "Sprint 25",
                "team": "Phoenix",
                "since": "2024-03-04T00:00:00+00:00",
                "until": "2024-03-15T23:59:59+00:00",
                "totalPersons": 6,
                "productiveHours": "6.5",
                "workingDays": 10,
                "holidays": 1
            }"#,
        )
        .unwrap();

        assert_eq!(sprint.name, "Sprint 25");
        assert_eq!(sprint.team, "Phoenix");
        assert_eq!(sprint.parameters, SprintParameters::new(6.0, 6.5, 10.0, 1.0));
        assert_eq!(sprint.since.unwrap().format("%d.%m.%Y").to_string(), "04.03.2024");
        assert_eq!(sprint.until.unwrap().format("%d.%m.%Y").to_string(), "15.03.2024");
    }

    #[test]
    fn missing_numbers_become_nan() {
        let sprint = Sprint::parse(r#"{ "totalPersons": "", "workingDays": "ten" }"#).unwrap();

        assert!(sprint.name.is_empty());
        assert!(sprint.since.is_none());
        assert!(sprint.parameters.total_persons.is_nan());
        assert!(sprint.parameters.productive_hours_per_day.is_nan());
        assert!(sprint.parameters.working_days.is_nan());
        assert!(sprint.parameters.holidays.is_nan());
    }

    #[test]
    fn rejects_bad_dates() {
        let err = Sprint::parse(r#"{ "since": "yesterday" }"#).unwrap_err();
        assert_eq!(err.to_string(), "Not a valid date time: yesterday");
    }

    #[test]
    fn rejects_non_object() {
        assert!(Sprint::parse("[1, 2]").is_err());
        assert!(Sprint::parse(r#"{ "name": 25 }"#).is_err());
    }
}

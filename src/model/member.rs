use crate::model::number::number_from;
use serde::Serialize;
use serde_json::{from_str, Value};
use std::fmt;
use std::fs;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize)]
pub enum Role {
    #[serde(rename = "DEV")]
    Dev,
    #[serde(rename = "QA")]
    Qa,
}

impl Role {
    /// Every role, in report order.
    pub const ALL: [Role; 2] = [Role::Dev, Role::Qa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Dev => "DEV",
            Role::Qa => "QA",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role '{0}' (expected DEV or QA)")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEV" => Ok(Role::Dev),
            "QA" => Ok(Role::Qa),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub name: String,
    pub role: Role,
    /// Leave days as entered; see [`Member::leave_days`].
    pub leaves: Option<f64>,
}

// Create
impl Member {
    pub fn from_config(path: &str) -> crate::model::Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(name: impl ToString, role: Role, leaves: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            role,
            leaves,
        }
    }

    /// An empty roster row, as added by the form.
    pub fn blank() -> Self {
        Self::new("", Role::Dev, None)
    }
}

impl Member {
    /// Blank names keep a member in the roster but out of the calculation.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Leave days used in the calculation. Absent, `NaN` and negative entries
    /// count as zero; an infinite entry is kept and leaves no capacity.
    pub fn leave_days(&self) -> f64 {
        match self.leaves {
            Some(leaves) if leaves >= 0.0 => leaves,
            _ => 0.0,
        }
    }
}

// Parser
impl Member {
    fn parse(json_str: &str) -> crate::model::Result<Vec<Self>> {
        let elements: Vec<Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for details in elements {
            let name = match &details["name"] {
                Value::Null => "",
                Value::String(name) => name.as_str(),
                _ => return Err("Field 'name' must be a string".into()),
            };
            let role = match &details["role"] {
                Value::Null => Role::Dev,
                Value::String(role) => match role.parse::<Role>() {
                    Ok(role) => role,
                    Err(err) => return Err(format!("{err} for member '{name}'").into()),
                },
                _ => return Err(format!("Field 'role' must be a string for member '{name}'").into()),
            };
            let leaves = number_from(&details["leaves"]);
            let new = Self::new(name, role, leaves);
            result.push(new);
        }
        Ok(result)
    }
}

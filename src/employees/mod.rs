//! Employee records and the helpers that produce them
//!
//! The store treats every field except `id` as opaque display data. Field-level
//! rules (required names, phone layout, date format) live in the form layer.

pub mod form;
pub mod phone;
pub mod seed;

pub use form::{EmployeeDraft, FormError};
pub use seed::seed_employees;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque record identifier assigned by the store
///
/// Always serialized as a string; numeric ids in persisted data are read as
/// their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Department an employee belongs to
///
/// Departments outside the known set load as `Other` and are written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    #[default]
    Analytics,
    Tech,
    Other(String),
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(&self) -> &str {
        match self {
            Department::Analytics => "Analytics",
            Department::Tech => "Tech",
            Department::Other(name) => name,
        }
    }
}

impl From<String> for Department {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Analytics" => Department::Analytics,
            "Tech" => Department::Tech,
            _ => Department::Other(name),
        }
    }
}

impl From<Department> for String {
    fn from(department: Department) -> Self {
        match department {
            Department::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the known departments parse; `Other` exists for stored data
impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown department: {}", s))
    }
}

/// Seniority of an employee
///
/// The store keeps titles outside the standard ladder (e.g. "Principal") verbatim;
/// only the form offers the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    #[default]
    Junior,
    Medior,
    Senior,
    Other(String),
}

impl Position {
    pub const STANDARD: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
            Position::Other(title) => title,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Position::Other(_))
    }
}

impl From<String> for Position {
    fn from(title: String) -> Self {
        match title.as_str() {
            "Junior" => Position::Junior,
            "Medior" => Position::Medior,
            "Senior" => Position::Senior,
            _ => Position::Other(title),
        }
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(title) => title,
            standard => standard.as_str().to_string(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Position cannot be empty".to_string());
        }
        Ok(Position::STANDARD
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Position::Other(trimmed.to_string())))
    }
}

/// One employee as held by the store
///
/// Missing text fields load as empty strings so sparse persisted records never
/// break search; `id` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "dob")]
    pub date_of_birth: String,
    #[serde(default, alias = "doe")]
    pub date_of_employment: String,
    #[serde(default)]
    pub department: Department,
    #[serde(default)]
    pub position: Position,
}

impl Employee {
    /// Attach an id to a payload
    pub fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            date_of_birth: new.date_of_birth,
            date_of_employment: new.date_of_employment,
            department: new.department,
            position: new.position,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Shallow merge: fields present in `patch` overwrite, the rest are kept
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            date_of_employment,
            department,
            position,
        } = patch;

        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = phone {
            self.phone = value;
        }
        if let Some(value) = date_of_birth {
            self.date_of_birth = value;
        }
        if let Some(value) = date_of_employment {
            self.date_of_employment = value;
        }
        if let Some(value) = department {
            self.department = value;
        }
        if let Some(value) = position {
            self.position = value;
        }
    }
}

/// Payload for an add: every record field except the store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub date_of_employment: String,
    pub department: Department,
    pub position: Position,
}

impl From<Employee> for NewEmployee {
    /// Drops the caller's id; the store always assigns a fresh one
    fn from(employee: Employee) -> Self {
        Self {
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            date_of_birth: employee.date_of_birth,
            date_of_employment: employee.date_of_employment,
            department: employee.department,
            position: employee.position,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_employment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl EmployeePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name<S: Into<String>>(mut self, value: S) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name<S: Into<String>>(mut self, value: S) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, value: S) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_phone<S: Into<String>>(mut self, value: S) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn with_department(mut self, value: Department) -> Self {
        self.department = Some(value);
        self
    }

    pub fn with_position(mut self, value: Position) -> Self {
        self.position = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

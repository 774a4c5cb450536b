//! Add/edit form state for a single employee
//!
//! The draft holds the phone as country code plus local digits; the stored
//! record gets the formatted string produced by [`phone::format_phone`].

use crate::employees::phone::{self, DEFAULT_COUNTRY_CODE, LOCAL_NUMBER_LEN};
use crate::employees::{Department, Employee, EmployeeId, EmployeePatch, NewEmployee, Position};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a draft cannot be saved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields (missing {0})")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("Invalid {field}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },

    #[error("Draft is not editing an existing employee")]
    NotEditing,
}

/// Editable copy of an employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: String,
    phone_number: String,
    pub date_of_birth: String,
    pub date_of_employment: String,
    pub department: Department,
    pub position: Position,
    editing: Option<EmployeeId>,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            date_of_birth: String::new(),
            date_of_employment: String::new(),
            department: Department::Analytics,
            position: Position::Junior,
            editing: None,
        }
    }
}

impl EmployeeDraft {
    /// Blank draft for adding a new employee
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing record, in edit mode
    pub fn from_employee(employee: &Employee) -> Self {
        let parts = phone::parse_phone(&employee.phone);
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            country_code: parts.country_code,
            phone_number: parts.number,
            date_of_birth: employee.date_of_birth.clone(),
            date_of_employment: employee.date_of_employment.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            editing: Some(employee.id.clone()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&EmployeeId> {
        self.editing.as_ref()
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Accept phone input, keeping digits only
    ///
    /// Input with more than 10 digits is ignored and the previous value kept.
    pub fn set_phone_number(&mut self, input: &str) -> bool {
        let digits = phone::digits_only(input);
        if digits.len() > LOCAL_NUMBER_LEN {
            return false;
        }
        self.phone_number = digits;
        true
    }

    pub fn formatted_phone(&self) -> String {
        phone::format_phone(&self.country_code, &self.phone_number)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        check_required("email", &self.email)?;
        check_required("first name", &self.first_name)?;
        check_required("last name", &self.last_name)?;

        if self.phone_number.len() != LOCAL_NUMBER_LEN {
            return Err(FormError::InvalidPhone);
        }

        check_email(&self.email)?;
        check_date("date of birth", &self.date_of_birth)?;
        check_date("date of employment", &self.date_of_employment)?;
        Ok(())
    }

    /// Validated payload for an add
    pub fn into_new_employee(self) -> Result<NewEmployee, FormError> {
        self.validate()?;
        let phone = self.formatted_phone();
        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone,
            date_of_birth: self.date_of_birth,
            date_of_employment: self.date_of_employment,
            department: self.department,
            position: self.position,
        })
    }

    /// Validated full-field patch for the record being edited
    pub fn into_patch(self) -> Result<(EmployeeId, EmployeePatch), FormError> {
        let id = self.editing.clone().ok_or(FormError::NotEditing)?;
        let new = self.into_new_employee()?;
        let patch = EmployeePatch {
            first_name: Some(new.first_name),
            last_name: Some(new.last_name),
            email: Some(new.email),
            phone: Some(new.phone),
            date_of_birth: Some(new.date_of_birth),
            date_of_employment: Some(new.date_of_employment),
            department: Some(new.department),
            position: Some(new.position),
        };
        Ok((id, patch))
    }
}

// Field rules usable one at a time, for edits that touch only some fields

pub fn check_required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

pub fn check_email(value: &str) -> Result<(), FormError> {
    check_required("email", value)?;
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(FormError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

/// Required, and an ISO `YYYY-MM-DD` calendar date
pub fn check_date(field: &'static str, value: &str) -> Result<(), FormError> {
    check_required(field, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Stored phone string for a country code and a complete local number
pub fn compose_phone(country_code: &str, number: &str) -> Result<String, FormError> {
    let digits = phone::digits_only(number);
    if digits.len() != LOCAL_NUMBER_LEN {
        return Err(FormError::InvalidPhone);
    }
    Ok(phone::format_phone(country_code, &digits))
}

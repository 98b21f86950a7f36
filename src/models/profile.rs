use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    services::calendar,
};

pub const BIRTHDAY_REQUIRED: &str = "Birthday information is required for recommendations";

/// A user profile whose birth date has been checked at the HTTP boundary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    /// Day of month (1-31)
    pub birth_day: u32,
    /// Month (1-12)
    pub birth_month: u32,
    pub favorite_cake: String,
    /// Comma-separated list as typed by the user; `None` when not supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_snacks: Option<String>,
    /// Comma-separated list as typed by the user
    pub hobbies: String,
}

/// Profile as received on the wire, before validation
///
/// Every field is optional so that presence checks can produce the
/// service's own error messages instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub birth_day: Option<u32>,
    #[serde(default)]
    pub birth_month: Option<u32>,
    #[serde(default)]
    pub favorite_cake: Option<String>,
    #[serde(default)]
    pub favorite_snacks: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
}

impl ProfilePayload {
    /// Checks the birth date and converts into a [`UserProfile`]
    ///
    /// A zero day or month counts as missing. Dates that do not exist in any
    /// year (Feb 30, month 13) are rejected; Feb 29 is accepted.
    pub fn validate(self) -> AppResult<UserProfile> {
        let (birth_day, birth_month) = match (self.birth_day, self.birth_month) {
            (Some(day), Some(month)) if day != 0 && month != 0 => (day, month),
            _ => return Err(AppError::InvalidInput(BIRTHDAY_REQUIRED.to_string())),
        };

        if !calendar::is_valid_birth_date(birth_month, birth_day) {
            return Err(AppError::InvalidInput(format!(
                "Invalid birth date: {}/{}",
                birth_month, birth_day
            )));
        }

        Ok(UserProfile {
            id: self.id.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            birth_day,
            birth_month,
            favorite_cake: self.favorite_cake.unwrap_or_default(),
            favorite_snacks: self.favorite_snacks,
            hobbies: self.hobbies.unwrap_or_default(),
        })
    }
}

/// A catalog entry; only `name` is consumed; other fields ride along untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }
}

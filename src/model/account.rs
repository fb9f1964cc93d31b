use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Direction of money flow, shared by accounts and transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown entry type '{}'", other)),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting tag on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    /// Revenue from driving lessons, counted by the statistics report.
    DrivingLessons,
}

impl AccountCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DrivingLessons => "driving_lessons",
        }
    }
}

impl FromStr for AccountCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "driving_lessons" => Ok(Self::DrivingLessons),
            other => Err(format!("unknown account category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: EntryType,
    pub category: Option<AccountCategory>,
    pub created_at: DateTime<Utc>,
}

/// Body of account create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertAccountDto {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: EntryType,
    /// Omitted keeps the stored tag on update, `null` clears it.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<AccountCategory>)]
    pub category: Option<Option<AccountCategory>>,
}

/// Marks a field that appeared in the body, `null` included, as `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_missing_and_null_category() {
        let missing: UpsertAccountDto =
            serde_json::from_str(r#"{"name":"Einnahmen","type":"income"}"#).unwrap();
        let cleared: UpsertAccountDto =
            serde_json::from_str(r#"{"name":"Einnahmen","type":"income","category":null}"#)
                .unwrap();
        let tagged: UpsertAccountDto = serde_json::from_str(
            r#"{"name":"Einnahmen","type":"income","category":"driving_lessons"}"#,
        )
        .unwrap();

        assert_eq!(missing.category, None);
        assert_eq!(cleared.category, Some(None));
        assert_eq!(tagged.category, Some(Some(AccountCategory::DrivingLessons)));
    }
}

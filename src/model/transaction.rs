use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::EntryType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash
    Bar,
    Kreditkarte,
    Twint,
    Bank,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Kreditkarte => "kreditkarte",
            Self::Twint => "twint",
            Self::Bank => "bank",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bar" => Ok(Self::Bar),
            "kreditkarte" => Ok(Self::Kreditkarte),
            "twint" => Ok(Self::Twint),
            "bank" => Ok(Self::Bank),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    pub account_id: String,
    /// Resolved on read; `null` when the account has been deleted.
    pub account_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub remarks: Option<String>,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Body of transaction create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertTransactionDto {
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    pub account_id: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub remarks: Option<String>,
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::EntryType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountTotalDto {
    pub income: f64,
    pub expense: f64,
    #[serde(rename = "type")]
    pub account_type: EntryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthTotalDto {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YearlyReportDto {
    /// Keyed by account name
    pub account_totals: BTreeMap<String, AccountTotalDto>,
    /// Always twelve keys, `YYYY-01` through `YYYY-12`
    pub monthly_totals: BTreeMap<String, MonthTotalDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthFlowDto {
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatisticsDto {
    pub fahrstunden_count: u64,
    pub fahrstunden_revenue: f64,
    pub monthly_data: BTreeMap<String, MonthFlowDto>,
    /// Keyed by payment method, unset methods under `unknown`
    pub payment_methods: BTreeMap<String, f64>,
}

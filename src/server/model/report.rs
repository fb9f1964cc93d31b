//! Report aggregates built from a year's or month's transactions.
//!
//! The builders here are pure: the service layer loads transactions and the
//! referenced accounts, then hands them over for grouping and summation.

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::{
        account::EntryType,
        report::{AccountTotalDto, MonthFlowDto, MonthTotalDto, StatisticsDto, YearlyReportDto},
    },
    server::{
        error::AppError,
        model::{account::Account, period::YearMonth, transaction::Transaction},
    },
};

/// Bucket for transactions without a payment method.
pub const UNKNOWN_PAYMENT_METHOD: &str = "unknown";

const DESCRIPTION_WIDTH: usize = 30;
const ACCOUNT_WIDTH: usize = 20;
const REMARKS_WIDTH: usize = 30;

/// Income and expense sums for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountTotal {
    pub income: f64,
    pub expense: f64,
    pub account_type: EntryType,
}

/// Income and expense sums for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthTotal {
    pub income: f64,
    pub expense: f64,
}

impl MonthTotal {
    fn add(&mut self, transaction: &Transaction) {
        match transaction.entry_type {
            EntryType::Income => self.income += transaction.amount,
            EntryType::Expense => self.expense += transaction.amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.income - self.expense
    }
}

/// Zero-filled month buckets for every month of `year`, summed from `transactions`.
///
/// Transactions dated outside `year` are ignored.
fn month_buckets(
    year: i32,
    transactions: &[Transaction],
) -> Result<BTreeMap<YearMonth, MonthTotal>, AppError> {
    let mut buckets: BTreeMap<YearMonth, MonthTotal> = YearMonth::months_of(year)?
        .into_iter()
        .map(|m| (m, MonthTotal::default()))
        .collect();

    for transaction in transactions {
        if let Some(bucket) = buckets.get_mut(&YearMonth::of(transaction.date)) {
            bucket.add(transaction);
        }
    }

    Ok(buckets)
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyReport {
    /// Keyed by account name; transactions of deleted accounts are left out.
    pub account_totals: BTreeMap<String, AccountTotal>,
    /// Exactly the twelve months of the report year.
    pub monthly_totals: BTreeMap<YearMonth, MonthTotal>,
}

impl YearlyReport {
    /// Groups a year's transactions by account and by month.
    ///
    /// # Arguments
    /// - `year` - Report year, used to build the twelve month buckets
    /// - `transactions` - Transactions dated within `year`
    /// - `accounts` - Accounts referenced by the transactions, keyed by ID
    ///
    /// # Returns
    /// - `Ok(YearlyReport)` - Aggregated report
    /// - `Err(AppError::Validation)` - Year outside 1..=9999
    pub fn build(
        year: i32,
        transactions: &[Transaction],
        accounts: &HashMap<String, Account>,
    ) -> Result<Self, AppError> {
        let mut account_totals: BTreeMap<String, AccountTotal> = BTreeMap::new();

        for transaction in transactions {
            let Some(account) = accounts.get(&transaction.account_id) else {
                continue;
            };

            let entry = account_totals
                .entry(account.name.clone())
                .or_insert_with(|| AccountTotal {
                    income: 0.0,
                    expense: 0.0,
                    account_type: account.account_type,
                });
            match transaction.entry_type {
                EntryType::Income => entry.income += transaction.amount,
                EntryType::Expense => entry.expense += transaction.amount,
            }
        }

        Ok(Self {
            account_totals,
            monthly_totals: month_buckets(year, transactions)?,
        })
    }

    pub fn into_dto(self) -> YearlyReportDto {
        YearlyReportDto {
            account_totals: self
                .account_totals
                .into_iter()
                .map(|(name, t)| {
                    (
                        name,
                        AccountTotalDto {
                            income: t.income,
                            expense: t.expense,
                            account_type: t.account_type,
                        },
                    )
                })
                .collect(),
            monthly_totals: self
                .monthly_totals
                .into_iter()
                .map(|(month, t)| {
                    (
                        month.to_string(),
                        MonthTotalDto {
                            income: t.income,
                            expense: t.expense,
                            total: t.total(),
                        },
                    )
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of transactions booked on driving lesson accounts.
    pub fahrstunden_count: u64,
    /// Sum of those transactions' amounts.
    pub fahrstunden_revenue: f64,
    pub monthly_data: BTreeMap<YearMonth, MonthTotal>,
    /// Amount sums keyed by payment method.
    pub payment_methods: BTreeMap<String, f64>,
}

impl Statistics {
    /// Computes driving lesson figures, month buckets and payment method totals.
    ///
    /// Driving lesson accounts are those tagged with the driving lessons category; when
    /// none exists the count and revenue are zero.
    pub fn build(
        year: i32,
        transactions: &[Transaction],
        accounts: &HashMap<String, Account>,
    ) -> Result<Self, AppError> {
        let mut fahrstunden_count = 0;
        let mut fahrstunden_revenue = 0.0;
        let mut payment_methods: BTreeMap<String, f64> = BTreeMap::new();

        for transaction in transactions {
            let is_lesson = accounts
                .get(&transaction.account_id)
                .is_some_and(Account::is_driving_lessons);
            if is_lesson {
                fahrstunden_count += 1;
                fahrstunden_revenue += transaction.amount;
            }

            let method = transaction
                .payment_method
                .map(|m| m.as_str())
                .unwrap_or(UNKNOWN_PAYMENT_METHOD);
            *payment_methods.entry(method.to_string()).or_insert(0.0) += transaction.amount;
        }

        Ok(Self {
            fahrstunden_count,
            fahrstunden_revenue,
            monthly_data: month_buckets(year, transactions)?,
            payment_methods,
        })
    }

    pub fn into_dto(self) -> StatisticsDto {
        StatisticsDto {
            fahrstunden_count: self.fahrstunden_count,
            fahrstunden_revenue: self.fahrstunden_revenue,
            monthly_data: self
                .monthly_data
                .into_iter()
                .map(|(month, t)| {
                    (
                        month.to_string(),
                        MonthFlowDto {
                            income: t.income,
                            expense: t.expense,
                        },
                    )
                })
                .collect(),
            payment_methods: self.payment_methods,
        }
    }
}

/// Column headers of the monthly export table.
pub const MONTH_TABLE_HEADERS: [&str; 6] = [
    "Datum",
    "Bezeichnung",
    "Konto",
    "Einnahmen",
    "Ausgaben",
    "Bemerkungen",
];

/// Formatted table for a month's PDF export.
///
/// Every row has one cell per entry of [`MONTH_TABLE_HEADERS`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTable {
    pub period: YearMonth,
    pub rows: Vec<[String; 6]>,
    /// `Total:` row followed by the `Einkommen:` net balance row.
    pub summary: [[String; 6]; 2],
}

impl MonthTable {
    /// Formats transactions into table rows and appends the totals.
    ///
    /// # Arguments
    /// - `period` - Exported month, shown in the title
    /// - `transactions` - Transactions of that month in display order, with account names resolved
    pub fn build(period: YearMonth, transactions: &[Transaction]) -> Self {
        let mut totals = MonthTotal::default();
        let mut rows = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            totals.add(transaction);

            let amount = format_amount(transaction.amount);
            let (income, expense) = match transaction.entry_type {
                EntryType::Income => (amount, String::new()),
                EntryType::Expense => (String::new(), amount),
            };

            rows.push([
                transaction.date.format("%Y-%m-%d").to_string(),
                truncate(&transaction.description, DESCRIPTION_WIDTH),
                truncate(
                    transaction.account_name.as_deref().unwrap_or_default(),
                    ACCOUNT_WIDTH,
                ),
                income,
                expense,
                truncate(transaction.remarks.as_deref().unwrap_or_default(), REMARKS_WIDTH),
            ]);
        }

        let summary = [
            [
                String::new(),
                String::new(),
                "Total:".to_string(),
                format_amount(totals.income),
                format_amount(totals.expense),
                String::new(),
            ],
            [
                String::new(),
                String::new(),
                "Einkommen:".to_string(),
                String::new(),
                format_amount(totals.total()),
                String::new(),
            ],
        ];

        Self {
            period,
            rows,
            summary,
        }
    }
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// First `max_chars` characters of `text`.
fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

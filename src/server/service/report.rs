//! Reporting service.
//!
//! Loads a year's or month's transactions with their accounts and hands them to the
//! pure aggregation in `model::report`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::transaction::TransactionRepository,
    error::AppError,
    model::{
        period::{DateRange, YearMonth},
        report::{MonthTable, Statistics, YearlyReport},
    },
    service::{pdf, transaction::load_accounts},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Totals per account and per month for `year`.
    ///
    /// # Returns
    /// - `Ok(YearlyReport)` - Twelve month buckets plus per-account totals
    /// - `Err(AppError::Validation)` - Year outside 1..=9999
    pub async fn yearly_report(&self, year: i32) -> Result<YearlyReport, AppError> {
        let range = DateRange::year(year)?;
        let transactions = TransactionRepository::new(self.db)
            .list_chronological(range)
            .await?;
        let accounts = load_accounts(self.db, &transactions).await?;

        YearlyReport::build(year, &transactions, &accounts)
    }

    /// Driving lesson figures and payment method totals for `year`.
    pub async fn statistics(&self, year: i32) -> Result<Statistics, AppError> {
        let range = DateRange::year(year)?;
        let transactions = TransactionRepository::new(self.db)
            .list_chronological(range)
            .await?;
        let accounts = load_accounts(self.db, &transactions).await?;

        Statistics::build(year, &transactions, &accounts)
    }

    /// Renders the month's transactions, oldest first, as a PDF table.
    ///
    /// # Arguments
    /// - `period` - Exported month
    /// - `business_name` - Shown in the document title
    pub async fn export_month(
        &self,
        period: YearMonth,
        business_name: &str,
    ) -> Result<Vec<u8>, AppError> {
        let mut transactions = TransactionRepository::new(self.db)
            .list_chronological(DateRange::month(period))
            .await?;
        let accounts = load_accounts(self.db, &transactions).await?;
        for transaction in &mut transactions {
            transaction.account_name = accounts
                .get(&transaction.account_id)
                .map(|a| a.name.clone());
        }

        let table = MonthTable::build(period, &transactions);
        tracing::debug!(
            "Exporting {} transactions for {}",
            table.rows.len(),
            period
        );

        pdf::render_month(&table, business_name)
    }
}

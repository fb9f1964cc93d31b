//! Transaction domain models and parameters.
//!
//! A transaction is stored with its `account_id` only. The account name shown to
//! clients is resolved when transactions are read, so renaming an account is
//! reflected immediately and a deleted account yields no name.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        account::EntryType,
        transaction::{PaymentMethod, TransactionDto, UpsertTransactionDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        model::period::{DateRange, YearMonth},
        util::parse::{parse_stored, parse_stored_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub entry_type: EntryType,
    pub amount: f64,
    pub account_id: String,
    /// Filled in by the service layer, `None` straight out of the repository.
    pub account_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub remarks: Option<String>,
    pub file_url: Option<String>,
    /// Creator of the booking.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            date: self.date,
            description: self.description,
            entry_type: self.entry_type,
            amount: self.amount,
            account_id: self.account_id,
            account_name: self.account_name,
            payment_method: self.payment_method,
            remarks: self.remarks,
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Converted transaction without account name
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored type, payment method or
    ///   amount is invalid
    pub fn from_entity(entity: entity::ledger_transaction::Model) -> Result<Self, AppError> {
        let entry_type = parse_stored("ledger_transaction", "entry_type", &entity.entry_type)?;
        let payment_method = parse_stored_opt(
            "ledger_transaction",
            "payment_method",
            entity.payment_method.as_deref(),
        )?;
        if !entity.amount.is_finite() || entity.amount < 0.0 {
            return Err(InternalError::InvalidStoredValue {
                entity: "ledger_transaction",
                field: "amount",
                value: entity.amount.to_string(),
            }
            .into());
        }

        Ok(Self {
            id: entity.id,
            date: entity.date,
            description: entity.description,
            entry_type,
            amount: entity.amount,
            account_id: entity.account_id,
            account_name: None,
            payment_method,
            remarks: entity.remarks,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating or replacing a transaction.
#[derive(Debug, Clone)]
pub struct UpsertTransactionParam {
    pub date: NaiveDate,
    pub description: String,
    pub entry_type: EntryType,
    pub amount: f64,
    pub account_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub remarks: Option<String>,
}

impl UpsertTransactionParam {
    /// Converts and validates a transaction request body.
    ///
    /// # Returns
    /// - `Ok(UpsertTransactionParam)` - Amount is finite and non-negative
    /// - `Err(AppError::Validation)` - Negative, NaN or infinite amount
    pub fn from_dto(dto: UpsertTransactionDto) -> Result<Self, AppError> {
        if !dto.amount.is_finite() || dto.amount < 0.0 {
            return Err(AppError::Validation(
                "Amount must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            date: dto.date,
            description: dto.description,
            entry_type: dto.entry_type,
            amount: dto.amount,
            account_id: dto.account_id,
            payment_method: dto.payment_method,
            remarks: dto.remarks.filter(|r| !r.is_empty()),
        })
    }
}

/// Filter for listing transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionFilter {
    /// Inclusive date range, `None` lists everything.
    pub range: Option<DateRange>,
}

impl TransactionFilter {
    /// Builds a filter from the optional `year` and `month` query parameters.
    ///
    /// # Returns
    /// - `Ok(TransactionFilter)` - No filter, a whole year, or a single month
    /// - `Err(AppError::Validation)` - Month given without year, or values out of range
    pub fn from_query(year: Option<i32>, month: Option<u32>) -> Result<Self, AppError> {
        let range = match (year, month) {
            (None, None) => None,
            (Some(year), None) => Some(DateRange::year(year)?),
            (Some(year), Some(month)) => Some(DateRange::month(YearMonth::new(year, month)?)),
            (None, Some(_)) => {
                return Err(AppError::Validation(
                    "Filtering by month requires a year".to_string(),
                ))
            }
        };

        Ok(Self { range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(amount: f64) -> UpsertTransactionDto {
        UpsertTransactionDto {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            description: "Fahrstunde".to_string(),
            entry_type: EntryType::Income,
            amount,
            account_id: "acc".to_string(),
            payment_method: None,
            remarks: Some(String::new()),
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        for amount in [-0.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                UpsertTransactionParam::from_dto(dto(amount)),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn accepts_zero_and_drops_empty_remarks() {
        let param = UpsertTransactionParam::from_dto(dto(0.0)).unwrap();
        assert_eq!(param.amount, 0.0);
        assert!(param.remarks.is_none());
    }

    #[test]
    fn month_filter_requires_year() {
        assert!(matches!(
            TransactionFilter::from_query(None, Some(3)),
            Err(AppError::Validation(_))
        ));
        let filter = TransactionFilter::from_query(Some(2025), Some(3)).unwrap();
        let range = filter.range.unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }
}

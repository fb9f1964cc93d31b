pub use super::account::Entity as Account;
pub use super::bank_document::Entity as BankDocument;
pub use super::customer::Entity as Customer;
pub use super::customer_remark::Entity as CustomerRemark;
pub use super::important_upload::Entity as ImportantUpload;
pub use super::ledger_transaction::Entity as LedgerTransaction;
pub use super::misc_item::Entity as MiscItem;
pub use super::service_entry::Entity as ServiceEntry;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;

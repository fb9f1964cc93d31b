pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_account_table;
mod m20261001_000003_create_ledger_transaction_table;
mod m20261001_000004_create_vehicle_table;
mod m20261001_000005_create_service_entry_table;
mod m20261001_000006_create_customer_table;
mod m20261001_000007_create_customer_remark_table;
mod m20261001_000008_create_document_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_account_table::Migration),
            Box::new(m20261001_000003_create_ledger_transaction_table::Migration),
            Box::new(m20261001_000004_create_vehicle_table::Migration),
            Box::new(m20261001_000005_create_service_entry_table::Migration),
            Box::new(m20261001_000006_create_customer_table::Migration),
            Box::new(m20261001_000007_create_customer_remark_table::Migration),
            Box::new(m20261001_000008_create_document_tables::Migration),
        ]
    }
}

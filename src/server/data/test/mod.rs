mod account;
mod customer;
mod documents;
mod service_entry;
mod transaction;
mod user;

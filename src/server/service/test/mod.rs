mod account;
mod auth;
mod customer;
mod transaction;
mod vehicle;

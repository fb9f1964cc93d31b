//! Request extractors and access guards.

pub mod auth;

#[cfg(test)]
mod test;

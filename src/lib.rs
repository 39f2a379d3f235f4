pub mod admin;
pub mod app;
pub mod articles;
pub mod bookings;
pub mod categories;
pub mod config;
pub mod contact;
pub mod cors;
pub mod db;
pub mod envfile;
pub mod error;
pub mod form;
pub mod health;
pub mod logging;
pub mod provider;
pub mod query;
pub mod spa;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

//! Domain model: the account entity, its value objects and the ports it is
//! loaded, persisted and notified through.

pub mod account;
pub mod ports;
pub mod transaction;
pub mod user;

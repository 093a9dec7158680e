//! Domain types and pure logic shared by the Flightwatch crates.
//!
//! Nothing in here performs I/O: the scheduling decision, the airport
//! lookup table, and the departure-time parsing are all plain functions
//! so the worker and the API can be tested without a database or any
//! external service.

pub mod airports;
pub mod errors;
pub mod models;
pub mod schedule;

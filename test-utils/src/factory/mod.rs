//! Entity factories for tests.
//!
//! Each factory inserts an entity with sensible defaults, customizable
//! where tests need control. Unique values (emails, license plates) come
//! from the shared atomic counter in `helpers`.

pub mod bus;
pub mod detailing_service;
pub mod helpers;
pub mod user;
pub mod vehicle;

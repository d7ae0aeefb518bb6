//! Framework-independent core of the registration service.

pub mod schema;

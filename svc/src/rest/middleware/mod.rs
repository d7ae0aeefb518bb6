pub mod schema_validation;

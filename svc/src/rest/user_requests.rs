use libreg::schema::{FieldType, Schema};
use serde::Deserialize;

use crate::rest::middleware::schema_validation::RequestSchema;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RequestSchema for RegisterRequest {
    fn schema() -> Schema {
        Schema::build()
            .required("email", FieldType::String)
            .required("password", FieldType::String)
            .finish()
    }
}

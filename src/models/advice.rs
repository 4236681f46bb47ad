use serde::{Deserialize, Serialize};

use super::portfolio::Portfolio;

// Fields are optional so presence can be validated with a fixed 400
// message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub customer_id: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
    pub portfolio: Portfolio,
}

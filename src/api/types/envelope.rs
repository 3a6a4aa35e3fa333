//! Single-item response envelope

use serde::{Deserialize, Serialize};

/// Wraps one resource as `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}

impl<T> Response<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(Response::new("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "data": "x" }));
    }
}

use serde::{Deserialize, Serialize};

/// Payload returned by the liveness endpoint.
///
/// `code` is 0 while the process is healthy; non-zero values are reserved
/// for failure reporting and are never produced today. `msg` carries a
/// human-readable detail for non-zero codes and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub code: i32,
    pub msg: String,
}

impl HealthResponse {
    /// The fixed healthy payload. Identical for every request; an empty
    /// `String` does not allocate.
    pub const HEALTHY: Self = Self {
        code: 0,
        msg: String::new(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_serializes_to_fixed_shape() {
        let json = serde_json::to_string(&HealthResponse::HEALTHY).unwrap();
        assert_eq!(json, r#"{"code":0,"msg":""}"#);
    }

    #[test]
    fn health_response_roundtrip() {
        let json = serde_json::to_string(&HealthResponse::HEALTHY).unwrap();
        let deserialized: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, HealthResponse::HEALTHY);
    }

    #[test]
    fn reserved_fields_deserialize() {
        let parsed: HealthResponse =
            serde_json::from_str(r#"{"code":3,"msg":"degraded"}"#).unwrap();
        assert_eq!(parsed.code, 3);
        assert_eq!(parsed.msg, "degraded");
    }
}

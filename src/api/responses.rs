use serde::Serialize;

/// The simple authorizer response understood by API Gateway v2.
///
/// Serializes to exactly `{"isAuthorized": <bool>}` with no other fields; the
/// gateway enforces allow/deny from this value alone.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AuthorizerResponse {
    #[serde(rename = "isAuthorized")]
    pub is_authorized: bool,
}

impl AuthorizerResponse {
    /// A response that allows the request through the gateway.
    pub fn allowed() -> Self {
        Self {
            is_authorized: true,
        }
    }

    /// A response that denies the request at the gateway.
    pub fn denied() -> Self {
        Self {
            is_authorized: false,
        }
    }
}

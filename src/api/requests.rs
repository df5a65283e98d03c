use serde::Deserialize;
use std::collections::HashMap;

/// Represents the authorizer event sent by API Gateway v2 (payload format 2.0).
///
/// Only the headers and the request context are read; every other field of the
/// gateway event is ignored during deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct AuthorizerEvent {
    /// Request headers, with names pre-lowercased by the gateway.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Gateway-assigned context for this request.
    #[serde(default, rename = "requestContext")]
    pub request_context: RequestContext,
}

/// The subset of the gateway request context that is read.
#[derive(Debug, Default, Deserialize)]
pub struct RequestContext {
    /// The gateway-assigned request identifier, used only for diagnostics.
    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
}

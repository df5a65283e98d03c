use crate::api::{requests::AuthorizerEvent, responses::AuthorizerResponse};
use crate::config::{ConfigSource, ADMIN_API_KEY_VAR};
use crate::diagnostics::DiagnosticLog;
use crate::messages::*;

/// The header to check to find the provided API key.
///
/// Header names arrive pre-lowercased in API Gateway v2 events.
const API_KEY_HEADER: &str = "x-api-key";

/// Validates the [`API_KEY_HEADER`] of a request against the configured
/// [`ADMIN_API_KEY_VAR`] value.
///
/// Every failure mode collapses to a denying response; callers can only tell
/// a misconfiguration from a bad credential through the diagnostic log.
pub struct Authorizer<C, D> {
    config: C,
    diagnostics: D,
}

impl<C: ConfigSource, D: DiagnosticLog> Authorizer<C, D> {
    pub fn new(config: C, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    /// Produce the authorization verdict for a single gateway event.
    ///
    /// Always returns a well-formed response, never an error: an unset secret,
    /// a missing or empty header, and a mismatched key all deny.
    pub fn authorize(&self, event: &AuthorizerEvent) -> AuthorizerResponse {
        let request_id = event
            .request_context
            .request_id
            .as_deref()
            .unwrap_or("<unknown>");
        self.diagnostics
            .info(&format!("authorizer invoked for request: {request_id}"));

        let expected_key = match self.config.get(ADMIN_API_KEY_VAR) {
            Some(key) if !key.is_empty() => key,
            _ => {
                self.diagnostics.error(ADMIN_API_KEY_NOT_SET_MESSAGE);
                return AuthorizerResponse::denied();
            }
        };

        let provided_key = match event.headers.get(API_KEY_HEADER) {
            Some(key) if !key.is_empty() => key,
            _ => {
                self.diagnostics.warn(NO_API_KEY_HEADER_MESSAGE);
                return AuthorizerResponse::denied();
            }
        };

        if *provided_key == expected_key {
            self.diagnostics.info(API_KEY_VALIDATED_MESSAGE);
            AuthorizerResponse::allowed()
        } else {
            self.diagnostics.warn(INVALID_API_KEY_MESSAGE);
            AuthorizerResponse::denied()
        }
    }
}

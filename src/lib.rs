mod api;
mod authorization;
mod config;
mod diagnostics;
mod messages;

pub use api::{requests::AuthorizerEvent, responses::AuthorizerResponse};

use authorization::Authorizer;
use config::ProcessEnv;
use diagnostics::TracingDiagnostics;
use lambda_runtime::{Error, LambdaEvent};

/// Handle a single authorizer invocation from the gateway.
///
/// Never returns the error arm: every failure mode is expressed as a denying
/// [`AuthorizerResponse`] so the gateway always receives a well-formed verdict.
pub async fn handle_authorization(
    event: LambdaEvent<AuthorizerEvent>,
) -> Result<AuthorizerResponse, Error> {
    Ok(Authorizer::new(ProcessEnv, TracingDiagnostics).authorize(&event.payload))
}

use admin_key_authorizer::handle_authorization;
use lambda_runtime::{run, service_fn, Error};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps and does not render ANSI colour.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .init();

    run(service_fn(handle_authorization)).await
}

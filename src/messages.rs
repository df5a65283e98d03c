pub const ADMIN_API_KEY_NOT_SET_MESSAGE: &str =
    "ADMIN_API_KEY environment variable is not set, all requests will be rejected until it has been set";
pub const NO_API_KEY_HEADER_MESSAGE: &str = "no x-api-key header provided";
pub const INVALID_API_KEY_MESSAGE: &str = "invalid API key provided";
pub const API_KEY_VALIDATED_MESSAGE: &str = "API key validated successfully";

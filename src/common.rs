// Default URLs
pub static DEFAULT_ENDPOINT: &str = "https://ob.nordigen.com/api";

// Header values
pub static ACCEPT_JSON: &str = "application/json";
pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub static TOKEN_AUTH_SCHEME: &str = "Token";

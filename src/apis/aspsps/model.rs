use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bank reachable through Nordigen (Account Servicing Payment Service Provider).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Aspsp {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default)]
    pub countries: Vec<String>,
    /// Any other field sent by the server, untouched.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

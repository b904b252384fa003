use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of days of transaction history requested when not specified otherwise.
pub const DEFAULT_MAX_HISTORICAL_DAYS: u32 = 90;

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateEndUserAgreementRequest {
    /// Unique id of the end user within your solution, usually a UUID.
    pub enduser_id: String,
    /// Id of the bank the agreement is for.
    pub aspsp_id: String,
    /// Length of the transaction history to be retrieved, in days.
    #[builder(default = "DEFAULT_MAX_HISTORICAL_DAYS")]
    pub max_historical_days: u32,
}

/// Consent of an end user, bounding how much transaction history may be retrieved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EndUserAgreement {
    pub id: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Set once the end user accepted the agreement at their bank.
    #[serde(default)]
    pub accepted: Option<DateTime<Utc>>,
    pub max_historical_days: u32,
    #[serde(default)]
    pub access_valid_for_days: Option<u32>,
    pub enduser_id: String,
    pub aspsp_id: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Requisition status once the end user went through the bank authentication
/// and the accounts have been linked.
pub const STATUS_LINKED: &str = "LN";

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateRequisitionRequest {
    /// Unique id of the end user within your solution, usually a UUID.
    ///
    /// Must match the `enduser_id` of the agreements, if any.
    pub enduser_id: String,
    /// Where the end user is sent back to after authenticating at their bank.
    pub redirect: String,
    /// Additional unique id of your choice.
    pub reference: String,
    /// Ids of the end user agreements to use. If empty, the default terms apply.
    #[builder(default)]
    pub agreements: Vec<String>,
    /// Two-letter code of the language used for the pages hosted by Nordigen.
    /// When `None`, the browser language is used.
    #[builder(default)]
    pub user_language: Option<String>,
}

/// Server-side record of the consent flow of one end user and of the accounts it linked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Requisition {
    pub id: String,
    pub redirect: String,
    pub status: String,
    #[serde(default)]
    pub agreements: Vec<String>,
    /// Only populated after the end user has authenticated at their bank.
    #[serde(default)]
    pub accounts: Vec<String>,
    pub reference: String,
    pub enduser_id: String,
    #[serde(default)]
    pub user_language: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Requisition {
    /// Whether the end user completed the flow and accounts have been linked.
    pub fn is_linked(&self) -> bool {
        self.status == STATUS_LINKED
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct RequisitionLinkRequest<'a> {
    pub(crate) aspsp_id: &'a str,
}

//! APIs and models related to the accounts linked through a requisition.

mod api;
mod model;

pub use api::AccountsApi;
pub use model::*;

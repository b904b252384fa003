//! APIs and models related to end user agreements.

mod api;
mod model;

pub use api::AgreementsApi;
pub use model::*;

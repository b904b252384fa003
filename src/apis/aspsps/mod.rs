//! APIs and models related to banks (ASPSPs).

mod api;
mod model;

pub use api::AspspsApi;
pub use model::*;

//! APIs and models related to requisitions.

mod api;
mod model;

pub use api::RequisitionsApi;
pub use model::*;

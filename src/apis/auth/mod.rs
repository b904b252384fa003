//! Credentials used to authenticate against Nordigen APIs.

mod model;

pub use model::*;

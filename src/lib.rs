//! An unofficial Rust client for the [Nordigen](https://nordigen.com) open banking API.
//!
//! It covers the handful of endpoints needed to connect an end user's bank account and read
//! its data: bank (ASPSP) discovery, end user agreements, requisitions and account balances,
//! transactions and details.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Create an access token from the [Nordigen dashboard](https://ob.nordigen.com/tokens/).
//!
//! ## Initialize a new `NordigenClient`
//!
//! ```rust,no_run
//! # use nordigen_rust::NordigenClient;
//! let nordigen = NordigenClient::new("my-access-token");
//! ```
//!
//! By default, a `NordigenClient` talks to `https://ob.nordigen.com/api`.
//! To point it somewhere else, use [`with_endpoint`](crate::client::NordigenClientBuilder::with_endpoint).
//!
//! ## Connect a bank account
//!
//! ```rust,no_run
//! # use nordigen_rust::{NordigenClient, Error, apis::requisitions::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let nordigen: NordigenClient = unreachable!();
//! #
//! let banks = nordigen.aspsps.list_for_country("gb").await?;
//! let bank = &banks[0];
//!
//! let requisition = nordigen
//!     .requisitions
//!     .create(
//!         &CreateRequisitionRequestBuilder::default()
//!             .enduser_id("some-user")
//!             .redirect("https://my.redirect.uri")
//!             .reference("some-reference")
//!             .build()
//!             .unwrap(),
//!     )
//!     .await?;
//!
//! if let Some(link) = nordigen.requisitions.get_link(&requisition, &bank.id).await? {
//!     println!("Authenticate at: {}", link);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Read account data
//!
//! Once the end user went through the link, the requisition lists the connected accounts.
//!
//! ```rust,no_run
//! # use nordigen_rust::{NordigenClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let nordigen: NordigenClient = unreachable!();
//! #
//! let requisition = nordigen.requisitions.get_by_id("some-requisition-id").await?;
//! for account_id in &requisition.accounts {
//!     let balances = nordigen.accounts.balances(account_id).await?;
//!     for balance in &balances.balances {
//!         tracing::info!(
//!             "Account {}: {} {}",
//!             account_id,
//!             balance.balance_amount.amount,
//!             balance.balance_amount.currency
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) folder for an interactive walkthrough:
//!
//! ```shell
//! cargo run --example link_account
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::NordigenClient;
pub use error::Error;

use crate::{
    apis::{
        accounts::{AccountDetailData, BalanceData, TransactionData},
        NordigenClientInner,
    },
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Nordigen accounts APIs client.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<NordigenClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<NordigenClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the balances of an account.
    ///
    /// The account id is percent-encoded into the path.
    #[tracing::instrument(name = "Get Account Balances", skip(self))]
    pub async fn balances(&self, account_id: &str) -> Result<BalanceData, Error> {
        self.inner
            .get(&format!("/accounts/{}/balances/", encode(account_id)))
            .await
    }

    /// Gets the booked and pending transactions of an account.
    ///
    /// The account id is percent-encoded into the path.
    #[tracing::instrument(name = "Get Account Transactions", skip(self))]
    pub async fn transactions(&self, account_id: &str) -> Result<TransactionData, Error> {
        self.inner
            .get(&format!("/accounts/{}/transactions/", encode(account_id)))
            .await
    }

    /// Gets the details of an account.
    ///
    /// The account id is percent-encoded into the path.
    #[tracing::instrument(name = "Get Account Details", skip(self))]
    pub async fn details(&self, account_id: &str) -> Result<AccountDetailData, Error> {
        self.inner
            .get(&format!("/accounts/{}/details/", encode(account_id)))
            .await
    }
}

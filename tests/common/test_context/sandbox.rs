use anyhow::Context;
use nordigen_rust::{apis::requisitions::Requisition, NordigenClient};

pub struct TestContext {
    pub client: NordigenClient,
    pub access_token: String,
    linked_requisition_id: String,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let access_token = std::env::var("NORDIGEN_ACCESS_TOKEN").unwrap();
        let linked_requisition_id = std::env::var("NORDIGEN_LINKED_REQUISITION_ID").unwrap();

        // Configure a new NordigenClient to point to the live API
        let client = NordigenClient::builder(access_token.clone())
            .build()
            .unwrap();

        Self {
            client,
            access_token,
            linked_requisition_id,
        }
    }

    pub fn endpoint(&self) -> String {
        self.client.endpoint().to_string()
    }

    /// Returns a requisition whose end user already authenticated at the sandbox bank.
    ///
    /// Authenticating requires a browser, so the requisition has to be linked beforehand.
    pub async fn linked_requisition(&self) -> anyhow::Result<Requisition> {
        let requisition = self
            .client
            .requisitions
            .get_by_id(&self.linked_requisition_id)
            .await
            .context("Failed to fetch the linked requisition")?;

        anyhow::ensure!(
            requisition.is_linked(),
            "Requisition {} is not linked",
            requisition.id
        );

        Ok(requisition)
    }
}

//! Interactive walkthrough: connects a bank account and prints its data.
//!
//! The access token is read from `config.{json,toml,yaml}` or from the `NORDIGEN_ACCESS_TOKEN`
//! environment variable, and prompted for otherwise.
//! Create one at <https://ob.nordigen.com/tokens/>.

use anyhow::{bail, Context};
use dialoguer::{Confirm, Input, Password, Select};
use nordigen_rust::{apis::requisitions::CreateRequisitionRequestBuilder, NordigenClient};
use uuid::Uuid;

#[derive(serde::Deserialize, Debug, Default)]
struct Config {
    access_token: Option<String>,
    endpoint: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            // Add in `./config.json`, `./config.toml`...
            .add_source(config::File::with_name("config").required(false))
            // Add in settings from the environment, e.g. `NORDIGEN_ACCESS_TOKEN`
            .add_source(config::Environment::with_prefix("NORDIGEN"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::read()?;

    println!("This demo guides you through connecting a bank account to Nordigen.");

    let access_token = match config.access_token {
        Some(access_token) => access_token,
        None => Password::new()
            .with_prompt("What is your Nordigen access token?")
            .interact()?,
    };

    let mut builder = NordigenClient::builder(access_token);
    if let Some(endpoint) = config.endpoint {
        builder = builder.with_endpoint(endpoint);
    }
    let nordigen = builder.build()?;

    // Choose a bank from the list of ASPSPs
    let country: String = Input::new()
        .with_prompt("Which country's banks should be queried? (e.g. gb)")
        .default("gb".to_string())
        .interact_text()?;
    let aspsps = nordigen.aspsps.list_for_country(&country).await?;
    println!("Found {} banks in that country.", aspsps.len());

    // Searching is up to the caller: the API returns every bank of the country
    let query: String = Input::new()
        .with_prompt("Search the list of banks (case insensitive)")
        .allow_empty(true)
        .interact_text()?;
    let query = query.to_lowercase();
    let matching = aspsps
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .collect::<Vec<_>>();
    if matching.is_empty() {
        bail!("No bank matches {:?}", query);
    }

    let labels = matching
        .iter()
        .map(|a| format!("{} (BIC: {})", a.name, a.bic))
        .collect::<Vec<_>>();
    let selection = Select::new()
        .with_prompt("Choose your bank")
        .items(&labels)
        .default(0)
        .interact()?;
    let aspsp = matching[selection];

    let enduser_id = format!("nordigen-rust-demo::{}", Uuid::new_v4());
    tracing::info!("Using bank {} with end user {}", aspsp.id, enduser_id);

    let requisition = nordigen
        .requisitions
        .create(
            &CreateRequisitionRequestBuilder::default()
                .enduser_id(enduser_id.clone())
                .redirect(format!("http://localhost:3000/callback?user={}", enduser_id))
                .reference(enduser_id.clone())
                .build()?,
        )
        .await?;

    let link = nordigen
        .requisitions
        .get_link(&requisition, &aspsp.id)
        .await?
        .context("Nordigen did not return a link for the requisition")?;
    println!("Please open {} in your browser to authenticate.", link);

    while !Confirm::new()
        .with_prompt("Have you authenticated with your bank?")
        .default(true)
        .interact()?
    {}

    let requisition = nordigen.requisitions.get_by_id(&requisition.id).await?;
    println!("Accounts: {:?}", requisition.accounts);

    let account_id = requisition
        .accounts
        .first()
        .context("No account has been linked")?;

    let details = nordigen.accounts.details(account_id).await?;
    println!("First account details: {:#?}", details);

    let balances = nordigen.accounts.balances(account_id).await?;
    println!("First account balances: {:#?}", balances);

    let transactions = nordigen.accounts.transactions(account_id).await?;
    println!("First account transactions: {:#?}", transactions);

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("Error: {:?}", e);
    }
}

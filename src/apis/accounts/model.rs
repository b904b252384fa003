use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A bank account.
///
/// Depending on the bank and on the stage of the flow, the IBAN may be the only field available.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Name of the account owner, e.g. "John Doe".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_account_type: Option<String>,
    /// Account name, e.g. "Main Account".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A monetary amount.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AmountValue {
    pub currency: String,
    /// Decimal amount, as sent by the server (e.g. `"-15.00"`).
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BalanceType {
    ClosingBooked,
    Expected,
    InterimAvailable,
    InterimBooked,
    OpeningBooked,
    ForwardAvailable,
    NonInvoiced,
    #[serde(other)]
    Unknown,
}

/// A single account balance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub balance_amount: AmountValue,
    pub balance_type: BalanceType,
    /// Date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Response of the account balances endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BalanceData {
    #[serde(default)]
    pub account: Option<BankAccount>,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

/// A single transaction on an account.
///
/// Either the creditor or the debtor fields are populated, depending on the direction of the
/// transaction. See [`counterparty`](Transaction::counterparty).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub creditor_name: Option<String>,
    #[serde(default)]
    pub creditor_account: Option<BankAccount>,
    #[serde(default)]
    pub debtor_name: Option<String>,
    #[serde(default)]
    pub debtor_account: Option<BankAccount>,
    pub transaction_amount: AmountValue,
    /// Date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub booking_date: Option<String>,
    /// Date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub value_date: Option<String>,
    #[serde(default)]
    pub remittance_information_unstructured: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The other party of a [`Transaction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Counterparty<'a> {
    Creditor {
        name: Option<&'a str>,
        account: Option<&'a BankAccount>,
    },
    Debtor {
        name: Option<&'a str>,
        account: Option<&'a BankAccount>,
    },
}

impl Transaction {
    /// Returns whichever side of the transaction is populated, creditor first.
    ///
    /// Returns `None` if neither is.
    pub fn counterparty(&self) -> Option<Counterparty<'_>> {
        if self.creditor_name.is_some() || self.creditor_account.is_some() {
            Some(Counterparty::Creditor {
                name: self.creditor_name.as_deref(),
                account: self.creditor_account.as_ref(),
            })
        } else if self.debtor_name.is_some() || self.debtor_account.is_some() {
            Some(Counterparty::Debtor {
                name: self.debtor_name.as_deref(),
                account: self.debtor_account.as_ref(),
            })
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transactions {
    #[serde(default)]
    pub booked: Vec<Transaction>,
    #[serde(default)]
    pub pending: Vec<Transaction>,
}

/// Response of the account transactions endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionData {
    #[serde(default)]
    pub account: Option<BankAccount>,
    #[serde(default)]
    pub balances: Vec<Balance>,
    pub transactions: Transactions,
}

/// Response of the account details endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountDetailData {
    pub account: BankAccount,
}

/// Amounts are usually sent as strings, but some banks send plain JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

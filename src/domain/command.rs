use serde::{Deserialize, Serialize};

use crate::domain::CommandError;

/// CSV row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    request_type: String,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    purpose: Option<String>,
}

/// A user-level request as it arrives from the outside (CSV file, UI).
///
/// Requests are addressed to the dispatch facade, not the engine: a deposit
/// still carries its original currency and may fan out into several engine
/// commands (begin conversion, then the converted deposit).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum LedgerRequest {
    Deposit { amount: f64, currency: String },
    Withdraw { amount: f64 },
    RequestLoan { amount: f64, purpose: String },
    PayLoan,
}

// Custom Deserialize implementation for CSV format
impl<'de> Deserialize<'de> for LedgerRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = CsvRow::deserialize(deserializer)?;
        row.try_into().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<CsvRow> for LedgerRequest {
    type Error = CommandError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        match row.request_type.to_lowercase().as_str() {
            "deposit" => {
                let amount = row.amount.ok_or(CommandError::InvalidAmount)?;
                let currency = row
                    .currency
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| "USD".to_string());
                Ok(Self::Deposit { amount, currency })
            }
            "withdraw" => {
                let amount = row.amount.ok_or(CommandError::InvalidAmount)?;
                Ok(Self::Withdraw { amount })
            }
            "loan" | "request_loan" => {
                let amount = row.amount.ok_or(CommandError::InvalidAmount)?;
                let purpose = row.purpose.unwrap_or_default();
                Ok(Self::RequestLoan { amount, purpose })
            }
            "payloan" | "pay_loan" => Ok(Self::PayLoan),
            other => Err(CommandError::UnknownCommandType(other.to_string())),
        }
    }
}

/// An engine-level command. Amounts here are always in the base currency;
/// the facade resolves foreign-currency deposits before issuing `Deposit`.
///
/// Each command is persisted as exactly one event and applied to the
/// `AccountState` to build the current state of the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountCommand {
    Deposit(Deposit),
    Withdraw(Withdraw),
    RequestLoan(RequestLoan),
    PayLoan(PayLoan),
    BeginConversion(BeginConversion),
    AbortConversion(AbortConversion),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A deposit is a credit to the account in the base currency, increasing
/// the balance. A deposit also terminates any in-flight conversion, since
/// the converted deposit is the final step of that path.
pub struct Deposit {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A withdrawal is a debit to the account. Whether the balance may go
/// negative is decided by the validation policy, not the handler.
pub struct Withdraw {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A loan request credits the balance by the full loan amount and records
/// the outstanding loan. Only one loan may be active at a time; a request
/// while one is outstanding is rejected.
pub struct RequestLoan {
    pub amount: f64,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Paying a loan debits the balance by the outstanding amount and clears
/// the loan fields. Valid even with no active loan (a no-op subtraction).
pub struct PayLoan {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Marks the start of a currency conversion: the loading flag goes up and
/// stays up until the converted deposit lands or the conversion is aborted.
pub struct BeginConversion {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Terminates a failed conversion, clearing the loading flag. Issued by the
/// facade when the rate lookup errors or times out.
pub struct AbortConversion {
    pub reason: String,
}

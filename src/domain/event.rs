use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountEvent {
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    LoanGranted(LoanGranted),
    LoanRepaid(LoanRepaid),
    ConversionStarted(ConversionStarted),
    ConversionAborted(ConversionAborted),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposited {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawn {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanGranted {
    pub amount: f64,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRepaid {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStarted {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionAborted {
    pub reason: String,
}

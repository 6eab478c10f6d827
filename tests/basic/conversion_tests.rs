use crate::context::*;
use ledger::domain::{ConversionError, LedgerError, ValidationPolicy};
use ledger::service::boot;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_foreign_deposit_credits_converted_amount() {
    let mut ctx = TestContext::new();

    // 100 EUR at 1.1 lands as 110 USD
    ctx.service.deposit(100.0, "EUR").await.unwrap();

    assert_eq!(ctx.balance(), 110.0);
    assert!(!ctx.is_loading(), "loading flag must clear after deposit");
}

#[tokio::test]
async fn test_converted_total_is_rounded_to_cents() {
    let mut ctx = TestContext::new();

    // 100 * 1.1 is not binary-exact (110.00000000000001); the facade
    // rounds converted totals to cents before depositing.
    ctx.service.deposit(100.0, "EUR").await.unwrap();
    assert_eq!(ctx.balance(), 110.0);

    // Sub-cent residue is dropped: 33.33 * 1.1 = 36.663 -> 36.66
    ctx.service.deposit(33.33, "EUR").await.unwrap();
    assert_eq!(ctx.balance(), 110.0 + 36.66);
}

#[tokio::test]
async fn test_foreign_deposit_adds_to_existing_balance() {
    let mut ctx = TestContext::new();

    ctx.service.deposit(50.0, "USD").await.unwrap();
    ctx.service.deposit(100.0, "GBP").await.unwrap();

    assert_eq!(ctx.balance(), 175.0);
}

#[tokio::test]
async fn test_failed_lookup_surfaces_error_and_clears_loading() {
    let mut ctx = TestContext::with_rates(Arc::new(FailingRateLookup));

    let result = ctx.service.deposit(100.0, "EUR").await;

    match result {
        Err(LedgerError::Conversion(ConversionError::Unavailable(_))) => {}
        other => panic!("Expected Unavailable, got {:?}", other.err()),
    }
    assert!(!ctx.is_loading(), "loading flag must not stick on failure");
    assert_eq!(ctx.balance(), 0.0);
}

#[tokio::test]
async fn test_slow_lookup_times_out_and_clears_loading() {
    let service = boot(ValidationPolicy::default(), Arc::new(SlowRateLookup))
        .with_lookup_timeout(Duration::from_millis(50));
    let mut ctx = TestContext { service };

    let result = ctx.service.deposit(100.0, "EUR").await;

    match result {
        Err(LedgerError::Conversion(ConversionError::Timeout)) => {}
        other => panic!("Expected Timeout, got {:?}", other.err()),
    }
    assert!(!ctx.is_loading());
    assert_eq!(ctx.balance(), 0.0);
}

#[tokio::test]
async fn test_unsupported_currency_rejected() {
    let mut ctx = TestContext::new();

    let result = ctx.service.deposit(100.0, "XYZ").await;

    match result {
        Err(LedgerError::Conversion(ConversionError::UnsupportedCurrency(code))) => {
            assert_eq!(code, "XYZ");
        }
        other => panic!("Expected UnsupportedCurrency, got {:?}", other.err()),
    }
    assert!(!ctx.is_loading());
}

#[tokio::test]
async fn test_account_usable_after_failed_conversion() {
    let mut ctx = TestContext::with_rates(Arc::new(FailingRateLookup));

    assert_fails!(ctx.service.deposit(100.0, "EUR").await);

    // The failed conversion terminated cleanly; plain commands still work
    ctx.service.deposit(25.0, "USD").await.unwrap();
    ctx.service.withdraw(5.0).await.unwrap();

    assert_eq!(ctx.balance(), 20.0);
    assert!(!ctx.is_loading());
}

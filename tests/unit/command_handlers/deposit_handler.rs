use ledger::domain::*;
use ledger::port::CommandHandler;

#[tokio::test]
async fn test_deposit_validation_succeeds() {
    let deposit = Deposit { amount: 100.0 };
    let state = AccountState::new();
    let policy = ValidationPolicy::default();

    let resource = deposit.load(&state).await.unwrap();
    let entity = deposit.validate(&state, &policy, &resource).unwrap();
    let events = deposit
        .emit(&state, &entity, &resource, chrono::Utc::now())
        .unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        AccountEvent::Deposited(d) => {
            assert_eq!(d.amount, 100.0);
        }
        _ => panic!("Expected Deposited event"),
    }
}

#[tokio::test]
async fn test_deposit_rejects_negative_amount() {
    let deposit = Deposit { amount: -50.0 };
    let state = AccountState::new();
    let policy = ValidationPolicy::default();

    let resource = deposit.load(&state).await.unwrap();

    let result = deposit.validate(&state, &policy, &resource);
    assert!(result.is_err(), "Should reject negative deposit amounts");
}

#[tokio::test]
async fn test_deposit_rejects_zero_amount() {
    let deposit = Deposit { amount: 0.0 };
    let state = AccountState::new();
    let policy = ValidationPolicy::default();

    let resource = deposit.load(&state).await.unwrap();

    let result = deposit.validate(&state, &policy, &resource);
    assert!(result.is_err(), "Should reject zero deposit amounts");
}

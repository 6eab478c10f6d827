use ledger::domain::*;
use ledger::port::CommandHandler;

#[tokio::test]
async fn test_pay_loan_always_validates() {
    let pay = PayLoan {};
    let policy = ValidationPolicy::default();

    // With and without an outstanding loan
    let clean = AccountState::new();
    let with_loan = AccountState {
        balance: 1100.0,
        loan: 1000.0,
        loan_purpose: "car".to_string(),
        is_loading: false,
    };

    for state in [clean, with_loan] {
        let resource = pay.load(&state).await.unwrap();
        let entity = pay.validate(&state, &policy, &resource).unwrap();
        let events = pay
            .emit(&state, &entity, &resource, chrono::Utc::now())
            .unwrap();

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AccountEvent::LoanRepaid(_)));
    }
}

use ledger::adapter::InMemoryJournal;
use ledger::domain::*;
use ledger::port::Journal;
use std::sync::Arc;

#[tokio::test]
async fn test_duplicate_deduplication_key_returns_existing_event() {
    let journal: Arc<dyn Journal + Send + Sync> = Arc::new(InMemoryJournal::new());

    let dedup_key = DeduplicationKey::new("dispatch:1".to_string());

    let metadata1 = EventMetadata {
        timestamp: chrono::Utc::now(),
        deduplication_key: dedup_key.clone(),
    };

    let envelope1 = journal
        .append(
            AccountEvent::Deposited(Deposited { amount: 100.0 }),
            metadata1,
        )
        .await
        .unwrap();

    let metadata2 = EventMetadata {
        timestamp: chrono::Utc::now(),
        deduplication_key: dedup_key.clone(),
    };

    let envelope2 = journal
        .append(
            // Different amount, but should return original
            AccountEvent::Deposited(Deposited { amount: 200.0 }),
            metadata2,
        )
        .await
        .unwrap();

    assert_eq!(envelope1.sequence_nr, envelope2.sequence_nr);

    match (&envelope1.event, &envelope2.event) {
        (AccountEvent::Deposited(d1), AccountEvent::Deposited(d2)) => {
            assert_eq!(d1.amount, 100.0);
            assert_eq!(d2.amount, 100.0); // Original amount, not 200.0
        }
        _ => panic!("Expected Deposited events"),
    }

    // Journal should only have one event
    let events = journal.replay(None).await.unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn test_distinct_keys_append_distinct_events() {
    let journal: Arc<dyn Journal + Send + Sync> = Arc::new(InMemoryJournal::new());

    for i in 0..3 {
        let metadata = EventMetadata {
            timestamp: chrono::Utc::now(),
            deduplication_key: DeduplicationKey::new(format!("dispatch:{}", i)),
        };
        journal
            .append(AccountEvent::Deposited(Deposited { amount: 10.0 }), metadata)
            .await
            .unwrap();
    }

    let events = journal.replay(None).await.unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(journal.highest_sequence().await.unwrap(), Some(3));
}

#[tokio::test]
async fn test_empty_journal_has_no_highest_sequence() {
    let journal = InMemoryJournal::new();

    assert_eq!(journal.highest_sequence().await.unwrap(), None);
    assert!(journal.replay(None).await.unwrap().is_empty());
}

mod idempotency_tests;

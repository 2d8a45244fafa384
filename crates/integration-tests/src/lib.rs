//! End-to-end tests for the Vista proxy live under `tests/`

//! Integration suite shared by every sink backend. The tests live under `tests/`.

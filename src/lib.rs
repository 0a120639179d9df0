//! Workspace-level integration tests for grkit. See `tests/`.

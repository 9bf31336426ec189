//! Workspace-level integration tests for PolyFFT live in `tests/`.

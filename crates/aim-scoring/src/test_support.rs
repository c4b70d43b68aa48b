//! Shared fixtures for engine tests.

//! Shared test utilities for aim-db.

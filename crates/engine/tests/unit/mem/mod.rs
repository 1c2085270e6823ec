//! Unit tests for the memory models.

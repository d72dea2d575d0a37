//! Tests for domain errors and failure classification

#[cfg(test)]
mod failure_tests;

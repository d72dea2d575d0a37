//! Tests for the response policy

//! Structural checks on the test suite itself

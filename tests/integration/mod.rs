//! Integration tests for directory snapshot capture and comparison

mod exit_codes;
mod snapshot_format;

//! Integration tests for the genjoin executors

mod executor_contract;
mod test_utils;

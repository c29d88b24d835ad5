#![cfg(test)]
//! Cross-module tests: the full solve pipeline on concrete scenarios, and the behavioral
//! properties of the filtering passes (idempotence, order independence, pruning safety).

mod solver;

use chrono::NaiveDate;

pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//! Checksum validation and single-digit repair for ABA routing transit numbers.

pub mod config;
pub mod logging;
pub mod rtn;

pub use rtn::{
    get_missing_digit, get_missing_digit_with, repair, repair_digit, repair_digit_with, repair_with,
    validate, Rtn, RtnError, PLACEHOLDER, RTN_LEN, WEIGHTS,
};

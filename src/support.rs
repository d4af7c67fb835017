//! Supporting utilities used by the photovoltaic models.
//!
//! These modules are public because they're useful to callers building their
//! own front ends, but their APIs are not stable.

pub mod format;
pub mod parse;
pub mod sheet;
pub mod units;

//! 거래소 및 통화 타입.

pub mod exchange;

pub use exchange::{Currency, Exchange};

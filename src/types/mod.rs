//! Core types for Salat

mod method;
mod location;
mod prayer;
mod schedule;
mod error;
mod report;

pub use method::{Method, MethodParams, UnknownMethod};
pub use location::Coordinate;
pub use prayer::{Prayer, symbol_for};
pub use schedule::{Schedule, NextPrayer};
pub use error::PrayerError;
pub use report::Report;

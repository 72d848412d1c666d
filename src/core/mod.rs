//! Core report content

pub mod catalog;

pub use catalog::hotel_billing_report;

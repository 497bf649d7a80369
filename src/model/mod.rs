// src/model/mod.rs
//! Typed domain model for page property payloads.

mod property_value;

pub use property_value::{DateValue, PropertyValue, SelectOption, UserRef};

//! Suggestion rendering for dropdown display and selected values.
//!
//! # Responsibility
//! - Render candidates as two-line, highlighted dropdown markup.
//! - Render selected candidates as canonical one-line strings.
//!
//! # Invariants
//! - Attribute order is fixed: region, area, city, settlement, street, house.
//! - Postal code and country are never part of rendered strings.

pub mod address;
pub mod fullname;

//! Extraction logic for Transfermarkt pages: the selector registry, markup
//! queries, identifier parsing and response shaping. No network code lives
//! in this crate, so everything here is testable against fixture documents.

pub mod clean;
pub mod markup;
pub mod selectors;
pub mod text;
pub mod transfer;
pub mod url;

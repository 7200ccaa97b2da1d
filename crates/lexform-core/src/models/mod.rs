//! Data models for extraction results, form fields, catalog and configuration.

pub mod catalog;
pub mod config;
pub mod field;
pub mod legal_text;
pub mod procedure;

//! telecare: local-first telehealth client core
//!
//! Centralizes the user session, appointment list and health-metric list,
//! synchronizes them with a key-value [`storage::StorageAdapter`], and
//! derives role-scoped views for the presentation layer. All state lives on
//! the device; there is no backend.

pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;

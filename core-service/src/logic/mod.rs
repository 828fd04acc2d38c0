//! Logic Module - Business Logic
//!
//! - `logs/` - Honeypot log records, CSV import, export, reports
//! - `auth/` - Sign-in / sign-up form validation
//! - `settings/` - Settings dialog model
//! - `notify` - Toast notifications as data
//! - `config` - Runtime configuration

pub mod config;
pub mod notify;
pub mod logs;
pub mod auth;
pub mod settings;

//! Back office for a painting contractor.
//!
//! Companies own supervisors, supervisors own properties, and invoices point at all of them
//! (and at contractors) by name rather than by key. The [`records`] services persist those
//! entities through SeaORM, [`directory`] resolves an invoice's string links back to the
//! company tree, and [`reports`] turns invoice lists into receivable, aging, payroll, and
//! sales summaries.

pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod records;
pub mod reports;
pub mod telemetry;

//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod breadcrumb;
pub mod contracts;
pub mod filters;
pub mod footer;
pub mod header;
pub mod kpi;
pub mod logs;
pub mod members;
pub mod modal;
pub mod providers;
pub mod status;
pub mod table;

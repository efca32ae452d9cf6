//! View state for each dashboard page.
//!
//! Views hold loaded records plus their table/filter state. They never perform
//! I/O themselves: [`loader`] runs the fetches and hands back a [`loader::Payload`].

pub mod contracts;
pub mod kpi;
pub mod loader;
pub mod members;
pub mod modals;
pub mod providers;

pub use contracts::ContractsView;
pub use kpi::KpiView;
pub use members::MembersView;
pub use modals::{MemberDetail, Modal, QualityOverview};
pub use providers::ProvidersView;

use crate::network::DataError;

/// Label for the "no selection" entry of every select filter.
pub const ALL_OPTION: &str = "All";

/// Lifecycle of a view's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// Holds the message rendered in place of the view.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(view) => Some(view),
            _ => None,
        }
    }
}

/// `Error loading <thing>: <error>`
pub fn error_message(thing: &str, error: &DataError) -> String {
    format!("Error loading {}: {}", thing, error)
}

/// Advances a select filter to the next option; after the last option it wraps to "all".
pub fn cycle_option(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|option| option == value)
            .and_then(|index| options.get(index + 1))
            .cloned(),
    }
}

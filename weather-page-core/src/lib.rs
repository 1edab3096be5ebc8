//! Core library for the `weather-page` terminal app.
//!
//! This crate defines:
//! - The query/result state machine and the observable slot holding it
//! - The query trigger and the fetch collaborator behind it
//! - The presenter that maps a result onto exactly one render branch
//! - Configuration & credentials handling
//!
//! It is used by `weather-page`, but the presenter and slot know nothing about
//! terminals and can back any other front end.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod localtime;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod query;
pub mod slot;
pub mod trigger;

#[cfg(test)]
mod test_support;

pub use config::{Config, StalePolicy};
pub use error::FetchError;
pub use fetcher::{Fetch, WeatherFetcher};
pub use localtime::LocalTime;
pub use model::{Measure, WeatherSnapshot};
pub use presenter::{Branch, DetailView, render};
pub use provider::{WeatherProvider, provider_from_config};
pub use query::{Query, QueryResult};
pub use slot::{ResultSlot, ResultWatcher, Ticket, result_slot};
pub use trigger::QueryTrigger;

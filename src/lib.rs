//! Static HTML pages for football leagues, generated from the football-data.org API.
//!
//! [`generate`] is the whole pipeline: it fetches the season list, resolves the requested
//! leagues, then fetches teams, fixtures, league tables and squads concurrently and writes
//! one page per resource under the output directory.

pub mod config;
pub mod error;
pub mod generate;
pub mod html;
pub mod layout;
pub mod model;
pub mod orchestrator;
pub mod progress;
pub mod render;
pub mod resolver;
pub mod service;
pub mod site;
pub mod writer;

pub use config::{Config, Selection, Theme};
pub use error::Error;
pub use generate::generate;
pub use model::Kind;
pub use orchestrator::{RunReport, Unit, UnitOutcome};

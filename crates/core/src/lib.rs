//! Portfolio catalog core.
//!
//! Record types, the load-once [`store::RecordStore`], and the query engine
//! the site's views are built from: project filtering and sorting, skill
//! grouping, and gallery resolution. No I/O beyond the initial dataset load,
//! no async.

pub mod contact;
pub mod education;
pub mod error;
pub mod experience;
pub mod filter;
pub mod gallery;
pub mod grouping;
pub mod profile;
pub mod project;
pub mod skill;
pub mod sort;
pub mod stats;
pub mod store;
pub mod types;

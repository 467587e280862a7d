//! Job entity, search filter, bulk insert report, and store contract.

pub mod filter;
pub mod model;
pub mod report;
pub mod store;

pub use filter::JobFilter;
pub use model::{Job, NewJob};
pub use report::BulkInsertReport;
pub use store::JobStore;

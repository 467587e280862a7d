//! Concrete [`offerhub_entity::JobStore`] implementations.

pub mod job;
pub mod memory;

pub use job::PgJobRepository;
pub use memory::InMemoryJobStore;

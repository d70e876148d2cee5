//! Core domain logic for Finvesta loan record keeping.
//! This crate is the single source of truth for record-store invariants.

pub mod calc;
pub mod idgen;
pub mod logging;
pub mod model;
pub mod report;
pub mod seed;
pub mod storage;
pub mod store;

pub use calc::{daily_installment, daily_schedule, CalcError, CalcResult, Installment};
pub use idgen::{ClockIdGenerator, IdGenerator, SequenceIdGenerator};
pub use logging::{default_log_level, init_logging};
pub use model::record::{LoanRecord, RecordCollection, RecordId};
pub use report::{portfolio_summary, PortfolioSummary};
pub use seed::load_seed_file;
pub use storage::{FileStorage, MemoryStorage, StorageError, StoragePort, StorageResult};
pub use store::record_store::RecordStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

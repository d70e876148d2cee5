//! Portfolio reporting over the record collection.
//!
//! # Responsibility
//! - Aggregate the collection into operator-facing portfolio figures.
//!
//! Aggregates are computed on demand from the in-memory collection; nothing
//! here reads or writes storage.

use std::collections::BTreeMap;

use crate::model::record::RecordCollection;

/// Snapshot of portfolio-level figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub record_count: usize,
    /// Sum of all principals, in whole currency units.
    pub total_principal: i64,
    /// Largest single principal, `None` for an empty portfolio.
    pub largest_exposure: Option<i64>,
    /// Principal disbursed per date, ascending by date string.
    pub disbursed_by_date: Vec<(String, i64)>,
}

/// Computes portfolio figures for the whole collection.
pub fn portfolio_summary(records: &RecordCollection) -> PortfolioSummary {
    let mut total_principal = 0i64;
    let mut largest_exposure: Option<i64> = None;
    let mut by_date: BTreeMap<String, i64> = BTreeMap::new();

    for record in records {
        total_principal = total_principal.saturating_add(record.amount);
        largest_exposure = Some(largest_exposure.map_or(record.amount, |m| m.max(record.amount)));
        let date_total = by_date.entry(record.date.clone()).or_insert(0);
        *date_total = date_total.saturating_add(record.amount);
    }

    PortfolioSummary {
        record_count: records.len(),
        total_principal,
        largest_exposure,
        disbursed_by_date: by_date.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::portfolio_summary;
    use crate::model::record::{LoanRecord, RecordCollection};

    #[test]
    fn empty_portfolio_summarizes_to_zeroes() {
        let summary = portfolio_summary(&RecordCollection::new());
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.total_principal, 0);
        assert_eq!(summary.largest_exposure, None);
        assert!(summary.disbursed_by_date.is_empty());
    }

    #[test]
    fn oversized_totals_saturate_instead_of_wrapping() {
        let records = RecordCollection::from_records(vec![
            LoanRecord::new(1, "Asha", i64::MAX, "2026-08-01"),
            LoanRecord::new(2, "Ravi", i64::MAX, "2026-08-01"),
        ]);

        let summary = portfolio_summary(&records);
        assert_eq!(summary.total_principal, i64::MAX);
        assert_eq!(
            summary.disbursed_by_date,
            vec![("2026-08-01".to_string(), i64::MAX)]
        );
    }

    #[test]
    fn summary_totals_and_groups_by_date() {
        let records = RecordCollection::from_records(vec![
            LoanRecord::new(1, "Asha", 5000, "2026-08-01"),
            LoanRecord::new(2, "Ravi", 1000, "2026-08-02"),
            LoanRecord::new(3, "Meena", 7500, "2026-08-01"),
        ]);

        let summary = portfolio_summary(&records);
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.total_principal, 13500);
        assert_eq!(summary.largest_exposure, Some(7500));
        assert_eq!(
            summary.disbursed_by_date,
            vec![
                ("2026-08-01".to_string(), 12500),
                ("2026-08-02".to_string(), 1000),
            ]
        );
    }
}

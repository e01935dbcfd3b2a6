//! Ledger normalization
//!
//! Expands recurring records into concrete dated ledger entries over an
//! explicit date window. Records are validated individually: a bad record
//! is rejected and reported while the rest of the batch still expands.

use tracing::{debug, warn};

use crate::models::record::RecordValidationError;
use crate::models::{DateWindow, LedgerEntry, RecordId, RecurringRecord};

use super::calendar::occurrence_date;

/// Cap on entries emitted per record, truncates pathological windows
const MAX_OCCURRENCES_PER_RECORD: usize = 1024;

/// A record the normalizer refused to expand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub record_id: RecordId,
    pub category: String,
    pub reason: RecordValidationError,
}

impl std::fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.record_id, self.category, self.reason)
    }
}

/// Result of normalizing a batch of records
#[derive(Debug, Clone, Default)]
pub struct NormalizedLedger {
    /// Entries sorted by occurrence date ascending; entries on the same
    /// date keep the input order of their records
    pub entries: Vec<LedgerEntry>,

    /// Records rejected by validation, in input order
    pub rejections: Vec<RejectedRecord>,
}

impl NormalizedLedger {
    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}

/// Expand `records` into dated entries within `window`
///
/// An inverted window (`from` after `to`) yields an empty ledger rather
/// than an error. Occurrence dates are computed by fixed calendar-step
/// addition from each record's start date; see [`super::calendar`].
pub fn normalize(records: &[RecurringRecord], window: DateWindow) -> NormalizedLedger {
    let mut ledger = NormalizedLedger::default();

    if window.is_empty() {
        debug!(%window, "inverted window, nothing to expand");
        return ledger;
    }

    for record in records {
        if let Err(reason) = record.validate() {
            warn!(
                record = %record.id,
                category = %record.category,
                %reason,
                "skipping invalid record"
            );
            ledger.rejections.push(RejectedRecord {
                record_id: record.id,
                category: record.category.clone(),
                reason,
            });
            continue;
        }
        let Some(start) = record.start else {
            continue;
        };

        expand_record(record, start, window, &mut ledger.entries);
    }

    // Stable sort keeps input record order for same-day entries
    ledger.entries.sort_by_key(|entry| entry.occurred_at);

    debug!(
        records = records.len(),
        entries = ledger.entries.len(),
        rejected = ledger.rejections.len(),
        "normalized ledger"
    );

    ledger
}

fn expand_record(
    record: &RecurringRecord,
    start: chrono::NaiveDate,
    window: DateWindow,
    entries: &mut Vec<LedgerEntry>,
) {
    let limit = match record.end {
        Some(end) => end.min(window.to),
        None => window.to,
    };

    let mut emitted = 0usize;
    let mut k: u32 = 0;
    loop {
        let date = occurrence_date(start, record.frequency, k);
        if date > limit {
            break;
        }

        if date >= window.from {
            entries.push(LedgerEntry::new(
                record.id,
                record.kind,
                record.category.clone(),
                record.amount,
                date,
            ));
            emitted += 1;
            if emitted >= MAX_OCCURRENCES_PER_RECORD {
                warn!(
                    record = %record.id,
                    cap = MAX_OCCURRENCES_PER_RECORD,
                    "occurrence cap reached, truncating expansion"
                );
                break;
            }
        }

        if !record.frequency.is_repeating() {
            break;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Frequency, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateWindow {
        DateWindow::new(date(from.0, from.1, from.2), date(to.0, to.1, to.2))
    }

    fn monthly_expense(category: &str, cents: i64, start: NaiveDate) -> RecurringRecord {
        RecurringRecord::new(
            EntryKind::Expense,
            category,
            Money::from_cents(cents),
            Frequency::Monthly,
            start,
        )
    }

    #[test]
    fn test_monthly_expansion_over_quarter() {
        let records = vec![monthly_expense("Food", 10000, date(2024, 1, 15))];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 3, 31)));

        assert!(ledger.rejections.is_empty());
        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 15), date(2024, 2, 15), date(2024, 3, 15)]
        );
        assert!(ledger.entries.iter().all(|e| e.amount.cents() == 10000));
    }

    #[test]
    fn test_month_end_clamping() {
        let records = vec![monthly_expense("Rent", 120000, date(2024, 1, 31))];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 4, 30)));

        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 31),
                date(2024, 2, 29),
                date(2024, 3, 31),
                date(2024, 4, 30),
            ]
        );
    }

    #[test]
    fn test_weekly_expansion() {
        let records = vec![RecurringRecord::new(
            EntryKind::Expense,
            "Groceries",
            Money::from_cents(5000),
            Frequency::Weekly,
            date(2024, 1, 1),
        )];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 1, 31)));

        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 8),
                date(2024, 1, 15),
                date(2024, 1, 22),
                date(2024, 1, 29),
            ]
        );
    }

    #[test]
    fn test_yearly_leap_day_clamping() {
        let records = vec![RecurringRecord::new(
            EntryKind::Expense,
            "Insurance",
            Money::from_cents(30000),
            Frequency::Yearly,
            date(2024, 2, 29),
        )];
        let ledger = normalize(&records, window((2024, 1, 1), (2026, 12, 31)));

        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(
            dates,
            vec![date(2024, 2, 29), date(2025, 2, 28), date(2026, 2, 28)]
        );
    }

    #[test]
    fn test_one_time_record() {
        let records = vec![RecurringRecord::new(
            EntryKind::Income,
            "Bonus",
            Money::from_cents(100000),
            Frequency::OneTime,
            date(2024, 2, 10),
        )];

        let inside = normalize(&records, window((2024, 1, 1), (2024, 3, 31)));
        assert_eq!(inside.entries.len(), 1);
        assert_eq!(inside.entries[0].occurred_at, date(2024, 2, 10));

        let outside = normalize(&records, window((2024, 3, 1), (2024, 3, 31)));
        assert!(outside.entries.is_empty());
    }

    #[test]
    fn test_end_date_bounds_expansion() {
        let records =
            vec![monthly_expense("Food", 10000, date(2024, 1, 15)).with_end(date(2024, 2, 20))];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 12, 31)));

        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(dates, vec![date(2024, 1, 15), date(2024, 2, 15)]);
    }

    #[test]
    fn test_record_outside_window() {
        // Ended before the window opens
        let ended =
            vec![monthly_expense("Old", 1000, date(2023, 1, 1)).with_end(date(2023, 6, 1))];
        assert!(normalize(&ended, window((2024, 1, 1), (2024, 12, 31)))
            .entries
            .is_empty());

        // Starts after the window closes
        let future = vec![monthly_expense("Future", 1000, date(2025, 6, 1))];
        assert!(normalize(&future, window((2024, 1, 1), (2024, 12, 31)))
            .entries
            .is_empty());
    }

    #[test]
    fn test_start_before_window_keeps_anchor() {
        // Anchored on the 10th since late 2023; only in-window dates emitted
        let records = vec![monthly_expense("Gym", 4000, date(2023, 11, 10))];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 2, 28)));

        let dates: Vec<_> = ledger.entries.iter().map(|e| e.occurred_at).collect();
        assert_eq!(dates, vec![date(2024, 1, 10), date(2024, 2, 10)]);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let records = vec![
            monthly_expense("OnFrom", 1000, date(2024, 1, 1)),
            monthly_expense("OnTo", 1000, date(2024, 1, 31)),
        ];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 1, 31)));
        assert_eq!(ledger.entries.len(), 2);
    }

    #[test]
    fn test_invalid_records_rejected_individually() {
        let good = monthly_expense("Food", 10000, date(2024, 1, 15));
        let zero_amount = monthly_expense("Broken", 0, date(2024, 1, 1));
        let mut no_start = monthly_expense("NoStart", 5000, date(2024, 1, 1));
        no_start.start = None;
        let inverted =
            monthly_expense("Inverted", 5000, date(2024, 3, 1)).with_end(date(2024, 2, 1));

        let records = vec![zero_amount.clone(), good.clone(), no_start, inverted];
        let ledger = normalize(&records, window((2024, 1, 1), (2024, 3, 31)));

        // The valid record still expanded
        assert_eq!(ledger.entries.len(), 3);
        assert!(ledger.entries.iter().all(|e| e.record_id == good.id));

        assert!(ledger.has_rejections());
        assert_eq!(ledger.rejections.len(), 3);
        assert_eq!(ledger.rejections[0].record_id, zero_amount.id);
        assert!(matches!(
            ledger.rejections[0].reason,
            RecordValidationError::NonPositiveAmount { .. }
        ));
        assert_eq!(ledger.rejections[1].reason, RecordValidationError::MissingStart);
        assert!(matches!(
            ledger.rejections[2].reason,
            RecordValidationError::EndBeforeStart { .. }
        ));
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let records = vec![monthly_expense("Food", 10000, date(2024, 1, 15))];
        let ledger = normalize(&records, window((2024, 3, 1), (2024, 1, 1)));
        assert!(ledger.entries.is_empty());
        assert!(ledger.rejections.is_empty());
    }

    #[test]
    fn test_output_sorted_with_stable_ties() {
        // Both records hit the 15th; the later-listed record must sort after
        // the earlier one on those days
        let first = monthly_expense("First", 1000, date(2024, 1, 15));
        let second = monthly_expense("Second", 2000, date(2024, 1, 15));
        let records = vec![first.clone(), second.clone()];

        let ledger = normalize(&records, window((2024, 1, 1), (2024, 2, 28)));
        assert_eq!(ledger.entries.len(), 4);

        let mut sorted = ledger.entries.clone();
        sorted.sort_by_key(|e| e.occurred_at);
        assert_eq!(ledger.entries, sorted);

        assert_eq!(ledger.entries[0].record_id, first.id);
        assert_eq!(ledger.entries[1].record_id, second.id);
        assert_eq!(ledger.entries[2].record_id, first.id);
        assert_eq!(ledger.entries[3].record_id, second.id);
    }
}

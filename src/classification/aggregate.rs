//! Report aggregation over classified shift records.
//!
//! Aggregates are views: they are recomputed from the full current record
//! set on every call, never updated incrementally, so deletes and
//! re-imports can never leave stale totals behind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::ShiftRecord;

use super::classify::{classify, ExtraHours};

/// Summed premium-hour credits for one worker in one department.
///
/// # Example
///
/// ```
/// use turnos_engine::classification::WorkerAggregate;
///
/// let row = WorkerAggregate {
///     department: "UCI".to_string(),
///     worker_name: "Maria Lopez".to_string(),
///     night_hours: 8,
///     sunday_hours: 16,
///     holiday_hours: 8,
///     total_extra_hours: 32,
/// };
/// assert_eq!(
///     row.total_extra_hours,
///     row.night_hours + row.sunday_hours + row.holiday_hours
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAggregate {
    /// The department the credits were earned in.
    pub department: String,
    /// The worker's name as stored on the records.
    pub worker_name: String,
    /// Summed night-shift credits.
    pub night_hours: u32,
    /// Summed Sunday credits.
    pub sunday_hours: u32,
    /// Summed holiday credits.
    pub holiday_hours: u32,
    /// Sum of the three category columns.
    pub total_extra_hours: u32,
}

/// Summed premium-hour credits for one department across all its workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAggregate {
    /// The department the credits were earned in.
    pub department: String,
    /// Summed night-shift credits.
    pub night_hours: u32,
    /// Summed Sunday credits.
    pub sunday_hours: u32,
    /// Summed holiday credits.
    pub holiday_hours: u32,
    /// Sum of the three category columns.
    pub total_extra_hours: u32,
}

/// Aggregates records into one row per (department, worker) pair.
///
/// The grouping key is the exact department and worker-name strings as
/// stored; name normalization is an ingestion concern, not a reporting one.
/// Rows come out sorted by department, then worker name, so a given record
/// set always produces the same output.
///
/// # Errors
///
/// Propagates the first calendar failure; a missing holiday table is a
/// whole-report fault, not a per-record degrade.
pub fn aggregate_by_worker(
    records: &[ShiftRecord],
    calendar: &dyn HolidayCalendar,
    region: &str,
) -> EngineResult<Vec<WorkerAggregate>> {
    let mut groups: BTreeMap<(String, String), ExtraHours> = BTreeMap::new();

    for record in records {
        let hours = classify(record, calendar, region)?;
        let entry = groups
            .entry((record.department.clone(), record.worker_name.clone()))
            .or_default();
        entry.night_hours += hours.night_hours;
        entry.sunday_hours += hours.sunday_hours;
        entry.holiday_hours += hours.holiday_hours;
    }

    Ok(groups
        .into_iter()
        .map(|((department, worker_name), hours)| WorkerAggregate {
            department,
            worker_name,
            night_hours: hours.night_hours,
            sunday_hours: hours.sunday_hours,
            holiday_hours: hours.holiday_hours,
            total_extra_hours: hours.total(),
        })
        .collect())
}

/// Aggregates records into one row per department.
///
/// Same sums as [`aggregate_by_worker`], keyed by department only; rows
/// come out sorted by department.
///
/// # Errors
///
/// Propagates the first calendar failure.
pub fn aggregate_by_department(
    records: &[ShiftRecord],
    calendar: &dyn HolidayCalendar,
    region: &str,
) -> EngineResult<Vec<DepartmentAggregate>> {
    let mut groups: BTreeMap<String, ExtraHours> = BTreeMap::new();

    for record in records {
        let hours = classify(record, calendar, region)?;
        let entry = groups.entry(record.department.clone()).or_default();
        entry.night_hours += hours.night_hours;
        entry.sunday_hours += hours.sunday_hours;
        entry.holiday_hours += hours.holiday_hours;
    }

    Ok(groups
        .into_iter()
        .map(|(department, hours)| DepartmentAggregate {
            department,
            night_hours: hours.night_hours,
            sunday_hours: hours.sunday_hours,
            holiday_hours: hours.holiday_hours,
            total_extra_hours: hours.total(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayTable, REGION_COLOMBIA};
    use crate::error::EngineError;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(worker: &str, department: &str, date_str: &str, shift_type: &str) -> ShiftRecord {
        ShiftRecord {
            worker_name: worker.to_string(),
            department: department.to_string(),
            date: make_date(date_str),
            shift_type: shift_type.to_string(),
            note: String::new(),
        }
    }

    fn calendar() -> HolidayTable {
        HolidayTable::colombia(2024..=2024).expect("supported years")
    }

    #[test]
    fn test_single_worker_consolidation() {
        // The register month for one ICU worker:
        // - 2024-01-07 is a Sunday, worked as a night shift
        // - 2024-01-01 is Año Nuevo, declared Festivo
        // - 2024-01-15 is a plain Monday, declared Dominical
        let records = vec![
            make_record("Maria Lopez", "UCI", "2024-01-07", "Nocturno"),
            make_record("Maria Lopez", "UCI", "2024-01-01", "Festivo"),
            make_record("Maria Lopez", "UCI", "2024-01-15", "Dominical"),
        ];

        let rows = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            WorkerAggregate {
                department: "UCI".to_string(),
                worker_name: "Maria Lopez".to_string(),
                night_hours: 8,
                sunday_hours: 16,
                holiday_hours: 8,
                total_extra_hours: 32,
            }
        );
    }

    #[test]
    fn test_rows_sorted_by_department_then_worker() {
        let records = vec![
            make_record("Pedro Ruiz", "Urgencias", "2024-01-16", "Nocturno"),
            make_record("Ana Gomez", "Urgencias", "2024-01-16", "Nocturno"),
            make_record("Maria Lopez", "Farmacia", "2024-01-16", "Nocturno"),
        ];

        let rows = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA).unwrap();

        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.department.as_str(), r.worker_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Farmacia", "Maria Lopez"),
                ("Urgencias", "Ana Gomez"),
                ("Urgencias", "Pedro Ruiz"),
            ]
        );
    }

    #[test]
    fn test_grouping_uses_exact_strings() {
        // Name normalization is an ingestion concern; "ana gomez" and
        // "Ana Gomez" stay separate rows here.
        let records = vec![
            make_record("Ana Gomez", "Urgencias", "2024-01-16", "Nocturno"),
            make_record("ana gomez", "Urgencias", "2024-01-17", "Nocturno"),
        ];

        let rows = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_same_worker_in_two_departments_gets_two_rows() {
        let records = vec![
            make_record("Ana Gomez", "Urgencias", "2024-01-16", "Nocturno"),
            make_record("Ana Gomez", "UCI", "2024-01-17", "Nocturno"),
        ];

        let rows = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.night_hours == 8));
    }

    #[test]
    fn test_department_summary_sums_across_workers() {
        let records = vec![
            make_record("Ana Gomez", "Urgencias", "2024-01-07", "Nocturno"),
            make_record("Pedro Ruiz", "Urgencias", "2024-01-01", "Festivo"),
            make_record("Maria Lopez", "UCI", "2024-01-16", "Nocturno"),
        ];

        let rows = aggregate_by_department(&records, &calendar(), REGION_COLOMBIA).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            DepartmentAggregate {
                department: "UCI".to_string(),
                night_hours: 8,
                sunday_hours: 0,
                holiday_hours: 0,
                total_extra_hours: 8,
            }
        );
        assert_eq!(
            rows[1],
            DepartmentAggregate {
                department: "Urgencias".to_string(),
                night_hours: 8,
                sunday_hours: 8,
                holiday_hours: 8,
                total_extra_hours: 24,
            }
        );
    }

    #[test]
    fn test_unrecognized_records_contribute_zero_rows_still_appear() {
        let records = vec![make_record("Ana Gomez", "Urgencias", "2024-01-16", "Tarde")];

        let rows = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_extra_hours, 0);
    }

    #[test]
    fn test_empty_record_set_yields_empty_report() {
        let rows = aggregate_by_worker(&[], &calendar(), REGION_COLOMBIA).unwrap();
        assert!(rows.is_empty());

        let rows = aggregate_by_department(&[], &calendar(), REGION_COLOMBIA).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let records = vec![
            make_record("Ana Gomez", "Urgencias", "2024-01-07", "Nocturno"),
            make_record("Pedro Ruiz", "UCI", "2024-01-01", "Festivo"),
        ];
        let cal = calendar();

        let first = aggregate_by_worker(&records, &cal, REGION_COLOMBIA).unwrap();
        let second = aggregate_by_worker(&records, &cal, REGION_COLOMBIA).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_calendar_failure_aborts_whole_report() {
        let records = vec![
            make_record("Ana Gomez", "Urgencias", "2024-01-16", "Nocturno"),
            make_record("Pedro Ruiz", "Urgencias", "2030-01-16", "Nocturno"),
        ];

        let result = aggregate_by_worker(&records, &calendar(), REGION_COLOMBIA);
        assert!(matches!(
            result,
            Err(EngineError::CalendarUnavailable { year: 2030, .. })
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn record_strategy() -> impl Strategy<Value = ShiftRecord> {
            let workers = prop::sample::select(vec![
                "Ana Gomez",
                "Maria Lopez",
                "Pedro Ruiz",
                "Luisa Diaz",
            ]);
            let departments =
                prop::sample::select(vec!["Urgencias", "UCI", "Farmacia", "Pediatría"]);
            let shift_types =
                prop::sample::select(vec!["Nocturno", "Dominical", "Festivo", "Tarde"]);

            (workers, departments, 0u32..365, shift_types).prop_map(
                |(worker, department, day_offset, shift_type)| ShiftRecord {
                    worker_name: worker.to_string(),
                    department: department.to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                        + chrono::Duration::days(i64::from(day_offset)),
                    shift_type: shift_type.to_string(),
                    note: String::new(),
                },
            )
        }

        proptest! {
            #[test]
            fn aggregation_is_order_independent(
                (records, shuffled) in prop::collection::vec(record_strategy(), 0..40)
                    .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            ) {
                let cal = calendar();

                let original = aggregate_by_worker(&records, &cal, REGION_COLOMBIA).unwrap();
                let after = aggregate_by_worker(&shuffled, &cal, REGION_COLOMBIA).unwrap();
                prop_assert_eq!(original, after);
            }

            #[test]
            fn totals_equal_sum_of_columns(
                records in prop::collection::vec(record_strategy(), 0..40),
            ) {
                let cal = calendar();

                for row in aggregate_by_worker(&records, &cal, REGION_COLOMBIA).unwrap() {
                    prop_assert_eq!(
                        row.total_extra_hours,
                        row.night_hours + row.sunday_hours + row.holiday_hours
                    );
                }
                for row in aggregate_by_department(&records, &cal, REGION_COLOMBIA).unwrap() {
                    prop_assert_eq!(
                        row.total_extra_hours,
                        row.night_hours + row.sunday_hours + row.holiday_hours
                    );
                }
            }

            #[test]
            fn department_totals_match_worker_totals(
                records in prop::collection::vec(record_strategy(), 0..40),
            ) {
                let cal = calendar();

                let by_worker = aggregate_by_worker(&records, &cal, REGION_COLOMBIA).unwrap();
                let by_department =
                    aggregate_by_department(&records, &cal, REGION_COLOMBIA).unwrap();

                for dept_row in &by_department {
                    let from_workers: u32 = by_worker
                        .iter()
                        .filter(|w| w.department == dept_row.department)
                        .map(|w| w.total_extra_hours)
                        .sum();
                    prop_assert_eq!(dept_row.total_extra_hours, from_workers);
                }
            }
        }
    }
}

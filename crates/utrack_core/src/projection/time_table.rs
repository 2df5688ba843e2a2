//! Minutes-spent table.

use crate::model::activity::ActivityRef;
use crate::projection::group_by_activity_type;
use serde::Serialize;

/// One row of the minutes-spent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeTableRow {
    pub activity_type: String,
    pub entries: usize,
    /// Widened so any number of accepted durations sums without overflow.
    pub total_minutes: u128,
    /// `total_minutes / entries`, rounded half up.
    pub average_minutes: u64,
}

/// Builds one row per activity type.
pub fn time_table(records: &[ActivityRef]) -> Vec<TimeTableRow> {
    group_by_activity_type(records)
        .into_iter()
        .map(|group| {
            let entries = group.records.len();
            let total_minutes = group
                .records
                .iter()
                .map(|record| u128::from(record.duration_minutes()))
                .sum::<u128>();
            TimeTableRow {
                activity_type: group.activity_type.to_string(),
                entries,
                total_minutes,
                average_minutes: rounded_average(total_minutes, entries as u64),
            }
        })
        .collect()
}

fn rounded_average(total: u128, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let count = u128::from(count);
    // remainder < count <= u64::MAX, so doubling it stays in range.
    let remainder = total % count;
    let average = total / count + u128::from(remainder * 2 >= count);
    // The mean never exceeds the largest single duration.
    u64::try_from(average).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::rounded_average;

    #[test]
    fn rounded_average_rounds_half_up() {
        assert_eq!(rounded_average(5, 2), 3);
        assert_eq!(rounded_average(4, 3), 1);
        assert_eq!(rounded_average(5, 3), 2);
        assert_eq!(rounded_average(0, 4), 0);
        assert_eq!(rounded_average(7, 0), 0);
    }

    #[test]
    fn rounded_average_handles_totals_beyond_u64() {
        let max = u128::from(u64::MAX);
        assert_eq!(rounded_average(max * 3, 3), u64::MAX);
        assert_eq!(rounded_average(max + 1, 2), 1 << 63);
    }
}

use crate::model::{DailyDelta, DailyRecord, Deficit, ReportError, Result, Trend};

/// Day-over-day differences between consecutive records.
/// Fewer than two records produce an empty sequence.
pub fn compute_deltas(records: &[DailyRecord]) -> Result<Vec<DailyDelta>> {
    records
        .windows(2)
        .map(|w| {
            let (previous, current) = (w[0], w[1]);
            current
                .value
                .checked_sub(previous.value)
                .map(|amount| DailyDelta {
                    day: current.day,
                    amount,
                })
                .ok_or(ReportError::Overflow { day: current.day })
        })
        .collect()
}

/// An empty or all-zero sequence is `Fluctuating`.
pub fn classify(deltas: &[DailyDelta]) -> Trend {
    if deltas.is_empty() {
        Trend::Fluctuating
    } else if deltas.iter().all(|d| d.amount > 0) {
        Trend::Increasing
    } else if deltas.iter().all(|d| d.amount < 0) {
        Trend::Decreasing
    } else {
        Trend::Fluctuating
    }
}

/// Negative deltas as magnitudes, ordered by day.
pub fn deficits(deltas: &[DailyDelta]) -> Vec<Deficit> {
    let mut deficits: Vec<Deficit> = deltas
        .iter()
        .filter(|d| d.amount < 0)
        .map(|d| Deficit {
            day: d.day,
            amount: d.amount.unsigned_abs(),
        })
        .collect();
    deficits.sort_by_key(|d| d.day);
    deficits
}

/// Up to `n` largest deficits. Equal magnitudes keep their day order.
pub fn top_deficits(deficits: &[Deficit], n: usize) -> Vec<Deficit> {
    let mut ranked = deficits.to_vec();
    ranked.sort_by_key(|d| d.day);
    // sort_by is stable, so ties stay in day order
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[(i64, i64)]) -> Vec<DailyRecord> {
        values
            .iter()
            .map(|&(day, value)| DailyRecord { day, value })
            .collect()
    }

    fn delta(day: i64, amount: i64) -> DailyDelta {
        DailyDelta { day, amount }
    }

    #[test]
    fn deltas_are_attributed_to_later_day() {
        let deltas = compute_deltas(&records(&[(1, 1000), (2, 1100), (3, 1050), (4, 1200)])).unwrap();
        assert_eq!(deltas, vec![delta(2, 100), delta(3, -50), delta(4, 150)]);
    }

    #[test]
    fn short_inputs_have_no_deltas() {
        assert!(compute_deltas(&[]).unwrap().is_empty());
        assert!(compute_deltas(&records(&[(1, 5)])).unwrap().is_empty());
    }

    #[test]
    fn overflow_is_reported() {
        let err = compute_deltas(&records(&[(1, i64::MIN), (2, i64::MAX)])).unwrap_err();
        assert!(matches!(err, ReportError::Overflow { day: 2 }));
    }

    #[test]
    fn classification() {
        assert_eq!(classify(&[delta(2, 1), delta(3, 4)]), Trend::Increasing);
        assert_eq!(classify(&[delta(2, -1), delta(3, -4)]), Trend::Decreasing);
        assert_eq!(classify(&[delta(2, 1), delta(3, -4)]), Trend::Fluctuating);
        assert_eq!(classify(&[delta(2, 0), delta(3, 0)]), Trend::Fluctuating);
        assert_eq!(classify(&[delta(2, 3), delta(3, 0)]), Trend::Fluctuating);
        assert_eq!(classify(&[]), Trend::Fluctuating);
    }

    #[test]
    fn ties_rank_by_day() {
        let deltas = [delta(2, 5), delta(3, -3), delta(4, 2), delta(5, -3)];
        let found = deficits(&deltas);
        assert_eq!(
            found,
            vec![Deficit { day: 3, amount: 3 }, Deficit { day: 5, amount: 3 }]
        );
        let top = top_deficits(&found, 3);
        assert_eq!(top[0].day, 3);
        assert_eq!(top[1].day, 5);
    }

    #[test]
    fn top_deficits_limits_and_orders() {
        let found = [
            Deficit { day: 2, amount: 10 },
            Deficit { day: 4, amount: 40 },
            Deficit { day: 6, amount: 20 },
            Deficit { day: 8, amount: 40 },
            Deficit { day: 9, amount: 5 },
        ];
        let days: Vec<i64> = top_deficits(&found, 3).iter().map(|d| d.day).collect();
        assert_eq!(days, vec![4, 8, 6]);
        assert!(top_deficits(&[], 3).is_empty());
    }
}

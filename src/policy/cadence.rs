//! Minimum interval between consecutive alerts

use chrono::{DateTime, Utc};

use crate::policy::rules::CheckFrequency;

/// Whole calendar days from `from` to `to`, on UTC dates
///
/// 23:59 to 00:01 the next day counts as one day; the time of day is ignored.
/// Negative when `to` is on an earlier date than `from`.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Decide whether an alert may be shown now
///
/// In order:
/// 1. `Immediately` always proceeds.
/// 2. A pending forced check (the user chose "next time") proceeds; the caller
///    clears the flag once it acts on the decision.
/// 3. No previous check proceeds.
/// 4. Otherwise proceeds once the elapsed calendar days reach the frequency.
pub fn should_check_now(
    last_check: Option<DateTime<Utc>>,
    frequency: CheckFrequency,
    pending_forced_check: bool,
    now: DateTime<Utc>,
) -> bool {
    let days = match frequency {
        CheckFrequency::Immediately => return true,
        CheckFrequency::Days(days) => days,
    };

    if pending_forced_check {
        return true;
    }

    let Some(last_check) = last_check else {
        return true;
    };

    days_between(last_check, now) >= i64::from(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(), 0)]
    #[case(Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 0).unwrap(), 1)]
    #[case(Utc.with_ymd_and_hms(2024, 3, 14, 12, 30, 0).unwrap(), 1)] // under 24h, still a day
    #[case(Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap(), 7)]
    #[case(Utc.with_ymd_and_hms(2024, 3, 16, 1, 0, 0).unwrap(), -1)]
    fn days_between_counts_calendar_days(#[case] from: DateTime<Utc>, #[case] expected: i64) {
        assert_eq!(days_between(from, now()), expected);
    }

    #[test]
    fn daily_frequency_checked_today_does_not_proceed() {
        assert!(!should_check_now(
            Some(now()),
            CheckFrequency::DAILY,
            false,
            now()
        ));
    }

    #[test]
    fn daily_frequency_checked_two_days_ago_proceeds() {
        assert!(should_check_now(
            Some(now() - Duration::days(2)),
            CheckFrequency::DAILY,
            false,
            now()
        ));
    }

    #[test]
    fn immediately_proceeds_right_after_a_check() {
        assert!(should_check_now(
            Some(now()),
            CheckFrequency::Immediately,
            false,
            now()
        ));
    }

    #[test]
    fn pending_forced_check_overrides_frequency() {
        assert!(should_check_now(
            Some(now()),
            CheckFrequency::WEEKLY,
            true,
            now()
        ));
    }

    #[test]
    fn first_check_proceeds() {
        assert!(should_check_now(None, CheckFrequency::WEEKLY, false, now()));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(6, false)]
    #[case(7, true)]
    #[case(30, true)]
    fn weekly_frequency_proceeds_once_seven_days_elapsed(
        #[case] days_ago: i64,
        #[case] expected: bool,
    ) {
        assert_eq!(
            should_check_now(
                Some(now() - Duration::days(days_ago)),
                CheckFrequency::WEEKLY,
                false,
                now()
            ),
            expected
        );
    }

    #[test]
    fn last_check_in_the_future_does_not_proceed() {
        assert!(!should_check_now(
            Some(now() + Duration::days(3)),
            CheckFrequency::Days(2),
            false,
            now()
        ));
    }
}

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often a bill or recurring transaction repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
    #[default]
    Once,
}

impl Frequency {
    /// Maps a loose metadata tag to a frequency, falling back to [`Frequency::Once`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("daily") => Frequency::Daily,
            Some("weekly") => Frequency::Weekly,
            Some("biweekly" | "bi-weekly" | "fortnightly") => Frequency::Biweekly,
            Some("monthly") => Frequency::Monthly,
            Some("quarterly") => Frequency::Quarterly,
            Some("yearly" | "annually" | "annual") => Frequency::Yearly,
            _ => Frequency::Once,
        }
    }

    pub fn is_repeating(self) -> bool {
        !matches!(self, Frequency::Once)
    }

    /// Multiplier turning one occurrence into a monthly equivalent.
    pub fn monthly_factor(self) -> f64 {
        match self {
            Frequency::Daily => 365.0 / 12.0,
            Frequency::Weekly => 52.0 / 12.0,
            Frequency::Biweekly => 26.0 / 12.0,
            Frequency::Monthly => 1.0,
            Frequency::Quarterly => 1.0 / 3.0,
            Frequency::Yearly => 1.0 / 12.0,
            Frequency::Once => 0.0,
        }
    }

    /// Next occurrence after `from`. One-off items return `from` unchanged.
    pub fn next_date(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::Biweekly => from + Duration::weeks(2),
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Quarterly => shift_month(from, 3),
            Frequency::Yearly => shift_month(from, 12),
            Frequency::Once => from,
        }
    }

    /// Fixed period length, `None` for one-off items.
    fn period(self) -> Option<Period> {
        match self {
            Frequency::Daily => Some(Period::Days(1)),
            Frequency::Weekly => Some(Period::Days(7)),
            Frequency::Biweekly => Some(Period::Days(14)),
            Frequency::Monthly => Some(Period::Months(1)),
            Frequency::Quarterly => Some(Period::Months(3)),
            Frequency::Yearly => Some(Period::Months(12)),
            Frequency::Once => None,
        }
    }

    /// First occurrence of the `anchor` cadence on or after `reference`.
    ///
    /// One-off items and anchors already in the future are returned as is.
    /// Month-based cadences count from the anchor, so a day-31 anchor lands on
    /// the 31st whenever the target month has one.
    pub fn roll_forward(self, anchor: NaiveDate, reference: NaiveDate) -> NaiveDate {
        let Some(period) = self.period() else {
            return anchor;
        };
        if anchor >= reference {
            return anchor;
        }
        match period {
            Period::Days(days) => {
                let elapsed = (reference - anchor).num_days();
                let periods = (elapsed + days - 1) / days;
                anchor
                    .checked_add_signed(Duration::days(periods * days))
                    .unwrap_or(reference)
            }
            Period::Months(months) => {
                let periods = months_between(anchor, reference).max(0) / months;
                let date = shift_month(anchor, periods * months);
                if date >= reference {
                    date
                } else {
                    shift_month(anchor, (periods + 1) * months)
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every 2 Weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
            Frequency::Once => "One-time",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
enum Period {
    Days(i64),
    Months(i32),
}

/// Shifts by whole months, clamping the day to the target month length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Whole calendar months from `from` to `to`, negative when `to` is earlier.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}

/// `YYYY-MM` key used to match budgets against the current month.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_loose_tags() {
        assert_eq!(Frequency::from_tag(Some("Monthly")), Frequency::Monthly);
        assert_eq!(Frequency::from_tag(Some("bi-weekly")), Frequency::Biweekly);
        assert_eq!(Frequency::from_tag(Some("annually")), Frequency::Yearly);
        assert_eq!(Frequency::from_tag(Some("whenever")), Frequency::Once);
        assert_eq!(Frequency::from_tag(None), Frequency::Once);
    }

    #[test]
    fn month_shift_clamps_to_month_end() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2023, 11, 30), 3), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 15), -3), date(2023, 12, 15));
        assert_eq!(Frequency::Yearly.next_date(date(2024, 2, 29)), date(2025, 2, 28));
    }

    #[test]
    fn roll_forward_reaches_reference() {
        let rolled = Frequency::Monthly.roll_forward(date(2024, 1, 5), date(2024, 4, 10));
        assert_eq!(rolled, date(2024, 5, 5));
        let weekly = Frequency::Weekly.roll_forward(date(2024, 4, 3), date(2024, 4, 10));
        assert_eq!(weekly, date(2024, 4, 10));
        let once = Frequency::Once.roll_forward(date(2024, 1, 5), date(2024, 4, 10));
        assert_eq!(once, date(2024, 1, 5));
    }

    #[test]
    fn roll_forward_handles_distant_anchors() {
        let today = date(2024, 5, 15);
        assert_eq!(Frequency::Daily.roll_forward(date(2010, 1, 1), today), today);
        assert_eq!(Frequency::Daily.roll_forward(date(1900, 3, 1), today), today);
        // 2010-01-01 was a Friday, so was 2024-05-17
        assert_eq!(Frequency::Weekly.roll_forward(date(2010, 1, 1), today), date(2024, 5, 17));
        let biweekly = Frequency::Biweekly.roll_forward(date(2010, 1, 1), today);
        assert!(biweekly >= today && (biweekly - today).num_days() < 14);
        assert_eq!((biweekly - date(2010, 1, 1)).num_days() % 14, 0);
        assert_eq!(Frequency::Yearly.roll_forward(date(1950, 6, 1), today), date(2024, 6, 1));
        assert_eq!(Frequency::Quarterly.roll_forward(date(2000, 2, 15), today), date(2024, 5, 15));
    }

    #[test]
    fn monthly_roll_forward_keeps_anchor_day() {
        let anchor = date(2023, 1, 31);
        assert_eq!(Frequency::Monthly.roll_forward(anchor, date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(Frequency::Monthly.roll_forward(anchor, date(2024, 3, 1)), date(2024, 3, 31));
        assert_eq!(Frequency::Monthly.roll_forward(anchor, date(2024, 3, 31)), date(2024, 3, 31));
        assert_eq!(Frequency::Monthly.roll_forward(anchor, date(2024, 4, 1)), date(2024, 4, 30));
    }

    #[test]
    fn months_between_counts_whole_months() {
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 7, 15)), 6);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 7, 14)), 5);
        assert_eq!(months_between(date(2024, 7, 15), date(2024, 1, 15)), -6);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 1, 30)), 0);
    }

    #[test]
    fn monthly_factor_matches_cadence() {
        assert_eq!(Frequency::Monthly.monthly_factor(), 1.0);
        assert!((Frequency::Weekly.monthly_factor() * 12.0 - 52.0).abs() < 1e-9);
        assert_eq!(Frequency::Once.monthly_factor(), 0.0);
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(month_key(date(2024, 3, 9)), "2024-03");
        assert!(same_month(date(2024, 3, 1), date(2024, 3, 31)));
        assert!(!same_month(date(2024, 3, 1), date(2023, 3, 1)));
    }
}

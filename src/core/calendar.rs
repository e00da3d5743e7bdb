use crate::domain::model::{
    DayStatus, HolidaySet, Issue, ReportRow, HOLIDAY_LABEL, SATURDAY_LABEL, SUNDAY_LABEL,
};
use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Capitalized month names used in the output file name.
pub const SPANISH_MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// First-to-last day span of one calendar month, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Period {
    pub fn current() -> Self {
        Self::for_month(Local::now().date_naive())
    }

    pub fn for_month(today: NaiveDate) -> Self {
        // Day 1 and the computed last day always exist for a valid date.
        let first = today.with_day(1).unwrap();
        let last = today
            .with_day(month_last_day(today.year(), today.month()))
            .unwrap();
        Self { first, last }
    }

    /// Display form `DD/MM/YYYY-DD/MM/YYYY`.
    pub fn label(&self) -> String {
        format!("{}-{}", format_day(self.first), format_day(self.last))
    }

    pub fn month_name(&self) -> &'static str {
        SPANISH_MONTHS[(self.first.month() - 1) as usize]
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }
}

fn month_last_day(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap {
                29
            } else {
                28
            }
        }
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses an ISO date, truncating datetime values to their calendar day.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Holiday,
    Saturday,
    Sunday,
    Workday,
}

/// The holiday check runs before the weekday check: a holiday falling on a
/// Saturday or Sunday is FESTIVO, not SÁBADO/DOMINGO.
pub fn classify_day(date: NaiveDate, holidays: &HolidaySet) -> DayKind {
    if holidays.contains(date) {
        return DayKind::Holiday;
    }
    match date.weekday() {
        Weekday::Sat => DayKind::Saturday,
        Weekday::Sun => DayKind::Sunday,
        _ => DayKind::Workday,
    }
}

/// Expands an issue into one row per calendar day from its registration date
/// to its due date, inclusive.
///
/// Returns `None` when either date is missing or unparseable (the issue is
/// skipped). A registration date after the due date yields `Some` with zero
/// rows. The issue closes on the due date unless that day is a holiday or a
/// weekend, in which case the day-off label masks the closing row.
pub fn expand_issue(issue: &Issue, holidays: &HolidaySet) -> Option<Vec<ReportRow>> {
    let registered_on = parse_day(issue.fields.registered_on.as_deref()?)?;
    let due = parse_day(issue.fields.duedate.as_deref()?)?;

    let mut rows = Vec::new();
    let mut day = registered_on;
    while day <= due {
        let row = match classify_day(day, holidays) {
            DayKind::Holiday => ReportRow::DayOff {
                date: day,
                label: HOLIDAY_LABEL,
            },
            DayKind::Saturday => ReportRow::DayOff {
                date: day,
                label: SATURDAY_LABEL,
            },
            DayKind::Sunday => ReportRow::DayOff {
                date: day,
                label: SUNDAY_LABEL,
            },
            DayKind::Workday => ReportRow::Activity {
                date: day,
                case_id: issue.case_id(),
                registered_on,
                subject: issue.subject().to_string(),
                status: if day == due {
                    DayStatus::Closed { solved_on: due }
                } else {
                    DayStatus::Open
                },
            },
        };
        rows.push(row);

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Some(rows)
}

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// Category label written on every activity row.
pub const CATEGORY: &str = "Web/movil";
/// Specialist group label written on every activity row.
pub const SPECIALIST_GROUP: &str = "Desarrolladores";

pub const HOLIDAY_LABEL: &str = "FESTIVO";
pub const SATURDAY_LABEL: &str = "SÁBADO";
pub const SUNDAY_LABEL: &str = "DOMINGO";

pub const STATUS_OPEN: &str = "Abierto";
pub const STATUS_CLOSED: &str = "Cerrado";

/// First page of a Jira search response. Only the issue list is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    pub summary: Option<String>,
    pub duedate: Option<String>,
    /// "Start date" custom field; marks the first day of the reporting range.
    #[serde(rename = "customfield_10015")]
    pub registered_on: Option<String>,
    /// Case id custom field. Jira serves custom fields untyped, so this may
    /// arrive as a string or a number.
    #[serde(rename = "customfield_10034")]
    pub case_id: Option<serde_json::Value>,
}

impl Issue {
    pub fn case_id(&self) -> String {
        match &self.fields.case_id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn subject(&self) -> &str {
        self.fields.summary.as_deref().unwrap_or("")
    }
}

/// One entry of the public holiday API response.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicHoliday {
    pub date: String,
    #[serde(rename = "localName")]
    pub local_name: Option<String>,
}

/// Public holiday dates for one year. Empty when the lookup failed.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Open/closed state of an activity row. An issue closes on its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Open,
    Closed { solved_on: NaiveDate },
}

/// One spreadsheet row per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    /// Holiday or weekend day; only the date and the label are rendered.
    DayOff {
        date: NaiveDate,
        label: &'static str,
    },
    /// Ordinary workday inside an issue's range.
    Activity {
        date: NaiveDate,
        case_id: String,
        registered_on: NaiveDate,
        subject: String,
        status: DayStatus,
    },
}

impl ReportRow {
    pub fn date(&self) -> NaiveDate {
        match self {
            ReportRow::DayOff { date, .. } => *date,
            ReportRow::Activity { date, .. } => *date,
        }
    }
}

/// Output of the extract stage: the issue page plus the holiday calendar.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub issues: Vec<Issue>,
    pub holidays: HolidaySet,
}

/// Output of the transform stage: the expanded day rows.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub rows: Vec<ReportRow>,
    pub skipped_issues: usize,
}

use crate::core::calendar::{expand_issue, parse_day, Period};
use crate::core::excel::{build_workbook, report_file_name};
use crate::core::{ConfigProvider, Extraction, HolidaySet, Pipeline, ReportData, Storage};
use crate::domain::model::{Issue, PublicHoliday, SearchResponse};
use crate::utils::error::Result;
use chrono::Datelike;
use reqwest::Client;

/// Field projection requested from the search API.
pub const SEARCH_FIELDS: &str =
    "summary,status,assignee,created,updated,duedate,customfield_10015,customfield_10034";

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
    period: Period,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_period(storage, config, Period::current())
    }

    pub fn with_period(storage: S, config: C, period: Period) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
            period,
        }
    }

    fn jql(&self) -> String {
        format!(
            "project = \"{}\" AND assignee = currentUser() AND duedate >= {} AND duedate <= {}",
            self.config.project(),
            self.period.first,
            self.period.last
        )
    }

    /// Best-effort holiday lookup: any failure degrades to an empty set and
    /// the pipeline continues with weekend-only classification.
    async fn fetch_holidays(&self) -> HolidaySet {
        let year = self.period.first.year();
        let url = format!(
            "{}/api/v3/PublicHolidays/{}/{}",
            self.config.holiday_api_base().trim_end_matches('/'),
            year,
            self.config.country_code()
        );

        match self.request_holidays(&url).await {
            Ok(holidays) => {
                tracing::debug!("Loaded {} public holidays for {}", holidays.len(), year);
                holidays
            }
            Err(e) => {
                tracing::warn!("Could not load public holidays, continuing without them: {}", e);
                HolidaySet::empty()
            }
        }
    }

    async fn request_holidays(&self, url: &str) -> Result<HolidaySet> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let holidays: Vec<PublicHoliday> = response.json().await?;
        Ok(holidays.iter().filter_map(|h| parse_day(&h.date)).collect())
    }

    async fn search_issues(&self) -> Result<Vec<Issue>> {
        let url = format!(
            "{}/rest/api/3/search",
            self.config.jira_base_url().trim_end_matches('/')
        );
        let jql = self.jql();
        let max_results = self.config.max_results().to_string();
        tracing::debug!("Searching issues: {}", jql);

        let response = self
            .client
            .get(&url)
            .basic_auth(self.config.jira_email(), Some(self.config.api_token()))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("jql", jql.as_str()),
                ("maxResults", max_results.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?
            .error_for_status()?;

        let search: SearchResponse = response.json().await?;
        let mut issues = search.issues;
        // The server is not asked to sort; order the page by due date here.
        issues.sort_by(|a, b| a.fields.duedate.cmp(&b.fields.duedate));
        Ok(issues)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Extraction> {
        let holidays = self.fetch_holidays().await;
        let issues = self.search_issues().await?;
        Ok(Extraction { issues, holidays })
    }

    async fn transform(&self, data: Extraction) -> Result<ReportData> {
        let mut rows = Vec::new();
        let mut skipped_issues = 0usize;

        for issue in &data.issues {
            match expand_issue(issue, &data.holidays) {
                Some(issue_rows) => {
                    tracing::debug!("Issue {} expanded into {} day rows", issue.key, issue_rows.len());
                    rows.extend(issue_rows);
                }
                None => {
                    tracing::debug!(
                        "Skipping issue {}: missing or unparseable start/due date",
                        issue.key
                    );
                    skipped_issues += 1;
                }
            }
        }

        Ok(ReportData {
            rows,
            skipped_issues,
        })
    }

    async fn load(&self, report: ReportData) -> Result<String> {
        let file_name = report_file_name(self.config.worker_name(), &self.period);
        let buffer = build_workbook(self.config.worker_name(), &self.period, &report.rows)?;

        tracing::debug!("Writing workbook ({} bytes) to storage", buffer.len());
        self.storage.write_file(&file_name, &buffer).await?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}

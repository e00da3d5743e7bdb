pub mod storage;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "jira-activity-report")]
#[command(about = "Exports a monthly activity spreadsheet from Jira issues")]
pub struct CliConfig {
    /// Jira Cloud base URL.
    #[arg(long, default_value = "https://desarrollosica.atlassian.net")]
    pub jira_base_url: String,

    /// Account email for basic auth against the search API.
    #[arg(long, default_value = "jhonalejoo@gmail.com")]
    pub jira_email: String,

    /// API token for basic auth. Deliberately not validated up front; a
    /// missing token surfaces as an auth failure from the search request.
    #[arg(long, env = "API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    /// Project whose issues feed the report.
    #[arg(long, default_value = "ScrumSica")]
    pub project: String,

    /// Worker name shown in the sheet and embedded in the file name.
    #[arg(long, default_value = "Jhon Alejandro Cuervo Sanchez")]
    pub worker_name: String,

    /// Base URL of the public holiday API.
    #[arg(long, default_value = "https://date.nager.at")]
    pub holiday_api_base: String,

    /// Country code for the public holiday lookup.
    #[arg(long, default_value = "CO")]
    pub country_code: String,

    /// Result cap for the search request; only the first page is read.
    #[arg(long, default_value = "100")]
    pub max_results: u32,

    /// Directory the spreadsheet is written into.
    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("jira_base_url", &self.jira_base_url)?;
        validate_url("holiday_api_base", &self.holiday_api_base)?;
        validate_non_empty_string("jira_email", &self.jira_email)?;
        validate_non_empty_string("project", &self.project)?;
        validate_non_empty_string("worker_name", &self.worker_name)?;
        validate_non_empty_string("country_code", &self.country_code)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn jira_base_url(&self) -> &str {
        &self.jira_base_url
    }

    fn jira_email(&self) -> &str {
        &self.jira_email
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn project(&self) -> &str {
        &self.project
    }

    fn worker_name(&self) -> &str {
        &self.worker_name
    }

    fn holiday_api_base(&self) -> &str {
        &self.holiday_api_base
    }

    fn country_code(&self) -> &str {
        &self.country_code
    }

    fn max_results(&self) -> u32 {
        self.max_results
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["jira-activity-report"])
    }

    #[test]
    fn default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_token_passes_validation() {
        // Token absence must surface as an API auth failure, not here.
        let config = base_config();
        assert_eq!(config.api_token, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_urls_are_rejected() {
        let mut config = base_config();
        config.jira_base_url = "ftp://desarrollosica.atlassian.net".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.holiday_api_base = "no-es-una-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_worker_name_is_rejected() {
        let mut config = base_config();
        config.worker_name = "   ".to_string();
        assert!(config.validate().is_err());
    }
}

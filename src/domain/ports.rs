use crate::domain::model::{Extraction, ReportData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn jira_base_url(&self) -> &str;
    fn jira_email(&self) -> &str;
    fn api_token(&self) -> &str;
    fn project(&self) -> &str;
    fn worker_name(&self) -> &str;
    fn holiday_api_base(&self) -> &str;
    fn country_code(&self) -> &str;
    fn max_results(&self) -> u32;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Extraction>;
    async fn transform(&self, data: Extraction) -> Result<ReportData>;
    async fn load(&self, report: ReportData) -> Result<String>;
}

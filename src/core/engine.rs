use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the full report: fetch, expand into day rows, write the sheet.
    /// Any error aborts before the save step, so no partial file is produced.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching issues and public holidays");
        let extraction = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} issues ({} public holidays known)",
            extraction.issues.len(),
            extraction.holidays.len()
        );

        let report = self.pipeline.transform(extraction).await?;
        if report.skipped_issues > 0 {
            tracing::warn!(
                "{} issues skipped for missing or invalid dates",
                report.skipped_issues
            );
        }
        tracing::info!("Expanded into {} report rows", report.rows.len());

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report written to {}", output_path);

        Ok(output_path)
    }
}

use clap::Parser;
use jira_activity_report::utils::{logger, validation::Validate};
use jira_activity_report::{CliConfig, LocalStorage, ReportEngine, ReportPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting jira-activity-report");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Archivo Excel generado correctamente: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Report generation failed: {}", e);
            eprintln!("❌ Error al consultar Jira o generar Excel: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

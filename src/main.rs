use anyhow::Context;
use clap::Parser;
use cpf_check::utils::logger;
use cpf_check::{CliConfig, Cpf, RunConfig, ValidationReport};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置，日誌尚未初始化所以直接輸出到 stderr
    let config = match RunConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.json_logs() {
        logger::init_json_logger(config.verbose(), config.log_level());
    } else {
        logger::init_cli_logger(config.verbose(), config.log_level());
    }

    tracing::info!("Starting cpf-check");
    tracing::debug!("Run config: {:?}", config);

    let cpf = match Cpf::new(config.cpf()) {
        Ok(cpf) => cpf,
        Err(e) => {
            tracing::debug!("CPF rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let report = ValidationReport::from_cpf(&cpf);
    let rendered = report
        .render(&config)
        .context("failed to render validation report")?;
    println!("{}", rendered);

    tracing::info!(cpf = %cpf, valid = cpf.is_valid(), "Validation finished");

    if !cpf.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

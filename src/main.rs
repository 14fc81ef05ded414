use clap::Parser;
use currency_exchange::utils::error::ErrorSeverity;
use currency_exchange::utils::logger;
use currency_exchange::utils::validation::Validate;
use currency_exchange::{
    Amount, CliConfig, CurrencyCode, ExchangeEngine, ExchangeOutcome, FxError, ReqwestTransport,
    ServiceClient, ServiceConfig, TomlConfig,
};

fn load_config(cli: &CliConfig) -> Result<ServiceConfig, FxError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.into_service_config()?
        }
        None => ServiceConfig::from_env()?,
    };

    Ok(match &cli.endpoint {
        Some(endpoint) => {
            tracing::info!("Endpoint overridden to: {}", endpoint);
            let config = config.with_endpoint(endpoint.clone());
            config.validate()?;
            config
        }
        None => config,
    })
}

fn exit_with(e: &FxError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    // Missing key ends the run here, before any request is made.
    let config = load_config(&cli).unwrap_or_else(|e| exit_with(&e));
    tracing::debug!("Service config: {:?}", config);

    let src = CurrencyCode::new(cli.src.clone()).unwrap_or_else(|e| exit_with(&e));
    let dst = CurrencyCode::new(cli.dst.clone()).unwrap_or_else(|e| exit_with(&e));
    let amount = Amount::new(cli.amount).unwrap_or_else(|e| exit_with(&e));

    let client = ServiceClient::new(ReqwestTransport::new(), config);
    let engine = ExchangeEngine::new(client);

    if cli.check {
        let mut all_valid = true;
        for code in [&src, &dst] {
            let valid = engine
                .is_valid_currency(code)
                .await
                .unwrap_or_else(|e| exit_with(&e));
            println!("{}: {}", code, if valid { "valid" } else { "invalid" });
            all_valid &= valid;
        }
        if !all_valid {
            std::process::exit(2);
        }
        return Ok(());
    }

    let report = engine
        .report(src, dst, amount)
        .await
        .unwrap_or_else(|e| exit_with(&e));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if let ExchangeOutcome::Rejected { .. } = report.outcome {
        std::process::exit(2);
    }

    Ok(())
}

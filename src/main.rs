use clap::Parser;
use design_matcher::adapters;
use design_matcher::app::report::{render, render_options};
use design_matcher::config::{CliConfig, Command};
use design_matcher::utils::error::{ErrorSeverity, MatchError};
use design_matcher::utils::{logger, validation::Validate};
use design_matcher::{Axis, MatchEngine, RecommenderConfig, Result};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let mut config = match &cli.config {
        Some(path) => match RecommenderConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => RecommenderConfig::default(),
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting design-matcher");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 應用命令列覆蓋設定
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
        config.catalog.url = None;
        tracing::info!("🔧 Catalog path overridden to: {}", path);
    }
    if let Some(url) = &cli.catalog_url {
        config.catalog.url = Some(url.clone());
        config.catalog.path = None;
        tracing::info!("🔧 Catalog URL overridden to: {}", url);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    match run(cli.command, &config).await {
        Ok(output) => print!("{}", output),
        Err(e) => exit_with(&e),
    }
}

async fn load_engine(config: &RecommenderConfig) -> Result<MatchEngine> {
    let timeout = config.catalog.timeout_seconds.map(Duration::from_secs);
    let source = adapters::source_for(&config.catalog_location(), timeout)?;
    MatchEngine::load(source.as_ref(), config.recommender()).await
}

async fn run(command: Command, config: &RecommenderConfig) -> Result<String> {
    let labels = config.label_book();

    match command {
        Command::Recommend { answers, format } => {
            let engine = load_engine(config).await?;
            let recommendation = engine.run(&answers.into())?;
            render(&recommendation, format, &labels)
        }
        Command::Options { format } => {
            let engine = load_engine(config).await?;
            render_options(&engine.options(), format, &labels)
        }
        Command::Label { axis, key } => {
            let axis = Axis::parse(&axis).ok_or_else(|| MatchError::InvalidConfigValueError {
                field: "axis".to_string(),
                value: axis.clone(),
                reason: "Valid axes: industry, goal, style, level".to_string(),
            })?;
            Ok(format!("{}\n", labels.format(axis, &key)))
        }
    }
}

fn exit_with(e: &MatchError) -> ! {
    tracing::error!(
        "❌ design-matcher failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

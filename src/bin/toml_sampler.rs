use anyhow::Context;
use clap::Parser;
use grid_sampler::config::toml_config::TomlConfig;
use grid_sampler::core::ConfigProvider;
use grid_sampler::utils::{logger, validation::Validate};
use grid_sampler::{DecimalRange, GridPipeline, LocalStorage, SamplerEngine};

#[derive(Parser)]
#[command(name = "toml-sampler")]
#[command(about = "Grid sample generator with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sampler-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Emit logs as JSON for batch runs
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show what would be generated without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based grid sampler");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No file will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = GridPipeline::new(storage, config);

    let engine = SamplerEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Sample generation completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Sample generation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Sample generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                grid_sampler::utils::error::ErrorSeverity::Low => 0,
                grid_sampler::utils::error::ErrorSeverity::Medium => 2,
                grid_sampler::utils::error::ErrorSeverity::High => 1,
                grid_sampler::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!(
        "  Grid: start={}, stop={}, increment={}",
        config.start(),
        config.stop(),
        config.increment()
    );
    println!("  Output: {}/{}", config.output_path(), config.filename());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    let samples = DecimalRange::new(config.start(), config.stop(), config.increment()).count();

    println!("📐 Grid Analysis:");
    println!("  Axis samples: {}", samples);
    println!("  Grid points: {}", samples * samples);
    println!("  Output lines: {} (1 header + {} rows)", samples + 1, samples);

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Filename: {}", config.filename());

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}

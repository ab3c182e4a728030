#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nightrelcalc::{
    compute, config, io, parse_decimal_hours, Defaults, ResultRenderer, ScenarioRequest,
    TextReport,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Calcul des journées de travail autour d'une release de nuit (CLI ou web)
#[derive(Parser, Debug)]
#[command(name = "nightrelcalc", author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Début de la release (HH:MM)
    #[arg(long)]
    start: Option<String>,

    /// Durée de la release en heures (ex. 4, 3.5)
    #[arg(long, value_parser = parse_hours)]
    length: Option<f64>,

    /// Heures de release comptées dans la journée pleine (optionnel)
    #[arg(long, value_parser = parse_hours, allow_negative_numbers = true)]
    combine: Option<f64>,

    /// Journée pleine en heures (0 = dérivée de normal-start/normal-end)
    #[arg(long, value_parser = parse_hours, default_value_t = 0.0)]
    full: f64,

    /// Début de journée normale (HH:MM, défaut 09:00)
    #[arg(long)]
    normal_start: Option<String>,

    /// Fin de journée normale (HH:MM, défaut 17:30)
    #[arg(long)]
    normal_end: Option<String>,

    /// Repos minimal après la release, en heures (défaut 11)
    #[arg(long, value_parser = parse_hours)]
    min_rest: Option<f64>,

    /// Plafond légal d'heures sup, en heures (défaut 4)
    #[arg(long, value_parser = parse_hours, allow_negative_numbers = true)]
    max_overtime: Option<f64>,

    /// Fichier JSON de valeurs par défaut
    #[arg(long)]
    config: Option<String>,

    /// Sert le formulaire web sur ce port (feature `web`)
    #[arg(long, env = "NIGHTRELCALC_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// Format de sortie
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Export JSON du résultat
    #[arg(long)]
    out_json: Option<String>,

    /// Export CSV des scénarios
    #[arg(long)]
    out_csv: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_hours(s: &str) -> Result<f64, String> {
    parse_decimal_hours(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => config::load_defaults_from_file(path)?,
        None => Defaults::default(),
    };
    // flag > fichier > défaut intégré
    let defaults = Defaults {
        normal_start: cli.normal_start.clone().unwrap_or(base.normal_start),
        normal_end: cli.normal_end.clone().unwrap_or(base.normal_end),
        min_rest_hours: cli.min_rest.unwrap_or(base.min_rest_hours),
        max_overtime_hours: cli.max_overtime.unwrap_or(base.max_overtime_hours),
        ..base
    };

    if let Some(port) = cli.port {
        return serve(port, defaults);
    }

    let start = cli
        .start
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .context("--start is required (or use --port)")?;
    let length = cli
        .length
        .filter(|h| *h > 0.0)
        .context("--length must be > 0")?;

    let mut request = ScenarioRequest::with_defaults(start, length, &defaults).full_day(cli.full);
    if let Some(hours) = cli.combine {
        request = request.combine(hours);
    }
    let result = compute(&request)?;

    match cli.format {
        OutputFormat::Text => print!("{}", TextReport.render(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    if let Some(path) = &cli.out_json {
        io::export_result_json(path, &result)?;
    }
    if let Some(path) = &cli.out_csv {
        io::export_scenarios_csv(path, &result)?;
    }
    Ok(())
}

#[cfg(feature = "web")]
fn serve(port: u16, defaults: Defaults) -> Result<()> {
    use nightrelcalc::web::{self, AppState};

    let _ = Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(web::serve(port, AppState::new(defaults)))
}

#[cfg(not(feature = "web"))]
fn serve(_port: u16, _defaults: Defaults) -> Result<()> {
    anyhow::bail!("--port requires a build with `--features web`")
}

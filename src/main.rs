use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum_prometheus::PrometheusMetricLayer;
use billwatch::compliance::{Bill, BillComplianceView, DashboardStats};
use billwatch::config::AppConfig;
use billwatch::error::AppError;
use billwatch::router::{dashboard_router, AppState};
use billwatch::telemetry;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "billwatch",
    about = "Serve and inspect legislative committee compliance classifications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a bill snapshot file and print the dashboard view
    Classify(ClassifyArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// JSON file holding an array of bill evidence records
    #[arg(long)]
    bills: PathBuf,
    /// Print every requirement for every bill, not just the counts
    #[arg(long)]
    detailed: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Classify(args) => run_classify(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        default_interval: config.dashboard.default_interval,
    };

    let app = dashboard_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "compliance dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.bills)?;
    let bills: Vec<Bill> = serde_json::from_str(&raw)?;

    let views: Vec<BillComplianceView> = bills.iter().map(BillComplianceView::for_bill).collect();
    render_classification(&views, args.detailed);

    let stats = DashboardStats::from_bills(&bills);
    render_stats(&stats);

    Ok(())
}

fn render_classification(views: &[BillComplianceView], detailed: bool) {
    println!("Bill compliance ({} bills)", views.len());
    for view in views {
        println!(
            "- {} [{}] {}/{} requirements met",
            view.bill_id, view.state_label, view.progress.met_count, view.progress.total_count
        );
        if detailed {
            for (key, requirement) in view.progress.entries() {
                let mark = if requirement.met { "met" } else { "unmet" };
                println!("    {key}: {} ({mark})", requirement.label);
            }
        }
    }
}

fn render_stats(stats: &DashboardStats) {
    println!("\nRecomputed totals");
    println!("- compliant: {}", stats.compliant_bills);
    println!("- non-compliant: {}", stats.non_compliant_bills);
    println!(
        "- unresolved: {} ({} provisional, {} monitoring)",
        stats.unresolved_bills, stats.provisional_bills, stats.monitoring_bills
    );
    println!("- compliance rate: {:.2}%", stats.compliance_rate);
}

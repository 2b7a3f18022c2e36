use crate::infra::load_service;
use bridge17::config::AppConfig;
use bridge17::error::AppError;
use bridge17::telemetry;
use bridge17::workflows::partnership::{
    EcosystemOverview, EvaluationResult, FilterSelection, NgoId, RankingView,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// State (region) to rank NGOs for
    #[arg(long)]
    pub(crate) state: String,
    /// Development-goal category, e.g. "SDG 4 – Quality Education"
    #[arg(long)]
    pub(crate) category: String,
    /// Directory holding ngos/csr/suppliers exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print the full evaluation results as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Include each component's reasoning under every row
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Registry id of the NGO to explain
    #[arg(long)]
    pub(crate) ngo_id: String,
    /// Directory holding ngos/csr/suppliers exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct OverviewArgs {
    /// Directory holding ngos/csr/suppliers exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        state,
        category,
        data_dir,
        json,
        explain,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = load_service(&config, data_dir)?;

    let filter = FilterSelection::new(state, category);
    let results = service.rank(&filter);

    if json {
        print_json(&results)?;
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "No NGOs found for {} / {}.",
            filter.state, filter.category
        );
        return Ok(());
    }

    println!(
        "Ranked partnership recommendations for {} / {}",
        filter.state, filter.category
    );
    for (row, result) in RankingView::from_results(&results).iter().zip(&results) {
        println!(
            "{:>2}. {} | score {} | {} | CSR ₹{} | supplier {}",
            row.rank, row.ngo, row.final_score, row.risk_level, row.csr_available, row.supplier
        );
        if explain {
            render_reasoning(result);
        }
    }

    Ok(())
}

pub(crate) fn run_explain(args: ExplainArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = load_service(&config, args.data_dir)?;

    let explanation = service.explain(&NgoId(args.ngo_id))?;
    let ngo = &explanation.ngo;

    println!("{} ({})", ngo.name, ngo.id);
    println!("- State: {}", ngo.state);
    println!("- Category: {}", ngo.category);
    println!("- Certified: {}", ngo.certified);
    println!("- Trustee contact: {}", ngo.trustee_contact);
    if !ngo.about.is_empty() {
        println!("- About: {}", ngo.about);
    }
    println!("Final score {}", explanation.evaluation.final_score);
    render_reasoning(&explanation.evaluation);

    Ok(())
}

pub(crate) fn run_overview(args: OverviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = load_service(&config, args.data_dir)?;

    render_overview(&service.overview());
    Ok(())
}

fn render_reasoning(result: &EvaluationResult) {
    println!(
        "    - NGO ({:.3}): {}",
        result.trust.score, result.trust.reasoning
    );
    println!("    - CSR ({:.3}): {}", result.csr.score, result.csr.reasoning);
    println!(
        "    - Supplier ({:.3}): {}",
        result.supplier.score, result.supplier.reasoning
    );
}

fn render_overview(overview: &EcosystemOverview) {
    println!("Ecosystem overview");
    println!("- Total NGOs: {}", overview.total_ngos);
    match overview.average_trust {
        Some(average) => println!("- Average trust score: {average}"),
        None => println!("- Average trust score: n/a"),
    }
    println!("NGOs by state:");
    for (state, count) in &overview.ngos_by_state {
        println!("  - {state}: {count}");
    }
    println!("NGOs by category:");
    for (category, count) in &overview.ngos_by_category {
        println!("  - {category}: {count}");
    }
}

fn print_json(results: &[EvaluationResult]) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(results).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

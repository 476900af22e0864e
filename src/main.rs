use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use smart_choice::config::EngineConfig;
use smart_choice::logging::{Logger, generate_session_id, init_logger};
use smart_choice::model::budget::BudgetRange;
use smart_choice::model::interest::Interests;
use smart_choice::model::offer::Offer;
use smart_choice::model::summary::ComparisonSummary;
use smart_choice::render::{render_text, write_csv};
use smart_choice::{Result, SmartChoiceError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    /// 需要 serde feature
    Json,
}

/// 在 Amazon、Flipkart、Meesho 三个平台之间比价并给出 smart score
#[derive(Debug, Parser)]
#[command(name = "smart_choice", version)]
struct Cli {
    /// 商品名，例如 laptop、kurta、fridge
    #[arg(default_value = "shampoo")]
    query: String,

    /// 购物兴趣，可重复：hairfall, budget, premium, electronics,
    /// fashion, home, gaming, general
    #[arg(short, long = "interest", default_values_t = vec!["budget".to_string()])]
    interests: Vec<String>,

    /// 不选任何兴趣
    #[arg(long, conflicts_with = "interests")]
    no_interests: bool,

    /// 预算档位：<500, 500-5000, 5000-20000, >20000
    #[arg(short, long, default_value = "<500", allow_hyphen_values = true)]
    budget: String,

    /// 配置文件路径，缺省时尝试 ./config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// 固定随机种子，结果可复现
    #[arg(long)]
    seed: Option<u64>,

    /// JSON 格式日志
    #[arg(long)]
    log_json: bool,
}

fn selected_interests(cli: &Cli) -> Result<Interests> {
    if cli.no_interests {
        return Ok(Interests::new());
    }
    Interests::parse(&cli.interests)
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;
    let engine = config.engine();

    let interests = selected_interests(&cli)?;
    let budget = BudgetRange::from_label(&cli.budget);

    let offers = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.compute_offers(&cli.query, &interests, budget, &mut rng)
        }
        None => engine.compute_offers(&cli.query, &interests, budget, &mut rand::thread_rng()),
    };

    let summary = ComparisonSummary::from_offers(&offers, config.top_pick)
        .ok_or_else(|| SmartChoiceError::InvalidInput("no offers produced".to_string()))?;

    let logger = Logger::new(generate_session_id());
    logger.log_search(&cli.query, &interests, budget, &offers, Some(&summary));

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&offers, &summary)),
        OutputFormat::Csv => write_csv(std::io::stdout().lock(), &offers)?,
        OutputFormat::Json => print_json(&offers, &summary)?,
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(offers: &[Offer], summary: &ComparisonSummary) -> Result<()> {
    println!("{}", smart_choice::render::render_json(offers, summary)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_offers: &[Offer], _summary: &ComparisonSummary) -> Result<()> {
    Err(SmartChoiceError::InvalidInput(
        "json output requires the `serde` feature".to_string(),
    ))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.log_json) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

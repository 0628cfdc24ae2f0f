use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_ai::{self_play, AiConfig, Algorithm};
use ttt_bench::{compare, BenchConfig};
use ttt_rules::{Board, Role};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ttt_bench=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => BenchConfig::default(),
    };

    let board = config.parse_board().context("parsing board")?;
    println!("Board:\n{}", board);

    let report = compare(&config).context("running comparison")?;
    println!("{}", report.render_table());
    if !report.agree() {
        warn!("algorithms disagree on the best move");
    }
    println!("{}", report.to_json()?);

    if config.self_play {
        let ai = AiConfig::new(Algorithm::AlphaBeta, config.context());
        let record = self_play(ai, Board::empty(), Role::Minimizer).context("self-play")?;
        info!("self-play finished: {:?} after {} moves", record.outcome, record.moves.len());
        println!("{}", record.to_json()?);
    }

    Ok(())
}

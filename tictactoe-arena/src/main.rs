//! 井字棋机机对战
//!
//! 运行方式:
//! ```bash
//! cargo run -p tictactoe-arena -- arena.json
//! ```

mod config;

use std::path::PathBuf;

use anyhow::Result;
use tictactoe_ai::{play_series, AiEngine};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ArenaConfig;

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tictactoe_arena=info".parse()?)
            .add_directive("tictactoe_ai=info".parse()?))
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("加载配置: {}", path.display());
            ArenaConfig::load(&path)?
        }
        None => ArenaConfig::default(),
    };

    let mut engine = AiEngine::from_config(config.engine_config());
    info!(
        "开始对战: {} (先手) vs {} (后手)，{} 局，种子 {}",
        config.first,
        config.second,
        config.games,
        engine.seed()
    );

    let stats = play_series(&mut engine, config.first, config.second, config.games)?;

    info!(
        "先手胜 {}，后手胜 {}，和 {}",
        stats.first_wins, stats.second_wins, stats.draws
    );
    let table = engine.table_stats();
    if table.lookups > 0 {
        info!(
            "置换表: {} 条，命中率 {:.1}%",
            table.entries,
            table.hit_rate * 100.0
        );
    }

    Ok(())
}

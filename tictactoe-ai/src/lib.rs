//! 井字棋 AI 引擎
//!
//! 包含:
//! - 简单难度：均匀随机
//! - 中等难度：赢棋 / 堵棋 / 加权随机
//! - 困难难度：完整 Minimax，可选置换表
//! - 可注入、可复现的随机数源
//! - 机机对战统计

mod arena;
mod config;
mod engine;
mod heuristic;
mod random;
mod rng;
mod search;
mod transposition;

pub use arena::{play_game, play_series, GameRecord, MatchStats};
pub use config::{
    AiConfig, PositionWeights, CENTER_WEIGHT, CORNER_WEIGHT, EDGE_WEIGHT,
    HEURISTIC_NOISE_PROBABILITY,
};
pub use engine::AiEngine;
pub use heuristic::{find_winning_move, heuristic_move, weighted_pool};
pub use random::random_move;
pub use rng::EngineRng;
pub use search::{Minimax, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use transposition::{TTStats, TranspositionTable};

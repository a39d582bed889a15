//! 中等难度
//!
//! 依次尝试：
//! 1. 己方一步成三
//! 2. 堵住对方一步成三
//! 3. 按噪声概率直接随机
//! 4. 按位置权重加权随机（中心 > 角 > 边）

use rand::Rng;
use tictactoe_core::{Board, Outcome, OutcomeEvaluator, Player, Result, CENTER, CORNERS, EDGES};
use tracing::trace;

use crate::config::{AiConfig, PositionWeights};
use crate::random::choose_uniform;

/// 选择中等难度的落子，不修改传入的棋盘
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    engine_player: Player,
    opponent_player: Player,
    config: &AiConfig,
    rng: &mut R,
) -> Result<usize> {
    let moves = board.legal_moves();
    let mut scratch = *board;

    if let Some(mv) = find_winning_move(&mut scratch, engine_player, &moves)? {
        trace!("heuristic: winning move {}", mv);
        return Ok(mv);
    }

    if let Some(mv) = find_winning_move(&mut scratch, opponent_player, &moves)? {
        trace!("heuristic: blocking move {}", mv);
        return Ok(mv);
    }

    if rng.gen::<f64>() < config.noise_probability {
        trace!("heuristic: noise move");
        return choose_uniform(&moves, rng);
    }

    let pool = weighted_pool(&moves, &config.weights);
    if pool.is_empty() {
        return choose_uniform(&moves, rng);
    }
    trace!("heuristic: weighted pool of {}", pool.len());
    choose_uniform(&pool, rng)
}

/// 找到 `player` 一步即可获胜的格子（按索引升序取第一个）
///
/// 试探落子全部撤销后才返回。
pub fn find_winning_move(
    board: &mut Board,
    player: Player,
    moves: &[usize],
) -> Result<Option<usize>> {
    for &mv in moves {
        board.place(mv, player)?;
        let outcome = OutcomeEvaluator::evaluate(board);
        board.unplace(mv)?;

        if outcome == Outcome::Win(player) {
            return Ok(Some(mv));
        }
    }
    Ok(None)
}

/// 按权重重复放入候选池
pub fn weighted_pool(moves: &[usize], weights: &PositionWeights) -> Vec<usize> {
    let mut pool = Vec::new();
    for &mv in moves {
        let weight = if mv == CENTER {
            weights.center
        } else if CORNERS.contains(&mv) {
            weights.corner
        } else if EDGES.contains(&mv) {
            weights.edge
        } else {
            0
        };
        pool.extend(std::iter::repeat(mv).take(weight));
    }
    pool
}

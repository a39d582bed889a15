//! 机机对战
//!
//! 用同一个引擎为双方选子，驱动 `GameSession` 直到终局，统计胜负。

use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Difficulty, GameSession, Outcome, Player, Result};
use tracing::{debug, info};

use crate::engine::AiEngine;

/// 一局的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub final_board: Board,
}

/// 胜负统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl MatchStats {
    /// 记录一局结果
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Player::First) => self.first_wins += 1,
            Outcome::Win(Player::Second) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// 指定一方的负局数
    pub fn losses(&self, player: Player) -> usize {
        match player {
            Player::First => self.second_wins,
            Player::Second => self.first_wins,
        }
    }
}

/// 下完一局
pub fn play_game<R: Rng>(
    engine: &mut AiEngine<R>,
    first: Difficulty,
    second: Difficulty,
) -> Result<GameRecord> {
    let mut session = GameSession::new(None);
    let mut outcome = Outcome::Ongoing;

    while !session.is_over() {
        let difficulty = match session.current_player() {
            Player::First => first,
            Player::Second => second,
        };
        outcome = engine.play_turn_with(&mut session, difficulty)?;
    }

    debug!("对局结束: {:?}，落子 {:?}", outcome, session.moves());
    Ok(GameRecord {
        moves: session.moves().to_vec(),
        outcome,
        final_board: *session.board(),
    })
}

/// 连续下 `games` 局
pub fn play_series<R: Rng>(
    engine: &mut AiEngine<R>,
    first: Difficulty,
    second: Difficulty,
    games: usize,
) -> Result<MatchStats> {
    let mut stats = MatchStats::default();
    for _ in 0..games {
        let record = play_game(engine, first, second)?;
        stats.record(record.outcome);
    }

    info!(
        "{} vs {}: {} 局，先手胜 {}，后手胜 {}，和 {}",
        first, second, stats.games, stats.first_wins, stats.second_wins, stats.draws
    );
    Ok(stats)
}

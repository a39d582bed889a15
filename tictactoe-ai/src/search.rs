//! 搜索引擎
//!
//! 完整 minimax：AI 一方取最大，对手一方取最小。
//! 搜索在独占的棋盘上落子再撤销，每个分支返回前棋盘必须完全复原。

use tictactoe_core::{Board, GameError, Outcome, OutcomeEvaluator, Player, Result};

use crate::transposition::TranspositionTable;

/// AI 获胜的分数
pub const WIN_SCORE: i32 = 1;

/// AI 失败的分数
pub const LOSS_SCORE: i32 = -1;

/// 和棋分数
pub const DRAW_SCORE: i32 = 0;

/// Minimax 搜索
pub struct Minimax<'a> {
    engine_player: Player,
    opponent_player: Player,
    table: Option<&'a mut TranspositionTable>,
    nodes_searched: u64,
}

impl<'a> Minimax<'a> {
    pub fn new(engine_player: Player, opponent_player: Player) -> Self {
        Self {
            engine_player,
            opponent_player,
            table: None,
            nodes_searched: 0,
        }
    }

    /// 使用置换表缓存局面分数
    pub fn with_table(mut self, table: &'a mut TranspositionTable) -> Self {
        self.table = Some(table);
        self
    }

    /// 搜索最佳落子
    ///
    /// 分数相同时取索引最小的落子。
    pub fn best_move(&mut self, board: &mut Board) -> Result<usize> {
        let mut best: Option<(usize, i32)> = None;

        for mv in board.legal_moves() {
            board.place(mv, self.engine_player)?;
            let result = self.score(board, self.opponent_player);
            board.unplace(mv)?;
            let score = result?;

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv).ok_or(GameError::NoLegalMove)
    }

    /// 评估 `to_move` 即将走子的局面（AI 视角）
    pub fn score(&mut self, board: &mut Board, to_move: Player) -> Result<i32> {
        self.nodes_searched += 1;

        if let Some(score) = self.terminal_score(OutcomeEvaluator::evaluate(board)) {
            return Ok(score);
        }

        let key = TranspositionTable::key(board, self.engine_player, to_move);
        if let Some(table) = self.table.as_deref_mut() {
            if let Some(score) = table.lookup(key) {
                return Ok(score);
            }
        }

        let maximizing = to_move == self.engine_player;
        let next = if maximizing {
            self.opponent_player
        } else {
            self.engine_player
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in board.legal_moves() {
            board.place(mv, to_move)?;
            let result = self.score(board, next);
            board.unplace(mv)?;
            let score = result?;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        if let Some(table) = self.table.as_deref_mut() {
            table.store(key, best);
        }

        Ok(best)
    }

    /// 终局分数，未结束返回 None
    fn terminal_score(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::Win(player) if player == self.engine_player => Some(WIN_SCORE),
            Outcome::Win(_) => Some(LOSS_SCORE),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Ongoing => None,
        }
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

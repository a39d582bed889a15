//! 胜负判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{Line, LINES};
use crate::player::{Cell, Player};

/// 局面结果，随时由棋盘重新计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 未结束
    Ongoing,
    /// 某方三连
    Win(Player),
    /// 棋盘已满且无人三连
    Draw,
}

impl Outcome {
    /// 是否为终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// 胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(*p),
            _ => None,
        }
    }
}

/// 结果评估器
pub struct OutcomeEvaluator;

impl OutcomeEvaluator {
    /// 评估局面
    pub fn evaluate(board: &Board) -> Outcome {
        if let Some((_, player)) = Self::find_line(board) {
            return Outcome::Win(player);
        }
        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// 第一条连成的线（按固定顺序扫描）
    pub fn winning_line(board: &Board) -> Option<Line> {
        Self::find_line(board).map(|(line, _)| line)
    }

    fn find_line(board: &Board) -> Option<(Line, Player)> {
        let cells = board.cells();
        LINES.iter().find_map(|&[a, b, c]| match cells[a] {
            Cell::Mark(p) if cells[b] == cells[a] && cells[c] == cells[a] => Some(([a, b, c], p)),
            _ => None,
        })
    }
}

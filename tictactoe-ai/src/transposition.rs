//! 置换表
//!
//! 缓存困难难度搜索过的局面分数。井字棋局面不超过 3^9 个，
//! 直接以三进制编码作键，不需要哈希校验位。

use std::collections::HashMap;

use tictactoe_core::{Board, Cell, Player};

/// 置换表统计
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TTStats {
    pub entries: usize,
    pub hits: u64,
    pub lookups: u64,
    pub hit_rate: f64,
}

/// 置换表
///
/// 完整搜索得到的都是精确值，因此只存分数。
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u32, i8>,
    hits: u64,
    lookups: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算键：棋盘三进制编码 + AI 执方 + 走子方
    pub fn key(board: &Board, engine_player: Player, to_move: Player) -> u32 {
        let code = board.cells().iter().fold(0u32, |acc, cell| {
            let digit = match cell {
                Cell::Empty => 0,
                Cell::Mark(Player::First) => 1,
                Cell::Mark(Player::Second) => 2,
            };
            acc * 3 + digit
        });
        let engine_bit = u32::from(engine_player == Player::Second);
        let move_bit = u32::from(to_move == Player::Second);
        (code << 2) | (engine_bit << 1) | move_bit
    }

    /// 查询
    pub fn lookup(&mut self, key: u32) -> Option<i32> {
        self.lookups += 1;
        let score = self.entries.get(&key).map(|&s| i32::from(s));
        if score.is_some() {
            self.hits += 1;
        }
        score
    }

    /// 存储
    pub fn store(&mut self, key: u32, score: i32) {
        let score = score.clamp(i8::MIN as i32, i8::MAX as i32) as i8;
        self.entries.insert(key, score);
    }

    /// 清空表
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.lookups = 0;
    }

    /// 获取统计信息
    pub fn stats(&self) -> TTStats {
        let hit_rate = if self.lookups > 0 {
            self.hits as f64 / self.lookups as f64
        } else {
            0.0
        };
        TTStats {
            entries: self.entries.len(),
            hits: self.hits,
            lookups: self.lookups,
            hit_rate,
        }
    }
}

//! AI 难度

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// AI 难度，对局期间不可更改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：在空格中均匀随机
    Random,
    /// 中等：赢棋 / 堵棋 / 加权随机
    Heuristic,
    /// 困难：完整 minimax，不会输
    Optimal,
}

impl Difficulty {
    /// 所有选项
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Random, Difficulty::Heuristic, Difficulty::Optimal]
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Random => "Easy",
            Difficulty::Heuristic => "Medium",
            Difficulty::Optimal => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" | "e" | "1" => Ok(Difficulty::Random),
            "heuristic" | "medium" | "normal" | "m" | "2" => Ok(Difficulty::Heuristic),
            "optimal" | "hard" | "h" | "3" => Ok(Difficulty::Optimal),
            other => Err(GameError::UnknownDifficulty {
                name: other.to_string(),
            }),
        }
    }
}

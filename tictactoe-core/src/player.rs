//! 玩家与格子定义

use serde::{Deserialize, Serialize};

/// 玩家（先手 / 后手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手，通常显示为 X
    First,
    /// 后手，通常显示为 O
    Second,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// 记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }

    /// 从记谱字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'X' | 'x' => Some(Player::First),
            'O' | 'o' => Some(Player::Second),
            _ => None,
        }
    }
}

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// 某一方的标记
    Mark(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 占据此格的玩家
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(*p),
        }
    }

    /// 记谱字符，空格为 '.'
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(p) => p.to_char(),
        }
    }

    /// 从记谱字符解析，'.' 与 '_' 均表示空格
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            _ => Player::from_char(c).map(Cell::Mark),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Mark(player)
    }
}

//! 错误类型定义

use thiserror::Error;

/// 规则与对局错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 索引不在 0..9 内
    #[error("Cell index out of range: {index} (expected 0..9)")]
    OutOfRangeIndex { index: usize },

    /// 目标格已有标记
    #[error("Cell {index} is already occupied")]
    OccupiedCell { index: usize },

    /// 撤销一个空格
    #[error("Cell {index} holds no mark")]
    UnoccupiedCell { index: usize },

    /// 当前局面下不合法的落子
    #[error("Illegal move: {index}")]
    IllegalMove { index: usize },

    /// 对局已结束
    #[error("Session is already over")]
    SessionOver,

    /// 当前不是 AI 的回合（或对局未配置 AI）
    #[error("Not the engine's turn")]
    NotEngineTurn,

    /// 没有可走的格子
    #[error("No legal move available")]
    NoLegalMove,

    /// 无法识别的难度名称
    #[error("Unknown difficulty: {name}")]
    UnknownDifficulty { name: String },

    /// 无效的棋盘记谱
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 载入的对局记录与落子序列不一致
    #[error("Inconsistent session: {reason}")]
    InconsistentSession { reason: String },
}

/// 核心库操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;

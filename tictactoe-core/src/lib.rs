//! 井字棋核心规则库
//!
//! 包含:
//! - 棋盘、格子、玩家等核心数据结构
//! - 胜负 / 和棋判定
//! - 对局状态机（轮换、落子、终局锁定）
//! - 棋盘记谱

mod board;
mod constants;
mod difficulty;
mod error;
mod notation;
mod outcome;
mod player;
mod session;

pub use board::Board;
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use notation::Notation;
pub use outcome::{Outcome, OutcomeEvaluator};
pub use player::{Cell, Player};
pub use session::{new_session, GameSession, SessionState};

//! 对局控制
//!
//! 负责轮换走子方、落子并判定终局，是唯一跨回合修改棋盘的地方。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::outcome::{Outcome, OutcomeEvaluator};
use crate::player::Player;

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// 进行中
    InProgress,
    /// 某方获胜（终局）
    Won(Player),
    /// 和棋（终局）
    Drawn,
}

/// 一局游戏
///
/// 反序列化时按 `moves` 从空棋盘重放，其余字段必须与重放结果一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    current_player: Player,
    state: SessionState,
    /// AI 难度，None 表示双人对战
    difficulty: Option<Difficulty>,
    /// AI 执哪一方
    engine_player: Option<Player>,
    /// 本局落子顺序
    moves: Vec<usize>,
}

/// 反序列化的原始字段，经 [`GameSession::replay`] 校验后才成为对局
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    current_player: Player,
    state: SessionState,
    difficulty: Option<Difficulty>,
    engine_player: Option<Player>,
    moves: Vec<usize>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = GameError;

    fn try_from(record: SessionRecord) -> Result<Self> {
        if record.difficulty.is_some() != record.engine_player.is_some() {
            return Err(GameError::InconsistentSession {
                reason: "difficulty and engine_player must be set together".to_string(),
            });
        }

        let session = Self::replay(record.difficulty, record.engine_player, &record.moves)?;
        if session.board != record.board {
            return Err(GameError::InconsistentSession {
                reason: "board does not match move list".to_string(),
            });
        }
        if session.current_player != record.current_player {
            return Err(GameError::InconsistentSession {
                reason: "current_player does not match move list".to_string(),
            });
        }
        if session.state != record.state {
            return Err(GameError::InconsistentSession {
                reason: "state does not match move list".to_string(),
            });
        }
        Ok(session)
    }
}

/// 创建新对局，省略难度即为双人对战；AI 默认执后手
pub fn new_session(difficulty: Option<Difficulty>) -> GameSession {
    GameSession::new(difficulty)
}

impl GameSession {
    /// 创建新对局，AI（若有）执后手
    pub fn new(difficulty: Option<Difficulty>) -> Self {
        let engine_player = difficulty.map(|_| Player::Second);
        Self::build(difficulty, engine_player)
    }

    /// 创建人机对局并指定 AI 执哪一方
    pub fn with_engine(difficulty: Difficulty, engine_player: Player) -> Self {
        Self::build(Some(difficulty), Some(engine_player))
    }

    fn build(difficulty: Option<Difficulty>, engine_player: Option<Player>) -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::First,
            state: SessionState::InProgress,
            difficulty,
            engine_player,
            moves: Vec::new(),
        }
    }

    /// 从空棋盘依次重放落子序列
    ///
    /// 序列中任何一步不合法（含终局后继续落子）都会返回对应错误。
    pub fn replay(
        difficulty: Option<Difficulty>,
        engine_player: Option<Player>,
        moves: &[usize],
    ) -> Result<Self> {
        let mut session = Self::build(difficulty, engine_player);
        for &index in moves {
            session.apply_move(index)?;
        }
        Ok(session)
    }

    /// 开始新一局，保留难度与执方配置
    pub fn reset(&mut self) {
        *self = Self::build(self.difficulty, self.engine_player);
    }

    /// 当前合法落子（委托给棋盘）
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves()
    }

    /// 当前走子方落子，返回落子后的局面结果
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome> {
        if self.state != SessionState::InProgress {
            return Err(GameError::SessionOver);
        }
        if !self.board.legal_moves().contains(&index) {
            return Err(GameError::IllegalMove { index });
        }

        self.board.place(index, self.current_player)?;
        self.moves.push(index);

        let outcome = OutcomeEvaluator::evaluate(&self.board);
        debug!(
            "{:?} 落子 {}，结果: {:?}",
            self.current_player, index, outcome
        );

        match outcome {
            Outcome::Win(player) => self.state = SessionState::Won(player),
            Outcome::Draw => self.state = SessionState::Drawn,
            Outcome::Ongoing => self.current_player = self.current_player.opponent(),
        }

        Ok(outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方（终局后为最后落子的一方）
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 当前结果
    pub fn outcome(&self) -> Outcome {
        match self.state {
            SessionState::InProgress => Outcome::Ongoing,
            SessionState::Won(player) => Outcome::Win(player),
            SessionState::Drawn => Outcome::Draw,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn engine_player(&self) -> Option<Player> {
        self.engine_player
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::InProgress
    }

    /// 是否轮到 AI 走棋
    pub fn is_engine_turn(&self) -> bool {
        !self.is_over() && self.engine_player == Some(self.current_player)
    }
}

//! AI 引擎
//!
//! 按难度分派到三种策略。引擎只负责选择落子，不修改调用方的棋盘，
//! 落子由驱动方交给 `GameSession::apply_move`。

use rand::Rng;
use tictactoe_core::{Board, Difficulty, GameError, GameSession, Outcome, Player, Result};
use tracing::debug;

use crate::config::AiConfig;
use crate::heuristic::heuristic_move;
use crate::random::random_move;
use crate::rng::EngineRng;
use crate::search::Minimax;
use crate::transposition::{TTStats, TranspositionTable};

/// AI 引擎
pub struct AiEngine<R: Rng = EngineRng> {
    config: AiConfig,
    rng: R,
    table: TranspositionTable,
    nodes_searched: u64,
}

impl AiEngine<EngineRng> {
    /// 从配置创建，未指定种子时使用系统熵
    pub fn from_config(config: AiConfig) -> Self {
        let config = config.normalized();
        let rng = config
            .seed
            .map(EngineRng::new)
            .unwrap_or_else(EngineRng::from_entropy);
        Self::new(config, rng)
    }

    /// 使用固定种子和默认配置创建
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(AiConfig {
            seed: Some(seed),
            ..AiConfig::default()
        })
    }

    /// 随机数种子
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for AiEngine<EngineRng> {
    fn default() -> Self {
        Self::from_config(AiConfig::default())
    }
}

impl<R: Rng> AiEngine<R> {
    /// 使用外部注入的随机数源创建
    pub fn new(config: AiConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            table: TranspositionTable::new(),
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 `engine_player` 选择落子
    ///
    /// 棋盘已满时返回 [`GameError::NoLegalMove`]。
    pub fn select_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        engine_player: Player,
        opponent_player: Player,
    ) -> Result<usize> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        self.nodes_searched = 0;
        let mv = match difficulty {
            Difficulty::Random => random_move(board, &mut self.rng)?,
            Difficulty::Heuristic => heuristic_move(
                board,
                engine_player,
                opponent_player,
                &self.config,
                &mut self.rng,
            )?,
            Difficulty::Optimal => {
                let mut scratch = *board;
                let mut search = Minimax::new(engine_player, opponent_player);
                if self.config.use_transposition {
                    search = search.with_table(&mut self.table);
                }
                let mv = search.best_move(&mut scratch)?;
                self.nodes_searched = search.nodes_searched();
                mv
            }
        };

        debug!(
            "AI ({:?}, {:?}) 选择落子 {}，搜索节点 {}",
            engine_player, difficulty, mv, self.nodes_searched
        );
        Ok(mv)
    }

    /// 按对局配置的难度替 AI 一方落子
    ///
    /// 未轮到 AI（含双人对局）时返回 [`GameError::NotEngineTurn`]，对局不变。
    pub fn play_turn(&mut self, session: &mut GameSession) -> Result<Outcome> {
        if session.is_over() {
            return Err(GameError::SessionOver);
        }
        if !session.is_engine_turn() {
            return Err(GameError::NotEngineTurn);
        }
        let difficulty = session.difficulty().ok_or(GameError::NotEngineTurn)?;
        self.play_turn_with(session, difficulty)
    }

    /// 以指定难度替当前走子方落子，不检查对局的 AI 配置
    ///
    /// 供引擎自我对弈使用。
    pub fn play_turn_with(
        &mut self,
        session: &mut GameSession,
        difficulty: Difficulty,
    ) -> Result<Outcome> {
        if session.is_over() {
            return Err(GameError::SessionOver);
        }
        let player = session.current_player();
        let mv = self.select_move(session.board(), difficulty, player, player.opponent())?;
        session.apply_move(mv)
    }

    /// 上一次困难难度搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 置换表统计
    pub fn table_stats(&self) -> TTStats {
        self.table.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{new_session, Notation, SessionState};

    #[test]
    fn test_spec_win_and_block_positions() {
        let mut engine = AiEngine::seeded(1);

        let board = Notation::parse("XX./OO./...").unwrap();
        for _ in 0..10 {
            let mv =
                engine.select_move(&board, Difficulty::Heuristic, Player::First, Player::Second);
            assert_eq!(mv, Ok(2));
        }

        let mut board = Board::empty();
        board.place(0, Player::Second).unwrap();
        board.place(1, Player::Second).unwrap();
        board.place(3, Player::First).unwrap();
        for _ in 0..10 {
            let mv =
                engine.select_move(&board, Difficulty::Heuristic, Player::First, Player::Second);
            assert_eq!(mv, Ok(2));
        }
    }

    #[test]
    fn test_full_board_rejected_for_every_tier() {
        let board = Notation::parse("XOX/XOO/OXX").unwrap();
        let mut engine = AiEngine::seeded(0);
        for &difficulty in Difficulty::all() {
            assert_eq!(
                engine.select_move(&board, difficulty, Player::Second, Player::First),
                Err(GameError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_optimal_tie_break_is_deterministic() {
        let mut engine = AiEngine::seeded(0);
        let board = Board::empty();
        let first = engine
            .select_move(&board, Difficulty::Optimal, Player::First, Player::Second)
            .unwrap();
        // 空棋盘所有落子都是和棋，取索引最小者
        assert_eq!(first, 0);
        assert!(engine.nodes_searched() > 0);

        let mut other = AiEngine::seeded(12345);
        for _ in 0..2 {
            let again = other
                .select_move(&board, Difficulty::Optimal, Player::First, Player::Second)
                .unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_select_does_not_modify_board() {
        let board = Notation::parse("X../.O./...").unwrap();
        let mut engine = AiEngine::seeded(9);
        for &difficulty in Difficulty::all() {
            engine
                .select_move(&board, difficulty, Player::First, Player::Second)
                .unwrap();
            assert_eq!(Notation::to_string(&board), "X../.O./...");
        }
    }

    #[test]
    fn test_injected_rng_reproducible() {
        let board = Board::empty();
        let mut a = AiEngine::new(AiConfig::default(), EngineRng::new(31));
        let mut b = AiEngine::new(AiConfig::default(), EngineRng::new(31));
        for &difficulty in &[Difficulty::Random, Difficulty::Heuristic] {
            for _ in 0..10 {
                assert_eq!(
                    a.select_move(&board, difficulty, Player::First, Player::Second),
                    b.select_move(&board, difficulty, Player::First, Player::Second)
                );
            }
        }
    }

    #[test]
    fn test_play_turn_applies_move() {
        let mut engine = AiEngine::seeded(2);
        let mut session = new_session(Some(Difficulty::Optimal));
        session.apply_move(0).unwrap();
        assert!(session.is_engine_turn());

        let outcome = engine.play_turn(&mut session).unwrap();
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(session.moves(), &[0, 4]);
        assert_eq!(session.current_player(), Player::First);
    }

    #[test]
    fn test_play_turn_uses_session_difficulty() {
        // AI 执先手、困难难度：空棋盘按最小索引取 0
        let mut engine = AiEngine::seeded(4);
        let mut session = GameSession::with_engine(Difficulty::Optimal, Player::First);
        engine.play_turn(&mut session).unwrap();
        assert_eq!(session.moves(), &[0]);
        assert!(engine.nodes_searched() > 0);

        // 简单难度不做搜索
        let mut session = GameSession::with_engine(Difficulty::Random, Player::First);
        engine.play_turn(&mut session).unwrap();
        assert_eq!(session.moves().len(), 1);
        assert_eq!(engine.nodes_searched(), 0);
    }

    #[test]
    fn test_play_turn_rejects_human_turn() {
        let mut engine = AiEngine::seeded(3);
        let mut session = new_session(Some(Difficulty::Random));
        assert_eq!(session.current_player(), Player::First);
        assert!(!session.is_engine_turn());

        assert_eq!(engine.play_turn(&mut session), Err(GameError::NotEngineTurn));
        assert_eq!(session.board(), &Board::empty());
        assert!(session.moves().is_empty());
        assert_eq!(session.current_player(), Player::First);
    }

    #[test]
    fn test_play_turn_rejects_two_player_session() {
        let mut engine = AiEngine::seeded(3);
        let mut session = new_session(None);
        assert_eq!(engine.play_turn(&mut session), Err(GameError::NotEngineTurn));
        session.apply_move(4).unwrap();
        assert_eq!(engine.play_turn(&mut session), Err(GameError::NotEngineTurn));
        assert_eq!(session.moves(), &[4]);

        // 显式指定难度时可替任一方落子
        engine.play_turn_with(&mut session, Difficulty::Optimal).unwrap();
        assert_eq!(session.moves().len(), 2);
    }

    #[test]
    fn test_play_turn_after_game_over() {
        let mut engine = AiEngine::seeded(2);
        let mut session = GameSession::with_engine(Difficulty::Random, Player::Second);
        for idx in [0, 3, 1, 4, 2] {
            session.apply_move(idx).unwrap();
        }
        assert_eq!(session.state(), SessionState::Won(Player::First));
        assert_eq!(engine.play_turn(&mut session), Err(GameError::SessionOver));
        assert_eq!(
            engine.play_turn_with(&mut session, Difficulty::Random),
            Err(GameError::SessionOver)
        );
    }

    #[test]
    fn test_transposition_config_keeps_choices() {
        let mut plain = AiEngine::seeded(0);
        let mut cached = AiEngine::from_config(AiConfig {
            use_transposition: true,
            seed: Some(0),
            ..AiConfig::default()
        });

        let mut session = new_session(None);
        while !session.is_over() {
            let player = session.current_player();
            let a = plain
                .select_move(session.board(), Difficulty::Optimal, player, player.opponent())
                .unwrap();
            let b = cached
                .select_move(session.board(), Difficulty::Optimal, player, player.opponent())
                .unwrap();
            assert_eq!(a, b);
            session.apply_move(a).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Draw);
        assert!(cached.table_stats().entries > 0);
    }
}

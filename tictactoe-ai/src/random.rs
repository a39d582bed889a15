//! 简单难度：在空格中均匀随机

use rand::seq::SliceRandom;
use rand::Rng;
use tictactoe_core::{Board, GameError, Result};

/// 从合法落子中均匀随机选择
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    choose_uniform(&board.legal_moves(), rng)
}

pub(crate) fn choose_uniform<R: Rng + ?Sized>(moves: &[usize], rng: &mut R) -> Result<usize> {
    moves.choose(rng).copied().ok_or(GameError::NoLegalMove)
}

//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::CELL_COUNT;
use crate::error::{GameError, Result};
use crate::player::{Cell, Player};

/// 3x3 棋盘，索引为 row * 3 + col
///
/// `place` / `unplace` 不检查轮次，走子方由 [`GameSession`](crate::GameSession)
/// 负责轮换；搜索时的试探落子也直接使用这两个方法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 从格子数组创建棋盘
    ///
    /// 先手标记数减后手标记数必须为 0 或 1。
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self> {
        let board = Self { cells };
        let first = board.count(Player::First);
        let second = board.count(Player::Second);
        if first != second && first != second + 1 {
            return Err(GameError::InvalidNotation {
                reason: format!(
                    "mark counts out of balance: {} first, {} second",
                    first, second
                ),
            });
        }
        Ok(board)
    }

    /// 全部格子
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// 获取指定格子
    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::OutOfRangeIndex { index })
    }

    /// 所有空格索引（升序）
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// 在空格上落子
    pub fn place(&mut self, index: usize, player: Player) -> Result<()> {
        match self.cell_at(index)? {
            Cell::Empty => {
                self.cells[index] = Cell::Mark(player);
                Ok(())
            }
            Cell::Mark(_) => Err(GameError::OccupiedCell { index }),
        }
    }

    /// 撤销落子，只用于搜索回溯
    pub fn unplace(&mut self, index: usize) -> Result<()> {
        match self.cell_at(index)? {
            Cell::Mark(_) => {
                self.cells[index] = Cell::Empty;
                Ok(())
            }
            Cell::Empty => Err(GameError::UnoccupiedCell { index }),
        }
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 指定玩家的标记数
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// 按标记数推断的走子方
    pub fn to_move(&self) -> Player {
        if self.count(Player::First) > self.count(Player::Second) {
            Player::Second
        } else {
            Player::First
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.to_move(), Player::First);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.cell_at(8), Ok(Cell::Empty));
        assert_eq!(
            board.cell_at(9),
            Err(GameError::OutOfRangeIndex { index: 9 })
        );
    }

    #[test]
    fn test_place_and_legal_moves() {
        let mut board = Board::empty();
        board.place(4, Player::First).unwrap();
        board.place(0, Player::Second).unwrap();

        assert_eq!(board.cell_at(4), Ok(Cell::Mark(Player::First)));
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.to_move(), Player::First);
    }

    #[test]
    fn test_place_occupied() {
        let mut board = Board::empty();
        board.place(2, Player::First).unwrap();
        let before = board;

        assert_eq!(
            board.place(2, Player::Second),
            Err(GameError::OccupiedCell { index: 2 })
        );
        assert_eq!(board, before);
        assert_eq!(
            board.place(11, Player::Second),
            Err(GameError::OutOfRangeIndex { index: 11 })
        );
    }

    #[test]
    fn test_place_unplace_roundtrip() {
        let mut board = Board::empty();
        board.place(0, Player::First).unwrap();
        board.place(4, Player::Second).unwrap();

        for idx in board.legal_moves() {
            let before = board;
            board.place(idx, Player::First).unwrap();
            board.unplace(idx).unwrap();
            assert_eq!(board, before, "撤销 {} 后棋盘应完全恢复", idx);
        }
    }

    #[test]
    fn test_unplace_empty_cell() {
        let mut board = Board::empty();
        assert_eq!(
            board.unplace(3),
            Err(GameError::UnoccupiedCell { index: 3 })
        );
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::empty();
        let mut player = Player::First;
        for idx in 0..9 {
            assert!(!board.is_full());
            board.place(idx, player).unwrap();
            player = player.opponent();
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_from_cells_rejects_unbalanced() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[0] = Cell::Mark(Player::Second);
        assert!(Board::from_cells(cells).is_err());

        cells[1] = Cell::Mark(Player::First);
        let board = Board::from_cells(cells).unwrap();
        assert_eq!(board.to_move(), Player::First);
    }
}

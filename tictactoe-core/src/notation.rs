//! 棋盘记谱
//!
//! 三行以 `/` 分隔，每行三个字符：
//! `X` 先手，`O` 后手，`.` 或 `_` 空格。
//!
//! 示例：`XX./OO./...`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{GameError, Result};
use crate::player::Cell;

/// 记谱处理
pub struct Notation;

impl Notation {
    /// 解析记谱为棋盘
    pub fn parse(notation: &str) -> Result<Board> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col, c) in chars.into_iter().enumerate() {
                cells[row_idx * BOARD_SIZE + col] =
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })?;
            }
        }

        Board::from_cells(cells)
    }

    /// 将棋盘转换为记谱
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

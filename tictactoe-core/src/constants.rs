//! 棋盘常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 中心格
pub const CENTER: usize = 4;

/// 四个角
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 四条边的中点
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// 一条连线（三个格子的索引）
pub type Line = [usize; 3];

/// 全部 8 条连线，扫描顺序固定：行、列、对角线
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

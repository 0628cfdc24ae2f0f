//! 棋盘文本格式解析和生成
//!
//! 格式：三行以 `/` 分隔，每行 3 个字符
//! - `X` / `x`：X
//! - `O` / `o` / `0`：O
//! - `.` / `_` / `-` / 空格：空格子
//!
//! 示例：`XXX/.O./O..`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{Result, RuleError};
use crate::mark::Mark;

/// 文本格式处理
pub struct BoardText;

impl BoardText {
    /// 解析文本为棋盘
    pub fn parse(text: &str) -> Result<Board> {
        // 空格表示空格子，只去掉行尾换行
        let rows: Vec<&str> = text
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
            .split('/')
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(RuleError::InvalidBoard {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut grid = [['.'; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(RuleError::InvalidBoard {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }
            grid[row_idx].copy_from_slice(&chars);
        }

        Self::parse_rows(grid)
    }

    /// 从字符网格创建棋盘
    pub fn parse_rows(grid: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Result<Board> {
        let mut cells = [None; CELL_COUNT];
        for (row_idx, row) in grid.iter().enumerate() {
            for (col_idx, &c) in row.iter().enumerate() {
                cells[row_idx * BOARD_SIZE + col_idx] = Self::parse_cell(c)?;
            }
        }
        Ok(Board::from_cells(cells))
    }

    fn parse_cell(c: char) -> Result<Option<Mark>> {
        match c {
            '.' | '_' | '-' | ' ' => Ok(None),
            _ => Mark::from_char(c)
                .map(Some)
                .ok_or_else(|| RuleError::InvalidBoard {
                    reason: format!("Invalid cell character: {:?}", c),
                }),
        }
    }

    /// 将棋盘转换为文本
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| {
                row.iter()
                    .map(|c| c.map(|m| m.to_char()).unwrap_or('.'))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

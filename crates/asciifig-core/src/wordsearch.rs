//! Grid word search.
//!
//! Finds a word in a character grid by tracing a self-avoiding "snake"
//! path between orthogonally adjacent cells. The search is an explicit
//! stack-based depth-first traversal with an owned visited mask, so
//! pathological inputs cannot exhaust the call stack.

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True if `word` can be traced in `puzzle` via up/down/left/right moves
/// without revisiting a cell.
///
/// Rows need not be equal length; out-of-row cells are simply not
/// adjacent. ASCII grids and words are assumed. The empty word is found
/// in any non-empty grid.
pub fn find_word(puzzle: &[&str], word: &str) -> bool {
    if puzzle.is_empty() {
        return false;
    }
    if word.is_empty() {
        return true;
    }

    let grid: Vec<&[u8]> = puzzle.iter().map(|row| row.as_bytes()).collect();
    let target = word.as_bytes();

    for start_row in 0..grid.len() {
        for start_col in 0..grid[start_row].len() {
            if grid[start_row][start_col] != target[0] {
                continue;
            }
            if target.len() == 1 {
                return true;
            }
            if search_from(&grid, target, start_row, start_col) {
                return true;
            }
        }
    }
    false
}

/// Depth-first search with an explicit frame stack.
///
/// Each frame holds a matched cell plus the index of the next direction to
/// try; the stack depth equals the length of the matched prefix. Popping a
/// frame un-marks its cell in the visited mask (backtracking).
fn search_from(grid: &[&[u8]], target: &[u8], start_row: usize, start_col: usize) -> bool {
    let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(target.len());

    visited[start_row][start_col] = true;
    stack.push((start_row, start_col, 0));

    while let Some(&(row, col, dir)) = stack.last() {
        if dir >= DIRECTIONS.len() {
            stack.pop();
            visited[row][col] = false;
            continue;
        }
        if let Some(frame) = stack.last_mut() {
            frame.2 += 1;
        }

        let (dr, dc) = DIRECTIONS[dir];
        let next_row = row as isize + dr;
        let next_col = col as isize + dc;
        if next_row < 0 || next_col < 0 {
            continue;
        }
        let (next_row, next_col) = (next_row as usize, next_col as usize);
        if next_row >= grid.len() || next_col >= grid[next_row].len() {
            continue;
        }
        if visited[next_row][next_col] || grid[next_row][next_col] != target[stack.len()] {
            continue;
        }

        if stack.len() + 1 == target.len() {
            return true;
        }
        visited[next_row][next_col] = true;
        stack.push((next_row, next_col, 0));
    }
    false
}

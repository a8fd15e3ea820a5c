//! Plain text form of a grid: one line per row, one character per cell.
//!
//! `■` is a wall, a space an open cell and `X` an exit. When reading, `#` and `.` are also
//! accepted for walls and open cells since trailing spaces are easily lost by editors.

use error_chain::bail;
use itertools::Itertools;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::cells::CellKind;
use crate::errors::*;
use crate::grid::Grid;

pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut lines = text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect::<Vec<_>>();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_index, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_index, symbol) in line.chars().enumerate() {
            match CellKind::from_symbol(symbol) {
                Some(kind) => row.push(kind),
                None => bail!(ErrorKind::UnknownCellSymbol(symbol, row_index, col_index)),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows)
}

pub fn format_grid(grid: &Grid) -> String {
    grid.iter_row()
        .map(|row| {
            row.into_iter()
                .filter_map(|coord| grid.get(coord))
                .map(CellKind::symbol)
                .collect::<String>()
        })
        .join("\n")
}

pub fn read_grid_file<P: AsRef<Path>>(file_path: P) -> Result<Grid> {
    let file_path = file_path.as_ref();
    let text = fs::read_to_string(file_path)
        .chain_err(|| format!("Failed to read maze text file {}", file_path.display()))?;
    parse_grid(&text).chain_err(|| format!("Failed to parse maze text file {}", file_path.display()))
}

pub fn write_grid_file<P: AsRef<Path>>(grid: &Grid, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    let mut text = format_grid(grid);
    text.push('\n');
    fs::write(file_path, text)
        .chain_err(|| format!("Failed to write maze to text file {}", file_path.display()))?;
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_grid(self))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Grid> {
        parse_grid(text)
    }
}


#[cfg(test)]
mod tests {

    use std::env;
    use std::process;

    use super::*;
    use crate::cells::GridCoordinate;
    use crate::cells::CellKind::{Exit as X, Open as O, Wall as W};
    use crate::pathing;

    const CORRIDOR: &str = "■X■\n■ ■\n■X■";

    #[test]
    fn parse() {
        let g = parse_grid(CORRIDOR).expect("valid maze text");
        let expected = Grid::from_rows(vec![vec![W, X, W], vec![W, O, W], vec![W, X, W]]).unwrap();
        assert_eq!(g, expected);
    }

    #[test]
    fn parse_ascii_symbols_and_line_endings() {
        let g = parse_grid("#X#\r\n#.#\r\n#X#\r\n\n").expect("valid maze text");
        assert_eq!(g, parse_grid(CORRIDOR).unwrap());
    }

    #[test]
    fn format() {
        let g = parse_grid(CORRIDOR).unwrap();
        assert_eq!(format_grid(&g), CORRIDOR);
        assert_eq!(g.to_string(), CORRIDOR);
        assert_eq!(CORRIDOR.parse::<Grid>().unwrap(), g);
    }

    #[test]
    fn parse_errors() {
        match parse_grid("■X■\n■ \n■X■") {
            Err(Error(ErrorKind::RaggedRows(1, 3, 2), _)) => {}
            other => panic!("expected ragged rows, got {:?}", other),
        }
        match parse_grid("■X■\n■?■") {
            Err(Error(ErrorKind::UnknownCellSymbol('?', 1, 1), _)) => {}
            other => panic!("expected unknown symbol, got {:?}", other),
        }
        match parse_grid("\n\n") {
            Err(Error(ErrorKind::InvalidDimensions(0, 0), _)) => {}
            other => panic!("expected invalid dimensions, got {:?}", other),
        }
    }

    #[test]
    fn solve_loaded_maze() {
        // Not made by the generator: open room with a pillar
        let text = "■■■■■■\n\
                    X    ■\n\
                    ■ ■■ ■\n\
                    ■    X\n\
                    ■■■■■■";
        let g = parse_grid(text).unwrap();
        let (distances, path) = pathing::solve(&g);
        let path = path.expect("exits are connected");
        assert_eq!(path.first(), Some(&GridCoordinate::new(1, 0)));
        assert_eq!(path.last(), Some(&GridCoordinate::new(3, 5)));
        assert_eq!(path.len(), 8);
        assert_eq!(distances.distance_from_start_to(GridCoordinate::new(3, 5)), Some(8));
    }

    #[test]
    fn file_round_trip() {
        let file_path = env::temp_dir().join(format!("wavemaze_grid_text_{}.txt", process::id()));
        let g = parse_grid(CORRIDOR).unwrap();
        write_grid_file(&g, &file_path).expect("temp file written");
        let loaded = read_grid_file(&file_path).expect("temp file read");
        let _ = fs::remove_file(&file_path);
        assert_eq!(loaded, g);
    }

    #[test]
    fn missing_file() {
        let file_path = env::temp_dir().join("wavemaze_grid_text_does_not_exist.txt");
        assert!(read_grid_file(&file_path).is_err());
    }
}

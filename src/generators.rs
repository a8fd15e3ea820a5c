use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::cells::{CellKind, CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// Where `binary_tree` puts the two maze exits.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ExitPlacement {
    /// Two independently chosen positions on the border. They may coincide or be cut off
    /// from every room.
    Random,
    /// (0, 1) and (rows - 1, columns - 2), next to the top left and bottom right rooms.
    Fixed,
}

impl ExitPlacement {
    pub fn from_random_exits_flag(random_exits: bool) -> ExitPlacement {
        if random_exits {
            ExitPlacement::Random
        } else {
            ExitPlacement::Fixed
        }
    }
}

/// Generate a maze with the binary tree algorithm and mark the exits using `rng` as the
/// only source of randomness.
///
/// Every position with an odd row and odd column is a room, everything else starts as wall.
/// Each room, visited in row-major order, knocks down the wall to the room two rows above (North)
/// or the room two columns to its right (East), picked uniformly from the options that exist.
/// The top row can only go East, the right column can only go North and the top right room
/// carves nothing. Every room therefore has a single path to the top right room, the passages
/// form a spanning tree and the maze is perfect.
pub fn binary_tree<R: Rng + ?Sized>(rows: RowsCount,
                                    columns: ColumnsCount,
                                    exits: ExitPlacement,
                                    rng: &mut R)
                                    -> Result<Grid> {
    let mut grid = Grid::new(rows, columns)?;
    let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);

    for row in (1..rows_count).step_by(2) {
        for col in (1..columns_count).step_by(2) {
            grid.set(GridCoordinate::new(row, col), CellKind::Open);
        }
    }

    let mut carved = 0;
    for row in (1..rows_count).step_by(2) {
        for col in (1..columns_count).step_by(2) {

            let mut directions = SmallVec::<[CompassPrimary; 2]>::new();
            if row >= 3 {
                directions.push(CompassPrimary::North);
            }
            if col + 2 < columns_count {
                directions.push(CompassPrimary::East);
            }

            if let Some(direction) = directions.choose(rng) {
                let wall = match *direction {
                    CompassPrimary::North => GridCoordinate::new(row - 1, col),
                    CompassPrimary::East => GridCoordinate::new(row, col + 1),
                    _ => unreachable!("binary tree only carves North or East"),
                };
                grid.set(wall, CellKind::Open);
                carved += 1;
            }
        }
    }

    let (entrance, exit) = match exits {
        ExitPlacement::Random => (random_border_position(rows, columns, rng),
                                  Some(random_border_position(rows, columns, rng))),
        ExitPlacement::Fixed => (GridCoordinate::new(0, 1),
                                 columns_count.checked_sub(2)
                                              .map(|col| GridCoordinate::new(rows_count - 1, col))),
    };
    grid.set(entrance, CellKind::Exit);
    if let Some(exit_coord) = exit {
        grid.set(exit_coord, CellKind::Exit);
    }

    debug!("binary tree maze {} x {}: {} passages carved, exits {:?} placed at {:?} and {:?}",
           rows_count, columns_count, carved, exits, entrance, exit);

    Ok(grid)
}

/// The boolean flavoured entry point: random border exits or the fixed corner exits.
pub fn binary_tree_maze<R: Rng + ?Sized>(rows: RowsCount,
                                         columns: ColumnsCount,
                                         random_exits: bool,
                                         rng: &mut R)
                                         -> Result<Grid> {
    binary_tree(rows, columns, ExitPlacement::from_random_exits_flag(random_exits), rng)
}

/// Pick a random row; on the first or last row any column will do, any other row only
/// has the first and last columns on the border.
fn random_border_position<R: Rng + ?Sized>(rows: RowsCount,
                                           columns: ColumnsCount,
                                           rng: &mut R)
                                           -> GridCoordinate {
    let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);

    let row = rng.gen_range(0..rows_count);
    let col = if row == 0 || row == rows_count - 1 {
        rng.gen_range(0..columns_count)
    } else if rng.gen() {
        0
    } else {
        columns_count - 1
    };

    GridCoordinate::new(row, col)
}


#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::VecDeque;

    use super::*;
    use crate::exits;
    use crate::utils;

    fn seeded_rng(seed: u64) -> XorShiftRng {
        XorShiftRng::seed_from_u64(seed)
    }

    fn maze(rows: usize, columns: usize, placement: ExitPlacement, seed: u64) -> Grid {
        binary_tree(RowsCount(rows), ColumnsCount(columns), placement, &mut seeded_rng(seed))
            .expect("maze dimensions are invalid")
    }

    fn rooms(grid: &Grid) -> Vec<GridCoordinate> {
        grid.iter().filter(|coord| coord.row % 2 == 1 && coord.col % 2 == 1).collect()
    }

    // Plain flood fill over the passable cells, independent of the wave solver.
    fn reachable_count(grid: &Grid, from: GridCoordinate) -> usize {
        let mut seen = utils::fnv_hashmap(grid.size());
        let mut queue = VecDeque::new();
        seen.insert(from, ());
        queue.push_back(from);
        while let Some(coord) = queue.pop_front() {
            for neighbour in Grid::neighbours4(coord).iter() {
                let passable = grid.get(*neighbour).map_or(false, |kind| kind.is_passable());
                if passable && !seen.contains_key(neighbour) {
                    seen.insert(*neighbour, ());
                    queue.push_back(*neighbour);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn rooms_are_open_and_lattice_is_wall() {
        let g = maze(9, 11, ExitPlacement::Fixed, 7);
        for coord in g.iter() {
            let kind = g.get(coord).unwrap();
            let is_exit = coord == GridCoordinate::new(0, 1) || coord == GridCoordinate::new(8, 9);
            if is_exit {
                assert_eq!(kind, CellKind::Exit);
            } else if coord.row % 2 == 1 && coord.col % 2 == 1 {
                assert_eq!(kind, CellKind::Open);
            } else if coord.row % 2 == 0 && coord.col % 2 == 0 {
                assert_eq!(kind, CellKind::Wall);
            } else if coord.row == 0 || coord.col == 0 || coord.row == 8 || coord.col == 10 {
                // outer boundary
                assert_eq!(kind, CellKind::Wall);
            }
        }
    }

    #[test]
    fn one_carve_per_room_except_the_top_right() {
        // A spanning tree over n rooms has n - 1 passages
        let g = maze(11, 13, ExitPlacement::Fixed, 42);
        let room_count = rooms(&g).len();
        let open_count = g.count_kind(CellKind::Open);
        assert_eq!(room_count, 5 * 6);
        assert_eq!(open_count, room_count + room_count - 1);
    }

    #[test]
    fn top_row_carves_east_and_right_column_carves_north() {
        let g = maze(7, 7, ExitPlacement::Fixed, 3);
        let gc = |r, c| GridCoordinate::new(r, c);
        // top row rooms (1, 1), (1, 3) can only link East
        assert_eq!(g.get(gc(1, 2)), Some(CellKind::Open));
        assert_eq!(g.get(gc(1, 4)), Some(CellKind::Open));
        // right column rooms (3, 5), (5, 5) can only link North
        assert_eq!(g.get(gc(2, 5)), Some(CellKind::Open));
        assert_eq!(g.get(gc(4, 5)), Some(CellKind::Open));
    }

    #[test]
    fn fixed_exits() {
        let g = maze(5, 5, ExitPlacement::Fixed, 0);
        assert_eq!(exits::find_exits(&g),
                   vec![GridCoordinate::new(0, 1), GridCoordinate::new(4, 3)]);
    }

    #[test]
    fn degenerate_dimensions_are_legal() {
        let single = maze(1, 1, ExitPlacement::Fixed, 0);
        // (0, 1) is outside the grid and the bottom right exit column is not representable
        assert_eq!(single.get(GridCoordinate::new(0, 0)), Some(CellKind::Wall));

        let thin = maze(1, 5, ExitPlacement::Fixed, 0);
        assert_eq!(thin.count_kind(CellKind::Open), 0);
        assert_eq!(exits::find_exits(&thin),
                   vec![GridCoordinate::new(0, 1), GridCoordinate::new(0, 3)]);

        for seed in 0..20 {
            let random_single = maze(1, 1, ExitPlacement::Random, seed);
            assert_eq!(exits::find_exits(&random_single), vec![GridCoordinate::new(0, 0)]);
        }
    }

    #[test]
    fn invalid_dimensions_fail() {
        let result = binary_tree_maze(RowsCount(0), ColumnsCount(5), true, &mut seeded_rng(1));
        assert!(result.is_err());
    }

    #[test]
    fn random_exits_are_on_the_border() {
        let (rows, columns) = (9, 13);
        for seed in 0..200 {
            let g = maze(rows, columns, ExitPlacement::Random, seed);
            let exit_coords = exits::find_exits(&g);
            assert!(!exit_coords.is_empty() && exit_coords.len() <= 2);
            for coord in exit_coords {
                let on_border = coord.row == 0 || coord.row == rows - 1 || coord.col == 0 ||
                                coord.col == columns - 1;
                assert!(on_border, "exit {:?} is not on the border", coord);
            }
        }
    }

    #[test]
    fn boolean_flag_selects_placement() {
        let fixed = binary_tree_maze(RowsCount(7), ColumnsCount(7), false, &mut seeded_rng(5)).unwrap();
        assert_eq!(fixed, maze(7, 7, ExitPlacement::Fixed, 5));
        let random = binary_tree_maze(RowsCount(7), ColumnsCount(7), true, &mut seeded_rng(5)).unwrap();
        assert_eq!(random, maze(7, 7, ExitPlacement::Random, 5));
    }

    #[test]
    fn same_seed_same_maze() {
        fn p(half_rows: u8, half_columns: u8, seed: u64) -> bool {
            let rows = 2 * (half_rows as usize % 20) + 3;
            let columns = 2 * (half_columns as usize % 20) + 3;
            maze(rows, columns, ExitPlacement::Random, seed) ==
            maze(rows, columns, ExitPlacement::Random, seed)
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn every_room_reaches_every_other_room() {
        fn p(half_rows: u8, half_columns: u8, seed: u64) -> TestResult {
            let rows = 2 * (half_rows as usize % 20) + 3;
            let columns = 2 * (half_columns as usize % 20) + 3;
            let g = maze(rows, columns, ExitPlacement::Fixed, seed);

            // Connectivity is transitive, so all rooms reachable from one room is enough.
            // The fixed exits add two cells attached to rooms.
            let all_rooms = rooms(&g);
            let reached = reachable_count(&g, all_rooms[0]);
            let passable_count = g.size() - g.count_kind(CellKind::Wall);
            TestResult::from_bool(reached == passable_count)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }
}

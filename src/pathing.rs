use log::debug;

use crate::cells::{CellKind, GridCoordinate};
use crate::exits;
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};

/// Ordered coordinates from the start exit to the end exit inclusive.
pub type Path = Vec<GridCoordinate>;

/// Wave distances from a start cell. The start is labelled 1 and every cell the wave reached
/// is labelled with one more than the cells it was reached from, unreached cells have no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    start_coordinate: Option<GridCoordinate>,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// No labels at all, the result for grids rejected before the wave starts.
    pub fn empty() -> Distances {
        Distances {
            start_coordinate: None,
            distances: utils::fnv_hashmap(0),
            max_distance: 0,
        }
    }

    /// Label every cell reachable from `start_coordinate` through `Open` and `Exit` cells.
    /// Returns None if the start is outside of the grid.
    pub fn for_grid(grid: &Grid, start_coordinate: GridCoordinate) -> Option<Distances> {
        if grid.is_valid_coordinate(start_coordinate) {
            Some(Distances::wave(grid, start_coordinate, None))
        } else {
            None
        }
    }

    /// Send out the wave one tick at a time. All cells labelled `k` are expanded together into
    /// the unlabelled passable cells around them, which get `k + 1`, before anything labelled
    /// `k + 1` is expanded, so a label is always the shortest step count from the start plus one.
    ///
    /// Stops as soon as `stop_at` is labelled or when a tick labels nothing new.
    fn wave(grid: &Grid, start_coordinate: GridCoordinate, stop_at: Option<GridCoordinate>) -> Distances {
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 1);

        // The distances map doubles as the visited set, so the frontier can be a plain vec.
        let mut frontier = vec![start_coordinate];
        let mut tick: u32 = 1;
        loop {
            if let Some(target) = stop_at {
                if distances.contains_key(&target) {
                    break;
                }
            }

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                for neighbour_coord in Grid::neighbours4(*cell_coord).iter() {
                    let passable = grid.get(*neighbour_coord).map_or(false, CellKind::is_passable);
                    if passable && !distances.contains_key(neighbour_coord) {
                        distances.insert(*neighbour_coord, tick + 1);
                        new_frontier.push(*neighbour_coord);
                    }
                }
            }

            if new_frontier.is_empty() {
                break;
            }
            frontier = new_frontier;
            tick += 1;
        }

        Distances {
            start_coordinate: Some(start_coordinate),
            distances,
            max_distance: tick,
        }
    }

    #[inline(always)]
    pub fn start(&self) -> Option<GridCoordinate> {
        self.start_coordinate
    }

    /// The largest label handed out, 0 when empty.
    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Labelled cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoordinate, u32)> + '_ {
        self.distances.iter().map(|(coord, distance)| (*coord, *distance))
    }
}

/// Run the wave from the first exit to the second and trace the shortest path back.
///
/// Grids without exactly two exits, with a walled in exit, or with the exits in separate
/// areas have no path. They are a normal outcome rather than an error: the distances are
/// empty when the grid was rejected up front and hold the area around the start otherwise.
pub fn solve(grid: &Grid) -> (Distances, Option<Path>) {
    let (start, end) = match exits::validate(grid) {
        Ok(start_end) => start_end,
        Err(reason) => {
            debug!("maze not solvable: {}", reason);
            return (Distances::empty(), None);
        }
    };

    let distances = Distances::wave(grid, start, Some(end));
    if distances.distance_from_start_to(end).is_none() {
        debug!("wave from {:?} died out after {} ticks without reaching {:?}",
               start, distances.max(), end);
        return (distances, None);
    }

    let path = shortest_path(&distances, end);
    if let Some(ref p) = path {
        debug!("maze solved from {:?} to {:?} in {} steps", start, end, p.len() - 1);
    }
    (distances, path)
}

/// Walk back from `end_point` to the start, each step moving to the neighbour labelled one
/// less (checked right, down, left, up), and return the walk in start to end order.
///
/// A walk that gets stuck before reaching label 1 is cut short there; it is returned only if
/// it holds at least two cells.
pub fn shortest_path(distances_from_start: &Distances, end_point: GridCoordinate) -> Option<Path> {
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut current_coord = end_point;
    let mut path = vec![end_point];

    while current_distance > 1 {
        let closer = Grid::neighbours4(current_coord)
            .iter()
            .cloned()
            .find(|coord| distances_from_start.distance_from_start_to(*coord) == Some(current_distance - 1));

        if let Some(closer_coord) = closer {
            path.push(closer_coord);
            current_coord = closer_coord;
            current_distance -= 1;
        } else {
            // Inconsistent labels, there is no way back from here.
            break;
        }
    }

    path.reverse();
    if path.len() > 1 {
        Some(path)
    } else {
        None
    }
}

/// A copy of `grid` with the path cells marked as exits.
pub fn mark_path(grid: &Grid, path: &[GridCoordinate]) -> Grid {
    let mut marked = grid.clone();
    for coord in path {
        marked.set(*coord, CellKind::Exit);
    }
    marked
}

use docopt::Docopt;
use log::{info, warn};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use wavemaze::{
    generators,
    grid::Grid,
    grid_text,
    pathing,
    units::{ColumnsCount, RowsCount},
};

const USAGE: &str = "Wave Maze

Usage:
    wavemaze_driver -h | --help
    wavemaze_driver generate [--rows=<n>] [--cols=<n>] [--fixed-exits] [--seed=<s>] [--save=<path>] [--show-path]
    wavemaze_driver solve <maze-file> [--show-path]

Options:
    -h --help          Show this screen.
    --rows=<n>         Number of grid rows [default: 15].
    --cols=<n>         Number of grid columns [default: 15].
    --fixed-exits      Put the exits next to the top left and bottom right rooms instead of on random border cells.
    --seed=<s>         Seed for the maze generator, taken from the OS if not given.
    --save=<path>      Write the generated maze to a text file. Walls are '■', passages ' ' and exits 'X'.
    --show-path        Also print the maze with the shortest path between the exits marked with 'X'.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_generate: bool,
    cmd_solve: bool,
    arg_maze_file: String,
    flag_rows: usize,
    flag_cols: usize,
    flag_fixed_exits: bool,
    flag_seed: Option<u64>,
    flag_save: String,
    flag_show_path: bool,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::wavemaze::errors::Error, ::wavemaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        // --help and friends
        Err(ref e) if !e.fatal() => e.exit(),
        parsed => parsed?,
    };

    let maze_grid = if args.cmd_solve {
        grid_text::read_grid_file(&args.arg_maze_file)?
    } else {
        generate_maze(&args)?
    };

    if args.cmd_generate && !args.flag_save.is_empty() {
        grid_text::write_grid_file(&maze_grid, &args.flag_save)?;
        info!("Maze saved to {}", args.flag_save);
    }

    println!("{}", maze_grid);

    let (distances, path_opt) = pathing::solve(&maze_grid);
    if let Some(path) = path_opt {
        info!("Shortest path between the exits is {} steps, the wave labelled {} cells",
              path.len() - 1, distances.len());

        if args.flag_show_path {
            println!();
            println!("{}", pathing::mark_path(&maze_grid, &path));
        }
    } else {
        warn!("No path between the exits, the wave labelled {} cells", distances.len());
    }

    Ok(())
}

fn generate_maze(maze_args: &MazeArgs) -> Result<Grid> {

    let mut rng = if let Some(seed) = maze_args.flag_seed {
        XorShiftRng::seed_from_u64(seed)
    } else {
        XorShiftRng::from_entropy()
    };
    let random_exits = !maze_args.flag_fixed_exits;

    let maze_grid = generators::binary_tree_maze(RowsCount(maze_args.flag_rows),
                                                 ColumnsCount(maze_args.flag_cols),
                                                 random_exits,
                                                 &mut rng)?;
    Ok(maze_grid)
}

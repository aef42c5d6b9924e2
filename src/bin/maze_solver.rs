use clap::Parser;
use maze_solver::engine::Grid;
use maze_solver::solver::MazeSolver;
use maze_solver::utils::{parse_maze, SampleMaze};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the maze file ('W' wall, ' ' open, 'E' exit, one row per line)
    #[clap(conflicts_with = "sample")]
    maze_file: Option<PathBuf>,

    /// Use a built-in maze instead of a file
    #[clap(short, long, value_enum)]
    sample: Option<SampleMaze>,

    /// Start row (defaults to 1)
    #[clap(short = 'r', long)]
    start_row: Option<usize>,

    /// Start column (defaults to 1)
    #[clap(short = 'c', long)]
    start_column: Option<usize>,

    /// Print the grid after every step
    #[clap(short, long)]
    trace: bool,

    /// Emit every snapshot as one JSON object per line instead of text
    #[clap(long, conflicts_with = "trace")]
    json: bool,

    /// Draw grids with ANSI colors
    #[clap(long)]
    color: bool,
}

fn load_grid(args: &Args) -> Result<(Grid, String), String> {
    match &args.maze_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read file {}: {}", path.display(), e))?;
            let grid = parse_maze(&content).map_err(|e| format!("Invalid maze format: {}", e))?;
            Ok((grid, path.display().to_string()))
        }
        None => {
            let sample = args.sample.unwrap_or(SampleMaze::Simple);
            let grid = sample.grid().map_err(|e| e.to_string())?;
            Ok((grid, format!("{} sample", sample.name())))
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let (grid, source) = load_grid(args)?;
    let start_row = args.start_row.unwrap_or(1);
    let start_column = args.start_column.unwrap_or(1);

    let mut solver =
        MazeSolver::new(start_row, start_column, grid).map_err(|e| e.to_string())?;
    log::info!(
        "loaded {}x{} maze from {}",
        solver.grid().rows(),
        solver.grid().columns(),
        source
    );

    if args.json {
        for snapshot in solver.trace().map_err(|e| e.to_string())? {
            let line = serde_json::to_string(&snapshot).map_err(|e| e.to_string())?;
            println!("{}", line);
        }
        return Ok(());
    }

    println!("Loaded maze from {}\n", source);
    println!("{}\n", solver.grid());
    println!(
        "Searching from [{}, {}] (Down, Right, Left, Up)...\n",
        start_row, start_column
    );

    if args.trace {
        while let Some(snapshot) = solver.step().map_err(|e| e.to_string())? {
            println!("Step {}:", solver.steps_taken());
            if args.color {
                println!("{}\n", solver.grid().render_with_highlight(snapshot.current_position));
            } else {
                println!("{}\n", snapshot.render());
            }
        }
    }

    let solution = solver.run_to_completion().map_err(|e| e.to_string())?;
    println!("{}", solution.message);
    println!("Steps taken: {}\n", solution.steps_taken);
    if args.color {
        println!("{}", solver.grid().render_with_highlight(None));
    } else {
        println!("{}", solution.snapshot.render());
    }
    Ok(())
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

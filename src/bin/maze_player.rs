use clap::Parser;
use maze_solver::solver::{MazeSolver, Snapshot};
use maze_solver::utils::{parse_maze, SampleMaze};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Replay a depth-first maze search step by step", long_about = None)]
struct Args {
    /// Path to the maze file; the Simple sample is used when omitted
    #[clap(conflicts_with = "sample")]
    maze_file: Option<PathBuf>,

    #[clap(short, long, value_enum)]
    sample: Option<SampleMaze>,

    #[clap(short = 'r', long, default_value_t = 1)]
    start_row: usize,

    #[clap(short = 'c', long, default_value_t = 1)]
    start_column: usize,

    /// Delay between steps when playing the rest of the search
    #[clap(short, long, default_value_t = 100)]
    delay_ms: u64,
}

fn show(solver: &MazeSolver, snapshot: &Snapshot) {
    println!("---------------------");
    println!("Step {} ({:?})", solver.steps_taken(), snapshot.state);
    println!("{}", solver.grid().render_with_highlight(snapshot.current_position));
    if let Some(message) = &snapshot.message {
        println!("{}", message);
    }
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let grid = match &args.maze_file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| parse_maze(&content).map_err(|e| e.to_string())),
        None => args
            .sample
            .unwrap_or(SampleMaze::Simple)
            .grid()
            .map_err(|e| e.to_string()),
    };
    let mut solver = match grid
        .and_then(|g| MazeSolver::new(args.start_row, args.start_column, g).map_err(|e| e.to_string()))
    {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Depth-first maze search: Down -> Right -> Left -> Up");
    show(&solver, &solver.snapshot());

    loop {
        print!("Enter to step, 'a' to play to the end, 'p' for path, 'r' to reset, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "" => match solver.step() {
                Ok(Some(snapshot)) => show(&solver, &snapshot),
                Ok(None) => println!("Search finished. Press 'r' to replay or 'q' to quit."),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            },
            "a" => loop {
                match solver.step() {
                    Ok(Some(snapshot)) => {
                        show(&solver, &snapshot);
                        thread::sleep(Duration::from_millis(args.delay_ms));
                    }
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            },
            "p" => match solver.current_path() {
                Ok(path) => {
                    let points: Vec<String> = path.iter().map(|p| p.to_string()).collect();
                    println!("Path ({} cells, top first): {}", path.len(), points.join(" "));
                }
                Err(e) => println!("{}", e),
            },
            "r" => {
                solver.reset();
                println!("Search reset.");
                show(&solver, &solver.snapshot());
            }
            "q" => {
                println!("Bye!");
                break;
            }
            _ => println!("Invalid input. Use Enter, 'a', 'p', 'r' or 'q'."),
        }
    }
    ExitCode::SUCCESS
}

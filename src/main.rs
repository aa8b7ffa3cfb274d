//! Main CLI application for the tango puzzle generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tango_puzzle::{
    config::{CliOverrides, Difficulty, OutputFormat, Settings},
    grid::{create_example_grids, load_grid_from_file, CELL_COUNT},
    puzzle::{validate_puzzle, DeductionSolver, Puzzle, PuzzleGenerator},
    utils::{ColorOutput, PuzzleFormatter},
};

#[derive(Parser)]
#[command(name = "tango_puzzle")]
#[command(about = "Tango puzzle generator and deduction solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new puzzles
    Generate {
        /// Difficulty: easy, medium or hard (unknown values fall back to medium)
        #[arg(short, long, default_value = "easy")]
        difficulty: String,

        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Save puzzles to this directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print the solution under each puzzle
        #[arg(long)]
        show_solution: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and grid files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a completed grid against the balance and adjacency rules
    Validate {
        /// Grid text file
        #[arg(short, long)]
        grid: PathBuf,
    },

    /// Run the deduction solver on a saved puzzle
    Solve {
        /// Puzzle JSON file
        #[arg(short, long)]
        puzzle: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Generate { verbose: true, .. });
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Generate {
            difficulty, count, seed, config, output, format, show_solution, verbose: _
        } => {
            generate_command(difficulty, count, seed, config, output, format, show_solution)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Validate { grid } => {
            validate_command(grid)
        }
        Commands::Solve { puzzle } => {
            solve_command(puzzle)
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        debug!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

#[allow(clippy::too_many_arguments)]
fn generate_command(
    difficulty: String,
    count: usize,
    seed: Option<u64>,
    config_path: PathBuf,
    output_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    show_solution: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    let save = output_dir.is_some();

    settings.merge_with_cli(&CliOverrides {
        seed,
        format,
        output_dir,
    });
    settings.validate().context("Configuration validation failed")?;

    let difficulty = Difficulty::from_token_or_default(&difficulty);
    println!("{}", ColorOutput::info(&format!("🎲 Generating {} {} puzzle(s)...", count, difficulty)));

    let start_time = Instant::now();
    let puzzles = generate_batch(&settings, difficulty, count)?;
    info!("Generated {} puzzles in {:.3}s", puzzles.len(), start_time.elapsed().as_secs_f64());

    println!("{}", ColorOutput::success(&format!(
        "✅ Generated {} puzzle(s) in {:.3}s",
        puzzles.len(),
        start_time.elapsed().as_secs_f64()
    )));

    for puzzle in &puzzles {
        println!("\n{}", PuzzleFormatter::format_puzzle(puzzle, show_solution));
    }
    if puzzles.len() > 1 {
        println!("{}", PuzzleFormatter::format_puzzle_summary(&puzzles));
    }

    if save {
        PuzzleFormatter::save_puzzles(&puzzles, &settings.output.output_directory, settings.output.format)
            .context("Failed to save puzzles")?;
        println!("{}", ColorOutput::success(&format!(
            "Puzzles saved to {}",
            settings.output.output_directory.display()
        )));
    }

    Ok(())
}

/// One independent generator per puzzle; seeded runs derive a distinct seed per index
fn generate_batch(settings: &Settings, difficulty: Difficulty, count: usize) -> Result<Vec<Puzzle>> {
    (0..count)
        .into_par_iter()
        .map(|index| {
            let mut worker_settings = settings.clone();
            worker_settings.generation.seed = settings
                .generation
                .seed
                .map(|seed| seed.wrapping_add(index as u64));

            PuzzleGenerator::from_settings(&worker_settings)
                .generate_with_retries(difficulty)
                .with_context(|| format!("Failed to generate puzzle {}", index + 1))
        })
        .collect()
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let grids_dir = directory.join("input/grids");
    let output_dir = directory.join("output/puzzles");

    for dir in [&config_dir, &grids_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Reproducible configuration variant
    let seeded_path = config_dir.join("seeded.yaml");
    if !seeded_path.exists() || force {
        let mut seeded = Settings::default();
        seeded.generation.seed = Some(2024);
        seeded.output.format = OutputFormat::Json;
        seeded.to_file(&seeded_path)
            .context("Failed to create seeded configuration")?;
        println!("Created: {}", seeded_path.display());
    } else {
        println!("Skipped: {} (already exists)", seeded_path.display());
    }

    create_example_grids(&grids_dir)
        .context("Failed to create example grids")?;
    println!("Created example grids in: {}", grids_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- generate --difficulty hard");
    println!("3. Run: cargo run -- validate --grid {}", grids_dir.join("solved.txt").display());

    Ok(())
}

fn validate_command(grid_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating grid..."));

    let grid = load_grid_from_file(&grid_path)?;
    println!("{}", PuzzleFormatter::format_grid_with_coords(&grid));

    let result = validate_puzzle(&grid);
    println!("{}", result);

    println!("{}", ColorOutput::validation_verdict(&result));

    Ok(())
}

fn solve_command(puzzle_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🧮 Solving puzzle by deduction..."));

    let puzzle = Puzzle::load_from_file(&puzzle_path)?;
    println!("{}", PuzzleFormatter::format_puzzle(&puzzle, false));

    let result = DeductionSolver::new(puzzle.constraints()).solve(puzzle.grid());
    println!("Deduced grid after {} rounds:", result.rounds);
    println!("{}", PuzzleFormatter::format_grid_compact(&result.grid));

    let empty_cells = CELL_COUNT - result.grid.filled_count();
    println!(
        "{}",
        ColorOutput::deduction_verdict(puzzle.check_attempt(&result.grid), empty_cells)
    );

    Ok(())
}

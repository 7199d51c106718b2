//! Command-line interface for solving puzzle files one at a time or in batches

use crate::algorithm::solver::Solver;
use crate::io::configuration::{NO_SOLUTION_MESSAGE, PUZZLE_EXTENSION, SOLUTION_SUFFIX};
use crate::io::display::SolutionFormatter;
use crate::io::error::{Result, file_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::puzzle::PuzzleDefinition;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "scramblesquares")]
#[command(
    author,
    version,
    about = "Solve 3x3 edge-matching tile puzzles by backtracking"
)]
/// Command-line arguments for the puzzle solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file, or directory of .txt puzzle files, to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print tiles one side per line instead of drawing the grid
    #[arg(short, long)]
    pub listing: bool,

    /// Write each solution to <name>_solved.txt next to the puzzle
    #[arg(short, long)]
    pub write: bool,

    /// Solve puzzles even if a solution file already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing solution files should be skipped
    pub const fn skip_existing(&self) -> bool {
        self.write && !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Tally of puzzles handled by a [`FileProcessor`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Puzzles with a solution
    pub solved: usize,
    /// Puzzles whose search was exhausted
    pub unsolved: usize,
    /// Puzzles skipped because a solution file exists
    pub skipped: usize,
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    summary: BatchSummary,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            summary: BatchSummary::default(),
        }
    }

    /// Counts of puzzles processed so far
    pub const fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, a puzzle file is malformed,
    /// or a solution cannot be written
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            solved = self.summary.solved,
            unsolved = self.summary.unsolved,
            skipped = self.summary.skipped,
            "batch complete"
        );
        Ok(())
    }

    fn collect_files(&mut self) -> Result<Vec<PathBuf>> {
        let target = self.cli.target.clone();
        if target.is_file() {
            if self.should_process_file(&target) {
                Ok(vec![target])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&target).map_err(file_error(&target, "list"))?;
            for entry in entries {
                let path = entry.map_err(file_error(&target, "list"))?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && !Self::is_solution_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or directory",
            ))
        }
    }

    fn is_solution_file(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(SOLUTION_SUFFIX))
    }

    fn should_process_file(&mut self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            self.summary.skipped += 1;
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (solution exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for solution output
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let puzzle = PuzzleDefinition::from_path(input_path)?;
        let mut solver = Solver::spiral(puzzle.tiles.clone())?;
        let solved = solver.solve()?;

        let rendered = if solved {
            self.summary.solved += 1;
            self.render(&puzzle, &solver)
        } else {
            self.summary.unsolved += 1;
            warn!(path = %input_path.display(), "search exhausted without a solution");
            format!("{NO_SOLUTION_MESSAGE}\n")
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, solved, solver.stats(), start_time.elapsed());
        }

        if self.cli.write {
            let output_path = Self::get_output_path(input_path);
            std::fs::write(&output_path, &rendered)
                .map_err(file_error(&output_path, "write solution"))?;
        } else {
            let heading = puzzle
                .title
                .as_deref()
                .map_or_else(|| input_path.display().to_string(), str::to_string);
            println!("{heading}\n{rendered}");
        }

        Ok(())
    }

    fn render(&self, puzzle: &PuzzleDefinition, solver: &Solver) -> String {
        let formatter = SolutionFormatter::new(&puzzle.registry);
        match solver.arrangement() {
            Some(arrangement) if !self.cli.listing => formatter.grid(&arrangement),
            _ => formatter.listing(&solver.placed_tiles()),
        }
    }

    /// Path a solution for `input_path` is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            SOLUTION_SUFFIX,
            PUZZLE_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use crossword::crossword::{Crossword, Solution, Vocabulary};
use crossword::image::CrosswordImageBuilder;
use crossword::solve::{CrosswordSolver, SolveResult};
use itertools::Itertools;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_file(options.structure_path()).with_context(|| {
        format!(
            "failed to read structure from \"{}\"",
            options.structure_path().display()
        )
    })?;
    let vocabulary = Vocabulary::from_file(options.words_path()).with_context(|| {
        format!(
            "failed to read words from \"{}\"",
            options.words_path().display()
        )
    })?;
    info!(
        "{} variables, {} words",
        crossword.variable_count(),
        vocabulary.len()
    );
    let result = CrosswordSolver::new(&crossword, &vocabulary).solve();
    let solved = match result {
        SolveResult::Unsolvable => {
            println!("No solution.");
            return Ok(());
        }
        SolveResult::Solved(solved) => solved,
    };
    debug!(
        "guesses: {}, backtracks: {}, max depth: {}",
        solved.stats.guesses, solved.stats.backtracks, solved.stats.max_depth
    );
    if !options.quiet() {
        print!("{}", solved.solution.display(&crossword));
    }
    if log_enabled!(log::Level::Debug) {
        debug!("words:\n{}", word_list(&solved.solution));
    }
    if let Some(path) = options.output_path() {
        let mut builder = CrosswordImageBuilder::new(&crossword);
        builder.solution(&solved.solution);
        builder
            .build()
            .save_svg(path)
            .with_context(|| format!("failed to save image to \"{}\"", path.display()))?;
        println!("Saved image to {}", path.display());
    }
    Ok(())
}

fn word_list(solution: &Solution) -> String {
    solution
        .iter()
        .map(|(variable, word)| format!(" {}: {}", variable, word))
        .join("\n")
}

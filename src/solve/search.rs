use std::cmp::Reverse;

use crate::crossword::{VariableId, WordId};
use crate::solve::constraint::{ac3, Arc};
use crate::solve::{Assignment, Domains, SolveContext};
use crate::HashMap;

/// Counters describing the work done by a search
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// The number of words tried for a variable
    pub guesses: u64,
    /// The number of guesses that did not lead to a solution
    pub backtracks: u64,
    /// The greatest number of variables assigned at once
    pub max_depth: usize,
}

/// Searches for a complete assignment using backtracking.
/// `domains` should already be node and arc consistent.
pub(crate) fn search_solution(
    cx: SolveContext<'_>,
    domains: &Domains,
    stats: &mut SearchStats,
) -> Option<Assignment> {
    backtrack(cx, &Assignment::new(), domains, stats)
}

fn backtrack(
    cx: SolveContext<'_>,
    assignment: &Assignment,
    domains: &Domains,
    stats: &mut SearchStats,
) -> Option<Assignment> {
    if !assignment.is_consistent(cx) {
        return None;
    }
    if assignment.is_complete(cx) {
        return Some(assignment.clone());
    }
    let depth = assignment.len() + 1;
    stats.max_depth = stats.max_depth.max(depth);
    let id = select_unassigned_variable(cx, assignment, domains)?;
    let words = order_domain_values(cx, id, assignment, domains);
    debug!(
        "Backtracking (depth={}) on {} with {} candidates",
        depth,
        cx.crossword.variable(id),
        words.len()
    );
    // arcs point at the assigned variable so that its neighbors are the ones pruned
    let arcs: Vec<Arc> = cx
        .crossword
        .neighbors(id)
        .iter()
        .map(|&neighbor| (neighbor, id))
        .collect();
    for (i, word) in words.into_iter().enumerate() {
        stats.guesses += 1;
        trace!(
            "Guessing {} for {}, guess #: {}",
            cx.vocabulary.word(word),
            cx.crossword.variable(id),
            i + 1
        );
        let trial = assignment.with(id, word);
        if !trial.is_consistent(cx) {
            stats.backtracks += 1;
            continue;
        }
        let mut domains = domains.clone();
        domains.assign(id, word);
        if !ac3(cx, &mut domains, Some(arcs.clone())) {
            trace!("Guess failed");
            stats.backtracks += 1;
            continue;
        }
        if let Some(solution) = backtrack(cx, &trial, &domains, stats) {
            return Some(solution);
        }
        stats.backtracks += 1;
    }
    None
}

/// Chooses the unassigned variable with the fewest remaining words.
/// Ties go to the variable with the most neighbors, and then to the lowest id.
fn select_unassigned_variable(
    cx: SolveContext<'_>,
    assignment: &Assignment,
    domains: &Domains,
) -> Option<VariableId> {
    (0..cx.crossword.variable_count())
        .filter(|&id| !assignment.contains(id))
        .min_by_key(|&id| (domains[id].len(), Reverse(cx.crossword.neighbors(id).len())))
}

/// Orders the words of a variable by how many words each would rule out for unassigned
/// neighbors, fewest first
fn order_domain_values(
    cx: SolveContext<'_>,
    id: VariableId,
    assignment: &Assignment,
    domains: &Domains,
) -> Vec<WordId> {
    // for each unassigned neighbor: the letter index in `id`, the neighbor's domain size,
    // and how many of the neighbor's words have each letter in the shared cell
    let neighbors: Vec<(usize, usize, HashMap<char, usize>)> = cx
        .crossword
        .neighbors(id)
        .iter()
        .filter(|&&neighbor| !assignment.contains(neighbor))
        .filter_map(|&neighbor| {
            let (a, b) = cx.crossword.overlap(id, neighbor)?;
            let mut letter_counts = HashMap::new();
            for word in &domains[neighbor] {
                if let Some(letter) = cx.vocabulary.letter(word, b) {
                    *letter_counts.entry(letter).or_insert(0) += 1;
                }
            }
            Some((a, domains[neighbor].len(), letter_counts))
        })
        .collect();
    let ruled_out = |word: WordId| -> usize {
        neighbors
            .iter()
            .map(|(a, len, letter_counts)| {
                let compatible = cx
                    .vocabulary
                    .letter(word, *a)
                    .and_then(|letter| letter_counts.get(&letter).copied())
                    .unwrap_or(0);
                len - compatible
            })
            .sum()
    };
    let mut words: Vec<(WordId, usize)> = domains[id]
        .iter()
        .map(|word| (word, ruled_out(word)))
        .collect();
    words.sort_by_key(|&(_, n)| n);
    words.into_iter().map(|(word, _)| word).collect()
}

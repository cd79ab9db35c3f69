use crate::crossword::VariableId;
use crate::solve::{Domains, SolveContext};
use crate::{HashSet, LinkedHashSet};

/// An ordered pair of variables `(x, y)`. Revising the arc prunes the domain of `x`.
pub(crate) type Arc = (VariableId, VariableId);

/// Makes `x` arc consistent with `y` by removing every word from the domain of `x` that has no
/// word in the domain of `y` with the same letter in the shared cell.
///
/// Returns true if the domain of `x` changed.
pub(crate) fn revise(
    cx: SolveContext<'_>,
    domains: &mut Domains,
    x: VariableId,
    y: VariableId,
) -> bool {
    let (a, b) = match cx.crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let mut y_letters = HashSet::new();
    for word in &domains[y] {
        if let Some(letter) = cx.vocabulary.letter(word, b) {
            y_letters.insert(letter);
        }
    }
    let removed = domains.get_mut(x).retain(|word| {
        cx.vocabulary
            .letter(word, a)
            .map_or(false, |letter| y_letters.contains(&letter))
    });
    if removed > 0 {
        trace!(
            "removed {} words from {} to agree with {}",
            removed,
            cx.crossword.variable(x),
            cx.crossword.variable(y)
        );
    }
    removed > 0
}

/// Enforces arc consistency with the AC-3 algorithm.
///
/// The queue starts with `arcs`, or with every ordered pair of distinct variables if `arcs` is
/// `None`. Whenever the domain of `x` is revised, the arcs `(z, x)` for every other neighbor `z`
/// are queued again.
///
/// Returns false if some domain becomes empty.
pub(crate) fn ac3(
    cx: SolveContext<'_>,
    domains: &mut Domains,
    arcs: Option<Vec<Arc>>,
) -> bool {
    let mut queue: LinkedHashSet<Arc> = LinkedHashSet::with_hasher(Default::default());
    match arcs {
        Some(arcs) => {
            for arc in arcs {
                queue.insert(arc);
            }
        }
        None => {
            let count = cx.crossword.variable_count();
            for x in 0..count {
                for y in (0..count).filter(|&y| y != x) {
                    queue.insert((x, y));
                }
            }
        }
    }
    debug!("enforcing arc consistency starting with {} arcs", queue.len());
    let mut revisions = 0;
    while let Some((x, y)) = queue.pop_front() {
        if !revise(cx, domains, x, y) {
            continue;
        }
        revisions += 1;
        if domains[x].is_empty() {
            debug!("domain of {} is empty", cx.crossword.variable(x));
            return false;
        }
        for &z in cx.crossword.neighbors(x) {
            if z != y {
                queue.insert((z, x));
            }
        }
    }
    debug!("arc consistency reached after {} revisions", revisions);
    true
}

#[cfg(test)]
mod tests {
    use crate::crossword::{Crossword, Vocabulary};
    use super::{ac3, revise};
    use crate::solve::constraint::enforce_node_consistency;
    use crate::solve::{Domains, SolveContext};

    fn words(cx: SolveContext<'_>, domains: &Domains, id: usize) -> Vec<String> {
        domains[id]
            .iter()
            .map(|w| cx.vocabulary.word(w).to_string())
            .collect()
    }

    /// An across slot and a down slot sharing their first letter
    fn l_shape() -> Crossword {
        Crossword::parse("___\n_##\n_##").unwrap()
    }

    #[test]
    fn revise_prunes_only_x() {
        let crossword = l_shape();
        let vocabulary = Vocabulary::new(vec!["cat", "tar", "rat"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(2, vocabulary.len());
        domains.get_mut(1).retain(|w| w == 1);
        // across may only start with T now
        assert!(revise(cx, &mut domains, 0, 1));
        assert_eq!(vec!["TAR"], words(cx, &domains, 0));
        assert_eq!(vec!["TAR"], words(cx, &domains, 1));
    }

    #[test]
    fn revise_is_idempotent() {
        let crossword = l_shape();
        let vocabulary = Vocabulary::new(vec!["cat", "tar", "rat", "cot"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(2, vocabulary.len());
        domains.get_mut(1).retain(|w| w == 1 || w == 2);
        assert!(revise(cx, &mut domains, 0, 1));
        assert!(!revise(cx, &mut domains, 0, 1));
    }

    #[test]
    fn revise_without_overlap() {
        let crossword = Crossword::parse("___\n###\n___").unwrap();
        let vocabulary = Vocabulary::new(vec!["cat", "dog"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(2, vocabulary.len());
        domains.get_mut(1).retain(|w| w != 0);
        assert!(!revise(cx, &mut domains, 0, 1));
        assert_eq!(2, domains[0].len());
    }

    #[test]
    fn ac3_fails_on_wipeout() {
        let crossword = l_shape();
        let vocabulary = Vocabulary::new(vec!["cat", "dog"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(2, vocabulary.len());
        domains.assign(0, 0);
        domains.assign(1, 1);
        assert!(!ac3(cx, &mut domains, None));
    }

    #[test]
    fn ac3_with_arcs() {
        let crossword = l_shape();
        let vocabulary = Vocabulary::new(vec!["cat", "tar", "rat", "cot"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(2, vocabulary.len());
        domains.assign(0, 1);
        assert!(ac3(cx, &mut domains, Some(vec![(1, 0)])));
        assert_eq!(vec!["TAR"], words(cx, &domains, 1));
    }

    #[test]
    fn ac3_propagates() {
        // three slots in a chain: across 0 crosses down 2, which crosses across 1
        let crossword = Crossword::parse("___\n#_#\n___").unwrap();
        let vocabulary = Vocabulary::new(vec!["abc", "xbz", "bqr", "bbb", "qqq"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(crossword.variable_count(), vocabulary.len());
        enforce_node_consistency(cx, &mut domains);
        domains.assign(0, 0);
        assert!(ac3(cx, &mut domains, None));
        // down must start with B, and end with a letter found in the middle of the lower across
        assert_eq!(vec!["BBB"], words(cx, &domains, 2));
        assert_eq!(vec!["ABC", "XBZ", "BBB"], words(cx, &domains, 1));
    }

    #[test]
    fn ac3_result_is_arc_consistent() {
        let crossword = Crossword::parse("#___#\n#_##_\n#_##_\n#_##_\n#____").unwrap();
        let vocabulary = Vocabulary::new(vec![
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        ]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(crossword.variable_count(), vocabulary.len());
        enforce_node_consistency(cx, &mut domains);
        assert!(ac3(cx, &mut domains, None));
        for x in 0..crossword.variable_count() {
            for &y in crossword.neighbors(x) {
                let (a, b) = crossword.overlap(x, y).unwrap();
                for w in &domains[x] {
                    assert!(
                        domains[y]
                            .iter()
                            .any(|u| vocabulary.letter(w, a) == vocabulary.letter(u, b)),
                        "{} has no support in {}",
                        vocabulary.word(w),
                        crossword.variable(y)
                    );
                }
            }
        }
    }
}

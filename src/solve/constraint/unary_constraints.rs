use crate::solve::{Domains, SolveContext};

/// Removes every word whose length does not match the length of its variable.
/// Returns the number of words removed across all domains.
pub(crate) fn enforce_node_consistency(cx: SolveContext<'_>, domains: &mut Domains) -> usize {
    debug!("reducing domains by variable length");
    let mut removed = 0;
    for (id, variable) in cx.crossword.variables().iter().enumerate() {
        let length = variable.length();
        removed += domains
            .get_mut(id)
            .retain(|word| cx.vocabulary.word_len(word) == length);
    }
    removed
}

#[cfg(test)]
mod tests {
    use crate::crossword::{Crossword, Vocabulary};
    use crate::solve::constraint::enforce_node_consistency;
    use crate::solve::{Domains, SolveContext};

    #[test]
    fn words_match_variable_length() {
        let crossword = Crossword::parse("#___#\n#_##_\n#_##_\n#_##_\n#____").unwrap();
        let vocabulary = Vocabulary::new(vec!["one", "four", "three", "seven", "ten", "six"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(crossword.variable_count(), vocabulary.len());
        enforce_node_consistency(cx, &mut domains);
        for (id, variable) in crossword.variables().iter().enumerate() {
            assert!(!domains[id].is_empty());
            for word in &domains[id] {
                assert_eq!(variable.length(), vocabulary.word_len(word));
            }
        }
    }

    #[test]
    fn idempotent() {
        let crossword = Crossword::parse("____").unwrap();
        let vocabulary = Vocabulary::new(vec!["ab", "abcd", "wxyz"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(crossword.variable_count(), vocabulary.len());
        assert_eq!(1, enforce_node_consistency(cx, &mut domains));
        assert_eq!(0, enforce_node_consistency(cx, &mut domains));
        assert_eq!(2, domains[0].len());
    }

    #[test]
    fn no_matching_length() {
        let crossword = Crossword::parse("___").unwrap();
        let vocabulary = Vocabulary::new(vec!["ab", "abcd"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let mut domains = Domains::with_all(crossword.variable_count(), vocabulary.len());
        enforce_node_consistency(cx, &mut domains);
        assert!(domains[0].is_empty());
    }
}

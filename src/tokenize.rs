//! Text normalization.
//!
//! A word is a non-empty run of alphabetic characters, lowercased. Everything else
//! (whitespace, punctuation, digits) separates words.

/// Split `text` into lowercase alphabetic words, in input order.
///
/// Returns an empty vector when `text` contains no letters.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase().filter(|l| l.is_alphabetic()));
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Normalize a single query word: lowercase it, then drop every non-alphabetic character.
///
/// Lowercasing can emit non-alphabetic marks (`'İ'` becomes `"i\u{307}"`), so filtering
/// runs last. Unlike [`tokenize`], this never splits: `"re-port"` becomes `"report"`.
pub fn preprocess(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_digits_separate_words() {
        assert_eq!(
            tokenize("The data, wrote 2 reports.\nDone!"),
            vec!["the", "data", "wrote", "reports", "done"]
        );
        assert_eq!(tokenize("abc1def"), vec!["abc", "def"]);
    }

    #[test]
    fn no_letters_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  123 ,.;\n").is_empty());
    }

    #[test]
    fn preprocess_strips_and_lowercases() {
        assert_eq!(preprocess("Report!"), "report");
        assert_eq!(preprocess("re-port"), "report");
        assert_eq!(preprocess("42"), "");
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn lowercasing_never_leaks_combining_marks() {
        assert_eq!(tokenize("İstanbul"), vec!["istanbul"]);
        assert_eq!(preprocess("İstanbul"), "istanbul");
        for token in tokenize("İx go, ΣΑΣ Straße") {
            assert!(token.chars().all(char::is_alphabetic), "{token:?}");
            assert_eq!(preprocess(&token), token);
        }
    }

    #[test]
    fn query_normalization_matches_construction() {
        let g = crate::graph::WordGraph::from_text("İx go");
        assert_eq!(g.words().collect::<Vec<_>>(), vec!["ix", "go"]);
        assert_eq!(g.query_bridge_words("İx", "go"), "No bridge words from \"İx\" to \"go\"!");
        assert_eq!(g.edge_weight(&preprocess("İx"), "go"), Some(1));
    }
}

// ============================================================
// Layer 4 — Customised Stop-Word Lexicon
// ============================================================
// An adaptation of spaCy's English stop-word list that keeps
// conjunctions and conjunctive adverbs OUT of the stop words,
// since they mark argumentative structure ("however",
// "therefore", "because", ...).
//
// Construction:
//   1. base set      = BASE_STOP_WORDS
//   2. base set     -= CONJUNCTIONS ∪ CONJUNCTIVE_ADVERBS   (exact, case-sensitive)
//   3. base set     += contraction fragments, also spelled
//                      with ‘ and ’ instead of '
//
// Multi-word conjunctions ("even though") can never match a
// single-word stop word; they are kept in the conjunction list
// for consumers that work on phrases.

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// spaCy English stop words
const BASE_STOP_WORDS: &str = "
a about above across after afterwards again against all almost alone along
already also although always am among amongst amount an and another any anyhow
anyone anything anyway anywhere are around as at

back be became because become becomes becoming been before beforehand behind
being below beside besides between beyond both bottom but by

call can cannot ca could

did do does doing done down due during

each eight either eleven else elsewhere empty enough even ever every
everyone everything everywhere except

few fifteen fifty first five for former formerly forty four from front full
further

get give go

had has have he hence her here hereafter hereby herein hereupon hers herself
him himself his how however hundred

i if in indeed into is it its itself

keep

last latter latterly least less

just

made make many may me meanwhile might mine more moreover most mostly move much
must my myself

name namely neither never nevertheless next nine no nobody none noone nor not
nothing now nowhere

of off often on once one only onto or other others otherwise our ours ourselves
out over own

part per perhaps please put

quite

rather re really regarding

same say see seem seemed seeming seems serious several she should show side
since six sixty so some somehow someone something sometime sometimes somewhere
still such

take ten than that the their them themselves then thence there thereafter
thereby therefore therein thereupon these they third this those though three
through throughout thru thus to together too top toward towards twelve twenty
two

under until up unless upon us used using

various very very via was we well were what whatever when whence whenever where
whereafter whereas whereby wherein whereupon wherever whether which while
whither who whoever whole whom whose why will with within without would

yet you your yours yourself yourselves
";

pub const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "so", "yet", "for", "nor", "because", "although",
    "since", "unless", "until", "whether", "while", "even though", "as",
    "after", "before", "though", "if", "provided", "once", "unless", "in case",
    "wherever", "wherever", "lest", "except", "insofar", "as long as",
    "as soon as", "whenever", "wherever", "rather than", "whether or not",
    "inasmuch as", "so that", "now that", "just as", "than", "as if",
    "as though", "while", "whereas", "regardless", "notwithstanding",
    "conversely", "alternatively", "however", "nevertheless", "nonetheless",
    "still", "instead", "yet", "on the other hand", "even so", "all the same",
    "in contrast", "on the contrary", "whereas",
];

pub const CONJUNCTIVE_ADVERBS: &[&str] = &[
    "accordingly", "also", "besides", "consequently", "finally", "furthermore",
    "hence", "however", "indeed", "instead", "likewise", "meanwhile", "moreover",
    "nevertheless", "nonetheless", "otherwise", "similarly", "still",
    "subsequently", "then", "therefore", "thus",
];

/// Contraction fragments as produced by English tokenisers
pub const CONTRACTIONS: &[&str] = &["n't", "'d", "'ll", "'m", "'re", "'s", "'ve"];

/// Typographic apostrophes the contractions are also spelled with
const APOSTROPHE_VARIANTS: [char; 2] = ['‘', '’'];

static LEXICON: LazyLock<StopWordLexicon> = LazyLock::new(StopWordLexicon::build);

/// The process-wide lexicon, built on first use.
pub fn stop_words() -> &'static StopWordLexicon {
    &LEXICON
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordLexicon {
    words: BTreeSet<String>,
}

impl StopWordLexicon {
    /// Build the lexicon from the constant lists above.
    pub fn build() -> Self {
        let conjunctions = all_conjunctions();

        let mut words: BTreeSet<String> = BASE_STOP_WORDS
            .split_whitespace()
            .filter(|w| !conjunctions.contains(w))
            .map(str::to_string)
            .collect();

        for fragment in CONTRACTIONS {
            words.insert(fragment.to_string());
            for apostrophe in APOSTROPHE_VARIANTS {
                words.insert(fragment.replace('\'', &apostrophe.to_string()));
            }
        }

        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stop words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Conjunctions followed by conjunctive adverbs, duplicates included
pub fn all_conjunctions() -> Vec<&'static str> {
    CONJUNCTIONS
        .iter()
        .chain(CONJUNCTIVE_ADVERBS)
        .copied()
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_conjunction_is_a_stop_word() {
        let lexicon = StopWordLexicon::build();
        for c in all_conjunctions() {
            assert!(!lexicon.contains(c), "'{c}' should have been removed");
        }
    }

    #[test]
    fn test_keeps_ordinary_stop_words() {
        let lexicon = stop_words();
        for w in ["the", "a", "of", "yourselves", "very", "ca"] {
            assert!(lexicon.contains(w), "'{w}' missing");
        }
        assert!(!lexicon.contains("The"));
    }

    #[test]
    fn test_contraction_variants() {
        let lexicon = stop_words();
        for w in ["n't", "n‘t", "n’t", "'s", "‘s", "’s", "'ve", "’ve"] {
            assert!(lexicon.contains(w), "'{w}' missing");
        }
    }

    #[test]
    fn test_all_conjunctions_length() {
        assert_eq!(
            all_conjunctions().len(),
            CONJUNCTIONS.len() + CONJUNCTIVE_ADVERBS.len()
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(StopWordLexicon::build(), *stop_words());
        assert!(!stop_words().is_empty());
    }
}

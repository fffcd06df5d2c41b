/*!
 * Partisan phrase lexicon.
 *
 * Curated left-leaning and right-leaning phrase dictionaries with a
 * longest-match scanner over token streams. The built-in lexicon is loaded
 * once per process and is read-only afterwards; a malformed lexicon is
 * rejected at build time so no scorer ever runs against a partial dictionary.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::LexiconError;

/// Political lean of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lean {
    /// Left-leaning phrase
    Left,
    /// Right-leaning phrase
    Right,
}

impl Lean {
    /// Signed direction of this lean on the -1..+1 scale
    pub fn direction(self) -> f64 {
        match self {
            Lean::Left => -1.0,
            Lean::Right => 1.0,
        }
    }
}

/// How diagnostic a phrase is of its lean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// Strongly partisan phrasing
    Strong,
    /// Moderately partisan phrasing
    Moderate,
}

impl Intensity {
    /// Multiplier applied when accumulating sentence lean
    pub fn weight(self) -> f64 {
        match self {
            Intensity::Strong => 2.0,
            Intensity::Moderate => 1.0,
        }
    }
}

/// A single lexicon phrase with its lean and intensity
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    /// Original lowercase phrase
    pub phrase: String,
    /// Phrase split into lowercase tokens
    pub tokens: Vec<String>,
    /// Political lean of the phrase
    pub lean: Lean,
    /// Intensity class of the phrase
    pub intensity: Intensity,
}

/// Partisan phrase dictionary with longest-match lookup.
///
/// Phrases are indexed by their first token; candidates sharing a first token
/// are kept longest-first so a scan always prefers the most specific phrase.
#[derive(Debug, Clone)]
pub struct PhraseLexicon {
    by_first_token: HashMap<String, Vec<PhraseEntry>>,
    entry_count: usize,
}

impl PhraseLexicon {
    /// Build a lexicon from `(phrase, lean, intensity)` triples.
    ///
    /// Phrases are lowercased and tokenized on whitespace. A phrase appearing
    /// under both leans, a repeated phrase, or an empty input set is rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, Lean, Intensity)>,
        S: AsRef<str>,
    {
        let mut by_first_token: HashMap<String, Vec<PhraseEntry>> = HashMap::new();
        let mut seen: HashMap<String, Lean> = HashMap::new();
        let mut entry_count = 0;

        for (phrase, lean, intensity) in entries {
            let phrase = phrase.as_ref().trim().to_lowercase();
            let tokens: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
            if tokens.is_empty() {
                return Err(LexiconError::EmptyPhrase);
            }

            match seen.get(&phrase) {
                Some(existing) if *existing != lean => {
                    return Err(LexiconError::ConflictingPhrase(phrase));
                }
                Some(_) => return Err(LexiconError::DuplicatePhrase(phrase)),
                None => {
                    seen.insert(phrase.clone(), lean);
                }
            }

            let entry = PhraseEntry {
                phrase,
                tokens,
                lean,
                intensity,
            };
            by_first_token
                .entry(entry.tokens[0].clone())
                .or_default()
                .push(entry);
            entry_count += 1;
        }

        if entry_count == 0 {
            return Err(LexiconError::EmptyLexicon);
        }

        // Longest phrase first so the scanner prefers the most specific match
        for candidates in by_first_token.values_mut() {
            candidates.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
        }

        Ok(PhraseLexicon {
            by_first_token,
            entry_count,
        })
    }

    /// The built-in curated lexicon, shared process-wide.
    pub fn builtin() -> &'static PhraseLexicon {
        &BUILTIN_LEXICON
    }

    /// Number of phrases in the lexicon
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Whether the lexicon holds no phrases (never true for a built lexicon)
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Scan a token stream for phrase hits.
    ///
    /// Longest match wins at each position and the scanner advances past a
    /// matched phrase, so overlapping matches are never double-counted.
    /// Tokens are expected to be lowercase already.
    pub fn scan<'a>(&'a self, tokens: &[String]) -> Vec<&'a PhraseEntry> {
        let mut hits = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let matched = self
                .by_first_token
                .get(tokens[i].as_str())
                .and_then(|candidates| candidates.iter().find(|e| Self::matches_at(e, tokens, i)));

            match matched {
                Some(entry) => {
                    hits.push(entry);
                    i += entry.tokens.len();
                }
                None => i += 1,
            }
        }
        hits
    }

    /// Intensity-weighted lean of a token stream in [-1.0, +1.0].
    ///
    /// Each hit contributes `0.25 × intensity` toward its pole; the sum is
    /// clamped. A stream with no hits leans 0.0.
    pub fn lean(&self, tokens: &[String]) -> f64 {
        let raw: f64 = self
            .scan(tokens)
            .iter()
            .map(|e| 0.25 * e.intensity.weight() * e.lean.direction())
            .sum();
        raw.clamp(-1.0, 1.0)
    }

    /// Sign of the intensity-weighted lean: -1.0, 0.0 or +1.0.
    pub fn direction(&self, tokens: &[String]) -> f64 {
        let net: f64 = self
            .scan(tokens)
            .iter()
            .map(|e| e.intensity.weight() * e.lean.direction())
            .sum();
        if net > 0.0 {
            1.0
        } else if net < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn matches_at(entry: &PhraseEntry, tokens: &[String], start: usize) -> bool {
        if start + entry.tokens.len() > tokens.len() {
            return false;
        }
        entry
            .tokens
            .iter()
            .zip(&tokens[start..])
            .all(|(a, b)| a == b)
    }
}

/// Built-in partisan phrases, adapted from published partisan-language
/// research lexicons. Strong phrases weigh double when accumulating lean.
const BUILTIN_PHRASES: &[(&str, Lean, Intensity)] = &[
    // Left, strong
    ("corporate greed", Lean::Left, Intensity::Strong),
    ("working families", Lean::Left, Intensity::Strong),
    ("income inequality", Lean::Left, Intensity::Strong),
    ("social justice", Lean::Left, Intensity::Strong),
    ("climate crisis", Lean::Left, Intensity::Strong),
    ("systemic racism", Lean::Left, Intensity::Strong),
    ("wealth gap", Lean::Left, Intensity::Strong),
    ("exploitation", Lean::Left, Intensity::Strong),
    ("progressive values", Lean::Left, Intensity::Strong),
    ("people powered", Lean::Left, Intensity::Strong),
    ("grassroots movement", Lean::Left, Intensity::Strong),
    ("economic justice", Lean::Left, Intensity::Strong),
    ("tax the rich", Lean::Left, Intensity::Strong),
    // Left, moderate
    ("affordable healthcare", Lean::Left, Intensity::Moderate),
    ("universal healthcare", Lean::Left, Intensity::Moderate),
    ("public investment", Lean::Left, Intensity::Moderate),
    ("community organizing", Lean::Left, Intensity::Moderate),
    ("environmental protection", Lean::Left, Intensity::Moderate),
    ("worker rights", Lean::Left, Intensity::Moderate),
    ("inclusive growth", Lean::Left, Intensity::Moderate),
    ("public education", Lean::Left, Intensity::Moderate),
    ("social safety net", Lean::Left, Intensity::Moderate),
    ("civil rights", Lean::Left, Intensity::Moderate),
    ("living wage", Lean::Left, Intensity::Moderate),
    // Right, strong
    ("traditional values", Lean::Right, Intensity::Strong),
    ("fiscal responsibility", Lean::Right, Intensity::Strong),
    ("constitutional rights", Lean::Right, Intensity::Strong),
    ("free market", Lean::Right, Intensity::Strong),
    ("individual liberty", Lean::Right, Intensity::Strong),
    ("personal responsibility", Lean::Right, Intensity::Strong),
    ("law and order", Lean::Right, Intensity::Strong),
    ("american dream", Lean::Right, Intensity::Strong),
    ("founding fathers", Lean::Right, Intensity::Strong),
    ("limited government", Lean::Right, Intensity::Strong),
    ("free enterprise", Lean::Right, Intensity::Strong),
    ("moral values", Lean::Right, Intensity::Strong),
    // Right, moderate
    ("economic growth", Lean::Right, Intensity::Moderate),
    ("job creation", Lean::Right, Intensity::Moderate),
    ("business friendly", Lean::Right, Intensity::Moderate),
    ("competitive markets", Lean::Right, Intensity::Moderate),
    ("entrepreneurship", Lean::Right, Intensity::Moderate),
    ("national security", Lean::Right, Intensity::Moderate),
    ("family values", Lean::Right, Intensity::Moderate),
    ("local control", Lean::Right, Intensity::Moderate),
    ("school choice", Lean::Right, Intensity::Moderate),
    ("government overreach", Lean::Right, Intensity::Moderate),
];

static BUILTIN_LEXICON: Lazy<PhraseLexicon> = Lazy::new(|| {
    PhraseLexicon::from_entries(BUILTIN_PHRASES.iter().map(|&(p, l, i)| (p, l, i)))
        .expect("Built-in phrase lexicon is well-formed")
});

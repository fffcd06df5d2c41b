/*!
 * Text segmentation for bias analysis.
 *
 * Splits raw article text into sentences, tags each sentence with a position
 * class (headline / lead / body) and an attribution class (quoted /
 * unattributed), and tokenizes it into lowercase word tokens. The resulting
 * `TextUnit` is the immutable input shared by all methodology scorers.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Word token pattern: alphanumerics with internal apostrophes and hyphens
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9]+(?:['’-][A-Za-z0-9]+)*").expect("Invalid token regex")
});

/// Reporting verbs that mark attributed speech
static REPORTING_VERB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(said|says|stated|declared|claimed|told|added|argued|noted|according to)\b")
        .expect("Invalid reporting verb regex")
});

/// Abbreviations that do not terminate a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sen", "rep", "gov", "gen", "col", "sgt", "lt", "st", "jr",
    "sr", "inc", "ltd", "co", "corp", "vs", "etc", "dept", "est", "u.s", "u.k", "u.n", "e.g",
    "i.e", "a.m", "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec",
];

/// Structural position of a sentence within the article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentencePosition {
    /// The article title
    Headline,
    /// One of the first few body sentences
    Lead,
    /// Any later sentence
    Body,
}

/// Whether a sentence carries attributed speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// Contains a quotation-mark-delimited span with a reporting verb
    Quoted,
    /// Background narration
    Unattributed,
}

/// A single segmented sentence
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Zero-based order within the text unit
    pub index: usize,
    /// Raw sentence text
    pub text: String,
    /// Structural position class
    pub position: SentencePosition,
    /// Attribution class
    pub attribution: Attribution,
    /// Lowercase word tokens
    pub tokens: Vec<String>,
}

impl Sentence {
    fn new(index: usize, text: String, position: SentencePosition) -> Self {
        let attribution = if is_quoted(&text) {
            Attribution::Quoted
        } else {
            Attribution::Unattributed
        };
        let tokens = tokenize(&text);
        Sentence {
            index,
            text,
            position,
            attribution,
            tokens,
        }
    }
}

/// An ordered collection of segmented sentences
#[derive(Debug, Clone, Default)]
pub struct TextUnit {
    sentences: Vec<Sentence>,
}

impl TextUnit {
    /// All sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Whether the unit holds no sentences at all
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// All tokens across all sentences, in document order
    pub fn flat_tokens(&self) -> Vec<String> {
        self.sentences
            .iter()
            .flat_map(|s| s.tokens.iter().cloned())
            .collect()
    }

    /// Tokens of all quoted sentences, in document order
    pub fn quoted_tokens(&self) -> Vec<String> {
        self.sentences
            .iter()
            .filter(|s| s.attribution == Attribution::Quoted)
            .flat_map(|s| s.tokens.iter().cloned())
            .collect()
    }
}

/// Sentence segmenter with a configurable lead length
#[derive(Debug, Clone)]
pub struct Segmenter {
    lead_sentences: usize,
}

impl Segmenter {
    /// Create a segmenter with the default lead length (3 sentences)
    pub fn new() -> Self {
        Segmenter { lead_sentences: 3 }
    }

    /// Create a segmenter tagging the first `lead_sentences` body sentences as lead
    pub fn with_lead_sentences(lead_sentences: usize) -> Self {
        Segmenter { lead_sentences }
    }

    /// Segment raw content and an optional title into a `TextUnit`.
    ///
    /// The title, when present and non-blank, is always the single headline
    /// sentence. Empty or whitespace-only content yields a unit with zero
    /// body sentences rather than an error.
    pub fn segment(&self, content: &str, title: Option<&str>) -> TextUnit {
        let mut sentences = Vec::new();

        if let Some(title) = title {
            let title = title.trim();
            if !title.is_empty() {
                sentences.push(Sentence::new(0, title.to_string(), SentencePosition::Headline));
            }
        }

        let headline_count = sentences.len();
        for (body_index, text) in split_sentences(content).into_iter().enumerate() {
            let position = if body_index < self.lead_sentences {
                SentencePosition::Lead
            } else {
                SentencePosition::Body
            };
            sentences.push(Sentence::new(headline_count + body_index, text, position));
        }

        debug!(
            "Segmented {} sentences ({} headline)",
            sentences.len(),
            headline_count
        );

        TextUnit { sentences }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase word tokens of a text span
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// A sentence is quoted when it has a quotation-delimited span plus a
/// reporting verb. Straight and curly double quotes both count.
fn is_quoted(text: &str) -> bool {
    let straight = text.matches('"').count();
    let has_span = straight >= 2 || (text.contains('\u{201C}') && text.contains('\u{201D}'));
    has_span && REPORTING_VERB_REGEX.is_match(text)
}

/// Split text into sentences on terminal punctuation followed by whitespace
/// and a sentence opener, guarding against common abbreviations and decimal
/// numbers.
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        current.push(c);
        i += 1;

        if c != '.' && c != '!' && c != '?' {
            continue;
        }

        // Closing quotes belong to the sentence they terminate
        while i < chars.len() && matches!(chars[i], '"' | '\u{201D}' | '\'' | '\u{2019}' | ')') {
            current.push(chars[i]);
            i += 1;
        }

        if c == '.' && ends_with_abbreviation(&current) {
            continue;
        }

        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j == i && j < chars.len() {
            // No whitespace after the terminator (e.g. "3.5")
            continue;
        }

        let opener = match chars.get(j) {
            None => true,
            Some(ch) => {
                ch.is_uppercase() || ch.is_ascii_digit() || matches!(*ch, '"' | '\u{201C}')
            }
        };
        if !opener {
            continue;
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
        current.clear();
        i = j;
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// Whether the text ends in a known abbreviation or a single-letter initial
fn ends_with_abbreviation(current: &str) -> bool {
    let trimmed = current.trim_end();
    let without_dot = match trimmed.strip_suffix('.') {
        Some(s) => s,
        None => return false,
    };

    let word: String = without_dot
        .chars()
        .rev()
        .take_while(|ch| ch.is_alphanumeric() || *ch == '.')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let word = word.to_lowercase();

    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&word.as_str())
}

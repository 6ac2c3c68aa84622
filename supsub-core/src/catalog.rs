//! Pattern catalog
//!
//! Declares every recognized notation as an independent pattern family and
//! combines them into one alternation-ordered scanner. Catalog order is the
//! tie-break: when two families can start a match at the same position, the
//! earlier one wins, exactly like the first successful branch of a regex
//! alternation. It is never "longest match wins".
//!
//! Each family is compiled as a lookaround-free body anchored at the
//! candidate position plus an adjacency guard standing in for the lookarounds
//! of its display pattern. All character classes use ASCII semantics: a word
//! character is `[A-Za-z0-9_]` and a digit is `[0-9]`.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Compiled catalogs, one per ordinal setting
static WITH_ORDINALS: OnceLock<Catalog> = OnceLock::new();
static WITHOUT_ORDINALS: OnceLock<Catalog> = OnceLock::new();

/// A recognized notation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    /// `™`, `(TM)` or a standalone `TM`
    Trademark,
    /// `®` or `(R)`
    Registered,
    /// `©` or `(C)`
    Copyright,
    /// `1st`, `22nd`, `103rd`, `4th`
    Ordinal,
    /// `H2`, `Ca3`
    ChemicalElement,
    /// `)2` as in `(OH)2`
    ChemicalParen,
    /// `^2`, `^{n+1}`
    MathSuper,
    /// `_2`, `_{ij}`
    MathSub,
}

impl PatternFamily {
    /// Every family in catalog order
    pub const ALL: [PatternFamily; 8] = [
        PatternFamily::Trademark,
        PatternFamily::Registered,
        PatternFamily::Copyright,
        PatternFamily::Ordinal,
        PatternFamily::ChemicalElement,
        PatternFamily::ChemicalParen,
        PatternFamily::MathSuper,
        PatternFamily::MathSub,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            PatternFamily::Trademark => "trademark",
            PatternFamily::Registered => "registered",
            PatternFamily::Copyright => "copyright",
            PatternFamily::Ordinal => "ordinal",
            PatternFamily::ChemicalElement => "chemical-element",
            PatternFamily::ChemicalParen => "chemical-paren",
            PatternFamily::MathSuper => "math-super",
            PatternFamily::MathSub => "math-sub",
        }
    }

    /// One-line description for listings
    pub fn description(self) -> &'static str {
        match self {
            PatternFamily::Trademark => "trademark sign, superscripted as ™",
            PatternFamily::Registered => "registered sign, superscripted as ®",
            PatternFamily::Copyright => "copyright sign, normalized to © without superscript",
            PatternFamily::Ordinal => "ordinal suffix after digits, superscripted",
            PatternFamily::ChemicalElement => "digits after an element-like token, subscripted",
            PatternFamily::ChemicalParen => "digits after a closing parenthesis, subscripted",
            PatternFamily::MathSuper => "caret exponent, superscripted",
            PatternFamily::MathSub => "underscore index, subscripted",
        }
    }

    /// The family's full matching rule in regex notation, lookarounds included
    pub fn pattern_source(self) -> &'static str {
        match self {
            PatternFamily::Trademark => r"™|\(TM\)|(?<!\w)TM(?!\w)",
            PatternFamily::Registered => r"®|\(R\)(?!\))",
            PatternFamily::Copyright => r"©|\(C\)(?!\))",
            PatternFamily::Ordinal => r"\b(\d+)(st|nd|rd|th)\b",
            PatternFamily::ChemicalElement => r"([A-Z][a-z]?)(\d+)",
            PatternFamily::ChemicalParen => r"\)(\d+)",
            PatternFamily::MathSuper => r"\^(\d+|\{[^}]+\})",
            PatternFamily::MathSub => r"_(\d+|\{[^}]+\})",
        }
    }

    /// Lookaround-free part of the rule; `guard` supplies the rest
    fn body(self) -> &'static str {
        match self {
            PatternFamily::Trademark => r"™|\(TM\)|TM",
            PatternFamily::Registered => r"®|\(R\)",
            PatternFamily::Copyright => r"©|\(C\)",
            PatternFamily::Ordinal => r"[0-9]+(?:st|nd|rd|th)",
            PatternFamily::ChemicalElement => r"[A-Z][a-z]?[0-9]+",
            PatternFamily::ChemicalParen => r"\)[0-9]+",
            PatternFamily::MathSuper => r"\^(?:[0-9]+|\{[^}]+\})",
            PatternFamily::MathSub => r"_(?:[0-9]+|\{[^}]+\})",
        }
    }

    /// Adjacency rules for a body match spanning `start..end` of `text`
    fn guard(self, text: &str, start: usize, end: usize) -> bool {
        let raw = &text[start..end];
        match self {
            PatternFamily::Trademark if raw == "TM" => {
                !is_word_char(char_before(text, start)) && !is_word_char(char_after(text, end))
            }
            PatternFamily::Registered | PatternFamily::Copyright if raw.starts_with('(') => {
                char_after(text, end) != Some(')')
            }
            PatternFamily::Ordinal => {
                !is_word_char(char_before(text, start)) && !is_word_char(char_after(text, end))
            }
            _ => true,
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

fn char_after(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

fn is_word_char(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_alphanumeric() || c == '_')
}

/// One raw match found by a scan pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch<'a> {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
    /// Family that claimed the match
    pub family: PatternFamily,
    /// Matched text, `&text[start..end]`
    pub raw: &'a str,
}

#[derive(Debug)]
struct CompiledFamily {
    family: PatternFamily,
    anchored: Regex,
}

/// Compiled, immutable set of active pattern families
#[derive(Debug)]
pub struct Catalog {
    families: Vec<CompiledFamily>,
    /// Unanchored alternation of every active body; locates candidate starts
    prefilter: Regex,
}

impl Catalog {
    /// Compile a catalog. The ordinal family is left out entirely when
    /// `ordinals_enabled` is false.
    pub fn new(ordinals_enabled: bool) -> Result<Self, regex::Error> {
        let active: Vec<PatternFamily> = PatternFamily::ALL
            .into_iter()
            .filter(|family| ordinals_enabled || *family != PatternFamily::Ordinal)
            .collect();

        let families = active
            .iter()
            .map(|&family| {
                Ok(CompiledFamily {
                    family,
                    anchored: Regex::new(&format!("^(?:{})", family.body()))?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let prefilter = Regex::new(&join_alternation(active.iter().map(|f| f.body())))?;

        Ok(Self {
            families,
            prefilter,
        })
    }

    /// Shared catalog, compiled on first use
    pub fn shared(ordinals_enabled: bool) -> &'static Catalog {
        let cell = if ordinals_enabled {
            &WITH_ORDINALS
        } else {
            &WITHOUT_ORDINALS
        };
        cell.get_or_init(|| {
            Catalog::new(ordinals_enabled).expect("built-in family patterns are valid regexes")
        })
    }

    /// Active families in catalog order
    pub fn families(&self) -> impl Iterator<Item = PatternFamily> + '_ {
        self.families.iter().map(|compiled| compiled.family)
    }

    /// `(family, pattern source)` pairs in catalog order
    pub fn patterns(&self) -> Vec<(PatternFamily, &'static str)> {
        self.families()
            .map(|family| (family, family.pattern_source()))
            .collect()
    }

    /// Every active pattern source joined by alternation, in catalog order
    pub fn combined_source(&self) -> String {
        join_alternation(self.families().map(PatternFamily::pattern_source))
    }

    /// Whether anything in `text` could match. Never false when
    /// [`Catalog::find_from`] would find a match.
    pub fn may_match(&self, text: &str) -> bool {
        self.prefilter.is_match(text)
    }

    /// First match starting at or after byte offset `from`
    pub fn find_from<'a>(&self, text: &'a str, from: usize) -> Option<ScanMatch<'a>> {
        let mut cursor = from;
        while let Some(candidate) = self.prefilter.find_at(text, cursor) {
            let start = candidate.start();
            if let Some(found) = self.match_at(text, start) {
                return Some(found);
            }
            // No family survives its guard here; step over one character
            cursor = start + char_after(text, start).map_or(1, char::len_utf8);
            if cursor > text.len() {
                break;
            }
        }
        None
    }

    /// Try each family at `start` in catalog order; first acceptance wins
    fn match_at<'a>(&self, text: &'a str, start: usize) -> Option<ScanMatch<'a>> {
        let rest = &text[start..];
        self.families.iter().find_map(|compiled| {
            let found = compiled.anchored.find(rest)?;
            let end = start + found.end();
            compiled
                .family
                .guard(text, start, end)
                .then(|| ScanMatch {
                    start,
                    end,
                    family: compiled.family,
                    raw: &text[start..end],
                })
        })
    }
}

fn join_alternation<'a>(sources: impl Iterator<Item = &'a str>) -> String {
    sources
        .map(|source| format!("(?:{source})"))
        .collect::<Vec<_>>()
        .join("|")
}

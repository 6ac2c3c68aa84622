//! Single-pass segmenter
//!
//! Walks the catalog's matches left to right, keeps the unmatched gaps as
//! plain text and hands every match to the classifier for its family.

use crate::catalog::{Catalog, PatternFamily, ScanMatch};
use crate::segment::{Segment, Segmentation};
use smallvec::{smallvec, SmallVec};

/// Segments emitted for one match; never more than two
pub type Classified = SmallVec<[Segment; 2]>;

/// Per-call segmenter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Recognize ordinal suffixes such as `1st`
    pub ordinals_enabled: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            ordinals_enabled: true,
        }
    }
}

impl SegmentOptions {
    /// Options with ordinal recognition switched on or off
    pub fn with_ordinals(ordinals_enabled: bool) -> Self {
        Self { ordinals_enabled }
    }
}

/// Split `text` into plain, superscript and subscript segments.
///
/// Never fails: text that cannot be annotated comes back as plain segments.
pub fn segment(text: &str, options: SegmentOptions) -> Segmentation {
    segment_with(Catalog::shared(options.ordinals_enabled), text)
}

/// Segment against an explicit catalog
pub fn segment_with(catalog: &Catalog, text: &str) -> Segmentation {
    if !catalog.may_match(text) {
        return Segmentation::unchanged(text);
    }

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(found) = catalog.find_from(text, last) {
        if found.start > last {
            segments.push(Segment::plain(&text[last..found.start]));
        }
        segments.extend(classify(&found));
        last = found.end;
    }

    if segments.is_empty() {
        return Segmentation::unchanged(text);
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    Segmentation::from_segments(segments)
}

/// Turn one match into its output segments
pub fn classify(found: &ScanMatch<'_>) -> Classified {
    let raw = found.raw;
    let classified = match found.family {
        PatternFamily::Trademark => Some(smallvec![Segment::sup("™")]),
        PatternFamily::Registered => Some(smallvec![Segment::sup("®")]),
        PatternFamily::Copyright => Some(smallvec![Segment::plain("©")]),
        PatternFamily::Ordinal => split_ordinal(raw),
        PatternFamily::ChemicalElement => split_element(raw),
        PatternFamily::ChemicalParen => split_paren(raw),
        PatternFamily::MathSuper => strip_math(raw, '^').map(|c| smallvec![Segment::sup(c)]),
        PatternFamily::MathSub => strip_math(raw, '_').map(|c| smallvec![Segment::sub(c)]),
    };

    classified.unwrap_or_else(|| {
        log::debug!(
            "could not decompose {} match {:?} at {}; keeping it as plain text",
            found.family,
            raw,
            found.start
        );
        smallvec![Segment::plain(raw)]
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `21st` -> `21` + superscript `st`
fn split_ordinal(raw: &str) -> Option<Classified> {
    let split = raw.find(|c: char| !c.is_ascii_digit())?;
    let (digits, suffix) = raw.split_at(split);
    if !is_digits(digits) || !matches!(suffix, "st" | "nd" | "rd" | "th") {
        return None;
    }
    Some(smallvec![Segment::plain(digits), Segment::sup(suffix)])
}

/// `Ca3` -> `Ca` + subscript `3`
fn split_element(raw: &str) -> Option<Classified> {
    let split = raw.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = raw.split_at(split);
    let mut chars = letters.chars();
    let head_ok = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    let tail_ok = chars.as_str().len() <= 1 && chars.all(|c| c.is_ascii_lowercase());
    if !head_ok || !tail_ok || !is_digits(digits) {
        return None;
    }
    Some(smallvec![Segment::plain(letters), Segment::sub(digits)])
}

/// `)2` -> `)` + subscript `2`
fn split_paren(raw: &str) -> Option<Classified> {
    let digits = raw.strip_prefix(')')?;
    if !is_digits(digits) {
        return None;
    }
    Some(smallvec![Segment::plain(")"), Segment::sub(digits)])
}

/// Drop the leading marker and every brace; empty results are rejected
fn strip_math(raw: &str, marker: char) -> Option<String> {
    let content: String = raw
        .strip_prefix(marker)?
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .collect();
    (!content.is_empty()).then_some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentKind;

    fn run(text: &str) -> Vec<Segment> {
        segment(text, SegmentOptions::default()).into_segments()
    }

    fn scan(family: PatternFamily, raw: &str) -> ScanMatch<'_> {
        ScanMatch {
            start: 0,
            end: raw.len(),
            family,
            raw,
        }
    }

    #[test]
    fn test_trademark_variants_are_canonical() {
        for input in ["™", "(TM)", "TM"] {
            assert_eq!(run(input), vec![Segment::sup("™")], "input {input:?}");
        }
    }

    #[test]
    fn test_copyright_stays_plain() {
        assert_eq!(run("(C)"), vec![Segment::plain("©")]);
        assert!(!segment("(C)", SegmentOptions::default()).has_annotations());
    }

    #[test]
    fn test_paren_formula() {
        assert_eq!(
            run("Ca(OH)2"),
            vec![
                Segment::plain("Ca(OH"),
                Segment::plain(")"),
                Segment::sub("2"),
            ]
        );
    }

    #[test]
    fn test_adjacent_matches_leave_no_empty_gaps() {
        let segments = run("H2SO4");
        assert_eq!(
            segments,
            vec![
                Segment::plain("H"),
                Segment::sub("2"),
                Segment::plain("S"),
                Segment::plain("O"),
                Segment::sub("4"),
            ]
        );
        assert!(segments.iter().all(|s| !s.content.is_empty()));
    }

    #[test]
    fn test_math_braces_stripped() {
        assert_eq!(
            run("x^{n+1} + a_{ij}"),
            vec![
                Segment::plain("x"),
                Segment::sup("n+1"),
                Segment::plain(" + a"),
                Segment::sub("ij"),
            ]
        );
    }

    #[test]
    fn test_brace_group_empty_after_stripping_degrades() {
        assert_eq!(run("^{{}"), vec![Segment::plain("^{{}")]);
    }

    #[test]
    fn test_ordinals_toggle() {
        let off = segment("the 2nd try", SegmentOptions::with_ordinals(false));
        assert_eq!(off.segments(), &[Segment::plain("the 2nd try")]);

        let on = segment("the 2nd try", SegmentOptions::with_ordinals(true));
        assert_eq!(on.count(SegmentKind::Super), 1);
    }

    #[test]
    fn test_candidates_without_match_return_single_segment() {
        assert_eq!(run("ATM (R)) x^y"), vec![Segment::plain("ATM (R)) x^y")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), vec![Segment::plain("")]);
    }

    #[test]
    fn test_classify_fallbacks() {
        let bad = [
            scan(PatternFamily::Ordinal, "12xy"),
            scan(PatternFamily::Ordinal, "st"),
            scan(PatternFamily::ChemicalElement, "abc1"),
            scan(PatternFamily::ChemicalElement, "Abc1"),
            scan(PatternFamily::ChemicalParen, "]2"),
            scan(PatternFamily::MathSuper, "_2"),
            scan(PatternFamily::MathSub, "_{}"),
        ];
        for found in bad {
            assert_eq!(
                classify(&found).into_vec(),
                vec![Segment::plain(found.raw)],
                "raw {:?}",
                found.raw
            );
        }
    }

    #[test]
    fn test_classify_splits() {
        assert_eq!(
            classify(&scan(PatternFamily::Ordinal, "103rd")).into_vec(),
            vec![Segment::plain("103"), Segment::sup("rd")]
        );
        assert_eq!(
            classify(&scan(PatternFamily::ChemicalElement, "Ca12")).into_vec(),
            vec![Segment::plain("Ca"), Segment::sub("12")]
        );
    }
}

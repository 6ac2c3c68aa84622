//! Property tests for the segmenter invariants

use proptest::prelude::*;
use supsub_core::segmenter::classify;
use supsub_core::{segment, Catalog, PatternFamily, Segment, SegmentKind, SegmentOptions};

/// Characters that trip many families at once
const TRIGGER_RICH: &str = "[A-Za-z0-9()^_{} ™®©\n]{0,48}";

/// Input text with every match rewritten to its rendered form
fn rendered_reference(text: &str, ordinals: bool) -> String {
    let catalog = Catalog::shared(ordinals);
    let mut out = String::new();
    let mut last = 0;
    while let Some(found) = catalog.find_from(text, last) {
        out.push_str(&text[last..found.start]);
        match found.family {
            PatternFamily::Trademark => out.push('™'),
            PatternFamily::Registered => out.push('®'),
            PatternFamily::Copyright => out.push('©'),
            PatternFamily::MathSuper | PatternFamily::MathSub => {
                let inner: String = found.raw[1..]
                    .chars()
                    .filter(|c| !matches!(c, '{' | '}'))
                    .collect();
                // Brace-only groups stay as written
                out.push_str(if inner.is_empty() { found.raw } else { inner.as_str() });
            }
            _ => out.push_str(found.raw),
        }
        last = found.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Gaps between matches as plain segments, each match classified in place
fn gap_and_match_segments(text: &str, ordinals: bool) -> Vec<Segment> {
    let catalog = Catalog::shared(ordinals);
    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(found) = catalog.find_from(text, last) {
        if found.start > last {
            segments.push(Segment::plain(&text[last..found.start]));
        }
        segments.extend(classify(&found));
        last = found.end;
    }
    if segments.is_empty() || last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}

proptest! {
    #[test]
    fn never_empty_and_annotations_have_content(text in TRIGGER_RICH, ordinals in any::<bool>()) {
        let result = segment(&text, SegmentOptions::with_ordinals(ordinals));
        prop_assert!(!result.is_empty());
        for seg in result.iter().filter(|s| s.is_annotation()) {
            prop_assert!(!seg.content.is_empty());
            let has_brace = seg.content.contains(['{', '}']);
            prop_assert!(!has_brace, "braces left in {:?}", seg.content);
        }
    }

    #[test]
    fn arbitrary_unicode_never_panics(text in any::<String>()) {
        let result = segment(&text, SegmentOptions::default());
        prop_assert!(!result.is_empty());
    }

    #[test]
    fn deterministic(text in TRIGGER_RICH) {
        let options = SegmentOptions::default();
        prop_assert_eq!(segment(&text, options), segment(&text, options));
    }

    #[test]
    fn splitting_families_preserve_text(text in "[a-zA-BD-QSU-Z0-9 ().\n]{0,48}") {
        // Without C, R, T, carets and underscores only splitting families
        // can fire, so the text must survive verbatim
        let result = segment(&text, SegmentOptions::default());
        prop_assert_eq!(result.plain_text(), text);
    }

    #[test]
    fn every_family_preserves_text_up_to_rendering(text in TRIGGER_RICH, ordinals in any::<bool>()) {
        let result = segment(&text, SegmentOptions::with_ordinals(ordinals));
        prop_assert_eq!(result.plain_text(), rendered_reference(&text, ordinals));
    }

    #[test]
    fn plain_gaps_are_verbatim_slices(text in TRIGGER_RICH, ordinals in any::<bool>()) {
        let result = segment(&text, SegmentOptions::with_ordinals(ordinals));
        prop_assert_eq!(result.into_segments(), gap_and_match_segments(&text, ordinals));
    }

    #[test]
    fn matches_are_ordered_and_disjoint(text in TRIGGER_RICH) {
        let catalog = Catalog::shared(true);
        let mut last_end = 0;
        while let Some(found) = catalog.find_from(&text, last_end) {
            prop_assert!(found.start >= last_end);
            prop_assert!(found.end > found.start);
            prop_assert_eq!(found.raw, &text[found.start..found.end]);
            last_end = found.end;
        }
    }

    #[test]
    fn no_raw_triggers_leak(tokens in prop::collection::vec(
        prop::sample::select(vec![
            "(TM)", "(R)", "(C)", "TM", "^2", "^{n}", "_3", "_{ij}", "word", "H2O", "4th",
        ]),
        1..12,
    )) {
        let text = tokens.join(" ");
        let result = segment(&text, SegmentOptions::default());
        for seg in result.iter().filter(|s| s.kind == SegmentKind::Plain) {
            for trigger in ["(TM)", "(R)", "(C)", "^", "_"] {
                prop_assert!(
                    !seg.content.contains(trigger),
                    "{:?} leaked in {:?}",
                    trigger,
                    seg.content
                );
            }
            prop_assert_ne!(seg.content.as_str(), "TM");
        }
    }

    #[test]
    fn canonical_symbols_are_fixed_points(text in "[a-z ™®©]{0,32}") {
        let first = segment(&text, SegmentOptions::default());
        prop_assert_eq!(first.plain_text(), text.clone());
        let second = segment(&first.plain_text(), SegmentOptions::default());
        prop_assert_eq!(first, second);
    }
}

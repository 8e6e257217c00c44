//! Unicode Bidirectional Algorithm (UAX#9) resolver.
//!
//! Resolves embedding levels for one paragraph of text in logical order:
//! paragraph level detection (P2-P3), explicit levels (X1-X8), X9
//! neutralization, isolating run sequences (BD13/X10), weak types (W1-W7),
//! paired brackets (N0), neutrals (N1-N2) and implicit levels (I1-I2).

use crate::tables::{bidi_class, bracket_type, canonical_bracket};
use crate::types::*;

/// A paragraph resolved through the implicit rules.
///
/// `levels` are the per-code-point embedding levels after I1-I2; the L1 line
/// resets have not been applied yet (they depend on line boundaries).
#[derive(Debug, Clone)]
pub struct ResolvedParagraph {
    /// Code points in logical order.
    pub chars: Vec<char>,
    /// Classifier output, untouched by any rule.
    pub original_classes: Vec<BidiClass>,
    /// Working classes after the W/N rules.
    pub classes: Vec<BidiClass>,
    /// Embedding levels after I1-I2.
    pub levels: Vec<u8>,
    /// Paragraph embedding level (0 or 1).
    pub paragraph_level: u8,
}

/// Resolve a paragraph through the implicit rules (everything up to L1).
pub fn resolve_paragraph(text: &str, base_dir: BidiDir) -> ResolvedParagraph {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let original_classes: Vec<BidiClass> = chars.iter().map(|&ch| bidi_class(ch)).collect();
    let mut classes = original_classes.clone();

    let pairs = IsolatePairs::new(&original_classes);

    // P2-P3: determine the paragraph level
    let paragraph_level = match base_dir {
        BidiDir::LTR => 0,
        BidiDir::RTL => 1,
        BidiDir::Auto => first_strong_level(&original_classes, &pairs, 0, n),
    };
    log::trace!(
        "resolving paragraph of {} code points at level {}",
        n,
        paragraph_level
    );

    if chars.is_empty() {
        return ResolvedParagraph {
            chars,
            original_classes,
            classes,
            levels: Vec::new(),
            paragraph_level,
        };
    }

    // X1-X8: explicit embedding levels
    let mut levels = resolve_explicit(&mut classes, &pairs, paragraph_level);

    // X9: embedding and override controls become boundary neutrals. They keep
    // the level the explicit pass assigned them but are invisible to every
    // strong-type lookup from here on.
    for class in classes.iter_mut() {
        if matches!(
            *class,
            BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO | BidiClass::PDF
        ) {
            *class = BidiClass::BN;
        }
    }

    // X10/BD13: group level runs into isolating run sequences and run the
    // W/N/I rules on each. Sequences cover pairwise-disjoint runs, so the
    // in-place mutation cannot alias across them.
    let sequences = isolating_run_sequences(&levels, &original_classes, &pairs, paragraph_level);
    for seq in &sequences {
        resolve_weak(&mut classes, seq);
        resolve_brackets(&mut classes, &chars, seq);
        resolve_neutral(&mut classes, seq);
        resolve_implicit(&mut levels, &classes, &original_classes, seq);
    }

    ResolvedParagraph {
        chars,
        original_classes,
        classes,
        levels,
        paragraph_level,
    }
}

/// Resolve bidi embedding levels for a single-line paragraph.
///
/// Returns one level per code point in `text`, with the L1 whitespace resets
/// applied for a line spanning the whole paragraph. `base_dir` selects the
/// paragraph direction (LTR, RTL, or Auto for P2-P3).
pub fn resolve_levels(text: &str, base_dir: BidiDir) -> Vec<u8> {
    let mut para = resolve_paragraph(text, base_dir);
    reset_levels(
        &mut para.levels,
        &para.original_classes,
        para.paragraph_level,
    );
    para.levels
}

/// Matching isolate pairs (BD9).
///
/// For each isolate initiator the index of its matching PDI, if any, and the
/// reverse map. An unmatched initiator scans to the end of the paragraph.
pub(crate) struct IsolatePairs {
    pdi_for_initiator: Vec<Option<usize>>,
    initiator_for_pdi: Vec<Option<usize>>,
}

impl IsolatePairs {
    pub(crate) fn new(classes: &[BidiClass]) -> Self {
        let n = classes.len();
        let mut pdi_for_initiator = vec![None; n];
        let mut initiator_for_pdi = vec![None; n];
        let mut stack: Vec<usize> = Vec::new();

        for (i, &class) in classes.iter().enumerate() {
            if class.is_isolate_initiator() {
                stack.push(i);
            } else if class == BidiClass::PDI {
                if let Some(initiator) = stack.pop() {
                    pdi_for_initiator[initiator] = Some(i);
                    initiator_for_pdi[i] = Some(initiator);
                }
            }
        }

        IsolatePairs {
            pdi_for_initiator,
            initiator_for_pdi,
        }
    }

    /// Where a scan skipping the isolate opened at `i` resumes: the matching
    /// PDI, or `n` when the initiator is unmatched.
    fn skip_target(&self, i: usize, n: usize) -> usize {
        self.pdi_for_initiator[i].unwrap_or(n)
    }
}

/// P2-P3: level implied by the first strong class in `start..end`, skipping
/// over isolates. Returns 0 when nothing strong is found.
///
/// Also used by X5c to resolve an FSI from its content.
fn first_strong_level(
    classes: &[BidiClass],
    pairs: &IsolatePairs,
    start: usize,
    end: usize,
) -> u8 {
    let mut i = start;
    while i < end {
        match classes[i] {
            BidiClass::L => return 0,
            BidiClass::R | BidiClass::AL => return 1,
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => {
                i = pairs.skip_target(i, classes.len());
            }
            _ => {}
        }
        i += 1;
    }
    0
}

fn apply_override(class: &mut BidiClass, status: Override) {
    match status {
        Override::LTR => *class = BidiClass::L,
        Override::RTL => *class = BidiClass::R,
        Override::Neutral => {}
    }
}

/// X1-X8: resolve explicit embedding levels.
fn resolve_explicit(
    classes: &mut [BidiClass],
    pairs: &IsolatePairs,
    paragraph_level: u8,
) -> Vec<u8> {
    let n = classes.len();
    let mut levels = vec![paragraph_level; n];

    let mut stack: Vec<DirectionalStatus> = Vec::with_capacity(MAX_DEPTH as usize + 2);
    stack.push(DirectionalStatus {
        level: paragraph_level,
        override_status: Override::Neutral,
        isolate_status: false,
    });

    let mut overflow_isolate_count = 0u32;
    let mut overflow_embedding_count = 0u32;
    let mut valid_isolate_count = 0u32;

    for i in 0..n {
        let class = classes[i];
        match class {
            // X2-X5: embeddings and overrides
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                let top = *stack.last().unwrap();
                levels[i] = top.level;
                let new_level = match class {
                    BidiClass::RLE | BidiClass::RLO => least_odd_greater_than(top.level),
                    _ => least_even_greater_than(top.level),
                };
                let override_status = match class {
                    BidiClass::RLO => Override::RTL,
                    BidiClass::LRO => Override::LTR,
                    _ => Override::Neutral,
                };
                if new_level <= MAX_DEPTH
                    && overflow_isolate_count == 0
                    && overflow_embedding_count == 0
                {
                    stack.push(DirectionalStatus {
                        level: new_level,
                        override_status,
                        isolate_status: false,
                    });
                } else if overflow_isolate_count == 0 {
                    overflow_embedding_count += 1;
                }
            }
            // X5a-X5c: isolate initiators inherit the surrounding level
            BidiClass::RLI | BidiClass::LRI | BidiClass::FSI => {
                let top = *stack.last().unwrap();
                levels[i] = top.level;
                apply_override(&mut classes[i], top.override_status);
                let rtl = match class {
                    BidiClass::RLI => true,
                    BidiClass::LRI => false,
                    // X5c: the direction of an FSI comes from its content
                    _ => {
                        let limit = pairs.skip_target(i, n);
                        first_strong_level(classes, pairs, i + 1, limit) == 1
                    }
                };
                let new_level = if rtl {
                    least_odd_greater_than(top.level)
                } else {
                    least_even_greater_than(top.level)
                };
                if new_level <= MAX_DEPTH
                    && overflow_isolate_count == 0
                    && overflow_embedding_count == 0
                {
                    valid_isolate_count += 1;
                    stack.push(DirectionalStatus {
                        level: new_level,
                        override_status: Override::Neutral,
                        isolate_status: true,
                    });
                } else {
                    overflow_isolate_count += 1;
                }
            }
            // X6a: PDI
            BidiClass::PDI => {
                if overflow_isolate_count > 0 {
                    overflow_isolate_count -= 1;
                } else if valid_isolate_count > 0 {
                    overflow_embedding_count = 0;
                    while stack.len() > 1 && !stack.last().unwrap().isolate_status {
                        stack.pop();
                    }
                    if stack.len() > 1 {
                        stack.pop();
                    }
                    valid_isolate_count -= 1;
                }
                let top = *stack.last().unwrap();
                levels[i] = top.level;
                apply_override(&mut classes[i], top.override_status);
            }
            // X7: PDF takes the level of the frame in force when it arrives
            BidiClass::PDF => {
                levels[i] = stack.last().unwrap().level;
                if overflow_isolate_count > 0 {
                    // absorbed by an overflowing isolate
                } else if overflow_embedding_count > 0 {
                    overflow_embedding_count -= 1;
                } else if !stack.last().unwrap().isolate_status && stack.len() > 1 {
                    stack.pop();
                }
            }
            // X8: paragraph separator resets the whole machine
            BidiClass::B => {
                overflow_isolate_count = 0;
                overflow_embedding_count = 0;
                valid_isolate_count = 0;
                stack.truncate(1);
                levels[i] = paragraph_level;
            }
            // X6: everything else
            _ => {
                let top = *stack.last().unwrap();
                levels[i] = top.level;
                apply_override(&mut classes[i], top.override_status);
            }
        }
    }

    levels
}

/// An isolating run sequence (BD13): level runs at a shared level, connected
/// by isolate initiator/PDI pairs.
struct RunSequence {
    /// Constituent level runs as `(start, end)` index ranges, logical order.
    runs: Vec<(usize, usize)>,
    level: u8,
    sos: BidiClass,
    eos: BidiClass,
}

impl RunSequence {
    /// Character indices covered by this sequence, in logical order.
    fn indices(&self) -> Vec<usize> {
        let mut result = Vec::new();
        for &(start, end) in &self.runs {
            result.extend(start..end);
        }
        result
    }
}

/// BD7: maximal runs of equal level.
fn level_runs(levels: &[u8]) -> Vec<(usize, usize)> {
    let n = levels.len();
    let mut runs = Vec::new();
    if n == 0 {
        return runs;
    }
    let mut start = 0;
    for i in 1..n {
        if levels[i] != levels[start] {
            runs.push((start, i));
            start = i;
        }
    }
    runs.push((start, n));
    runs
}

fn direction_of(level: u8) -> BidiClass {
    if level % 2 == 0 {
        BidiClass::L
    } else {
        BidiClass::R
    }
}

/// X10/BD13: group level runs into isolating run sequences.
///
/// Every run not led by a matched PDI seeds a sequence; while the sequence
/// ends in an isolate initiator with a matching PDI, the run containing that
/// PDI is appended. Initiator classes are the original ones, before any
/// override rewriting.
fn isolating_run_sequences(
    levels: &[u8],
    original_classes: &[BidiClass],
    pairs: &IsolatePairs,
    paragraph_level: u8,
) -> Vec<RunSequence> {
    let n = levels.len();
    let runs = level_runs(levels);

    let mut run_of = vec![0usize; n];
    for (idx, &(start, end)) in runs.iter().enumerate() {
        for i in start..end {
            run_of[i] = idx;
        }
    }

    let mut sequences = Vec::with_capacity(runs.len());
    for &(start, end) in &runs {
        // Runs led by a matched PDI are consumed by the sequence of their
        // initiator.
        if original_classes[start] == BidiClass::PDI && pairs.initiator_for_pdi[start].is_some() {
            continue;
        }

        let mut seq_runs = vec![(start, end)];
        let mut last = end - 1;
        while original_classes[last].is_isolate_initiator() {
            match pairs.pdi_for_initiator[last] {
                Some(pdi) => {
                    let run = runs[run_of[pdi]];
                    seq_runs.push(run);
                    last = run.1 - 1;
                }
                None => break,
            }
        }

        let first = seq_runs[0].0;
        let level = levels[first];

        let prev_level = if first == 0 {
            paragraph_level
        } else {
            levels[first - 1]
        };
        let sos = direction_of(level.max(prev_level));

        // An unmatched isolate initiator faces the paragraph level; otherwise
        // the boundary is the level of the character after the sequence.
        let next = last + 1;
        let next_level = if original_classes[last].is_isolate_initiator()
            && pairs.pdi_for_initiator[last].is_none()
        {
            paragraph_level
        } else if next < n {
            levels[next]
        } else {
            paragraph_level
        };
        let eos = direction_of(level.max(next_level));

        sequences.push(RunSequence {
            runs: seq_runs,
            level,
            sos,
            eos,
        });
    }

    sequences
}

/// W1-W7: resolve weak types within an isolating run sequence.
fn resolve_weak(classes: &mut [BidiClass], seq: &RunSequence) {
    let indices = seq.indices();
    if indices.is_empty() {
        return;
    }

    // W1: NSM takes the class of the preceding character, ON after an
    // isolate initiator or PDI, sos at the start.
    let mut prev_type = seq.sos;
    for &i in &indices {
        if classes[i] == BidiClass::NSM {
            classes[i] = match prev_type {
                BidiClass::LRI | BidiClass::RLI | BidiClass::FSI | BidiClass::PDI => BidiClass::ON,
                other => other,
            };
        }
        prev_type = classes[i];
    }

    // W2: EN becomes AN while the nearest preceding strong type is AL
    let mut last_strong = seq.sos;
    for &i in &indices {
        match classes[i] {
            BidiClass::L | BidiClass::R | BidiClass::AL => last_strong = classes[i],
            BidiClass::EN if last_strong == BidiClass::AL => classes[i] = BidiClass::AN,
            _ => {}
        }
    }

    // W3: AL becomes R
    for &i in &indices {
        if classes[i] == BidiClass::AL {
            classes[i] = BidiClass::R;
        }
    }

    // W4: a single ES between two ENs becomes EN; a single CS between two
    // numbers of the same kind becomes that kind
    for w in 1..indices.len().saturating_sub(1) {
        let (prev, cur, next) = (indices[w - 1], indices[w], indices[w + 1]);
        match classes[cur] {
            BidiClass::ES => {
                if classes[prev] == BidiClass::EN && classes[next] == BidiClass::EN {
                    classes[cur] = BidiClass::EN;
                }
            }
            BidiClass::CS => {
                if classes[prev] == BidiClass::EN && classes[next] == BidiClass::EN {
                    classes[cur] = BidiClass::EN;
                } else if classes[prev] == BidiClass::AN && classes[next] == BidiClass::AN {
                    classes[cur] = BidiClass::AN;
                }
            }
            _ => {}
        }
    }

    // W5: maximal runs of ET adjacent to an EN become EN, on either side
    let mut prev_en = false;
    for &i in &indices {
        match classes[i] {
            BidiClass::EN => prev_en = true,
            BidiClass::ET if prev_en => classes[i] = BidiClass::EN,
            _ => prev_en = false,
        }
    }
    let mut next_en = false;
    for &i in indices.iter().rev() {
        match classes[i] {
            BidiClass::EN => next_en = true,
            BidiClass::ET if next_en => classes[i] = BidiClass::EN,
            _ => next_en = false,
        }
    }

    // W6: leftover separators and terminators become ON
    for &i in &indices {
        if matches!(
            classes[i],
            BidiClass::ES | BidiClass::ET | BidiClass::CS
        ) {
            classes[i] = BidiClass::ON;
        }
    }

    // W7: EN becomes L when the nearest preceding strong type is L
    let mut last_strong = seq.sos;
    for &i in &indices {
        match classes[i] {
            BidiClass::L | BidiClass::R => last_strong = classes[i],
            BidiClass::EN if last_strong == BidiClass::L => classes[i] = BidiClass::L,
            _ => {}
        }
    }
}

/// N0: resolve paired brackets (BD16 plus N0b-N0d).
fn resolve_brackets(classes: &mut [BidiClass], chars: &[char], seq: &RunSequence) {
    let indices = seq.indices();
    if indices.is_empty() {
        return;
    }

    // BD16 stack: (position within the sequence, expected closing bracket)
    let mut stack: Vec<(usize, char)> = Vec::new();
    let mut found: Vec<(usize, usize)> = Vec::new();

    for (seq_idx, &char_idx) in indices.iter().enumerate() {
        // Only brackets still classified ON participate (BD14/BD15).
        if classes[char_idx] != BidiClass::ON {
            continue;
        }
        let ch = canonical_bracket(chars[char_idx]);
        match bracket_type(ch) {
            BracketType::Open(close) => {
                if stack.len() >= MAX_BPA_STACK {
                    break; // stack exhausted, stop pairing
                }
                stack.push((seq_idx, close));
            }
            BracketType::Close(_) => {
                if let Some(pos) = stack.iter().rposition(|&(_, close)| close == ch) {
                    found.push((stack[pos].0, seq_idx));
                    stack.truncate(pos);
                }
            }
            BracketType::None => {}
        }
    }

    found.sort_by_key(|&(open, _)| open);
    let embedding_dir = direction_of(seq.level);

    for &(open_seq, close_seq) in &found {
        let open_idx = indices[open_seq];
        let close_idx = indices[close_seq];

        // Strong content between the brackets, numbers counting as R.
        let mut inside_strong = None;
        for &i in &indices[open_seq + 1..close_seq] {
            let strong = classes[i].to_strong_for_neutral();
            if strong == BidiClass::L || strong == BidiClass::R {
                if inside_strong.is_none() {
                    inside_strong = Some(strong);
                } else if inside_strong != Some(strong) {
                    // Both directions inside: the embedding direction wins
                    inside_strong = Some(embedding_dir);
                    break;
                }
            }
        }

        // N0b: strong type matching the embedding direction inside
        if inside_strong == Some(embedding_dir) {
            classes[open_idx] = embedding_dir;
            classes[close_idx] = embedding_dir;
            continue;
        }

        // N0c: only the opposite strong type inside, the preceding context
        // decides between it and the embedding direction
        if let Some(strong) = inside_strong {
            let mut context = seq.sos;
            for &i in indices[..open_seq].iter().rev() {
                let s = classes[i].to_strong_for_neutral();
                if s == BidiClass::L || s == BidiClass::R {
                    context = s;
                    break;
                }
            }
            let resolved = if context == strong { strong } else { embedding_dir };
            classes[open_idx] = resolved;
            classes[close_idx] = resolved;
        }
        // N0d: no strong type inside, the pair stays ON
    }
}

/// N1-N2: resolve neutral and isolate formatting types.
fn resolve_neutral(classes: &mut [BidiClass], seq: &RunSequence) {
    let indices = seq.indices();
    if indices.is_empty() {
        return;
    }

    let embedding_dir = direction_of(seq.level);
    // BN rides along inside neutral runs and resolves with them.
    let resolvable =
        |class: BidiClass| class.is_neutral_or_isolate() || class == BidiClass::BN;

    let mut i = 0;
    while i < indices.len() {
        if !resolvable(classes[indices[i]]) {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < indices.len() && resolvable(classes[indices[i]]) {
            i += 1;
        }

        let lead = if run_start > 0 {
            classes[indices[run_start - 1]].to_strong_for_neutral()
        } else {
            seq.sos
        };
        let trail = if i < indices.len() {
            classes[indices[i]].to_strong_for_neutral()
        } else {
            seq.eos
        };

        // N1 when the flanks agree, N2 otherwise
        let resolved = if lead == trail && (lead == BidiClass::L || lead == BidiClass::R) {
            lead
        } else {
            embedding_dir
        };
        for &idx in &indices[run_start..i] {
            classes[idx] = resolved;
        }
    }
}

/// I1-I2: resolve implicit embedding levels for one sequence.
fn resolve_implicit(
    levels: &mut [u8],
    classes: &[BidiClass],
    original_classes: &[BidiClass],
    seq: &RunSequence,
) {
    let level = seq.level;
    for idx in seq.indices() {
        // Formatting characters keep the ambient level from X1-X8.
        if original_classes[idx].is_removed_by_x9() {
            continue;
        }
        levels[idx] = if level % 2 == 0 {
            match classes[idx] {
                BidiClass::R => level + 1,
                BidiClass::AN | BidiClass::EN => level + 2,
                _ => level,
            }
        } else {
            match classes[idx] {
                BidiClass::L | BidiClass::AN | BidiClass::EN => level + 1,
                _ => level,
            }
        };
    }
}

/// L1: reset separator and trailing whitespace levels within one line.
///
/// `levels` and `original_classes` are the slices for the line. Segment and
/// paragraph separators drop to the paragraph level, as does any run of
/// whitespace or isolate formatting characters before them or at the line
/// end. Decisions use the original classes, not the resolved ones.
pub(crate) fn reset_levels(
    levels: &mut [u8],
    original_classes: &[BidiClass],
    paragraph_level: u8,
) {
    let mut reset = true; // the line end is a reset point
    for i in (0..levels.len()).rev() {
        match original_classes[i] {
            BidiClass::B | BidiClass::S => {
                levels[i] = paragraph_level;
                reset = true;
            }
            BidiClass::WS
            | BidiClass::FSI
            | BidiClass::LRI
            | BidiClass::RLI
            | BidiClass::PDI => {
                if reset {
                    levels[i] = paragraph_level;
                }
            }
            _ => reset = false,
        }
    }
}

/// Least odd level greater than `level`.
fn least_odd_greater_than(level: u8) -> u8 {
    (level + 1) | 1
}

/// Least even level greater than `level`.
fn least_even_greater_than(level: u8) -> u8 {
    (level + 2) & !1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_helpers() {
        assert_eq!(least_odd_greater_than(0), 1);
        assert_eq!(least_odd_greater_than(1), 3);
        assert_eq!(least_odd_greater_than(2), 3);
        assert_eq!(least_even_greater_than(0), 2);
        assert_eq!(least_even_greater_than(1), 2);
        assert_eq!(least_even_greater_than(2), 4);
    }

    #[test]
    fn test_all_ltr() {
        let levels = resolve_levels("Hello World", BidiDir::LTR);
        assert!(levels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_all_rtl_hebrew() {
        let levels = resolve_levels("\u{05D0}\u{05D1}\u{05D2}", BidiDir::RTL);
        assert!(levels.iter().all(|&l| l == 1));
    }

    #[test]
    fn test_mixed_ltr_rtl() {
        // "Hello " + Hebrew shalom
        let text = "Hello \u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        let levels = resolve_levels(text, BidiDir::LTR);
        for i in 0..6 {
            assert_eq!(levels[i], 0, "pos {}", i);
        }
        for i in 6..10 {
            assert_eq!(levels[i], 1, "pos {}", i);
        }
    }

    #[test]
    fn test_rtl_before_ltr() {
        // Hebrew first, then Latin, RTL paragraph: the space between them
        // resolves to the paragraph direction.
        let levels = resolve_levels("\u{05D0}\u{05D1}\u{05D2} abc", BidiDir::Auto);
        assert_eq!(levels, vec![1, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_arabic_numbers() {
        // Arabic letter, two Arabic-Indic digits, Arabic letter
        let text = "\u{0627}\u{0660}\u{0661}\u{0628}";
        let levels = resolve_levels(text, BidiDir::RTL);
        assert_eq!(levels, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_european_numbers_in_ltr() {
        // W7 pulls EN back to L after a strong L
        let levels = resolve_levels("abc 123 def", BidiDir::LTR);
        assert!(levels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_en_after_arabic_becomes_an() {
        // W2: EN following AL becomes AN and still lifts two levels
        let levels = resolve_levels("\u{0627} 123", BidiDir::RTL);
        assert_eq!(levels, vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_paragraph_level_auto_rtl() {
        let levels = resolve_levels("\u{05D0}Hello", BidiDir::Auto);
        assert_eq!(levels[0], 1);
        // Latin embedded in an RTL paragraph sits at level 2
        assert_eq!(levels[1], 2);
    }

    #[test]
    fn test_paragraph_level_auto_ltr() {
        let levels = resolve_levels("Hello\u{05D0}", BidiDir::Auto);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[5], 1);
    }

    #[test]
    fn test_paragraph_level_skips_isolates() {
        // The Hebrew inside the isolate must not decide the paragraph level.
        let levels = resolve_levels("\u{2066}\u{05D0}\u{2069}a", BidiDir::Auto);
        assert_eq!(*levels.last().unwrap(), 0);
    }

    #[test]
    fn test_empty() {
        assert!(resolve_levels("", BidiDir::LTR).is_empty());
    }

    #[test]
    fn test_single_char() {
        assert_eq!(resolve_levels("a", BidiDir::LTR), vec![0]);
        assert_eq!(resolve_levels("a", BidiDir::RTL), vec![2]);
    }

    #[test]
    fn test_whitespace_at_line_end() {
        let levels = resolve_levels("\u{05D0}\u{05D1} ", BidiDir::RTL);
        assert_eq!(levels, vec![1, 1, 1]);
    }

    #[test]
    fn test_segment_separator_resets() {
        // Tab is S: it and the whitespace before it drop to paragraph level
        let levels = resolve_levels("\u{05D0} \ta", BidiDir::LTR);
        assert_eq!(levels[1], 0);
        assert_eq!(levels[2], 0);
    }

    #[test]
    fn test_explicit_lre_pdf() {
        let text = "A\u{202A}B\u{202C}C";
        let levels = resolve_levels(text, BidiDir::LTR);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[2], 2);
        assert_eq!(levels[4], 0);
    }

    #[test]
    fn test_explicit_rle_pdf() {
        let text = "A\u{202B}B\u{202C}C";
        let levels = resolve_levels(text, BidiDir::LTR);
        assert_eq!(levels[0], 0);
        // L character at the odd embedding level lifts one step
        assert_eq!(levels[2], 2);
        assert_eq!(levels[4], 0);
    }

    #[test]
    fn test_override_rewrites_types() {
        // RLO forces the Latin to R
        let text = "A\u{202E}BC\u{202C}D";
        let para = resolve_paragraph(text, BidiDir::LTR);
        assert_eq!(para.classes[2], BidiClass::R);
        assert_eq!(para.classes[3], BidiClass::R);
        assert_eq!(para.levels[2], 1);
        assert_eq!(para.levels[3], 1);
    }

    #[test]
    fn test_isolates_lri_pdi() {
        let text = "A\u{2066}B\u{2069}C";
        let levels = resolve_levels(text, BidiDir::LTR);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[2], 2);
        assert_eq!(levels[4], 0);
    }

    #[test]
    fn test_fsi_resolves_from_content() {
        // Hebrew inside: the FSI behaves like an RLI
        let levels = resolve_levels("a\u{2068}\u{05D0}\u{2069}b", BidiDir::LTR);
        assert_eq!(levels, vec![0, 0, 1, 0, 0]);
        // Latin inside: like an LRI
        let levels = resolve_levels("\u{05D0}\u{2068}a\u{2069}\u{05D1}", BidiDir::RTL);
        assert_eq!(levels[2], 2);
    }

    #[test]
    fn test_unmatched_isolate_initiator() {
        // No PDI before the end: nothing is stitched after the initiator
        // and the sequence ends against the paragraph level.
        let levels = resolve_levels("a\u{2066}b", BidiDir::LTR);
        assert_eq!(levels, vec![0, 0, 2]);
    }

    #[test]
    fn test_isolate_pairs_nested() {
        let classes: Vec<BidiClass> = "\u{2066}\u{2066}\u{2069}\u{2069}"
            .chars()
            .map(bidi_class)
            .collect();
        let pairs = IsolatePairs::new(&classes);
        assert_eq!(pairs.pdi_for_initiator[0], Some(3));
        assert_eq!(pairs.pdi_for_initiator[1], Some(2));
        assert_eq!(pairs.initiator_for_pdi[2], Some(1));
        assert_eq!(pairs.initiator_for_pdi[3], Some(0));
    }

    #[test]
    fn test_isolate_pairs_unmatched() {
        let classes: Vec<BidiClass> = "\u{2069}\u{2066}".chars().map(bidi_class).collect();
        let pairs = IsolatePairs::new(&classes);
        assert_eq!(pairs.initiator_for_pdi[0], None);
        assert_eq!(pairs.pdi_for_initiator[1], None);
        assert_eq!(pairs.skip_target(1, 2), 2);
    }

    #[test]
    fn test_run_sequence_stitching() {
        // a RLI AL LRI a R a PDI AL PDI a: runs interrupted by isolates are
        // stitched back onto the sequences of their initiators.
        let text = "a\u{2067}\u{0627}\u{2066}a\u{05D0}a\u{2069}\u{0628}\u{2069}a";
        let para = resolve_paragraph(text, BidiDir::LTR);
        assert_eq!(para.levels, vec![0, 0, 1, 1, 2, 3, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn test_level_runs_split() {
        assert_eq!(
            level_runs(&[0, 0, 0, 1, 1, 2, 0, 0]),
            vec![(0, 3), (3, 5), (5, 6), (6, 8)]
        );
        assert!(level_runs(&[]).is_empty());
    }

    #[test]
    fn test_overflow_deep_nesting() {
        // Embeddings beyond the depth limit overflow without corrupting the
        // stack; the text around them keeps the paragraph level.
        let mut text = String::from("A");
        for _ in 0..200 {
            text.push('\u{202B}'); // RLE
        }
        text.push('B');
        for _ in 0..200 {
            text.push('\u{202C}'); // PDF
        }
        text.push('C');
        let levels = resolve_levels(&text, BidiDir::LTR);
        assert_eq!(levels[0], 0);
        assert_eq!(*levels.last().unwrap(), 0);
        assert!(levels.iter().all(|&l| l <= MAX_DEPTH + 2));
    }

    #[test]
    fn test_overflow_isolate_counting() {
        // Only the overflowing PDI is absorbed; the following one still
        // closes the valid isolate.
        let mut text = String::new();
        for _ in 0..80 {
            text.push('\u{2067}'); // RLI, overflows past level 125
        }
        for _ in 0..80 {
            text.push('\u{2069}');
        }
        text.push('a');
        let levels = resolve_levels(&text, BidiDir::LTR);
        assert_eq!(*levels.last().unwrap(), 0);
    }

    #[test]
    fn test_weak_w4_es_between_en() {
        let para = resolve_paragraph("1+2", BidiDir::RTL);
        // The separator joined the numbers: everything lifted to level 2
        assert_eq!(para.levels, vec![2, 2, 2]);
    }

    #[test]
    fn test_weak_w4_cs_between_an() {
        let para = resolve_paragraph("\u{0661}\u{060C}\u{0662}", BidiDir::RTL);
        assert_eq!(para.levels, vec![2, 2, 2]);
    }

    #[test]
    fn test_weak_w5_et_run() {
        // "$$123" in LTR: the terminators attach to the number, W7 then
        // pulls the whole group to L.
        let levels = resolve_levels("a $$123", BidiDir::LTR);
        assert!(levels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_weak_w1_nsm() {
        // NSM after a Hebrew letter inherits R
        let levels = resolve_levels("\u{05D0}\u{0301}", BidiDir::Auto);
        assert_eq!(levels, vec![1, 1]);
        // NSM right after an isolate initiator resolves as ON, not as the
        // initiator's class
        let levels = resolve_levels("\u{05D0}\u{2066}\u{0301}\u{2069}", BidiDir::RTL);
        assert_eq!(levels[2], 2);
    }

    #[test]
    fn test_neutral_between_opposing_runs() {
        // Space between L and R text takes the embedding direction
        let para = resolve_paragraph("ab \u{05D0}\u{05D1}", BidiDir::LTR);
        assert_eq!(para.levels[2], 0);
        let para = resolve_paragraph("ab \u{05D0}\u{05D1}", BidiDir::RTL);
        assert_eq!(para.levels[2], 1);
    }

    #[test]
    fn test_brackets_take_context() {
        let text = "Hello (\u{05D0}\u{05D1}) world";
        let levels = resolve_levels(text, BidiDir::LTR);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[6], 0); // opening paren stays with the L context
        assert_eq!(levels[7], 1);
        assert_eq!(levels[8], 1);
        assert_eq!(levels[9], 0); // closing paren
    }

    #[test]
    fn test_brackets_match_embedding() {
        // R inside brackets in an RTL sequence: N0b applies
        let text = "\u{05D0} (\u{05D1}) \u{05D2}";
        let para = resolve_paragraph(text, BidiDir::RTL);
        assert_eq!(para.classes[2], BidiClass::R);
        assert_eq!(para.classes[4], BidiClass::R);
    }

    #[test]
    fn test_brackets_unmatched_stay_neutral() {
        let para = resolve_paragraph("a(b", BidiDir::LTR);
        assert_eq!(para.classes[1], BidiClass::L); // resolved by N1, not N0
        assert_eq!(para.levels, vec![0, 0, 0]);
    }

    #[test]
    fn test_bracket_canonical_equivalence() {
        // U+2329 pairs with U+3009 through canonical equivalence
        let text = "\u{05D0}\u{2329}\u{05D1}\u{3009}\u{05D2}";
        let para = resolve_paragraph(text, BidiDir::RTL);
        assert_eq!(para.classes[1], BidiClass::R);
        assert_eq!(para.classes[3], BidiClass::R);
    }

    #[test]
    fn test_classes_fully_resolved() {
        let text = "abc 123 \u{05D0}\u{0660}! (x) $";
        let para = resolve_paragraph(text, BidiDir::Auto);
        for (i, &class) in para.classes.iter().enumerate() {
            if para.original_classes[i].is_removed_by_x9() {
                continue;
            }
            assert!(
                matches!(
                    class,
                    BidiClass::L | BidiClass::R | BidiClass::EN | BidiClass::AN
                ),
                "position {} still {:?}",
                i,
                class
            );
        }
    }

    #[test]
    fn test_b_resets_machine() {
        // A paragraph separator inside the text clears pending embeddings.
        let text = "\u{202B}a\nb";
        let levels = resolve_levels(text, BidiDir::LTR);
        assert_eq!(*levels.last().unwrap(), 0);
    }
}

//! Visual reordering of bidi-resolved text (L1-L2).

use crate::error::{BidiError, BidiResult};
use crate::resolver::{reset_levels, resolve_paragraph, ResolvedParagraph};
use crate::types::BidiDir;

/// Reorder one line of resolved levels into visual order (L2).
///
/// For each threshold from the highest level present down to the lowest odd
/// level present, reverses every maximal stretch of positions at or above
/// it. Returns the logical index for each visual position. A line with no
/// odd level has nothing to reverse and comes back in logical order.
pub fn reorder_visual(levels: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    let max_level = match levels.iter().max() {
        Some(&max) => max,
        None => return order,
    };
    let min_odd = match levels.iter().copied().filter(|level| level % 2 == 1).min() {
        Some(min) => min,
        None => return order,
    };

    for threshold in (min_odd..=max_level).rev() {
        let mut run_start = None;
        for i in 0..=order.len() {
            if i < order.len() && levels[order[i]] >= threshold {
                run_start.get_or_insert(i);
            } else if let Some(start) = run_start.take() {
                order[start..i].reverse();
            }
        }
    }

    order
}

/// L1 plus L2 for one line `start..end` of a resolved paragraph.
///
/// The line's levels are copied into a fresh buffer before the L1 resets, so
/// the resets of one line never leak into an adjacent one, and the returned
/// indices are absolute logical positions in visual order.
fn reorder_line(para: &ResolvedParagraph, start: usize, end: usize) -> Vec<usize> {
    let mut line_levels = para.levels[start..end].to_vec();
    reset_levels(
        &mut line_levels,
        &para.original_classes[start..end],
        para.paragraph_level,
    );
    reorder_visual(&line_levels)
        .into_iter()
        .map(|idx| start + idx)
        .collect()
}

/// Split `0..len` into line ranges at the given exclusive end positions.
///
/// Positions must be strictly increasing and within `1..=len`; any tail after
/// the last break becomes a final line.
fn line_ranges(len: usize, line_breaks: &[usize]) -> BidiResult<Vec<(usize, usize)>> {
    let mut ranges = Vec::with_capacity(line_breaks.len() + 1);
    let mut start = 0;
    for &end in line_breaks {
        if end <= start {
            return Err(BidiError::UnorderedLineBreaks {
                prev: start,
                next: end,
            });
        }
        if end > len {
            return Err(BidiError::LineBreakOutOfRange { pos: end, len });
        }
        ranges.push((start, end));
        start = end;
    }
    if start < len {
        ranges.push((start, len));
    }
    Ok(ranges)
}

fn visual_order_resolved(
    para: &ResolvedParagraph,
    line_breaks: &[usize],
) -> BidiResult<Vec<usize>> {
    let n = para.chars.len();
    let ranges = line_ranges(n, line_breaks)?;
    log::trace!(
        "reordering {} code points across {} lines",
        n,
        ranges.len()
    );

    let mut order = Vec::with_capacity(n);
    for (start, end) in ranges {
        order.extend(reorder_line(para, start, end));
    }
    Ok(order)
}

/// Compute the visual-order permutation for a paragraph.
///
/// Returns the logical index displayed at each visual position, lines
/// concatenated in order. `line_breaks` are exclusive line end positions in
/// code points; empty means one line spanning the paragraph.
pub fn visual_order(
    text: &str,
    base_dir: BidiDir,
    line_breaks: &[usize],
) -> BidiResult<Vec<usize>> {
    let para = resolve_paragraph(text, base_dir);
    visual_order_resolved(&para, line_breaks)
}

/// Reorder a paragraph into visual order, honoring caller-supplied line
/// breaks (exclusive end positions in code points).
pub fn reorder_lines(
    text: &str,
    base_dir: BidiDir,
    line_breaks: &[usize],
) -> BidiResult<String> {
    let para = resolve_paragraph(text, base_dir);
    let order = visual_order_resolved(&para, line_breaks)?;
    Ok(order.into_iter().map(|i| para.chars[i]).collect())
}

/// Reorder a single-line paragraph into visual order.
///
/// The output is a permutation of the input code points, arranged for a
/// renderer that lays glyphs out strictly left to right. Mirroring (L4) is
/// the caller's job, using [`crate::tables::bidi_mirror`].
pub fn reorder(text: &str, base_dir: BidiDir) -> String {
    let para = resolve_paragraph(text, base_dir);
    reorder_line(&para, 0, para.chars.len())
        .into_iter()
        .map(|i| para.chars[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_visual_all_ltr() {
        assert_eq!(reorder_visual(&[0, 0, 0, 0, 0]), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reorder_visual_all_rtl() {
        assert_eq!(reorder_visual(&[1, 1, 1, 1, 1]), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reorder_visual_mixed() {
        // The RTL segment reverses in place
        assert_eq!(reorder_visual(&[0, 0, 1, 1, 0]), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_reorder_visual_nested() {
        // Level 2 reverses inside the level 1 reversal
        assert_eq!(reorder_visual(&[0, 1, 2, 1, 0]), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_reorder_visual_number_in_rtl() {
        // An even level above an odd one: digits keep left-to-right order
        // inside reversed RTL text
        assert_eq!(reorder_visual(&[1, 1, 2, 2, 1]), vec![4, 2, 3, 1, 0]);
    }

    #[test]
    fn test_reorder_visual_even_only() {
        // No odd level on the line: nothing reverses
        assert_eq!(reorder_visual(&[2, 2, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_visual_empty() {
        assert!(reorder_visual(&[]).is_empty());
    }

    #[test]
    fn test_reorder_plain_ltr() {
        assert_eq!(reorder("abc", BidiDir::Auto), "abc");
    }

    #[test]
    fn test_reorder_pure_rtl() {
        assert_eq!(
            reorder("\u{05D0}\u{05D1}\u{05D2}", BidiDir::Auto),
            "\u{05D2}\u{05D1}\u{05D0}"
        );
    }

    #[test]
    fn test_reorder_ltr_with_rtl_tail() {
        assert_eq!(
            reorder("abc \u{05D0}\u{05D1}\u{05D2}", BidiDir::Auto),
            "abc \u{05D2}\u{05D1}\u{05D0}"
        );
    }

    #[test]
    fn test_reorder_rtl_with_ltr_tail() {
        // RTL paragraph: the Latin run stays in logical order but moves to
        // the right of the display, Hebrew reverses.
        assert_eq!(
            reorder("\u{05D0}\u{05D1}\u{05D2} abc", BidiDir::Auto),
            "abc \u{05D2}\u{05D1}\u{05D0}"
        );
    }

    #[test]
    fn test_reorder_fsi_isolate() {
        // The FSI resolves to RLI from the Arabic inside; the isolate
        // reverses internally while the English around it stays put.
        let text = "He said \u{2068}\u{0645}\u{0631}\u{062D}\u{0628}\u{0627}\u{2069} today";
        let expected = "He said \u{2068}\u{0627}\u{0628}\u{062D}\u{0631}\u{0645}\u{2069} today";
        assert_eq!(reorder(text, BidiDir::Auto), expected);
    }

    #[test]
    fn test_reorder_number_run_in_rtl() {
        // The separator joins the digits (W4) and the run stays
        // left-to-right at its even level.
        assert_eq!(reorder("1+2", BidiDir::RTL), "1+2");
    }

    #[test]
    fn test_reorder_empty() {
        assert_eq!(reorder("", BidiDir::Auto), "");
    }

    #[test]
    fn test_reorder_single_char() {
        assert_eq!(reorder("a", BidiDir::Auto), "a");
        assert_eq!(reorder("\u{05D0}", BidiDir::Auto), "\u{05D0}");
    }

    #[test]
    fn test_reorder_lines_independent() {
        // Hebrew on the second line reverses without disturbing the first
        let text = "abc\u{05D0}\u{05D1}";
        let out = reorder_lines(text, BidiDir::LTR, &[3]).unwrap();
        assert_eq!(out, "abc\u{05D1}\u{05D0}");
    }

    #[test]
    fn test_reorder_lines_trailing_whitespace_resets() {
        // Between two Hebrew letters the space resolves to level 1, but a
        // line break right after it pulls it back to the paragraph level, so
        // the first line keeps its logical shape.
        let text = "\u{05D0} \u{05D1}";
        let broken = reorder_lines(text, BidiDir::LTR, &[2]).unwrap();
        assert_eq!(broken, "\u{05D0} \u{05D1}");
        // On a single line the same space stays at level 1 and the whole
        // stretch reverses.
        assert_eq!(reorder(text, BidiDir::LTR), "\u{05D1} \u{05D0}");
    }

    #[test]
    fn test_reorder_lines_tail_is_final_line() {
        let text = "ab\u{05D0}\u{05D1}";
        let with_tail = reorder_lines(text, BidiDir::LTR, &[2]).unwrap();
        let explicit = reorder_lines(text, BidiDir::LTR, &[2, 4]).unwrap();
        assert_eq!(with_tail, explicit);
    }

    #[test]
    fn test_line_break_validation() {
        assert_eq!(
            reorder_lines("abcdef", BidiDir::LTR, &[3, 2]),
            Err(BidiError::UnorderedLineBreaks { prev: 3, next: 2 })
        );
        assert_eq!(
            reorder_lines("abcdef", BidiDir::LTR, &[0]),
            Err(BidiError::UnorderedLineBreaks { prev: 0, next: 0 })
        );
        assert_eq!(
            reorder_lines("abc", BidiDir::LTR, &[7]),
            Err(BidiError::LineBreakOutOfRange { pos: 7, len: 3 })
        );
    }

    #[test]
    fn test_visual_order_permutation() {
        let text = "\u{05D0}\u{05D1}\u{05D2} abc";
        let order = visual_order(text, BidiDir::Auto, &[]).unwrap();
        assert_eq!(order, vec![4, 5, 6, 3, 2, 1, 0]);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_visual_order_multiline_offsets() {
        let text = "\u{05D0}\u{05D1}\u{05D2}\u{05D3}";
        let order = visual_order(text, BidiDir::RTL, &[2]).unwrap();
        // Each line reverses within itself
        assert_eq!(order, vec![1, 0, 3, 2]);
    }
}

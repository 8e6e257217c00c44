//! Unicode Bidirectional Algorithm (UAX#9) implementation.
//!
//! Transforms a paragraph of text in logical order into the visual order
//! required by a renderer that lays out glyphs strictly left to right:
//! - Character Bidi_Class lookup from Unicode data tables
//! - Matching isolate pairs (BD9) and paragraph level detection (P2-P3)
//! - Explicit embedding level resolution (X1-X8, X9)
//! - Isolating run sequences (BD13/X10)
//! - Weak type resolution (W1-W7)
//! - Paired bracket resolution (N0)
//! - Neutral type resolution (N1-N2)
//! - Implicit level resolution (I1-I2)
//! - Whitespace reset and visual reordering per line (L1-L2)
//!
//! Mirroring (L4) is left to the caller; [`bidi_mirror`] provides the data.
//!
//! # Usage
//!
//! ```rust
//! use bidi_reorder::{reorder, resolve_levels, BidiDir};
//!
//! let text = "abc \u{05D0}\u{05D1}\u{05D2}";
//! assert_eq!(reorder(text, BidiDir::Auto), "abc \u{05D2}\u{05D1}\u{05D0}");
//! assert_eq!(resolve_levels(text, BidiDir::Auto), vec![0, 0, 0, 0, 1, 1, 1]);
//! ```

pub mod error;
pub mod reorder;
pub mod resolver;
pub mod tables;
pub mod types;

pub use error::{BidiError, BidiResult};
pub use reorder::{reorder, reorder_lines, reorder_visual, visual_order};
pub use resolver::{resolve_levels, resolve_paragraph, ResolvedParagraph};
pub use tables::{bidi_class, bidi_mirror, bracket_type, canonical_bracket};
pub use types::{BidiClass, BidiDir, BracketType, DirectionalStatus, Override, MAX_DEPTH};

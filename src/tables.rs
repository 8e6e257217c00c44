//! Unicode data tables for the bidi algorithm.
//!
//! Generated from the Unicode Character Database 6.3.0:
//! `DerivedBidiClass.txt`, `BidiBrackets.txt`, `BidiMirroring.txt`.
//! Code points not covered by any range fall back to `ON`.

use crate::types::BidiClass::*;
use crate::types::{BidiClass, BracketType};

/// Inclusive code point ranges with their bidi class, sorted by start.
#[rustfmt::skip]
const BIDI_CLASS_RANGES: &[(u32, u32, BidiClass)] = &[
    // Basic Latin
    (0x0000, 0x0008, BN),
    (0x0009, 0x0009, S),
    (0x000A, 0x000A, B),
    (0x000B, 0x000B, S),
    (0x000C, 0x000C, WS),
    (0x000D, 0x000D, B),
    (0x000E, 0x001B, BN),
    (0x001C, 0x001E, B),
    (0x001F, 0x001F, S),
    (0x0020, 0x0020, WS),
    (0x0021, 0x0022, ON),
    (0x0023, 0x0025, ET),
    (0x0026, 0x002A, ON),
    (0x002B, 0x002B, ES),
    (0x002C, 0x002C, CS),
    (0x002D, 0x002D, ES),
    (0x002E, 0x002F, CS),
    (0x0030, 0x0039, EN),
    (0x003A, 0x003A, CS),
    (0x003B, 0x0040, ON),
    (0x0041, 0x005A, L),
    (0x005B, 0x0060, ON),
    (0x0061, 0x007A, L),
    (0x007B, 0x007E, ON),
    (0x007F, 0x0084, BN),
    (0x0085, 0x0085, B),
    (0x0086, 0x009F, BN),
    // Latin-1 Supplement
    (0x00A0, 0x00A0, CS),
    (0x00A1, 0x00A1, ON),
    (0x00A2, 0x00A5, ET),
    (0x00A6, 0x00A9, ON),
    (0x00AA, 0x00AA, L),
    (0x00AB, 0x00AC, ON),
    (0x00AD, 0x00AD, BN),
    (0x00AE, 0x00AF, ON),
    (0x00B0, 0x00B1, ET),
    (0x00B2, 0x00B3, EN),
    (0x00B4, 0x00B4, ON),
    (0x00B5, 0x00B5, L),
    (0x00B6, 0x00B8, ON),
    (0x00B9, 0x00B9, EN),
    (0x00BA, 0x00BA, L),
    (0x00BB, 0x00BF, ON),
    (0x00C0, 0x00D6, L),
    (0x00D7, 0x00D7, ON),
    (0x00D8, 0x00F6, L),
    (0x00F7, 0x00F7, ON),
    // Latin Extended, IPA, Spacing Modifier Letters
    (0x00F8, 0x02B8, L),
    (0x02B9, 0x02BA, ON),
    (0x02BB, 0x02C1, L),
    (0x02C2, 0x02CF, ON),
    (0x02D0, 0x02D1, L),
    (0x02D2, 0x02DF, ON),
    (0x02E0, 0x02E4, L),
    (0x02E5, 0x02ED, ON),
    (0x02EE, 0x02EE, L),
    (0x02EF, 0x02FF, ON),
    // Combining Diacritical Marks
    (0x0300, 0x036F, NSM),
    // Greek
    (0x0370, 0x0373, L),
    (0x0374, 0x0375, ON),
    (0x0376, 0x037D, L),
    (0x037E, 0x037E, ON),
    (0x0384, 0x0385, ON),
    (0x0386, 0x0386, L),
    (0x0387, 0x0387, ON),
    (0x0388, 0x03F5, L),
    (0x03F6, 0x03F6, ON),
    // Cyrillic, Armenian
    (0x03F7, 0x0482, L),
    (0x0483, 0x0489, NSM),
    (0x048A, 0x0589, L),
    (0x058A, 0x058A, ON),
    (0x058F, 0x058F, ET),
    // Hebrew
    (0x0590, 0x0590, R),
    (0x0591, 0x05BD, NSM),
    (0x05BE, 0x05BE, R),
    (0x05BF, 0x05BF, NSM),
    (0x05C0, 0x05C0, R),
    (0x05C1, 0x05C2, NSM),
    (0x05C3, 0x05C3, R),
    (0x05C4, 0x05C5, NSM),
    (0x05C6, 0x05C6, R),
    (0x05C7, 0x05C7, NSM),
    (0x05C8, 0x05FF, R),
    // Arabic
    (0x0600, 0x0605, AN),
    (0x0606, 0x0607, ON),
    (0x0608, 0x0608, AL),
    (0x0609, 0x060A, ET),
    (0x060B, 0x060B, AL),
    (0x060C, 0x060C, CS),
    (0x060D, 0x060D, AL),
    (0x060E, 0x060F, ON),
    (0x0610, 0x061A, NSM),
    (0x061B, 0x064A, AL),
    (0x064B, 0x065F, NSM),
    (0x0660, 0x0669, AN),
    (0x066A, 0x066A, ET),
    (0x066B, 0x066C, AN),
    (0x066D, 0x066F, AL),
    (0x0670, 0x0670, NSM),
    (0x0671, 0x06D5, AL),
    (0x06D6, 0x06DC, NSM),
    (0x06DD, 0x06DD, AN),
    (0x06DE, 0x06DE, ON),
    (0x06DF, 0x06E4, NSM),
    (0x06E5, 0x06E6, AL),
    (0x06E7, 0x06E8, NSM),
    (0x06E9, 0x06E9, ON),
    (0x06EA, 0x06ED, NSM),
    (0x06EE, 0x06EF, AL),
    (0x06F0, 0x06F9, EN),
    // Syriac, Arabic Supplement, Thaana
    (0x06FA, 0x0710, AL),
    (0x0711, 0x0711, NSM),
    (0x0712, 0x072F, AL),
    (0x0730, 0x074A, NSM),
    (0x074B, 0x07A5, AL),
    (0x07A6, 0x07B0, NSM),
    (0x07B1, 0x07BF, AL),
    // NKo
    (0x07C0, 0x07EA, R),
    (0x07EB, 0x07F3, NSM),
    (0x07F4, 0x07F5, R),
    (0x07F6, 0x07F9, ON),
    // Samaritan, Mandaic
    (0x07FA, 0x0815, R),
    (0x0816, 0x0819, NSM),
    (0x081A, 0x081A, R),
    (0x081B, 0x0823, NSM),
    (0x0824, 0x0824, R),
    (0x0825, 0x0827, NSM),
    (0x0828, 0x0828, R),
    (0x0829, 0x082D, NSM),
    (0x082E, 0x0858, R),
    (0x0859, 0x085B, NSM),
    (0x085C, 0x089F, R),
    // Arabic Extended-A
    (0x08A0, 0x08E3, AL),
    (0x08E4, 0x08FF, NSM),
    // Devanagari
    (0x0900, 0x0902, NSM),
    (0x0903, 0x0939, L),
    (0x093A, 0x093A, NSM),
    (0x093B, 0x093B, L),
    (0x093C, 0x093C, NSM),
    (0x093D, 0x0940, L),
    (0x0941, 0x0948, NSM),
    (0x0949, 0x094C, L),
    (0x094D, 0x094D, NSM),
    (0x094E, 0x0950, L),
    (0x0951, 0x0957, NSM),
    (0x0958, 0x0961, L),
    (0x0962, 0x0963, NSM),
    (0x0964, 0x0980, L),
    // Bengali
    (0x0981, 0x0981, NSM),
    (0x0982, 0x09BB, L),
    (0x09BC, 0x09BC, NSM),
    (0x09BD, 0x09C0, L),
    (0x09C1, 0x09C4, NSM),
    (0x09C5, 0x09CC, L),
    (0x09CD, 0x09CD, NSM),
    (0x09CE, 0x09E1, L),
    (0x09E2, 0x09E3, NSM),
    (0x09E4, 0x09F1, L),
    (0x09F2, 0x09F3, ET),
    (0x09F4, 0x09FA, L),
    (0x09FB, 0x09FB, ET),
    (0x09FC, 0x0A00, L),
    // Gurmukhi
    (0x0A01, 0x0A02, NSM),
    (0x0A03, 0x0A3B, L),
    (0x0A3C, 0x0A3C, NSM),
    (0x0A3D, 0x0A40, L),
    (0x0A41, 0x0A4D, NSM),
    (0x0A4E, 0x0A6F, L),
    (0x0A70, 0x0A71, NSM),
    (0x0A72, 0x0A80, L),
    // Gujarati
    (0x0A81, 0x0A82, NSM),
    (0x0A83, 0x0ABB, L),
    (0x0ABC, 0x0ABC, NSM),
    (0x0ABD, 0x0AC0, L),
    (0x0AC1, 0x0AC8, NSM),
    (0x0AC9, 0x0ACC, L),
    (0x0ACD, 0x0ACD, NSM),
    (0x0ACE, 0x0AF0, L),
    (0x0AF1, 0x0AF1, ET),
    (0x0AF2, 0x0B00, L),
    // Oriya
    (0x0B01, 0x0B01, NSM),
    (0x0B02, 0x0B3B, L),
    (0x0B3C, 0x0B3C, NSM),
    (0x0B3D, 0x0B3E, L),
    (0x0B3F, 0x0B3F, NSM),
    (0x0B40, 0x0B40, L),
    (0x0B41, 0x0B44, NSM),
    (0x0B45, 0x0B4C, L),
    (0x0B4D, 0x0B4D, NSM),
    (0x0B4E, 0x0B81, L),
    // Tamil
    (0x0B82, 0x0B82, NSM),
    (0x0B83, 0x0BBF, L),
    (0x0BC0, 0x0BC0, NSM),
    (0x0BC1, 0x0BCC, L),
    (0x0BCD, 0x0BCD, NSM),
    (0x0BCE, 0x0BF2, L),
    (0x0BF3, 0x0BF8, ON),
    (0x0BF9, 0x0BF9, ET),
    (0x0BFA, 0x0BFA, ON),
    // Telugu
    (0x0C00, 0x0C3D, L),
    (0x0C3E, 0x0C40, NSM),
    (0x0C41, 0x0C45, L),
    (0x0C46, 0x0C56, NSM),
    (0x0C57, 0x0C61, L),
    (0x0C62, 0x0C63, NSM),
    // Kannada
    (0x0C64, 0x0CBB, L),
    (0x0CBC, 0x0CBC, NSM),
    (0x0CBD, 0x0CCB, L),
    (0x0CCC, 0x0CCD, NSM),
    (0x0CCE, 0x0CE1, L),
    (0x0CE2, 0x0CE3, NSM),
    // Malayalam
    (0x0CE4, 0x0D40, L),
    (0x0D41, 0x0D44, NSM),
    (0x0D45, 0x0D4C, L),
    (0x0D4D, 0x0D4D, NSM),
    (0x0D4E, 0x0D61, L),
    (0x0D62, 0x0D63, NSM),
    // Sinhala
    (0x0D64, 0x0DC9, L),
    (0x0DCA, 0x0DCA, NSM),
    (0x0DCB, 0x0DD1, L),
    (0x0DD2, 0x0DD6, NSM),
    // Thai
    (0x0DD7, 0x0E30, L),
    (0x0E31, 0x0E31, NSM),
    (0x0E32, 0x0E33, L),
    (0x0E34, 0x0E3A, NSM),
    (0x0E3B, 0x0E3E, L),
    (0x0E3F, 0x0E3F, ET),
    (0x0E40, 0x0E46, L),
    (0x0E47, 0x0E4E, NSM),
    // Lao
    (0x0E4F, 0x0EB0, L),
    (0x0EB1, 0x0EB1, NSM),
    (0x0EB2, 0x0EB3, L),
    (0x0EB4, 0x0EBC, NSM),
    (0x0EBD, 0x0EC7, L),
    (0x0EC8, 0x0ECD, NSM),
    // Tibetan
    (0x0ECE, 0x0F17, L),
    (0x0F18, 0x0F19, NSM),
    (0x0F1A, 0x0F34, L),
    (0x0F35, 0x0F35, NSM),
    (0x0F36, 0x0F36, L),
    (0x0F37, 0x0F37, NSM),
    (0x0F38, 0x0F38, L),
    (0x0F39, 0x0F39, NSM),
    (0x0F3A, 0x0F3D, ON),
    (0x0F3E, 0x0F70, L),
    (0x0F71, 0x0F7E, NSM),
    (0x0F7F, 0x0F7F, L),
    (0x0F80, 0x0F84, NSM),
    (0x0F85, 0x0F85, L),
    (0x0F86, 0x0F87, NSM),
    (0x0F88, 0x0F8C, L),
    (0x0F8D, 0x0F97, NSM),
    (0x0F98, 0x0F98, L),
    (0x0F99, 0x0FBC, NSM),
    // Myanmar
    (0x0FBD, 0x102C, L),
    (0x102D, 0x1030, NSM),
    (0x1031, 0x1031, L),
    (0x1032, 0x1037, NSM),
    (0x1038, 0x1038, L),
    (0x1039, 0x103A, NSM),
    (0x103B, 0x103C, L),
    (0x103D, 0x103E, NSM),
    (0x103F, 0x1057, L),
    (0x1058, 0x1059, NSM),
    (0x105A, 0x105D, L),
    (0x105E, 0x1060, NSM),
    (0x1061, 0x1070, L),
    (0x1071, 0x1074, NSM),
    (0x1075, 0x1081, L),
    (0x1082, 0x1082, NSM),
    (0x1083, 0x1084, L),
    (0x1085, 0x1086, NSM),
    (0x1087, 0x108C, L),
    (0x108D, 0x108D, NSM),
    (0x108E, 0x109C, L),
    (0x109D, 0x109D, NSM),
    // Georgian, Hangul Jamo, Ethiopic
    (0x109E, 0x135C, L),
    (0x135D, 0x135F, NSM),
    (0x1360, 0x138F, L),
    (0x1390, 0x1399, ON),
    // Cherokee, Canadian Syllabics
    (0x139A, 0x167F, L),
    // Ogham, Runic
    (0x1680, 0x1680, WS),
    (0x1681, 0x169A, L),
    (0x169B, 0x169C, ON),
    // Tagalog, Hanunoo, Buhid, Tagbanwa
    (0x169D, 0x1711, L),
    (0x1712, 0x1714, NSM),
    (0x1715, 0x1731, L),
    (0x1732, 0x1734, NSM),
    (0x1735, 0x1751, L),
    (0x1752, 0x1753, NSM),
    (0x1754, 0x1771, L),
    (0x1772, 0x1773, NSM),
    // Khmer
    (0x1774, 0x17B3, L),
    (0x17B4, 0x17B5, NSM),
    (0x17B6, 0x17B6, L),
    (0x17B7, 0x17BD, NSM),
    (0x17BE, 0x17C5, L),
    (0x17C6, 0x17C6, NSM),
    (0x17C7, 0x17C8, L),
    (0x17C9, 0x17D3, NSM),
    (0x17D4, 0x17DA, L),
    (0x17DB, 0x17DB, ET),
    (0x17DC, 0x17DC, L),
    (0x17DD, 0x17DD, NSM),
    (0x17DE, 0x17EF, L),
    (0x17F0, 0x17F9, ON),
    (0x17FA, 0x17FF, L),
    // Mongolian
    (0x1800, 0x180A, ON),
    (0x180B, 0x180D, NSM),
    (0x180E, 0x180E, WS),
    (0x180F, 0x18A8, L),
    (0x18A9, 0x18A9, NSM),
    // Limbu
    (0x18AA, 0x191F, L),
    (0x1920, 0x1922, NSM),
    (0x1923, 0x1926, L),
    (0x1927, 0x1928, NSM),
    (0x1929, 0x1931, L),
    (0x1932, 0x1932, NSM),
    (0x1933, 0x1938, L),
    (0x1939, 0x193B, NSM),
    (0x193C, 0x193F, L),
    (0x1940, 0x1940, ON),
    (0x1941, 0x1943, L),
    (0x1944, 0x1945, ON),
    // Tai Le, New Tai Lue, Khmer Symbols
    (0x1946, 0x19DD, L),
    (0x19DE, 0x19FF, ON),
    // Buginese, Tai Tham
    (0x1A00, 0x1A16, L),
    (0x1A17, 0x1A18, NSM),
    (0x1A19, 0x1A55, L),
    (0x1A56, 0x1A5E, NSM),
    (0x1A5F, 0x1A61, L),
    (0x1A62, 0x1A62, NSM),
    (0x1A63, 0x1A64, L),
    (0x1A65, 0x1A6C, NSM),
    (0x1A6D, 0x1A72, L),
    (0x1A73, 0x1A7F, NSM),
    (0x1A80, 0x1AFF, L),
    // Balinese
    (0x1B00, 0x1B03, NSM),
    (0x1B04, 0x1B33, L),
    (0x1B34, 0x1B34, NSM),
    (0x1B35, 0x1B35, L),
    (0x1B36, 0x1B3A, NSM),
    (0x1B3B, 0x1B3B, L),
    (0x1B3C, 0x1B3C, NSM),
    (0x1B3D, 0x1B41, L),
    (0x1B42, 0x1B42, NSM),
    (0x1B43, 0x1B6A, L),
    (0x1B6B, 0x1B73, NSM),
    (0x1B74, 0x1B7F, L),
    // Sundanese
    (0x1B80, 0x1B81, NSM),
    (0x1B82, 0x1BA1, L),
    (0x1BA2, 0x1BA5, NSM),
    (0x1BA6, 0x1BA7, L),
    (0x1BA8, 0x1BA9, NSM),
    (0x1BAA, 0x1BAA, L),
    (0x1BAB, 0x1BAD, NSM),
    // Batak
    (0x1BAE, 0x1BE5, L),
    (0x1BE6, 0x1BE6, NSM),
    (0x1BE7, 0x1BE7, L),
    (0x1BE8, 0x1BE9, NSM),
    (0x1BEA, 0x1BEC, L),
    (0x1BED, 0x1BED, NSM),
    (0x1BEE, 0x1BEE, L),
    (0x1BEF, 0x1BF1, NSM),
    // Lepcha
    (0x1BF2, 0x1C2B, L),
    (0x1C2C, 0x1C33, NSM),
    (0x1C34, 0x1C35, L),
    (0x1C36, 0x1C37, NSM),
    // Ol Chiki, Vedic Extensions
    (0x1C38, 0x1CCF, L),
    (0x1CD0, 0x1CD2, NSM),
    (0x1CD3, 0x1CD3, L),
    (0x1CD4, 0x1CE0, NSM),
    (0x1CE1, 0x1CE1, L),
    (0x1CE2, 0x1CE8, NSM),
    (0x1CE9, 0x1CEC, L),
    (0x1CED, 0x1CED, NSM),
    (0x1CEE, 0x1CF3, L),
    (0x1CF4, 0x1CF4, NSM),
    // Phonetic Extensions
    (0x1CF5, 0x1DBF, L),
    (0x1DC0, 0x1DFF, NSM),
    // Latin Extended Additional, Greek Extended
    (0x1E00, 0x1FBC, L),
    (0x1FBD, 0x1FBD, ON),
    (0x1FBE, 0x1FBE, L),
    (0x1FBF, 0x1FC1, ON),
    (0x1FC2, 0x1FCC, L),
    (0x1FCD, 0x1FCF, ON),
    (0x1FD0, 0x1FDC, L),
    (0x1FDD, 0x1FDF, ON),
    (0x1FE0, 0x1FEC, L),
    (0x1FED, 0x1FEF, ON),
    (0x1FF0, 0x1FFC, L),
    (0x1FFD, 0x1FFE, ON),
    // General Punctuation
    (0x2000, 0x200A, WS),
    (0x200B, 0x200D, BN),
    (0x200E, 0x200E, L),
    (0x200F, 0x200F, R),
    (0x2010, 0x2027, ON),
    (0x2028, 0x2028, WS),
    (0x2029, 0x2029, B),
    (0x202A, 0x202A, LRE),
    (0x202B, 0x202B, RLE),
    (0x202C, 0x202C, PDF),
    (0x202D, 0x202D, LRO),
    (0x202E, 0x202E, RLO),
    (0x202F, 0x202F, CS),
    (0x2030, 0x2034, ET),
    (0x2035, 0x2043, ON),
    (0x2044, 0x2044, CS),
    (0x2045, 0x205E, ON),
    (0x205F, 0x205F, WS),
    (0x2060, 0x2065, BN),
    (0x2066, 0x2066, LRI),
    (0x2067, 0x2067, RLI),
    (0x2068, 0x2068, FSI),
    (0x2069, 0x2069, PDI),
    (0x206A, 0x206F, BN),
    // Superscripts and Subscripts
    (0x2070, 0x2070, EN),
    (0x2071, 0x2073, L),
    (0x2074, 0x2079, EN),
    (0x207A, 0x207B, ES),
    (0x207C, 0x207E, ON),
    (0x207F, 0x207F, L),
    (0x2080, 0x2089, EN),
    (0x208A, 0x208B, ES),
    (0x208C, 0x208E, ON),
    (0x2090, 0x209C, L),
    // Currency Symbols
    (0x20A0, 0x20CF, ET),
    // Combining Marks for Symbols
    (0x20D0, 0x20F0, NSM),
    // Letterlike Symbols
    (0x2100, 0x2101, ON),
    (0x2102, 0x2102, L),
    (0x2103, 0x2106, ON),
    (0x2107, 0x2107, L),
    (0x2108, 0x2109, ON),
    (0x210A, 0x2113, L),
    (0x2114, 0x2114, ON),
    (0x2115, 0x2115, L),
    (0x2116, 0x2118, ON),
    (0x2119, 0x211D, L),
    (0x211E, 0x2123, ON),
    (0x2124, 0x2124, L),
    (0x2125, 0x2125, ON),
    (0x2126, 0x2126, L),
    (0x2127, 0x2127, ON),
    (0x2128, 0x2128, L),
    (0x2129, 0x2129, ON),
    (0x212A, 0x212D, L),
    (0x212E, 0x212E, ET),
    (0x212F, 0x2139, L),
    (0x213A, 0x213B, ON),
    (0x213C, 0x213F, L),
    (0x2140, 0x2144, ON),
    (0x2145, 0x2149, L),
    (0x214A, 0x214D, ON),
    (0x214E, 0x214F, L),
    // Number Forms
    (0x2150, 0x215F, ON),
    (0x2160, 0x2188, L),
    (0x2189, 0x218F, ON),
    // Arrows, Mathematical Operators
    (0x2190, 0x2211, ON),
    (0x2212, 0x2212, ES),
    (0x2213, 0x2213, ET),
    (0x2214, 0x2335, ON),
    (0x2336, 0x237A, L),
    (0x237B, 0x2394, ON),
    (0x2395, 0x2395, L),
    // Misc Technical, Control Pictures, Enclosed Alphanumerics
    (0x2396, 0x2487, ON),
    (0x2488, 0x249B, EN),
    (0x249C, 0x24E9, L),
    (0x24EA, 0x26AB, ON),
    (0x26AC, 0x26AC, L),
    (0x26AD, 0x27FF, ON),
    // Braille Patterns
    (0x2800, 0x28FF, L),
    (0x2900, 0x2BFF, ON),
    // Glagolitic, Coptic
    (0x2C00, 0x2CE4, L),
    (0x2CE5, 0x2CEA, ON),
    (0x2CEB, 0x2CEE, L),
    (0x2CEF, 0x2CF1, NSM),
    (0x2CF2, 0x2CF8, L),
    (0x2CF9, 0x2CFF, ON),
    // Georgian Supplement, Tifinagh
    (0x2D00, 0x2D6F, L),
    (0x2D70, 0x2D70, ON),
    (0x2D71, 0x2D7E, L),
    (0x2D7F, 0x2D7F, NSM),
    (0x2D80, 0x2DDF, L),
    (0x2DE0, 0x2DFF, NSM),
    // Supplemental Punctuation, CJK Radicals
    (0x2E00, 0x2E7F, ON),
    (0x2E80, 0x2FFF, ON),
    // CJK Symbols and Punctuation
    (0x3000, 0x3000, WS),
    (0x3001, 0x3004, ON),
    (0x3005, 0x3007, L),
    (0x3008, 0x3020, ON),
    (0x3021, 0x3029, L),
    (0x302A, 0x302D, NSM),
    (0x302E, 0x302F, L),
    (0x3030, 0x3030, ON),
    (0x3031, 0x3035, L),
    (0x3036, 0x3037, ON),
    (0x3038, 0x303C, L),
    (0x303D, 0x303F, ON),
    // Hiragana, Katakana
    (0x3040, 0x3098, L),
    (0x3099, 0x309A, NSM),
    (0x309B, 0x309C, ON),
    (0x309D, 0x309F, L),
    (0x30A0, 0x30A0, ON),
    (0x30A1, 0x30FA, L),
    (0x30FB, 0x30FB, ON),
    (0x30FC, 0x31FF, L),
    // Enclosed CJK Letters and Months
    (0x3200, 0x324F, L),
    (0x3250, 0x325F, ON),
    (0x3260, 0x327B, L),
    (0x327C, 0x327E, ON),
    (0x327F, 0x32B0, L),
    (0x32B1, 0x32BF, ON),
    (0x32C0, 0x4DBF, L),
    // Yijing Hexagram Symbols
    (0x4DC0, 0x4DFF, ON),
    // CJK Unified Ideographs, Yi
    (0x4E00, 0xA48F, L),
    (0xA490, 0xA4CF, ON),
    // Lisu, Vai, Cyrillic Extended-B
    (0xA4D0, 0xA66E, L),
    (0xA66F, 0xA672, NSM),
    (0xA673, 0xA673, ON),
    (0xA674, 0xA67D, NSM),
    (0xA67E, 0xA67E, ON),
    (0xA67F, 0xA6EF, L),
    (0xA6F0, 0xA6F1, NSM),
    (0xA6F2, 0xA6FF, L),
    // Modifier Tone Letters, Latin Extended-D
    (0xA700, 0xA721, ON),
    (0xA722, 0xA787, L),
    (0xA788, 0xA788, ON),
    (0xA789, 0xA801, L),
    // Syloti Nagri
    (0xA802, 0xA802, NSM),
    (0xA803, 0xA805, L),
    (0xA806, 0xA806, NSM),
    (0xA807, 0xA80A, L),
    (0xA80B, 0xA80B, NSM),
    (0xA80C, 0xA824, L),
    (0xA825, 0xA826, NSM),
    // Common Indic Number Forms, Phags-pa
    (0xA827, 0xA835, L),
    (0xA836, 0xA837, ON),
    (0xA838, 0xA838, ET),
    (0xA839, 0xA839, ON),
    (0xA83A, 0xA8C3, L),
    (0xA8C4, 0xA8C4, NSM),
    (0xA8C5, 0xA8DF, L),
    (0xA8E0, 0xA8F1, NSM),
    // Kayah Li, Rejang
    (0xA8F2, 0xA925, L),
    (0xA926, 0xA92D, NSM),
    (0xA92E, 0xA946, L),
    (0xA947, 0xA951, NSM),
    (0xA952, 0xA97F, L),
    // Javanese
    (0xA980, 0xA982, NSM),
    (0xA983, 0xA9B2, L),
    (0xA9B3, 0xA9B3, NSM),
    (0xA9B4, 0xA9B5, L),
    (0xA9B6, 0xA9B9, NSM),
    (0xA9BA, 0xA9BB, L),
    (0xA9BC, 0xA9BC, NSM),
    // Cham
    (0xA9BD, 0xAA28, L),
    (0xAA29, 0xAA2E, NSM),
    (0xAA2F, 0xAA30, L),
    (0xAA31, 0xAA32, NSM),
    (0xAA33, 0xAA34, L),
    (0xAA35, 0xAA36, NSM),
    (0xAA37, 0xAA42, L),
    (0xAA43, 0xAA43, NSM),
    (0xAA44, 0xAA4B, L),
    (0xAA4C, 0xAA4C, NSM),
    // Tai Viet, Meetei Mayek
    (0xAA4D, 0xAAEB, L),
    (0xAAEC, 0xAAED, NSM),
    (0xAAEE, 0xAAF5, L),
    (0xAAF6, 0xAAF6, NSM),
    (0xAAF7, 0xABE4, L),
    (0xABE5, 0xABE5, NSM),
    (0xABE6, 0xABE7, L),
    (0xABE8, 0xABE8, NSM),
    (0xABE9, 0xABEC, L),
    (0xABED, 0xABED, NSM),
    // Hangul Syllables, CJK Compatibility Ideographs
    (0xABEE, 0xFAFF, L),
    // Alphabetic Presentation Forms
    (0xFB00, 0xFB17, L),
    (0xFB1D, 0xFB1D, R),
    (0xFB1E, 0xFB1E, NSM),
    (0xFB1F, 0xFB28, R),
    (0xFB29, 0xFB29, ES),
    (0xFB2A, 0xFB4F, R),
    // Arabic Presentation Forms-A
    (0xFB50, 0xFD3D, AL),
    (0xFD3E, 0xFD3F, ON),
    (0xFD40, 0xFDFF, AL),
    // Variation Selectors, Vertical Forms, Combining Half Marks
    (0xFE00, 0xFE0F, NSM),
    (0xFE10, 0xFE19, ON),
    (0xFE20, 0xFE2F, NSM),
    // CJK Compatibility Forms, Small Form Variants
    (0xFE30, 0xFE4F, ON),
    (0xFE50, 0xFE50, CS),
    (0xFE51, 0xFE51, ON),
    (0xFE52, 0xFE52, CS),
    (0xFE53, 0xFE54, ON),
    (0xFE55, 0xFE55, CS),
    (0xFE56, 0xFE5E, ON),
    (0xFE5F, 0xFE5F, ET),
    (0xFE60, 0xFE61, ON),
    (0xFE62, 0xFE63, ES),
    (0xFE64, 0xFE66, ON),
    (0xFE68, 0xFE68, ON),
    (0xFE69, 0xFE6A, ET),
    (0xFE6B, 0xFE6B, ON),
    // Arabic Presentation Forms-B
    (0xFE70, 0xFEFE, AL),
    (0xFEFF, 0xFEFF, BN),
    // Halfwidth and Fullwidth Forms
    (0xFF01, 0xFF02, ON),
    (0xFF03, 0xFF05, ET),
    (0xFF06, 0xFF0A, ON),
    (0xFF0B, 0xFF0B, ES),
    (0xFF0C, 0xFF0C, CS),
    (0xFF0D, 0xFF0D, ES),
    (0xFF0E, 0xFF0F, CS),
    (0xFF10, 0xFF19, EN),
    (0xFF1A, 0xFF1A, CS),
    (0xFF1B, 0xFF20, ON),
    (0xFF21, 0xFF3A, L),
    (0xFF3B, 0xFF40, ON),
    (0xFF41, 0xFF5A, L),
    (0xFF5B, 0xFF65, ON),
    (0xFF66, 0xFFDF, L),
    (0xFFE0, 0xFFE1, ET),
    (0xFFE2, 0xFFE4, ON),
    (0xFFE5, 0xFFE6, ET),
    (0xFFE8, 0xFFEE, ON),
    (0xFFF9, 0xFFFD, ON),
    // Linear B, Aegean, Ancient Greek, Old Italic, Gothic, Deseret
    (0x10000, 0x107FF, L),
    // Cypriot, Phoenician, Aramaic and other historic RTL scripts
    (0x10800, 0x10E5F, R),
    (0x10E60, 0x10E7E, AN),
    (0x10E7F, 0x10FFF, R),
    // Brahmi
    (0x11000, 0x11000, L),
    (0x11001, 0x11001, NSM),
    (0x11002, 0x11037, L),
    (0x11038, 0x11046, NSM),
    (0x11047, 0x110B2, L),
    (0x110B3, 0x110B6, NSM),
    (0x110B7, 0x110B8, L),
    (0x110B9, 0x110BA, NSM),
    // Chakma
    (0x110BB, 0x11100, L),
    (0x11101, 0x11102, NSM),
    (0x11103, 0x11126, L),
    (0x11127, 0x1112B, NSM),
    (0x1112C, 0x1112C, L),
    (0x1112D, 0x11134, NSM),
    // Sharada
    (0x11135, 0x1117F, L),
    (0x11180, 0x11181, NSM),
    (0x11182, 0x111B5, L),
    (0x111B6, 0x111BE, NSM),
    // Takri
    (0x111BF, 0x116AA, L),
    (0x116AB, 0x116AB, NSM),
    (0x116AC, 0x116AC, L),
    (0x116AD, 0x116AD, NSM),
    (0x116AE, 0x116AF, L),
    (0x116B0, 0x116B5, NSM),
    (0x116B6, 0x116B6, L),
    (0x116B7, 0x116B7, NSM),
    // Cuneiform, Egyptian Hieroglyphs, Bamum Supplement
    (0x116B8, 0x1D164, L),
    // Musical Symbols
    (0x1D165, 0x1D166, L),
    (0x1D167, 0x1D169, NSM),
    (0x1D16A, 0x1D172, L),
    (0x1D173, 0x1D17A, BN),
    (0x1D17B, 0x1D182, NSM),
    (0x1D183, 0x1D184, L),
    (0x1D185, 0x1D18B, NSM),
    (0x1D18C, 0x1D1A9, L),
    (0x1D1AA, 0x1D1AD, NSM),
    (0x1D1AE, 0x1D1FF, L),
    // Ancient Greek Musical Notation, Tai Xuan Jing
    (0x1D200, 0x1D241, ON),
    (0x1D242, 0x1D244, NSM),
    (0x1D245, 0x1D245, ON),
    (0x1D300, 0x1D356, ON),
    (0x1D360, 0x1D371, L),
    // Mathematical Alphanumeric Symbols
    (0x1D400, 0x1D7CB, L),
    (0x1D7CE, 0x1D7FF, EN),
    // Unassigned RTL planes
    (0x1E800, 0x1EDFF, R),
    // Arabic Mathematical Alphabetic Symbols
    (0x1EE00, 0x1EEFF, AL),
    (0x1EF00, 0x1EFFF, R),
    // Mahjong, Dominoes, Playing Cards
    (0x1F000, 0x1F0FF, ON),
    // Enclosed Alphanumeric Supplement
    (0x1F100, 0x1F10A, EN),
    (0x1F10B, 0x1F10F, ON),
    (0x1F110, 0x1F169, L),
    (0x1F16A, 0x1F16F, ON),
    (0x1F170, 0x1F1FF, L),
    (0x1F200, 0x1F2FF, L),
    // Miscellaneous Symbols and Pictographs
    (0x1F300, 0x1FFFF, ON),
    // CJK Unified Ideographs Extension B-D
    (0x20000, 0x2FFFD, L),
    (0x30000, 0x3FFFD, L),
    // Tags, Variation Selectors Supplement
    (0xE0001, 0xE007F, BN),
    (0xE0100, 0xE01EF, NSM),
    // Private Use
    (0xF0000, 0xFFFFD, L),
    (0x100000, 0x10FFFD, L),
];

/// Look up the bidi class of a code point.
///
/// Code points absent from the table resolve to `ON`, the treatment of
/// unassigned characters.
pub fn bidi_class(ch: char) -> BidiClass {
    let cp = ch as u32;
    match BIDI_CLASS_RANGES.binary_search_by(|&(lo, hi, _)| {
        if hi < cp {
            core::cmp::Ordering::Less
        } else if lo > cp {
            core::cmp::Ordering::Greater
        } else {
            core::cmp::Ordering::Equal
        }
    }) {
        Ok(idx) => BIDI_CLASS_RANGES[idx].2,
        Err(_) => ON,
    }
}

/// Paired brackets (BD16), sorted by opening code point.
#[rustfmt::skip]
const BRACKET_OPEN: &[(char, char)] = &[
    ('\u{0028}', '\u{0029}'),
    ('\u{005B}', '\u{005D}'),
    ('\u{007B}', '\u{007D}'),
    ('\u{0F3A}', '\u{0F3B}'),
    ('\u{0F3C}', '\u{0F3D}'),
    ('\u{169B}', '\u{169C}'),
    ('\u{2045}', '\u{2046}'),
    ('\u{207D}', '\u{207E}'),
    ('\u{208D}', '\u{208E}'),
    ('\u{2308}', '\u{2309}'),
    ('\u{230A}', '\u{230B}'),
    ('\u{2329}', '\u{232A}'),
    ('\u{2768}', '\u{2769}'),
    ('\u{276A}', '\u{276B}'),
    ('\u{276C}', '\u{276D}'),
    ('\u{276E}', '\u{276F}'),
    ('\u{2770}', '\u{2771}'),
    ('\u{2772}', '\u{2773}'),
    ('\u{2774}', '\u{2775}'),
    ('\u{27C5}', '\u{27C6}'),
    ('\u{27E6}', '\u{27E7}'),
    ('\u{27E8}', '\u{27E9}'),
    ('\u{27EA}', '\u{27EB}'),
    ('\u{27EC}', '\u{27ED}'),
    ('\u{27EE}', '\u{27EF}'),
    ('\u{2983}', '\u{2984}'),
    ('\u{2985}', '\u{2986}'),
    ('\u{2987}', '\u{2988}'),
    ('\u{2989}', '\u{298A}'),
    ('\u{298B}', '\u{298C}'),
    ('\u{298D}', '\u{2990}'),
    ('\u{298F}', '\u{298E}'),
    ('\u{2991}', '\u{2992}'),
    ('\u{2993}', '\u{2994}'),
    ('\u{2995}', '\u{2996}'),
    ('\u{2997}', '\u{2998}'),
    ('\u{29D8}', '\u{29D9}'),
    ('\u{29DA}', '\u{29DB}'),
    ('\u{29FC}', '\u{29FD}'),
    ('\u{2E22}', '\u{2E23}'),
    ('\u{2E24}', '\u{2E25}'),
    ('\u{2E26}', '\u{2E27}'),
    ('\u{2E28}', '\u{2E29}'),
    ('\u{3008}', '\u{3009}'),
    ('\u{300A}', '\u{300B}'),
    ('\u{300C}', '\u{300D}'),
    ('\u{300E}', '\u{300F}'),
    ('\u{3010}', '\u{3011}'),
    ('\u{3014}', '\u{3015}'),
    ('\u{3016}', '\u{3017}'),
    ('\u{3018}', '\u{3019}'),
    ('\u{301A}', '\u{301B}'),
    ('\u{FE59}', '\u{FE5A}'),
    ('\u{FE5B}', '\u{FE5C}'),
    ('\u{FE5D}', '\u{FE5E}'),
    ('\u{FF08}', '\u{FF09}'),
    ('\u{FF3B}', '\u{FF3D}'),
    ('\u{FF5B}', '\u{FF5D}'),
    ('\u{FF5F}', '\u{FF60}'),
    ('\u{FF62}', '\u{FF63}'),
];

/// Same pairs indexed by closing code point, sorted by that code point.
#[rustfmt::skip]
const BRACKET_CLOSE: &[(char, char)] = &[
    ('\u{0029}', '\u{0028}'),
    ('\u{005D}', '\u{005B}'),
    ('\u{007D}', '\u{007B}'),
    ('\u{0F3B}', '\u{0F3A}'),
    ('\u{0F3D}', '\u{0F3C}'),
    ('\u{169C}', '\u{169B}'),
    ('\u{2046}', '\u{2045}'),
    ('\u{207E}', '\u{207D}'),
    ('\u{208E}', '\u{208D}'),
    ('\u{2309}', '\u{2308}'),
    ('\u{230B}', '\u{230A}'),
    ('\u{232A}', '\u{2329}'),
    ('\u{2769}', '\u{2768}'),
    ('\u{276B}', '\u{276A}'),
    ('\u{276D}', '\u{276C}'),
    ('\u{276F}', '\u{276E}'),
    ('\u{2771}', '\u{2770}'),
    ('\u{2773}', '\u{2772}'),
    ('\u{2775}', '\u{2774}'),
    ('\u{27C6}', '\u{27C5}'),
    ('\u{27E7}', '\u{27E6}'),
    ('\u{27E9}', '\u{27E8}'),
    ('\u{27EB}', '\u{27EA}'),
    ('\u{27ED}', '\u{27EC}'),
    ('\u{27EF}', '\u{27EE}'),
    ('\u{2984}', '\u{2983}'),
    ('\u{2986}', '\u{2985}'),
    ('\u{2988}', '\u{2987}'),
    ('\u{298A}', '\u{2989}'),
    ('\u{298C}', '\u{298B}'),
    ('\u{298E}', '\u{298F}'),
    ('\u{2990}', '\u{298D}'),
    ('\u{2992}', '\u{2991}'),
    ('\u{2994}', '\u{2993}'),
    ('\u{2996}', '\u{2995}'),
    ('\u{2998}', '\u{2997}'),
    ('\u{29D9}', '\u{29D8}'),
    ('\u{29DB}', '\u{29DA}'),
    ('\u{29FD}', '\u{29FC}'),
    ('\u{2E23}', '\u{2E22}'),
    ('\u{2E25}', '\u{2E24}'),
    ('\u{2E27}', '\u{2E26}'),
    ('\u{2E29}', '\u{2E28}'),
    ('\u{3009}', '\u{3008}'),
    ('\u{300B}', '\u{300A}'),
    ('\u{300D}', '\u{300C}'),
    ('\u{300F}', '\u{300E}'),
    ('\u{3011}', '\u{3010}'),
    ('\u{3015}', '\u{3014}'),
    ('\u{3017}', '\u{3016}'),
    ('\u{3019}', '\u{3018}'),
    ('\u{301B}', '\u{301A}'),
    ('\u{FE5A}', '\u{FE59}'),
    ('\u{FE5C}', '\u{FE5B}'),
    ('\u{FE5E}', '\u{FE5D}'),
    ('\u{FF09}', '\u{FF08}'),
    ('\u{FF3D}', '\u{FF3B}'),
    ('\u{FF5D}', '\u{FF5B}'),
    ('\u{FF60}', '\u{FF5F}'),
    ('\u{FF63}', '\u{FF62}'),
];

/// Map a bracket to its canonical equivalent for pair matching.
///
/// U+2329/U+232A decompose canonically to U+3008/U+3009.
pub fn canonical_bracket(ch: char) -> char {
    match ch {
        '\u{2329}' => '\u{3008}',
        '\u{232A}' => '\u{3009}',
        other => other,
    }
}

/// Classify a code point as an opening bracket, closing bracket, or neither
/// (BD14/BD15). The partner returned is the canonical pairing partner.
pub fn bracket_type(ch: char) -> BracketType {
    if let Ok(idx) = BRACKET_OPEN.binary_search_by_key(&ch, |&(open, _)| open) {
        return BracketType::Open(BRACKET_OPEN[idx].1);
    }
    if let Ok(idx) = BRACKET_CLOSE.binary_search_by_key(&ch, |&(close, _)| close) {
        return BracketType::Close(BRACKET_CLOSE[idx].1);
    }
    BracketType::None
}

/// Mirrored glyph pairs (BidiMirroring), sorted by source code point.
/// Both directions are present.
#[rustfmt::skip]
const MIRROR_PAIRS: &[(char, char)] = &[
    ('\u{0028}', '\u{0029}'),
    ('\u{0029}', '\u{0028}'),
    ('\u{003C}', '\u{003E}'),
    ('\u{003E}', '\u{003C}'),
    ('\u{005B}', '\u{005D}'),
    ('\u{005D}', '\u{005B}'),
    ('\u{007B}', '\u{007D}'),
    ('\u{007D}', '\u{007B}'),
    ('\u{00AB}', '\u{00BB}'),
    ('\u{00BB}', '\u{00AB}'),
    ('\u{0F3A}', '\u{0F3B}'),
    ('\u{0F3B}', '\u{0F3A}'),
    ('\u{0F3C}', '\u{0F3D}'),
    ('\u{0F3D}', '\u{0F3C}'),
    ('\u{169B}', '\u{169C}'),
    ('\u{169C}', '\u{169B}'),
    ('\u{2039}', '\u{203A}'),
    ('\u{203A}', '\u{2039}'),
    ('\u{2045}', '\u{2046}'),
    ('\u{2046}', '\u{2045}'),
    ('\u{207D}', '\u{207E}'),
    ('\u{207E}', '\u{207D}'),
    ('\u{208D}', '\u{208E}'),
    ('\u{208E}', '\u{208D}'),
    ('\u{2208}', '\u{220B}'),
    ('\u{2209}', '\u{220C}'),
    ('\u{220A}', '\u{220D}'),
    ('\u{220B}', '\u{2208}'),
    ('\u{220C}', '\u{2209}'),
    ('\u{220D}', '\u{220A}'),
    ('\u{2264}', '\u{2265}'),
    ('\u{2265}', '\u{2264}'),
    ('\u{2266}', '\u{2267}'),
    ('\u{2267}', '\u{2266}'),
    ('\u{2268}', '\u{2269}'),
    ('\u{2269}', '\u{2268}'),
    ('\u{226A}', '\u{226B}'),
    ('\u{226B}', '\u{226A}'),
    ('\u{226E}', '\u{226F}'),
    ('\u{226F}', '\u{226E}'),
    ('\u{2270}', '\u{2271}'),
    ('\u{2271}', '\u{2270}'),
    ('\u{2272}', '\u{2273}'),
    ('\u{2273}', '\u{2272}'),
    ('\u{2276}', '\u{2277}'),
    ('\u{2277}', '\u{2276}'),
    ('\u{2278}', '\u{2279}'),
    ('\u{2279}', '\u{2278}'),
    ('\u{227A}', '\u{227B}'),
    ('\u{227B}', '\u{227A}'),
    ('\u{227C}', '\u{227D}'),
    ('\u{227D}', '\u{227C}'),
    ('\u{2308}', '\u{2309}'),
    ('\u{2309}', '\u{2308}'),
    ('\u{230A}', '\u{230B}'),
    ('\u{230B}', '\u{230A}'),
    ('\u{2329}', '\u{232A}'),
    ('\u{232A}', '\u{2329}'),
    ('\u{2768}', '\u{2769}'),
    ('\u{2769}', '\u{2768}'),
    ('\u{276A}', '\u{276B}'),
    ('\u{276B}', '\u{276A}'),
    ('\u{276C}', '\u{276D}'),
    ('\u{276D}', '\u{276C}'),
    ('\u{276E}', '\u{276F}'),
    ('\u{276F}', '\u{276E}'),
    ('\u{2770}', '\u{2771}'),
    ('\u{2771}', '\u{2770}'),
    ('\u{2772}', '\u{2773}'),
    ('\u{2773}', '\u{2772}'),
    ('\u{2774}', '\u{2775}'),
    ('\u{2775}', '\u{2774}'),
    ('\u{27C5}', '\u{27C6}'),
    ('\u{27C6}', '\u{27C5}'),
    ('\u{27E6}', '\u{27E7}'),
    ('\u{27E7}', '\u{27E6}'),
    ('\u{27E8}', '\u{27E9}'),
    ('\u{27E9}', '\u{27E8}'),
    ('\u{27EA}', '\u{27EB}'),
    ('\u{27EB}', '\u{27EA}'),
    ('\u{27EC}', '\u{27ED}'),
    ('\u{27ED}', '\u{27EC}'),
    ('\u{27EE}', '\u{27EF}'),
    ('\u{27EF}', '\u{27EE}'),
    ('\u{2983}', '\u{2984}'),
    ('\u{2984}', '\u{2983}'),
    ('\u{2985}', '\u{2986}'),
    ('\u{2986}', '\u{2985}'),
    ('\u{2987}', '\u{2988}'),
    ('\u{2988}', '\u{2987}'),
    ('\u{2989}', '\u{298A}'),
    ('\u{298A}', '\u{2989}'),
    ('\u{298B}', '\u{298C}'),
    ('\u{298C}', '\u{298B}'),
    ('\u{298D}', '\u{2990}'),
    ('\u{298E}', '\u{298F}'),
    ('\u{298F}', '\u{298E}'),
    ('\u{2990}', '\u{298D}'),
    ('\u{2991}', '\u{2992}'),
    ('\u{2992}', '\u{2991}'),
    ('\u{2993}', '\u{2994}'),
    ('\u{2994}', '\u{2993}'),
    ('\u{2995}', '\u{2996}'),
    ('\u{2996}', '\u{2995}'),
    ('\u{2997}', '\u{2998}'),
    ('\u{2998}', '\u{2997}'),
    ('\u{29D8}', '\u{29D9}'),
    ('\u{29D9}', '\u{29D8}'),
    ('\u{29DA}', '\u{29DB}'),
    ('\u{29DB}', '\u{29DA}'),
    ('\u{29FC}', '\u{29FD}'),
    ('\u{29FD}', '\u{29FC}'),
    ('\u{2E22}', '\u{2E23}'),
    ('\u{2E23}', '\u{2E22}'),
    ('\u{2E24}', '\u{2E25}'),
    ('\u{2E25}', '\u{2E24}'),
    ('\u{2E26}', '\u{2E27}'),
    ('\u{2E27}', '\u{2E26}'),
    ('\u{2E28}', '\u{2E29}'),
    ('\u{2E29}', '\u{2E28}'),
    ('\u{3008}', '\u{3009}'),
    ('\u{3009}', '\u{3008}'),
    ('\u{300A}', '\u{300B}'),
    ('\u{300B}', '\u{300A}'),
    ('\u{300C}', '\u{300D}'),
    ('\u{300D}', '\u{300C}'),
    ('\u{300E}', '\u{300F}'),
    ('\u{300F}', '\u{300E}'),
    ('\u{3010}', '\u{3011}'),
    ('\u{3011}', '\u{3010}'),
    ('\u{3014}', '\u{3015}'),
    ('\u{3015}', '\u{3014}'),
    ('\u{3016}', '\u{3017}'),
    ('\u{3017}', '\u{3016}'),
    ('\u{3018}', '\u{3019}'),
    ('\u{3019}', '\u{3018}'),
    ('\u{301A}', '\u{301B}'),
    ('\u{301B}', '\u{301A}'),
    ('\u{FE59}', '\u{FE5A}'),
    ('\u{FE5A}', '\u{FE59}'),
    ('\u{FE5B}', '\u{FE5C}'),
    ('\u{FE5C}', '\u{FE5B}'),
    ('\u{FE5D}', '\u{FE5E}'),
    ('\u{FE5E}', '\u{FE5D}'),
    ('\u{FF08}', '\u{FF09}'),
    ('\u{FF09}', '\u{FF08}'),
    ('\u{FF1C}', '\u{FF1E}'),
    ('\u{FF1E}', '\u{FF1C}'),
    ('\u{FF3B}', '\u{FF3D}'),
    ('\u{FF3D}', '\u{FF3B}'),
    ('\u{FF5B}', '\u{FF5D}'),
    ('\u{FF5D}', '\u{FF5B}'),
    ('\u{FF5F}', '\u{FF60}'),
    ('\u{FF60}', '\u{FF5F}'),
    ('\u{FF62}', '\u{FF63}'),
    ('\u{FF63}', '\u{FF62}'),
];

/// Look up the mirrored counterpart of a character (L4 data).
///
/// Returns `None` for characters without a mirrored form. Callers apply
/// mirroring themselves after reordering; the pipeline never does.
pub fn bidi_mirror(ch: char) -> Option<char> {
    MIRROR_PAIRS
        .binary_search_by_key(&ch, |&(from, _)| from)
        .ok()
        .map(|idx| MIRROR_PAIRS[idx].1)
}

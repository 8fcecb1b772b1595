//! Static Unicode property tables.
//!
//! @generated by `gen-unicode-tables` from the Unicode Character Database
//! (UnicodeData.txt, auxiliary/GraphemeBreakProperty.txt,
//! DerivedCoreProperties.txt, emoji/emoji-data.txt). Do not edit by hand.
//!
//! Each class is a sorted list of inclusive code point ranges. Hangul LV/LVT
//! syllable types are computed arithmetically in `tables.rs` and have no
//! table here. The fold table maps a source code point to its fully memoized
//! fold result; every folded string is a fixed point of the fold.

use crate::unify::FoldKind;

pub(crate) static CONTROL: &[(u32, u32)] = &[
    (0x0, 0x9), (0xB, 0xC), (0xE, 0x1F), (0x7F, 0x9F), (0xAD, 0xAD), (0x61C, 0x61C),
    (0x180E, 0x180E), (0x200B, 0x200B), (0x200E, 0x200F), (0x2028, 0x202E), (0x2060, 0x206F),
    (0xFEFF, 0xFEFF), (0xFFF0, 0xFFFB), (0x13430, 0x1343F), (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A), (0xE0000, 0xE001F), (0xE0080, 0xE00FF), (0xE01F0, 0xE0FFF),
];

pub(crate) static EXTEND: &[(u32, u32)] = &[
    (0x300, 0x36F), (0x483, 0x489), (0x591, 0x5BD), (0x5BF, 0x5BF), (0x5C1, 0x5C2),
    (0x5C4, 0x5C5), (0x5C7, 0x5C7), (0x610, 0x61A), (0x64B, 0x65F), (0x670, 0x670),
    (0x6D6, 0x6DC), (0x6DF, 0x6E4), (0x6E7, 0x6E8), (0x6EA, 0x6ED), (0x711, 0x711),
    (0x730, 0x74A), (0x7A6, 0x7B0), (0x7EB, 0x7F3), (0x7FD, 0x7FD), (0x816, 0x819),
    (0x81B, 0x823), (0x825, 0x827), (0x829, 0x82D), (0x859, 0x85B), (0x897, 0x89F),
    (0x8CA, 0x8E1), (0x8E3, 0x902), (0x93A, 0x93A), (0x93C, 0x93C), (0x941, 0x948),
    (0x94D, 0x94D), (0x951, 0x957), (0x962, 0x963), (0x981, 0x981), (0x9BC, 0x9BC),
    (0x9BE, 0x9BE), (0x9C1, 0x9C4), (0x9CD, 0x9CD), (0x9D7, 0x9D7), (0x9E2, 0x9E3),
    (0x9FE, 0x9FE), (0xA01, 0xA02), (0xA3C, 0xA3C), (0xA41, 0xA42), (0xA47, 0xA48),
    (0xA4B, 0xA4D), (0xA51, 0xA51), (0xA70, 0xA71), (0xA75, 0xA75), (0xA81, 0xA82),
    (0xABC, 0xABC), (0xAC1, 0xAC5), (0xAC7, 0xAC8), (0xACD, 0xACD), (0xAE2, 0xAE3),
    (0xAFA, 0xAFF), (0xB01, 0xB01), (0xB3C, 0xB3C), (0xB3E, 0xB3F), (0xB41, 0xB44),
    (0xB4D, 0xB4D), (0xB55, 0xB57), (0xB62, 0xB63), (0xB82, 0xB82), (0xBBE, 0xBBE),
    (0xBC0, 0xBC0), (0xBCD, 0xBCD), (0xBD7, 0xBD7), (0xC00, 0xC00), (0xC04, 0xC04),
    (0xC3C, 0xC3C), (0xC3E, 0xC40), (0xC46, 0xC48), (0xC4A, 0xC4D), (0xC55, 0xC56),
    (0xC62, 0xC63), (0xC81, 0xC81), (0xCBC, 0xCBC), (0xCBF, 0xCC0), (0xCC2, 0xCC2),
    (0xCC6, 0xCC8), (0xCCA, 0xCCD), (0xCD5, 0xCD6), (0xCE2, 0xCE3), (0xD00, 0xD01),
    (0xD3B, 0xD3C), (0xD3E, 0xD3E), (0xD41, 0xD44), (0xD4D, 0xD4D), (0xD57, 0xD57),
    (0xD62, 0xD63), (0xD81, 0xD81), (0xDCA, 0xDCA), (0xDCF, 0xDCF), (0xDD2, 0xDD4),
    (0xDD6, 0xDD6), (0xDDF, 0xDDF), (0xE31, 0xE31), (0xE34, 0xE3A), (0xE47, 0xE4E),
    (0xEB1, 0xEB1), (0xEB4, 0xEBC), (0xEC8, 0xECE), (0xF18, 0xF19), (0xF35, 0xF35),
    (0xF37, 0xF37), (0xF39, 0xF39), (0xF71, 0xF7E), (0xF80, 0xF84), (0xF86, 0xF87),
    (0xF8D, 0xF97), (0xF99, 0xFBC), (0xFC6, 0xFC6), (0x102D, 0x1030), (0x1032, 0x1037),
    (0x1039, 0x103A), (0x103D, 0x103E), (0x1058, 0x1059), (0x105E, 0x1060), (0x1071, 0x1074),
    (0x1082, 0x1082), (0x1085, 0x1086), (0x108D, 0x108D), (0x109D, 0x109D), (0x135D, 0x135F),
    (0x1712, 0x1715), (0x1732, 0x1734), (0x1752, 0x1753), (0x1772, 0x1773), (0x17B4, 0x17B5),
    (0x17B7, 0x17BD), (0x17C6, 0x17C6), (0x17C9, 0x17D3), (0x17DD, 0x17DD), (0x180B, 0x180D),
    (0x180F, 0x180F), (0x1885, 0x1886), (0x18A9, 0x18A9), (0x1920, 0x1922), (0x1927, 0x1928),
    (0x1932, 0x1932), (0x1939, 0x193B), (0x1A17, 0x1A18), (0x1A1B, 0x1A1B), (0x1A56, 0x1A56),
    (0x1A58, 0x1A5E), (0x1A60, 0x1A60), (0x1A62, 0x1A62), (0x1A65, 0x1A6C), (0x1A73, 0x1A7C),
    (0x1A7F, 0x1A7F), (0x1AB0, 0x1ACE), (0x1B00, 0x1B03), (0x1B34, 0x1B3D), (0x1B42, 0x1B44),
    (0x1B6B, 0x1B73), (0x1B80, 0x1B81), (0x1BA2, 0x1BA5), (0x1BA8, 0x1BAD), (0x1BE6, 0x1BE6),
    (0x1BE8, 0x1BE9), (0x1BED, 0x1BED), (0x1BEF, 0x1BF3), (0x1C2C, 0x1C33), (0x1C36, 0x1C37),
    (0x1CD0, 0x1CD2), (0x1CD4, 0x1CE0), (0x1CE2, 0x1CE8), (0x1CED, 0x1CED), (0x1CF4, 0x1CF4),
    (0x1CF8, 0x1CF9), (0x1DC0, 0x1DFF), (0x200C, 0x200C), (0x20D0, 0x20F0), (0x2CEF, 0x2CF1),
    (0x2D7F, 0x2D7F), (0x2DE0, 0x2DFF), (0x302A, 0x302F), (0x3099, 0x309A), (0xA66F, 0xA672),
    (0xA674, 0xA67D), (0xA69E, 0xA69F), (0xA6F0, 0xA6F1), (0xA802, 0xA802), (0xA806, 0xA806),
    (0xA80B, 0xA80B), (0xA825, 0xA826), (0xA82C, 0xA82C), (0xA8C4, 0xA8C5), (0xA8E0, 0xA8F1),
    (0xA8FF, 0xA8FF), (0xA926, 0xA92D), (0xA947, 0xA951), (0xA953, 0xA953), (0xA980, 0xA982),
    (0xA9B3, 0xA9B3), (0xA9B6, 0xA9B9), (0xA9BC, 0xA9BD), (0xA9C0, 0xA9C0), (0xA9E5, 0xA9E5),
    (0xAA29, 0xAA2E), (0xAA31, 0xAA32), (0xAA35, 0xAA36), (0xAA43, 0xAA43), (0xAA4C, 0xAA4C),
    (0xAA7C, 0xAA7C), (0xAAB0, 0xAAB0), (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8), (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1), (0xAAEC, 0xAAED), (0xAAF6, 0xAAF6), (0xABE5, 0xABE5), (0xABE8, 0xABE8),
    (0xABED, 0xABED), (0xFB1E, 0xFB1E), (0xFE00, 0xFE0F), (0xFE20, 0xFE2F), (0xFF9E, 0xFF9F),
    (0x101FD, 0x101FD), (0x102E0, 0x102E0), (0x10376, 0x1037A), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x10AE5, 0x10AE6), (0x10D24, 0x10D27), (0x10D69, 0x10D6D), (0x10EAB, 0x10EAC),
    (0x10EFC, 0x10EFF), (0x10F46, 0x10F50), (0x10F82, 0x10F85), (0x11001, 0x11001),
    (0x11038, 0x11046), (0x11070, 0x11070), (0x11073, 0x11074), (0x1107F, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2), (0x11100, 0x11102),
    (0x11127, 0x1112B), (0x1112D, 0x11134), (0x11173, 0x11173), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111C0, 0x111C0), (0x111C9, 0x111CC), (0x111CF, 0x111CF),
    (0x1122F, 0x11231), (0x11234, 0x11237), (0x1123E, 0x1123E), (0x11241, 0x11241),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11300, 0x11301), (0x1133B, 0x1133C),
    (0x1133E, 0x1133E), (0x11340, 0x11340), (0x1134D, 0x1134D), (0x11357, 0x11357),
    (0x11366, 0x1136C), (0x11370, 0x11374), (0x113B8, 0x113B8), (0x113BB, 0x113C0),
    (0x113C2, 0x113C2), (0x113C5, 0x113C5), (0x113C7, 0x113C9), (0x113CE, 0x113D0),
    (0x113D2, 0x113D2), (0x113E1, 0x113E2), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x1145E, 0x1145E), (0x114B0, 0x114B0), (0x114B3, 0x114B8),
    (0x114BA, 0x114BA), (0x114BD, 0x114BD), (0x114BF, 0x114C0), (0x114C2, 0x114C3),
    (0x115AF, 0x115AF), (0x115B2, 0x115B5), (0x115BC, 0x115BD), (0x115BF, 0x115C0),
    (0x115DC, 0x115DD), (0x11633, 0x1163A), (0x1163D, 0x1163D), (0x1163F, 0x11640),
    (0x116AB, 0x116AB), (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171D),
    (0x1171F, 0x1171F), (0x11722, 0x11725), (0x11727, 0x1172B), (0x1182F, 0x11837),
    (0x11839, 0x1183A), (0x11930, 0x11930), (0x1193B, 0x1193E), (0x11943, 0x11943),
    (0x119D4, 0x119D7), (0x119DA, 0x119DB), (0x119E0, 0x119E0), (0x11A01, 0x11A0A),
    (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47), (0x11A51, 0x11A56),
    (0x11A59, 0x11A5B), (0x11A8A, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x11F00, 0x11F01),
    (0x11F36, 0x11F3A), (0x11F40, 0x11F42), (0x11F5A, 0x11F5A), (0x13440, 0x13440),
    (0x13447, 0x13455), (0x1611E, 0x16129), (0x1612D, 0x1612F), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F4F, 0x16F4F), (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4),
    (0x16FF0, 0x16FF1), (0x1BC9D, 0x1BC9E), (0x1CF00, 0x1CF2D), (0x1CF30, 0x1CF46),
    (0x1D165, 0x1D169), (0x1D16D, 0x1D172), (0x1D17B, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136), (0x1E2AE, 0x1E2AE),
    (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF), (0x1E5EE, 0x1E5EF), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0x1F3FB, 0x1F3FF), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

pub(crate) static SPACING_MARK: &[(u32, u32)] = &[
    (0x903, 0x903), (0x93B, 0x93B), (0x93E, 0x940), (0x949, 0x94C), (0x94E, 0x94F),
    (0x982, 0x983), (0x9BF, 0x9C0), (0x9C7, 0x9C8), (0x9CB, 0x9CC), (0xA03, 0xA03),
    (0xA3E, 0xA40), (0xA83, 0xA83), (0xABE, 0xAC0), (0xAC9, 0xAC9), (0xACB, 0xACC),
    (0xB02, 0xB03), (0xB40, 0xB40), (0xB47, 0xB48), (0xB4B, 0xB4C), (0xBBF, 0xBBF),
    (0xBC1, 0xBC2), (0xBC6, 0xBC8), (0xBCA, 0xBCC), (0xC01, 0xC03), (0xC41, 0xC44),
    (0xC82, 0xC83), (0xCBE, 0xCBE), (0xCC1, 0xCC1), (0xCC3, 0xCC4), (0xCF3, 0xCF3),
    (0xD02, 0xD03), (0xD3F, 0xD40), (0xD46, 0xD48), (0xD4A, 0xD4C), (0xD82, 0xD83),
    (0xDD0, 0xDD1), (0xDD8, 0xDDE), (0xDF2, 0xDF3), (0xE33, 0xE33), (0xEB3, 0xEB3),
    (0xF3E, 0xF3F), (0xF7F, 0xF7F), (0x1031, 0x1031), (0x103B, 0x103C), (0x1056, 0x1057),
    (0x1084, 0x1084), (0x17B6, 0x17B6), (0x17BE, 0x17C5), (0x17C7, 0x17C8), (0x1923, 0x1926),
    (0x1929, 0x192B), (0x1930, 0x1931), (0x1933, 0x1938), (0x1A19, 0x1A1A), (0x1A55, 0x1A55),
    (0x1A57, 0x1A57), (0x1A6D, 0x1A72), (0x1B04, 0x1B04), (0x1B3E, 0x1B41), (0x1B82, 0x1B82),
    (0x1BA1, 0x1BA1), (0x1BA6, 0x1BA7), (0x1BE7, 0x1BE7), (0x1BEA, 0x1BEC), (0x1BEE, 0x1BEE),
    (0x1C24, 0x1C2B), (0x1C34, 0x1C35), (0x1CE1, 0x1CE1), (0x1CF7, 0x1CF7), (0xA823, 0xA824),
    (0xA827, 0xA827), (0xA880, 0xA881), (0xA8B4, 0xA8C3), (0xA952, 0xA952), (0xA983, 0xA983),
    (0xA9B4, 0xA9B5), (0xA9BA, 0xA9BB), (0xA9BE, 0xA9BF), (0xAA2F, 0xAA30), (0xAA33, 0xAA34),
    (0xAA4D, 0xAA4D), (0xAAEB, 0xAAEB), (0xAAEE, 0xAAEF), (0xAAF5, 0xAAF5), (0xABE3, 0xABE4),
    (0xABE6, 0xABE7), (0xABE9, 0xABEA), (0xABEC, 0xABEC), (0x11000, 0x11000),
    (0x11002, 0x11002), (0x11082, 0x11082), (0x110B0, 0x110B2), (0x110B7, 0x110B8),
    (0x1112C, 0x1112C), (0x11145, 0x11146), (0x11182, 0x11182), (0x111B3, 0x111B5),
    (0x111BF, 0x111BF), (0x111CE, 0x111CE), (0x1122C, 0x1122E), (0x11232, 0x11233),
    (0x112E0, 0x112E2), (0x11302, 0x11303), (0x1133F, 0x1133F), (0x11341, 0x11344),
    (0x11347, 0x11348), (0x1134B, 0x1134C), (0x11362, 0x11363), (0x113B9, 0x113BA),
    (0x113CA, 0x113CA), (0x113CC, 0x113CD), (0x11435, 0x11437), (0x11440, 0x11441),
    (0x11445, 0x11445), (0x114B1, 0x114B2), (0x114B9, 0x114B9), (0x114BB, 0x114BC),
    (0x114BE, 0x114BE), (0x114C1, 0x114C1), (0x115B0, 0x115B1), (0x115B8, 0x115BB),
    (0x115BE, 0x115BE), (0x11630, 0x11632), (0x1163B, 0x1163C), (0x1163E, 0x1163E),
    (0x116AC, 0x116AC), (0x116AE, 0x116AF), (0x1171E, 0x1171E), (0x11726, 0x11726),
    (0x1182C, 0x1182E), (0x11838, 0x11838), (0x11931, 0x11935), (0x11937, 0x11938),
    (0x11940, 0x11940), (0x11942, 0x11942), (0x119D1, 0x119D3), (0x119DC, 0x119DF),
    (0x119E4, 0x119E4), (0x11A39, 0x11A39), (0x11A57, 0x11A58), (0x11A97, 0x11A97),
    (0x11C2F, 0x11C2F), (0x11C3E, 0x11C3E), (0x11CA9, 0x11CA9), (0x11CB1, 0x11CB1),
    (0x11CB4, 0x11CB4), (0x11D8A, 0x11D8E), (0x11D93, 0x11D94), (0x11D96, 0x11D96),
    (0x11EF5, 0x11EF6), (0x11F03, 0x11F03), (0x11F34, 0x11F35), (0x11F3E, 0x11F3F),
    (0x1612A, 0x1612C), (0x16F51, 0x16F87),
];

pub(crate) static PREPEND: &[(u32, u32)] = &[
    (0x600, 0x605), (0x6DD, 0x6DD), (0x70F, 0x70F), (0x890, 0x891), (0x8E2, 0x8E2),
    (0xD4E, 0xD4E), (0x110BD, 0x110BD), (0x110CD, 0x110CD), (0x111C2, 0x111C3),
    (0x113D1, 0x113D1), (0x1193F, 0x1193F), (0x11941, 0x11941), (0x11A3A, 0x11A3A),
    (0x11A84, 0x11A89), (0x11D46, 0x11D46), (0x11F02, 0x11F02),
];

pub(crate) static HANGUL_L: &[(u32, u32)] = &[
    (0x1100, 0x115F), (0xA960, 0xA97C),
];

pub(crate) static HANGUL_V: &[(u32, u32)] = &[
    (0x1160, 0x11A7), (0xD7B0, 0xD7C6), (0x16D63, 0x16D63), (0x16D67, 0x16D6A),
];

pub(crate) static HANGUL_T: &[(u32, u32)] = &[
    (0x11A8, 0x11FF), (0xD7CB, 0xD7FB),
];

pub(crate) static REGIONAL_INDICATOR: &[(u32, u32)] = &[
    (0x1F1E6, 0x1F1FF),
];

pub(crate) static EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0xA9, 0xA9), (0xAE, 0xAE), (0x203C, 0x203C), (0x2049, 0x2049), (0x2122, 0x2122),
    (0x2139, 0x2139), (0x2194, 0x2199), (0x21A9, 0x21AA), (0x231A, 0x231B), (0x2328, 0x2328),
    (0x2388, 0x2388), (0x23CF, 0x23CF), (0x23E9, 0x23F3), (0x23F8, 0x23FA), (0x24C2, 0x24C2),
    (0x25AA, 0x25AB), (0x25B6, 0x25B6), (0x25C0, 0x25C0), (0x25FB, 0x25FE), (0x2600, 0x2605),
    (0x2607, 0x2612), (0x2614, 0x2685), (0x2690, 0x2705), (0x2708, 0x2712), (0x2714, 0x2714),
    (0x2716, 0x2716), (0x271D, 0x271D), (0x2721, 0x2721), (0x2728, 0x2728), (0x2733, 0x2734),
    (0x2744, 0x2744), (0x2747, 0x2747), (0x274C, 0x274C), (0x274E, 0x274E), (0x2753, 0x2755),
    (0x2757, 0x2757), (0x2763, 0x2767), (0x2795, 0x2797), (0x27A1, 0x27A1), (0x27B0, 0x27B0),
    (0x27BF, 0x27BF), (0x2934, 0x2935), (0x2B05, 0x2B07), (0x2B1B, 0x2B1C), (0x2B50, 0x2B50),
    (0x2B55, 0x2B55), (0x3030, 0x3030), (0x303D, 0x303D), (0x3297, 0x3297), (0x3299, 0x3299),
    (0x1F000, 0x1F0FF), (0x1F10D, 0x1F10F), (0x1F12F, 0x1F12F), (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F), (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F), (0x1F21A, 0x1F21A), (0x1F22F, 0x1F22F), (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F), (0x1F249, 0x1F3FA), (0x1F400, 0x1F53D), (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF), (0x1F774, 0x1F77F), (0x1F7D5, 0x1F7FF), (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F), (0x1F85A, 0x1F85F), (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945), (0x1F947, 0x1FAFF), (0x1FC00, 0x1FFFD),
];

pub(crate) static INCB_CONSONANT: &[(u32, u32)] = &[
    (0x915, 0x939), (0x958, 0x95F), (0x978, 0x97F), (0x995, 0x9A8), (0x9AA, 0x9B0),
    (0x9B2, 0x9B2), (0x9B6, 0x9B9), (0x9DC, 0x9DD), (0x9DF, 0x9DF), (0x9F0, 0x9F1),
    (0xA95, 0xAA8), (0xAAA, 0xAB0), (0xAB2, 0xAB3), (0xAB5, 0xAB9), (0xAF9, 0xAF9),
    (0xB15, 0xB28), (0xB2A, 0xB30), (0xB32, 0xB33), (0xB35, 0xB39), (0xB5C, 0xB5D),
    (0xB5F, 0xB5F), (0xB71, 0xB71), (0xC15, 0xC28), (0xC2A, 0xC39), (0xC58, 0xC5A),
    (0xD15, 0xD3A),
];

pub(crate) static INCB_LINKER: &[(u32, u32)] = &[
    (0x94D, 0x94D), (0x9CD, 0x9CD), (0xACD, 0xACD), (0xB4D, 0xB4D), (0xC4D, 0xC4D),
    (0xD4D, 0xD4D),
];

pub(crate) static INCB_EXTEND: &[(u32, u32)] = &[
    (0x300, 0x36F), (0x483, 0x489), (0x591, 0x5BD), (0x5BF, 0x5BF), (0x5C1, 0x5C2),
    (0x5C4, 0x5C5), (0x5C7, 0x5C7), (0x610, 0x61A), (0x64B, 0x65F), (0x670, 0x670),
    (0x6D6, 0x6DC), (0x6DF, 0x6E4), (0x6E7, 0x6E8), (0x6EA, 0x6ED), (0x711, 0x711),
    (0x730, 0x74A), (0x7A6, 0x7B0), (0x7EB, 0x7F3), (0x7FD, 0x7FD), (0x816, 0x819),
    (0x81B, 0x823), (0x825, 0x827), (0x829, 0x82D), (0x859, 0x85B), (0x897, 0x89F),
    (0x8CA, 0x8E1), (0x8E3, 0x902), (0x93A, 0x93A), (0x93C, 0x93C), (0x941, 0x948),
    (0x951, 0x957), (0x962, 0x963), (0x981, 0x981), (0x9BC, 0x9BC), (0x9BE, 0x9BE),
    (0x9C1, 0x9C4), (0x9D7, 0x9D7), (0x9E2, 0x9E3), (0x9FE, 0x9FE), (0xA01, 0xA02),
    (0xA3C, 0xA3C), (0xA41, 0xA42), (0xA47, 0xA48), (0xA4B, 0xA4D), (0xA51, 0xA51),
    (0xA70, 0xA71), (0xA75, 0xA75), (0xA81, 0xA82), (0xABC, 0xABC), (0xAC1, 0xAC5),
    (0xAC7, 0xAC8), (0xAE2, 0xAE3), (0xAFA, 0xAFF), (0xB01, 0xB01), (0xB3C, 0xB3C),
    (0xB3E, 0xB3F), (0xB41, 0xB44), (0xB55, 0xB57), (0xB62, 0xB63), (0xB82, 0xB82),
    (0xBBE, 0xBBE), (0xBC0, 0xBC0), (0xBCD, 0xBCD), (0xBD7, 0xBD7), (0xC00, 0xC00),
    (0xC04, 0xC04), (0xC3C, 0xC3C), (0xC3E, 0xC40), (0xC46, 0xC48), (0xC4A, 0xC4C),
    (0xC55, 0xC56), (0xC62, 0xC63), (0xC81, 0xC81), (0xCBC, 0xCBC), (0xCBF, 0xCC0),
    (0xCC2, 0xCC2), (0xCC6, 0xCC8), (0xCCA, 0xCCD), (0xCD5, 0xCD6), (0xCE2, 0xCE3),
    (0xD00, 0xD01), (0xD3B, 0xD3C), (0xD3E, 0xD3E), (0xD41, 0xD44), (0xD57, 0xD57),
    (0xD62, 0xD63), (0xD81, 0xD81), (0xDCA, 0xDCA), (0xDCF, 0xDCF), (0xDD2, 0xDD4),
    (0xDD6, 0xDD6), (0xDDF, 0xDDF), (0xE31, 0xE31), (0xE34, 0xE3A), (0xE47, 0xE4E),
    (0xEB1, 0xEB1), (0xEB4, 0xEBC), (0xEC8, 0xECE), (0xF18, 0xF19), (0xF35, 0xF35),
    (0xF37, 0xF37), (0xF39, 0xF39), (0xF71, 0xF7E), (0xF80, 0xF84), (0xF86, 0xF87),
    (0xF8D, 0xF97), (0xF99, 0xFBC), (0xFC6, 0xFC6), (0x102D, 0x1030), (0x1032, 0x1037),
    (0x1039, 0x103A), (0x103D, 0x103E), (0x1058, 0x1059), (0x105E, 0x1060), (0x1071, 0x1074),
    (0x1082, 0x1082), (0x1085, 0x1086), (0x108D, 0x108D), (0x109D, 0x109D), (0x135D, 0x135F),
    (0x1712, 0x1715), (0x1732, 0x1734), (0x1752, 0x1753), (0x1772, 0x1773), (0x17B4, 0x17B5),
    (0x17B7, 0x17BD), (0x17C6, 0x17C6), (0x17C9, 0x17D3), (0x17DD, 0x17DD), (0x180B, 0x180D),
    (0x180F, 0x180F), (0x1885, 0x1886), (0x18A9, 0x18A9), (0x1920, 0x1922), (0x1927, 0x1928),
    (0x1932, 0x1932), (0x1939, 0x193B), (0x1A17, 0x1A18), (0x1A1B, 0x1A1B), (0x1A56, 0x1A56),
    (0x1A58, 0x1A5E), (0x1A60, 0x1A60), (0x1A62, 0x1A62), (0x1A65, 0x1A6C), (0x1A73, 0x1A7C),
    (0x1A7F, 0x1A7F), (0x1AB0, 0x1ACE), (0x1B00, 0x1B03), (0x1B34, 0x1B3D), (0x1B42, 0x1B44),
    (0x1B6B, 0x1B73), (0x1B80, 0x1B81), (0x1BA2, 0x1BA5), (0x1BA8, 0x1BAD), (0x1BE6, 0x1BE6),
    (0x1BE8, 0x1BE9), (0x1BED, 0x1BED), (0x1BEF, 0x1BF3), (0x1C2C, 0x1C33), (0x1C36, 0x1C37),
    (0x1CD0, 0x1CD2), (0x1CD4, 0x1CE0), (0x1CE2, 0x1CE8), (0x1CED, 0x1CED), (0x1CF4, 0x1CF4),
    (0x1CF8, 0x1CF9), (0x1DC0, 0x1DFF), (0x200D, 0x200D), (0x20D0, 0x20F0), (0x2CEF, 0x2CF1),
    (0x2D7F, 0x2D7F), (0x2DE0, 0x2DFF), (0x302A, 0x302F), (0x3099, 0x309A), (0xA66F, 0xA672),
    (0xA674, 0xA67D), (0xA69E, 0xA69F), (0xA6F0, 0xA6F1), (0xA802, 0xA802), (0xA806, 0xA806),
    (0xA80B, 0xA80B), (0xA825, 0xA826), (0xA82C, 0xA82C), (0xA8C4, 0xA8C5), (0xA8E0, 0xA8F1),
    (0xA8FF, 0xA8FF), (0xA926, 0xA92D), (0xA947, 0xA951), (0xA953, 0xA953), (0xA980, 0xA982),
    (0xA9B3, 0xA9B3), (0xA9B6, 0xA9B9), (0xA9BC, 0xA9BD), (0xA9C0, 0xA9C0), (0xA9E5, 0xA9E5),
    (0xAA29, 0xAA2E), (0xAA31, 0xAA32), (0xAA35, 0xAA36), (0xAA43, 0xAA43), (0xAA4C, 0xAA4C),
    (0xAA7C, 0xAA7C), (0xAAB0, 0xAAB0), (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8), (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1), (0xAAEC, 0xAAED), (0xAAF6, 0xAAF6), (0xABE5, 0xABE5), (0xABE8, 0xABE8),
    (0xABED, 0xABED), (0xFB1E, 0xFB1E), (0xFE00, 0xFE0F), (0xFE20, 0xFE2F), (0xFF9E, 0xFF9F),
    (0x101FD, 0x101FD), (0x102E0, 0x102E0), (0x10376, 0x1037A), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x10AE5, 0x10AE6), (0x10D24, 0x10D27), (0x10D69, 0x10D6D), (0x10EAB, 0x10EAC),
    (0x10EFC, 0x10EFF), (0x10F46, 0x10F50), (0x10F82, 0x10F85), (0x11001, 0x11001),
    (0x11038, 0x11046), (0x11070, 0x11070), (0x11073, 0x11074), (0x1107F, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2), (0x11100, 0x11102),
    (0x11127, 0x1112B), (0x1112D, 0x11134), (0x11173, 0x11173), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111C0, 0x111C0), (0x111C9, 0x111CC), (0x111CF, 0x111CF),
    (0x1122F, 0x11231), (0x11234, 0x11237), (0x1123E, 0x1123E), (0x11241, 0x11241),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11300, 0x11301), (0x1133B, 0x1133C),
    (0x1133E, 0x1133E), (0x11340, 0x11340), (0x1134D, 0x1134D), (0x11357, 0x11357),
    (0x11366, 0x1136C), (0x11370, 0x11374), (0x113B8, 0x113B8), (0x113BB, 0x113C0),
    (0x113C2, 0x113C2), (0x113C5, 0x113C5), (0x113C7, 0x113C9), (0x113CE, 0x113D0),
    (0x113D2, 0x113D2), (0x113E1, 0x113E2), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x1145E, 0x1145E), (0x114B0, 0x114B0), (0x114B3, 0x114B8),
    (0x114BA, 0x114BA), (0x114BD, 0x114BD), (0x114BF, 0x114C0), (0x114C2, 0x114C3),
    (0x115AF, 0x115AF), (0x115B2, 0x115B5), (0x115BC, 0x115BD), (0x115BF, 0x115C0),
    (0x115DC, 0x115DD), (0x11633, 0x1163A), (0x1163D, 0x1163D), (0x1163F, 0x11640),
    (0x116AB, 0x116AB), (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171D),
    (0x1171F, 0x1171F), (0x11722, 0x11725), (0x11727, 0x1172B), (0x1182F, 0x11837),
    (0x11839, 0x1183A), (0x11930, 0x11930), (0x1193B, 0x1193E), (0x11943, 0x11943),
    (0x119D4, 0x119D7), (0x119DA, 0x119DB), (0x119E0, 0x119E0), (0x11A01, 0x11A0A),
    (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47), (0x11A51, 0x11A56),
    (0x11A59, 0x11A5B), (0x11A8A, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x11F00, 0x11F01),
    (0x11F36, 0x11F3A), (0x11F40, 0x11F42), (0x11F5A, 0x11F5A), (0x13440, 0x13440),
    (0x13447, 0x13455), (0x1611E, 0x16129), (0x1612D, 0x1612F), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F4F, 0x16F4F), (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4),
    (0x16FF0, 0x16FF1), (0x1BC9D, 0x1BC9E), (0x1CF00, 0x1CF2D), (0x1CF30, 0x1CF46),
    (0x1D165, 0x1D169), (0x1D16D, 0x1D172), (0x1D17B, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136), (0x1E2AE, 0x1E2AE),
    (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF), (0x1E5EE, 0x1E5EF), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0x1F3FB, 0x1F3FF), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

#[rustfmt::skip]
pub(crate) static FOLD_TABLE: &[(u32, FoldKind, &str)] = &[
    (0xA0, FoldKind::Simple, " "), (0xA8, FoldKind::LetterMarks, " "),
    (0xAA, FoldKind::Simple, "a"), (0xAF, FoldKind::LetterMarks, " "),
    (0xB2, FoldKind::Simple, "2"), (0xB3, FoldKind::Simple, "3"),
    (0xB4, FoldKind::LetterMarks, " "), (0xB5, FoldKind::Simple, "\u{3BC}"),
    (0xB8, FoldKind::LetterMarks, " "), (0xB9, FoldKind::Simple, "1"),
    (0xBA, FoldKind::Simple, "o"), (0xBC, FoldKind::Complex, "1"), (0xBD, FoldKind::Complex, "1"),
    (0xBE, FoldKind::Complex, "3"), (0xC0, FoldKind::LetterMarks, "A"),
    (0xC1, FoldKind::LetterMarks, "A"), (0xC2, FoldKind::LetterMarks, "A"),
    (0xC3, FoldKind::LetterMarks, "A"), (0xC4, FoldKind::LetterMarks, "A"),
    (0xC5, FoldKind::LetterMarks, "A"), (0xC7, FoldKind::LetterMarks, "C"),
    (0xC8, FoldKind::LetterMarks, "E"), (0xC9, FoldKind::LetterMarks, "E"),
    (0xCA, FoldKind::LetterMarks, "E"), (0xCB, FoldKind::LetterMarks, "E"),
    (0xCC, FoldKind::LetterMarks, "I"), (0xCD, FoldKind::LetterMarks, "I"),
    (0xCE, FoldKind::LetterMarks, "I"), (0xCF, FoldKind::LetterMarks, "I"),
    (0xD1, FoldKind::LetterMarks, "N"), (0xD2, FoldKind::LetterMarks, "O"),
    (0xD3, FoldKind::LetterMarks, "O"), (0xD4, FoldKind::LetterMarks, "O"),
    (0xD5, FoldKind::LetterMarks, "O"), (0xD6, FoldKind::LetterMarks, "O"),
    (0xD9, FoldKind::LetterMarks, "U"), (0xDA, FoldKind::LetterMarks, "U"),
    (0xDB, FoldKind::LetterMarks, "U"), (0xDC, FoldKind::LetterMarks, "U"),
    (0xDD, FoldKind::LetterMarks, "Y"), (0xE0, FoldKind::LetterMarks, "a"),
    (0xE1, FoldKind::LetterMarks, "a"), (0xE2, FoldKind::LetterMarks, "a"),
    (0xE3, FoldKind::LetterMarks, "a"), (0xE4, FoldKind::LetterMarks, "a"),
    (0xE5, FoldKind::LetterMarks, "a"), (0xE7, FoldKind::LetterMarks, "c"),
    (0xE8, FoldKind::LetterMarks, "e"), (0xE9, FoldKind::LetterMarks, "e"),
    (0xEA, FoldKind::LetterMarks, "e"), (0xEB, FoldKind::LetterMarks, "e"),
    (0xEC, FoldKind::LetterMarks, "i"), (0xED, FoldKind::LetterMarks, "i"),
    (0xEE, FoldKind::LetterMarks, "i"), (0xEF, FoldKind::LetterMarks, "i"),
    (0xF1, FoldKind::LetterMarks, "n"), (0xF2, FoldKind::LetterMarks, "o"),
    (0xF3, FoldKind::LetterMarks, "o"), (0xF4, FoldKind::LetterMarks, "o"),
    (0xF5, FoldKind::LetterMarks, "o"), (0xF6, FoldKind::LetterMarks, "o"),
    (0xF9, FoldKind::LetterMarks, "u"), (0xFA, FoldKind::LetterMarks, "u"),
    (0xFB, FoldKind::LetterMarks, "u"), (0xFC, FoldKind::LetterMarks, "u"),
    (0xFD, FoldKind::LetterMarks, "y"), (0xFF, FoldKind::LetterMarks, "y"),
    (0x100, FoldKind::LetterMarks, "A"), (0x101, FoldKind::LetterMarks, "a"),
    (0x102, FoldKind::LetterMarks, "A"), (0x103, FoldKind::LetterMarks, "a"),
    (0x104, FoldKind::LetterMarks, "A"), (0x105, FoldKind::LetterMarks, "a"),
    (0x106, FoldKind::LetterMarks, "C"), (0x107, FoldKind::LetterMarks, "c"),
    (0x108, FoldKind::LetterMarks, "C"), (0x109, FoldKind::LetterMarks, "c"),
    (0x10A, FoldKind::LetterMarks, "C"), (0x10B, FoldKind::LetterMarks, "c"),
    (0x10C, FoldKind::LetterMarks, "C"), (0x10D, FoldKind::LetterMarks, "c"),
    (0x10E, FoldKind::LetterMarks, "D"), (0x10F, FoldKind::LetterMarks, "d"),
    (0x112, FoldKind::LetterMarks, "E"), (0x113, FoldKind::LetterMarks, "e"),
    (0x114, FoldKind::LetterMarks, "E"), (0x115, FoldKind::LetterMarks, "e"),
    (0x116, FoldKind::LetterMarks, "E"), (0x117, FoldKind::LetterMarks, "e"),
    (0x118, FoldKind::LetterMarks, "E"), (0x119, FoldKind::LetterMarks, "e"),
    (0x11A, FoldKind::LetterMarks, "E"), (0x11B, FoldKind::LetterMarks, "e"),
    (0x11C, FoldKind::LetterMarks, "G"), (0x11D, FoldKind::LetterMarks, "g"),
    (0x11E, FoldKind::LetterMarks, "G"), (0x11F, FoldKind::LetterMarks, "g"),
    (0x120, FoldKind::LetterMarks, "G"), (0x121, FoldKind::LetterMarks, "g"),
    (0x122, FoldKind::LetterMarks, "G"), (0x123, FoldKind::LetterMarks, "g"),
    (0x124, FoldKind::LetterMarks, "H"), (0x125, FoldKind::LetterMarks, "h"),
    (0x128, FoldKind::LetterMarks, "I"), (0x129, FoldKind::LetterMarks, "i"),
    (0x12A, FoldKind::LetterMarks, "I"), (0x12B, FoldKind::LetterMarks, "i"),
    (0x12C, FoldKind::LetterMarks, "I"), (0x12D, FoldKind::LetterMarks, "i"),
    (0x12E, FoldKind::LetterMarks, "I"), (0x12F, FoldKind::LetterMarks, "i"),
    (0x130, FoldKind::LetterMarks, "I"), (0x132, FoldKind::Complex, "I"),
    (0x133, FoldKind::Complex, "i"), (0x134, FoldKind::LetterMarks, "J"),
    (0x135, FoldKind::LetterMarks, "j"), (0x136, FoldKind::LetterMarks, "K"),
    (0x137, FoldKind::LetterMarks, "k"), (0x139, FoldKind::LetterMarks, "L"),
    (0x13A, FoldKind::LetterMarks, "l"), (0x13B, FoldKind::LetterMarks, "L"),
    (0x13C, FoldKind::LetterMarks, "l"), (0x13D, FoldKind::LetterMarks, "L"),
    (0x13E, FoldKind::LetterMarks, "l"), (0x13F, FoldKind::MiddleDot, "L"),
    (0x140, FoldKind::MiddleDot, "l"), (0x143, FoldKind::LetterMarks, "N"),
    (0x144, FoldKind::LetterMarks, "n"), (0x145, FoldKind::LetterMarks, "N"),
    (0x146, FoldKind::LetterMarks, "n"), (0x147, FoldKind::LetterMarks, "N"),
    (0x148, FoldKind::LetterMarks, "n"), (0x149, FoldKind::ModifierLetter, "n"),
    (0x14C, FoldKind::LetterMarks, "O"), (0x14D, FoldKind::LetterMarks, "o"),
    (0x14E, FoldKind::LetterMarks, "O"), (0x14F, FoldKind::LetterMarks, "o"),
    (0x150, FoldKind::LetterMarks, "O"), (0x151, FoldKind::LetterMarks, "o"),
    (0x154, FoldKind::LetterMarks, "R"), (0x155, FoldKind::LetterMarks, "r"),
    (0x156, FoldKind::LetterMarks, "R"), (0x157, FoldKind::LetterMarks, "r"),
    (0x158, FoldKind::LetterMarks, "R"), (0x159, FoldKind::LetterMarks, "r"),
    (0x15A, FoldKind::LetterMarks, "S"), (0x15B, FoldKind::LetterMarks, "s"),
    (0x15C, FoldKind::LetterMarks, "S"), (0x15D, FoldKind::LetterMarks, "s"),
    (0x15E, FoldKind::LetterMarks, "S"), (0x15F, FoldKind::LetterMarks, "s"),
    (0x160, FoldKind::LetterMarks, "S"), (0x161, FoldKind::LetterMarks, "s"),
    (0x162, FoldKind::LetterMarks, "T"), (0x163, FoldKind::LetterMarks, "t"),
    (0x164, FoldKind::LetterMarks, "T"), (0x165, FoldKind::LetterMarks, "t"),
    (0x168, FoldKind::LetterMarks, "U"), (0x169, FoldKind::LetterMarks, "u"),
    (0x16A, FoldKind::LetterMarks, "U"), (0x16B, FoldKind::LetterMarks, "u"),
    (0x16C, FoldKind::LetterMarks, "U"), (0x16D, FoldKind::LetterMarks, "u"),
    (0x16E, FoldKind::LetterMarks, "U"), (0x16F, FoldKind::LetterMarks, "u"),
    (0x170, FoldKind::LetterMarks, "U"), (0x171, FoldKind::LetterMarks, "u"),
    (0x172, FoldKind::LetterMarks, "U"), (0x173, FoldKind::LetterMarks, "u"),
    (0x174, FoldKind::LetterMarks, "W"), (0x175, FoldKind::LetterMarks, "w"),
    (0x176, FoldKind::LetterMarks, "Y"), (0x177, FoldKind::LetterMarks, "y"),
    (0x178, FoldKind::LetterMarks, "Y"), (0x179, FoldKind::LetterMarks, "Z"),
    (0x17A, FoldKind::LetterMarks, "z"), (0x17B, FoldKind::LetterMarks, "Z"),
    (0x17C, FoldKind::LetterMarks, "z"), (0x17D, FoldKind::LetterMarks, "Z"),
    (0x17E, FoldKind::LetterMarks, "z"), (0x17F, FoldKind::Simple, "s"),
    (0x1A0, FoldKind::LetterMarks, "O"), (0x1A1, FoldKind::LetterMarks, "o"),
    (0x1AF, FoldKind::LetterMarks, "U"), (0x1B0, FoldKind::LetterMarks, "u"),
    (0x1C4, FoldKind::Complex, "D"), (0x1C5, FoldKind::Complex, "D"),
    (0x1C6, FoldKind::Complex, "d"), (0x1C7, FoldKind::Complex, "L"),
    (0x1C8, FoldKind::Complex, "L"), (0x1C9, FoldKind::Complex, "l"),
    (0x1CA, FoldKind::Complex, "N"), (0x1CB, FoldKind::Complex, "N"),
    (0x1CC, FoldKind::Complex, "n"), (0x1CD, FoldKind::LetterMarks, "A"),
    (0x1CE, FoldKind::LetterMarks, "a"), (0x1CF, FoldKind::LetterMarks, "I"),
    (0x1D0, FoldKind::LetterMarks, "i"), (0x1D1, FoldKind::LetterMarks, "O"),
    (0x1D2, FoldKind::LetterMarks, "o"), (0x1D3, FoldKind::LetterMarks, "U"),
    (0x1D4, FoldKind::LetterMarks, "u"), (0x1D5, FoldKind::LetterMarks, "U"),
    (0x1D6, FoldKind::LetterMarks, "u"), (0x1D7, FoldKind::LetterMarks, "U"),
    (0x1D8, FoldKind::LetterMarks, "u"), (0x1D9, FoldKind::LetterMarks, "U"),
    (0x1DA, FoldKind::LetterMarks, "u"), (0x1DB, FoldKind::LetterMarks, "U"),
    (0x1DC, FoldKind::LetterMarks, "u"), (0x1DE, FoldKind::LetterMarks, "A"),
    (0x1DF, FoldKind::LetterMarks, "a"), (0x1E0, FoldKind::LetterMarks, "A"),
    (0x1E1, FoldKind::LetterMarks, "a"), (0x1E2, FoldKind::LetterMarks, "\u{C6}"),
    (0x1E3, FoldKind::LetterMarks, "\u{E6}"), (0x1E6, FoldKind::LetterMarks, "G"),
    (0x1E7, FoldKind::LetterMarks, "g"), (0x1E8, FoldKind::LetterMarks, "K"),
    (0x1E9, FoldKind::LetterMarks, "k"), (0x1EA, FoldKind::LetterMarks, "O"),
    (0x1EB, FoldKind::LetterMarks, "o"), (0x1EC, FoldKind::LetterMarks, "O"),
    (0x1ED, FoldKind::LetterMarks, "o"), (0x1EE, FoldKind::LetterMarks, "\u{1B7}"),
    (0x1EF, FoldKind::LetterMarks, "\u{292}"), (0x1F0, FoldKind::LetterMarks, "j"),
    (0x1F1, FoldKind::Complex, "D"), (0x1F2, FoldKind::Complex, "D"),
    (0x1F3, FoldKind::Complex, "d"), (0x1F4, FoldKind::LetterMarks, "G"),
    (0x1F5, FoldKind::LetterMarks, "g"), (0x1F8, FoldKind::LetterMarks, "N"),
    (0x1F9, FoldKind::LetterMarks, "n"), (0x1FA, FoldKind::LetterMarks, "A"),
    (0x1FB, FoldKind::LetterMarks, "a"), (0x1FC, FoldKind::LetterMarks, "\u{C6}"),
    (0x1FD, FoldKind::LetterMarks, "\u{E6}"), (0x1FE, FoldKind::LetterMarks, "\u{D8}"),
    (0x1FF, FoldKind::LetterMarks, "\u{F8}"), (0x200, FoldKind::LetterMarks, "A"),
    (0x201, FoldKind::LetterMarks, "a"), (0x202, FoldKind::LetterMarks, "A"),
    (0x203, FoldKind::LetterMarks, "a"), (0x204, FoldKind::LetterMarks, "E"),
    (0x205, FoldKind::LetterMarks, "e"), (0x206, FoldKind::LetterMarks, "E"),
    (0x207, FoldKind::LetterMarks, "e"), (0x208, FoldKind::LetterMarks, "I"),
    (0x209, FoldKind::LetterMarks, "i"), (0x20A, FoldKind::LetterMarks, "I"),
    (0x20B, FoldKind::LetterMarks, "i"), (0x20C, FoldKind::LetterMarks, "O"),
    (0x20D, FoldKind::LetterMarks, "o"), (0x20E, FoldKind::LetterMarks, "O"),
    (0x20F, FoldKind::LetterMarks, "o"), (0x210, FoldKind::LetterMarks, "R"),
    (0x211, FoldKind::LetterMarks, "r"), (0x212, FoldKind::LetterMarks, "R"),
    (0x213, FoldKind::LetterMarks, "r"), (0x214, FoldKind::LetterMarks, "U"),
    (0x215, FoldKind::LetterMarks, "u"), (0x216, FoldKind::LetterMarks, "U"),
    (0x217, FoldKind::LetterMarks, "u"), (0x218, FoldKind::LetterMarks, "S"),
    (0x219, FoldKind::LetterMarks, "s"), (0x21A, FoldKind::LetterMarks, "T"),
    (0x21B, FoldKind::LetterMarks, "t"), (0x21E, FoldKind::LetterMarks, "H"),
    (0x21F, FoldKind::LetterMarks, "h"), (0x226, FoldKind::LetterMarks, "A"),
    (0x227, FoldKind::LetterMarks, "a"), (0x228, FoldKind::LetterMarks, "E"),
    (0x229, FoldKind::LetterMarks, "e"), (0x22A, FoldKind::LetterMarks, "O"),
    (0x22B, FoldKind::LetterMarks, "o"), (0x22C, FoldKind::LetterMarks, "O"),
    (0x22D, FoldKind::LetterMarks, "o"), (0x22E, FoldKind::LetterMarks, "O"),
    (0x22F, FoldKind::LetterMarks, "o"), (0x230, FoldKind::LetterMarks, "O"),
    (0x231, FoldKind::LetterMarks, "o"), (0x232, FoldKind::LetterMarks, "Y"),
    (0x233, FoldKind::LetterMarks, "y"), (0x2B0, FoldKind::Simple, "h"),
    (0x2B1, FoldKind::Simple, "\u{266}"), (0x2B2, FoldKind::Simple, "j"),
    (0x2B3, FoldKind::Simple, "r"), (0x2B4, FoldKind::Simple, "\u{279}"),
    (0x2B5, FoldKind::Simple, "\u{27B}"), (0x2B6, FoldKind::Simple, "\u{281}"),
    (0x2B7, FoldKind::Simple, "w"), (0x2B8, FoldKind::Simple, "y"),
    (0x2D8, FoldKind::LetterMarks, " "), (0x2D9, FoldKind::LetterMarks, " "),
    (0x2DA, FoldKind::LetterMarks, " "), (0x2DB, FoldKind::LetterMarks, " "),
    (0x2DC, FoldKind::LetterMarks, " "), (0x2DD, FoldKind::LetterMarks, " "),
    (0x2E0, FoldKind::Simple, "\u{263}"), (0x2E1, FoldKind::Simple, "l"),
    (0x2E2, FoldKind::Simple, "s"), (0x2E3, FoldKind::Simple, "x"),
    (0x2E4, FoldKind::Simple, "\u{295}"), (0x340, FoldKind::Simple, "\u{300}"),
    (0x341, FoldKind::Simple, "\u{301}"), (0x343, FoldKind::Simple, "\u{313}"),
    (0x374, FoldKind::Simple, "\u{2B9}"), (0x37A, FoldKind::LetterMarks, " "),
    (0x37E, FoldKind::Simple, ";"), (0x384, FoldKind::LetterMarks, " "),
    (0x385, FoldKind::LetterMarks, " "), (0x386, FoldKind::LetterMarks, "\u{391}"),
    (0x387, FoldKind::Simple, "\u{B7}"), (0x388, FoldKind::LetterMarks, "\u{395}"),
    (0x389, FoldKind::LetterMarks, "\u{397}"), (0x38A, FoldKind::LetterMarks, "\u{399}"),
    (0x38C, FoldKind::LetterMarks, "\u{39F}"), (0x38E, FoldKind::LetterMarks, "\u{3A5}"),
    (0x38F, FoldKind::LetterMarks, "\u{3A9}"), (0x390, FoldKind::LetterMarks, "\u{3B9}"),
    (0x3AA, FoldKind::LetterMarks, "\u{399}"), (0x3AB, FoldKind::LetterMarks, "\u{3A5}"),
    (0x3AC, FoldKind::LetterMarks, "\u{3B1}"), (0x3AD, FoldKind::LetterMarks, "\u{3B5}"),
    (0x3AE, FoldKind::LetterMarks, "\u{3B7}"), (0x3AF, FoldKind::LetterMarks, "\u{3B9}"),
    (0x3B0, FoldKind::LetterMarks, "\u{3C5}"), (0x3CA, FoldKind::LetterMarks, "\u{3B9}"),
    (0x3CB, FoldKind::LetterMarks, "\u{3C5}"), (0x3CC, FoldKind::LetterMarks, "\u{3BF}"),
    (0x3CD, FoldKind::LetterMarks, "\u{3C5}"), (0x3CE, FoldKind::LetterMarks, "\u{3C9}"),
    (0x3D0, FoldKind::Simple, "\u{3B2}"), (0x3D1, FoldKind::Simple, "\u{3B8}"),
    (0x3D2, FoldKind::Simple, "\u{3A5}"), (0x3D3, FoldKind::LetterMarks, "\u{3A5}"),
    (0x3D4, FoldKind::LetterMarks, "\u{3A5}"), (0x3D5, FoldKind::Simple, "\u{3C6}"),
    (0x3D6, FoldKind::Simple, "\u{3C0}"), (0x3F0, FoldKind::Simple, "\u{3BA}"),
    (0x3F1, FoldKind::Simple, "\u{3C1}"), (0x3F2, FoldKind::Simple, "\u{3C2}"),
    (0x3F4, FoldKind::Simple, "\u{398}"), (0x3F5, FoldKind::Simple, "\u{3B5}"),
    (0x3F9, FoldKind::Simple, "\u{3A3}"), (0x400, FoldKind::LetterMarks, "\u{415}"),
    (0x401, FoldKind::LetterMarks, "\u{415}"), (0x403, FoldKind::LetterMarks, "\u{413}"),
    (0x407, FoldKind::LetterMarks, "\u{406}"), (0x40C, FoldKind::LetterMarks, "\u{41A}"),
    (0x40D, FoldKind::LetterMarks, "\u{418}"), (0x40E, FoldKind::LetterMarks, "\u{423}"),
    (0x419, FoldKind::LetterMarks, "\u{418}"), (0x439, FoldKind::LetterMarks, "\u{438}"),
    (0x450, FoldKind::LetterMarks, "\u{435}"), (0x451, FoldKind::LetterMarks, "\u{435}"),
    (0x453, FoldKind::LetterMarks, "\u{433}"), (0x457, FoldKind::LetterMarks, "\u{456}"),
    (0x45C, FoldKind::LetterMarks, "\u{43A}"), (0x45D, FoldKind::LetterMarks, "\u{438}"),
    (0x45E, FoldKind::LetterMarks, "\u{443}"), (0x476, FoldKind::LetterMarks, "\u{474}"),
    (0x477, FoldKind::LetterMarks, "\u{475}"), (0x4C1, FoldKind::LetterMarks, "\u{416}"),
    (0x4C2, FoldKind::LetterMarks, "\u{436}"), (0x4D0, FoldKind::LetterMarks, "\u{410}"),
    (0x4D1, FoldKind::LetterMarks, "\u{430}"), (0x4D2, FoldKind::LetterMarks, "\u{410}"),
    (0x4D3, FoldKind::LetterMarks, "\u{430}"), (0x4D6, FoldKind::LetterMarks, "\u{415}"),
    (0x4D7, FoldKind::LetterMarks, "\u{435}"), (0x4DA, FoldKind::LetterMarks, "\u{4D8}"),
    (0x4DB, FoldKind::LetterMarks, "\u{4D9}"), (0x4DC, FoldKind::LetterMarks, "\u{416}"),
    (0x4DD, FoldKind::LetterMarks, "\u{436}"), (0x4DE, FoldKind::LetterMarks, "\u{417}"),
    (0x4DF, FoldKind::LetterMarks, "\u{437}"), (0x4E2, FoldKind::LetterMarks, "\u{418}"),
    (0x4E3, FoldKind::LetterMarks, "\u{438}"), (0x4E4, FoldKind::LetterMarks, "\u{418}"),
    (0x4E5, FoldKind::LetterMarks, "\u{438}"), (0x4E6, FoldKind::LetterMarks, "\u{41E}"),
    (0x4E7, FoldKind::LetterMarks, "\u{43E}"), (0x4EA, FoldKind::LetterMarks, "\u{4E8}"),
    (0x4EB, FoldKind::LetterMarks, "\u{4E9}"), (0x4EC, FoldKind::LetterMarks, "\u{42D}"),
    (0x4ED, FoldKind::LetterMarks, "\u{44D}"), (0x4EE, FoldKind::LetterMarks, "\u{423}"),
    (0x4EF, FoldKind::LetterMarks, "\u{443}"), (0x4F0, FoldKind::LetterMarks, "\u{423}"),
    (0x4F1, FoldKind::LetterMarks, "\u{443}"), (0x4F2, FoldKind::LetterMarks, "\u{423}"),
    (0x4F3, FoldKind::LetterMarks, "\u{443}"), (0x4F4, FoldKind::LetterMarks, "\u{427}"),
    (0x4F5, FoldKind::LetterMarks, "\u{447}"), (0x4F8, FoldKind::LetterMarks, "\u{42B}"),
    (0x4F9, FoldKind::LetterMarks, "\u{44B}"), (0x587, FoldKind::Complex, "\u{565}"),
    (0x622, FoldKind::LetterMarks, "\u{627}"), (0x623, FoldKind::LetterMarks, "\u{627}"),
    (0x624, FoldKind::LetterMarks, "\u{648}"), (0x625, FoldKind::LetterMarks, "\u{627}"),
    (0x626, FoldKind::LetterMarks, "\u{64A}"), (0x675, FoldKind::Complex, "\u{627}"),
    (0x676, FoldKind::Complex, "\u{648}"), (0x677, FoldKind::Complex, "\u{6C7}"),
    (0x678, FoldKind::Complex, "\u{64A}"), (0x6C0, FoldKind::LetterMarks, "\u{6D5}"),
    (0x6C2, FoldKind::LetterMarks, "\u{6C1}"), (0x6D3, FoldKind::LetterMarks, "\u{6D2}"),
    (0x929, FoldKind::LetterMarks, "\u{928}"), (0x931, FoldKind::LetterMarks, "\u{930}"),
    (0x934, FoldKind::LetterMarks, "\u{933}"), (0x958, FoldKind::LetterMarks, "\u{915}"),
    (0x959, FoldKind::LetterMarks, "\u{916}"), (0x95A, FoldKind::LetterMarks, "\u{917}"),
    (0x95B, FoldKind::LetterMarks, "\u{91C}"), (0x95C, FoldKind::LetterMarks, "\u{921}"),
    (0x95D, FoldKind::LetterMarks, "\u{922}"), (0x95E, FoldKind::LetterMarks, "\u{92B}"),
    (0x95F, FoldKind::LetterMarks, "\u{92F}"), (0x9CB, FoldKind::Complex, "\u{9C7}"),
    (0x9CC, FoldKind::Complex, "\u{9C7}"), (0x9DC, FoldKind::LetterMarks, "\u{9A1}"),
    (0x9DD, FoldKind::LetterMarks, "\u{9A2}"), (0x9DF, FoldKind::LetterMarks, "\u{9AF}"),
    (0xA33, FoldKind::LetterMarks, "\u{A32}"), (0xA36, FoldKind::LetterMarks, "\u{A38}"),
    (0xA59, FoldKind::LetterMarks, "\u{A16}"), (0xA5A, FoldKind::LetterMarks, "\u{A17}"),
    (0xA5B, FoldKind::LetterMarks, "\u{A1C}"), (0xA5E, FoldKind::LetterMarks, "\u{A2B}"),
    (0xB48, FoldKind::LetterMarks, "\u{B47}"), (0xB4B, FoldKind::Complex, "\u{B47}"),
    (0xB4C, FoldKind::Complex, "\u{B47}"), (0xB5C, FoldKind::LetterMarks, "\u{B21}"),
    (0xB5D, FoldKind::LetterMarks, "\u{B22}"), (0xB94, FoldKind::Complex, "\u{B92}"),
    (0xBCA, FoldKind::Complex, "\u{BC6}"), (0xBCB, FoldKind::Complex, "\u{BC7}"),
    (0xBCC, FoldKind::Complex, "\u{BC6}"), (0xCC0, FoldKind::Complex, "\u{CBF}"),
    (0xCC7, FoldKind::Complex, "\u{CC6}"), (0xCC8, FoldKind::Complex, "\u{CC6}"),
    (0xCCA, FoldKind::Complex, "\u{CC6}"), (0xCCB, FoldKind::Complex, "\u{CC6}"),
    (0xD4A, FoldKind::Complex, "\u{D46}"), (0xD4B, FoldKind::Complex, "\u{D47}"),
    (0xD4C, FoldKind::Complex, "\u{D46}"), (0xDDA, FoldKind::LetterMarks, "\u{DD9}"),
    (0xDDC, FoldKind::Complex, "\u{DD9}"), (0xDDD, FoldKind::Complex, "\u{DD9}"),
    (0xDDE, FoldKind::Complex, "\u{DD9}"), (0xE33, FoldKind::Complex, "\u{E4D}"),
    (0xEB3, FoldKind::Complex, "\u{ECD}"), (0xEDC, FoldKind::Complex, "\u{EAB}"),
    (0xEDD, FoldKind::Complex, "\u{EAB}"), (0xF0C, FoldKind::Simple, "\u{F0B}"),
    (0xF43, FoldKind::LetterMarks, "\u{F42}"), (0xF4D, FoldKind::LetterMarks, "\u{F4C}"),
    (0xF52, FoldKind::LetterMarks, "\u{F51}"), (0xF57, FoldKind::LetterMarks, "\u{F56}"),
    (0xF5C, FoldKind::LetterMarks, "\u{F5B}"), (0xF69, FoldKind::LetterMarks, "\u{F40}"),
    (0x1026, FoldKind::LetterMarks, "\u{1025}"), (0x10FC, FoldKind::Simple, "\u{10DC}"),
    (0x1B06, FoldKind::Complex, "\u{1B05}"), (0x1B08, FoldKind::Complex, "\u{1B07}"),
    (0x1B0A, FoldKind::Complex, "\u{1B09}"), (0x1B0C, FoldKind::Complex, "\u{1B0B}"),
    (0x1B0E, FoldKind::Complex, "\u{1B0D}"), (0x1B12, FoldKind::Complex, "\u{1B11}"),
    (0x1B3B, FoldKind::Complex, "\u{1B3A}"), (0x1B3D, FoldKind::Complex, "\u{1B3C}"),
    (0x1B40, FoldKind::Complex, "\u{1B3E}"), (0x1B41, FoldKind::Complex, "\u{1B3F}"),
    (0x1B43, FoldKind::Complex, "\u{1B42}"), (0x1D2C, FoldKind::Simple, "A"),
    (0x1D2D, FoldKind::Simple, "\u{C6}"), (0x1D2E, FoldKind::Simple, "B"),
    (0x1D30, FoldKind::Simple, "D"), (0x1D31, FoldKind::Simple, "E"),
    (0x1D32, FoldKind::Simple, "\u{18E}"), (0x1D33, FoldKind::Simple, "G"),
    (0x1D34, FoldKind::Simple, "H"), (0x1D35, FoldKind::Simple, "I"),
    (0x1D36, FoldKind::Simple, "J"), (0x1D37, FoldKind::Simple, "K"),
    (0x1D38, FoldKind::Simple, "L"), (0x1D39, FoldKind::Simple, "M"),
    (0x1D3A, FoldKind::Simple, "N"), (0x1D3C, FoldKind::Simple, "O"),
    (0x1D3D, FoldKind::Simple, "\u{222}"), (0x1D3E, FoldKind::Simple, "P"),
    (0x1D3F, FoldKind::Simple, "R"), (0x1D40, FoldKind::Simple, "T"),
    (0x1D41, FoldKind::Simple, "U"), (0x1D42, FoldKind::Simple, "W"),
    (0x1D43, FoldKind::Simple, "a"), (0x1D44, FoldKind::Simple, "\u{250}"),
    (0x1D45, FoldKind::Simple, "\u{251}"), (0x1D46, FoldKind::Simple, "\u{1D02}"),
    (0x1D47, FoldKind::Simple, "b"), (0x1D48, FoldKind::Simple, "d"),
    (0x1D49, FoldKind::Simple, "e"), (0x1D4A, FoldKind::Simple, "\u{259}"),
    (0x1D4B, FoldKind::Simple, "\u{25B}"), (0x1D4C, FoldKind::Simple, "\u{25C}"),
    (0x1D4D, FoldKind::Simple, "g"), (0x1D4F, FoldKind::Simple, "k"),
    (0x1D50, FoldKind::Simple, "m"), (0x1D51, FoldKind::Simple, "\u{14B}"),
    (0x1D52, FoldKind::Simple, "o"), (0x1D53, FoldKind::Simple, "\u{254}"),
    (0x1D54, FoldKind::Simple, "\u{1D16}"), (0x1D55, FoldKind::Simple, "\u{1D17}"),
    (0x1D56, FoldKind::Simple, "p"), (0x1D57, FoldKind::Simple, "t"),
    (0x1D58, FoldKind::Simple, "u"), (0x1D59, FoldKind::Simple, "\u{1D1D}"),
    (0x1D5A, FoldKind::Simple, "\u{26F}"), (0x1D5B, FoldKind::Simple, "v"),
    (0x1D5C, FoldKind::Simple, "\u{1D25}"), (0x1D5D, FoldKind::Simple, "\u{3B2}"),
    (0x1D5E, FoldKind::Simple, "\u{3B3}"), (0x1D5F, FoldKind::Simple, "\u{3B4}"),
    (0x1D60, FoldKind::Simple, "\u{3C6}"), (0x1D61, FoldKind::Simple, "\u{3C7}"),
    (0x1D62, FoldKind::Simple, "i"), (0x1D63, FoldKind::Simple, "r"),
    (0x1D64, FoldKind::Simple, "u"), (0x1D65, FoldKind::Simple, "v"),
    (0x1D66, FoldKind::Simple, "\u{3B2}"), (0x1D67, FoldKind::Simple, "\u{3B3}"),
    (0x1D68, FoldKind::Simple, "\u{3C1}"), (0x1D69, FoldKind::Simple, "\u{3C6}"),
    (0x1D6A, FoldKind::Simple, "\u{3C7}"), (0x1D78, FoldKind::Simple, "\u{43D}"),
    (0x1D9B, FoldKind::Simple, "\u{252}"), (0x1D9C, FoldKind::Simple, "c"),
    (0x1D9D, FoldKind::Simple, "\u{255}"), (0x1D9E, FoldKind::Simple, "\u{F0}"),
    (0x1D9F, FoldKind::Simple, "\u{25C}"), (0x1DA0, FoldKind::Simple, "f"),
    (0x1DA1, FoldKind::Simple, "\u{25F}"), (0x1DA2, FoldKind::Simple, "\u{261}"),
    (0x1DA3, FoldKind::Simple, "\u{265}"), (0x1DA4, FoldKind::Simple, "\u{268}"),
    (0x1DA5, FoldKind::Simple, "\u{269}"), (0x1DA6, FoldKind::Simple, "\u{26A}"),
    (0x1DA7, FoldKind::Simple, "\u{1D7B}"), (0x1DA8, FoldKind::Simple, "\u{29D}"),
    (0x1DA9, FoldKind::Simple, "\u{26D}"), (0x1DAA, FoldKind::Simple, "\u{1D85}"),
    (0x1DAB, FoldKind::Simple, "\u{29F}"), (0x1DAC, FoldKind::Simple, "\u{271}"),
    (0x1DAD, FoldKind::Simple, "\u{270}"), (0x1DAE, FoldKind::Simple, "\u{272}"),
    (0x1DAF, FoldKind::Simple, "\u{273}"), (0x1DB0, FoldKind::Simple, "\u{274}"),
    (0x1DB1, FoldKind::Simple, "\u{275}"), (0x1DB2, FoldKind::Simple, "\u{278}"),
    (0x1DB3, FoldKind::Simple, "\u{282}"), (0x1DB4, FoldKind::Simple, "\u{283}"),
    (0x1DB5, FoldKind::Simple, "\u{1AB}"), (0x1DB6, FoldKind::Simple, "\u{289}"),
    (0x1DB7, FoldKind::Simple, "\u{28A}"), (0x1DB8, FoldKind::Simple, "\u{1D1C}"),
    (0x1DB9, FoldKind::Simple, "\u{28B}"), (0x1DBA, FoldKind::Simple, "\u{28C}"),
    (0x1DBB, FoldKind::Simple, "z"), (0x1DBC, FoldKind::Simple, "\u{290}"),
    (0x1DBD, FoldKind::Simple, "\u{291}"), (0x1DBE, FoldKind::Simple, "\u{292}"),
    (0x1DBF, FoldKind::Simple, "\u{3B8}"), (0x1E00, FoldKind::LetterMarks, "A"),
    (0x1E01, FoldKind::LetterMarks, "a"), (0x1E02, FoldKind::LetterMarks, "B"),
    (0x1E03, FoldKind::LetterMarks, "b"), (0x1E04, FoldKind::LetterMarks, "B"),
    (0x1E05, FoldKind::LetterMarks, "b"), (0x1E06, FoldKind::LetterMarks, "B"),
    (0x1E07, FoldKind::LetterMarks, "b"), (0x1E08, FoldKind::LetterMarks, "C"),
    (0x1E09, FoldKind::LetterMarks, "c"), (0x1E0A, FoldKind::LetterMarks, "D"),
    (0x1E0B, FoldKind::LetterMarks, "d"), (0x1E0C, FoldKind::LetterMarks, "D"),
    (0x1E0D, FoldKind::LetterMarks, "d"), (0x1E0E, FoldKind::LetterMarks, "D"),
    (0x1E0F, FoldKind::LetterMarks, "d"), (0x1E10, FoldKind::LetterMarks, "D"),
    (0x1E11, FoldKind::LetterMarks, "d"), (0x1E12, FoldKind::LetterMarks, "D"),
    (0x1E13, FoldKind::LetterMarks, "d"), (0x1E14, FoldKind::LetterMarks, "E"),
    (0x1E15, FoldKind::LetterMarks, "e"), (0x1E16, FoldKind::LetterMarks, "E"),
    (0x1E17, FoldKind::LetterMarks, "e"), (0x1E18, FoldKind::LetterMarks, "E"),
    (0x1E19, FoldKind::LetterMarks, "e"), (0x1E1A, FoldKind::LetterMarks, "E"),
    (0x1E1B, FoldKind::LetterMarks, "e"), (0x1E1C, FoldKind::LetterMarks, "E"),
    (0x1E1D, FoldKind::LetterMarks, "e"), (0x1E1E, FoldKind::LetterMarks, "F"),
    (0x1E1F, FoldKind::LetterMarks, "f"), (0x1E20, FoldKind::LetterMarks, "G"),
    (0x1E21, FoldKind::LetterMarks, "g"), (0x1E22, FoldKind::LetterMarks, "H"),
    (0x1E23, FoldKind::LetterMarks, "h"), (0x1E24, FoldKind::LetterMarks, "H"),
    (0x1E25, FoldKind::LetterMarks, "h"), (0x1E26, FoldKind::LetterMarks, "H"),
    (0x1E27, FoldKind::LetterMarks, "h"), (0x1E28, FoldKind::LetterMarks, "H"),
    (0x1E29, FoldKind::LetterMarks, "h"), (0x1E2A, FoldKind::LetterMarks, "H"),
    (0x1E2B, FoldKind::LetterMarks, "h"), (0x1E2C, FoldKind::LetterMarks, "I"),
    (0x1E2D, FoldKind::LetterMarks, "i"), (0x1E2E, FoldKind::LetterMarks, "I"),
    (0x1E2F, FoldKind::LetterMarks, "i"), (0x1E30, FoldKind::LetterMarks, "K"),
    (0x1E31, FoldKind::LetterMarks, "k"), (0x1E32, FoldKind::LetterMarks, "K"),
    (0x1E33, FoldKind::LetterMarks, "k"), (0x1E34, FoldKind::LetterMarks, "K"),
    (0x1E35, FoldKind::LetterMarks, "k"), (0x1E36, FoldKind::LetterMarks, "L"),
    (0x1E37, FoldKind::LetterMarks, "l"), (0x1E38, FoldKind::LetterMarks, "L"),
    (0x1E39, FoldKind::LetterMarks, "l"), (0x1E3A, FoldKind::LetterMarks, "L"),
    (0x1E3B, FoldKind::LetterMarks, "l"), (0x1E3C, FoldKind::LetterMarks, "L"),
    (0x1E3D, FoldKind::LetterMarks, "l"), (0x1E3E, FoldKind::LetterMarks, "M"),
    (0x1E3F, FoldKind::LetterMarks, "m"), (0x1E40, FoldKind::LetterMarks, "M"),
    (0x1E41, FoldKind::LetterMarks, "m"), (0x1E42, FoldKind::LetterMarks, "M"),
    (0x1E43, FoldKind::LetterMarks, "m"), (0x1E44, FoldKind::LetterMarks, "N"),
    (0x1E45, FoldKind::LetterMarks, "n"), (0x1E46, FoldKind::LetterMarks, "N"),
    (0x1E47, FoldKind::LetterMarks, "n"), (0x1E48, FoldKind::LetterMarks, "N"),
    (0x1E49, FoldKind::LetterMarks, "n"), (0x1E4A, FoldKind::LetterMarks, "N"),
    (0x1E4B, FoldKind::LetterMarks, "n"), (0x1E4C, FoldKind::LetterMarks, "O"),
    (0x1E4D, FoldKind::LetterMarks, "o"), (0x1E4E, FoldKind::LetterMarks, "O"),
    (0x1E4F, FoldKind::LetterMarks, "o"), (0x1E50, FoldKind::LetterMarks, "O"),
    (0x1E51, FoldKind::LetterMarks, "o"), (0x1E52, FoldKind::LetterMarks, "O"),
    (0x1E53, FoldKind::LetterMarks, "o"), (0x1E54, FoldKind::LetterMarks, "P"),
    (0x1E55, FoldKind::LetterMarks, "p"), (0x1E56, FoldKind::LetterMarks, "P"),
    (0x1E57, FoldKind::LetterMarks, "p"), (0x1E58, FoldKind::LetterMarks, "R"),
    (0x1E59, FoldKind::LetterMarks, "r"), (0x1E5A, FoldKind::LetterMarks, "R"),
    (0x1E5B, FoldKind::LetterMarks, "r"), (0x1E5C, FoldKind::LetterMarks, "R"),
    (0x1E5D, FoldKind::LetterMarks, "r"), (0x1E5E, FoldKind::LetterMarks, "R"),
    (0x1E5F, FoldKind::LetterMarks, "r"), (0x1E60, FoldKind::LetterMarks, "S"),
    (0x1E61, FoldKind::LetterMarks, "s"), (0x1E62, FoldKind::LetterMarks, "S"),
    (0x1E63, FoldKind::LetterMarks, "s"), (0x1E64, FoldKind::LetterMarks, "S"),
    (0x1E65, FoldKind::LetterMarks, "s"), (0x1E66, FoldKind::LetterMarks, "S"),
    (0x1E67, FoldKind::LetterMarks, "s"), (0x1E68, FoldKind::LetterMarks, "S"),
    (0x1E69, FoldKind::LetterMarks, "s"), (0x1E6A, FoldKind::LetterMarks, "T"),
    (0x1E6B, FoldKind::LetterMarks, "t"), (0x1E6C, FoldKind::LetterMarks, "T"),
    (0x1E6D, FoldKind::LetterMarks, "t"), (0x1E6E, FoldKind::LetterMarks, "T"),
    (0x1E6F, FoldKind::LetterMarks, "t"), (0x1E70, FoldKind::LetterMarks, "T"),
    (0x1E71, FoldKind::LetterMarks, "t"), (0x1E72, FoldKind::LetterMarks, "U"),
    (0x1E73, FoldKind::LetterMarks, "u"), (0x1E74, FoldKind::LetterMarks, "U"),
    (0x1E75, FoldKind::LetterMarks, "u"), (0x1E76, FoldKind::LetterMarks, "U"),
    (0x1E77, FoldKind::LetterMarks, "u"), (0x1E78, FoldKind::LetterMarks, "U"),
    (0x1E79, FoldKind::LetterMarks, "u"), (0x1E7A, FoldKind::LetterMarks, "U"),
    (0x1E7B, FoldKind::LetterMarks, "u"), (0x1E7C, FoldKind::LetterMarks, "V"),
    (0x1E7D, FoldKind::LetterMarks, "v"), (0x1E7E, FoldKind::LetterMarks, "V"),
    (0x1E7F, FoldKind::LetterMarks, "v"), (0x1E80, FoldKind::LetterMarks, "W"),
    (0x1E81, FoldKind::LetterMarks, "w"), (0x1E82, FoldKind::LetterMarks, "W"),
    (0x1E83, FoldKind::LetterMarks, "w"), (0x1E84, FoldKind::LetterMarks, "W"),
    (0x1E85, FoldKind::LetterMarks, "w"), (0x1E86, FoldKind::LetterMarks, "W"),
    (0x1E87, FoldKind::LetterMarks, "w"), (0x1E88, FoldKind::LetterMarks, "W"),
    (0x1E89, FoldKind::LetterMarks, "w"), (0x1E8A, FoldKind::LetterMarks, "X"),
    (0x1E8B, FoldKind::LetterMarks, "x"), (0x1E8C, FoldKind::LetterMarks, "X"),
    (0x1E8D, FoldKind::LetterMarks, "x"), (0x1E8E, FoldKind::LetterMarks, "Y"),
    (0x1E8F, FoldKind::LetterMarks, "y"), (0x1E90, FoldKind::LetterMarks, "Z"),
    (0x1E91, FoldKind::LetterMarks, "z"), (0x1E92, FoldKind::LetterMarks, "Z"),
    (0x1E93, FoldKind::LetterMarks, "z"), (0x1E94, FoldKind::LetterMarks, "Z"),
    (0x1E95, FoldKind::LetterMarks, "z"), (0x1E96, FoldKind::LetterMarks, "h"),
    (0x1E97, FoldKind::LetterMarks, "t"), (0x1E98, FoldKind::LetterMarks, "w"),
    (0x1E99, FoldKind::LetterMarks, "y"), (0x1E9A, FoldKind::Complex, "a"),
    (0x1E9B, FoldKind::LetterMarks, "s"), (0x1EA0, FoldKind::LetterMarks, "A"),
    (0x1EA1, FoldKind::LetterMarks, "a"), (0x1EA2, FoldKind::LetterMarks, "A"),
    (0x1EA3, FoldKind::LetterMarks, "a"), (0x1EA4, FoldKind::LetterMarks, "A"),
    (0x1EA5, FoldKind::LetterMarks, "a"), (0x1EA6, FoldKind::LetterMarks, "A"),
    (0x1EA7, FoldKind::LetterMarks, "a"), (0x1EA8, FoldKind::LetterMarks, "A"),
    (0x1EA9, FoldKind::LetterMarks, "a"), (0x1EAA, FoldKind::LetterMarks, "A"),
    (0x1EAB, FoldKind::LetterMarks, "a"), (0x1EAC, FoldKind::LetterMarks, "A"),
    (0x1EAD, FoldKind::LetterMarks, "a"), (0x1EAE, FoldKind::LetterMarks, "A"),
    (0x1EAF, FoldKind::LetterMarks, "a"), (0x1EB0, FoldKind::LetterMarks, "A"),
    (0x1EB1, FoldKind::LetterMarks, "a"), (0x1EB2, FoldKind::LetterMarks, "A"),
    (0x1EB3, FoldKind::LetterMarks, "a"), (0x1EB4, FoldKind::LetterMarks, "A"),
    (0x1EB5, FoldKind::LetterMarks, "a"), (0x1EB6, FoldKind::LetterMarks, "A"),
    (0x1EB7, FoldKind::LetterMarks, "a"), (0x1EB8, FoldKind::LetterMarks, "E"),
    (0x1EB9, FoldKind::LetterMarks, "e"), (0x1EBA, FoldKind::LetterMarks, "E"),
    (0x1EBB, FoldKind::LetterMarks, "e"), (0x1EBC, FoldKind::LetterMarks, "E"),
    (0x1EBD, FoldKind::LetterMarks, "e"), (0x1EBE, FoldKind::LetterMarks, "E"),
    (0x1EBF, FoldKind::LetterMarks, "e"), (0x1EC0, FoldKind::LetterMarks, "E"),
    (0x1EC1, FoldKind::LetterMarks, "e"), (0x1EC2, FoldKind::LetterMarks, "E"),
    (0x1EC3, FoldKind::LetterMarks, "e"), (0x1EC4, FoldKind::LetterMarks, "E"),
    (0x1EC5, FoldKind::LetterMarks, "e"), (0x1EC6, FoldKind::LetterMarks, "E"),
    (0x1EC7, FoldKind::LetterMarks, "e"), (0x1EC8, FoldKind::LetterMarks, "I"),
    (0x1EC9, FoldKind::LetterMarks, "i"), (0x1ECA, FoldKind::LetterMarks, "I"),
    (0x1ECB, FoldKind::LetterMarks, "i"), (0x1ECC, FoldKind::LetterMarks, "O"),
    (0x1ECD, FoldKind::LetterMarks, "o"), (0x1ECE, FoldKind::LetterMarks, "O"),
    (0x1ECF, FoldKind::LetterMarks, "o"), (0x1ED0, FoldKind::LetterMarks, "O"),
    (0x1ED1, FoldKind::LetterMarks, "o"), (0x1ED2, FoldKind::LetterMarks, "O"),
    (0x1ED3, FoldKind::LetterMarks, "o"), (0x1ED4, FoldKind::LetterMarks, "O"),
    (0x1ED5, FoldKind::LetterMarks, "o"), (0x1ED6, FoldKind::LetterMarks, "O"),
    (0x1ED7, FoldKind::LetterMarks, "o"), (0x1ED8, FoldKind::LetterMarks, "O"),
    (0x1ED9, FoldKind::LetterMarks, "o"), (0x1EDA, FoldKind::LetterMarks, "O"),
    (0x1EDB, FoldKind::LetterMarks, "o"), (0x1EDC, FoldKind::LetterMarks, "O"),
    (0x1EDD, FoldKind::LetterMarks, "o"), (0x1EDE, FoldKind::LetterMarks, "O"),
    (0x1EDF, FoldKind::LetterMarks, "o"), (0x1EE0, FoldKind::LetterMarks, "O"),
    (0x1EE1, FoldKind::LetterMarks, "o"), (0x1EE2, FoldKind::LetterMarks, "O"),
    (0x1EE3, FoldKind::LetterMarks, "o"), (0x1EE4, FoldKind::LetterMarks, "U"),
    (0x1EE5, FoldKind::LetterMarks, "u"), (0x1EE6, FoldKind::LetterMarks, "U"),
    (0x1EE7, FoldKind::LetterMarks, "u"), (0x1EE8, FoldKind::LetterMarks, "U"),
    (0x1EE9, FoldKind::LetterMarks, "u"), (0x1EEA, FoldKind::LetterMarks, "U"),
    (0x1EEB, FoldKind::LetterMarks, "u"), (0x1EEC, FoldKind::LetterMarks, "U"),
    (0x1EED, FoldKind::LetterMarks, "u"), (0x1EEE, FoldKind::LetterMarks, "U"),
    (0x1EEF, FoldKind::LetterMarks, "u"), (0x1EF0, FoldKind::LetterMarks, "U"),
    (0x1EF1, FoldKind::LetterMarks, "u"), (0x1EF2, FoldKind::LetterMarks, "Y"),
    (0x1EF3, FoldKind::LetterMarks, "y"), (0x1EF4, FoldKind::LetterMarks, "Y"),
    (0x1EF5, FoldKind::LetterMarks, "y"), (0x1EF6, FoldKind::LetterMarks, "Y"),
    (0x1EF7, FoldKind::LetterMarks, "y"), (0x1EF8, FoldKind::LetterMarks, "Y"),
    (0x1EF9, FoldKind::LetterMarks, "y"), (0x1F00, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F01, FoldKind::LetterMarks, "\u{3B1}"), (0x1F02, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F03, FoldKind::LetterMarks, "\u{3B1}"), (0x1F04, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F05, FoldKind::LetterMarks, "\u{3B1}"), (0x1F06, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F07, FoldKind::LetterMarks, "\u{3B1}"), (0x1F08, FoldKind::LetterMarks, "\u{391}"),
    (0x1F09, FoldKind::LetterMarks, "\u{391}"), (0x1F0A, FoldKind::LetterMarks, "\u{391}"),
    (0x1F0B, FoldKind::LetterMarks, "\u{391}"), (0x1F0C, FoldKind::LetterMarks, "\u{391}"),
    (0x1F0D, FoldKind::LetterMarks, "\u{391}"), (0x1F0E, FoldKind::LetterMarks, "\u{391}"),
    (0x1F0F, FoldKind::LetterMarks, "\u{391}"), (0x1F10, FoldKind::LetterMarks, "\u{3B5}"),
    (0x1F11, FoldKind::LetterMarks, "\u{3B5}"), (0x1F12, FoldKind::LetterMarks, "\u{3B5}"),
    (0x1F13, FoldKind::LetterMarks, "\u{3B5}"), (0x1F14, FoldKind::LetterMarks, "\u{3B5}"),
    (0x1F15, FoldKind::LetterMarks, "\u{3B5}"), (0x1F18, FoldKind::LetterMarks, "\u{395}"),
    (0x1F19, FoldKind::LetterMarks, "\u{395}"), (0x1F1A, FoldKind::LetterMarks, "\u{395}"),
    (0x1F1B, FoldKind::LetterMarks, "\u{395}"), (0x1F1C, FoldKind::LetterMarks, "\u{395}"),
    (0x1F1D, FoldKind::LetterMarks, "\u{395}"), (0x1F20, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F21, FoldKind::LetterMarks, "\u{3B7}"), (0x1F22, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F23, FoldKind::LetterMarks, "\u{3B7}"), (0x1F24, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F25, FoldKind::LetterMarks, "\u{3B7}"), (0x1F26, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F27, FoldKind::LetterMarks, "\u{3B7}"), (0x1F28, FoldKind::LetterMarks, "\u{397}"),
    (0x1F29, FoldKind::LetterMarks, "\u{397}"), (0x1F2A, FoldKind::LetterMarks, "\u{397}"),
    (0x1F2B, FoldKind::LetterMarks, "\u{397}"), (0x1F2C, FoldKind::LetterMarks, "\u{397}"),
    (0x1F2D, FoldKind::LetterMarks, "\u{397}"), (0x1F2E, FoldKind::LetterMarks, "\u{397}"),
    (0x1F2F, FoldKind::LetterMarks, "\u{397}"), (0x1F30, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1F31, FoldKind::LetterMarks, "\u{3B9}"), (0x1F32, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1F33, FoldKind::LetterMarks, "\u{3B9}"), (0x1F34, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1F35, FoldKind::LetterMarks, "\u{3B9}"), (0x1F36, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1F37, FoldKind::LetterMarks, "\u{3B9}"), (0x1F38, FoldKind::LetterMarks, "\u{399}"),
    (0x1F39, FoldKind::LetterMarks, "\u{399}"), (0x1F3A, FoldKind::LetterMarks, "\u{399}"),
    (0x1F3B, FoldKind::LetterMarks, "\u{399}"), (0x1F3C, FoldKind::LetterMarks, "\u{399}"),
    (0x1F3D, FoldKind::LetterMarks, "\u{399}"), (0x1F3E, FoldKind::LetterMarks, "\u{399}"),
    (0x1F3F, FoldKind::LetterMarks, "\u{399}"), (0x1F40, FoldKind::LetterMarks, "\u{3BF}"),
    (0x1F41, FoldKind::LetterMarks, "\u{3BF}"), (0x1F42, FoldKind::LetterMarks, "\u{3BF}"),
    (0x1F43, FoldKind::LetterMarks, "\u{3BF}"), (0x1F44, FoldKind::LetterMarks, "\u{3BF}"),
    (0x1F45, FoldKind::LetterMarks, "\u{3BF}"), (0x1F48, FoldKind::LetterMarks, "\u{39F}"),
    (0x1F49, FoldKind::LetterMarks, "\u{39F}"), (0x1F4A, FoldKind::LetterMarks, "\u{39F}"),
    (0x1F4B, FoldKind::LetterMarks, "\u{39F}"), (0x1F4C, FoldKind::LetterMarks, "\u{39F}"),
    (0x1F4D, FoldKind::LetterMarks, "\u{39F}"), (0x1F50, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1F51, FoldKind::LetterMarks, "\u{3C5}"), (0x1F52, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1F53, FoldKind::LetterMarks, "\u{3C5}"), (0x1F54, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1F55, FoldKind::LetterMarks, "\u{3C5}"), (0x1F56, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1F57, FoldKind::LetterMarks, "\u{3C5}"), (0x1F59, FoldKind::LetterMarks, "\u{3A5}"),
    (0x1F5B, FoldKind::LetterMarks, "\u{3A5}"), (0x1F5D, FoldKind::LetterMarks, "\u{3A5}"),
    (0x1F5F, FoldKind::LetterMarks, "\u{3A5}"), (0x1F60, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1F61, FoldKind::LetterMarks, "\u{3C9}"), (0x1F62, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1F63, FoldKind::LetterMarks, "\u{3C9}"), (0x1F64, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1F65, FoldKind::LetterMarks, "\u{3C9}"), (0x1F66, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1F67, FoldKind::LetterMarks, "\u{3C9}"), (0x1F68, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1F69, FoldKind::LetterMarks, "\u{3A9}"), (0x1F6A, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1F6B, FoldKind::LetterMarks, "\u{3A9}"), (0x1F6C, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1F6D, FoldKind::LetterMarks, "\u{3A9}"), (0x1F6E, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1F6F, FoldKind::LetterMarks, "\u{3A9}"), (0x1F70, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F71, FoldKind::LetterMarks, "\u{3B1}"), (0x1F72, FoldKind::LetterMarks, "\u{3B5}"),
    (0x1F73, FoldKind::LetterMarks, "\u{3B5}"), (0x1F74, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F75, FoldKind::LetterMarks, "\u{3B7}"), (0x1F76, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1F77, FoldKind::LetterMarks, "\u{3B9}"), (0x1F78, FoldKind::LetterMarks, "\u{3BF}"),
    (0x1F79, FoldKind::LetterMarks, "\u{3BF}"), (0x1F7A, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1F7B, FoldKind::LetterMarks, "\u{3C5}"), (0x1F7C, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1F7D, FoldKind::LetterMarks, "\u{3C9}"), (0x1F80, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F81, FoldKind::LetterMarks, "\u{3B1}"), (0x1F82, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F83, FoldKind::LetterMarks, "\u{3B1}"), (0x1F84, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F85, FoldKind::LetterMarks, "\u{3B1}"), (0x1F86, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1F87, FoldKind::LetterMarks, "\u{3B1}"), (0x1F88, FoldKind::LetterMarks, "\u{391}"),
    (0x1F89, FoldKind::LetterMarks, "\u{391}"), (0x1F8A, FoldKind::LetterMarks, "\u{391}"),
    (0x1F8B, FoldKind::LetterMarks, "\u{391}"), (0x1F8C, FoldKind::LetterMarks, "\u{391}"),
    (0x1F8D, FoldKind::LetterMarks, "\u{391}"), (0x1F8E, FoldKind::LetterMarks, "\u{391}"),
    (0x1F8F, FoldKind::LetterMarks, "\u{391}"), (0x1F90, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F91, FoldKind::LetterMarks, "\u{3B7}"), (0x1F92, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F93, FoldKind::LetterMarks, "\u{3B7}"), (0x1F94, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F95, FoldKind::LetterMarks, "\u{3B7}"), (0x1F96, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1F97, FoldKind::LetterMarks, "\u{3B7}"), (0x1F98, FoldKind::LetterMarks, "\u{397}"),
    (0x1F99, FoldKind::LetterMarks, "\u{397}"), (0x1F9A, FoldKind::LetterMarks, "\u{397}"),
    (0x1F9B, FoldKind::LetterMarks, "\u{397}"), (0x1F9C, FoldKind::LetterMarks, "\u{397}"),
    (0x1F9D, FoldKind::LetterMarks, "\u{397}"), (0x1F9E, FoldKind::LetterMarks, "\u{397}"),
    (0x1F9F, FoldKind::LetterMarks, "\u{397}"), (0x1FA0, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FA1, FoldKind::LetterMarks, "\u{3C9}"), (0x1FA2, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FA3, FoldKind::LetterMarks, "\u{3C9}"), (0x1FA4, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FA5, FoldKind::LetterMarks, "\u{3C9}"), (0x1FA6, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FA7, FoldKind::LetterMarks, "\u{3C9}"), (0x1FA8, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FA9, FoldKind::LetterMarks, "\u{3A9}"), (0x1FAA, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FAB, FoldKind::LetterMarks, "\u{3A9}"), (0x1FAC, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FAD, FoldKind::LetterMarks, "\u{3A9}"), (0x1FAE, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FAF, FoldKind::LetterMarks, "\u{3A9}"), (0x1FB0, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1FB1, FoldKind::LetterMarks, "\u{3B1}"), (0x1FB2, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1FB3, FoldKind::LetterMarks, "\u{3B1}"), (0x1FB4, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1FB6, FoldKind::LetterMarks, "\u{3B1}"), (0x1FB7, FoldKind::LetterMarks, "\u{3B1}"),
    (0x1FB8, FoldKind::LetterMarks, "\u{391}"), (0x1FB9, FoldKind::LetterMarks, "\u{391}"),
    (0x1FBA, FoldKind::LetterMarks, "\u{391}"), (0x1FBB, FoldKind::LetterMarks, "\u{391}"),
    (0x1FBC, FoldKind::LetterMarks, "\u{391}"), (0x1FBD, FoldKind::LetterMarks, " "),
    (0x1FBE, FoldKind::Simple, "\u{3B9}"), (0x1FBF, FoldKind::LetterMarks, " "),
    (0x1FC0, FoldKind::LetterMarks, " "), (0x1FC1, FoldKind::LetterMarks, " "),
    (0x1FC2, FoldKind::LetterMarks, "\u{3B7}"), (0x1FC3, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1FC4, FoldKind::LetterMarks, "\u{3B7}"), (0x1FC6, FoldKind::LetterMarks, "\u{3B7}"),
    (0x1FC7, FoldKind::LetterMarks, "\u{3B7}"), (0x1FC8, FoldKind::LetterMarks, "\u{395}"),
    (0x1FC9, FoldKind::LetterMarks, "\u{395}"), (0x1FCA, FoldKind::LetterMarks, "\u{397}"),
    (0x1FCB, FoldKind::LetterMarks, "\u{397}"), (0x1FCC, FoldKind::LetterMarks, "\u{397}"),
    (0x1FCD, FoldKind::LetterMarks, " "), (0x1FCE, FoldKind::LetterMarks, " "),
    (0x1FCF, FoldKind::LetterMarks, " "), (0x1FD0, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1FD1, FoldKind::LetterMarks, "\u{3B9}"), (0x1FD2, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1FD3, FoldKind::LetterMarks, "\u{3B9}"), (0x1FD6, FoldKind::LetterMarks, "\u{3B9}"),
    (0x1FD7, FoldKind::LetterMarks, "\u{3B9}"), (0x1FD8, FoldKind::LetterMarks, "\u{399}"),
    (0x1FD9, FoldKind::LetterMarks, "\u{399}"), (0x1FDA, FoldKind::LetterMarks, "\u{399}"),
    (0x1FDB, FoldKind::LetterMarks, "\u{399}"), (0x1FDD, FoldKind::LetterMarks, " "),
    (0x1FDE, FoldKind::LetterMarks, " "), (0x1FDF, FoldKind::LetterMarks, " "),
    (0x1FE0, FoldKind::LetterMarks, "\u{3C5}"), (0x1FE1, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1FE2, FoldKind::LetterMarks, "\u{3C5}"), (0x1FE3, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1FE4, FoldKind::LetterMarks, "\u{3C1}"), (0x1FE5, FoldKind::LetterMarks, "\u{3C1}"),
    (0x1FE6, FoldKind::LetterMarks, "\u{3C5}"), (0x1FE7, FoldKind::LetterMarks, "\u{3C5}"),
    (0x1FE8, FoldKind::LetterMarks, "\u{3A5}"), (0x1FE9, FoldKind::LetterMarks, "\u{3A5}"),
    (0x1FEA, FoldKind::LetterMarks, "\u{3A5}"), (0x1FEB, FoldKind::LetterMarks, "\u{3A5}"),
    (0x1FEC, FoldKind::LetterMarks, "\u{3A1}"), (0x1FED, FoldKind::LetterMarks, " "),
    (0x1FEE, FoldKind::LetterMarks, " "), (0x1FEF, FoldKind::Simple, "`"),
    (0x1FF2, FoldKind::LetterMarks, "\u{3C9}"), (0x1FF3, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FF4, FoldKind::LetterMarks, "\u{3C9}"), (0x1FF6, FoldKind::LetterMarks, "\u{3C9}"),
    (0x1FF7, FoldKind::LetterMarks, "\u{3C9}"), (0x1FF8, FoldKind::LetterMarks, "\u{39F}"),
    (0x1FF9, FoldKind::LetterMarks, "\u{39F}"), (0x1FFA, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FFB, FoldKind::LetterMarks, "\u{3A9}"), (0x1FFC, FoldKind::LetterMarks, "\u{3A9}"),
    (0x1FFD, FoldKind::LetterMarks, " "), (0x1FFE, FoldKind::LetterMarks, " "),
    (0x2000, FoldKind::Simple, " "), (0x2001, FoldKind::Simple, " "),
    (0x2002, FoldKind::Simple, " "), (0x2003, FoldKind::Simple, " "),
    (0x2004, FoldKind::Simple, " "), (0x2005, FoldKind::Simple, " "),
    (0x2006, FoldKind::Simple, " "), (0x2007, FoldKind::Simple, " "),
    (0x2008, FoldKind::Simple, " "), (0x2009, FoldKind::Simple, " "),
    (0x200A, FoldKind::Simple, " "), (0x2011, FoldKind::Simple, "\u{2010}"),
    (0x2017, FoldKind::LetterMarks, " "), (0x2024, FoldKind::Simple, "."),
    (0x2025, FoldKind::Complex, "."), (0x2026, FoldKind::Complex, "."),
    (0x202F, FoldKind::Simple, " "), (0x2033, FoldKind::Complex, "\u{2032}"),
    (0x2034, FoldKind::Complex, "\u{2032}"), (0x2036, FoldKind::Complex, "\u{2035}"),
    (0x2037, FoldKind::Complex, "\u{2035}"), (0x203C, FoldKind::Complex, "!"),
    (0x203E, FoldKind::LetterMarks, " "), (0x2047, FoldKind::Complex, "?"),
    (0x2048, FoldKind::Complex, "?"), (0x2049, FoldKind::Complex, "!"),
    (0x2057, FoldKind::Complex, "\u{2032}"), (0x205F, FoldKind::Simple, " "),
    (0x2070, FoldKind::Simple, "0"), (0x2071, FoldKind::Simple, "i"),
    (0x2074, FoldKind::Simple, "4"), (0x2075, FoldKind::Simple, "5"),
    (0x2076, FoldKind::Simple, "6"), (0x2077, FoldKind::Simple, "7"),
    (0x2078, FoldKind::Simple, "8"), (0x2079, FoldKind::Simple, "9"),
    (0x207A, FoldKind::Simple, "+"), (0x207B, FoldKind::Simple, "\u{2212}"),
    (0x207C, FoldKind::Simple, "="), (0x207D, FoldKind::Simple, "("),
    (0x207E, FoldKind::Simple, ")"), (0x207F, FoldKind::Simple, "n"),
    (0x2080, FoldKind::Simple, "0"), (0x2081, FoldKind::Simple, "1"),
    (0x2082, FoldKind::Simple, "2"), (0x2083, FoldKind::Simple, "3"),
    (0x2084, FoldKind::Simple, "4"), (0x2085, FoldKind::Simple, "5"),
    (0x2086, FoldKind::Simple, "6"), (0x2087, FoldKind::Simple, "7"),
    (0x2088, FoldKind::Simple, "8"), (0x2089, FoldKind::Simple, "9"),
    (0x208A, FoldKind::Simple, "+"), (0x208B, FoldKind::Simple, "\u{2212}"),
    (0x208C, FoldKind::Simple, "="), (0x208D, FoldKind::Simple, "("),
    (0x208E, FoldKind::Simple, ")"), (0x2090, FoldKind::Simple, "a"),
    (0x2091, FoldKind::Simple, "e"), (0x2092, FoldKind::Simple, "o"),
    (0x2093, FoldKind::Simple, "x"), (0x2094, FoldKind::Simple, "\u{259}"),
    (0x2095, FoldKind::Simple, "h"), (0x2096, FoldKind::Simple, "k"),
    (0x2097, FoldKind::Simple, "l"), (0x2098, FoldKind::Simple, "m"),
    (0x2099, FoldKind::Simple, "n"), (0x209A, FoldKind::Simple, "p"),
    (0x209B, FoldKind::Simple, "s"), (0x209C, FoldKind::Simple, "t"),
    (0x20A8, FoldKind::Complex, "R"), (0x2100, FoldKind::Complex, "a"),
    (0x2101, FoldKind::Complex, "a"), (0x2102, FoldKind::Simple, "C"),
    (0x2103, FoldKind::DegreeLetter, "C"), (0x2105, FoldKind::Complex, "c"),
    (0x2106, FoldKind::Complex, "c"), (0x2107, FoldKind::Simple, "\u{190}"),
    (0x2109, FoldKind::DegreeLetter, "F"), (0x210A, FoldKind::Simple, "g"),
    (0x210B, FoldKind::Simple, "H"), (0x210C, FoldKind::Simple, "H"),
    (0x210D, FoldKind::Simple, "H"), (0x210E, FoldKind::Simple, "h"),
    (0x210F, FoldKind::Simple, "\u{127}"), (0x2110, FoldKind::Simple, "I"),
    (0x2111, FoldKind::Simple, "I"), (0x2112, FoldKind::Simple, "L"),
    (0x2113, FoldKind::Simple, "l"), (0x2115, FoldKind::Simple, "N"),
    (0x2116, FoldKind::Complex, "N"), (0x2119, FoldKind::Simple, "P"),
    (0x211A, FoldKind::Simple, "Q"), (0x211B, FoldKind::Simple, "R"),
    (0x211C, FoldKind::Simple, "R"), (0x211D, FoldKind::Simple, "R"),
    (0x2120, FoldKind::Complex, "S"), (0x2121, FoldKind::Complex, "T"),
    (0x2122, FoldKind::Complex, "T"), (0x2124, FoldKind::Simple, "Z"),
    (0x2126, FoldKind::Simple, "\u{3A9}"), (0x2128, FoldKind::Simple, "Z"),
    (0x212A, FoldKind::Simple, "K"), (0x212B, FoldKind::LetterMarks, "A"),
    (0x212C, FoldKind::Simple, "B"), (0x212D, FoldKind::Simple, "C"),
    (0x212F, FoldKind::Simple, "e"), (0x2130, FoldKind::Simple, "E"),
    (0x2131, FoldKind::Simple, "F"), (0x2133, FoldKind::Simple, "M"),
    (0x2134, FoldKind::Simple, "o"), (0x2135, FoldKind::Simple, "\u{5D0}"),
    (0x2136, FoldKind::Simple, "\u{5D1}"), (0x2137, FoldKind::Simple, "\u{5D2}"),
    (0x2138, FoldKind::Simple, "\u{5D3}"), (0x2139, FoldKind::Simple, "i"),
    (0x213B, FoldKind::Complex, "F"), (0x213C, FoldKind::Simple, "\u{3C0}"),
    (0x213D, FoldKind::Simple, "\u{3B3}"), (0x213E, FoldKind::Simple, "\u{393}"),
    (0x213F, FoldKind::Simple, "\u{3A0}"), (0x2140, FoldKind::Simple, "\u{2211}"),
    (0x2145, FoldKind::Simple, "D"), (0x2146, FoldKind::Simple, "d"),
    (0x2147, FoldKind::Simple, "e"), (0x2148, FoldKind::Simple, "i"),
    (0x2149, FoldKind::Simple, "j"), (0x2150, FoldKind::Complex, "1"),
    (0x2151, FoldKind::Complex, "1"), (0x2152, FoldKind::Complex, "1"),
    (0x2153, FoldKind::Complex, "1"), (0x2154, FoldKind::Complex, "2"),
    (0x2155, FoldKind::Complex, "1"), (0x2156, FoldKind::Complex, "2"),
    (0x2157, FoldKind::Complex, "3"), (0x2158, FoldKind::Complex, "4"),
    (0x2159, FoldKind::Complex, "1"), (0x215A, FoldKind::Complex, "5"),
    (0x215B, FoldKind::Complex, "1"), (0x215C, FoldKind::Complex, "3"),
    (0x215D, FoldKind::Complex, "5"), (0x215E, FoldKind::Complex, "7"),
    (0x215F, FoldKind::Complex, "1"), (0x2160, FoldKind::Simple, "I"),
    (0x2161, FoldKind::Complex, "I"), (0x2162, FoldKind::Complex, "I"),
    (0x2163, FoldKind::Complex, "I"), (0x2164, FoldKind::Simple, "V"),
    (0x2165, FoldKind::Complex, "V"), (0x2166, FoldKind::Complex, "V"),
    (0x2167, FoldKind::Complex, "V"), (0x2168, FoldKind::Complex, "I"),
    (0x2169, FoldKind::Simple, "X"), (0x216A, FoldKind::Complex, "X"),
    (0x216B, FoldKind::Complex, "X"), (0x216C, FoldKind::Simple, "L"),
    (0x216D, FoldKind::Simple, "C"), (0x216E, FoldKind::Simple, "D"),
    (0x216F, FoldKind::Simple, "M"), (0x2170, FoldKind::Simple, "i"),
    (0x2171, FoldKind::Complex, "i"), (0x2172, FoldKind::Complex, "i"),
    (0x2173, FoldKind::Complex, "i"), (0x2174, FoldKind::Simple, "v"),
    (0x2175, FoldKind::Complex, "v"), (0x2176, FoldKind::Complex, "v"),
    (0x2177, FoldKind::Complex, "v"), (0x2178, FoldKind::Complex, "i"),
    (0x2179, FoldKind::Simple, "x"), (0x217A, FoldKind::Complex, "x"),
    (0x217B, FoldKind::Complex, "x"), (0x217C, FoldKind::Simple, "l"),
    (0x217D, FoldKind::Simple, "c"), (0x217E, FoldKind::Simple, "d"),
    (0x217F, FoldKind::Simple, "m"), (0x2189, FoldKind::Complex, "0"),
    (0x219A, FoldKind::LetterMarks, "\u{2190}"), (0x219B, FoldKind::LetterMarks, "\u{2192}"),
    (0x21AE, FoldKind::LetterMarks, "\u{2194}"), (0x21CD, FoldKind::LetterMarks, "\u{21D0}"),
    (0x21CE, FoldKind::LetterMarks, "\u{21D4}"), (0x21CF, FoldKind::LetterMarks, "\u{21D2}"),
    (0x2204, FoldKind::LetterMarks, "\u{2203}"), (0x2209, FoldKind::LetterMarks, "\u{2208}"),
    (0x220C, FoldKind::LetterMarks, "\u{220B}"), (0x2224, FoldKind::LetterMarks, "\u{2223}"),
    (0x2226, FoldKind::LetterMarks, "\u{2225}"), (0x222C, FoldKind::Complex, "\u{222B}"),
    (0x222D, FoldKind::Complex, "\u{222B}"), (0x222F, FoldKind::Complex, "\u{222E}"),
    (0x2230, FoldKind::Complex, "\u{222E}"), (0x2241, FoldKind::LetterMarks, "\u{223C}"),
    (0x2244, FoldKind::LetterMarks, "\u{2243}"), (0x2247, FoldKind::LetterMarks, "\u{2245}"),
    (0x2249, FoldKind::LetterMarks, "\u{2248}"), (0x2260, FoldKind::LetterMarks, "="),
    (0x2262, FoldKind::LetterMarks, "\u{2261}"), (0x226D, FoldKind::LetterMarks, "\u{224D}"),
    (0x226E, FoldKind::LetterMarks, "<"), (0x226F, FoldKind::LetterMarks, ">"),
    (0x2270, FoldKind::LetterMarks, "\u{2264}"), (0x2271, FoldKind::LetterMarks, "\u{2265}"),
    (0x2274, FoldKind::LetterMarks, "\u{2272}"), (0x2275, FoldKind::LetterMarks, "\u{2273}"),
    (0x2278, FoldKind::LetterMarks, "\u{2276}"), (0x2279, FoldKind::LetterMarks, "\u{2277}"),
    (0x2280, FoldKind::LetterMarks, "\u{227A}"), (0x2281, FoldKind::LetterMarks, "\u{227B}"),
    (0x2284, FoldKind::LetterMarks, "\u{2282}"), (0x2285, FoldKind::LetterMarks, "\u{2283}"),
    (0x2288, FoldKind::LetterMarks, "\u{2286}"), (0x2289, FoldKind::LetterMarks, "\u{2287}"),
    (0x22AC, FoldKind::LetterMarks, "\u{22A2}"), (0x22AD, FoldKind::LetterMarks, "\u{22A8}"),
    (0x22AE, FoldKind::LetterMarks, "\u{22A9}"), (0x22AF, FoldKind::LetterMarks, "\u{22AB}"),
    (0x22E0, FoldKind::LetterMarks, "\u{227C}"), (0x22E1, FoldKind::LetterMarks, "\u{227D}"),
    (0x22E2, FoldKind::LetterMarks, "\u{2291}"), (0x22E3, FoldKind::LetterMarks, "\u{2292}"),
    (0x22EA, FoldKind::LetterMarks, "\u{22B2}"), (0x22EB, FoldKind::LetterMarks, "\u{22B3}"),
    (0x22EC, FoldKind::LetterMarks, "\u{22B4}"), (0x22ED, FoldKind::LetterMarks, "\u{22B5}"),
    (0x2329, FoldKind::Simple, "\u{3008}"), (0x232A, FoldKind::Simple, "\u{3009}"),
    (0x2460, FoldKind::Simple, "1"), (0x2461, FoldKind::Simple, "2"),
    (0x2462, FoldKind::Simple, "3"), (0x2463, FoldKind::Simple, "4"),
    (0x2464, FoldKind::Simple, "5"), (0x2465, FoldKind::Simple, "6"),
    (0x2466, FoldKind::Simple, "7"), (0x2467, FoldKind::Simple, "8"),
    (0x2468, FoldKind::Simple, "9"), (0x2469, FoldKind::Complex, "1"),
    (0x246A, FoldKind::Complex, "1"), (0x246B, FoldKind::Complex, "1"),
    (0x246C, FoldKind::Complex, "1"), (0x246D, FoldKind::Complex, "1"),
    (0x246E, FoldKind::Complex, "1"), (0x246F, FoldKind::Complex, "1"),
    (0x2470, FoldKind::Complex, "1"), (0x2471, FoldKind::Complex, "1"),
    (0x2472, FoldKind::Complex, "1"), (0x2473, FoldKind::Complex, "2"),
    (0x2474, FoldKind::Complex, "("), (0x2475, FoldKind::Complex, "("),
    (0x2476, FoldKind::Complex, "("), (0x2477, FoldKind::Complex, "("),
    (0x2478, FoldKind::Complex, "("), (0x2479, FoldKind::Complex, "("),
    (0x247A, FoldKind::Complex, "("), (0x247B, FoldKind::Complex, "("),
    (0x247C, FoldKind::Complex, "("), (0x247D, FoldKind::Complex, "("),
    (0x247E, FoldKind::Complex, "("), (0x247F, FoldKind::Complex, "("),
    (0x2480, FoldKind::Complex, "("), (0x2481, FoldKind::Complex, "("),
    (0x2482, FoldKind::Complex, "("), (0x2483, FoldKind::Complex, "("),
    (0x2484, FoldKind::Complex, "("), (0x2485, FoldKind::Complex, "("),
    (0x2486, FoldKind::Complex, "("), (0x2487, FoldKind::Complex, "("),
    (0x2488, FoldKind::Complex, "1"), (0x2489, FoldKind::Complex, "2"),
    (0x248A, FoldKind::Complex, "3"), (0x248B, FoldKind::Complex, "4"),
    (0x248C, FoldKind::Complex, "5"), (0x248D, FoldKind::Complex, "6"),
    (0x248E, FoldKind::Complex, "7"), (0x248F, FoldKind::Complex, "8"),
    (0x2490, FoldKind::Complex, "9"), (0x2491, FoldKind::Complex, "1"),
    (0x2492, FoldKind::Complex, "1"), (0x2493, FoldKind::Complex, "1"),
    (0x2494, FoldKind::Complex, "1"), (0x2495, FoldKind::Complex, "1"),
    (0x2496, FoldKind::Complex, "1"), (0x2497, FoldKind::Complex, "1"),
    (0x2498, FoldKind::Complex, "1"), (0x2499, FoldKind::Complex, "1"),
    (0x249A, FoldKind::Complex, "1"), (0x249B, FoldKind::Complex, "2"),
    (0x249C, FoldKind::Complex, "("), (0x249D, FoldKind::Complex, "("),
    (0x249E, FoldKind::Complex, "("), (0x249F, FoldKind::Complex, "("),
    (0x24A0, FoldKind::Complex, "("), (0x24A1, FoldKind::Complex, "("),
    (0x24A2, FoldKind::Complex, "("), (0x24A3, FoldKind::Complex, "("),
    (0x24A4, FoldKind::Complex, "("), (0x24A5, FoldKind::Complex, "("),
    (0x24A6, FoldKind::Complex, "("), (0x24A7, FoldKind::Complex, "("),
    (0x24A8, FoldKind::Complex, "("), (0x24A9, FoldKind::Complex, "("),
    (0x24AA, FoldKind::Complex, "("), (0x24AB, FoldKind::Complex, "("),
    (0x24AC, FoldKind::Complex, "("), (0x24AD, FoldKind::Complex, "("),
    (0x24AE, FoldKind::Complex, "("), (0x24AF, FoldKind::Complex, "("),
    (0x24B0, FoldKind::Complex, "("), (0x24B1, FoldKind::Complex, "("),
    (0x24B2, FoldKind::Complex, "("), (0x24B3, FoldKind::Complex, "("),
    (0x24B4, FoldKind::Complex, "("), (0x24B5, FoldKind::Complex, "("),
    (0x24B6, FoldKind::Simple, "A"), (0x24B7, FoldKind::Simple, "B"),
    (0x24B8, FoldKind::Simple, "C"), (0x24B9, FoldKind::Simple, "D"),
    (0x24BA, FoldKind::Simple, "E"), (0x24BB, FoldKind::Simple, "F"),
    (0x24BC, FoldKind::Simple, "G"), (0x24BD, FoldKind::Simple, "H"),
    (0x24BE, FoldKind::Simple, "I"), (0x24BF, FoldKind::Simple, "J"),
    (0x24C0, FoldKind::Simple, "K"), (0x24C1, FoldKind::Simple, "L"),
    (0x24C2, FoldKind::Simple, "M"), (0x24C3, FoldKind::Simple, "N"),
    (0x24C4, FoldKind::Simple, "O"), (0x24C5, FoldKind::Simple, "P"),
    (0x24C6, FoldKind::Simple, "Q"), (0x24C7, FoldKind::Simple, "R"),
    (0x24C8, FoldKind::Simple, "S"), (0x24C9, FoldKind::Simple, "T"),
    (0x24CA, FoldKind::Simple, "U"), (0x24CB, FoldKind::Simple, "V"),
    (0x24CC, FoldKind::Simple, "W"), (0x24CD, FoldKind::Simple, "X"),
    (0x24CE, FoldKind::Simple, "Y"), (0x24CF, FoldKind::Simple, "Z"),
    (0x24D0, FoldKind::Simple, "a"), (0x24D1, FoldKind::Simple, "b"),
    (0x24D2, FoldKind::Simple, "c"), (0x24D3, FoldKind::Simple, "d"),
    (0x24D4, FoldKind::Simple, "e"), (0x24D5, FoldKind::Simple, "f"),
    (0x24D6, FoldKind::Simple, "g"), (0x24D7, FoldKind::Simple, "h"),
    (0x24D8, FoldKind::Simple, "i"), (0x24D9, FoldKind::Simple, "j"),
    (0x24DA, FoldKind::Simple, "k"), (0x24DB, FoldKind::Simple, "l"),
    (0x24DC, FoldKind::Simple, "m"), (0x24DD, FoldKind::Simple, "n"),
    (0x24DE, FoldKind::Simple, "o"), (0x24DF, FoldKind::Simple, "p"),
    (0x24E0, FoldKind::Simple, "q"), (0x24E1, FoldKind::Simple, "r"),
    (0x24E2, FoldKind::Simple, "s"), (0x24E3, FoldKind::Simple, "t"),
    (0x24E4, FoldKind::Simple, "u"), (0x24E5, FoldKind::Simple, "v"),
    (0x24E6, FoldKind::Simple, "w"), (0x24E7, FoldKind::Simple, "x"),
    (0x24E8, FoldKind::Simple, "y"), (0x24E9, FoldKind::Simple, "z"),
    (0x24EA, FoldKind::Simple, "0"), (0x2A0C, FoldKind::Complex, "\u{222B}"),
    (0x2A74, FoldKind::Complex, ":"), (0x2A75, FoldKind::Complex, "="),
    (0x2A76, FoldKind::Complex, "="), (0x2ADC, FoldKind::LetterMarks, "\u{2ADD}"),
    (0x2C7C, FoldKind::Simple, "j"), (0x2C7D, FoldKind::Simple, "V"),
    (0x2D6F, FoldKind::Simple, "\u{2D61}"), (0x2E9F, FoldKind::Simple, "\u{6BCD}"),
    (0x2EF3, FoldKind::Simple, "\u{9F9F}"), (0x2F00, FoldKind::Simple, "\u{4E00}"),
    (0x2F01, FoldKind::Simple, "\u{4E28}"), (0x2F02, FoldKind::Simple, "\u{4E36}"),
    (0x2F03, FoldKind::Simple, "\u{4E3F}"), (0x2F04, FoldKind::Simple, "\u{4E59}"),
    (0x2F05, FoldKind::Simple, "\u{4E85}"), (0x2F06, FoldKind::Simple, "\u{4E8C}"),
    (0x2F07, FoldKind::Simple, "\u{4EA0}"), (0x2F08, FoldKind::Simple, "\u{4EBA}"),
    (0x2F09, FoldKind::Simple, "\u{513F}"), (0x2F0A, FoldKind::Simple, "\u{5165}"),
    (0x2F0B, FoldKind::Simple, "\u{516B}"), (0x2F0C, FoldKind::Simple, "\u{5182}"),
    (0x2F0D, FoldKind::Simple, "\u{5196}"), (0x2F0E, FoldKind::Simple, "\u{51AB}"),
    (0x2F0F, FoldKind::Simple, "\u{51E0}"), (0x2F10, FoldKind::Simple, "\u{51F5}"),
    (0x2F11, FoldKind::Simple, "\u{5200}"), (0x2F12, FoldKind::Simple, "\u{529B}"),
    (0x2F13, FoldKind::Simple, "\u{52F9}"), (0x2F14, FoldKind::Simple, "\u{5315}"),
    (0x2F15, FoldKind::Simple, "\u{531A}"), (0x2F16, FoldKind::Simple, "\u{5338}"),
    (0x2F17, FoldKind::Simple, "\u{5341}"), (0x2F18, FoldKind::Simple, "\u{535C}"),
    (0x2F19, FoldKind::Simple, "\u{5369}"), (0x2F1A, FoldKind::Simple, "\u{5382}"),
    (0x2F1B, FoldKind::Simple, "\u{53B6}"), (0x2F1C, FoldKind::Simple, "\u{53C8}"),
    (0x2F1D, FoldKind::Simple, "\u{53E3}"), (0x2F1E, FoldKind::Simple, "\u{56D7}"),
    (0x2F1F, FoldKind::Simple, "\u{571F}"), (0x2F20, FoldKind::Simple, "\u{58EB}"),
    (0x2F21, FoldKind::Simple, "\u{5902}"), (0x2F22, FoldKind::Simple, "\u{590A}"),
    (0x2F23, FoldKind::Simple, "\u{5915}"), (0x2F24, FoldKind::Simple, "\u{5927}"),
    (0x2F25, FoldKind::Simple, "\u{5973}"), (0x2F26, FoldKind::Simple, "\u{5B50}"),
    (0x2F27, FoldKind::Simple, "\u{5B80}"), (0x2F28, FoldKind::Simple, "\u{5BF8}"),
    (0x2F29, FoldKind::Simple, "\u{5C0F}"), (0x2F2A, FoldKind::Simple, "\u{5C22}"),
    (0x2F2B, FoldKind::Simple, "\u{5C38}"), (0x2F2C, FoldKind::Simple, "\u{5C6E}"),
    (0x2F2D, FoldKind::Simple, "\u{5C71}"), (0x2F2E, FoldKind::Simple, "\u{5DDB}"),
    (0x2F2F, FoldKind::Simple, "\u{5DE5}"), (0x2F30, FoldKind::Simple, "\u{5DF1}"),
    (0x2F31, FoldKind::Simple, "\u{5DFE}"), (0x2F32, FoldKind::Simple, "\u{5E72}"),
    (0x2F33, FoldKind::Simple, "\u{5E7A}"), (0x2F34, FoldKind::Simple, "\u{5E7F}"),
    (0x2F35, FoldKind::Simple, "\u{5EF4}"), (0x2F36, FoldKind::Simple, "\u{5EFE}"),
    (0x2F37, FoldKind::Simple, "\u{5F0B}"), (0x2F38, FoldKind::Simple, "\u{5F13}"),
    (0x2F39, FoldKind::Simple, "\u{5F50}"), (0x2F3A, FoldKind::Simple, "\u{5F61}"),
    (0x2F3B, FoldKind::Simple, "\u{5F73}"), (0x2F3C, FoldKind::Simple, "\u{5FC3}"),
    (0x2F3D, FoldKind::Simple, "\u{6208}"), (0x2F3E, FoldKind::Simple, "\u{6236}"),
    (0x2F3F, FoldKind::Simple, "\u{624B}"), (0x2F40, FoldKind::Simple, "\u{652F}"),
    (0x2F41, FoldKind::Simple, "\u{6534}"), (0x2F42, FoldKind::Simple, "\u{6587}"),
    (0x2F43, FoldKind::Simple, "\u{6597}"), (0x2F44, FoldKind::Simple, "\u{65A4}"),
    (0x2F45, FoldKind::Simple, "\u{65B9}"), (0x2F46, FoldKind::Simple, "\u{65E0}"),
    (0x2F47, FoldKind::Simple, "\u{65E5}"), (0x2F48, FoldKind::Simple, "\u{66F0}"),
    (0x2F49, FoldKind::Simple, "\u{6708}"), (0x2F4A, FoldKind::Simple, "\u{6728}"),
    (0x2F4B, FoldKind::Simple, "\u{6B20}"), (0x2F4C, FoldKind::Simple, "\u{6B62}"),
    (0x2F4D, FoldKind::Simple, "\u{6B79}"), (0x2F4E, FoldKind::Simple, "\u{6BB3}"),
    (0x2F4F, FoldKind::Simple, "\u{6BCB}"), (0x2F50, FoldKind::Simple, "\u{6BD4}"),
    (0x2F51, FoldKind::Simple, "\u{6BDB}"), (0x2F52, FoldKind::Simple, "\u{6C0F}"),
    (0x2F53, FoldKind::Simple, "\u{6C14}"), (0x2F54, FoldKind::Simple, "\u{6C34}"),
    (0x2F55, FoldKind::Simple, "\u{706B}"), (0x2F56, FoldKind::Simple, "\u{722A}"),
    (0x2F57, FoldKind::Simple, "\u{7236}"), (0x2F58, FoldKind::Simple, "\u{723B}"),
    (0x2F59, FoldKind::Simple, "\u{723F}"), (0x2F5A, FoldKind::Simple, "\u{7247}"),
    (0x2F5B, FoldKind::Simple, "\u{7259}"), (0x2F5C, FoldKind::Simple, "\u{725B}"),
    (0x2F5D, FoldKind::Simple, "\u{72AC}"), (0x2F5E, FoldKind::Simple, "\u{7384}"),
    (0x2F5F, FoldKind::Simple, "\u{7389}"), (0x2F60, FoldKind::Simple, "\u{74DC}"),
    (0x2F61, FoldKind::Simple, "\u{74E6}"), (0x2F62, FoldKind::Simple, "\u{7518}"),
    (0x2F63, FoldKind::Simple, "\u{751F}"), (0x2F64, FoldKind::Simple, "\u{7528}"),
    (0x2F65, FoldKind::Simple, "\u{7530}"), (0x2F66, FoldKind::Simple, "\u{758B}"),
    (0x2F67, FoldKind::Simple, "\u{7592}"), (0x2F68, FoldKind::Simple, "\u{7676}"),
    (0x2F69, FoldKind::Simple, "\u{767D}"), (0x2F6A, FoldKind::Simple, "\u{76AE}"),
    (0x2F6B, FoldKind::Simple, "\u{76BF}"), (0x2F6C, FoldKind::Simple, "\u{76EE}"),
    (0x2F6D, FoldKind::Simple, "\u{77DB}"), (0x2F6E, FoldKind::Simple, "\u{77E2}"),
    (0x2F6F, FoldKind::Simple, "\u{77F3}"), (0x2F70, FoldKind::Simple, "\u{793A}"),
    (0x2F71, FoldKind::Simple, "\u{79B8}"), (0x2F72, FoldKind::Simple, "\u{79BE}"),
    (0x2F73, FoldKind::Simple, "\u{7A74}"), (0x2F74, FoldKind::Simple, "\u{7ACB}"),
    (0x2F75, FoldKind::Simple, "\u{7AF9}"), (0x2F76, FoldKind::Simple, "\u{7C73}"),
    (0x2F77, FoldKind::Simple, "\u{7CF8}"), (0x2F78, FoldKind::Simple, "\u{7F36}"),
    (0x2F79, FoldKind::Simple, "\u{7F51}"), (0x2F7A, FoldKind::Simple, "\u{7F8A}"),
    (0x2F7B, FoldKind::Simple, "\u{7FBD}"), (0x2F7C, FoldKind::Simple, "\u{8001}"),
    (0x2F7D, FoldKind::Simple, "\u{800C}"), (0x2F7E, FoldKind::Simple, "\u{8012}"),
    (0x2F7F, FoldKind::Simple, "\u{8033}"), (0x2F80, FoldKind::Simple, "\u{807F}"),
    (0x2F81, FoldKind::Simple, "\u{8089}"), (0x2F82, FoldKind::Simple, "\u{81E3}"),
    (0x2F83, FoldKind::Simple, "\u{81EA}"), (0x2F84, FoldKind::Simple, "\u{81F3}"),
    (0x2F85, FoldKind::Simple, "\u{81FC}"), (0x2F86, FoldKind::Simple, "\u{820C}"),
    (0x2F87, FoldKind::Simple, "\u{821B}"), (0x2F88, FoldKind::Simple, "\u{821F}"),
    (0x2F89, FoldKind::Simple, "\u{826E}"), (0x2F8A, FoldKind::Simple, "\u{8272}"),
    (0x2F8B, FoldKind::Simple, "\u{8278}"), (0x2F8C, FoldKind::Simple, "\u{864D}"),
    (0x2F8D, FoldKind::Simple, "\u{866B}"), (0x2F8E, FoldKind::Simple, "\u{8840}"),
    (0x2F8F, FoldKind::Simple, "\u{884C}"), (0x2F90, FoldKind::Simple, "\u{8863}"),
    (0x2F91, FoldKind::Simple, "\u{897E}"), (0x2F92, FoldKind::Simple, "\u{898B}"),
    (0x2F93, FoldKind::Simple, "\u{89D2}"), (0x2F94, FoldKind::Simple, "\u{8A00}"),
    (0x2F95, FoldKind::Simple, "\u{8C37}"), (0x2F96, FoldKind::Simple, "\u{8C46}"),
    (0x2F97, FoldKind::Simple, "\u{8C55}"), (0x2F98, FoldKind::Simple, "\u{8C78}"),
    (0x2F99, FoldKind::Simple, "\u{8C9D}"), (0x2F9A, FoldKind::Simple, "\u{8D64}"),
    (0x2F9B, FoldKind::Simple, "\u{8D70}"), (0x2F9C, FoldKind::Simple, "\u{8DB3}"),
    (0x2F9D, FoldKind::Simple, "\u{8EAB}"), (0x2F9E, FoldKind::Simple, "\u{8ECA}"),
    (0x2F9F, FoldKind::Simple, "\u{8F9B}"), (0x2FA0, FoldKind::Simple, "\u{8FB0}"),
    (0x2FA1, FoldKind::Simple, "\u{8FB5}"), (0x2FA2, FoldKind::Simple, "\u{9091}"),
    (0x2FA3, FoldKind::Simple, "\u{9149}"), (0x2FA4, FoldKind::Simple, "\u{91C6}"),
    (0x2FA5, FoldKind::Simple, "\u{91CC}"), (0x2FA6, FoldKind::Simple, "\u{91D1}"),
    (0x2FA7, FoldKind::Simple, "\u{9577}"), (0x2FA8, FoldKind::Simple, "\u{9580}"),
    (0x2FA9, FoldKind::Simple, "\u{961C}"), (0x2FAA, FoldKind::Simple, "\u{96B6}"),
    (0x2FAB, FoldKind::Simple, "\u{96B9}"), (0x2FAC, FoldKind::Simple, "\u{96E8}"),
    (0x2FAD, FoldKind::Simple, "\u{9751}"), (0x2FAE, FoldKind::Simple, "\u{975E}"),
    (0x2FAF, FoldKind::Simple, "\u{9762}"), (0x2FB0, FoldKind::Simple, "\u{9769}"),
    (0x2FB1, FoldKind::Simple, "\u{97CB}"), (0x2FB2, FoldKind::Simple, "\u{97ED}"),
    (0x2FB3, FoldKind::Simple, "\u{97F3}"), (0x2FB4, FoldKind::Simple, "\u{9801}"),
    (0x2FB5, FoldKind::Simple, "\u{98A8}"), (0x2FB6, FoldKind::Simple, "\u{98DB}"),
    (0x2FB7, FoldKind::Simple, "\u{98DF}"), (0x2FB8, FoldKind::Simple, "\u{9996}"),
    (0x2FB9, FoldKind::Simple, "\u{9999}"), (0x2FBA, FoldKind::Simple, "\u{99AC}"),
    (0x2FBB, FoldKind::Simple, "\u{9AA8}"), (0x2FBC, FoldKind::Simple, "\u{9AD8}"),
    (0x2FBD, FoldKind::Simple, "\u{9ADF}"), (0x2FBE, FoldKind::Simple, "\u{9B25}"),
    (0x2FBF, FoldKind::Simple, "\u{9B2F}"), (0x2FC0, FoldKind::Simple, "\u{9B32}"),
    (0x2FC1, FoldKind::Simple, "\u{9B3C}"), (0x2FC2, FoldKind::Simple, "\u{9B5A}"),
    (0x2FC3, FoldKind::Simple, "\u{9CE5}"), (0x2FC4, FoldKind::Simple, "\u{9E75}"),
    (0x2FC5, FoldKind::Simple, "\u{9E7F}"), (0x2FC6, FoldKind::Simple, "\u{9EA5}"),
    (0x2FC7, FoldKind::Simple, "\u{9EBB}"), (0x2FC8, FoldKind::Simple, "\u{9EC3}"),
    (0x2FC9, FoldKind::Simple, "\u{9ECD}"), (0x2FCA, FoldKind::Simple, "\u{9ED1}"),
    (0x2FCB, FoldKind::Simple, "\u{9EF9}"), (0x2FCC, FoldKind::Simple, "\u{9EFD}"),
    (0x2FCD, FoldKind::Simple, "\u{9F0E}"), (0x2FCE, FoldKind::Simple, "\u{9F13}"),
    (0x2FCF, FoldKind::Simple, "\u{9F20}"), (0x2FD0, FoldKind::Simple, "\u{9F3B}"),
    (0x2FD1, FoldKind::Simple, "\u{9F4A}"), (0x2FD2, FoldKind::Simple, "\u{9F52}"),
    (0x2FD3, FoldKind::Simple, "\u{9F8D}"), (0x2FD4, FoldKind::Simple, "\u{9F9C}"),
    (0x2FD5, FoldKind::Simple, "\u{9FA0}"), (0x3000, FoldKind::Simple, " "),
    (0x3036, FoldKind::Simple, "\u{3012}"), (0x3038, FoldKind::Simple, "\u{5341}"),
    (0x3039, FoldKind::Simple, "\u{5344}"), (0x303A, FoldKind::Simple, "\u{5345}"),
    (0x304C, FoldKind::KanaVoiced, "\u{304B}\u{3099}"),
    (0x304E, FoldKind::KanaVoiced, "\u{304D}\u{3099}"),
    (0x3050, FoldKind::KanaVoiced, "\u{304F}\u{3099}"),
    (0x3052, FoldKind::KanaVoiced, "\u{3051}\u{3099}"),
    (0x3054, FoldKind::KanaVoiced, "\u{3053}\u{3099}"),
    (0x3056, FoldKind::KanaVoiced, "\u{3055}\u{3099}"),
    (0x3058, FoldKind::KanaVoiced, "\u{3057}\u{3099}"),
    (0x305A, FoldKind::KanaVoiced, "\u{3059}\u{3099}"),
    (0x305C, FoldKind::KanaVoiced, "\u{305B}\u{3099}"),
    (0x305E, FoldKind::KanaVoiced, "\u{305D}\u{3099}"),
    (0x3060, FoldKind::KanaVoiced, "\u{305F}\u{3099}"),
    (0x3062, FoldKind::KanaVoiced, "\u{3061}\u{3099}"),
    (0x3065, FoldKind::KanaVoiced, "\u{3064}\u{3099}"),
    (0x3067, FoldKind::KanaVoiced, "\u{3066}\u{3099}"),
    (0x3069, FoldKind::KanaVoiced, "\u{3068}\u{3099}"),
    (0x3070, FoldKind::KanaVoiced, "\u{306F}\u{3099}"),
    (0x3071, FoldKind::KanaVoiced, "\u{306F}\u{309A}"),
    (0x3073, FoldKind::KanaVoiced, "\u{3072}\u{3099}"),
    (0x3074, FoldKind::KanaVoiced, "\u{3072}\u{309A}"),
    (0x3076, FoldKind::KanaVoiced, "\u{3075}\u{3099}"),
    (0x3077, FoldKind::KanaVoiced, "\u{3075}\u{309A}"),
    (0x3079, FoldKind::KanaVoiced, "\u{3078}\u{3099}"),
    (0x307A, FoldKind::KanaVoiced, "\u{3078}\u{309A}"),
    (0x307C, FoldKind::KanaVoiced, "\u{307B}\u{3099}"),
    (0x307D, FoldKind::KanaVoiced, "\u{307B}\u{309A}"),
    (0x3094, FoldKind::KanaVoiced, "\u{3046}\u{3099}"), (0x309B, FoldKind::LetterMarks, " "),
    (0x309C, FoldKind::LetterMarks, " "), (0x309E, FoldKind::KanaVoiced, "\u{309D}\u{3099}"),
    (0x309F, FoldKind::Complex, "\u{3088}"), (0x30AC, FoldKind::KanaVoiced, "\u{30AB}\u{3099}"),
    (0x30AE, FoldKind::KanaVoiced, "\u{30AD}\u{3099}"),
    (0x30B0, FoldKind::KanaVoiced, "\u{30AF}\u{3099}"),
    (0x30B2, FoldKind::KanaVoiced, "\u{30B1}\u{3099}"),
    (0x30B4, FoldKind::KanaVoiced, "\u{30B3}\u{3099}"),
    (0x30B6, FoldKind::KanaVoiced, "\u{30B5}\u{3099}"),
    (0x30B8, FoldKind::KanaVoiced, "\u{30B7}\u{3099}"),
    (0x30BA, FoldKind::KanaVoiced, "\u{30B9}\u{3099}"),
    (0x30BC, FoldKind::KanaVoiced, "\u{30BB}\u{3099}"),
    (0x30BE, FoldKind::KanaVoiced, "\u{30BD}\u{3099}"),
    (0x30C0, FoldKind::KanaVoiced, "\u{30BF}\u{3099}"),
    (0x30C2, FoldKind::KanaVoiced, "\u{30C1}\u{3099}"),
    (0x30C5, FoldKind::KanaVoiced, "\u{30C4}\u{3099}"),
    (0x30C7, FoldKind::KanaVoiced, "\u{30C6}\u{3099}"),
    (0x30C9, FoldKind::KanaVoiced, "\u{30C8}\u{3099}"),
    (0x30D0, FoldKind::KanaVoiced, "\u{30CF}\u{3099}"),
    (0x30D1, FoldKind::KanaVoiced, "\u{30CF}\u{309A}"),
    (0x30D3, FoldKind::KanaVoiced, "\u{30D2}\u{3099}"),
    (0x30D4, FoldKind::KanaVoiced, "\u{30D2}\u{309A}"),
    (0x30D6, FoldKind::KanaVoiced, "\u{30D5}\u{3099}"),
    (0x30D7, FoldKind::KanaVoiced, "\u{30D5}\u{309A}"),
    (0x30D9, FoldKind::KanaVoiced, "\u{30D8}\u{3099}"),
    (0x30DA, FoldKind::KanaVoiced, "\u{30D8}\u{309A}"),
    (0x30DC, FoldKind::KanaVoiced, "\u{30DB}\u{3099}"),
    (0x30DD, FoldKind::KanaVoiced, "\u{30DB}\u{309A}"),
    (0x30F4, FoldKind::KanaVoiced, "\u{30A6}\u{3099}"),
    (0x30F7, FoldKind::KanaVoiced, "\u{30EF}\u{3099}"),
    (0x30F8, FoldKind::KanaVoiced, "\u{30F0}\u{3099}"),
    (0x30F9, FoldKind::KanaVoiced, "\u{30F1}\u{3099}"),
    (0x30FA, FoldKind::KanaVoiced, "\u{30F2}\u{3099}"),
    (0x30FE, FoldKind::KanaVoiced, "\u{30FD}\u{3099}"), (0x30FF, FoldKind::Complex, "\u{30B3}"),
    (0x3131, FoldKind::Simple, "\u{1100}"), (0x3132, FoldKind::Simple, "\u{1101}"),
    (0x3133, FoldKind::Simple, "\u{11AA}"), (0x3134, FoldKind::Simple, "\u{1102}"),
    (0x3135, FoldKind::Simple, "\u{11AC}"), (0x3136, FoldKind::Simple, "\u{11AD}"),
    (0x3137, FoldKind::Simple, "\u{1103}"), (0x3138, FoldKind::Simple, "\u{1104}"),
    (0x3139, FoldKind::Simple, "\u{1105}"), (0x313A, FoldKind::Simple, "\u{11B0}"),
    (0x313B, FoldKind::Simple, "\u{11B1}"), (0x313C, FoldKind::Simple, "\u{11B2}"),
    (0x313D, FoldKind::Simple, "\u{11B3}"), (0x313E, FoldKind::Simple, "\u{11B4}"),
    (0x313F, FoldKind::Simple, "\u{11B5}"), (0x3140, FoldKind::Simple, "\u{111A}"),
    (0x3141, FoldKind::Simple, "\u{1106}"), (0x3142, FoldKind::Simple, "\u{1107}"),
    (0x3143, FoldKind::Simple, "\u{1108}"), (0x3144, FoldKind::Simple, "\u{1121}"),
    (0x3145, FoldKind::Simple, "\u{1109}"), (0x3146, FoldKind::Simple, "\u{110A}"),
    (0x3147, FoldKind::Simple, "\u{110B}"), (0x3148, FoldKind::Simple, "\u{110C}"),
    (0x3149, FoldKind::Simple, "\u{110D}"), (0x314A, FoldKind::Simple, "\u{110E}"),
    (0x314B, FoldKind::Simple, "\u{110F}"), (0x314C, FoldKind::Simple, "\u{1110}"),
    (0x314D, FoldKind::Simple, "\u{1111}"), (0x314E, FoldKind::Simple, "\u{1112}"),
    (0x314F, FoldKind::Simple, "\u{1161}"), (0x3150, FoldKind::Simple, "\u{1162}"),
    (0x3151, FoldKind::Simple, "\u{1163}"), (0x3152, FoldKind::Simple, "\u{1164}"),
    (0x3153, FoldKind::Simple, "\u{1165}"), (0x3154, FoldKind::Simple, "\u{1166}"),
    (0x3155, FoldKind::Simple, "\u{1167}"), (0x3156, FoldKind::Simple, "\u{1168}"),
    (0x3157, FoldKind::Simple, "\u{1169}"), (0x3158, FoldKind::Simple, "\u{116A}"),
    (0x3159, FoldKind::Simple, "\u{116B}"), (0x315A, FoldKind::Simple, "\u{116C}"),
    (0x315B, FoldKind::Simple, "\u{116D}"), (0x315C, FoldKind::Simple, "\u{116E}"),
    (0x315D, FoldKind::Simple, "\u{116F}"), (0x315E, FoldKind::Simple, "\u{1170}"),
    (0x315F, FoldKind::Simple, "\u{1171}"), (0x3160, FoldKind::Simple, "\u{1172}"),
    (0x3161, FoldKind::Simple, "\u{1173}"), (0x3162, FoldKind::Simple, "\u{1174}"),
    (0x3163, FoldKind::Simple, "\u{1175}"), (0x3164, FoldKind::Simple, "\u{1160}"),
    (0x3165, FoldKind::Simple, "\u{1114}"), (0x3166, FoldKind::Simple, "\u{1115}"),
    (0x3167, FoldKind::Simple, "\u{11C7}"), (0x3168, FoldKind::Simple, "\u{11C8}"),
    (0x3169, FoldKind::Simple, "\u{11CC}"), (0x316A, FoldKind::Simple, "\u{11CE}"),
    (0x316B, FoldKind::Simple, "\u{11D3}"), (0x316C, FoldKind::Simple, "\u{11D7}"),
    (0x316D, FoldKind::Simple, "\u{11D9}"), (0x316E, FoldKind::Simple, "\u{111C}"),
    (0x316F, FoldKind::Simple, "\u{11DD}"), (0x3170, FoldKind::Simple, "\u{11DF}"),
    (0x3171, FoldKind::Simple, "\u{111D}"), (0x3172, FoldKind::Simple, "\u{111E}"),
    (0x3173, FoldKind::Simple, "\u{1120}"), (0x3174, FoldKind::Simple, "\u{1122}"),
    (0x3175, FoldKind::Simple, "\u{1123}"), (0x3176, FoldKind::Simple, "\u{1127}"),
    (0x3177, FoldKind::Simple, "\u{1129}"), (0x3178, FoldKind::Simple, "\u{112B}"),
    (0x3179, FoldKind::Simple, "\u{112C}"), (0x317A, FoldKind::Simple, "\u{112D}"),
    (0x317B, FoldKind::Simple, "\u{112E}"), (0x317C, FoldKind::Simple, "\u{112F}"),
    (0x317D, FoldKind::Simple, "\u{1132}"), (0x317E, FoldKind::Simple, "\u{1136}"),
    (0x317F, FoldKind::Simple, "\u{1140}"), (0x3180, FoldKind::Simple, "\u{1147}"),
    (0x3181, FoldKind::Simple, "\u{114C}"), (0x3182, FoldKind::Simple, "\u{11F1}"),
    (0x3183, FoldKind::Simple, "\u{11F2}"), (0x3184, FoldKind::Simple, "\u{1157}"),
    (0x3185, FoldKind::Simple, "\u{1158}"), (0x3186, FoldKind::Simple, "\u{1159}"),
    (0x3187, FoldKind::Simple, "\u{1184}"), (0x3188, FoldKind::Simple, "\u{1185}"),
    (0x3189, FoldKind::Simple, "\u{1188}"), (0x318A, FoldKind::Simple, "\u{1191}"),
    (0x318B, FoldKind::Simple, "\u{1192}"), (0x318C, FoldKind::Simple, "\u{1194}"),
    (0x318D, FoldKind::Simple, "\u{119E}"), (0x318E, FoldKind::Simple, "\u{11A1}"),
    (0x3192, FoldKind::Simple, "\u{4E00}"), (0x3193, FoldKind::Simple, "\u{4E8C}"),
    (0x3194, FoldKind::Simple, "\u{4E09}"), (0x3195, FoldKind::Simple, "\u{56DB}"),
    (0x3196, FoldKind::Simple, "\u{4E0A}"), (0x3197, FoldKind::Simple, "\u{4E2D}"),
    (0x3198, FoldKind::Simple, "\u{4E0B}"), (0x3199, FoldKind::Simple, "\u{7532}"),
    (0x319A, FoldKind::Simple, "\u{4E59}"), (0x319B, FoldKind::Simple, "\u{4E19}"),
    (0x319C, FoldKind::Simple, "\u{4E01}"), (0x319D, FoldKind::Simple, "\u{5929}"),
    (0x319E, FoldKind::Simple, "\u{5730}"), (0x319F, FoldKind::Simple, "\u{4EBA}"),
    (0x3200, FoldKind::Complex, "("), (0x3201, FoldKind::Complex, "("),
    (0x3202, FoldKind::Complex, "("), (0x3203, FoldKind::Complex, "("),
    (0x3204, FoldKind::Complex, "("), (0x3205, FoldKind::Complex, "("),
    (0x3206, FoldKind::Complex, "("), (0x3207, FoldKind::Complex, "("),
    (0x3208, FoldKind::Complex, "("), (0x3209, FoldKind::Complex, "("),
    (0x320A, FoldKind::Complex, "("), (0x320B, FoldKind::Complex, "("),
    (0x320C, FoldKind::Complex, "("), (0x320D, FoldKind::Complex, "("),
    (0x320E, FoldKind::Complex, "("), (0x320F, FoldKind::Complex, "("),
    (0x3210, FoldKind::Complex, "("), (0x3211, FoldKind::Complex, "("),
    (0x3212, FoldKind::Complex, "("), (0x3213, FoldKind::Complex, "("),
    (0x3214, FoldKind::Complex, "("), (0x3215, FoldKind::Complex, "("),
    (0x3216, FoldKind::Complex, "("), (0x3217, FoldKind::Complex, "("),
    (0x3218, FoldKind::Complex, "("), (0x3219, FoldKind::Complex, "("),
    (0x321A, FoldKind::Complex, "("), (0x321B, FoldKind::Complex, "("),
    (0x321C, FoldKind::Complex, "("), (0x321D, FoldKind::Complex, "("),
    (0x321E, FoldKind::Complex, "("), (0x3220, FoldKind::Complex, "("),
    (0x3221, FoldKind::Complex, "("), (0x3222, FoldKind::Complex, "("),
    (0x3223, FoldKind::Complex, "("), (0x3224, FoldKind::Complex, "("),
    (0x3225, FoldKind::Complex, "("), (0x3226, FoldKind::Complex, "("),
    (0x3227, FoldKind::Complex, "("), (0x3228, FoldKind::Complex, "("),
    (0x3229, FoldKind::Complex, "("), (0x322A, FoldKind::Complex, "("),
    (0x322B, FoldKind::Complex, "("), (0x322C, FoldKind::Complex, "("),
    (0x322D, FoldKind::Complex, "("), (0x322E, FoldKind::Complex, "("),
    (0x322F, FoldKind::Complex, "("), (0x3230, FoldKind::Complex, "("),
    (0x3231, FoldKind::Complex, "("), (0x3232, FoldKind::Complex, "("),
    (0x3233, FoldKind::Complex, "("), (0x3234, FoldKind::Complex, "("),
    (0x3235, FoldKind::Complex, "("), (0x3236, FoldKind::Complex, "("),
    (0x3237, FoldKind::Complex, "("), (0x3238, FoldKind::Complex, "("),
    (0x3239, FoldKind::Complex, "("), (0x323A, FoldKind::Complex, "("),
    (0x323B, FoldKind::Complex, "("), (0x323C, FoldKind::Complex, "("),
    (0x323D, FoldKind::Complex, "("), (0x323E, FoldKind::Complex, "("),
    (0x323F, FoldKind::Complex, "("), (0x3240, FoldKind::Complex, "("),
    (0x3241, FoldKind::Complex, "("), (0x3242, FoldKind::Complex, "("),
    (0x3243, FoldKind::Complex, "("), (0x3244, FoldKind::Simple, "\u{554F}"),
    (0x3245, FoldKind::Simple, "\u{5E7C}"), (0x3246, FoldKind::Simple, "\u{6587}"),
    (0x3247, FoldKind::Simple, "\u{7B8F}"), (0x3250, FoldKind::Complex, "P"),
    (0x3251, FoldKind::Complex, "2"), (0x3252, FoldKind::Complex, "2"),
    (0x3253, FoldKind::Complex, "2"), (0x3254, FoldKind::Complex, "2"),
    (0x3255, FoldKind::Complex, "2"), (0x3256, FoldKind::Complex, "2"),
    (0x3257, FoldKind::Complex, "2"), (0x3258, FoldKind::Complex, "2"),
    (0x3259, FoldKind::Complex, "2"), (0x325A, FoldKind::Complex, "3"),
    (0x325B, FoldKind::Complex, "3"), (0x325C, FoldKind::Complex, "3"),
    (0x325D, FoldKind::Complex, "3"), (0x325E, FoldKind::Complex, "3"),
    (0x325F, FoldKind::Complex, "3"), (0x3260, FoldKind::Simple, "\u{1100}"),
    (0x3261, FoldKind::Simple, "\u{1102}"), (0x3262, FoldKind::Simple, "\u{1103}"),
    (0x3263, FoldKind::Simple, "\u{1105}"), (0x3264, FoldKind::Simple, "\u{1106}"),
    (0x3265, FoldKind::Simple, "\u{1107}"), (0x3266, FoldKind::Simple, "\u{1109}"),
    (0x3267, FoldKind::Simple, "\u{110B}"), (0x3268, FoldKind::Simple, "\u{110C}"),
    (0x3269, FoldKind::Simple, "\u{110E}"), (0x326A, FoldKind::Simple, "\u{110F}"),
    (0x326B, FoldKind::Simple, "\u{1110}"), (0x326C, FoldKind::Simple, "\u{1111}"),
    (0x326D, FoldKind::Simple, "\u{1112}"), (0x326E, FoldKind::Complex, "\u{1100}"),
    (0x326F, FoldKind::Complex, "\u{1102}"), (0x3270, FoldKind::Complex, "\u{1103}"),
    (0x3271, FoldKind::Complex, "\u{1105}"), (0x3272, FoldKind::Complex, "\u{1106}"),
    (0x3273, FoldKind::Complex, "\u{1107}"), (0x3274, FoldKind::Complex, "\u{1109}"),
    (0x3275, FoldKind::Complex, "\u{110B}"), (0x3276, FoldKind::Complex, "\u{110C}"),
    (0x3277, FoldKind::Complex, "\u{110E}"), (0x3278, FoldKind::Complex, "\u{110F}"),
    (0x3279, FoldKind::Complex, "\u{1110}"), (0x327A, FoldKind::Complex, "\u{1111}"),
    (0x327B, FoldKind::Complex, "\u{1112}"), (0x327C, FoldKind::Complex, "\u{110E}"),
    (0x327D, FoldKind::Complex, "\u{110C}"), (0x327E, FoldKind::Complex, "\u{110B}"),
    (0x3280, FoldKind::Simple, "\u{4E00}"), (0x3281, FoldKind::Simple, "\u{4E8C}"),
    (0x3282, FoldKind::Simple, "\u{4E09}"), (0x3283, FoldKind::Simple, "\u{56DB}"),
    (0x3284, FoldKind::Simple, "\u{4E94}"), (0x3285, FoldKind::Simple, "\u{516D}"),
    (0x3286, FoldKind::Simple, "\u{4E03}"), (0x3287, FoldKind::Simple, "\u{516B}"),
    (0x3288, FoldKind::Simple, "\u{4E5D}"), (0x3289, FoldKind::Simple, "\u{5341}"),
    (0x328A, FoldKind::Simple, "\u{6708}"), (0x328B, FoldKind::Simple, "\u{706B}"),
    (0x328C, FoldKind::Simple, "\u{6C34}"), (0x328D, FoldKind::Simple, "\u{6728}"),
    (0x328E, FoldKind::Simple, "\u{91D1}"), (0x328F, FoldKind::Simple, "\u{571F}"),
    (0x3290, FoldKind::Simple, "\u{65E5}"), (0x3291, FoldKind::Simple, "\u{682A}"),
    (0x3292, FoldKind::Simple, "\u{6709}"), (0x3293, FoldKind::Simple, "\u{793E}"),
    (0x3294, FoldKind::Simple, "\u{540D}"), (0x3295, FoldKind::Simple, "\u{7279}"),
    (0x3296, FoldKind::Simple, "\u{8CA1}"), (0x3297, FoldKind::Simple, "\u{795D}"),
    (0x3298, FoldKind::Simple, "\u{52B4}"), (0x3299, FoldKind::Simple, "\u{79D8}"),
    (0x329A, FoldKind::Simple, "\u{7537}"), (0x329B, FoldKind::Simple, "\u{5973}"),
    (0x329C, FoldKind::Simple, "\u{9069}"), (0x329D, FoldKind::Simple, "\u{512A}"),
    (0x329E, FoldKind::Simple, "\u{5370}"), (0x329F, FoldKind::Simple, "\u{6CE8}"),
    (0x32A0, FoldKind::Simple, "\u{9805}"), (0x32A1, FoldKind::Simple, "\u{4F11}"),
    (0x32A2, FoldKind::Simple, "\u{5199}"), (0x32A3, FoldKind::Simple, "\u{6B63}"),
    (0x32A4, FoldKind::Simple, "\u{4E0A}"), (0x32A5, FoldKind::Simple, "\u{4E2D}"),
    (0x32A6, FoldKind::Simple, "\u{4E0B}"), (0x32A7, FoldKind::Simple, "\u{5DE6}"),
    (0x32A8, FoldKind::Simple, "\u{53F3}"), (0x32A9, FoldKind::Simple, "\u{533B}"),
    (0x32AA, FoldKind::Simple, "\u{5B97}"), (0x32AB, FoldKind::Simple, "\u{5B66}"),
    (0x32AC, FoldKind::Simple, "\u{76E3}"), (0x32AD, FoldKind::Simple, "\u{4F01}"),
    (0x32AE, FoldKind::Simple, "\u{8CC7}"), (0x32AF, FoldKind::Simple, "\u{5354}"),
    (0x32B0, FoldKind::Simple, "\u{591C}"), (0x32B1, FoldKind::Complex, "3"),
    (0x32B2, FoldKind::Complex, "3"), (0x32B3, FoldKind::Complex, "3"),
    (0x32B4, FoldKind::Complex, "3"), (0x32B5, FoldKind::Complex, "4"),
    (0x32B6, FoldKind::Complex, "4"), (0x32B7, FoldKind::Complex, "4"),
    (0x32B8, FoldKind::Complex, "4"), (0x32B9, FoldKind::Complex, "4"),
    (0x32BA, FoldKind::Complex, "4"), (0x32BB, FoldKind::Complex, "4"),
    (0x32BC, FoldKind::Complex, "4"), (0x32BD, FoldKind::Complex, "4"),
    (0x32BE, FoldKind::Complex, "4"), (0x32BF, FoldKind::Complex, "5"),
    (0x32C0, FoldKind::Complex, "1"), (0x32C1, FoldKind::Complex, "2"),
    (0x32C2, FoldKind::Complex, "3"), (0x32C3, FoldKind::Complex, "4"),
    (0x32C4, FoldKind::Complex, "5"), (0x32C5, FoldKind::Complex, "6"),
    (0x32C6, FoldKind::Complex, "7"), (0x32C7, FoldKind::Complex, "8"),
    (0x32C8, FoldKind::Complex, "9"), (0x32C9, FoldKind::Complex, "1"),
    (0x32CA, FoldKind::Complex, "1"), (0x32CB, FoldKind::Complex, "1"),
    (0x32CC, FoldKind::Complex, "H"), (0x32CD, FoldKind::Complex, "e"),
    (0x32CE, FoldKind::Complex, "e"), (0x32CF, FoldKind::Complex, "L"),
    (0x32D0, FoldKind::Simple, "\u{30A2}"), (0x32D1, FoldKind::Simple, "\u{30A4}"),
    (0x32D2, FoldKind::Simple, "\u{30A6}"), (0x32D3, FoldKind::Simple, "\u{30A8}"),
    (0x32D4, FoldKind::Simple, "\u{30AA}"), (0x32D5, FoldKind::Simple, "\u{30AB}"),
    (0x32D6, FoldKind::Simple, "\u{30AD}"), (0x32D7, FoldKind::Simple, "\u{30AF}"),
    (0x32D8, FoldKind::Simple, "\u{30B1}"), (0x32D9, FoldKind::Simple, "\u{30B3}"),
    (0x32DA, FoldKind::Simple, "\u{30B5}"), (0x32DB, FoldKind::Simple, "\u{30B7}"),
    (0x32DC, FoldKind::Simple, "\u{30B9}"), (0x32DD, FoldKind::Simple, "\u{30BB}"),
    (0x32DE, FoldKind::Simple, "\u{30BD}"), (0x32DF, FoldKind::Simple, "\u{30BF}"),
    (0x32E0, FoldKind::Simple, "\u{30C1}"), (0x32E1, FoldKind::Simple, "\u{30C4}"),
    (0x32E2, FoldKind::Simple, "\u{30C6}"), (0x32E3, FoldKind::Simple, "\u{30C8}"),
    (0x32E4, FoldKind::Simple, "\u{30CA}"), (0x32E5, FoldKind::Simple, "\u{30CB}"),
    (0x32E6, FoldKind::Simple, "\u{30CC}"), (0x32E7, FoldKind::Simple, "\u{30CD}"),
    (0x32E8, FoldKind::Simple, "\u{30CE}"), (0x32E9, FoldKind::Simple, "\u{30CF}"),
    (0x32EA, FoldKind::Simple, "\u{30D2}"), (0x32EB, FoldKind::Simple, "\u{30D5}"),
    (0x32EC, FoldKind::Simple, "\u{30D8}"), (0x32ED, FoldKind::Simple, "\u{30DB}"),
    (0x32EE, FoldKind::Simple, "\u{30DE}"), (0x32EF, FoldKind::Simple, "\u{30DF}"),
    (0x32F0, FoldKind::Simple, "\u{30E0}"), (0x32F1, FoldKind::Simple, "\u{30E1}"),
    (0x32F2, FoldKind::Simple, "\u{30E2}"), (0x32F3, FoldKind::Simple, "\u{30E4}"),
    (0x32F4, FoldKind::Simple, "\u{30E6}"), (0x32F5, FoldKind::Simple, "\u{30E8}"),
    (0x32F6, FoldKind::Simple, "\u{30E9}"), (0x32F7, FoldKind::Simple, "\u{30EA}"),
    (0x32F8, FoldKind::Simple, "\u{30EB}"), (0x32F9, FoldKind::Simple, "\u{30EC}"),
    (0x32FA, FoldKind::Simple, "\u{30ED}"), (0x32FB, FoldKind::Simple, "\u{30EF}"),
    (0x32FC, FoldKind::Simple, "\u{30F0}"), (0x32FD, FoldKind::Simple, "\u{30F1}"),
    (0x32FE, FoldKind::Simple, "\u{30F2}"), (0x32FF, FoldKind::Complex, "\u{4EE4}"),
    (0x3300, FoldKind::Complex, "\u{30A2}"), (0x3301, FoldKind::Complex, "\u{30A2}"),
    (0x3302, FoldKind::Complex, "\u{30A2}"), (0x3303, FoldKind::Complex, "\u{30A2}"),
    (0x3304, FoldKind::Complex, "\u{30A4}"), (0x3305, FoldKind::Complex, "\u{30A4}"),
    (0x3306, FoldKind::Complex, "\u{30A6}"), (0x3307, FoldKind::Complex, "\u{30A8}"),
    (0x3308, FoldKind::Complex, "\u{30A8}"), (0x3309, FoldKind::Complex, "\u{30AA}"),
    (0x330A, FoldKind::Complex, "\u{30AA}"), (0x330B, FoldKind::Complex, "\u{30AB}"),
    (0x330C, FoldKind::Complex, "\u{30AB}"), (0x330D, FoldKind::Complex, "\u{30AB}"),
    (0x330E, FoldKind::Complex, "\u{30AB}"), (0x330F, FoldKind::Complex, "\u{30AB}"),
    (0x3310, FoldKind::Complex, "\u{30AD}"), (0x3311, FoldKind::Complex, "\u{30AD}"),
    (0x3312, FoldKind::Complex, "\u{30AD}"), (0x3313, FoldKind::Complex, "\u{30AD}"),
    (0x3314, FoldKind::Complex, "\u{30AD}"), (0x3315, FoldKind::Complex, "\u{30AD}"),
    (0x3316, FoldKind::Complex, "\u{30AD}"), (0x3317, FoldKind::Complex, "\u{30AD}"),
    (0x3318, FoldKind::Complex, "\u{30AF}"), (0x3319, FoldKind::Complex, "\u{30AF}"),
    (0x331A, FoldKind::Complex, "\u{30AF}"), (0x331B, FoldKind::Complex, "\u{30AF}"),
    (0x331C, FoldKind::Complex, "\u{30B1}"), (0x331D, FoldKind::Complex, "\u{30B3}"),
    (0x331E, FoldKind::Complex, "\u{30B3}"), (0x331F, FoldKind::Complex, "\u{30B5}"),
    (0x3320, FoldKind::Complex, "\u{30B5}"), (0x3321, FoldKind::Complex, "\u{30B7}"),
    (0x3322, FoldKind::Complex, "\u{30BB}"), (0x3323, FoldKind::Complex, "\u{30BB}"),
    (0x3324, FoldKind::Complex, "\u{30BF}"), (0x3325, FoldKind::Complex, "\u{30C6}"),
    (0x3326, FoldKind::Complex, "\u{30C8}"), (0x3327, FoldKind::Complex, "\u{30C8}"),
    (0x3328, FoldKind::Complex, "\u{30CA}"), (0x3329, FoldKind::Complex, "\u{30CE}"),
    (0x332A, FoldKind::Complex, "\u{30CF}"), (0x332B, FoldKind::Complex, "\u{30CF}"),
    (0x332C, FoldKind::Complex, "\u{30CF}"), (0x332D, FoldKind::Complex, "\u{30CF}"),
    (0x332E, FoldKind::Complex, "\u{30D2}"), (0x332F, FoldKind::Complex, "\u{30D2}"),
    (0x3330, FoldKind::Complex, "\u{30D2}"), (0x3331, FoldKind::Complex, "\u{30D2}"),
    (0x3332, FoldKind::Complex, "\u{30D5}"), (0x3333, FoldKind::Complex, "\u{30D5}"),
    (0x3334, FoldKind::Complex, "\u{30D5}"), (0x3335, FoldKind::Complex, "\u{30D5}"),
    (0x3336, FoldKind::Complex, "\u{30D8}"), (0x3337, FoldKind::Complex, "\u{30D8}"),
    (0x3338, FoldKind::Complex, "\u{30D8}"), (0x3339, FoldKind::Complex, "\u{30D8}"),
    (0x333A, FoldKind::Complex, "\u{30D8}"), (0x333B, FoldKind::Complex, "\u{30D8}"),
    (0x333C, FoldKind::Complex, "\u{30D8}"), (0x333D, FoldKind::Complex, "\u{30DB}"),
    (0x333E, FoldKind::Complex, "\u{30DB}"), (0x333F, FoldKind::Complex, "\u{30DB}"),
    (0x3340, FoldKind::Complex, "\u{30DB}"), (0x3341, FoldKind::Complex, "\u{30DB}"),
    (0x3342, FoldKind::Complex, "\u{30DB}"), (0x3343, FoldKind::Complex, "\u{30DE}"),
    (0x3344, FoldKind::Complex, "\u{30DE}"), (0x3345, FoldKind::Complex, "\u{30DE}"),
    (0x3346, FoldKind::Complex, "\u{30DE}"), (0x3347, FoldKind::Complex, "\u{30DE}"),
    (0x3348, FoldKind::Complex, "\u{30DF}"), (0x3349, FoldKind::Complex, "\u{30DF}"),
    (0x334A, FoldKind::Complex, "\u{30DF}"), (0x334B, FoldKind::Complex, "\u{30E1}"),
    (0x334C, FoldKind::Complex, "\u{30E1}"), (0x334D, FoldKind::Complex, "\u{30E1}"),
    (0x334E, FoldKind::Complex, "\u{30E4}"), (0x334F, FoldKind::Complex, "\u{30E4}"),
    (0x3350, FoldKind::Complex, "\u{30E6}"), (0x3351, FoldKind::Complex, "\u{30EA}"),
    (0x3352, FoldKind::Complex, "\u{30EA}"), (0x3353, FoldKind::Complex, "\u{30EB}"),
    (0x3354, FoldKind::Complex, "\u{30EB}"), (0x3355, FoldKind::Complex, "\u{30EC}"),
    (0x3356, FoldKind::Complex, "\u{30EC}"), (0x3357, FoldKind::Complex, "\u{30EF}"),
    (0x3358, FoldKind::Complex, "0"), (0x3359, FoldKind::Complex, "1"),
    (0x335A, FoldKind::Complex, "2"), (0x335B, FoldKind::Complex, "3"),
    (0x335C, FoldKind::Complex, "4"), (0x335D, FoldKind::Complex, "5"),
    (0x335E, FoldKind::Complex, "6"), (0x335F, FoldKind::Complex, "7"),
    (0x3360, FoldKind::Complex, "8"), (0x3361, FoldKind::Complex, "9"),
    (0x3362, FoldKind::Complex, "1"), (0x3363, FoldKind::Complex, "1"),
    (0x3364, FoldKind::Complex, "1"), (0x3365, FoldKind::Complex, "1"),
    (0x3366, FoldKind::Complex, "1"), (0x3367, FoldKind::Complex, "1"),
    (0x3368, FoldKind::Complex, "1"), (0x3369, FoldKind::Complex, "1"),
    (0x336A, FoldKind::Complex, "1"), (0x336B, FoldKind::Complex, "1"),
    (0x336C, FoldKind::Complex, "2"), (0x336D, FoldKind::Complex, "2"),
    (0x336E, FoldKind::Complex, "2"), (0x336F, FoldKind::Complex, "2"),
    (0x3370, FoldKind::Complex, "2"), (0x3371, FoldKind::Complex, "h"),
    (0x3372, FoldKind::Complex, "d"), (0x3373, FoldKind::Complex, "A"),
    (0x3374, FoldKind::Complex, "b"), (0x3375, FoldKind::Complex, "o"),
    (0x3376, FoldKind::Complex, "p"), (0x3377, FoldKind::Complex, "d"),
    (0x3378, FoldKind::Complex, "d"), (0x3379, FoldKind::Complex, "d"),
    (0x337A, FoldKind::Complex, "I"), (0x337B, FoldKind::Complex, "\u{5E73}"),
    (0x337C, FoldKind::Complex, "\u{662D}"), (0x337D, FoldKind::Complex, "\u{5927}"),
    (0x337E, FoldKind::Complex, "\u{660E}"), (0x337F, FoldKind::Complex, "\u{682A}"),
    (0x3380, FoldKind::Complex, "p"), (0x3381, FoldKind::Complex, "n"),
    (0x3382, FoldKind::Complex, "\u{3BC}"), (0x3383, FoldKind::Complex, "m"),
    (0x3384, FoldKind::Complex, "k"), (0x3385, FoldKind::Complex, "K"),
    (0x3386, FoldKind::Complex, "M"), (0x3387, FoldKind::Complex, "G"),
    (0x3388, FoldKind::Complex, "c"), (0x3389, FoldKind::Complex, "k"),
    (0x338A, FoldKind::Complex, "p"), (0x338B, FoldKind::Complex, "n"),
    (0x338C, FoldKind::Complex, "\u{3BC}"), (0x338D, FoldKind::Complex, "\u{3BC}"),
    (0x338E, FoldKind::Complex, "m"), (0x338F, FoldKind::Complex, "k"),
    (0x3390, FoldKind::Complex, "H"), (0x3391, FoldKind::Complex, "k"),
    (0x3392, FoldKind::Complex, "M"), (0x3393, FoldKind::Complex, "G"),
    (0x3394, FoldKind::Complex, "T"), (0x3395, FoldKind::Complex, "\u{3BC}"),
    (0x3396, FoldKind::Complex, "m"), (0x3397, FoldKind::Complex, "d"),
    (0x3398, FoldKind::Complex, "k"), (0x3399, FoldKind::Complex, "f"),
    (0x339A, FoldKind::Complex, "n"), (0x339B, FoldKind::Complex, "\u{3BC}"),
    (0x339C, FoldKind::Complex, "m"), (0x339D, FoldKind::Complex, "c"),
    (0x339E, FoldKind::Complex, "k"), (0x339F, FoldKind::Complex, "m"),
    (0x33A0, FoldKind::Complex, "c"), (0x33A1, FoldKind::Complex, "m"),
    (0x33A2, FoldKind::Complex, "k"), (0x33A3, FoldKind::Complex, "m"),
    (0x33A4, FoldKind::Complex, "c"), (0x33A5, FoldKind::Complex, "m"),
    (0x33A6, FoldKind::Complex, "k"), (0x33A7, FoldKind::Complex, "m"),
    (0x33A8, FoldKind::Complex, "m"), (0x33A9, FoldKind::Complex, "P"),
    (0x33AA, FoldKind::Complex, "k"), (0x33AB, FoldKind::Complex, "M"),
    (0x33AC, FoldKind::Complex, "G"), (0x33AD, FoldKind::Complex, "r"),
    (0x33AE, FoldKind::Complex, "r"), (0x33AF, FoldKind::Complex, "r"),
    (0x33B0, FoldKind::Complex, "p"), (0x33B1, FoldKind::Complex, "n"),
    (0x33B2, FoldKind::Complex, "\u{3BC}"), (0x33B3, FoldKind::Complex, "m"),
    (0x33B4, FoldKind::Complex, "p"), (0x33B5, FoldKind::Complex, "n"),
    (0x33B6, FoldKind::Complex, "\u{3BC}"), (0x33B7, FoldKind::Complex, "m"),
    (0x33B8, FoldKind::Complex, "k"), (0x33B9, FoldKind::Complex, "M"),
    (0x33BA, FoldKind::Complex, "p"), (0x33BB, FoldKind::Complex, "n"),
    (0x33BC, FoldKind::Complex, "\u{3BC}"), (0x33BD, FoldKind::Complex, "m"),
    (0x33BE, FoldKind::Complex, "k"), (0x33BF, FoldKind::Complex, "M"),
    (0x33C0, FoldKind::Complex, "k"), (0x33C1, FoldKind::Complex, "M"),
    (0x33C2, FoldKind::Complex, "a"), (0x33C3, FoldKind::Complex, "B"),
    (0x33C4, FoldKind::Complex, "c"), (0x33C5, FoldKind::Complex, "c"),
    (0x33C6, FoldKind::Complex, "C"), (0x33C7, FoldKind::Complex, "C"),
    (0x33C8, FoldKind::Complex, "d"), (0x33C9, FoldKind::Complex, "G"),
    (0x33CA, FoldKind::Complex, "h"), (0x33CB, FoldKind::Complex, "H"),
    (0x33CC, FoldKind::Complex, "i"), (0x33CD, FoldKind::Complex, "K"),
    (0x33CE, FoldKind::Complex, "K"), (0x33CF, FoldKind::Complex, "k"),
    (0x33D0, FoldKind::Complex, "l"), (0x33D1, FoldKind::Complex, "l"),
    (0x33D2, FoldKind::Complex, "l"), (0x33D3, FoldKind::Complex, "l"),
    (0x33D4, FoldKind::Complex, "m"), (0x33D5, FoldKind::Complex, "m"),
    (0x33D6, FoldKind::Complex, "m"), (0x33D7, FoldKind::Complex, "P"),
    (0x33D8, FoldKind::Complex, "p"), (0x33D9, FoldKind::Complex, "P"),
    (0x33DA, FoldKind::Complex, "P"), (0x33DB, FoldKind::Complex, "s"),
    (0x33DC, FoldKind::Complex, "S"), (0x33DD, FoldKind::Complex, "W"),
    (0x33DE, FoldKind::Complex, "V"), (0x33DF, FoldKind::Complex, "A"),
    (0x33E0, FoldKind::Complex, "1"), (0x33E1, FoldKind::Complex, "2"),
    (0x33E2, FoldKind::Complex, "3"), (0x33E3, FoldKind::Complex, "4"),
    (0x33E4, FoldKind::Complex, "5"), (0x33E5, FoldKind::Complex, "6"),
    (0x33E6, FoldKind::Complex, "7"), (0x33E7, FoldKind::Complex, "8"),
    (0x33E8, FoldKind::Complex, "9"), (0x33E9, FoldKind::Complex, "1"),
    (0x33EA, FoldKind::Complex, "1"), (0x33EB, FoldKind::Complex, "1"),
    (0x33EC, FoldKind::Complex, "1"), (0x33ED, FoldKind::Complex, "1"),
    (0x33EE, FoldKind::Complex, "1"), (0x33EF, FoldKind::Complex, "1"),
    (0x33F0, FoldKind::Complex, "1"), (0x33F1, FoldKind::Complex, "1"),
    (0x33F2, FoldKind::Complex, "1"), (0x33F3, FoldKind::Complex, "2"),
    (0x33F4, FoldKind::Complex, "2"), (0x33F5, FoldKind::Complex, "2"),
    (0x33F6, FoldKind::Complex, "2"), (0x33F7, FoldKind::Complex, "2"),
    (0x33F8, FoldKind::Complex, "2"), (0x33F9, FoldKind::Complex, "2"),
    (0x33FA, FoldKind::Complex, "2"), (0x33FB, FoldKind::Complex, "2"),
    (0x33FC, FoldKind::Complex, "2"), (0x33FD, FoldKind::Complex, "3"),
    (0x33FE, FoldKind::Complex, "3"), (0x33FF, FoldKind::Complex, "g"),
    (0xA69C, FoldKind::Simple, "\u{44A}"), (0xA69D, FoldKind::Simple, "\u{44C}"),
    (0xA770, FoldKind::Simple, "\u{A76F}"), (0xA7F2, FoldKind::Simple, "C"),
    (0xA7F3, FoldKind::Simple, "F"), (0xA7F4, FoldKind::Simple, "Q"),
    (0xA7F8, FoldKind::Simple, "\u{126}"), (0xA7F9, FoldKind::Simple, "\u{153}"),
    (0xAB5C, FoldKind::Simple, "\u{A727}"), (0xAB5D, FoldKind::Simple, "\u{AB37}"),
    (0xAB5E, FoldKind::Simple, "\u{26B}"), (0xAB5F, FoldKind::Simple, "\u{AB52}"),
    (0xAB69, FoldKind::Simple, "\u{28D}"), (0xF900, FoldKind::Simple, "\u{8C48}"),
    (0xF901, FoldKind::Simple, "\u{66F4}"), (0xF902, FoldKind::Simple, "\u{8ECA}"),
    (0xF903, FoldKind::Simple, "\u{8CC8}"), (0xF904, FoldKind::Simple, "\u{6ED1}"),
    (0xF905, FoldKind::Simple, "\u{4E32}"), (0xF906, FoldKind::Simple, "\u{53E5}"),
    (0xF907, FoldKind::Simple, "\u{9F9C}"), (0xF908, FoldKind::Simple, "\u{9F9C}"),
    (0xF909, FoldKind::Simple, "\u{5951}"), (0xF90A, FoldKind::Simple, "\u{91D1}"),
    (0xF90B, FoldKind::Simple, "\u{5587}"), (0xF90C, FoldKind::Simple, "\u{5948}"),
    (0xF90D, FoldKind::Simple, "\u{61F6}"), (0xF90E, FoldKind::Simple, "\u{7669}"),
    (0xF90F, FoldKind::Simple, "\u{7F85}"), (0xF910, FoldKind::Simple, "\u{863F}"),
    (0xF911, FoldKind::Simple, "\u{87BA}"), (0xF912, FoldKind::Simple, "\u{88F8}"),
    (0xF913, FoldKind::Simple, "\u{908F}"), (0xF914, FoldKind::Simple, "\u{6A02}"),
    (0xF915, FoldKind::Simple, "\u{6D1B}"), (0xF916, FoldKind::Simple, "\u{70D9}"),
    (0xF917, FoldKind::Simple, "\u{73DE}"), (0xF918, FoldKind::Simple, "\u{843D}"),
    (0xF919, FoldKind::Simple, "\u{916A}"), (0xF91A, FoldKind::Simple, "\u{99F1}"),
    (0xF91B, FoldKind::Simple, "\u{4E82}"), (0xF91C, FoldKind::Simple, "\u{5375}"),
    (0xF91D, FoldKind::Simple, "\u{6B04}"), (0xF91E, FoldKind::Simple, "\u{721B}"),
    (0xF91F, FoldKind::Simple, "\u{862D}"), (0xF920, FoldKind::Simple, "\u{9E1E}"),
    (0xF921, FoldKind::Simple, "\u{5D50}"), (0xF922, FoldKind::Simple, "\u{6FEB}"),
    (0xF923, FoldKind::Simple, "\u{85CD}"), (0xF924, FoldKind::Simple, "\u{8964}"),
    (0xF925, FoldKind::Simple, "\u{62C9}"), (0xF926, FoldKind::Simple, "\u{81D8}"),
    (0xF927, FoldKind::Simple, "\u{881F}"), (0xF928, FoldKind::Simple, "\u{5ECA}"),
    (0xF929, FoldKind::Simple, "\u{6717}"), (0xF92A, FoldKind::Simple, "\u{6D6A}"),
    (0xF92B, FoldKind::Simple, "\u{72FC}"), (0xF92C, FoldKind::Simple, "\u{90CE}"),
    (0xF92D, FoldKind::Simple, "\u{4F86}"), (0xF92E, FoldKind::Simple, "\u{51B7}"),
    (0xF92F, FoldKind::Simple, "\u{52DE}"), (0xF930, FoldKind::Simple, "\u{64C4}"),
    (0xF931, FoldKind::Simple, "\u{6AD3}"), (0xF932, FoldKind::Simple, "\u{7210}"),
    (0xF933, FoldKind::Simple, "\u{76E7}"), (0xF934, FoldKind::Simple, "\u{8001}"),
    (0xF935, FoldKind::Simple, "\u{8606}"), (0xF936, FoldKind::Simple, "\u{865C}"),
    (0xF937, FoldKind::Simple, "\u{8DEF}"), (0xF938, FoldKind::Simple, "\u{9732}"),
    (0xF939, FoldKind::Simple, "\u{9B6F}"), (0xF93A, FoldKind::Simple, "\u{9DFA}"),
    (0xF93B, FoldKind::Simple, "\u{788C}"), (0xF93C, FoldKind::Simple, "\u{797F}"),
    (0xF93D, FoldKind::Simple, "\u{7DA0}"), (0xF93E, FoldKind::Simple, "\u{83C9}"),
    (0xF93F, FoldKind::Simple, "\u{9304}"), (0xF940, FoldKind::Simple, "\u{9E7F}"),
    (0xF941, FoldKind::Simple, "\u{8AD6}"), (0xF942, FoldKind::Simple, "\u{58DF}"),
    (0xF943, FoldKind::Simple, "\u{5F04}"), (0xF944, FoldKind::Simple, "\u{7C60}"),
    (0xF945, FoldKind::Simple, "\u{807E}"), (0xF946, FoldKind::Simple, "\u{7262}"),
    (0xF947, FoldKind::Simple, "\u{78CA}"), (0xF948, FoldKind::Simple, "\u{8CC2}"),
    (0xF949, FoldKind::Simple, "\u{96F7}"), (0xF94A, FoldKind::Simple, "\u{58D8}"),
    (0xF94B, FoldKind::Simple, "\u{5C62}"), (0xF94C, FoldKind::Simple, "\u{6A13}"),
    (0xF94D, FoldKind::Simple, "\u{6DDA}"), (0xF94E, FoldKind::Simple, "\u{6F0F}"),
    (0xF94F, FoldKind::Simple, "\u{7D2F}"), (0xF950, FoldKind::Simple, "\u{7E37}"),
    (0xF951, FoldKind::Simple, "\u{964B}"), (0xF952, FoldKind::Simple, "\u{52D2}"),
    (0xF953, FoldKind::Simple, "\u{808B}"), (0xF954, FoldKind::Simple, "\u{51DC}"),
    (0xF955, FoldKind::Simple, "\u{51CC}"), (0xF956, FoldKind::Simple, "\u{7A1C}"),
    (0xF957, FoldKind::Simple, "\u{7DBE}"), (0xF958, FoldKind::Simple, "\u{83F1}"),
    (0xF959, FoldKind::Simple, "\u{9675}"), (0xF95A, FoldKind::Simple, "\u{8B80}"),
    (0xF95B, FoldKind::Simple, "\u{62CF}"), (0xF95C, FoldKind::Simple, "\u{6A02}"),
    (0xF95D, FoldKind::Simple, "\u{8AFE}"), (0xF95E, FoldKind::Simple, "\u{4E39}"),
    (0xF95F, FoldKind::Simple, "\u{5BE7}"), (0xF960, FoldKind::Simple, "\u{6012}"),
    (0xF961, FoldKind::Simple, "\u{7387}"), (0xF962, FoldKind::Simple, "\u{7570}"),
    (0xF963, FoldKind::Simple, "\u{5317}"), (0xF964, FoldKind::Simple, "\u{78FB}"),
    (0xF965, FoldKind::Simple, "\u{4FBF}"), (0xF966, FoldKind::Simple, "\u{5FA9}"),
    (0xF967, FoldKind::Simple, "\u{4E0D}"), (0xF968, FoldKind::Simple, "\u{6CCC}"),
    (0xF969, FoldKind::Simple, "\u{6578}"), (0xF96A, FoldKind::Simple, "\u{7D22}"),
    (0xF96B, FoldKind::Simple, "\u{53C3}"), (0xF96C, FoldKind::Simple, "\u{585E}"),
    (0xF96D, FoldKind::Simple, "\u{7701}"), (0xF96E, FoldKind::Simple, "\u{8449}"),
    (0xF96F, FoldKind::Simple, "\u{8AAA}"), (0xF970, FoldKind::Simple, "\u{6BBA}"),
    (0xF971, FoldKind::Simple, "\u{8FB0}"), (0xF972, FoldKind::Simple, "\u{6C88}"),
    (0xF973, FoldKind::Simple, "\u{62FE}"), (0xF974, FoldKind::Simple, "\u{82E5}"),
    (0xF975, FoldKind::Simple, "\u{63A0}"), (0xF976, FoldKind::Simple, "\u{7565}"),
    (0xF977, FoldKind::Simple, "\u{4EAE}"), (0xF978, FoldKind::Simple, "\u{5169}"),
    (0xF979, FoldKind::Simple, "\u{51C9}"), (0xF97A, FoldKind::Simple, "\u{6881}"),
    (0xF97B, FoldKind::Simple, "\u{7CE7}"), (0xF97C, FoldKind::Simple, "\u{826F}"),
    (0xF97D, FoldKind::Simple, "\u{8AD2}"), (0xF97E, FoldKind::Simple, "\u{91CF}"),
    (0xF97F, FoldKind::Simple, "\u{52F5}"), (0xF980, FoldKind::Simple, "\u{5442}"),
    (0xF981, FoldKind::Simple, "\u{5973}"), (0xF982, FoldKind::Simple, "\u{5EEC}"),
    (0xF983, FoldKind::Simple, "\u{65C5}"), (0xF984, FoldKind::Simple, "\u{6FFE}"),
    (0xF985, FoldKind::Simple, "\u{792A}"), (0xF986, FoldKind::Simple, "\u{95AD}"),
    (0xF987, FoldKind::Simple, "\u{9A6A}"), (0xF988, FoldKind::Simple, "\u{9E97}"),
    (0xF989, FoldKind::Simple, "\u{9ECE}"), (0xF98A, FoldKind::Simple, "\u{529B}"),
    (0xF98B, FoldKind::Simple, "\u{66C6}"), (0xF98C, FoldKind::Simple, "\u{6B77}"),
    (0xF98D, FoldKind::Simple, "\u{8F62}"), (0xF98E, FoldKind::Simple, "\u{5E74}"),
    (0xF98F, FoldKind::Simple, "\u{6190}"), (0xF990, FoldKind::Simple, "\u{6200}"),
    (0xF991, FoldKind::Simple, "\u{649A}"), (0xF992, FoldKind::Simple, "\u{6F23}"),
    (0xF993, FoldKind::Simple, "\u{7149}"), (0xF994, FoldKind::Simple, "\u{7489}"),
    (0xF995, FoldKind::Simple, "\u{79CA}"), (0xF996, FoldKind::Simple, "\u{7DF4}"),
    (0xF997, FoldKind::Simple, "\u{806F}"), (0xF998, FoldKind::Simple, "\u{8F26}"),
    (0xF999, FoldKind::Simple, "\u{84EE}"), (0xF99A, FoldKind::Simple, "\u{9023}"),
    (0xF99B, FoldKind::Simple, "\u{934A}"), (0xF99C, FoldKind::Simple, "\u{5217}"),
    (0xF99D, FoldKind::Simple, "\u{52A3}"), (0xF99E, FoldKind::Simple, "\u{54BD}"),
    (0xF99F, FoldKind::Simple, "\u{70C8}"), (0xF9A0, FoldKind::Simple, "\u{88C2}"),
    (0xF9A1, FoldKind::Simple, "\u{8AAA}"), (0xF9A2, FoldKind::Simple, "\u{5EC9}"),
    (0xF9A3, FoldKind::Simple, "\u{5FF5}"), (0xF9A4, FoldKind::Simple, "\u{637B}"),
    (0xF9A5, FoldKind::Simple, "\u{6BAE}"), (0xF9A6, FoldKind::Simple, "\u{7C3E}"),
    (0xF9A7, FoldKind::Simple, "\u{7375}"), (0xF9A8, FoldKind::Simple, "\u{4EE4}"),
    (0xF9A9, FoldKind::Simple, "\u{56F9}"), (0xF9AA, FoldKind::Simple, "\u{5BE7}"),
    (0xF9AB, FoldKind::Simple, "\u{5DBA}"), (0xF9AC, FoldKind::Simple, "\u{601C}"),
    (0xF9AD, FoldKind::Simple, "\u{73B2}"), (0xF9AE, FoldKind::Simple, "\u{7469}"),
    (0xF9AF, FoldKind::Simple, "\u{7F9A}"), (0xF9B0, FoldKind::Simple, "\u{8046}"),
    (0xF9B1, FoldKind::Simple, "\u{9234}"), (0xF9B2, FoldKind::Simple, "\u{96F6}"),
    (0xF9B3, FoldKind::Simple, "\u{9748}"), (0xF9B4, FoldKind::Simple, "\u{9818}"),
    (0xF9B5, FoldKind::Simple, "\u{4F8B}"), (0xF9B6, FoldKind::Simple, "\u{79AE}"),
    (0xF9B7, FoldKind::Simple, "\u{91B4}"), (0xF9B8, FoldKind::Simple, "\u{96B8}"),
    (0xF9B9, FoldKind::Simple, "\u{60E1}"), (0xF9BA, FoldKind::Simple, "\u{4E86}"),
    (0xF9BB, FoldKind::Simple, "\u{50DA}"), (0xF9BC, FoldKind::Simple, "\u{5BEE}"),
    (0xF9BD, FoldKind::Simple, "\u{5C3F}"), (0xF9BE, FoldKind::Simple, "\u{6599}"),
    (0xF9BF, FoldKind::Simple, "\u{6A02}"), (0xF9C0, FoldKind::Simple, "\u{71CE}"),
    (0xF9C1, FoldKind::Simple, "\u{7642}"), (0xF9C2, FoldKind::Simple, "\u{84FC}"),
    (0xF9C3, FoldKind::Simple, "\u{907C}"), (0xF9C4, FoldKind::Simple, "\u{9F8D}"),
    (0xF9C5, FoldKind::Simple, "\u{6688}"), (0xF9C6, FoldKind::Simple, "\u{962E}"),
    (0xF9C7, FoldKind::Simple, "\u{5289}"), (0xF9C8, FoldKind::Simple, "\u{677B}"),
    (0xF9C9, FoldKind::Simple, "\u{67F3}"), (0xF9CA, FoldKind::Simple, "\u{6D41}"),
    (0xF9CB, FoldKind::Simple, "\u{6E9C}"), (0xF9CC, FoldKind::Simple, "\u{7409}"),
    (0xF9CD, FoldKind::Simple, "\u{7559}"), (0xF9CE, FoldKind::Simple, "\u{786B}"),
    (0xF9CF, FoldKind::Simple, "\u{7D10}"), (0xF9D0, FoldKind::Simple, "\u{985E}"),
    (0xF9D1, FoldKind::Simple, "\u{516D}"), (0xF9D2, FoldKind::Simple, "\u{622E}"),
    (0xF9D3, FoldKind::Simple, "\u{9678}"), (0xF9D4, FoldKind::Simple, "\u{502B}"),
    (0xF9D5, FoldKind::Simple, "\u{5D19}"), (0xF9D6, FoldKind::Simple, "\u{6DEA}"),
    (0xF9D7, FoldKind::Simple, "\u{8F2A}"), (0xF9D8, FoldKind::Simple, "\u{5F8B}"),
    (0xF9D9, FoldKind::Simple, "\u{6144}"), (0xF9DA, FoldKind::Simple, "\u{6817}"),
    (0xF9DB, FoldKind::Simple, "\u{7387}"), (0xF9DC, FoldKind::Simple, "\u{9686}"),
    (0xF9DD, FoldKind::Simple, "\u{5229}"), (0xF9DE, FoldKind::Simple, "\u{540F}"),
    (0xF9DF, FoldKind::Simple, "\u{5C65}"), (0xF9E0, FoldKind::Simple, "\u{6613}"),
    (0xF9E1, FoldKind::Simple, "\u{674E}"), (0xF9E2, FoldKind::Simple, "\u{68A8}"),
    (0xF9E3, FoldKind::Simple, "\u{6CE5}"), (0xF9E4, FoldKind::Simple, "\u{7406}"),
    (0xF9E5, FoldKind::Simple, "\u{75E2}"), (0xF9E6, FoldKind::Simple, "\u{7F79}"),
    (0xF9E7, FoldKind::Simple, "\u{88CF}"), (0xF9E8, FoldKind::Simple, "\u{88E1}"),
    (0xF9E9, FoldKind::Simple, "\u{91CC}"), (0xF9EA, FoldKind::Simple, "\u{96E2}"),
    (0xF9EB, FoldKind::Simple, "\u{533F}"), (0xF9EC, FoldKind::Simple, "\u{6EBA}"),
    (0xF9ED, FoldKind::Simple, "\u{541D}"), (0xF9EE, FoldKind::Simple, "\u{71D0}"),
    (0xF9EF, FoldKind::Simple, "\u{7498}"), (0xF9F0, FoldKind::Simple, "\u{85FA}"),
    (0xF9F1, FoldKind::Simple, "\u{96A3}"), (0xF9F2, FoldKind::Simple, "\u{9C57}"),
    (0xF9F3, FoldKind::Simple, "\u{9E9F}"), (0xF9F4, FoldKind::Simple, "\u{6797}"),
    (0xF9F5, FoldKind::Simple, "\u{6DCB}"), (0xF9F6, FoldKind::Simple, "\u{81E8}"),
    (0xF9F7, FoldKind::Simple, "\u{7ACB}"), (0xF9F8, FoldKind::Simple, "\u{7B20}"),
    (0xF9F9, FoldKind::Simple, "\u{7C92}"), (0xF9FA, FoldKind::Simple, "\u{72C0}"),
    (0xF9FB, FoldKind::Simple, "\u{7099}"), (0xF9FC, FoldKind::Simple, "\u{8B58}"),
    (0xF9FD, FoldKind::Simple, "\u{4EC0}"), (0xF9FE, FoldKind::Simple, "\u{8336}"),
    (0xF9FF, FoldKind::Simple, "\u{523A}"), (0xFA00, FoldKind::Simple, "\u{5207}"),
    (0xFA01, FoldKind::Simple, "\u{5EA6}"), (0xFA02, FoldKind::Simple, "\u{62D3}"),
    (0xFA03, FoldKind::Simple, "\u{7CD6}"), (0xFA04, FoldKind::Simple, "\u{5B85}"),
    (0xFA05, FoldKind::Simple, "\u{6D1E}"), (0xFA06, FoldKind::Simple, "\u{66B4}"),
    (0xFA07, FoldKind::Simple, "\u{8F3B}"), (0xFA08, FoldKind::Simple, "\u{884C}"),
    (0xFA09, FoldKind::Simple, "\u{964D}"), (0xFA0A, FoldKind::Simple, "\u{898B}"),
    (0xFA0B, FoldKind::Simple, "\u{5ED3}"), (0xFA0C, FoldKind::Simple, "\u{5140}"),
    (0xFA0D, FoldKind::Simple, "\u{55C0}"), (0xFA10, FoldKind::Simple, "\u{585A}"),
    (0xFA12, FoldKind::Simple, "\u{6674}"), (0xFA15, FoldKind::Simple, "\u{51DE}"),
    (0xFA16, FoldKind::Simple, "\u{732A}"), (0xFA17, FoldKind::Simple, "\u{76CA}"),
    (0xFA18, FoldKind::Simple, "\u{793C}"), (0xFA19, FoldKind::Simple, "\u{795E}"),
    (0xFA1A, FoldKind::Simple, "\u{7965}"), (0xFA1B, FoldKind::Simple, "\u{798F}"),
    (0xFA1C, FoldKind::Simple, "\u{9756}"), (0xFA1D, FoldKind::Simple, "\u{7CBE}"),
    (0xFA1E, FoldKind::Simple, "\u{7FBD}"), (0xFA20, FoldKind::Simple, "\u{8612}"),
    (0xFA22, FoldKind::Simple, "\u{8AF8}"), (0xFA25, FoldKind::Simple, "\u{9038}"),
    (0xFA26, FoldKind::Simple, "\u{90FD}"), (0xFA2A, FoldKind::Simple, "\u{98EF}"),
    (0xFA2B, FoldKind::Simple, "\u{98FC}"), (0xFA2C, FoldKind::Simple, "\u{9928}"),
    (0xFA2D, FoldKind::Simple, "\u{9DB4}"), (0xFA2E, FoldKind::Simple, "\u{90DE}"),
    (0xFA2F, FoldKind::Simple, "\u{96B7}"), (0xFA30, FoldKind::Simple, "\u{4FAE}"),
    (0xFA31, FoldKind::Simple, "\u{50E7}"), (0xFA32, FoldKind::Simple, "\u{514D}"),
    (0xFA33, FoldKind::Simple, "\u{52C9}"), (0xFA34, FoldKind::Simple, "\u{52E4}"),
    (0xFA35, FoldKind::Simple, "\u{5351}"), (0xFA36, FoldKind::Simple, "\u{559D}"),
    (0xFA37, FoldKind::Simple, "\u{5606}"), (0xFA38, FoldKind::Simple, "\u{5668}"),
    (0xFA39, FoldKind::Simple, "\u{5840}"), (0xFA3A, FoldKind::Simple, "\u{58A8}"),
    (0xFA3B, FoldKind::Simple, "\u{5C64}"), (0xFA3C, FoldKind::Simple, "\u{5C6E}"),
    (0xFA3D, FoldKind::Simple, "\u{6094}"), (0xFA3E, FoldKind::Simple, "\u{6168}"),
    (0xFA3F, FoldKind::Simple, "\u{618E}"), (0xFA40, FoldKind::Simple, "\u{61F2}"),
    (0xFA41, FoldKind::Simple, "\u{654F}"), (0xFA42, FoldKind::Simple, "\u{65E2}"),
    (0xFA43, FoldKind::Simple, "\u{6691}"), (0xFA44, FoldKind::Simple, "\u{6885}"),
    (0xFA45, FoldKind::Simple, "\u{6D77}"), (0xFA46, FoldKind::Simple, "\u{6E1A}"),
    (0xFA47, FoldKind::Simple, "\u{6F22}"), (0xFA48, FoldKind::Simple, "\u{716E}"),
    (0xFA49, FoldKind::Simple, "\u{722B}"), (0xFA4A, FoldKind::Simple, "\u{7422}"),
    (0xFA4B, FoldKind::Simple, "\u{7891}"), (0xFA4C, FoldKind::Simple, "\u{793E}"),
    (0xFA4D, FoldKind::Simple, "\u{7949}"), (0xFA4E, FoldKind::Simple, "\u{7948}"),
    (0xFA4F, FoldKind::Simple, "\u{7950}"), (0xFA50, FoldKind::Simple, "\u{7956}"),
    (0xFA51, FoldKind::Simple, "\u{795D}"), (0xFA52, FoldKind::Simple, "\u{798D}"),
    (0xFA53, FoldKind::Simple, "\u{798E}"), (0xFA54, FoldKind::Simple, "\u{7A40}"),
    (0xFA55, FoldKind::Simple, "\u{7A81}"), (0xFA56, FoldKind::Simple, "\u{7BC0}"),
    (0xFA57, FoldKind::Simple, "\u{7DF4}"), (0xFA58, FoldKind::Simple, "\u{7E09}"),
    (0xFA59, FoldKind::Simple, "\u{7E41}"), (0xFA5A, FoldKind::Simple, "\u{7F72}"),
    (0xFA5B, FoldKind::Simple, "\u{8005}"), (0xFA5C, FoldKind::Simple, "\u{81ED}"),
    (0xFA5D, FoldKind::Simple, "\u{8279}"), (0xFA5E, FoldKind::Simple, "\u{8279}"),
    (0xFA5F, FoldKind::Simple, "\u{8457}"), (0xFA60, FoldKind::Simple, "\u{8910}"),
    (0xFA61, FoldKind::Simple, "\u{8996}"), (0xFA62, FoldKind::Simple, "\u{8B01}"),
    (0xFA63, FoldKind::Simple, "\u{8B39}"), (0xFA64, FoldKind::Simple, "\u{8CD3}"),
    (0xFA65, FoldKind::Simple, "\u{8D08}"), (0xFA66, FoldKind::Simple, "\u{8FB6}"),
    (0xFA67, FoldKind::Simple, "\u{9038}"), (0xFA68, FoldKind::Simple, "\u{96E3}"),
    (0xFA69, FoldKind::Simple, "\u{97FF}"), (0xFA6A, FoldKind::Simple, "\u{983B}"),
    (0xFA6B, FoldKind::Simple, "\u{6075}"), (0xFA6C, FoldKind::Simple, "\u{242EE}"),
    (0xFA6D, FoldKind::Simple, "\u{8218}"), (0xFA70, FoldKind::Simple, "\u{4E26}"),
    (0xFA71, FoldKind::Simple, "\u{51B5}"), (0xFA72, FoldKind::Simple, "\u{5168}"),
    (0xFA73, FoldKind::Simple, "\u{4F80}"), (0xFA74, FoldKind::Simple, "\u{5145}"),
    (0xFA75, FoldKind::Simple, "\u{5180}"), (0xFA76, FoldKind::Simple, "\u{52C7}"),
    (0xFA77, FoldKind::Simple, "\u{52FA}"), (0xFA78, FoldKind::Simple, "\u{559D}"),
    (0xFA79, FoldKind::Simple, "\u{5555}"), (0xFA7A, FoldKind::Simple, "\u{5599}"),
    (0xFA7B, FoldKind::Simple, "\u{55E2}"), (0xFA7C, FoldKind::Simple, "\u{585A}"),
    (0xFA7D, FoldKind::Simple, "\u{58B3}"), (0xFA7E, FoldKind::Simple, "\u{5944}"),
    (0xFA7F, FoldKind::Simple, "\u{5954}"), (0xFA80, FoldKind::Simple, "\u{5A62}"),
    (0xFA81, FoldKind::Simple, "\u{5B28}"), (0xFA82, FoldKind::Simple, "\u{5ED2}"),
    (0xFA83, FoldKind::Simple, "\u{5ED9}"), (0xFA84, FoldKind::Simple, "\u{5F69}"),
    (0xFA85, FoldKind::Simple, "\u{5FAD}"), (0xFA86, FoldKind::Simple, "\u{60D8}"),
    (0xFA87, FoldKind::Simple, "\u{614E}"), (0xFA88, FoldKind::Simple, "\u{6108}"),
    (0xFA89, FoldKind::Simple, "\u{618E}"), (0xFA8A, FoldKind::Simple, "\u{6160}"),
    (0xFA8B, FoldKind::Simple, "\u{61F2}"), (0xFA8C, FoldKind::Simple, "\u{6234}"),
    (0xFA8D, FoldKind::Simple, "\u{63C4}"), (0xFA8E, FoldKind::Simple, "\u{641C}"),
    (0xFA8F, FoldKind::Simple, "\u{6452}"), (0xFA90, FoldKind::Simple, "\u{6556}"),
    (0xFA91, FoldKind::Simple, "\u{6674}"), (0xFA92, FoldKind::Simple, "\u{6717}"),
    (0xFA93, FoldKind::Simple, "\u{671B}"), (0xFA94, FoldKind::Simple, "\u{6756}"),
    (0xFA95, FoldKind::Simple, "\u{6B79}"), (0xFA96, FoldKind::Simple, "\u{6BBA}"),
    (0xFA97, FoldKind::Simple, "\u{6D41}"), (0xFA98, FoldKind::Simple, "\u{6EDB}"),
    (0xFA99, FoldKind::Simple, "\u{6ECB}"), (0xFA9A, FoldKind::Simple, "\u{6F22}"),
    (0xFA9B, FoldKind::Simple, "\u{701E}"), (0xFA9C, FoldKind::Simple, "\u{716E}"),
    (0xFA9D, FoldKind::Simple, "\u{77A7}"), (0xFA9E, FoldKind::Simple, "\u{7235}"),
    (0xFA9F, FoldKind::Simple, "\u{72AF}"), (0xFAA0, FoldKind::Simple, "\u{732A}"),
    (0xFAA1, FoldKind::Simple, "\u{7471}"), (0xFAA2, FoldKind::Simple, "\u{7506}"),
    (0xFAA3, FoldKind::Simple, "\u{753B}"), (0xFAA4, FoldKind::Simple, "\u{761D}"),
    (0xFAA5, FoldKind::Simple, "\u{761F}"), (0xFAA6, FoldKind::Simple, "\u{76CA}"),
    (0xFAA7, FoldKind::Simple, "\u{76DB}"), (0xFAA8, FoldKind::Simple, "\u{76F4}"),
    (0xFAA9, FoldKind::Simple, "\u{774A}"), (0xFAAA, FoldKind::Simple, "\u{7740}"),
    (0xFAAB, FoldKind::Simple, "\u{78CC}"), (0xFAAC, FoldKind::Simple, "\u{7AB1}"),
    (0xFAAD, FoldKind::Simple, "\u{7BC0}"), (0xFAAE, FoldKind::Simple, "\u{7C7B}"),
    (0xFAAF, FoldKind::Simple, "\u{7D5B}"), (0xFAB0, FoldKind::Simple, "\u{7DF4}"),
    (0xFAB1, FoldKind::Simple, "\u{7F3E}"), (0xFAB2, FoldKind::Simple, "\u{8005}"),
    (0xFAB3, FoldKind::Simple, "\u{8352}"), (0xFAB4, FoldKind::Simple, "\u{83EF}"),
    (0xFAB5, FoldKind::Simple, "\u{8779}"), (0xFAB6, FoldKind::Simple, "\u{8941}"),
    (0xFAB7, FoldKind::Simple, "\u{8986}"), (0xFAB8, FoldKind::Simple, "\u{8996}"),
    (0xFAB9, FoldKind::Simple, "\u{8ABF}"), (0xFABA, FoldKind::Simple, "\u{8AF8}"),
    (0xFABB, FoldKind::Simple, "\u{8ACB}"), (0xFABC, FoldKind::Simple, "\u{8B01}"),
    (0xFABD, FoldKind::Simple, "\u{8AFE}"), (0xFABE, FoldKind::Simple, "\u{8AED}"),
    (0xFABF, FoldKind::Simple, "\u{8B39}"), (0xFAC0, FoldKind::Simple, "\u{8B8A}"),
    (0xFAC1, FoldKind::Simple, "\u{8D08}"), (0xFAC2, FoldKind::Simple, "\u{8F38}"),
    (0xFAC3, FoldKind::Simple, "\u{9072}"), (0xFAC4, FoldKind::Simple, "\u{9199}"),
    (0xFAC5, FoldKind::Simple, "\u{9276}"), (0xFAC6, FoldKind::Simple, "\u{967C}"),
    (0xFAC7, FoldKind::Simple, "\u{96E3}"), (0xFAC8, FoldKind::Simple, "\u{9756}"),
    (0xFAC9, FoldKind::Simple, "\u{97DB}"), (0xFACA, FoldKind::Simple, "\u{97FF}"),
    (0xFACB, FoldKind::Simple, "\u{980B}"), (0xFACC, FoldKind::Simple, "\u{983B}"),
    (0xFACD, FoldKind::Simple, "\u{9B12}"), (0xFACE, FoldKind::Simple, "\u{9F9C}"),
    (0xFACF, FoldKind::Simple, "\u{2284A}"), (0xFAD0, FoldKind::Simple, "\u{22844}"),
    (0xFAD1, FoldKind::Simple, "\u{233D5}"), (0xFAD2, FoldKind::Simple, "\u{3B9D}"),
    (0xFAD3, FoldKind::Simple, "\u{4018}"), (0xFAD4, FoldKind::Simple, "\u{4039}"),
    (0xFAD5, FoldKind::Simple, "\u{25249}"), (0xFAD6, FoldKind::Simple, "\u{25CD0}"),
    (0xFAD7, FoldKind::Simple, "\u{27ED3}"), (0xFAD8, FoldKind::Simple, "\u{9F43}"),
    (0xFAD9, FoldKind::Simple, "\u{9F8E}"), (0xFB00, FoldKind::Complex, "f"),
    (0xFB01, FoldKind::Complex, "f"), (0xFB02, FoldKind::Complex, "f"),
    (0xFB03, FoldKind::Complex, "f"), (0xFB04, FoldKind::Complex, "f"),
    (0xFB05, FoldKind::Complex, "s"), (0xFB06, FoldKind::Complex, "s"),
    (0xFB13, FoldKind::Complex, "\u{574}"), (0xFB14, FoldKind::Complex, "\u{574}"),
    (0xFB15, FoldKind::Complex, "\u{574}"), (0xFB16, FoldKind::Complex, "\u{57E}"),
    (0xFB17, FoldKind::Complex, "\u{574}"), (0xFB1D, FoldKind::LetterMarks, "\u{5D9}"),
    (0xFB1F, FoldKind::LetterMarks, "\u{5F2}"), (0xFB20, FoldKind::Simple, "\u{5E2}"),
    (0xFB21, FoldKind::Simple, "\u{5D0}"), (0xFB22, FoldKind::Simple, "\u{5D3}"),
    (0xFB23, FoldKind::Simple, "\u{5D4}"), (0xFB24, FoldKind::Simple, "\u{5DB}"),
    (0xFB25, FoldKind::Simple, "\u{5DC}"), (0xFB26, FoldKind::Simple, "\u{5DD}"),
    (0xFB27, FoldKind::Simple, "\u{5E8}"), (0xFB28, FoldKind::Simple, "\u{5EA}"),
    (0xFB29, FoldKind::Simple, "+"), (0xFB2A, FoldKind::LetterMarks, "\u{5E9}"),
    (0xFB2B, FoldKind::LetterMarks, "\u{5E9}"), (0xFB2C, FoldKind::LetterMarks, "\u{5E9}"),
    (0xFB2D, FoldKind::LetterMarks, "\u{5E9}"), (0xFB2E, FoldKind::LetterMarks, "\u{5D0}"),
    (0xFB2F, FoldKind::LetterMarks, "\u{5D0}"), (0xFB30, FoldKind::LetterMarks, "\u{5D0}"),
    (0xFB31, FoldKind::LetterMarks, "\u{5D1}"), (0xFB32, FoldKind::LetterMarks, "\u{5D2}"),
    (0xFB33, FoldKind::LetterMarks, "\u{5D3}"), (0xFB34, FoldKind::LetterMarks, "\u{5D4}"),
    (0xFB35, FoldKind::LetterMarks, "\u{5D5}"), (0xFB36, FoldKind::LetterMarks, "\u{5D6}"),
    (0xFB38, FoldKind::LetterMarks, "\u{5D8}"), (0xFB39, FoldKind::LetterMarks, "\u{5D9}"),
    (0xFB3A, FoldKind::LetterMarks, "\u{5DA}"), (0xFB3B, FoldKind::LetterMarks, "\u{5DB}"),
    (0xFB3C, FoldKind::LetterMarks, "\u{5DC}"), (0xFB3E, FoldKind::LetterMarks, "\u{5DE}"),
    (0xFB40, FoldKind::LetterMarks, "\u{5E0}"), (0xFB41, FoldKind::LetterMarks, "\u{5E1}"),
    (0xFB43, FoldKind::LetterMarks, "\u{5E3}"), (0xFB44, FoldKind::LetterMarks, "\u{5E4}"),
    (0xFB46, FoldKind::LetterMarks, "\u{5E6}"), (0xFB47, FoldKind::LetterMarks, "\u{5E7}"),
    (0xFB48, FoldKind::LetterMarks, "\u{5E8}"), (0xFB49, FoldKind::LetterMarks, "\u{5E9}"),
    (0xFB4A, FoldKind::LetterMarks, "\u{5EA}"), (0xFB4B, FoldKind::LetterMarks, "\u{5D5}"),
    (0xFB4C, FoldKind::LetterMarks, "\u{5D1}"), (0xFB4D, FoldKind::LetterMarks, "\u{5DB}"),
    (0xFB4E, FoldKind::LetterMarks, "\u{5E4}"), (0xFB4F, FoldKind::Complex, "\u{5D0}"),
    (0xFB50, FoldKind::Simple, "\u{671}"), (0xFB51, FoldKind::Simple, "\u{671}"),
    (0xFB52, FoldKind::Simple, "\u{67B}"), (0xFB53, FoldKind::Simple, "\u{67B}"),
    (0xFB54, FoldKind::Simple, "\u{67B}"), (0xFB55, FoldKind::Simple, "\u{67B}"),
    (0xFB56, FoldKind::Simple, "\u{67E}"), (0xFB57, FoldKind::Simple, "\u{67E}"),
    (0xFB58, FoldKind::Simple, "\u{67E}"), (0xFB59, FoldKind::Simple, "\u{67E}"),
    (0xFB5A, FoldKind::Simple, "\u{680}"), (0xFB5B, FoldKind::Simple, "\u{680}"),
    (0xFB5C, FoldKind::Simple, "\u{680}"), (0xFB5D, FoldKind::Simple, "\u{680}"),
    (0xFB5E, FoldKind::Simple, "\u{67A}"), (0xFB5F, FoldKind::Simple, "\u{67A}"),
    (0xFB60, FoldKind::Simple, "\u{67A}"), (0xFB61, FoldKind::Simple, "\u{67A}"),
    (0xFB62, FoldKind::Simple, "\u{67F}"), (0xFB63, FoldKind::Simple, "\u{67F}"),
    (0xFB64, FoldKind::Simple, "\u{67F}"), (0xFB65, FoldKind::Simple, "\u{67F}"),
    (0xFB66, FoldKind::Simple, "\u{679}"), (0xFB67, FoldKind::Simple, "\u{679}"),
    (0xFB68, FoldKind::Simple, "\u{679}"), (0xFB69, FoldKind::Simple, "\u{679}"),
    (0xFB6A, FoldKind::Simple, "\u{6A4}"), (0xFB6B, FoldKind::Simple, "\u{6A4}"),
    (0xFB6C, FoldKind::Simple, "\u{6A4}"), (0xFB6D, FoldKind::Simple, "\u{6A4}"),
    (0xFB6E, FoldKind::Simple, "\u{6A6}"), (0xFB6F, FoldKind::Simple, "\u{6A6}"),
    (0xFB70, FoldKind::Simple, "\u{6A6}"), (0xFB71, FoldKind::Simple, "\u{6A6}"),
    (0xFB72, FoldKind::Simple, "\u{684}"), (0xFB73, FoldKind::Simple, "\u{684}"),
    (0xFB74, FoldKind::Simple, "\u{684}"), (0xFB75, FoldKind::Simple, "\u{684}"),
    (0xFB76, FoldKind::Simple, "\u{683}"), (0xFB77, FoldKind::Simple, "\u{683}"),
    (0xFB78, FoldKind::Simple, "\u{683}"), (0xFB79, FoldKind::Simple, "\u{683}"),
    (0xFB7A, FoldKind::Simple, "\u{686}"), (0xFB7B, FoldKind::Simple, "\u{686}"),
    (0xFB7C, FoldKind::Simple, "\u{686}"), (0xFB7D, FoldKind::Simple, "\u{686}"),
    (0xFB7E, FoldKind::Simple, "\u{687}"), (0xFB7F, FoldKind::Simple, "\u{687}"),
    (0xFB80, FoldKind::Simple, "\u{687}"), (0xFB81, FoldKind::Simple, "\u{687}"),
    (0xFB82, FoldKind::Simple, "\u{68D}"), (0xFB83, FoldKind::Simple, "\u{68D}"),
    (0xFB84, FoldKind::Simple, "\u{68C}"), (0xFB85, FoldKind::Simple, "\u{68C}"),
    (0xFB86, FoldKind::Simple, "\u{68E}"), (0xFB87, FoldKind::Simple, "\u{68E}"),
    (0xFB88, FoldKind::Simple, "\u{688}"), (0xFB89, FoldKind::Simple, "\u{688}"),
    (0xFB8A, FoldKind::Simple, "\u{698}"), (0xFB8B, FoldKind::Simple, "\u{698}"),
    (0xFB8C, FoldKind::Simple, "\u{691}"), (0xFB8D, FoldKind::Simple, "\u{691}"),
    (0xFB8E, FoldKind::Simple, "\u{6A9}"), (0xFB8F, FoldKind::Simple, "\u{6A9}"),
    (0xFB90, FoldKind::Simple, "\u{6A9}"), (0xFB91, FoldKind::Simple, "\u{6A9}"),
    (0xFB92, FoldKind::Simple, "\u{6AF}"), (0xFB93, FoldKind::Simple, "\u{6AF}"),
    (0xFB94, FoldKind::Simple, "\u{6AF}"), (0xFB95, FoldKind::Simple, "\u{6AF}"),
    (0xFB96, FoldKind::Simple, "\u{6B3}"), (0xFB97, FoldKind::Simple, "\u{6B3}"),
    (0xFB98, FoldKind::Simple, "\u{6B3}"), (0xFB99, FoldKind::Simple, "\u{6B3}"),
    (0xFB9A, FoldKind::Simple, "\u{6B1}"), (0xFB9B, FoldKind::Simple, "\u{6B1}"),
    (0xFB9C, FoldKind::Simple, "\u{6B1}"), (0xFB9D, FoldKind::Simple, "\u{6B1}"),
    (0xFB9E, FoldKind::Simple, "\u{6BA}"), (0xFB9F, FoldKind::Simple, "\u{6BA}"),
    (0xFBA0, FoldKind::Simple, "\u{6BB}"), (0xFBA1, FoldKind::Simple, "\u{6BB}"),
    (0xFBA2, FoldKind::Simple, "\u{6BB}"), (0xFBA3, FoldKind::Simple, "\u{6BB}"),
    (0xFBA4, FoldKind::LetterMarks, "\u{6D5}"), (0xFBA5, FoldKind::LetterMarks, "\u{6D5}"),
    (0xFBA6, FoldKind::Simple, "\u{6C1}"), (0xFBA7, FoldKind::Simple, "\u{6C1}"),
    (0xFBA8, FoldKind::Simple, "\u{6C1}"), (0xFBA9, FoldKind::Simple, "\u{6C1}"),
    (0xFBAA, FoldKind::Simple, "\u{6BE}"), (0xFBAB, FoldKind::Simple, "\u{6BE}"),
    (0xFBAC, FoldKind::Simple, "\u{6BE}"), (0xFBAD, FoldKind::Simple, "\u{6BE}"),
    (0xFBAE, FoldKind::Simple, "\u{6D2}"), (0xFBAF, FoldKind::Simple, "\u{6D2}"),
    (0xFBB0, FoldKind::LetterMarks, "\u{6D2}"), (0xFBB1, FoldKind::LetterMarks, "\u{6D2}"),
    (0xFBD3, FoldKind::Simple, "\u{6AD}"), (0xFBD4, FoldKind::Simple, "\u{6AD}"),
    (0xFBD5, FoldKind::Simple, "\u{6AD}"), (0xFBD6, FoldKind::Simple, "\u{6AD}"),
    (0xFBD7, FoldKind::Simple, "\u{6C7}"), (0xFBD8, FoldKind::Simple, "\u{6C7}"),
    (0xFBD9, FoldKind::Simple, "\u{6C6}"), (0xFBDA, FoldKind::Simple, "\u{6C6}"),
    (0xFBDB, FoldKind::Simple, "\u{6C8}"), (0xFBDC, FoldKind::Simple, "\u{6C8}"),
    (0xFBDD, FoldKind::Complex, "\u{6C7}"), (0xFBDE, FoldKind::Simple, "\u{6CB}"),
    (0xFBDF, FoldKind::Simple, "\u{6CB}"), (0xFBE0, FoldKind::Simple, "\u{6C5}"),
    (0xFBE1, FoldKind::Simple, "\u{6C5}"), (0xFBE2, FoldKind::Simple, "\u{6C9}"),
    (0xFBE3, FoldKind::Simple, "\u{6C9}"), (0xFBE4, FoldKind::Simple, "\u{6D0}"),
    (0xFBE5, FoldKind::Simple, "\u{6D0}"), (0xFBE6, FoldKind::Simple, "\u{6D0}"),
    (0xFBE7, FoldKind::Simple, "\u{6D0}"), (0xFBE8, FoldKind::Simple, "\u{649}"),
    (0xFBE9, FoldKind::Simple, "\u{649}"), (0xFBEA, FoldKind::Complex, "\u{64A}"),
    (0xFBEB, FoldKind::Complex, "\u{64A}"), (0xFBEC, FoldKind::Complex, "\u{64A}"),
    (0xFBED, FoldKind::Complex, "\u{64A}"), (0xFBEE, FoldKind::Complex, "\u{64A}"),
    (0xFBEF, FoldKind::Complex, "\u{64A}"), (0xFBF0, FoldKind::Complex, "\u{64A}"),
    (0xFBF1, FoldKind::Complex, "\u{64A}"), (0xFBF2, FoldKind::Complex, "\u{64A}"),
    (0xFBF3, FoldKind::Complex, "\u{64A}"), (0xFBF4, FoldKind::Complex, "\u{64A}"),
    (0xFBF5, FoldKind::Complex, "\u{64A}"), (0xFBF6, FoldKind::Complex, "\u{64A}"),
    (0xFBF7, FoldKind::Complex, "\u{64A}"), (0xFBF8, FoldKind::Complex, "\u{64A}"),
    (0xFBF9, FoldKind::Complex, "\u{64A}"), (0xFBFA, FoldKind::Complex, "\u{64A}"),
    (0xFBFB, FoldKind::Complex, "\u{64A}"), (0xFBFC, FoldKind::Simple, "\u{6CC}"),
    (0xFBFD, FoldKind::Simple, "\u{6CC}"), (0xFBFE, FoldKind::Simple, "\u{6CC}"),
    (0xFBFF, FoldKind::Simple, "\u{6CC}"), (0xFC00, FoldKind::Complex, "\u{64A}"),
    (0xFC01, FoldKind::Complex, "\u{64A}"), (0xFC02, FoldKind::Complex, "\u{64A}"),
    (0xFC03, FoldKind::Complex, "\u{64A}"), (0xFC04, FoldKind::Complex, "\u{64A}"),
    (0xFC05, FoldKind::Complex, "\u{628}"), (0xFC06, FoldKind::Complex, "\u{628}"),
    (0xFC07, FoldKind::Complex, "\u{628}"), (0xFC08, FoldKind::Complex, "\u{628}"),
    (0xFC09, FoldKind::Complex, "\u{628}"), (0xFC0A, FoldKind::Complex, "\u{628}"),
    (0xFC0B, FoldKind::Complex, "\u{62A}"), (0xFC0C, FoldKind::Complex, "\u{62A}"),
    (0xFC0D, FoldKind::Complex, "\u{62A}"), (0xFC0E, FoldKind::Complex, "\u{62A}"),
    (0xFC0F, FoldKind::Complex, "\u{62A}"), (0xFC10, FoldKind::Complex, "\u{62A}"),
    (0xFC11, FoldKind::Complex, "\u{62B}"), (0xFC12, FoldKind::Complex, "\u{62B}"),
    (0xFC13, FoldKind::Complex, "\u{62B}"), (0xFC14, FoldKind::Complex, "\u{62B}"),
    (0xFC15, FoldKind::Complex, "\u{62C}"), (0xFC16, FoldKind::Complex, "\u{62C}"),
    (0xFC17, FoldKind::Complex, "\u{62D}"), (0xFC18, FoldKind::Complex, "\u{62D}"),
    (0xFC19, FoldKind::Complex, "\u{62E}"), (0xFC1A, FoldKind::Complex, "\u{62E}"),
    (0xFC1B, FoldKind::Complex, "\u{62E}"), (0xFC1C, FoldKind::Complex, "\u{633}"),
    (0xFC1D, FoldKind::Complex, "\u{633}"), (0xFC1E, FoldKind::Complex, "\u{633}"),
    (0xFC1F, FoldKind::Complex, "\u{633}"), (0xFC20, FoldKind::Complex, "\u{635}"),
    (0xFC21, FoldKind::Complex, "\u{635}"), (0xFC22, FoldKind::Complex, "\u{636}"),
    (0xFC23, FoldKind::Complex, "\u{636}"), (0xFC24, FoldKind::Complex, "\u{636}"),
    (0xFC25, FoldKind::Complex, "\u{636}"), (0xFC26, FoldKind::Complex, "\u{637}"),
    (0xFC27, FoldKind::Complex, "\u{637}"), (0xFC28, FoldKind::Complex, "\u{638}"),
    (0xFC29, FoldKind::Complex, "\u{639}"), (0xFC2A, FoldKind::Complex, "\u{639}"),
    (0xFC2B, FoldKind::Complex, "\u{63A}"), (0xFC2C, FoldKind::Complex, "\u{63A}"),
    (0xFC2D, FoldKind::Complex, "\u{641}"), (0xFC2E, FoldKind::Complex, "\u{641}"),
    (0xFC2F, FoldKind::Complex, "\u{641}"), (0xFC30, FoldKind::Complex, "\u{641}"),
    (0xFC31, FoldKind::Complex, "\u{641}"), (0xFC32, FoldKind::Complex, "\u{641}"),
    (0xFC33, FoldKind::Complex, "\u{642}"), (0xFC34, FoldKind::Complex, "\u{642}"),
    (0xFC35, FoldKind::Complex, "\u{642}"), (0xFC36, FoldKind::Complex, "\u{642}"),
    (0xFC37, FoldKind::Complex, "\u{643}"), (0xFC38, FoldKind::Complex, "\u{643}"),
    (0xFC39, FoldKind::Complex, "\u{643}"), (0xFC3A, FoldKind::Complex, "\u{643}"),
    (0xFC3B, FoldKind::Complex, "\u{643}"), (0xFC3C, FoldKind::Complex, "\u{643}"),
    (0xFC3D, FoldKind::Complex, "\u{643}"), (0xFC3E, FoldKind::Complex, "\u{643}"),
    (0xFC3F, FoldKind::Complex, "\u{644}"), (0xFC40, FoldKind::Complex, "\u{644}"),
    (0xFC41, FoldKind::Complex, "\u{644}"), (0xFC42, FoldKind::Complex, "\u{644}"),
    (0xFC43, FoldKind::Complex, "\u{644}"), (0xFC44, FoldKind::Complex, "\u{644}"),
    (0xFC45, FoldKind::Complex, "\u{645}"), (0xFC46, FoldKind::Complex, "\u{645}"),
    (0xFC47, FoldKind::Complex, "\u{645}"), (0xFC48, FoldKind::Complex, "\u{645}"),
    (0xFC49, FoldKind::Complex, "\u{645}"), (0xFC4A, FoldKind::Complex, "\u{645}"),
    (0xFC4B, FoldKind::Complex, "\u{646}"), (0xFC4C, FoldKind::Complex, "\u{646}"),
    (0xFC4D, FoldKind::Complex, "\u{646}"), (0xFC4E, FoldKind::Complex, "\u{646}"),
    (0xFC4F, FoldKind::Complex, "\u{646}"), (0xFC50, FoldKind::Complex, "\u{646}"),
    (0xFC51, FoldKind::Complex, "\u{647}"), (0xFC52, FoldKind::Complex, "\u{647}"),
    (0xFC53, FoldKind::Complex, "\u{647}"), (0xFC54, FoldKind::Complex, "\u{647}"),
    (0xFC55, FoldKind::Complex, "\u{64A}"), (0xFC56, FoldKind::Complex, "\u{64A}"),
    (0xFC57, FoldKind::Complex, "\u{64A}"), (0xFC58, FoldKind::Complex, "\u{64A}"),
    (0xFC59, FoldKind::Complex, "\u{64A}"), (0xFC5A, FoldKind::Complex, "\u{64A}"),
    (0xFC5B, FoldKind::LetterMarks, "\u{630}"), (0xFC5C, FoldKind::LetterMarks, "\u{631}"),
    (0xFC5D, FoldKind::LetterMarks, "\u{649}"), (0xFC5E, FoldKind::LetterMarks, " "),
    (0xFC5F, FoldKind::LetterMarks, " "), (0xFC60, FoldKind::LetterMarks, " "),
    (0xFC61, FoldKind::LetterMarks, " "), (0xFC62, FoldKind::LetterMarks, " "),
    (0xFC63, FoldKind::LetterMarks, " "), (0xFC64, FoldKind::Complex, "\u{64A}"),
    (0xFC65, FoldKind::Complex, "\u{64A}"), (0xFC66, FoldKind::Complex, "\u{64A}"),
    (0xFC67, FoldKind::Complex, "\u{64A}"), (0xFC68, FoldKind::Complex, "\u{64A}"),
    (0xFC69, FoldKind::Complex, "\u{64A}"), (0xFC6A, FoldKind::Complex, "\u{628}"),
    (0xFC6B, FoldKind::Complex, "\u{628}"), (0xFC6C, FoldKind::Complex, "\u{628}"),
    (0xFC6D, FoldKind::Complex, "\u{628}"), (0xFC6E, FoldKind::Complex, "\u{628}"),
    (0xFC6F, FoldKind::Complex, "\u{628}"), (0xFC70, FoldKind::Complex, "\u{62A}"),
    (0xFC71, FoldKind::Complex, "\u{62A}"), (0xFC72, FoldKind::Complex, "\u{62A}"),
    (0xFC73, FoldKind::Complex, "\u{62A}"), (0xFC74, FoldKind::Complex, "\u{62A}"),
    (0xFC75, FoldKind::Complex, "\u{62A}"), (0xFC76, FoldKind::Complex, "\u{62B}"),
    (0xFC77, FoldKind::Complex, "\u{62B}"), (0xFC78, FoldKind::Complex, "\u{62B}"),
    (0xFC79, FoldKind::Complex, "\u{62B}"), (0xFC7A, FoldKind::Complex, "\u{62B}"),
    (0xFC7B, FoldKind::Complex, "\u{62B}"), (0xFC7C, FoldKind::Complex, "\u{641}"),
    (0xFC7D, FoldKind::Complex, "\u{641}"), (0xFC7E, FoldKind::Complex, "\u{642}"),
    (0xFC7F, FoldKind::Complex, "\u{642}"), (0xFC80, FoldKind::Complex, "\u{643}"),
    (0xFC81, FoldKind::Complex, "\u{643}"), (0xFC82, FoldKind::Complex, "\u{643}"),
    (0xFC83, FoldKind::Complex, "\u{643}"), (0xFC84, FoldKind::Complex, "\u{643}"),
    (0xFC85, FoldKind::Complex, "\u{644}"), (0xFC86, FoldKind::Complex, "\u{644}"),
    (0xFC87, FoldKind::Complex, "\u{644}"), (0xFC88, FoldKind::Complex, "\u{645}"),
    (0xFC89, FoldKind::Complex, "\u{645}"), (0xFC8A, FoldKind::Complex, "\u{646}"),
    (0xFC8B, FoldKind::Complex, "\u{646}"), (0xFC8C, FoldKind::Complex, "\u{646}"),
    (0xFC8D, FoldKind::Complex, "\u{646}"), (0xFC8E, FoldKind::Complex, "\u{646}"),
    (0xFC8F, FoldKind::Complex, "\u{646}"), (0xFC90, FoldKind::LetterMarks, "\u{649}"),
    (0xFC91, FoldKind::Complex, "\u{64A}"), (0xFC92, FoldKind::Complex, "\u{64A}"),
    (0xFC93, FoldKind::Complex, "\u{64A}"), (0xFC94, FoldKind::Complex, "\u{64A}"),
    (0xFC95, FoldKind::Complex, "\u{64A}"), (0xFC96, FoldKind::Complex, "\u{64A}"),
    (0xFC97, FoldKind::Complex, "\u{64A}"), (0xFC98, FoldKind::Complex, "\u{64A}"),
    (0xFC99, FoldKind::Complex, "\u{64A}"), (0xFC9A, FoldKind::Complex, "\u{64A}"),
    (0xFC9B, FoldKind::Complex, "\u{64A}"), (0xFC9C, FoldKind::Complex, "\u{628}"),
    (0xFC9D, FoldKind::Complex, "\u{628}"), (0xFC9E, FoldKind::Complex, "\u{628}"),
    (0xFC9F, FoldKind::Complex, "\u{628}"), (0xFCA0, FoldKind::Complex, "\u{628}"),
    (0xFCA1, FoldKind::Complex, "\u{62A}"), (0xFCA2, FoldKind::Complex, "\u{62A}"),
    (0xFCA3, FoldKind::Complex, "\u{62A}"), (0xFCA4, FoldKind::Complex, "\u{62A}"),
    (0xFCA5, FoldKind::Complex, "\u{62A}"), (0xFCA6, FoldKind::Complex, "\u{62B}"),
    (0xFCA7, FoldKind::Complex, "\u{62C}"), (0xFCA8, FoldKind::Complex, "\u{62C}"),
    (0xFCA9, FoldKind::Complex, "\u{62D}"), (0xFCAA, FoldKind::Complex, "\u{62D}"),
    (0xFCAB, FoldKind::Complex, "\u{62E}"), (0xFCAC, FoldKind::Complex, "\u{62E}"),
    (0xFCAD, FoldKind::Complex, "\u{633}"), (0xFCAE, FoldKind::Complex, "\u{633}"),
    (0xFCAF, FoldKind::Complex, "\u{633}"), (0xFCB0, FoldKind::Complex, "\u{633}"),
    (0xFCB1, FoldKind::Complex, "\u{635}"), (0xFCB2, FoldKind::Complex, "\u{635}"),
    (0xFCB3, FoldKind::Complex, "\u{635}"), (0xFCB4, FoldKind::Complex, "\u{636}"),
    (0xFCB5, FoldKind::Complex, "\u{636}"), (0xFCB6, FoldKind::Complex, "\u{636}"),
    (0xFCB7, FoldKind::Complex, "\u{636}"), (0xFCB8, FoldKind::Complex, "\u{637}"),
    (0xFCB9, FoldKind::Complex, "\u{638}"), (0xFCBA, FoldKind::Complex, "\u{639}"),
    (0xFCBB, FoldKind::Complex, "\u{639}"), (0xFCBC, FoldKind::Complex, "\u{63A}"),
    (0xFCBD, FoldKind::Complex, "\u{63A}"), (0xFCBE, FoldKind::Complex, "\u{641}"),
    (0xFCBF, FoldKind::Complex, "\u{641}"), (0xFCC0, FoldKind::Complex, "\u{641}"),
    (0xFCC1, FoldKind::Complex, "\u{641}"), (0xFCC2, FoldKind::Complex, "\u{642}"),
    (0xFCC3, FoldKind::Complex, "\u{642}"), (0xFCC4, FoldKind::Complex, "\u{643}"),
    (0xFCC5, FoldKind::Complex, "\u{643}"), (0xFCC6, FoldKind::Complex, "\u{643}"),
    (0xFCC7, FoldKind::Complex, "\u{643}"), (0xFCC8, FoldKind::Complex, "\u{643}"),
    (0xFCC9, FoldKind::Complex, "\u{644}"), (0xFCCA, FoldKind::Complex, "\u{644}"),
    (0xFCCB, FoldKind::Complex, "\u{644}"), (0xFCCC, FoldKind::Complex, "\u{644}"),
    (0xFCCD, FoldKind::Complex, "\u{644}"), (0xFCCE, FoldKind::Complex, "\u{645}"),
    (0xFCCF, FoldKind::Complex, "\u{645}"), (0xFCD0, FoldKind::Complex, "\u{645}"),
    (0xFCD1, FoldKind::Complex, "\u{645}"), (0xFCD2, FoldKind::Complex, "\u{646}"),
    (0xFCD3, FoldKind::Complex, "\u{646}"), (0xFCD4, FoldKind::Complex, "\u{646}"),
    (0xFCD5, FoldKind::Complex, "\u{646}"), (0xFCD6, FoldKind::Complex, "\u{646}"),
    (0xFCD7, FoldKind::Complex, "\u{647}"), (0xFCD8, FoldKind::Complex, "\u{647}"),
    (0xFCD9, FoldKind::LetterMarks, "\u{647}"), (0xFCDA, FoldKind::Complex, "\u{64A}"),
    (0xFCDB, FoldKind::Complex, "\u{64A}"), (0xFCDC, FoldKind::Complex, "\u{64A}"),
    (0xFCDD, FoldKind::Complex, "\u{64A}"), (0xFCDE, FoldKind::Complex, "\u{64A}"),
    (0xFCDF, FoldKind::Complex, "\u{64A}"), (0xFCE0, FoldKind::Complex, "\u{64A}"),
    (0xFCE1, FoldKind::Complex, "\u{628}"), (0xFCE2, FoldKind::Complex, "\u{628}"),
    (0xFCE3, FoldKind::Complex, "\u{62A}"), (0xFCE4, FoldKind::Complex, "\u{62A}"),
    (0xFCE5, FoldKind::Complex, "\u{62B}"), (0xFCE6, FoldKind::Complex, "\u{62B}"),
    (0xFCE7, FoldKind::Complex, "\u{633}"), (0xFCE8, FoldKind::Complex, "\u{633}"),
    (0xFCE9, FoldKind::Complex, "\u{634}"), (0xFCEA, FoldKind::Complex, "\u{634}"),
    (0xFCEB, FoldKind::Complex, "\u{643}"), (0xFCEC, FoldKind::Complex, "\u{643}"),
    (0xFCED, FoldKind::Complex, "\u{644}"), (0xFCEE, FoldKind::Complex, "\u{646}"),
    (0xFCEF, FoldKind::Complex, "\u{646}"), (0xFCF0, FoldKind::Complex, "\u{64A}"),
    (0xFCF1, FoldKind::Complex, "\u{64A}"), (0xFCF2, FoldKind::LetterMarks, "\u{640}"),
    (0xFCF3, FoldKind::LetterMarks, "\u{640}"), (0xFCF4, FoldKind::LetterMarks, "\u{640}"),
    (0xFCF5, FoldKind::Complex, "\u{637}"), (0xFCF6, FoldKind::Complex, "\u{637}"),
    (0xFCF7, FoldKind::Complex, "\u{639}"), (0xFCF8, FoldKind::Complex, "\u{639}"),
    (0xFCF9, FoldKind::Complex, "\u{63A}"), (0xFCFA, FoldKind::Complex, "\u{63A}"),
    (0xFCFB, FoldKind::Complex, "\u{633}"), (0xFCFC, FoldKind::Complex, "\u{633}"),
    (0xFCFD, FoldKind::Complex, "\u{634}"), (0xFCFE, FoldKind::Complex, "\u{634}"),
    (0xFCFF, FoldKind::Complex, "\u{62D}"), (0xFD00, FoldKind::Complex, "\u{62D}"),
    (0xFD01, FoldKind::Complex, "\u{62C}"), (0xFD02, FoldKind::Complex, "\u{62C}"),
    (0xFD03, FoldKind::Complex, "\u{62E}"), (0xFD04, FoldKind::Complex, "\u{62E}"),
    (0xFD05, FoldKind::Complex, "\u{635}"), (0xFD06, FoldKind::Complex, "\u{635}"),
    (0xFD07, FoldKind::Complex, "\u{636}"), (0xFD08, FoldKind::Complex, "\u{636}"),
    (0xFD09, FoldKind::Complex, "\u{634}"), (0xFD0A, FoldKind::Complex, "\u{634}"),
    (0xFD0B, FoldKind::Complex, "\u{634}"), (0xFD0C, FoldKind::Complex, "\u{634}"),
    (0xFD0D, FoldKind::Complex, "\u{634}"), (0xFD0E, FoldKind::Complex, "\u{633}"),
    (0xFD0F, FoldKind::Complex, "\u{635}"), (0xFD10, FoldKind::Complex, "\u{636}"),
    (0xFD11, FoldKind::Complex, "\u{637}"), (0xFD12, FoldKind::Complex, "\u{637}"),
    (0xFD13, FoldKind::Complex, "\u{639}"), (0xFD14, FoldKind::Complex, "\u{639}"),
    (0xFD15, FoldKind::Complex, "\u{63A}"), (0xFD16, FoldKind::Complex, "\u{63A}"),
    (0xFD17, FoldKind::Complex, "\u{633}"), (0xFD18, FoldKind::Complex, "\u{633}"),
    (0xFD19, FoldKind::Complex, "\u{634}"), (0xFD1A, FoldKind::Complex, "\u{634}"),
    (0xFD1B, FoldKind::Complex, "\u{62D}"), (0xFD1C, FoldKind::Complex, "\u{62D}"),
    (0xFD1D, FoldKind::Complex, "\u{62C}"), (0xFD1E, FoldKind::Complex, "\u{62C}"),
    (0xFD1F, FoldKind::Complex, "\u{62E}"), (0xFD20, FoldKind::Complex, "\u{62E}"),
    (0xFD21, FoldKind::Complex, "\u{635}"), (0xFD22, FoldKind::Complex, "\u{635}"),
    (0xFD23, FoldKind::Complex, "\u{636}"), (0xFD24, FoldKind::Complex, "\u{636}"),
    (0xFD25, FoldKind::Complex, "\u{634}"), (0xFD26, FoldKind::Complex, "\u{634}"),
    (0xFD27, FoldKind::Complex, "\u{634}"), (0xFD28, FoldKind::Complex, "\u{634}"),
    (0xFD29, FoldKind::Complex, "\u{634}"), (0xFD2A, FoldKind::Complex, "\u{633}"),
    (0xFD2B, FoldKind::Complex, "\u{635}"), (0xFD2C, FoldKind::Complex, "\u{636}"),
    (0xFD2D, FoldKind::Complex, "\u{634}"), (0xFD2E, FoldKind::Complex, "\u{634}"),
    (0xFD2F, FoldKind::Complex, "\u{634}"), (0xFD30, FoldKind::Complex, "\u{634}"),
    (0xFD31, FoldKind::Complex, "\u{633}"), (0xFD32, FoldKind::Complex, "\u{634}"),
    (0xFD33, FoldKind::Complex, "\u{637}"), (0xFD34, FoldKind::Complex, "\u{633}"),
    (0xFD35, FoldKind::Complex, "\u{633}"), (0xFD36, FoldKind::Complex, "\u{633}"),
    (0xFD37, FoldKind::Complex, "\u{634}"), (0xFD38, FoldKind::Complex, "\u{634}"),
    (0xFD39, FoldKind::Complex, "\u{634}"), (0xFD3A, FoldKind::Complex, "\u{637}"),
    (0xFD3B, FoldKind::Complex, "\u{638}"), (0xFD3C, FoldKind::LetterMarks, "\u{627}"),
    (0xFD3D, FoldKind::LetterMarks, "\u{627}"), (0xFD50, FoldKind::Complex, "\u{62A}"),
    (0xFD51, FoldKind::Complex, "\u{62A}"), (0xFD52, FoldKind::Complex, "\u{62A}"),
    (0xFD53, FoldKind::Complex, "\u{62A}"), (0xFD54, FoldKind::Complex, "\u{62A}"),
    (0xFD55, FoldKind::Complex, "\u{62A}"), (0xFD56, FoldKind::Complex, "\u{62A}"),
    (0xFD57, FoldKind::Complex, "\u{62A}"), (0xFD58, FoldKind::Complex, "\u{62C}"),
    (0xFD59, FoldKind::Complex, "\u{62C}"), (0xFD5A, FoldKind::Complex, "\u{62D}"),
    (0xFD5B, FoldKind::Complex, "\u{62D}"), (0xFD5C, FoldKind::Complex, "\u{633}"),
    (0xFD5D, FoldKind::Complex, "\u{633}"), (0xFD5E, FoldKind::Complex, "\u{633}"),
    (0xFD5F, FoldKind::Complex, "\u{633}"), (0xFD60, FoldKind::Complex, "\u{633}"),
    (0xFD61, FoldKind::Complex, "\u{633}"), (0xFD62, FoldKind::Complex, "\u{633}"),
    (0xFD63, FoldKind::Complex, "\u{633}"), (0xFD64, FoldKind::Complex, "\u{635}"),
    (0xFD65, FoldKind::Complex, "\u{635}"), (0xFD66, FoldKind::Complex, "\u{635}"),
    (0xFD67, FoldKind::Complex, "\u{634}"), (0xFD68, FoldKind::Complex, "\u{634}"),
    (0xFD69, FoldKind::Complex, "\u{634}"), (0xFD6A, FoldKind::Complex, "\u{634}"),
    (0xFD6B, FoldKind::Complex, "\u{634}"), (0xFD6C, FoldKind::Complex, "\u{634}"),
    (0xFD6D, FoldKind::Complex, "\u{634}"), (0xFD6E, FoldKind::Complex, "\u{636}"),
    (0xFD6F, FoldKind::Complex, "\u{636}"), (0xFD70, FoldKind::Complex, "\u{636}"),
    (0xFD71, FoldKind::Complex, "\u{637}"), (0xFD72, FoldKind::Complex, "\u{637}"),
    (0xFD73, FoldKind::Complex, "\u{637}"), (0xFD74, FoldKind::Complex, "\u{637}"),
    (0xFD75, FoldKind::Complex, "\u{639}"), (0xFD76, FoldKind::Complex, "\u{639}"),
    (0xFD77, FoldKind::Complex, "\u{639}"), (0xFD78, FoldKind::Complex, "\u{639}"),
    (0xFD79, FoldKind::Complex, "\u{63A}"), (0xFD7A, FoldKind::Complex, "\u{63A}"),
    (0xFD7B, FoldKind::Complex, "\u{63A}"), (0xFD7C, FoldKind::Complex, "\u{641}"),
    (0xFD7D, FoldKind::Complex, "\u{641}"), (0xFD7E, FoldKind::Complex, "\u{642}"),
    (0xFD7F, FoldKind::Complex, "\u{642}"), (0xFD80, FoldKind::Complex, "\u{644}"),
    (0xFD81, FoldKind::Complex, "\u{644}"), (0xFD82, FoldKind::Complex, "\u{644}"),
    (0xFD83, FoldKind::Complex, "\u{644}"), (0xFD84, FoldKind::Complex, "\u{644}"),
    (0xFD85, FoldKind::Complex, "\u{644}"), (0xFD86, FoldKind::Complex, "\u{644}"),
    (0xFD87, FoldKind::Complex, "\u{644}"), (0xFD88, FoldKind::Complex, "\u{644}"),
    (0xFD89, FoldKind::Complex, "\u{645}"), (0xFD8A, FoldKind::Complex, "\u{645}"),
    (0xFD8B, FoldKind::Complex, "\u{645}"), (0xFD8C, FoldKind::Complex, "\u{645}"),
    (0xFD8D, FoldKind::Complex, "\u{645}"), (0xFD8E, FoldKind::Complex, "\u{645}"),
    (0xFD8F, FoldKind::Complex, "\u{645}"), (0xFD92, FoldKind::Complex, "\u{645}"),
    (0xFD93, FoldKind::Complex, "\u{647}"), (0xFD94, FoldKind::Complex, "\u{647}"),
    (0xFD95, FoldKind::Complex, "\u{646}"), (0xFD96, FoldKind::Complex, "\u{646}"),
    (0xFD97, FoldKind::Complex, "\u{646}"), (0xFD98, FoldKind::Complex, "\u{646}"),
    (0xFD99, FoldKind::Complex, "\u{646}"), (0xFD9A, FoldKind::Complex, "\u{646}"),
    (0xFD9B, FoldKind::Complex, "\u{646}"), (0xFD9C, FoldKind::Complex, "\u{64A}"),
    (0xFD9D, FoldKind::Complex, "\u{64A}"), (0xFD9E, FoldKind::Complex, "\u{628}"),
    (0xFD9F, FoldKind::Complex, "\u{62A}"), (0xFDA0, FoldKind::Complex, "\u{62A}"),
    (0xFDA1, FoldKind::Complex, "\u{62A}"), (0xFDA2, FoldKind::Complex, "\u{62A}"),
    (0xFDA3, FoldKind::Complex, "\u{62A}"), (0xFDA4, FoldKind::Complex, "\u{62A}"),
    (0xFDA5, FoldKind::Complex, "\u{62C}"), (0xFDA6, FoldKind::Complex, "\u{62C}"),
    (0xFDA7, FoldKind::Complex, "\u{62C}"), (0xFDA8, FoldKind::Complex, "\u{633}"),
    (0xFDA9, FoldKind::Complex, "\u{635}"), (0xFDAA, FoldKind::Complex, "\u{634}"),
    (0xFDAB, FoldKind::Complex, "\u{636}"), (0xFDAC, FoldKind::Complex, "\u{644}"),
    (0xFDAD, FoldKind::Complex, "\u{644}"), (0xFDAE, FoldKind::Complex, "\u{64A}"),
    (0xFDAF, FoldKind::Complex, "\u{64A}"), (0xFDB0, FoldKind::Complex, "\u{64A}"),
    (0xFDB1, FoldKind::Complex, "\u{645}"), (0xFDB2, FoldKind::Complex, "\u{642}"),
    (0xFDB3, FoldKind::Complex, "\u{646}"), (0xFDB4, FoldKind::Complex, "\u{642}"),
    (0xFDB5, FoldKind::Complex, "\u{644}"), (0xFDB6, FoldKind::Complex, "\u{639}"),
    (0xFDB7, FoldKind::Complex, "\u{643}"), (0xFDB8, FoldKind::Complex, "\u{646}"),
    (0xFDB9, FoldKind::Complex, "\u{645}"), (0xFDBA, FoldKind::Complex, "\u{644}"),
    (0xFDBB, FoldKind::Complex, "\u{643}"), (0xFDBC, FoldKind::Complex, "\u{644}"),
    (0xFDBD, FoldKind::Complex, "\u{646}"), (0xFDBE, FoldKind::Complex, "\u{62C}"),
    (0xFDBF, FoldKind::Complex, "\u{62D}"), (0xFDC0, FoldKind::Complex, "\u{645}"),
    (0xFDC1, FoldKind::Complex, "\u{641}"), (0xFDC2, FoldKind::Complex, "\u{628}"),
    (0xFDC3, FoldKind::Complex, "\u{643}"), (0xFDC4, FoldKind::Complex, "\u{639}"),
    (0xFDC5, FoldKind::Complex, "\u{635}"), (0xFDC6, FoldKind::Complex, "\u{633}"),
    (0xFDC7, FoldKind::Complex, "\u{646}"), (0xFDF0, FoldKind::Complex, "\u{635}"),
    (0xFDF1, FoldKind::Complex, "\u{642}"), (0xFDF2, FoldKind::Complex, "\u{627}"),
    (0xFDF3, FoldKind::Complex, "\u{627}"), (0xFDF4, FoldKind::Complex, "\u{645}"),
    (0xFDF5, FoldKind::Complex, "\u{635}"), (0xFDF6, FoldKind::Complex, "\u{631}"),
    (0xFDF7, FoldKind::Complex, "\u{639}"), (0xFDF8, FoldKind::Complex, "\u{648}"),
    (0xFDF9, FoldKind::Complex, "\u{635}"), (0xFDFA, FoldKind::Complex, "\u{635}"),
    (0xFDFB, FoldKind::Complex, "\u{62C}"), (0xFDFC, FoldKind::Complex, "\u{631}"),
    (0xFE10, FoldKind::Simple, ","), (0xFE11, FoldKind::Simple, "\u{3001}"),
    (0xFE12, FoldKind::Simple, "\u{3002}"), (0xFE13, FoldKind::Simple, ":"),
    (0xFE14, FoldKind::Simple, ";"), (0xFE15, FoldKind::Simple, "!"),
    (0xFE16, FoldKind::Simple, "?"), (0xFE17, FoldKind::Simple, "\u{3016}"),
    (0xFE18, FoldKind::Simple, "\u{3017}"), (0xFE19, FoldKind::Complex, "."),
    (0xFE30, FoldKind::Complex, "."), (0xFE31, FoldKind::Simple, "\u{2014}"),
    (0xFE32, FoldKind::Simple, "\u{2013}"), (0xFE33, FoldKind::Simple, "_"),
    (0xFE34, FoldKind::Simple, "_"), (0xFE35, FoldKind::Simple, "("),
    (0xFE36, FoldKind::Simple, ")"), (0xFE37, FoldKind::Simple, "{"),
    (0xFE38, FoldKind::Simple, "}"), (0xFE39, FoldKind::Simple, "\u{3014}"),
    (0xFE3A, FoldKind::Simple, "\u{3015}"), (0xFE3B, FoldKind::Simple, "\u{3010}"),
    (0xFE3C, FoldKind::Simple, "\u{3011}"), (0xFE3D, FoldKind::Simple, "\u{300A}"),
    (0xFE3E, FoldKind::Simple, "\u{300B}"), (0xFE3F, FoldKind::Simple, "\u{3008}"),
    (0xFE40, FoldKind::Simple, "\u{3009}"), (0xFE41, FoldKind::Simple, "\u{300C}"),
    (0xFE42, FoldKind::Simple, "\u{300D}"), (0xFE43, FoldKind::Simple, "\u{300E}"),
    (0xFE44, FoldKind::Simple, "\u{300F}"), (0xFE47, FoldKind::Simple, "["),
    (0xFE48, FoldKind::Simple, "]"), (0xFE49, FoldKind::LetterMarks, " "),
    (0xFE4A, FoldKind::LetterMarks, " "), (0xFE4B, FoldKind::LetterMarks, " "),
    (0xFE4C, FoldKind::LetterMarks, " "), (0xFE4D, FoldKind::Simple, "_"),
    (0xFE4E, FoldKind::Simple, "_"), (0xFE4F, FoldKind::Simple, "_"),
    (0xFE50, FoldKind::Simple, ","), (0xFE51, FoldKind::Simple, "\u{3001}"),
    (0xFE52, FoldKind::Simple, "."), (0xFE54, FoldKind::Simple, ";"),
    (0xFE55, FoldKind::Simple, ":"), (0xFE56, FoldKind::Simple, "?"),
    (0xFE57, FoldKind::Simple, "!"), (0xFE58, FoldKind::Simple, "\u{2014}"),
    (0xFE59, FoldKind::Simple, "("), (0xFE5A, FoldKind::Simple, ")"),
    (0xFE5B, FoldKind::Simple, "{"), (0xFE5C, FoldKind::Simple, "}"),
    (0xFE5D, FoldKind::Simple, "\u{3014}"), (0xFE5E, FoldKind::Simple, "\u{3015}"),
    (0xFE5F, FoldKind::Simple, "#"), (0xFE60, FoldKind::Simple, "&"),
    (0xFE61, FoldKind::Simple, "*"), (0xFE62, FoldKind::Simple, "+"),
    (0xFE63, FoldKind::Simple, "-"), (0xFE64, FoldKind::Simple, "<"),
    (0xFE65, FoldKind::Simple, ">"), (0xFE66, FoldKind::Simple, "="),
    (0xFE68, FoldKind::Simple, "\u{5C}"), (0xFE69, FoldKind::Simple, "$"),
    (0xFE6A, FoldKind::Simple, "%"), (0xFE6B, FoldKind::Simple, "@"),
    (0xFE70, FoldKind::LetterMarks, " "), (0xFE71, FoldKind::LetterMarks, "\u{640}"),
    (0xFE72, FoldKind::LetterMarks, " "), (0xFE74, FoldKind::LetterMarks, " "),
    (0xFE76, FoldKind::LetterMarks, " "), (0xFE77, FoldKind::LetterMarks, "\u{640}"),
    (0xFE78, FoldKind::LetterMarks, " "), (0xFE79, FoldKind::LetterMarks, "\u{640}"),
    (0xFE7A, FoldKind::LetterMarks, " "), (0xFE7B, FoldKind::LetterMarks, "\u{640}"),
    (0xFE7C, FoldKind::LetterMarks, " "), (0xFE7D, FoldKind::LetterMarks, "\u{640}"),
    (0xFE7E, FoldKind::LetterMarks, " "), (0xFE7F, FoldKind::LetterMarks, "\u{640}"),
    (0xFE80, FoldKind::Simple, "\u{621}"), (0xFE81, FoldKind::LetterMarks, "\u{627}"),
    (0xFE82, FoldKind::LetterMarks, "\u{627}"), (0xFE83, FoldKind::LetterMarks, "\u{627}"),
    (0xFE84, FoldKind::LetterMarks, "\u{627}"), (0xFE85, FoldKind::LetterMarks, "\u{648}"),
    (0xFE86, FoldKind::LetterMarks, "\u{648}"), (0xFE87, FoldKind::LetterMarks, "\u{627}"),
    (0xFE88, FoldKind::LetterMarks, "\u{627}"), (0xFE89, FoldKind::LetterMarks, "\u{64A}"),
    (0xFE8A, FoldKind::LetterMarks, "\u{64A}"), (0xFE8B, FoldKind::LetterMarks, "\u{64A}"),
    (0xFE8C, FoldKind::LetterMarks, "\u{64A}"), (0xFE8D, FoldKind::Simple, "\u{627}"),
    (0xFE8E, FoldKind::Simple, "\u{627}"), (0xFE8F, FoldKind::Simple, "\u{628}"),
    (0xFE90, FoldKind::Simple, "\u{628}"), (0xFE91, FoldKind::Simple, "\u{628}"),
    (0xFE92, FoldKind::Simple, "\u{628}"), (0xFE93, FoldKind::Simple, "\u{629}"),
    (0xFE94, FoldKind::Simple, "\u{629}"), (0xFE95, FoldKind::Simple, "\u{62A}"),
    (0xFE96, FoldKind::Simple, "\u{62A}"), (0xFE97, FoldKind::Simple, "\u{62A}"),
    (0xFE98, FoldKind::Simple, "\u{62A}"), (0xFE99, FoldKind::Simple, "\u{62B}"),
    (0xFE9A, FoldKind::Simple, "\u{62B}"), (0xFE9B, FoldKind::Simple, "\u{62B}"),
    (0xFE9C, FoldKind::Simple, "\u{62B}"), (0xFE9D, FoldKind::Simple, "\u{62C}"),
    (0xFE9E, FoldKind::Simple, "\u{62C}"), (0xFE9F, FoldKind::Simple, "\u{62C}"),
    (0xFEA0, FoldKind::Simple, "\u{62C}"), (0xFEA1, FoldKind::Simple, "\u{62D}"),
    (0xFEA2, FoldKind::Simple, "\u{62D}"), (0xFEA3, FoldKind::Simple, "\u{62D}"),
    (0xFEA4, FoldKind::Simple, "\u{62D}"), (0xFEA5, FoldKind::Simple, "\u{62E}"),
    (0xFEA6, FoldKind::Simple, "\u{62E}"), (0xFEA7, FoldKind::Simple, "\u{62E}"),
    (0xFEA8, FoldKind::Simple, "\u{62E}"), (0xFEA9, FoldKind::Simple, "\u{62F}"),
    (0xFEAA, FoldKind::Simple, "\u{62F}"), (0xFEAB, FoldKind::Simple, "\u{630}"),
    (0xFEAC, FoldKind::Simple, "\u{630}"), (0xFEAD, FoldKind::Simple, "\u{631}"),
    (0xFEAE, FoldKind::Simple, "\u{631}"), (0xFEAF, FoldKind::Simple, "\u{632}"),
    (0xFEB0, FoldKind::Simple, "\u{632}"), (0xFEB1, FoldKind::Simple, "\u{633}"),
    (0xFEB2, FoldKind::Simple, "\u{633}"), (0xFEB3, FoldKind::Simple, "\u{633}"),
    (0xFEB4, FoldKind::Simple, "\u{633}"), (0xFEB5, FoldKind::Simple, "\u{634}"),
    (0xFEB6, FoldKind::Simple, "\u{634}"), (0xFEB7, FoldKind::Simple, "\u{634}"),
    (0xFEB8, FoldKind::Simple, "\u{634}"), (0xFEB9, FoldKind::Simple, "\u{635}"),
    (0xFEBA, FoldKind::Simple, "\u{635}"), (0xFEBB, FoldKind::Simple, "\u{635}"),
    (0xFEBC, FoldKind::Simple, "\u{635}"), (0xFEBD, FoldKind::Simple, "\u{636}"),
    (0xFEBE, FoldKind::Simple, "\u{636}"), (0xFEBF, FoldKind::Simple, "\u{636}"),
    (0xFEC0, FoldKind::Simple, "\u{636}"), (0xFEC1, FoldKind::Simple, "\u{637}"),
    (0xFEC2, FoldKind::Simple, "\u{637}"), (0xFEC3, FoldKind::Simple, "\u{637}"),
    (0xFEC4, FoldKind::Simple, "\u{637}"), (0xFEC5, FoldKind::Simple, "\u{638}"),
    (0xFEC6, FoldKind::Simple, "\u{638}"), (0xFEC7, FoldKind::Simple, "\u{638}"),
    (0xFEC8, FoldKind::Simple, "\u{638}"), (0xFEC9, FoldKind::Simple, "\u{639}"),
    (0xFECA, FoldKind::Simple, "\u{639}"), (0xFECB, FoldKind::Simple, "\u{639}"),
    (0xFECC, FoldKind::Simple, "\u{639}"), (0xFECD, FoldKind::Simple, "\u{63A}"),
    (0xFECE, FoldKind::Simple, "\u{63A}"), (0xFECF, FoldKind::Simple, "\u{63A}"),
    (0xFED0, FoldKind::Simple, "\u{63A}"), (0xFED1, FoldKind::Simple, "\u{641}"),
    (0xFED2, FoldKind::Simple, "\u{641}"), (0xFED3, FoldKind::Simple, "\u{641}"),
    (0xFED4, FoldKind::Simple, "\u{641}"), (0xFED5, FoldKind::Simple, "\u{642}"),
    (0xFED6, FoldKind::Simple, "\u{642}"), (0xFED7, FoldKind::Simple, "\u{642}"),
    (0xFED8, FoldKind::Simple, "\u{642}"), (0xFED9, FoldKind::Simple, "\u{643}"),
    (0xFEDA, FoldKind::Simple, "\u{643}"), (0xFEDB, FoldKind::Simple, "\u{643}"),
    (0xFEDC, FoldKind::Simple, "\u{643}"), (0xFEDD, FoldKind::Simple, "\u{644}"),
    (0xFEDE, FoldKind::Simple, "\u{644}"), (0xFEDF, FoldKind::Simple, "\u{644}"),
    (0xFEE0, FoldKind::Simple, "\u{644}"), (0xFEE1, FoldKind::Simple, "\u{645}"),
    (0xFEE2, FoldKind::Simple, "\u{645}"), (0xFEE3, FoldKind::Simple, "\u{645}"),
    (0xFEE4, FoldKind::Simple, "\u{645}"), (0xFEE5, FoldKind::Simple, "\u{646}"),
    (0xFEE6, FoldKind::Simple, "\u{646}"), (0xFEE7, FoldKind::Simple, "\u{646}"),
    (0xFEE8, FoldKind::Simple, "\u{646}"), (0xFEE9, FoldKind::Simple, "\u{647}"),
    (0xFEEA, FoldKind::Simple, "\u{647}"), (0xFEEB, FoldKind::Simple, "\u{647}"),
    (0xFEEC, FoldKind::Simple, "\u{647}"), (0xFEED, FoldKind::Simple, "\u{648}"),
    (0xFEEE, FoldKind::Simple, "\u{648}"), (0xFEEF, FoldKind::Simple, "\u{649}"),
    (0xFEF0, FoldKind::Simple, "\u{649}"), (0xFEF1, FoldKind::Simple, "\u{64A}"),
    (0xFEF2, FoldKind::Simple, "\u{64A}"), (0xFEF3, FoldKind::Simple, "\u{64A}"),
    (0xFEF4, FoldKind::Simple, "\u{64A}"), (0xFEF5, FoldKind::Complex, "\u{644}"),
    (0xFEF6, FoldKind::Complex, "\u{644}"), (0xFEF7, FoldKind::Complex, "\u{644}"),
    (0xFEF8, FoldKind::Complex, "\u{644}"), (0xFEF9, FoldKind::Complex, "\u{644}"),
    (0xFEFA, FoldKind::Complex, "\u{644}"), (0xFEFB, FoldKind::Complex, "\u{644}"),
    (0xFEFC, FoldKind::Complex, "\u{644}"), (0xFF01, FoldKind::Simple, "!"),
    (0xFF02, FoldKind::Simple, "\u{22}"), (0xFF03, FoldKind::Simple, "#"),
    (0xFF04, FoldKind::Simple, "$"), (0xFF05, FoldKind::Simple, "%"),
    (0xFF06, FoldKind::Simple, "&"), (0xFF07, FoldKind::Simple, "'"),
    (0xFF08, FoldKind::Simple, "("), (0xFF09, FoldKind::Simple, ")"),
    (0xFF0A, FoldKind::Simple, "*"), (0xFF0B, FoldKind::Simple, "+"),
    (0xFF0C, FoldKind::Simple, ","), (0xFF0D, FoldKind::Simple, "-"),
    (0xFF0E, FoldKind::Simple, "."), (0xFF0F, FoldKind::Simple, "/"),
    (0xFF10, FoldKind::Simple, "0"), (0xFF11, FoldKind::Simple, "1"),
    (0xFF12, FoldKind::Simple, "2"), (0xFF13, FoldKind::Simple, "3"),
    (0xFF14, FoldKind::Simple, "4"), (0xFF15, FoldKind::Simple, "5"),
    (0xFF16, FoldKind::Simple, "6"), (0xFF17, FoldKind::Simple, "7"),
    (0xFF18, FoldKind::Simple, "8"), (0xFF19, FoldKind::Simple, "9"),
    (0xFF1A, FoldKind::Simple, ":"), (0xFF1B, FoldKind::Simple, ";"),
    (0xFF1C, FoldKind::Simple, "<"), (0xFF1D, FoldKind::Simple, "="),
    (0xFF1E, FoldKind::Simple, ">"), (0xFF1F, FoldKind::Simple, "?"),
    (0xFF20, FoldKind::Simple, "@"), (0xFF21, FoldKind::Simple, "A"),
    (0xFF22, FoldKind::Simple, "B"), (0xFF23, FoldKind::Simple, "C"),
    (0xFF24, FoldKind::Simple, "D"), (0xFF25, FoldKind::Simple, "E"),
    (0xFF26, FoldKind::Simple, "F"), (0xFF27, FoldKind::Simple, "G"),
    (0xFF28, FoldKind::Simple, "H"), (0xFF29, FoldKind::Simple, "I"),
    (0xFF2A, FoldKind::Simple, "J"), (0xFF2B, FoldKind::Simple, "K"),
    (0xFF2C, FoldKind::Simple, "L"), (0xFF2D, FoldKind::Simple, "M"),
    (0xFF2E, FoldKind::Simple, "N"), (0xFF2F, FoldKind::Simple, "O"),
    (0xFF30, FoldKind::Simple, "P"), (0xFF31, FoldKind::Simple, "Q"),
    (0xFF32, FoldKind::Simple, "R"), (0xFF33, FoldKind::Simple, "S"),
    (0xFF34, FoldKind::Simple, "T"), (0xFF35, FoldKind::Simple, "U"),
    (0xFF36, FoldKind::Simple, "V"), (0xFF37, FoldKind::Simple, "W"),
    (0xFF38, FoldKind::Simple, "X"), (0xFF39, FoldKind::Simple, "Y"),
    (0xFF3A, FoldKind::Simple, "Z"), (0xFF3B, FoldKind::Simple, "["),
    (0xFF3C, FoldKind::Simple, "\u{5C}"), (0xFF3D, FoldKind::Simple, "]"),
    (0xFF3E, FoldKind::Simple, "^"), (0xFF3F, FoldKind::Simple, "_"),
    (0xFF40, FoldKind::Simple, "`"), (0xFF41, FoldKind::Simple, "a"),
    (0xFF42, FoldKind::Simple, "b"), (0xFF43, FoldKind::Simple, "c"),
    (0xFF44, FoldKind::Simple, "d"), (0xFF45, FoldKind::Simple, "e"),
    (0xFF46, FoldKind::Simple, "f"), (0xFF47, FoldKind::Simple, "g"),
    (0xFF48, FoldKind::Simple, "h"), (0xFF49, FoldKind::Simple, "i"),
    (0xFF4A, FoldKind::Simple, "j"), (0xFF4B, FoldKind::Simple, "k"),
    (0xFF4C, FoldKind::Simple, "l"), (0xFF4D, FoldKind::Simple, "m"),
    (0xFF4E, FoldKind::Simple, "n"), (0xFF4F, FoldKind::Simple, "o"),
    (0xFF50, FoldKind::Simple, "p"), (0xFF51, FoldKind::Simple, "q"),
    (0xFF52, FoldKind::Simple, "r"), (0xFF53, FoldKind::Simple, "s"),
    (0xFF54, FoldKind::Simple, "t"), (0xFF55, FoldKind::Simple, "u"),
    (0xFF56, FoldKind::Simple, "v"), (0xFF57, FoldKind::Simple, "w"),
    (0xFF58, FoldKind::Simple, "x"), (0xFF59, FoldKind::Simple, "y"),
    (0xFF5A, FoldKind::Simple, "z"), (0xFF5B, FoldKind::Simple, "{"),
    (0xFF5C, FoldKind::Simple, "|"), (0xFF5D, FoldKind::Simple, "}"),
    (0xFF5E, FoldKind::Simple, "~"), (0xFF5F, FoldKind::Simple, "\u{2985}"),
    (0xFF60, FoldKind::Simple, "\u{2986}"), (0xFF61, FoldKind::Simple, "\u{3002}"),
    (0xFF62, FoldKind::Simple, "\u{300C}"), (0xFF63, FoldKind::Simple, "\u{300D}"),
    (0xFF64, FoldKind::Simple, "\u{3001}"), (0xFF65, FoldKind::Simple, "\u{30FB}"),
    (0xFF66, FoldKind::Simple, "\u{30F2}"), (0xFF67, FoldKind::Simple, "\u{30A1}"),
    (0xFF68, FoldKind::Simple, "\u{30A3}"), (0xFF69, FoldKind::Simple, "\u{30A5}"),
    (0xFF6A, FoldKind::Simple, "\u{30A7}"), (0xFF6B, FoldKind::Simple, "\u{30A9}"),
    (0xFF6C, FoldKind::Simple, "\u{30E3}"), (0xFF6D, FoldKind::Simple, "\u{30E5}"),
    (0xFF6E, FoldKind::Simple, "\u{30E7}"), (0xFF6F, FoldKind::Simple, "\u{30C3}"),
    (0xFF70, FoldKind::Simple, "\u{30FC}"), (0xFF71, FoldKind::Simple, "\u{30A2}"),
    (0xFF72, FoldKind::Simple, "\u{30A4}"), (0xFF73, FoldKind::Simple, "\u{30A6}"),
    (0xFF74, FoldKind::Simple, "\u{30A8}"), (0xFF75, FoldKind::Simple, "\u{30AA}"),
    (0xFF76, FoldKind::Simple, "\u{30AB}"), (0xFF77, FoldKind::Simple, "\u{30AD}"),
    (0xFF78, FoldKind::Simple, "\u{30AF}"), (0xFF79, FoldKind::Simple, "\u{30B1}"),
    (0xFF7A, FoldKind::Simple, "\u{30B3}"), (0xFF7B, FoldKind::Simple, "\u{30B5}"),
    (0xFF7C, FoldKind::Simple, "\u{30B7}"), (0xFF7D, FoldKind::Simple, "\u{30B9}"),
    (0xFF7E, FoldKind::Simple, "\u{30BB}"), (0xFF7F, FoldKind::Simple, "\u{30BD}"),
    (0xFF80, FoldKind::Simple, "\u{30BF}"), (0xFF81, FoldKind::Simple, "\u{30C1}"),
    (0xFF82, FoldKind::Simple, "\u{30C4}"), (0xFF83, FoldKind::Simple, "\u{30C6}"),
    (0xFF84, FoldKind::Simple, "\u{30C8}"), (0xFF85, FoldKind::Simple, "\u{30CA}"),
    (0xFF86, FoldKind::Simple, "\u{30CB}"), (0xFF87, FoldKind::Simple, "\u{30CC}"),
    (0xFF88, FoldKind::Simple, "\u{30CD}"), (0xFF89, FoldKind::Simple, "\u{30CE}"),
    (0xFF8A, FoldKind::Simple, "\u{30CF}"), (0xFF8B, FoldKind::Simple, "\u{30D2}"),
    (0xFF8C, FoldKind::Simple, "\u{30D5}"), (0xFF8D, FoldKind::Simple, "\u{30D8}"),
    (0xFF8E, FoldKind::Simple, "\u{30DB}"), (0xFF8F, FoldKind::Simple, "\u{30DE}"),
    (0xFF90, FoldKind::Simple, "\u{30DF}"), (0xFF91, FoldKind::Simple, "\u{30E0}"),
    (0xFF92, FoldKind::Simple, "\u{30E1}"), (0xFF93, FoldKind::Simple, "\u{30E2}"),
    (0xFF94, FoldKind::Simple, "\u{30E4}"), (0xFF95, FoldKind::Simple, "\u{30E6}"),
    (0xFF96, FoldKind::Simple, "\u{30E8}"), (0xFF97, FoldKind::Simple, "\u{30E9}"),
    (0xFF98, FoldKind::Simple, "\u{30EA}"), (0xFF99, FoldKind::Simple, "\u{30EB}"),
    (0xFF9A, FoldKind::Simple, "\u{30EC}"), (0xFF9B, FoldKind::Simple, "\u{30ED}"),
    (0xFF9C, FoldKind::Simple, "\u{30EF}"), (0xFF9D, FoldKind::Simple, "\u{30F3}"),
    (0xFF9E, FoldKind::Simple, "\u{3099}"), (0xFF9F, FoldKind::Simple, "\u{309A}"),
    (0xFFA0, FoldKind::Simple, "\u{1160}"), (0xFFA1, FoldKind::Simple, "\u{1100}"),
    (0xFFA2, FoldKind::Simple, "\u{1101}"), (0xFFA3, FoldKind::Simple, "\u{11AA}"),
    (0xFFA4, FoldKind::Simple, "\u{1102}"), (0xFFA5, FoldKind::Simple, "\u{11AC}"),
    (0xFFA6, FoldKind::Simple, "\u{11AD}"), (0xFFA7, FoldKind::Simple, "\u{1103}"),
    (0xFFA8, FoldKind::Simple, "\u{1104}"), (0xFFA9, FoldKind::Simple, "\u{1105}"),
    (0xFFAA, FoldKind::Simple, "\u{11B0}"), (0xFFAB, FoldKind::Simple, "\u{11B1}"),
    (0xFFAC, FoldKind::Simple, "\u{11B2}"), (0xFFAD, FoldKind::Simple, "\u{11B3}"),
    (0xFFAE, FoldKind::Simple, "\u{11B4}"), (0xFFAF, FoldKind::Simple, "\u{11B5}"),
    (0xFFB0, FoldKind::Simple, "\u{111A}"), (0xFFB1, FoldKind::Simple, "\u{1106}"),
    (0xFFB2, FoldKind::Simple, "\u{1107}"), (0xFFB3, FoldKind::Simple, "\u{1108}"),
    (0xFFB4, FoldKind::Simple, "\u{1121}"), (0xFFB5, FoldKind::Simple, "\u{1109}"),
    (0xFFB6, FoldKind::Simple, "\u{110A}"), (0xFFB7, FoldKind::Simple, "\u{110B}"),
    (0xFFB8, FoldKind::Simple, "\u{110C}"), (0xFFB9, FoldKind::Simple, "\u{110D}"),
    (0xFFBA, FoldKind::Simple, "\u{110E}"), (0xFFBB, FoldKind::Simple, "\u{110F}"),
    (0xFFBC, FoldKind::Simple, "\u{1110}"), (0xFFBD, FoldKind::Simple, "\u{1111}"),
    (0xFFBE, FoldKind::Simple, "\u{1112}"), (0xFFC2, FoldKind::Simple, "\u{1161}"),
    (0xFFC3, FoldKind::Simple, "\u{1162}"), (0xFFC4, FoldKind::Simple, "\u{1163}"),
    (0xFFC5, FoldKind::Simple, "\u{1164}"), (0xFFC6, FoldKind::Simple, "\u{1165}"),
    (0xFFC7, FoldKind::Simple, "\u{1166}"), (0xFFCA, FoldKind::Simple, "\u{1167}"),
    (0xFFCB, FoldKind::Simple, "\u{1168}"), (0xFFCC, FoldKind::Simple, "\u{1169}"),
    (0xFFCD, FoldKind::Simple, "\u{116A}"), (0xFFCE, FoldKind::Simple, "\u{116B}"),
    (0xFFCF, FoldKind::Simple, "\u{116C}"), (0xFFD2, FoldKind::Simple, "\u{116D}"),
    (0xFFD3, FoldKind::Simple, "\u{116E}"), (0xFFD4, FoldKind::Simple, "\u{116F}"),
    (0xFFD5, FoldKind::Simple, "\u{1170}"), (0xFFD6, FoldKind::Simple, "\u{1171}"),
    (0xFFD7, FoldKind::Simple, "\u{1172}"), (0xFFDA, FoldKind::Simple, "\u{1173}"),
    (0xFFDB, FoldKind::Simple, "\u{1174}"), (0xFFDC, FoldKind::Simple, "\u{1175}"),
    (0xFFE0, FoldKind::Simple, "\u{A2}"), (0xFFE1, FoldKind::Simple, "\u{A3}"),
    (0xFFE2, FoldKind::Simple, "\u{AC}"), (0xFFE3, FoldKind::LetterMarks, " "),
    (0xFFE4, FoldKind::Simple, "\u{A6}"), (0xFFE5, FoldKind::Simple, "\u{A5}"),
    (0xFFE6, FoldKind::Simple, "\u{20A9}"), (0xFFE8, FoldKind::Simple, "\u{2502}"),
    (0xFFE9, FoldKind::Simple, "\u{2190}"), (0xFFEA, FoldKind::Simple, "\u{2191}"),
    (0xFFEB, FoldKind::Simple, "\u{2192}"), (0xFFEC, FoldKind::Simple, "\u{2193}"),
    (0xFFED, FoldKind::Simple, "\u{25A0}"), (0xFFEE, FoldKind::Simple, "\u{25CB}"),
    (0x10781, FoldKind::Simple, "\u{2D0}"), (0x10782, FoldKind::Simple, "\u{2D1}"),
    (0x10783, FoldKind::Simple, "\u{E6}"), (0x10784, FoldKind::Simple, "\u{299}"),
    (0x10785, FoldKind::Simple, "\u{253}"), (0x10787, FoldKind::Simple, "\u{2A3}"),
    (0x10788, FoldKind::Simple, "\u{AB66}"), (0x10789, FoldKind::Simple, "\u{2A5}"),
    (0x1078A, FoldKind::Simple, "\u{2A4}"), (0x1078B, FoldKind::Simple, "\u{256}"),
    (0x1078C, FoldKind::Simple, "\u{257}"), (0x1078D, FoldKind::Simple, "\u{1D91}"),
    (0x1078E, FoldKind::Simple, "\u{258}"), (0x1078F, FoldKind::Simple, "\u{25E}"),
    (0x10790, FoldKind::Simple, "\u{2A9}"), (0x10791, FoldKind::Simple, "\u{264}"),
    (0x10792, FoldKind::Simple, "\u{262}"), (0x10793, FoldKind::Simple, "\u{260}"),
    (0x10794, FoldKind::Simple, "\u{29B}"), (0x10795, FoldKind::Simple, "\u{127}"),
    (0x10796, FoldKind::Simple, "\u{29C}"), (0x10797, FoldKind::Simple, "\u{267}"),
    (0x10798, FoldKind::Simple, "\u{284}"), (0x10799, FoldKind::Simple, "\u{2AA}"),
    (0x1079A, FoldKind::Simple, "\u{2AB}"), (0x1079B, FoldKind::Simple, "\u{26C}"),
    (0x1079C, FoldKind::Simple, "\u{1DF04}"), (0x1079D, FoldKind::Simple, "\u{A78E}"),
    (0x1079E, FoldKind::Simple, "\u{26E}"), (0x1079F, FoldKind::Simple, "\u{1DF05}"),
    (0x107A0, FoldKind::Simple, "\u{28E}"), (0x107A1, FoldKind::Simple, "\u{1DF06}"),
    (0x107A2, FoldKind::Simple, "\u{F8}"), (0x107A3, FoldKind::Simple, "\u{276}"),
    (0x107A4, FoldKind::Simple, "\u{277}"), (0x107A5, FoldKind::Simple, "q"),
    (0x107A6, FoldKind::Simple, "\u{27A}"), (0x107A7, FoldKind::Simple, "\u{1DF08}"),
    (0x107A8, FoldKind::Simple, "\u{27D}"), (0x107A9, FoldKind::Simple, "\u{27E}"),
    (0x107AA, FoldKind::Simple, "\u{280}"), (0x107AB, FoldKind::Simple, "\u{2A8}"),
    (0x107AC, FoldKind::Simple, "\u{2A6}"), (0x107AD, FoldKind::Simple, "\u{AB67}"),
    (0x107AE, FoldKind::Simple, "\u{2A7}"), (0x107AF, FoldKind::Simple, "\u{288}"),
    (0x107B0, FoldKind::Simple, "\u{2C71}"), (0x107B2, FoldKind::Simple, "\u{28F}"),
    (0x107B3, FoldKind::Simple, "\u{2A1}"), (0x107B4, FoldKind::Simple, "\u{2A2}"),
    (0x107B5, FoldKind::Simple, "\u{298}"), (0x107B6, FoldKind::Simple, "\u{1C0}"),
    (0x107B7, FoldKind::Simple, "\u{1C1}"), (0x107B8, FoldKind::Simple, "\u{1C2}"),
    (0x107B9, FoldKind::Simple, "\u{1DF0A}"), (0x107BA, FoldKind::Simple, "\u{1DF1E}"),
    (0x1109A, FoldKind::LetterMarks, "\u{11099}"), (0x1109C, FoldKind::LetterMarks, "\u{1109B}"),
    (0x110AB, FoldKind::LetterMarks, "\u{110A5}"), (0x1134B, FoldKind::Complex, "\u{11347}"),
    (0x1134C, FoldKind::Complex, "\u{11347}"), (0x114BB, FoldKind::LetterMarks, "\u{114B9}"),
    (0x114BC, FoldKind::Complex, "\u{114B9}"), (0x114BE, FoldKind::Complex, "\u{114B9}"),
    (0x115BA, FoldKind::Complex, "\u{115B8}"), (0x115BB, FoldKind::Complex, "\u{115B9}"),
    (0x11938, FoldKind::Complex, "\u{11935}"), (0x1D15E, FoldKind::Complex, "\u{1D157}"),
    (0x1D15F, FoldKind::Complex, "\u{1D158}"), (0x1D160, FoldKind::Complex, "\u{1D158}"),
    (0x1D161, FoldKind::Complex, "\u{1D158}"), (0x1D162, FoldKind::Complex, "\u{1D158}"),
    (0x1D163, FoldKind::Complex, "\u{1D158}"), (0x1D164, FoldKind::Complex, "\u{1D158}"),
    (0x1D1BB, FoldKind::Complex, "\u{1D1B9}"), (0x1D1BC, FoldKind::Complex, "\u{1D1BA}"),
    (0x1D1BD, FoldKind::Complex, "\u{1D1B9}"), (0x1D1BE, FoldKind::Complex, "\u{1D1BA}"),
    (0x1D1BF, FoldKind::Complex, "\u{1D1B9}"), (0x1D1C0, FoldKind::Complex, "\u{1D1BA}"),
    (0x1D400, FoldKind::Simple, "A"), (0x1D401, FoldKind::Simple, "B"),
    (0x1D402, FoldKind::Simple, "C"), (0x1D403, FoldKind::Simple, "D"),
    (0x1D404, FoldKind::Simple, "E"), (0x1D405, FoldKind::Simple, "F"),
    (0x1D406, FoldKind::Simple, "G"), (0x1D407, FoldKind::Simple, "H"),
    (0x1D408, FoldKind::Simple, "I"), (0x1D409, FoldKind::Simple, "J"),
    (0x1D40A, FoldKind::Simple, "K"), (0x1D40B, FoldKind::Simple, "L"),
    (0x1D40C, FoldKind::Simple, "M"), (0x1D40D, FoldKind::Simple, "N"),
    (0x1D40E, FoldKind::Simple, "O"), (0x1D40F, FoldKind::Simple, "P"),
    (0x1D410, FoldKind::Simple, "Q"), (0x1D411, FoldKind::Simple, "R"),
    (0x1D412, FoldKind::Simple, "S"), (0x1D413, FoldKind::Simple, "T"),
    (0x1D414, FoldKind::Simple, "U"), (0x1D415, FoldKind::Simple, "V"),
    (0x1D416, FoldKind::Simple, "W"), (0x1D417, FoldKind::Simple, "X"),
    (0x1D418, FoldKind::Simple, "Y"), (0x1D419, FoldKind::Simple, "Z"),
    (0x1D41A, FoldKind::Simple, "a"), (0x1D41B, FoldKind::Simple, "b"),
    (0x1D41C, FoldKind::Simple, "c"), (0x1D41D, FoldKind::Simple, "d"),
    (0x1D41E, FoldKind::Simple, "e"), (0x1D41F, FoldKind::Simple, "f"),
    (0x1D420, FoldKind::Simple, "g"), (0x1D421, FoldKind::Simple, "h"),
    (0x1D422, FoldKind::Simple, "i"), (0x1D423, FoldKind::Simple, "j"),
    (0x1D424, FoldKind::Simple, "k"), (0x1D425, FoldKind::Simple, "l"),
    (0x1D426, FoldKind::Simple, "m"), (0x1D427, FoldKind::Simple, "n"),
    (0x1D428, FoldKind::Simple, "o"), (0x1D429, FoldKind::Simple, "p"),
    (0x1D42A, FoldKind::Simple, "q"), (0x1D42B, FoldKind::Simple, "r"),
    (0x1D42C, FoldKind::Simple, "s"), (0x1D42D, FoldKind::Simple, "t"),
    (0x1D42E, FoldKind::Simple, "u"), (0x1D42F, FoldKind::Simple, "v"),
    (0x1D430, FoldKind::Simple, "w"), (0x1D431, FoldKind::Simple, "x"),
    (0x1D432, FoldKind::Simple, "y"), (0x1D433, FoldKind::Simple, "z"),
    (0x1D434, FoldKind::Simple, "A"), (0x1D435, FoldKind::Simple, "B"),
    (0x1D436, FoldKind::Simple, "C"), (0x1D437, FoldKind::Simple, "D"),
    (0x1D438, FoldKind::Simple, "E"), (0x1D439, FoldKind::Simple, "F"),
    (0x1D43A, FoldKind::Simple, "G"), (0x1D43B, FoldKind::Simple, "H"),
    (0x1D43C, FoldKind::Simple, "I"), (0x1D43D, FoldKind::Simple, "J"),
    (0x1D43E, FoldKind::Simple, "K"), (0x1D43F, FoldKind::Simple, "L"),
    (0x1D440, FoldKind::Simple, "M"), (0x1D441, FoldKind::Simple, "N"),
    (0x1D442, FoldKind::Simple, "O"), (0x1D443, FoldKind::Simple, "P"),
    (0x1D444, FoldKind::Simple, "Q"), (0x1D445, FoldKind::Simple, "R"),
    (0x1D446, FoldKind::Simple, "S"), (0x1D447, FoldKind::Simple, "T"),
    (0x1D448, FoldKind::Simple, "U"), (0x1D449, FoldKind::Simple, "V"),
    (0x1D44A, FoldKind::Simple, "W"), (0x1D44B, FoldKind::Simple, "X"),
    (0x1D44C, FoldKind::Simple, "Y"), (0x1D44D, FoldKind::Simple, "Z"),
    (0x1D44E, FoldKind::Simple, "a"), (0x1D44F, FoldKind::Simple, "b"),
    (0x1D450, FoldKind::Simple, "c"), (0x1D451, FoldKind::Simple, "d"),
    (0x1D452, FoldKind::Simple, "e"), (0x1D453, FoldKind::Simple, "f"),
    (0x1D454, FoldKind::Simple, "g"), (0x1D456, FoldKind::Simple, "i"),
    (0x1D457, FoldKind::Simple, "j"), (0x1D458, FoldKind::Simple, "k"),
    (0x1D459, FoldKind::Simple, "l"), (0x1D45A, FoldKind::Simple, "m"),
    (0x1D45B, FoldKind::Simple, "n"), (0x1D45C, FoldKind::Simple, "o"),
    (0x1D45D, FoldKind::Simple, "p"), (0x1D45E, FoldKind::Simple, "q"),
    (0x1D45F, FoldKind::Simple, "r"), (0x1D460, FoldKind::Simple, "s"),
    (0x1D461, FoldKind::Simple, "t"), (0x1D462, FoldKind::Simple, "u"),
    (0x1D463, FoldKind::Simple, "v"), (0x1D464, FoldKind::Simple, "w"),
    (0x1D465, FoldKind::Simple, "x"), (0x1D466, FoldKind::Simple, "y"),
    (0x1D467, FoldKind::Simple, "z"), (0x1D468, FoldKind::Simple, "A"),
    (0x1D469, FoldKind::Simple, "B"), (0x1D46A, FoldKind::Simple, "C"),
    (0x1D46B, FoldKind::Simple, "D"), (0x1D46C, FoldKind::Simple, "E"),
    (0x1D46D, FoldKind::Simple, "F"), (0x1D46E, FoldKind::Simple, "G"),
    (0x1D46F, FoldKind::Simple, "H"), (0x1D470, FoldKind::Simple, "I"),
    (0x1D471, FoldKind::Simple, "J"), (0x1D472, FoldKind::Simple, "K"),
    (0x1D473, FoldKind::Simple, "L"), (0x1D474, FoldKind::Simple, "M"),
    (0x1D475, FoldKind::Simple, "N"), (0x1D476, FoldKind::Simple, "O"),
    (0x1D477, FoldKind::Simple, "P"), (0x1D478, FoldKind::Simple, "Q"),
    (0x1D479, FoldKind::Simple, "R"), (0x1D47A, FoldKind::Simple, "S"),
    (0x1D47B, FoldKind::Simple, "T"), (0x1D47C, FoldKind::Simple, "U"),
    (0x1D47D, FoldKind::Simple, "V"), (0x1D47E, FoldKind::Simple, "W"),
    (0x1D47F, FoldKind::Simple, "X"), (0x1D480, FoldKind::Simple, "Y"),
    (0x1D481, FoldKind::Simple, "Z"), (0x1D482, FoldKind::Simple, "a"),
    (0x1D483, FoldKind::Simple, "b"), (0x1D484, FoldKind::Simple, "c"),
    (0x1D485, FoldKind::Simple, "d"), (0x1D486, FoldKind::Simple, "e"),
    (0x1D487, FoldKind::Simple, "f"), (0x1D488, FoldKind::Simple, "g"),
    (0x1D489, FoldKind::Simple, "h"), (0x1D48A, FoldKind::Simple, "i"),
    (0x1D48B, FoldKind::Simple, "j"), (0x1D48C, FoldKind::Simple, "k"),
    (0x1D48D, FoldKind::Simple, "l"), (0x1D48E, FoldKind::Simple, "m"),
    (0x1D48F, FoldKind::Simple, "n"), (0x1D490, FoldKind::Simple, "o"),
    (0x1D491, FoldKind::Simple, "p"), (0x1D492, FoldKind::Simple, "q"),
    (0x1D493, FoldKind::Simple, "r"), (0x1D494, FoldKind::Simple, "s"),
    (0x1D495, FoldKind::Simple, "t"), (0x1D496, FoldKind::Simple, "u"),
    (0x1D497, FoldKind::Simple, "v"), (0x1D498, FoldKind::Simple, "w"),
    (0x1D499, FoldKind::Simple, "x"), (0x1D49A, FoldKind::Simple, "y"),
    (0x1D49B, FoldKind::Simple, "z"), (0x1D49C, FoldKind::Simple, "A"),
    (0x1D49E, FoldKind::Simple, "C"), (0x1D49F, FoldKind::Simple, "D"),
    (0x1D4A2, FoldKind::Simple, "G"), (0x1D4A5, FoldKind::Simple, "J"),
    (0x1D4A6, FoldKind::Simple, "K"), (0x1D4A9, FoldKind::Simple, "N"),
    (0x1D4AA, FoldKind::Simple, "O"), (0x1D4AB, FoldKind::Simple, "P"),
    (0x1D4AC, FoldKind::Simple, "Q"), (0x1D4AE, FoldKind::Simple, "S"),
    (0x1D4AF, FoldKind::Simple, "T"), (0x1D4B0, FoldKind::Simple, "U"),
    (0x1D4B1, FoldKind::Simple, "V"), (0x1D4B2, FoldKind::Simple, "W"),
    (0x1D4B3, FoldKind::Simple, "X"), (0x1D4B4, FoldKind::Simple, "Y"),
    (0x1D4B5, FoldKind::Simple, "Z"), (0x1D4B6, FoldKind::Simple, "a"),
    (0x1D4B7, FoldKind::Simple, "b"), (0x1D4B8, FoldKind::Simple, "c"),
    (0x1D4B9, FoldKind::Simple, "d"), (0x1D4BB, FoldKind::Simple, "f"),
    (0x1D4BD, FoldKind::Simple, "h"), (0x1D4BE, FoldKind::Simple, "i"),
    (0x1D4BF, FoldKind::Simple, "j"), (0x1D4C0, FoldKind::Simple, "k"),
    (0x1D4C1, FoldKind::Simple, "l"), (0x1D4C2, FoldKind::Simple, "m"),
    (0x1D4C3, FoldKind::Simple, "n"), (0x1D4C5, FoldKind::Simple, "p"),
    (0x1D4C6, FoldKind::Simple, "q"), (0x1D4C7, FoldKind::Simple, "r"),
    (0x1D4C8, FoldKind::Simple, "s"), (0x1D4C9, FoldKind::Simple, "t"),
    (0x1D4CA, FoldKind::Simple, "u"), (0x1D4CB, FoldKind::Simple, "v"),
    (0x1D4CC, FoldKind::Simple, "w"), (0x1D4CD, FoldKind::Simple, "x"),
    (0x1D4CE, FoldKind::Simple, "y"), (0x1D4CF, FoldKind::Simple, "z"),
    (0x1D4D0, FoldKind::Simple, "A"), (0x1D4D1, FoldKind::Simple, "B"),
    (0x1D4D2, FoldKind::Simple, "C"), (0x1D4D3, FoldKind::Simple, "D"),
    (0x1D4D4, FoldKind::Simple, "E"), (0x1D4D5, FoldKind::Simple, "F"),
    (0x1D4D6, FoldKind::Simple, "G"), (0x1D4D7, FoldKind::Simple, "H"),
    (0x1D4D8, FoldKind::Simple, "I"), (0x1D4D9, FoldKind::Simple, "J"),
    (0x1D4DA, FoldKind::Simple, "K"), (0x1D4DB, FoldKind::Simple, "L"),
    (0x1D4DC, FoldKind::Simple, "M"), (0x1D4DD, FoldKind::Simple, "N"),
    (0x1D4DE, FoldKind::Simple, "O"), (0x1D4DF, FoldKind::Simple, "P"),
    (0x1D4E0, FoldKind::Simple, "Q"), (0x1D4E1, FoldKind::Simple, "R"),
    (0x1D4E2, FoldKind::Simple, "S"), (0x1D4E3, FoldKind::Simple, "T"),
    (0x1D4E4, FoldKind::Simple, "U"), (0x1D4E5, FoldKind::Simple, "V"),
    (0x1D4E6, FoldKind::Simple, "W"), (0x1D4E7, FoldKind::Simple, "X"),
    (0x1D4E8, FoldKind::Simple, "Y"), (0x1D4E9, FoldKind::Simple, "Z"),
    (0x1D4EA, FoldKind::Simple, "a"), (0x1D4EB, FoldKind::Simple, "b"),
    (0x1D4EC, FoldKind::Simple, "c"), (0x1D4ED, FoldKind::Simple, "d"),
    (0x1D4EE, FoldKind::Simple, "e"), (0x1D4EF, FoldKind::Simple, "f"),
    (0x1D4F0, FoldKind::Simple, "g"), (0x1D4F1, FoldKind::Simple, "h"),
    (0x1D4F2, FoldKind::Simple, "i"), (0x1D4F3, FoldKind::Simple, "j"),
    (0x1D4F4, FoldKind::Simple, "k"), (0x1D4F5, FoldKind::Simple, "l"),
    (0x1D4F6, FoldKind::Simple, "m"), (0x1D4F7, FoldKind::Simple, "n"),
    (0x1D4F8, FoldKind::Simple, "o"), (0x1D4F9, FoldKind::Simple, "p"),
    (0x1D4FA, FoldKind::Simple, "q"), (0x1D4FB, FoldKind::Simple, "r"),
    (0x1D4FC, FoldKind::Simple, "s"), (0x1D4FD, FoldKind::Simple, "t"),
    (0x1D4FE, FoldKind::Simple, "u"), (0x1D4FF, FoldKind::Simple, "v"),
    (0x1D500, FoldKind::Simple, "w"), (0x1D501, FoldKind::Simple, "x"),
    (0x1D502, FoldKind::Simple, "y"), (0x1D503, FoldKind::Simple, "z"),
    (0x1D504, FoldKind::Simple, "A"), (0x1D505, FoldKind::Simple, "B"),
    (0x1D507, FoldKind::Simple, "D"), (0x1D508, FoldKind::Simple, "E"),
    (0x1D509, FoldKind::Simple, "F"), (0x1D50A, FoldKind::Simple, "G"),
    (0x1D50D, FoldKind::Simple, "J"), (0x1D50E, FoldKind::Simple, "K"),
    (0x1D50F, FoldKind::Simple, "L"), (0x1D510, FoldKind::Simple, "M"),
    (0x1D511, FoldKind::Simple, "N"), (0x1D512, FoldKind::Simple, "O"),
    (0x1D513, FoldKind::Simple, "P"), (0x1D514, FoldKind::Simple, "Q"),
    (0x1D516, FoldKind::Simple, "S"), (0x1D517, FoldKind::Simple, "T"),
    (0x1D518, FoldKind::Simple, "U"), (0x1D519, FoldKind::Simple, "V"),
    (0x1D51A, FoldKind::Simple, "W"), (0x1D51B, FoldKind::Simple, "X"),
    (0x1D51C, FoldKind::Simple, "Y"), (0x1D51E, FoldKind::Simple, "a"),
    (0x1D51F, FoldKind::Simple, "b"), (0x1D520, FoldKind::Simple, "c"),
    (0x1D521, FoldKind::Simple, "d"), (0x1D522, FoldKind::Simple, "e"),
    (0x1D523, FoldKind::Simple, "f"), (0x1D524, FoldKind::Simple, "g"),
    (0x1D525, FoldKind::Simple, "h"), (0x1D526, FoldKind::Simple, "i"),
    (0x1D527, FoldKind::Simple, "j"), (0x1D528, FoldKind::Simple, "k"),
    (0x1D529, FoldKind::Simple, "l"), (0x1D52A, FoldKind::Simple, "m"),
    (0x1D52B, FoldKind::Simple, "n"), (0x1D52C, FoldKind::Simple, "o"),
    (0x1D52D, FoldKind::Simple, "p"), (0x1D52E, FoldKind::Simple, "q"),
    (0x1D52F, FoldKind::Simple, "r"), (0x1D530, FoldKind::Simple, "s"),
    (0x1D531, FoldKind::Simple, "t"), (0x1D532, FoldKind::Simple, "u"),
    (0x1D533, FoldKind::Simple, "v"), (0x1D534, FoldKind::Simple, "w"),
    (0x1D535, FoldKind::Simple, "x"), (0x1D536, FoldKind::Simple, "y"),
    (0x1D537, FoldKind::Simple, "z"), (0x1D538, FoldKind::Simple, "A"),
    (0x1D539, FoldKind::Simple, "B"), (0x1D53B, FoldKind::Simple, "D"),
    (0x1D53C, FoldKind::Simple, "E"), (0x1D53D, FoldKind::Simple, "F"),
    (0x1D53E, FoldKind::Simple, "G"), (0x1D540, FoldKind::Simple, "I"),
    (0x1D541, FoldKind::Simple, "J"), (0x1D542, FoldKind::Simple, "K"),
    (0x1D543, FoldKind::Simple, "L"), (0x1D544, FoldKind::Simple, "M"),
    (0x1D546, FoldKind::Simple, "O"), (0x1D54A, FoldKind::Simple, "S"),
    (0x1D54B, FoldKind::Simple, "T"), (0x1D54C, FoldKind::Simple, "U"),
    (0x1D54D, FoldKind::Simple, "V"), (0x1D54E, FoldKind::Simple, "W"),
    (0x1D54F, FoldKind::Simple, "X"), (0x1D550, FoldKind::Simple, "Y"),
    (0x1D552, FoldKind::Simple, "a"), (0x1D553, FoldKind::Simple, "b"),
    (0x1D554, FoldKind::Simple, "c"), (0x1D555, FoldKind::Simple, "d"),
    (0x1D556, FoldKind::Simple, "e"), (0x1D557, FoldKind::Simple, "f"),
    (0x1D558, FoldKind::Simple, "g"), (0x1D559, FoldKind::Simple, "h"),
    (0x1D55A, FoldKind::Simple, "i"), (0x1D55B, FoldKind::Simple, "j"),
    (0x1D55C, FoldKind::Simple, "k"), (0x1D55D, FoldKind::Simple, "l"),
    (0x1D55E, FoldKind::Simple, "m"), (0x1D55F, FoldKind::Simple, "n"),
    (0x1D560, FoldKind::Simple, "o"), (0x1D561, FoldKind::Simple, "p"),
    (0x1D562, FoldKind::Simple, "q"), (0x1D563, FoldKind::Simple, "r"),
    (0x1D564, FoldKind::Simple, "s"), (0x1D565, FoldKind::Simple, "t"),
    (0x1D566, FoldKind::Simple, "u"), (0x1D567, FoldKind::Simple, "v"),
    (0x1D568, FoldKind::Simple, "w"), (0x1D569, FoldKind::Simple, "x"),
    (0x1D56A, FoldKind::Simple, "y"), (0x1D56B, FoldKind::Simple, "z"),
    (0x1D56C, FoldKind::Simple, "A"), (0x1D56D, FoldKind::Simple, "B"),
    (0x1D56E, FoldKind::Simple, "C"), (0x1D56F, FoldKind::Simple, "D"),
    (0x1D570, FoldKind::Simple, "E"), (0x1D571, FoldKind::Simple, "F"),
    (0x1D572, FoldKind::Simple, "G"), (0x1D573, FoldKind::Simple, "H"),
    (0x1D574, FoldKind::Simple, "I"), (0x1D575, FoldKind::Simple, "J"),
    (0x1D576, FoldKind::Simple, "K"), (0x1D577, FoldKind::Simple, "L"),
    (0x1D578, FoldKind::Simple, "M"), (0x1D579, FoldKind::Simple, "N"),
    (0x1D57A, FoldKind::Simple, "O"), (0x1D57B, FoldKind::Simple, "P"),
    (0x1D57C, FoldKind::Simple, "Q"), (0x1D57D, FoldKind::Simple, "R"),
    (0x1D57E, FoldKind::Simple, "S"), (0x1D57F, FoldKind::Simple, "T"),
    (0x1D580, FoldKind::Simple, "U"), (0x1D581, FoldKind::Simple, "V"),
    (0x1D582, FoldKind::Simple, "W"), (0x1D583, FoldKind::Simple, "X"),
    (0x1D584, FoldKind::Simple, "Y"), (0x1D585, FoldKind::Simple, "Z"),
    (0x1D586, FoldKind::Simple, "a"), (0x1D587, FoldKind::Simple, "b"),
    (0x1D588, FoldKind::Simple, "c"), (0x1D589, FoldKind::Simple, "d"),
    (0x1D58A, FoldKind::Simple, "e"), (0x1D58B, FoldKind::Simple, "f"),
    (0x1D58C, FoldKind::Simple, "g"), (0x1D58D, FoldKind::Simple, "h"),
    (0x1D58E, FoldKind::Simple, "i"), (0x1D58F, FoldKind::Simple, "j"),
    (0x1D590, FoldKind::Simple, "k"), (0x1D591, FoldKind::Simple, "l"),
    (0x1D592, FoldKind::Simple, "m"), (0x1D593, FoldKind::Simple, "n"),
    (0x1D594, FoldKind::Simple, "o"), (0x1D595, FoldKind::Simple, "p"),
    (0x1D596, FoldKind::Simple, "q"), (0x1D597, FoldKind::Simple, "r"),
    (0x1D598, FoldKind::Simple, "s"), (0x1D599, FoldKind::Simple, "t"),
    (0x1D59A, FoldKind::Simple, "u"), (0x1D59B, FoldKind::Simple, "v"),
    (0x1D59C, FoldKind::Simple, "w"), (0x1D59D, FoldKind::Simple, "x"),
    (0x1D59E, FoldKind::Simple, "y"), (0x1D59F, FoldKind::Simple, "z"),
    (0x1D5A0, FoldKind::Simple, "A"), (0x1D5A1, FoldKind::Simple, "B"),
    (0x1D5A2, FoldKind::Simple, "C"), (0x1D5A3, FoldKind::Simple, "D"),
    (0x1D5A4, FoldKind::Simple, "E"), (0x1D5A5, FoldKind::Simple, "F"),
    (0x1D5A6, FoldKind::Simple, "G"), (0x1D5A7, FoldKind::Simple, "H"),
    (0x1D5A8, FoldKind::Simple, "I"), (0x1D5A9, FoldKind::Simple, "J"),
    (0x1D5AA, FoldKind::Simple, "K"), (0x1D5AB, FoldKind::Simple, "L"),
    (0x1D5AC, FoldKind::Simple, "M"), (0x1D5AD, FoldKind::Simple, "N"),
    (0x1D5AE, FoldKind::Simple, "O"), (0x1D5AF, FoldKind::Simple, "P"),
    (0x1D5B0, FoldKind::Simple, "Q"), (0x1D5B1, FoldKind::Simple, "R"),
    (0x1D5B2, FoldKind::Simple, "S"), (0x1D5B3, FoldKind::Simple, "T"),
    (0x1D5B4, FoldKind::Simple, "U"), (0x1D5B5, FoldKind::Simple, "V"),
    (0x1D5B6, FoldKind::Simple, "W"), (0x1D5B7, FoldKind::Simple, "X"),
    (0x1D5B8, FoldKind::Simple, "Y"), (0x1D5B9, FoldKind::Simple, "Z"),
    (0x1D5BA, FoldKind::Simple, "a"), (0x1D5BB, FoldKind::Simple, "b"),
    (0x1D5BC, FoldKind::Simple, "c"), (0x1D5BD, FoldKind::Simple, "d"),
    (0x1D5BE, FoldKind::Simple, "e"), (0x1D5BF, FoldKind::Simple, "f"),
    (0x1D5C0, FoldKind::Simple, "g"), (0x1D5C1, FoldKind::Simple, "h"),
    (0x1D5C2, FoldKind::Simple, "i"), (0x1D5C3, FoldKind::Simple, "j"),
    (0x1D5C4, FoldKind::Simple, "k"), (0x1D5C5, FoldKind::Simple, "l"),
    (0x1D5C6, FoldKind::Simple, "m"), (0x1D5C7, FoldKind::Simple, "n"),
    (0x1D5C8, FoldKind::Simple, "o"), (0x1D5C9, FoldKind::Simple, "p"),
    (0x1D5CA, FoldKind::Simple, "q"), (0x1D5CB, FoldKind::Simple, "r"),
    (0x1D5CC, FoldKind::Simple, "s"), (0x1D5CD, FoldKind::Simple, "t"),
    (0x1D5CE, FoldKind::Simple, "u"), (0x1D5CF, FoldKind::Simple, "v"),
    (0x1D5D0, FoldKind::Simple, "w"), (0x1D5D1, FoldKind::Simple, "x"),
    (0x1D5D2, FoldKind::Simple, "y"), (0x1D5D3, FoldKind::Simple, "z"),
    (0x1D5D4, FoldKind::Simple, "A"), (0x1D5D5, FoldKind::Simple, "B"),
    (0x1D5D6, FoldKind::Simple, "C"), (0x1D5D7, FoldKind::Simple, "D"),
    (0x1D5D8, FoldKind::Simple, "E"), (0x1D5D9, FoldKind::Simple, "F"),
    (0x1D5DA, FoldKind::Simple, "G"), (0x1D5DB, FoldKind::Simple, "H"),
    (0x1D5DC, FoldKind::Simple, "I"), (0x1D5DD, FoldKind::Simple, "J"),
    (0x1D5DE, FoldKind::Simple, "K"), (0x1D5DF, FoldKind::Simple, "L"),
    (0x1D5E0, FoldKind::Simple, "M"), (0x1D5E1, FoldKind::Simple, "N"),
    (0x1D5E2, FoldKind::Simple, "O"), (0x1D5E3, FoldKind::Simple, "P"),
    (0x1D5E4, FoldKind::Simple, "Q"), (0x1D5E5, FoldKind::Simple, "R"),
    (0x1D5E6, FoldKind::Simple, "S"), (0x1D5E7, FoldKind::Simple, "T"),
    (0x1D5E8, FoldKind::Simple, "U"), (0x1D5E9, FoldKind::Simple, "V"),
    (0x1D5EA, FoldKind::Simple, "W"), (0x1D5EB, FoldKind::Simple, "X"),
    (0x1D5EC, FoldKind::Simple, "Y"), (0x1D5ED, FoldKind::Simple, "Z"),
    (0x1D5EE, FoldKind::Simple, "a"), (0x1D5EF, FoldKind::Simple, "b"),
    (0x1D5F0, FoldKind::Simple, "c"), (0x1D5F1, FoldKind::Simple, "d"),
    (0x1D5F2, FoldKind::Simple, "e"), (0x1D5F3, FoldKind::Simple, "f"),
    (0x1D5F4, FoldKind::Simple, "g"), (0x1D5F5, FoldKind::Simple, "h"),
    (0x1D5F6, FoldKind::Simple, "i"), (0x1D5F7, FoldKind::Simple, "j"),
    (0x1D5F8, FoldKind::Simple, "k"), (0x1D5F9, FoldKind::Simple, "l"),
    (0x1D5FA, FoldKind::Simple, "m"), (0x1D5FB, FoldKind::Simple, "n"),
    (0x1D5FC, FoldKind::Simple, "o"), (0x1D5FD, FoldKind::Simple, "p"),
    (0x1D5FE, FoldKind::Simple, "q"), (0x1D5FF, FoldKind::Simple, "r"),
    (0x1D600, FoldKind::Simple, "s"), (0x1D601, FoldKind::Simple, "t"),
    (0x1D602, FoldKind::Simple, "u"), (0x1D603, FoldKind::Simple, "v"),
    (0x1D604, FoldKind::Simple, "w"), (0x1D605, FoldKind::Simple, "x"),
    (0x1D606, FoldKind::Simple, "y"), (0x1D607, FoldKind::Simple, "z"),
    (0x1D608, FoldKind::Simple, "A"), (0x1D609, FoldKind::Simple, "B"),
    (0x1D60A, FoldKind::Simple, "C"), (0x1D60B, FoldKind::Simple, "D"),
    (0x1D60C, FoldKind::Simple, "E"), (0x1D60D, FoldKind::Simple, "F"),
    (0x1D60E, FoldKind::Simple, "G"), (0x1D60F, FoldKind::Simple, "H"),
    (0x1D610, FoldKind::Simple, "I"), (0x1D611, FoldKind::Simple, "J"),
    (0x1D612, FoldKind::Simple, "K"), (0x1D613, FoldKind::Simple, "L"),
    (0x1D614, FoldKind::Simple, "M"), (0x1D615, FoldKind::Simple, "N"),
    (0x1D616, FoldKind::Simple, "O"), (0x1D617, FoldKind::Simple, "P"),
    (0x1D618, FoldKind::Simple, "Q"), (0x1D619, FoldKind::Simple, "R"),
    (0x1D61A, FoldKind::Simple, "S"), (0x1D61B, FoldKind::Simple, "T"),
    (0x1D61C, FoldKind::Simple, "U"), (0x1D61D, FoldKind::Simple, "V"),
    (0x1D61E, FoldKind::Simple, "W"), (0x1D61F, FoldKind::Simple, "X"),
    (0x1D620, FoldKind::Simple, "Y"), (0x1D621, FoldKind::Simple, "Z"),
    (0x1D622, FoldKind::Simple, "a"), (0x1D623, FoldKind::Simple, "b"),
    (0x1D624, FoldKind::Simple, "c"), (0x1D625, FoldKind::Simple, "d"),
    (0x1D626, FoldKind::Simple, "e"), (0x1D627, FoldKind::Simple, "f"),
    (0x1D628, FoldKind::Simple, "g"), (0x1D629, FoldKind::Simple, "h"),
    (0x1D62A, FoldKind::Simple, "i"), (0x1D62B, FoldKind::Simple, "j"),
    (0x1D62C, FoldKind::Simple, "k"), (0x1D62D, FoldKind::Simple, "l"),
    (0x1D62E, FoldKind::Simple, "m"), (0x1D62F, FoldKind::Simple, "n"),
    (0x1D630, FoldKind::Simple, "o"), (0x1D631, FoldKind::Simple, "p"),
    (0x1D632, FoldKind::Simple, "q"), (0x1D633, FoldKind::Simple, "r"),
    (0x1D634, FoldKind::Simple, "s"), (0x1D635, FoldKind::Simple, "t"),
    (0x1D636, FoldKind::Simple, "u"), (0x1D637, FoldKind::Simple, "v"),
    (0x1D638, FoldKind::Simple, "w"), (0x1D639, FoldKind::Simple, "x"),
    (0x1D63A, FoldKind::Simple, "y"), (0x1D63B, FoldKind::Simple, "z"),
    (0x1D63C, FoldKind::Simple, "A"), (0x1D63D, FoldKind::Simple, "B"),
    (0x1D63E, FoldKind::Simple, "C"), (0x1D63F, FoldKind::Simple, "D"),
    (0x1D640, FoldKind::Simple, "E"), (0x1D641, FoldKind::Simple, "F"),
    (0x1D642, FoldKind::Simple, "G"), (0x1D643, FoldKind::Simple, "H"),
    (0x1D644, FoldKind::Simple, "I"), (0x1D645, FoldKind::Simple, "J"),
    (0x1D646, FoldKind::Simple, "K"), (0x1D647, FoldKind::Simple, "L"),
    (0x1D648, FoldKind::Simple, "M"), (0x1D649, FoldKind::Simple, "N"),
    (0x1D64A, FoldKind::Simple, "O"), (0x1D64B, FoldKind::Simple, "P"),
    (0x1D64C, FoldKind::Simple, "Q"), (0x1D64D, FoldKind::Simple, "R"),
    (0x1D64E, FoldKind::Simple, "S"), (0x1D64F, FoldKind::Simple, "T"),
    (0x1D650, FoldKind::Simple, "U"), (0x1D651, FoldKind::Simple, "V"),
    (0x1D652, FoldKind::Simple, "W"), (0x1D653, FoldKind::Simple, "X"),
    (0x1D654, FoldKind::Simple, "Y"), (0x1D655, FoldKind::Simple, "Z"),
    (0x1D656, FoldKind::Simple, "a"), (0x1D657, FoldKind::Simple, "b"),
    (0x1D658, FoldKind::Simple, "c"), (0x1D659, FoldKind::Simple, "d"),
    (0x1D65A, FoldKind::Simple, "e"), (0x1D65B, FoldKind::Simple, "f"),
    (0x1D65C, FoldKind::Simple, "g"), (0x1D65D, FoldKind::Simple, "h"),
    (0x1D65E, FoldKind::Simple, "i"), (0x1D65F, FoldKind::Simple, "j"),
    (0x1D660, FoldKind::Simple, "k"), (0x1D661, FoldKind::Simple, "l"),
    (0x1D662, FoldKind::Simple, "m"), (0x1D663, FoldKind::Simple, "n"),
    (0x1D664, FoldKind::Simple, "o"), (0x1D665, FoldKind::Simple, "p"),
    (0x1D666, FoldKind::Simple, "q"), (0x1D667, FoldKind::Simple, "r"),
    (0x1D668, FoldKind::Simple, "s"), (0x1D669, FoldKind::Simple, "t"),
    (0x1D66A, FoldKind::Simple, "u"), (0x1D66B, FoldKind::Simple, "v"),
    (0x1D66C, FoldKind::Simple, "w"), (0x1D66D, FoldKind::Simple, "x"),
    (0x1D66E, FoldKind::Simple, "y"), (0x1D66F, FoldKind::Simple, "z"),
    (0x1D670, FoldKind::Simple, "A"), (0x1D671, FoldKind::Simple, "B"),
    (0x1D672, FoldKind::Simple, "C"), (0x1D673, FoldKind::Simple, "D"),
    (0x1D674, FoldKind::Simple, "E"), (0x1D675, FoldKind::Simple, "F"),
    (0x1D676, FoldKind::Simple, "G"), (0x1D677, FoldKind::Simple, "H"),
    (0x1D678, FoldKind::Simple, "I"), (0x1D679, FoldKind::Simple, "J"),
    (0x1D67A, FoldKind::Simple, "K"), (0x1D67B, FoldKind::Simple, "L"),
    (0x1D67C, FoldKind::Simple, "M"), (0x1D67D, FoldKind::Simple, "N"),
    (0x1D67E, FoldKind::Simple, "O"), (0x1D67F, FoldKind::Simple, "P"),
    (0x1D680, FoldKind::Simple, "Q"), (0x1D681, FoldKind::Simple, "R"),
    (0x1D682, FoldKind::Simple, "S"), (0x1D683, FoldKind::Simple, "T"),
    (0x1D684, FoldKind::Simple, "U"), (0x1D685, FoldKind::Simple, "V"),
    (0x1D686, FoldKind::Simple, "W"), (0x1D687, FoldKind::Simple, "X"),
    (0x1D688, FoldKind::Simple, "Y"), (0x1D689, FoldKind::Simple, "Z"),
    (0x1D68A, FoldKind::Simple, "a"), (0x1D68B, FoldKind::Simple, "b"),
    (0x1D68C, FoldKind::Simple, "c"), (0x1D68D, FoldKind::Simple, "d"),
    (0x1D68E, FoldKind::Simple, "e"), (0x1D68F, FoldKind::Simple, "f"),
    (0x1D690, FoldKind::Simple, "g"), (0x1D691, FoldKind::Simple, "h"),
    (0x1D692, FoldKind::Simple, "i"), (0x1D693, FoldKind::Simple, "j"),
    (0x1D694, FoldKind::Simple, "k"), (0x1D695, FoldKind::Simple, "l"),
    (0x1D696, FoldKind::Simple, "m"), (0x1D697, FoldKind::Simple, "n"),
    (0x1D698, FoldKind::Simple, "o"), (0x1D699, FoldKind::Simple, "p"),
    (0x1D69A, FoldKind::Simple, "q"), (0x1D69B, FoldKind::Simple, "r"),
    (0x1D69C, FoldKind::Simple, "s"), (0x1D69D, FoldKind::Simple, "t"),
    (0x1D69E, FoldKind::Simple, "u"), (0x1D69F, FoldKind::Simple, "v"),
    (0x1D6A0, FoldKind::Simple, "w"), (0x1D6A1, FoldKind::Simple, "x"),
    (0x1D6A2, FoldKind::Simple, "y"), (0x1D6A3, FoldKind::Simple, "z"),
    (0x1D6A4, FoldKind::Simple, "\u{131}"), (0x1D6A5, FoldKind::Simple, "\u{237}"),
    (0x1D6A8, FoldKind::Simple, "\u{391}"), (0x1D6A9, FoldKind::Simple, "\u{392}"),
    (0x1D6AA, FoldKind::Simple, "\u{393}"), (0x1D6AB, FoldKind::Simple, "\u{394}"),
    (0x1D6AC, FoldKind::Simple, "\u{395}"), (0x1D6AD, FoldKind::Simple, "\u{396}"),
    (0x1D6AE, FoldKind::Simple, "\u{397}"), (0x1D6AF, FoldKind::Simple, "\u{398}"),
    (0x1D6B0, FoldKind::Simple, "\u{399}"), (0x1D6B1, FoldKind::Simple, "\u{39A}"),
    (0x1D6B2, FoldKind::Simple, "\u{39B}"), (0x1D6B3, FoldKind::Simple, "\u{39C}"),
    (0x1D6B4, FoldKind::Simple, "\u{39D}"), (0x1D6B5, FoldKind::Simple, "\u{39E}"),
    (0x1D6B6, FoldKind::Simple, "\u{39F}"), (0x1D6B7, FoldKind::Simple, "\u{3A0}"),
    (0x1D6B8, FoldKind::Simple, "\u{3A1}"), (0x1D6B9, FoldKind::Simple, "\u{398}"),
    (0x1D6BA, FoldKind::Simple, "\u{3A3}"), (0x1D6BB, FoldKind::Simple, "\u{3A4}"),
    (0x1D6BC, FoldKind::Simple, "\u{3A5}"), (0x1D6BD, FoldKind::Simple, "\u{3A6}"),
    (0x1D6BE, FoldKind::Simple, "\u{3A7}"), (0x1D6BF, FoldKind::Simple, "\u{3A8}"),
    (0x1D6C0, FoldKind::Simple, "\u{3A9}"), (0x1D6C1, FoldKind::Simple, "\u{2207}"),
    (0x1D6C2, FoldKind::Simple, "\u{3B1}"), (0x1D6C3, FoldKind::Simple, "\u{3B2}"),
    (0x1D6C4, FoldKind::Simple, "\u{3B3}"), (0x1D6C5, FoldKind::Simple, "\u{3B4}"),
    (0x1D6C6, FoldKind::Simple, "\u{3B5}"), (0x1D6C7, FoldKind::Simple, "\u{3B6}"),
    (0x1D6C8, FoldKind::Simple, "\u{3B7}"), (0x1D6C9, FoldKind::Simple, "\u{3B8}"),
    (0x1D6CA, FoldKind::Simple, "\u{3B9}"), (0x1D6CB, FoldKind::Simple, "\u{3BA}"),
    (0x1D6CC, FoldKind::Simple, "\u{3BB}"), (0x1D6CD, FoldKind::Simple, "\u{3BC}"),
    (0x1D6CE, FoldKind::Simple, "\u{3BD}"), (0x1D6CF, FoldKind::Simple, "\u{3BE}"),
    (0x1D6D0, FoldKind::Simple, "\u{3BF}"), (0x1D6D1, FoldKind::Simple, "\u{3C0}"),
    (0x1D6D2, FoldKind::Simple, "\u{3C1}"), (0x1D6D3, FoldKind::Simple, "\u{3C2}"),
    (0x1D6D4, FoldKind::Simple, "\u{3C3}"), (0x1D6D5, FoldKind::Simple, "\u{3C4}"),
    (0x1D6D6, FoldKind::Simple, "\u{3C5}"), (0x1D6D7, FoldKind::Simple, "\u{3C6}"),
    (0x1D6D8, FoldKind::Simple, "\u{3C7}"), (0x1D6D9, FoldKind::Simple, "\u{3C8}"),
    (0x1D6DA, FoldKind::Simple, "\u{3C9}"), (0x1D6DB, FoldKind::Simple, "\u{2202}"),
    (0x1D6DC, FoldKind::Simple, "\u{3B5}"), (0x1D6DD, FoldKind::Simple, "\u{3B8}"),
    (0x1D6DE, FoldKind::Simple, "\u{3BA}"), (0x1D6DF, FoldKind::Simple, "\u{3C6}"),
    (0x1D6E0, FoldKind::Simple, "\u{3C1}"), (0x1D6E1, FoldKind::Simple, "\u{3C0}"),
    (0x1D6E2, FoldKind::Simple, "\u{391}"), (0x1D6E3, FoldKind::Simple, "\u{392}"),
    (0x1D6E4, FoldKind::Simple, "\u{393}"), (0x1D6E5, FoldKind::Simple, "\u{394}"),
    (0x1D6E6, FoldKind::Simple, "\u{395}"), (0x1D6E7, FoldKind::Simple, "\u{396}"),
    (0x1D6E8, FoldKind::Simple, "\u{397}"), (0x1D6E9, FoldKind::Simple, "\u{398}"),
    (0x1D6EA, FoldKind::Simple, "\u{399}"), (0x1D6EB, FoldKind::Simple, "\u{39A}"),
    (0x1D6EC, FoldKind::Simple, "\u{39B}"), (0x1D6ED, FoldKind::Simple, "\u{39C}"),
    (0x1D6EE, FoldKind::Simple, "\u{39D}"), (0x1D6EF, FoldKind::Simple, "\u{39E}"),
    (0x1D6F0, FoldKind::Simple, "\u{39F}"), (0x1D6F1, FoldKind::Simple, "\u{3A0}"),
    (0x1D6F2, FoldKind::Simple, "\u{3A1}"), (0x1D6F3, FoldKind::Simple, "\u{398}"),
    (0x1D6F4, FoldKind::Simple, "\u{3A3}"), (0x1D6F5, FoldKind::Simple, "\u{3A4}"),
    (0x1D6F6, FoldKind::Simple, "\u{3A5}"), (0x1D6F7, FoldKind::Simple, "\u{3A6}"),
    (0x1D6F8, FoldKind::Simple, "\u{3A7}"), (0x1D6F9, FoldKind::Simple, "\u{3A8}"),
    (0x1D6FA, FoldKind::Simple, "\u{3A9}"), (0x1D6FB, FoldKind::Simple, "\u{2207}"),
    (0x1D6FC, FoldKind::Simple, "\u{3B1}"), (0x1D6FD, FoldKind::Simple, "\u{3B2}"),
    (0x1D6FE, FoldKind::Simple, "\u{3B3}"), (0x1D6FF, FoldKind::Simple, "\u{3B4}"),
    (0x1D700, FoldKind::Simple, "\u{3B5}"), (0x1D701, FoldKind::Simple, "\u{3B6}"),
    (0x1D702, FoldKind::Simple, "\u{3B7}"), (0x1D703, FoldKind::Simple, "\u{3B8}"),
    (0x1D704, FoldKind::Simple, "\u{3B9}"), (0x1D705, FoldKind::Simple, "\u{3BA}"),
    (0x1D706, FoldKind::Simple, "\u{3BB}"), (0x1D707, FoldKind::Simple, "\u{3BC}"),
    (0x1D708, FoldKind::Simple, "\u{3BD}"), (0x1D709, FoldKind::Simple, "\u{3BE}"),
    (0x1D70A, FoldKind::Simple, "\u{3BF}"), (0x1D70B, FoldKind::Simple, "\u{3C0}"),
    (0x1D70C, FoldKind::Simple, "\u{3C1}"), (0x1D70D, FoldKind::Simple, "\u{3C2}"),
    (0x1D70E, FoldKind::Simple, "\u{3C3}"), (0x1D70F, FoldKind::Simple, "\u{3C4}"),
    (0x1D710, FoldKind::Simple, "\u{3C5}"), (0x1D711, FoldKind::Simple, "\u{3C6}"),
    (0x1D712, FoldKind::Simple, "\u{3C7}"), (0x1D713, FoldKind::Simple, "\u{3C8}"),
    (0x1D714, FoldKind::Simple, "\u{3C9}"), (0x1D715, FoldKind::Simple, "\u{2202}"),
    (0x1D716, FoldKind::Simple, "\u{3B5}"), (0x1D717, FoldKind::Simple, "\u{3B8}"),
    (0x1D718, FoldKind::Simple, "\u{3BA}"), (0x1D719, FoldKind::Simple, "\u{3C6}"),
    (0x1D71A, FoldKind::Simple, "\u{3C1}"), (0x1D71B, FoldKind::Simple, "\u{3C0}"),
    (0x1D71C, FoldKind::Simple, "\u{391}"), (0x1D71D, FoldKind::Simple, "\u{392}"),
    (0x1D71E, FoldKind::Simple, "\u{393}"), (0x1D71F, FoldKind::Simple, "\u{394}"),
    (0x1D720, FoldKind::Simple, "\u{395}"), (0x1D721, FoldKind::Simple, "\u{396}"),
    (0x1D722, FoldKind::Simple, "\u{397}"), (0x1D723, FoldKind::Simple, "\u{398}"),
    (0x1D724, FoldKind::Simple, "\u{399}"), (0x1D725, FoldKind::Simple, "\u{39A}"),
    (0x1D726, FoldKind::Simple, "\u{39B}"), (0x1D727, FoldKind::Simple, "\u{39C}"),
    (0x1D728, FoldKind::Simple, "\u{39D}"), (0x1D729, FoldKind::Simple, "\u{39E}"),
    (0x1D72A, FoldKind::Simple, "\u{39F}"), (0x1D72B, FoldKind::Simple, "\u{3A0}"),
    (0x1D72C, FoldKind::Simple, "\u{3A1}"), (0x1D72D, FoldKind::Simple, "\u{398}"),
    (0x1D72E, FoldKind::Simple, "\u{3A3}"), (0x1D72F, FoldKind::Simple, "\u{3A4}"),
    (0x1D730, FoldKind::Simple, "\u{3A5}"), (0x1D731, FoldKind::Simple, "\u{3A6}"),
    (0x1D732, FoldKind::Simple, "\u{3A7}"), (0x1D733, FoldKind::Simple, "\u{3A8}"),
    (0x1D734, FoldKind::Simple, "\u{3A9}"), (0x1D735, FoldKind::Simple, "\u{2207}"),
    (0x1D736, FoldKind::Simple, "\u{3B1}"), (0x1D737, FoldKind::Simple, "\u{3B2}"),
    (0x1D738, FoldKind::Simple, "\u{3B3}"), (0x1D739, FoldKind::Simple, "\u{3B4}"),
    (0x1D73A, FoldKind::Simple, "\u{3B5}"), (0x1D73B, FoldKind::Simple, "\u{3B6}"),
    (0x1D73C, FoldKind::Simple, "\u{3B7}"), (0x1D73D, FoldKind::Simple, "\u{3B8}"),
    (0x1D73E, FoldKind::Simple, "\u{3B9}"), (0x1D73F, FoldKind::Simple, "\u{3BA}"),
    (0x1D740, FoldKind::Simple, "\u{3BB}"), (0x1D741, FoldKind::Simple, "\u{3BC}"),
    (0x1D742, FoldKind::Simple, "\u{3BD}"), (0x1D743, FoldKind::Simple, "\u{3BE}"),
    (0x1D744, FoldKind::Simple, "\u{3BF}"), (0x1D745, FoldKind::Simple, "\u{3C0}"),
    (0x1D746, FoldKind::Simple, "\u{3C1}"), (0x1D747, FoldKind::Simple, "\u{3C2}"),
    (0x1D748, FoldKind::Simple, "\u{3C3}"), (0x1D749, FoldKind::Simple, "\u{3C4}"),
    (0x1D74A, FoldKind::Simple, "\u{3C5}"), (0x1D74B, FoldKind::Simple, "\u{3C6}"),
    (0x1D74C, FoldKind::Simple, "\u{3C7}"), (0x1D74D, FoldKind::Simple, "\u{3C8}"),
    (0x1D74E, FoldKind::Simple, "\u{3C9}"), (0x1D74F, FoldKind::Simple, "\u{2202}"),
    (0x1D750, FoldKind::Simple, "\u{3B5}"), (0x1D751, FoldKind::Simple, "\u{3B8}"),
    (0x1D752, FoldKind::Simple, "\u{3BA}"), (0x1D753, FoldKind::Simple, "\u{3C6}"),
    (0x1D754, FoldKind::Simple, "\u{3C1}"), (0x1D755, FoldKind::Simple, "\u{3C0}"),
    (0x1D756, FoldKind::Simple, "\u{391}"), (0x1D757, FoldKind::Simple, "\u{392}"),
    (0x1D758, FoldKind::Simple, "\u{393}"), (0x1D759, FoldKind::Simple, "\u{394}"),
    (0x1D75A, FoldKind::Simple, "\u{395}"), (0x1D75B, FoldKind::Simple, "\u{396}"),
    (0x1D75C, FoldKind::Simple, "\u{397}"), (0x1D75D, FoldKind::Simple, "\u{398}"),
    (0x1D75E, FoldKind::Simple, "\u{399}"), (0x1D75F, FoldKind::Simple, "\u{39A}"),
    (0x1D760, FoldKind::Simple, "\u{39B}"), (0x1D761, FoldKind::Simple, "\u{39C}"),
    (0x1D762, FoldKind::Simple, "\u{39D}"), (0x1D763, FoldKind::Simple, "\u{39E}"),
    (0x1D764, FoldKind::Simple, "\u{39F}"), (0x1D765, FoldKind::Simple, "\u{3A0}"),
    (0x1D766, FoldKind::Simple, "\u{3A1}"), (0x1D767, FoldKind::Simple, "\u{398}"),
    (0x1D768, FoldKind::Simple, "\u{3A3}"), (0x1D769, FoldKind::Simple, "\u{3A4}"),
    (0x1D76A, FoldKind::Simple, "\u{3A5}"), (0x1D76B, FoldKind::Simple, "\u{3A6}"),
    (0x1D76C, FoldKind::Simple, "\u{3A7}"), (0x1D76D, FoldKind::Simple, "\u{3A8}"),
    (0x1D76E, FoldKind::Simple, "\u{3A9}"), (0x1D76F, FoldKind::Simple, "\u{2207}"),
    (0x1D770, FoldKind::Simple, "\u{3B1}"), (0x1D771, FoldKind::Simple, "\u{3B2}"),
    (0x1D772, FoldKind::Simple, "\u{3B3}"), (0x1D773, FoldKind::Simple, "\u{3B4}"),
    (0x1D774, FoldKind::Simple, "\u{3B5}"), (0x1D775, FoldKind::Simple, "\u{3B6}"),
    (0x1D776, FoldKind::Simple, "\u{3B7}"), (0x1D777, FoldKind::Simple, "\u{3B8}"),
    (0x1D778, FoldKind::Simple, "\u{3B9}"), (0x1D779, FoldKind::Simple, "\u{3BA}"),
    (0x1D77A, FoldKind::Simple, "\u{3BB}"), (0x1D77B, FoldKind::Simple, "\u{3BC}"),
    (0x1D77C, FoldKind::Simple, "\u{3BD}"), (0x1D77D, FoldKind::Simple, "\u{3BE}"),
    (0x1D77E, FoldKind::Simple, "\u{3BF}"), (0x1D77F, FoldKind::Simple, "\u{3C0}"),
    (0x1D780, FoldKind::Simple, "\u{3C1}"), (0x1D781, FoldKind::Simple, "\u{3C2}"),
    (0x1D782, FoldKind::Simple, "\u{3C3}"), (0x1D783, FoldKind::Simple, "\u{3C4}"),
    (0x1D784, FoldKind::Simple, "\u{3C5}"), (0x1D785, FoldKind::Simple, "\u{3C6}"),
    (0x1D786, FoldKind::Simple, "\u{3C7}"), (0x1D787, FoldKind::Simple, "\u{3C8}"),
    (0x1D788, FoldKind::Simple, "\u{3C9}"), (0x1D789, FoldKind::Simple, "\u{2202}"),
    (0x1D78A, FoldKind::Simple, "\u{3B5}"), (0x1D78B, FoldKind::Simple, "\u{3B8}"),
    (0x1D78C, FoldKind::Simple, "\u{3BA}"), (0x1D78D, FoldKind::Simple, "\u{3C6}"),
    (0x1D78E, FoldKind::Simple, "\u{3C1}"), (0x1D78F, FoldKind::Simple, "\u{3C0}"),
    (0x1D790, FoldKind::Simple, "\u{391}"), (0x1D791, FoldKind::Simple, "\u{392}"),
    (0x1D792, FoldKind::Simple, "\u{393}"), (0x1D793, FoldKind::Simple, "\u{394}"),
    (0x1D794, FoldKind::Simple, "\u{395}"), (0x1D795, FoldKind::Simple, "\u{396}"),
    (0x1D796, FoldKind::Simple, "\u{397}"), (0x1D797, FoldKind::Simple, "\u{398}"),
    (0x1D798, FoldKind::Simple, "\u{399}"), (0x1D799, FoldKind::Simple, "\u{39A}"),
    (0x1D79A, FoldKind::Simple, "\u{39B}"), (0x1D79B, FoldKind::Simple, "\u{39C}"),
    (0x1D79C, FoldKind::Simple, "\u{39D}"), (0x1D79D, FoldKind::Simple, "\u{39E}"),
    (0x1D79E, FoldKind::Simple, "\u{39F}"), (0x1D79F, FoldKind::Simple, "\u{3A0}"),
    (0x1D7A0, FoldKind::Simple, "\u{3A1}"), (0x1D7A1, FoldKind::Simple, "\u{398}"),
    (0x1D7A2, FoldKind::Simple, "\u{3A3}"), (0x1D7A3, FoldKind::Simple, "\u{3A4}"),
    (0x1D7A4, FoldKind::Simple, "\u{3A5}"), (0x1D7A5, FoldKind::Simple, "\u{3A6}"),
    (0x1D7A6, FoldKind::Simple, "\u{3A7}"), (0x1D7A7, FoldKind::Simple, "\u{3A8}"),
    (0x1D7A8, FoldKind::Simple, "\u{3A9}"), (0x1D7A9, FoldKind::Simple, "\u{2207}"),
    (0x1D7AA, FoldKind::Simple, "\u{3B1}"), (0x1D7AB, FoldKind::Simple, "\u{3B2}"),
    (0x1D7AC, FoldKind::Simple, "\u{3B3}"), (0x1D7AD, FoldKind::Simple, "\u{3B4}"),
    (0x1D7AE, FoldKind::Simple, "\u{3B5}"), (0x1D7AF, FoldKind::Simple, "\u{3B6}"),
    (0x1D7B0, FoldKind::Simple, "\u{3B7}"), (0x1D7B1, FoldKind::Simple, "\u{3B8}"),
    (0x1D7B2, FoldKind::Simple, "\u{3B9}"), (0x1D7B3, FoldKind::Simple, "\u{3BA}"),
    (0x1D7B4, FoldKind::Simple, "\u{3BB}"), (0x1D7B5, FoldKind::Simple, "\u{3BC}"),
    (0x1D7B6, FoldKind::Simple, "\u{3BD}"), (0x1D7B7, FoldKind::Simple, "\u{3BE}"),
    (0x1D7B8, FoldKind::Simple, "\u{3BF}"), (0x1D7B9, FoldKind::Simple, "\u{3C0}"),
    (0x1D7BA, FoldKind::Simple, "\u{3C1}"), (0x1D7BB, FoldKind::Simple, "\u{3C2}"),
    (0x1D7BC, FoldKind::Simple, "\u{3C3}"), (0x1D7BD, FoldKind::Simple, "\u{3C4}"),
    (0x1D7BE, FoldKind::Simple, "\u{3C5}"), (0x1D7BF, FoldKind::Simple, "\u{3C6}"),
    (0x1D7C0, FoldKind::Simple, "\u{3C7}"), (0x1D7C1, FoldKind::Simple, "\u{3C8}"),
    (0x1D7C2, FoldKind::Simple, "\u{3C9}"), (0x1D7C3, FoldKind::Simple, "\u{2202}"),
    (0x1D7C4, FoldKind::Simple, "\u{3B5}"), (0x1D7C5, FoldKind::Simple, "\u{3B8}"),
    (0x1D7C6, FoldKind::Simple, "\u{3BA}"), (0x1D7C7, FoldKind::Simple, "\u{3C6}"),
    (0x1D7C8, FoldKind::Simple, "\u{3C1}"), (0x1D7C9, FoldKind::Simple, "\u{3C0}"),
    (0x1D7CA, FoldKind::Simple, "\u{3DC}"), (0x1D7CB, FoldKind::Simple, "\u{3DD}"),
    (0x1D7CE, FoldKind::Simple, "0"), (0x1D7CF, FoldKind::Simple, "1"),
    (0x1D7D0, FoldKind::Simple, "2"), (0x1D7D1, FoldKind::Simple, "3"),
    (0x1D7D2, FoldKind::Simple, "4"), (0x1D7D3, FoldKind::Simple, "5"),
    (0x1D7D4, FoldKind::Simple, "6"), (0x1D7D5, FoldKind::Simple, "7"),
    (0x1D7D6, FoldKind::Simple, "8"), (0x1D7D7, FoldKind::Simple, "9"),
    (0x1D7D8, FoldKind::Simple, "0"), (0x1D7D9, FoldKind::Simple, "1"),
    (0x1D7DA, FoldKind::Simple, "2"), (0x1D7DB, FoldKind::Simple, "3"),
    (0x1D7DC, FoldKind::Simple, "4"), (0x1D7DD, FoldKind::Simple, "5"),
    (0x1D7DE, FoldKind::Simple, "6"), (0x1D7DF, FoldKind::Simple, "7"),
    (0x1D7E0, FoldKind::Simple, "8"), (0x1D7E1, FoldKind::Simple, "9"),
    (0x1D7E2, FoldKind::Simple, "0"), (0x1D7E3, FoldKind::Simple, "1"),
    (0x1D7E4, FoldKind::Simple, "2"), (0x1D7E5, FoldKind::Simple, "3"),
    (0x1D7E6, FoldKind::Simple, "4"), (0x1D7E7, FoldKind::Simple, "5"),
    (0x1D7E8, FoldKind::Simple, "6"), (0x1D7E9, FoldKind::Simple, "7"),
    (0x1D7EA, FoldKind::Simple, "8"), (0x1D7EB, FoldKind::Simple, "9"),
    (0x1D7EC, FoldKind::Simple, "0"), (0x1D7ED, FoldKind::Simple, "1"),
    (0x1D7EE, FoldKind::Simple, "2"), (0x1D7EF, FoldKind::Simple, "3"),
    (0x1D7F0, FoldKind::Simple, "4"), (0x1D7F1, FoldKind::Simple, "5"),
    (0x1D7F2, FoldKind::Simple, "6"), (0x1D7F3, FoldKind::Simple, "7"),
    (0x1D7F4, FoldKind::Simple, "8"), (0x1D7F5, FoldKind::Simple, "9"),
    (0x1D7F6, FoldKind::Simple, "0"), (0x1D7F7, FoldKind::Simple, "1"),
    (0x1D7F8, FoldKind::Simple, "2"), (0x1D7F9, FoldKind::Simple, "3"),
    (0x1D7FA, FoldKind::Simple, "4"), (0x1D7FB, FoldKind::Simple, "5"),
    (0x1D7FC, FoldKind::Simple, "6"), (0x1D7FD, FoldKind::Simple, "7"),
    (0x1D7FE, FoldKind::Simple, "8"), (0x1D7FF, FoldKind::Simple, "9"),
    (0x1EE00, FoldKind::Simple, "\u{627}"), (0x1EE01, FoldKind::Simple, "\u{628}"),
    (0x1EE02, FoldKind::Simple, "\u{62C}"), (0x1EE03, FoldKind::Simple, "\u{62F}"),
    (0x1EE05, FoldKind::Simple, "\u{648}"), (0x1EE06, FoldKind::Simple, "\u{632}"),
    (0x1EE07, FoldKind::Simple, "\u{62D}"), (0x1EE08, FoldKind::Simple, "\u{637}"),
    (0x1EE09, FoldKind::Simple, "\u{64A}"), (0x1EE0A, FoldKind::Simple, "\u{643}"),
    (0x1EE0B, FoldKind::Simple, "\u{644}"), (0x1EE0C, FoldKind::Simple, "\u{645}"),
    (0x1EE0D, FoldKind::Simple, "\u{646}"), (0x1EE0E, FoldKind::Simple, "\u{633}"),
    (0x1EE0F, FoldKind::Simple, "\u{639}"), (0x1EE10, FoldKind::Simple, "\u{641}"),
    (0x1EE11, FoldKind::Simple, "\u{635}"), (0x1EE12, FoldKind::Simple, "\u{642}"),
    (0x1EE13, FoldKind::Simple, "\u{631}"), (0x1EE14, FoldKind::Simple, "\u{634}"),
    (0x1EE15, FoldKind::Simple, "\u{62A}"), (0x1EE16, FoldKind::Simple, "\u{62B}"),
    (0x1EE17, FoldKind::Simple, "\u{62E}"), (0x1EE18, FoldKind::Simple, "\u{630}"),
    (0x1EE19, FoldKind::Simple, "\u{636}"), (0x1EE1A, FoldKind::Simple, "\u{638}"),
    (0x1EE1B, FoldKind::Simple, "\u{63A}"), (0x1EE1C, FoldKind::Simple, "\u{66E}"),
    (0x1EE1D, FoldKind::Simple, "\u{6BA}"), (0x1EE1E, FoldKind::Simple, "\u{6A1}"),
    (0x1EE1F, FoldKind::Simple, "\u{66F}"), (0x1EE21, FoldKind::Simple, "\u{628}"),
    (0x1EE22, FoldKind::Simple, "\u{62C}"), (0x1EE24, FoldKind::Simple, "\u{647}"),
    (0x1EE27, FoldKind::Simple, "\u{62D}"), (0x1EE29, FoldKind::Simple, "\u{64A}"),
    (0x1EE2A, FoldKind::Simple, "\u{643}"), (0x1EE2B, FoldKind::Simple, "\u{644}"),
    (0x1EE2C, FoldKind::Simple, "\u{645}"), (0x1EE2D, FoldKind::Simple, "\u{646}"),
    (0x1EE2E, FoldKind::Simple, "\u{633}"), (0x1EE2F, FoldKind::Simple, "\u{639}"),
    (0x1EE30, FoldKind::Simple, "\u{641}"), (0x1EE31, FoldKind::Simple, "\u{635}"),
    (0x1EE32, FoldKind::Simple, "\u{642}"), (0x1EE34, FoldKind::Simple, "\u{634}"),
    (0x1EE35, FoldKind::Simple, "\u{62A}"), (0x1EE36, FoldKind::Simple, "\u{62B}"),
    (0x1EE37, FoldKind::Simple, "\u{62E}"), (0x1EE39, FoldKind::Simple, "\u{636}"),
    (0x1EE3B, FoldKind::Simple, "\u{63A}"), (0x1EE42, FoldKind::Simple, "\u{62C}"),
    (0x1EE47, FoldKind::Simple, "\u{62D}"), (0x1EE49, FoldKind::Simple, "\u{64A}"),
    (0x1EE4B, FoldKind::Simple, "\u{644}"), (0x1EE4D, FoldKind::Simple, "\u{646}"),
    (0x1EE4E, FoldKind::Simple, "\u{633}"), (0x1EE4F, FoldKind::Simple, "\u{639}"),
    (0x1EE51, FoldKind::Simple, "\u{635}"), (0x1EE52, FoldKind::Simple, "\u{642}"),
    (0x1EE54, FoldKind::Simple, "\u{634}"), (0x1EE57, FoldKind::Simple, "\u{62E}"),
    (0x1EE59, FoldKind::Simple, "\u{636}"), (0x1EE5B, FoldKind::Simple, "\u{63A}"),
    (0x1EE5D, FoldKind::Simple, "\u{6BA}"), (0x1EE5F, FoldKind::Simple, "\u{66F}"),
    (0x1EE61, FoldKind::Simple, "\u{628}"), (0x1EE62, FoldKind::Simple, "\u{62C}"),
    (0x1EE64, FoldKind::Simple, "\u{647}"), (0x1EE67, FoldKind::Simple, "\u{62D}"),
    (0x1EE68, FoldKind::Simple, "\u{637}"), (0x1EE69, FoldKind::Simple, "\u{64A}"),
    (0x1EE6A, FoldKind::Simple, "\u{643}"), (0x1EE6C, FoldKind::Simple, "\u{645}"),
    (0x1EE6D, FoldKind::Simple, "\u{646}"), (0x1EE6E, FoldKind::Simple, "\u{633}"),
    (0x1EE6F, FoldKind::Simple, "\u{639}"), (0x1EE70, FoldKind::Simple, "\u{641}"),
    (0x1EE71, FoldKind::Simple, "\u{635}"), (0x1EE72, FoldKind::Simple, "\u{642}"),
    (0x1EE74, FoldKind::Simple, "\u{634}"), (0x1EE75, FoldKind::Simple, "\u{62A}"),
    (0x1EE76, FoldKind::Simple, "\u{62B}"), (0x1EE77, FoldKind::Simple, "\u{62E}"),
    (0x1EE79, FoldKind::Simple, "\u{636}"), (0x1EE7A, FoldKind::Simple, "\u{638}"),
    (0x1EE7B, FoldKind::Simple, "\u{63A}"), (0x1EE7C, FoldKind::Simple, "\u{66E}"),
    (0x1EE7E, FoldKind::Simple, "\u{6A1}"), (0x1EE80, FoldKind::Simple, "\u{627}"),
    (0x1EE81, FoldKind::Simple, "\u{628}"), (0x1EE82, FoldKind::Simple, "\u{62C}"),
    (0x1EE83, FoldKind::Simple, "\u{62F}"), (0x1EE84, FoldKind::Simple, "\u{647}"),
    (0x1EE85, FoldKind::Simple, "\u{648}"), (0x1EE86, FoldKind::Simple, "\u{632}"),
    (0x1EE87, FoldKind::Simple, "\u{62D}"), (0x1EE88, FoldKind::Simple, "\u{637}"),
    (0x1EE89, FoldKind::Simple, "\u{64A}"), (0x1EE8B, FoldKind::Simple, "\u{644}"),
    (0x1EE8C, FoldKind::Simple, "\u{645}"), (0x1EE8D, FoldKind::Simple, "\u{646}"),
    (0x1EE8E, FoldKind::Simple, "\u{633}"), (0x1EE8F, FoldKind::Simple, "\u{639}"),
    (0x1EE90, FoldKind::Simple, "\u{641}"), (0x1EE91, FoldKind::Simple, "\u{635}"),
    (0x1EE92, FoldKind::Simple, "\u{642}"), (0x1EE93, FoldKind::Simple, "\u{631}"),
    (0x1EE94, FoldKind::Simple, "\u{634}"), (0x1EE95, FoldKind::Simple, "\u{62A}"),
    (0x1EE96, FoldKind::Simple, "\u{62B}"), (0x1EE97, FoldKind::Simple, "\u{62E}"),
    (0x1EE98, FoldKind::Simple, "\u{630}"), (0x1EE99, FoldKind::Simple, "\u{636}"),
    (0x1EE9A, FoldKind::Simple, "\u{638}"), (0x1EE9B, FoldKind::Simple, "\u{63A}"),
    (0x1EEA1, FoldKind::Simple, "\u{628}"), (0x1EEA2, FoldKind::Simple, "\u{62C}"),
    (0x1EEA3, FoldKind::Simple, "\u{62F}"), (0x1EEA5, FoldKind::Simple, "\u{648}"),
    (0x1EEA6, FoldKind::Simple, "\u{632}"), (0x1EEA7, FoldKind::Simple, "\u{62D}"),
    (0x1EEA8, FoldKind::Simple, "\u{637}"), (0x1EEA9, FoldKind::Simple, "\u{64A}"),
    (0x1EEAB, FoldKind::Simple, "\u{644}"), (0x1EEAC, FoldKind::Simple, "\u{645}"),
    (0x1EEAD, FoldKind::Simple, "\u{646}"), (0x1EEAE, FoldKind::Simple, "\u{633}"),
    (0x1EEAF, FoldKind::Simple, "\u{639}"), (0x1EEB0, FoldKind::Simple, "\u{641}"),
    (0x1EEB1, FoldKind::Simple, "\u{635}"), (0x1EEB2, FoldKind::Simple, "\u{642}"),
    (0x1EEB3, FoldKind::Simple, "\u{631}"), (0x1EEB4, FoldKind::Simple, "\u{634}"),
    (0x1EEB5, FoldKind::Simple, "\u{62A}"), (0x1EEB6, FoldKind::Simple, "\u{62B}"),
    (0x1EEB7, FoldKind::Simple, "\u{62E}"), (0x1EEB8, FoldKind::Simple, "\u{630}"),
    (0x1EEB9, FoldKind::Simple, "\u{636}"), (0x1EEBA, FoldKind::Simple, "\u{638}"),
    (0x1EEBB, FoldKind::Simple, "\u{63A}"), (0x1F100, FoldKind::Complex, "0"),
    (0x1F101, FoldKind::Complex, "0"), (0x1F102, FoldKind::Complex, "1"),
    (0x1F103, FoldKind::Complex, "2"), (0x1F104, FoldKind::Complex, "3"),
    (0x1F105, FoldKind::Complex, "4"), (0x1F106, FoldKind::Complex, "5"),
    (0x1F107, FoldKind::Complex, "6"), (0x1F108, FoldKind::Complex, "7"),
    (0x1F109, FoldKind::Complex, "8"), (0x1F10A, FoldKind::Complex, "9"),
    (0x1F110, FoldKind::Complex, "("), (0x1F111, FoldKind::Complex, "("),
    (0x1F112, FoldKind::Complex, "("), (0x1F113, FoldKind::Complex, "("),
    (0x1F114, FoldKind::Complex, "("), (0x1F115, FoldKind::Complex, "("),
    (0x1F116, FoldKind::Complex, "("), (0x1F117, FoldKind::Complex, "("),
    (0x1F118, FoldKind::Complex, "("), (0x1F119, FoldKind::Complex, "("),
    (0x1F11A, FoldKind::Complex, "("), (0x1F11B, FoldKind::Complex, "("),
    (0x1F11C, FoldKind::Complex, "("), (0x1F11D, FoldKind::Complex, "("),
    (0x1F11E, FoldKind::Complex, "("), (0x1F11F, FoldKind::Complex, "("),
    (0x1F120, FoldKind::Complex, "("), (0x1F121, FoldKind::Complex, "("),
    (0x1F122, FoldKind::Complex, "("), (0x1F123, FoldKind::Complex, "("),
    (0x1F124, FoldKind::Complex, "("), (0x1F125, FoldKind::Complex, "("),
    (0x1F126, FoldKind::Complex, "("), (0x1F127, FoldKind::Complex, "("),
    (0x1F128, FoldKind::Complex, "("), (0x1F129, FoldKind::Complex, "("),
    (0x1F12A, FoldKind::Complex, "\u{3014}"), (0x1F12B, FoldKind::Simple, "C"),
    (0x1F12C, FoldKind::Simple, "R"), (0x1F12D, FoldKind::Complex, "C"),
    (0x1F12E, FoldKind::Complex, "W"), (0x1F130, FoldKind::Simple, "A"),
    (0x1F131, FoldKind::Simple, "B"), (0x1F132, FoldKind::Simple, "C"),
    (0x1F133, FoldKind::Simple, "D"), (0x1F134, FoldKind::Simple, "E"),
    (0x1F135, FoldKind::Simple, "F"), (0x1F136, FoldKind::Simple, "G"),
    (0x1F137, FoldKind::Simple, "H"), (0x1F138, FoldKind::Simple, "I"),
    (0x1F139, FoldKind::Simple, "J"), (0x1F13A, FoldKind::Simple, "K"),
    (0x1F13B, FoldKind::Simple, "L"), (0x1F13C, FoldKind::Simple, "M"),
    (0x1F13D, FoldKind::Simple, "N"), (0x1F13E, FoldKind::Simple, "O"),
    (0x1F13F, FoldKind::Simple, "P"), (0x1F140, FoldKind::Simple, "Q"),
    (0x1F141, FoldKind::Simple, "R"), (0x1F142, FoldKind::Simple, "S"),
    (0x1F143, FoldKind::Simple, "T"), (0x1F144, FoldKind::Simple, "U"),
    (0x1F145, FoldKind::Simple, "V"), (0x1F146, FoldKind::Simple, "W"),
    (0x1F147, FoldKind::Simple, "X"), (0x1F148, FoldKind::Simple, "Y"),
    (0x1F149, FoldKind::Simple, "Z"), (0x1F14A, FoldKind::Complex, "H"),
    (0x1F14B, FoldKind::Complex, "M"), (0x1F14C, FoldKind::Complex, "S"),
    (0x1F14D, FoldKind::Complex, "S"), (0x1F14E, FoldKind::Complex, "P"),
    (0x1F14F, FoldKind::Complex, "W"), (0x1F16A, FoldKind::Complex, "M"),
    (0x1F16B, FoldKind::Complex, "M"), (0x1F16C, FoldKind::Complex, "M"),
    (0x1F190, FoldKind::Complex, "D"), (0x1F200, FoldKind::Complex, "\u{307B}"),
    (0x1F201, FoldKind::Complex, "\u{30B3}"), (0x1F202, FoldKind::Simple, "\u{30B5}"),
    (0x1F210, FoldKind::Simple, "\u{624B}"), (0x1F211, FoldKind::Simple, "\u{5B57}"),
    (0x1F212, FoldKind::Simple, "\u{53CC}"), (0x1F213, FoldKind::KanaVoiced, "\u{30C6}\u{3099}"),
    (0x1F214, FoldKind::Simple, "\u{4E8C}"), (0x1F215, FoldKind::Simple, "\u{591A}"),
    (0x1F216, FoldKind::Simple, "\u{89E3}"), (0x1F217, FoldKind::Simple, "\u{5929}"),
    (0x1F218, FoldKind::Simple, "\u{4EA4}"), (0x1F219, FoldKind::Simple, "\u{6620}"),
    (0x1F21A, FoldKind::Simple, "\u{7121}"), (0x1F21B, FoldKind::Simple, "\u{6599}"),
    (0x1F21C, FoldKind::Simple, "\u{524D}"), (0x1F21D, FoldKind::Simple, "\u{5F8C}"),
    (0x1F21E, FoldKind::Simple, "\u{518D}"), (0x1F21F, FoldKind::Simple, "\u{65B0}"),
    (0x1F220, FoldKind::Simple, "\u{521D}"), (0x1F221, FoldKind::Simple, "\u{7D42}"),
    (0x1F222, FoldKind::Simple, "\u{751F}"), (0x1F223, FoldKind::Simple, "\u{8CA9}"),
    (0x1F224, FoldKind::Simple, "\u{58F0}"), (0x1F225, FoldKind::Simple, "\u{5439}"),
    (0x1F226, FoldKind::Simple, "\u{6F14}"), (0x1F227, FoldKind::Simple, "\u{6295}"),
    (0x1F228, FoldKind::Simple, "\u{6355}"), (0x1F229, FoldKind::Simple, "\u{4E00}"),
    (0x1F22A, FoldKind::Simple, "\u{4E09}"), (0x1F22B, FoldKind::Simple, "\u{904A}"),
    (0x1F22C, FoldKind::Simple, "\u{5DE6}"), (0x1F22D, FoldKind::Simple, "\u{4E2D}"),
    (0x1F22E, FoldKind::Simple, "\u{53F3}"), (0x1F22F, FoldKind::Simple, "\u{6307}"),
    (0x1F230, FoldKind::Simple, "\u{8D70}"), (0x1F231, FoldKind::Simple, "\u{6253}"),
    (0x1F232, FoldKind::Simple, "\u{7981}"), (0x1F233, FoldKind::Simple, "\u{7A7A}"),
    (0x1F234, FoldKind::Simple, "\u{5408}"), (0x1F235, FoldKind::Simple, "\u{6E80}"),
    (0x1F236, FoldKind::Simple, "\u{6709}"), (0x1F237, FoldKind::Simple, "\u{6708}"),
    (0x1F238, FoldKind::Simple, "\u{7533}"), (0x1F239, FoldKind::Simple, "\u{5272}"),
    (0x1F23A, FoldKind::Simple, "\u{55B6}"), (0x1F23B, FoldKind::Simple, "\u{914D}"),
    (0x1F240, FoldKind::Complex, "\u{3014}"), (0x1F241, FoldKind::Complex, "\u{3014}"),
    (0x1F242, FoldKind::Complex, "\u{3014}"), (0x1F243, FoldKind::Complex, "\u{3014}"),
    (0x1F244, FoldKind::Complex, "\u{3014}"), (0x1F245, FoldKind::Complex, "\u{3014}"),
    (0x1F246, FoldKind::Complex, "\u{3014}"), (0x1F247, FoldKind::Complex, "\u{3014}"),
    (0x1F248, FoldKind::Complex, "\u{3014}"), (0x1F250, FoldKind::Simple, "\u{5F97}"),
    (0x1F251, FoldKind::Simple, "\u{53EF}"), (0x1FBF0, FoldKind::Simple, "0"),
    (0x1FBF1, FoldKind::Simple, "1"), (0x1FBF2, FoldKind::Simple, "2"),
    (0x1FBF3, FoldKind::Simple, "3"), (0x1FBF4, FoldKind::Simple, "4"),
    (0x1FBF5, FoldKind::Simple, "5"), (0x1FBF6, FoldKind::Simple, "6"),
    (0x1FBF7, FoldKind::Simple, "7"), (0x1FBF8, FoldKind::Simple, "8"),
    (0x1FBF9, FoldKind::Simple, "9"), (0x2F800, FoldKind::Simple, "\u{4E3D}"),
    (0x2F801, FoldKind::Simple, "\u{4E38}"), (0x2F802, FoldKind::Simple, "\u{4E41}"),
    (0x2F803, FoldKind::Simple, "\u{20122}"), (0x2F804, FoldKind::Simple, "\u{4F60}"),
    (0x2F805, FoldKind::Simple, "\u{4FAE}"), (0x2F806, FoldKind::Simple, "\u{4FBB}"),
    (0x2F807, FoldKind::Simple, "\u{5002}"), (0x2F808, FoldKind::Simple, "\u{507A}"),
    (0x2F809, FoldKind::Simple, "\u{5099}"), (0x2F80A, FoldKind::Simple, "\u{50E7}"),
    (0x2F80B, FoldKind::Simple, "\u{50CF}"), (0x2F80C, FoldKind::Simple, "\u{349E}"),
    (0x2F80D, FoldKind::Simple, "\u{2063A}"), (0x2F80E, FoldKind::Simple, "\u{514D}"),
    (0x2F80F, FoldKind::Simple, "\u{5154}"), (0x2F810, FoldKind::Simple, "\u{5164}"),
    (0x2F811, FoldKind::Simple, "\u{5177}"), (0x2F812, FoldKind::Simple, "\u{2051C}"),
    (0x2F813, FoldKind::Simple, "\u{34B9}"), (0x2F814, FoldKind::Simple, "\u{5167}"),
    (0x2F815, FoldKind::Simple, "\u{518D}"), (0x2F816, FoldKind::Simple, "\u{2054B}"),
    (0x2F817, FoldKind::Simple, "\u{5197}"), (0x2F818, FoldKind::Simple, "\u{51A4}"),
    (0x2F819, FoldKind::Simple, "\u{4ECC}"), (0x2F81A, FoldKind::Simple, "\u{51AC}"),
    (0x2F81B, FoldKind::Simple, "\u{51B5}"), (0x2F81C, FoldKind::Simple, "\u{291DF}"),
    (0x2F81D, FoldKind::Simple, "\u{51F5}"), (0x2F81E, FoldKind::Simple, "\u{5203}"),
    (0x2F81F, FoldKind::Simple, "\u{34DF}"), (0x2F820, FoldKind::Simple, "\u{523B}"),
    (0x2F821, FoldKind::Simple, "\u{5246}"), (0x2F822, FoldKind::Simple, "\u{5272}"),
    (0x2F823, FoldKind::Simple, "\u{5277}"), (0x2F824, FoldKind::Simple, "\u{3515}"),
    (0x2F825, FoldKind::Simple, "\u{52C7}"), (0x2F826, FoldKind::Simple, "\u{52C9}"),
    (0x2F827, FoldKind::Simple, "\u{52E4}"), (0x2F828, FoldKind::Simple, "\u{52FA}"),
    (0x2F829, FoldKind::Simple, "\u{5305}"), (0x2F82A, FoldKind::Simple, "\u{5306}"),
    (0x2F82B, FoldKind::Simple, "\u{5317}"), (0x2F82C, FoldKind::Simple, "\u{5349}"),
    (0x2F82D, FoldKind::Simple, "\u{5351}"), (0x2F82E, FoldKind::Simple, "\u{535A}"),
    (0x2F82F, FoldKind::Simple, "\u{5373}"), (0x2F830, FoldKind::Simple, "\u{537D}"),
    (0x2F831, FoldKind::Simple, "\u{537F}"), (0x2F832, FoldKind::Simple, "\u{537F}"),
    (0x2F833, FoldKind::Simple, "\u{537F}"), (0x2F834, FoldKind::Simple, "\u{20A2C}"),
    (0x2F835, FoldKind::Simple, "\u{7070}"), (0x2F836, FoldKind::Simple, "\u{53CA}"),
    (0x2F837, FoldKind::Simple, "\u{53DF}"), (0x2F838, FoldKind::Simple, "\u{20B63}"),
    (0x2F839, FoldKind::Simple, "\u{53EB}"), (0x2F83A, FoldKind::Simple, "\u{53F1}"),
    (0x2F83B, FoldKind::Simple, "\u{5406}"), (0x2F83C, FoldKind::Simple, "\u{549E}"),
    (0x2F83D, FoldKind::Simple, "\u{5438}"), (0x2F83E, FoldKind::Simple, "\u{5448}"),
    (0x2F83F, FoldKind::Simple, "\u{5468}"), (0x2F840, FoldKind::Simple, "\u{54A2}"),
    (0x2F841, FoldKind::Simple, "\u{54F6}"), (0x2F842, FoldKind::Simple, "\u{5510}"),
    (0x2F843, FoldKind::Simple, "\u{5553}"), (0x2F844, FoldKind::Simple, "\u{5563}"),
    (0x2F845, FoldKind::Simple, "\u{5584}"), (0x2F846, FoldKind::Simple, "\u{5584}"),
    (0x2F847, FoldKind::Simple, "\u{5599}"), (0x2F848, FoldKind::Simple, "\u{55AB}"),
    (0x2F849, FoldKind::Simple, "\u{55B3}"), (0x2F84A, FoldKind::Simple, "\u{55C2}"),
    (0x2F84B, FoldKind::Simple, "\u{5716}"), (0x2F84C, FoldKind::Simple, "\u{5606}"),
    (0x2F84D, FoldKind::Simple, "\u{5717}"), (0x2F84E, FoldKind::Simple, "\u{5651}"),
    (0x2F84F, FoldKind::Simple, "\u{5674}"), (0x2F850, FoldKind::Simple, "\u{5207}"),
    (0x2F851, FoldKind::Simple, "\u{58EE}"), (0x2F852, FoldKind::Simple, "\u{57CE}"),
    (0x2F853, FoldKind::Simple, "\u{57F4}"), (0x2F854, FoldKind::Simple, "\u{580D}"),
    (0x2F855, FoldKind::Simple, "\u{578B}"), (0x2F856, FoldKind::Simple, "\u{5832}"),
    (0x2F857, FoldKind::Simple, "\u{5831}"), (0x2F858, FoldKind::Simple, "\u{58AC}"),
    (0x2F859, FoldKind::Simple, "\u{214E4}"), (0x2F85A, FoldKind::Simple, "\u{58F2}"),
    (0x2F85B, FoldKind::Simple, "\u{58F7}"), (0x2F85C, FoldKind::Simple, "\u{5906}"),
    (0x2F85D, FoldKind::Simple, "\u{591A}"), (0x2F85E, FoldKind::Simple, "\u{5922}"),
    (0x2F85F, FoldKind::Simple, "\u{5962}"), (0x2F860, FoldKind::Simple, "\u{216A8}"),
    (0x2F861, FoldKind::Simple, "\u{216EA}"), (0x2F862, FoldKind::Simple, "\u{59EC}"),
    (0x2F863, FoldKind::Simple, "\u{5A1B}"), (0x2F864, FoldKind::Simple, "\u{5A27}"),
    (0x2F865, FoldKind::Simple, "\u{59D8}"), (0x2F866, FoldKind::Simple, "\u{5A66}"),
    (0x2F867, FoldKind::Simple, "\u{36EE}"), (0x2F868, FoldKind::Simple, "\u{36FC}"),
    (0x2F869, FoldKind::Simple, "\u{5B08}"), (0x2F86A, FoldKind::Simple, "\u{5B3E}"),
    (0x2F86B, FoldKind::Simple, "\u{5B3E}"), (0x2F86C, FoldKind::Simple, "\u{219C8}"),
    (0x2F86D, FoldKind::Simple, "\u{5BC3}"), (0x2F86E, FoldKind::Simple, "\u{5BD8}"),
    (0x2F86F, FoldKind::Simple, "\u{5BE7}"), (0x2F870, FoldKind::Simple, "\u{5BF3}"),
    (0x2F871, FoldKind::Simple, "\u{21B18}"), (0x2F872, FoldKind::Simple, "\u{5BFF}"),
    (0x2F873, FoldKind::Simple, "\u{5C06}"), (0x2F874, FoldKind::Simple, "\u{5F53}"),
    (0x2F875, FoldKind::Simple, "\u{5C22}"), (0x2F876, FoldKind::Simple, "\u{3781}"),
    (0x2F877, FoldKind::Simple, "\u{5C60}"), (0x2F878, FoldKind::Simple, "\u{5C6E}"),
    (0x2F879, FoldKind::Simple, "\u{5CC0}"), (0x2F87A, FoldKind::Simple, "\u{5C8D}"),
    (0x2F87B, FoldKind::Simple, "\u{21DE4}"), (0x2F87C, FoldKind::Simple, "\u{5D43}"),
    (0x2F87D, FoldKind::Simple, "\u{21DE6}"), (0x2F87E, FoldKind::Simple, "\u{5D6E}"),
    (0x2F87F, FoldKind::Simple, "\u{5D6B}"), (0x2F880, FoldKind::Simple, "\u{5D7C}"),
    (0x2F881, FoldKind::Simple, "\u{5DE1}"), (0x2F882, FoldKind::Simple, "\u{5DE2}"),
    (0x2F883, FoldKind::Simple, "\u{382F}"), (0x2F884, FoldKind::Simple, "\u{5DFD}"),
    (0x2F885, FoldKind::Simple, "\u{5E28}"), (0x2F886, FoldKind::Simple, "\u{5E3D}"),
    (0x2F887, FoldKind::Simple, "\u{5E69}"), (0x2F888, FoldKind::Simple, "\u{3862}"),
    (0x2F889, FoldKind::Simple, "\u{22183}"), (0x2F88A, FoldKind::Simple, "\u{387C}"),
    (0x2F88B, FoldKind::Simple, "\u{5EB0}"), (0x2F88C, FoldKind::Simple, "\u{5EB3}"),
    (0x2F88D, FoldKind::Simple, "\u{5EB6}"), (0x2F88E, FoldKind::Simple, "\u{5ECA}"),
    (0x2F88F, FoldKind::Simple, "\u{2A392}"), (0x2F890, FoldKind::Simple, "\u{5EFE}"),
    (0x2F891, FoldKind::Simple, "\u{22331}"), (0x2F892, FoldKind::Simple, "\u{22331}"),
    (0x2F893, FoldKind::Simple, "\u{8201}"), (0x2F894, FoldKind::Simple, "\u{5F22}"),
    (0x2F895, FoldKind::Simple, "\u{5F22}"), (0x2F896, FoldKind::Simple, "\u{38C7}"),
    (0x2F897, FoldKind::Simple, "\u{232B8}"), (0x2F898, FoldKind::Simple, "\u{261DA}"),
    (0x2F899, FoldKind::Simple, "\u{5F62}"), (0x2F89A, FoldKind::Simple, "\u{5F6B}"),
    (0x2F89B, FoldKind::Simple, "\u{38E3}"), (0x2F89C, FoldKind::Simple, "\u{5F9A}"),
    (0x2F89D, FoldKind::Simple, "\u{5FCD}"), (0x2F89E, FoldKind::Simple, "\u{5FD7}"),
    (0x2F89F, FoldKind::Simple, "\u{5FF9}"), (0x2F8A0, FoldKind::Simple, "\u{6081}"),
    (0x2F8A1, FoldKind::Simple, "\u{393A}"), (0x2F8A2, FoldKind::Simple, "\u{391C}"),
    (0x2F8A3, FoldKind::Simple, "\u{6094}"), (0x2F8A4, FoldKind::Simple, "\u{226D4}"),
    (0x2F8A5, FoldKind::Simple, "\u{60C7}"), (0x2F8A6, FoldKind::Simple, "\u{6148}"),
    (0x2F8A7, FoldKind::Simple, "\u{614C}"), (0x2F8A8, FoldKind::Simple, "\u{614E}"),
    (0x2F8A9, FoldKind::Simple, "\u{614C}"), (0x2F8AA, FoldKind::Simple, "\u{617A}"),
    (0x2F8AB, FoldKind::Simple, "\u{618E}"), (0x2F8AC, FoldKind::Simple, "\u{61B2}"),
    (0x2F8AD, FoldKind::Simple, "\u{61A4}"), (0x2F8AE, FoldKind::Simple, "\u{61AF}"),
    (0x2F8AF, FoldKind::Simple, "\u{61DE}"), (0x2F8B0, FoldKind::Simple, "\u{61F2}"),
    (0x2F8B1, FoldKind::Simple, "\u{61F6}"), (0x2F8B2, FoldKind::Simple, "\u{6210}"),
    (0x2F8B3, FoldKind::Simple, "\u{621B}"), (0x2F8B4, FoldKind::Simple, "\u{625D}"),
    (0x2F8B5, FoldKind::Simple, "\u{62B1}"), (0x2F8B6, FoldKind::Simple, "\u{62D4}"),
    (0x2F8B7, FoldKind::Simple, "\u{6350}"), (0x2F8B8, FoldKind::Simple, "\u{22B0C}"),
    (0x2F8B9, FoldKind::Simple, "\u{633D}"), (0x2F8BA, FoldKind::Simple, "\u{62FC}"),
    (0x2F8BB, FoldKind::Simple, "\u{6368}"), (0x2F8BC, FoldKind::Simple, "\u{6383}"),
    (0x2F8BD, FoldKind::Simple, "\u{63E4}"), (0x2F8BE, FoldKind::Simple, "\u{22BF1}"),
    (0x2F8BF, FoldKind::Simple, "\u{6422}"), (0x2F8C0, FoldKind::Simple, "\u{63C5}"),
    (0x2F8C1, FoldKind::Simple, "\u{63A9}"), (0x2F8C2, FoldKind::Simple, "\u{3A2E}"),
    (0x2F8C3, FoldKind::Simple, "\u{6469}"), (0x2F8C4, FoldKind::Simple, "\u{647E}"),
    (0x2F8C5, FoldKind::Simple, "\u{649D}"), (0x2F8C6, FoldKind::Simple, "\u{6477}"),
    (0x2F8C7, FoldKind::Simple, "\u{3A6C}"), (0x2F8C8, FoldKind::Simple, "\u{654F}"),
    (0x2F8C9, FoldKind::Simple, "\u{656C}"), (0x2F8CA, FoldKind::Simple, "\u{2300A}"),
    (0x2F8CB, FoldKind::Simple, "\u{65E3}"), (0x2F8CC, FoldKind::Simple, "\u{66F8}"),
    (0x2F8CD, FoldKind::Simple, "\u{6649}"), (0x2F8CE, FoldKind::Simple, "\u{3B19}"),
    (0x2F8CF, FoldKind::Simple, "\u{6691}"), (0x2F8D0, FoldKind::Simple, "\u{3B08}"),
    (0x2F8D1, FoldKind::Simple, "\u{3AE4}"), (0x2F8D2, FoldKind::Simple, "\u{5192}"),
    (0x2F8D3, FoldKind::Simple, "\u{5195}"), (0x2F8D4, FoldKind::Simple, "\u{6700}"),
    (0x2F8D5, FoldKind::Simple, "\u{669C}"), (0x2F8D6, FoldKind::Simple, "\u{80AD}"),
    (0x2F8D7, FoldKind::Simple, "\u{43D9}"), (0x2F8D8, FoldKind::Simple, "\u{6717}"),
    (0x2F8D9, FoldKind::Simple, "\u{671B}"), (0x2F8DA, FoldKind::Simple, "\u{6721}"),
    (0x2F8DB, FoldKind::Simple, "\u{675E}"), (0x2F8DC, FoldKind::Simple, "\u{6753}"),
    (0x2F8DD, FoldKind::Simple, "\u{233C3}"), (0x2F8DE, FoldKind::Simple, "\u{3B49}"),
    (0x2F8DF, FoldKind::Simple, "\u{67FA}"), (0x2F8E0, FoldKind::Simple, "\u{6785}"),
    (0x2F8E1, FoldKind::Simple, "\u{6852}"), (0x2F8E2, FoldKind::Simple, "\u{6885}"),
    (0x2F8E3, FoldKind::Simple, "\u{2346D}"), (0x2F8E4, FoldKind::Simple, "\u{688E}"),
    (0x2F8E5, FoldKind::Simple, "\u{681F}"), (0x2F8E6, FoldKind::Simple, "\u{6914}"),
    (0x2F8E7, FoldKind::Simple, "\u{3B9D}"), (0x2F8E8, FoldKind::Simple, "\u{6942}"),
    (0x2F8E9, FoldKind::Simple, "\u{69A3}"), (0x2F8EA, FoldKind::Simple, "\u{69EA}"),
    (0x2F8EB, FoldKind::Simple, "\u{6AA8}"), (0x2F8EC, FoldKind::Simple, "\u{236A3}"),
    (0x2F8ED, FoldKind::Simple, "\u{6ADB}"), (0x2F8EE, FoldKind::Simple, "\u{3C18}"),
    (0x2F8EF, FoldKind::Simple, "\u{6B21}"), (0x2F8F0, FoldKind::Simple, "\u{238A7}"),
    (0x2F8F1, FoldKind::Simple, "\u{6B54}"), (0x2F8F2, FoldKind::Simple, "\u{3C4E}"),
    (0x2F8F3, FoldKind::Simple, "\u{6B72}"), (0x2F8F4, FoldKind::Simple, "\u{6B9F}"),
    (0x2F8F5, FoldKind::Simple, "\u{6BBA}"), (0x2F8F6, FoldKind::Simple, "\u{6BBB}"),
    (0x2F8F7, FoldKind::Simple, "\u{23A8D}"), (0x2F8F8, FoldKind::Simple, "\u{21D0B}"),
    (0x2F8F9, FoldKind::Simple, "\u{23AFA}"), (0x2F8FA, FoldKind::Simple, "\u{6C4E}"),
    (0x2F8FB, FoldKind::Simple, "\u{23CBC}"), (0x2F8FC, FoldKind::Simple, "\u{6CBF}"),
    (0x2F8FD, FoldKind::Simple, "\u{6CCD}"), (0x2F8FE, FoldKind::Simple, "\u{6C67}"),
    (0x2F8FF, FoldKind::Simple, "\u{6D16}"), (0x2F900, FoldKind::Simple, "\u{6D3E}"),
    (0x2F901, FoldKind::Simple, "\u{6D77}"), (0x2F902, FoldKind::Simple, "\u{6D41}"),
    (0x2F903, FoldKind::Simple, "\u{6D69}"), (0x2F904, FoldKind::Simple, "\u{6D78}"),
    (0x2F905, FoldKind::Simple, "\u{6D85}"), (0x2F906, FoldKind::Simple, "\u{23D1E}"),
    (0x2F907, FoldKind::Simple, "\u{6D34}"), (0x2F908, FoldKind::Simple, "\u{6E2F}"),
    (0x2F909, FoldKind::Simple, "\u{6E6E}"), (0x2F90A, FoldKind::Simple, "\u{3D33}"),
    (0x2F90B, FoldKind::Simple, "\u{6ECB}"), (0x2F90C, FoldKind::Simple, "\u{6EC7}"),
    (0x2F90D, FoldKind::Simple, "\u{23ED1}"), (0x2F90E, FoldKind::Simple, "\u{6DF9}"),
    (0x2F90F, FoldKind::Simple, "\u{6F6E}"), (0x2F910, FoldKind::Simple, "\u{23F5E}"),
    (0x2F911, FoldKind::Simple, "\u{23F8E}"), (0x2F912, FoldKind::Simple, "\u{6FC6}"),
    (0x2F913, FoldKind::Simple, "\u{7039}"), (0x2F914, FoldKind::Simple, "\u{701E}"),
    (0x2F915, FoldKind::Simple, "\u{701B}"), (0x2F916, FoldKind::Simple, "\u{3D96}"),
    (0x2F917, FoldKind::Simple, "\u{704A}"), (0x2F918, FoldKind::Simple, "\u{707D}"),
    (0x2F919, FoldKind::Simple, "\u{7077}"), (0x2F91A, FoldKind::Simple, "\u{70AD}"),
    (0x2F91B, FoldKind::Simple, "\u{20525}"), (0x2F91C, FoldKind::Simple, "\u{7145}"),
    (0x2F91D, FoldKind::Simple, "\u{24263}"), (0x2F91E, FoldKind::Simple, "\u{719C}"),
    (0x2F91F, FoldKind::Simple, "\u{243AB}"), (0x2F920, FoldKind::Simple, "\u{7228}"),
    (0x2F921, FoldKind::Simple, "\u{7235}"), (0x2F922, FoldKind::Simple, "\u{7250}"),
    (0x2F923, FoldKind::Simple, "\u{24608}"), (0x2F924, FoldKind::Simple, "\u{7280}"),
    (0x2F925, FoldKind::Simple, "\u{7295}"), (0x2F926, FoldKind::Simple, "\u{24735}"),
    (0x2F927, FoldKind::Simple, "\u{24814}"), (0x2F928, FoldKind::Simple, "\u{737A}"),
    (0x2F929, FoldKind::Simple, "\u{738B}"), (0x2F92A, FoldKind::Simple, "\u{3EAC}"),
    (0x2F92B, FoldKind::Simple, "\u{73A5}"), (0x2F92C, FoldKind::Simple, "\u{3EB8}"),
    (0x2F92D, FoldKind::Simple, "\u{3EB8}"), (0x2F92E, FoldKind::Simple, "\u{7447}"),
    (0x2F92F, FoldKind::Simple, "\u{745C}"), (0x2F930, FoldKind::Simple, "\u{7471}"),
    (0x2F931, FoldKind::Simple, "\u{7485}"), (0x2F932, FoldKind::Simple, "\u{74CA}"),
    (0x2F933, FoldKind::Simple, "\u{3F1B}"), (0x2F934, FoldKind::Simple, "\u{7524}"),
    (0x2F935, FoldKind::Simple, "\u{24C36}"), (0x2F936, FoldKind::Simple, "\u{753E}"),
    (0x2F937, FoldKind::Simple, "\u{24C92}"), (0x2F938, FoldKind::Simple, "\u{7570}"),
    (0x2F939, FoldKind::Simple, "\u{2219F}"), (0x2F93A, FoldKind::Simple, "\u{7610}"),
    (0x2F93B, FoldKind::Simple, "\u{24FA1}"), (0x2F93C, FoldKind::Simple, "\u{24FB8}"),
    (0x2F93D, FoldKind::Simple, "\u{25044}"), (0x2F93E, FoldKind::Simple, "\u{3FFC}"),
    (0x2F93F, FoldKind::Simple, "\u{4008}"), (0x2F940, FoldKind::Simple, "\u{76F4}"),
    (0x2F941, FoldKind::Simple, "\u{250F3}"), (0x2F942, FoldKind::Simple, "\u{250F2}"),
    (0x2F943, FoldKind::Simple, "\u{25119}"), (0x2F944, FoldKind::Simple, "\u{25133}"),
    (0x2F945, FoldKind::Simple, "\u{771E}"), (0x2F946, FoldKind::Simple, "\u{771F}"),
    (0x2F947, FoldKind::Simple, "\u{771F}"), (0x2F948, FoldKind::Simple, "\u{774A}"),
    (0x2F949, FoldKind::Simple, "\u{4039}"), (0x2F94A, FoldKind::Simple, "\u{778B}"),
    (0x2F94B, FoldKind::Simple, "\u{4046}"), (0x2F94C, FoldKind::Simple, "\u{4096}"),
    (0x2F94D, FoldKind::Simple, "\u{2541D}"), (0x2F94E, FoldKind::Simple, "\u{784E}"),
    (0x2F94F, FoldKind::Simple, "\u{788C}"), (0x2F950, FoldKind::Simple, "\u{78CC}"),
    (0x2F951, FoldKind::Simple, "\u{40E3}"), (0x2F952, FoldKind::Simple, "\u{25626}"),
    (0x2F953, FoldKind::Simple, "\u{7956}"), (0x2F954, FoldKind::Simple, "\u{2569A}"),
    (0x2F955, FoldKind::Simple, "\u{256C5}"), (0x2F956, FoldKind::Simple, "\u{798F}"),
    (0x2F957, FoldKind::Simple, "\u{79EB}"), (0x2F958, FoldKind::Simple, "\u{412F}"),
    (0x2F959, FoldKind::Simple, "\u{7A40}"), (0x2F95A, FoldKind::Simple, "\u{7A4A}"),
    (0x2F95B, FoldKind::Simple, "\u{7A4F}"), (0x2F95C, FoldKind::Simple, "\u{2597C}"),
    (0x2F95D, FoldKind::Simple, "\u{25AA7}"), (0x2F95E, FoldKind::Simple, "\u{25AA7}"),
    (0x2F95F, FoldKind::Simple, "\u{7AEE}"), (0x2F960, FoldKind::Simple, "\u{4202}"),
    (0x2F961, FoldKind::Simple, "\u{25BAB}"), (0x2F962, FoldKind::Simple, "\u{7BC6}"),
    (0x2F963, FoldKind::Simple, "\u{7BC9}"), (0x2F964, FoldKind::Simple, "\u{4227}"),
    (0x2F965, FoldKind::Simple, "\u{25C80}"), (0x2F966, FoldKind::Simple, "\u{7CD2}"),
    (0x2F967, FoldKind::Simple, "\u{42A0}"), (0x2F968, FoldKind::Simple, "\u{7CE8}"),
    (0x2F969, FoldKind::Simple, "\u{7CE3}"), (0x2F96A, FoldKind::Simple, "\u{7D00}"),
    (0x2F96B, FoldKind::Simple, "\u{25F86}"), (0x2F96C, FoldKind::Simple, "\u{7D63}"),
    (0x2F96D, FoldKind::Simple, "\u{4301}"), (0x2F96E, FoldKind::Simple, "\u{7DC7}"),
    (0x2F96F, FoldKind::Simple, "\u{7E02}"), (0x2F970, FoldKind::Simple, "\u{7E45}"),
    (0x2F971, FoldKind::Simple, "\u{4334}"), (0x2F972, FoldKind::Simple, "\u{26228}"),
    (0x2F973, FoldKind::Simple, "\u{26247}"), (0x2F974, FoldKind::Simple, "\u{4359}"),
    (0x2F975, FoldKind::Simple, "\u{262D9}"), (0x2F976, FoldKind::Simple, "\u{7F7A}"),
    (0x2F977, FoldKind::Simple, "\u{2633E}"), (0x2F978, FoldKind::Simple, "\u{7F95}"),
    (0x2F979, FoldKind::Simple, "\u{7FFA}"), (0x2F97A, FoldKind::Simple, "\u{8005}"),
    (0x2F97B, FoldKind::Simple, "\u{264DA}"), (0x2F97C, FoldKind::Simple, "\u{26523}"),
    (0x2F97D, FoldKind::Simple, "\u{8060}"), (0x2F97E, FoldKind::Simple, "\u{265A8}"),
    (0x2F97F, FoldKind::Simple, "\u{8070}"), (0x2F980, FoldKind::Simple, "\u{2335F}"),
    (0x2F981, FoldKind::Simple, "\u{43D5}"), (0x2F982, FoldKind::Simple, "\u{80B2}"),
    (0x2F983, FoldKind::Simple, "\u{8103}"), (0x2F984, FoldKind::Simple, "\u{440B}"),
    (0x2F985, FoldKind::Simple, "\u{813E}"), (0x2F986, FoldKind::Simple, "\u{5AB5}"),
    (0x2F987, FoldKind::Simple, "\u{267A7}"), (0x2F988, FoldKind::Simple, "\u{267B5}"),
    (0x2F989, FoldKind::Simple, "\u{23393}"), (0x2F98A, FoldKind::Simple, "\u{2339C}"),
    (0x2F98B, FoldKind::Simple, "\u{8201}"), (0x2F98C, FoldKind::Simple, "\u{8204}"),
    (0x2F98D, FoldKind::Simple, "\u{8F9E}"), (0x2F98E, FoldKind::Simple, "\u{446B}"),
    (0x2F98F, FoldKind::Simple, "\u{8291}"), (0x2F990, FoldKind::Simple, "\u{828B}"),
    (0x2F991, FoldKind::Simple, "\u{829D}"), (0x2F992, FoldKind::Simple, "\u{52B3}"),
    (0x2F993, FoldKind::Simple, "\u{82B1}"), (0x2F994, FoldKind::Simple, "\u{82B3}"),
    (0x2F995, FoldKind::Simple, "\u{82BD}"), (0x2F996, FoldKind::Simple, "\u{82E6}"),
    (0x2F997, FoldKind::Simple, "\u{26B3C}"), (0x2F998, FoldKind::Simple, "\u{82E5}"),
    (0x2F999, FoldKind::Simple, "\u{831D}"), (0x2F99A, FoldKind::Simple, "\u{8363}"),
    (0x2F99B, FoldKind::Simple, "\u{83AD}"), (0x2F99C, FoldKind::Simple, "\u{8323}"),
    (0x2F99D, FoldKind::Simple, "\u{83BD}"), (0x2F99E, FoldKind::Simple, "\u{83E7}"),
    (0x2F99F, FoldKind::Simple, "\u{8457}"), (0x2F9A0, FoldKind::Simple, "\u{8353}"),
    (0x2F9A1, FoldKind::Simple, "\u{83CA}"), (0x2F9A2, FoldKind::Simple, "\u{83CC}"),
    (0x2F9A3, FoldKind::Simple, "\u{83DC}"), (0x2F9A4, FoldKind::Simple, "\u{26C36}"),
    (0x2F9A5, FoldKind::Simple, "\u{26D6B}"), (0x2F9A6, FoldKind::Simple, "\u{26CD5}"),
    (0x2F9A7, FoldKind::Simple, "\u{452B}"), (0x2F9A8, FoldKind::Simple, "\u{84F1}"),
    (0x2F9A9, FoldKind::Simple, "\u{84F3}"), (0x2F9AA, FoldKind::Simple, "\u{8516}"),
    (0x2F9AB, FoldKind::Simple, "\u{273CA}"), (0x2F9AC, FoldKind::Simple, "\u{8564}"),
    (0x2F9AD, FoldKind::Simple, "\u{26F2C}"), (0x2F9AE, FoldKind::Simple, "\u{455D}"),
    (0x2F9AF, FoldKind::Simple, "\u{4561}"), (0x2F9B0, FoldKind::Simple, "\u{26FB1}"),
    (0x2F9B1, FoldKind::Simple, "\u{270D2}"), (0x2F9B2, FoldKind::Simple, "\u{456B}"),
    (0x2F9B3, FoldKind::Simple, "\u{8650}"), (0x2F9B4, FoldKind::Simple, "\u{865C}"),
    (0x2F9B5, FoldKind::Simple, "\u{8667}"), (0x2F9B6, FoldKind::Simple, "\u{8669}"),
    (0x2F9B7, FoldKind::Simple, "\u{86A9}"), (0x2F9B8, FoldKind::Simple, "\u{8688}"),
    (0x2F9B9, FoldKind::Simple, "\u{870E}"), (0x2F9BA, FoldKind::Simple, "\u{86E2}"),
    (0x2F9BB, FoldKind::Simple, "\u{8779}"), (0x2F9BC, FoldKind::Simple, "\u{8728}"),
    (0x2F9BD, FoldKind::Simple, "\u{876B}"), (0x2F9BE, FoldKind::Simple, "\u{8786}"),
    (0x2F9BF, FoldKind::Simple, "\u{45D7}"), (0x2F9C0, FoldKind::Simple, "\u{87E1}"),
    (0x2F9C1, FoldKind::Simple, "\u{8801}"), (0x2F9C2, FoldKind::Simple, "\u{45F9}"),
    (0x2F9C3, FoldKind::Simple, "\u{8860}"), (0x2F9C4, FoldKind::Simple, "\u{8863}"),
    (0x2F9C5, FoldKind::Simple, "\u{27667}"), (0x2F9C6, FoldKind::Simple, "\u{88D7}"),
    (0x2F9C7, FoldKind::Simple, "\u{88DE}"), (0x2F9C8, FoldKind::Simple, "\u{4635}"),
    (0x2F9C9, FoldKind::Simple, "\u{88FA}"), (0x2F9CA, FoldKind::Simple, "\u{34BB}"),
    (0x2F9CB, FoldKind::Simple, "\u{278AE}"), (0x2F9CC, FoldKind::Simple, "\u{27966}"),
    (0x2F9CD, FoldKind::Simple, "\u{46BE}"), (0x2F9CE, FoldKind::Simple, "\u{46C7}"),
    (0x2F9CF, FoldKind::Simple, "\u{8AA0}"), (0x2F9D0, FoldKind::Simple, "\u{8AED}"),
    (0x2F9D1, FoldKind::Simple, "\u{8B8A}"), (0x2F9D2, FoldKind::Simple, "\u{8C55}"),
    (0x2F9D3, FoldKind::Simple, "\u{27CA8}"), (0x2F9D4, FoldKind::Simple, "\u{8CAB}"),
    (0x2F9D5, FoldKind::Simple, "\u{8CC1}"), (0x2F9D6, FoldKind::Simple, "\u{8D1B}"),
    (0x2F9D7, FoldKind::Simple, "\u{8D77}"), (0x2F9D8, FoldKind::Simple, "\u{27F2F}"),
    (0x2F9D9, FoldKind::Simple, "\u{20804}"), (0x2F9DA, FoldKind::Simple, "\u{8DCB}"),
    (0x2F9DB, FoldKind::Simple, "\u{8DBC}"), (0x2F9DC, FoldKind::Simple, "\u{8DF0}"),
    (0x2F9DD, FoldKind::Simple, "\u{208DE}"), (0x2F9DE, FoldKind::Simple, "\u{8ED4}"),
    (0x2F9DF, FoldKind::Simple, "\u{8F38}"), (0x2F9E0, FoldKind::Simple, "\u{285D2}"),
    (0x2F9E1, FoldKind::Simple, "\u{285ED}"), (0x2F9E2, FoldKind::Simple, "\u{9094}"),
    (0x2F9E3, FoldKind::Simple, "\u{90F1}"), (0x2F9E4, FoldKind::Simple, "\u{9111}"),
    (0x2F9E5, FoldKind::Simple, "\u{2872E}"), (0x2F9E6, FoldKind::Simple, "\u{911B}"),
    (0x2F9E7, FoldKind::Simple, "\u{9238}"), (0x2F9E8, FoldKind::Simple, "\u{92D7}"),
    (0x2F9E9, FoldKind::Simple, "\u{92D8}"), (0x2F9EA, FoldKind::Simple, "\u{927C}"),
    (0x2F9EB, FoldKind::Simple, "\u{93F9}"), (0x2F9EC, FoldKind::Simple, "\u{9415}"),
    (0x2F9ED, FoldKind::Simple, "\u{28BFA}"), (0x2F9EE, FoldKind::Simple, "\u{958B}"),
    (0x2F9EF, FoldKind::Simple, "\u{4995}"), (0x2F9F0, FoldKind::Simple, "\u{95B7}"),
    (0x2F9F1, FoldKind::Simple, "\u{28D77}"), (0x2F9F2, FoldKind::Simple, "\u{49E6}"),
    (0x2F9F3, FoldKind::Simple, "\u{96C3}"), (0x2F9F4, FoldKind::Simple, "\u{5DB2}"),
    (0x2F9F5, FoldKind::Simple, "\u{9723}"), (0x2F9F6, FoldKind::Simple, "\u{29145}"),
    (0x2F9F7, FoldKind::Simple, "\u{2921A}"), (0x2F9F8, FoldKind::Simple, "\u{4A6E}"),
    (0x2F9F9, FoldKind::Simple, "\u{4A76}"), (0x2F9FA, FoldKind::Simple, "\u{97E0}"),
    (0x2F9FB, FoldKind::Simple, "\u{2940A}"), (0x2F9FC, FoldKind::Simple, "\u{4AB2}"),
    (0x2F9FD, FoldKind::Simple, "\u{29496}"), (0x2F9FE, FoldKind::Simple, "\u{980B}"),
    (0x2F9FF, FoldKind::Simple, "\u{980B}"), (0x2FA00, FoldKind::Simple, "\u{9829}"),
    (0x2FA01, FoldKind::Simple, "\u{295B6}"), (0x2FA02, FoldKind::Simple, "\u{98E2}"),
    (0x2FA03, FoldKind::Simple, "\u{4B33}"), (0x2FA04, FoldKind::Simple, "\u{9929}"),
    (0x2FA05, FoldKind::Simple, "\u{99A7}"), (0x2FA06, FoldKind::Simple, "\u{99C2}"),
    (0x2FA07, FoldKind::Simple, "\u{99FE}"), (0x2FA08, FoldKind::Simple, "\u{4BCE}"),
    (0x2FA09, FoldKind::Simple, "\u{29B30}"), (0x2FA0A, FoldKind::Simple, "\u{9B12}"),
    (0x2FA0B, FoldKind::Simple, "\u{9C40}"), (0x2FA0C, FoldKind::Simple, "\u{9CFD}"),
    (0x2FA0D, FoldKind::Simple, "\u{4CCE}"), (0x2FA0E, FoldKind::Simple, "\u{4CED}"),
    (0x2FA0F, FoldKind::Simple, "\u{9D67}"), (0x2FA10, FoldKind::Simple, "\u{2A0CE}"),
    (0x2FA11, FoldKind::Simple, "\u{4CF8}"), (0x2FA12, FoldKind::Simple, "\u{2A105}"),
    (0x2FA13, FoldKind::Simple, "\u{2A20E}"), (0x2FA14, FoldKind::Simple, "\u{2A291}"),
    (0x2FA15, FoldKind::Simple, "\u{9EBB}"), (0x2FA16, FoldKind::Simple, "\u{4D56}"),
    (0x2FA17, FoldKind::Simple, "\u{9EF9}"), (0x2FA18, FoldKind::Simple, "\u{9EFE}"),
    (0x2FA19, FoldKind::Simple, "\u{9F05}"), (0x2FA1A, FoldKind::Simple, "\u{9F0F}"),
    (0x2FA1B, FoldKind::Simple, "\u{9F16}"), (0x2FA1C, FoldKind::Simple, "\u{9F3B}"),
    (0x2FA1D, FoldKind::Simple, "\u{2A600}"),
];

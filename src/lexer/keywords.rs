use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::TokenKind;

macro_rules! keyword {
    ($map:ident, $name:ident, $value:expr) => {
        $map.insert($value, TokenKind::$name);
    };
}

/// Multi-word keyword candidates, tried in order before single-word
/// classification. `I HAS A` must come before anything a lone `I` could start,
/// and no candidate may be a prefix of a later one it should not shadow.
pub const MULTI_WORD_KEYWORDS: &[(&str, TokenKind)] = &[
    ("I HAS A", TokenKind::IHasA),
    ("SUM OF", TokenKind::SumOf),
    ("DIFF OF", TokenKind::DiffOf),
    ("PRODUKT OF", TokenKind::ProduktOf),
    ("QUOSHUNT OF", TokenKind::QuoshuntOf),
    ("MOD OF", TokenKind::ModOf),
    ("BIGGR OF", TokenKind::BiggrOf),
    ("SMALLR OF", TokenKind::SmallrOf),
    ("BOTH OF", TokenKind::BothOf),
    ("EITHER OF", TokenKind::EitherOf),
    ("WON OF", TokenKind::WonOf),
    ("ANY OF", TokenKind::AnyOf),
    ("ALL OF", TokenKind::AllOf),
    ("BOTH SAEM", TokenKind::BothSaem),
    ("IS NOW A", TokenKind::IsNowA),
    ("O RLY?", TokenKind::ORly),
    ("YA RLY", TokenKind::YaRly),
    ("NO WAI", TokenKind::NoWai),
    ("WTF?", TokenKind::Wtf),
    ("IM IN YR", TokenKind::ImInYr),
    ("IM OUTTA YR", TokenKind::ImOuttaYr),
    ("HOW IZ I", TokenKind::HowIzI),
    ("IF U SAY SO", TokenKind::IfUSaySo),
    ("FOUND YR", TokenKind::FoundYr),
    ("I IZ", TokenKind::IIz),
];

/// Single-word keywords, looked up by uppercased word.
pub static SINGLE_WORD_KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();

    keyword!(m, Hai, "HAI");
    keyword!(m, Kthxbye, "KTHXBYE");
    keyword!(m, Wazzup, "WAZZUP");
    keyword!(m, Buhbye, "BUHBYE");
    keyword!(m, Itz, "ITZ");
    keyword!(m, R, "R");
    keyword!(m, Not, "NOT");
    keyword!(m, Diffrint, "DIFFRINT");
    keyword!(m, Smoosh, "SMOOSH");
    keyword!(m, Maek, "MAEK");
    keyword!(m, A, "A");
    keyword!(m, Visible, "VISIBLE");
    keyword!(m, Gimmeh, "GIMMEH");
    keyword!(m, Mebbe, "MEBBE");
    keyword!(m, Oic, "OIC");
    keyword!(m, Omg, "OMG");
    keyword!(m, Omgwtf, "OMGWTF");
    keyword!(m, Uppin, "UPPIN");
    keyword!(m, Nerfin, "NERFIN");
    keyword!(m, Yr, "YR");
    keyword!(m, Til, "TIL");
    keyword!(m, Wile, "WILE");
    keyword!(m, Gtfo, "GTFO");
    keyword!(m, Mkay, "MKAY");
    keyword!(m, An, "AN");
    keyword!(m, Noob, "NOOB");

    m
});

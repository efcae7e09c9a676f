use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Classification of a single token.
///
/// Multi-word keywords (`I HAS A`, `BOTH SAEM`, ...) are resolved by the lexer
/// and arrive here as a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // program delimiters
    Hai,
    Kthxbye,
    // declaration block
    Wazzup,
    Buhbye,
    // declaration and assignment
    IHasA,
    Itz,
    R,
    // arithmetic
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,
    // logic
    BothOf,
    EitherOf,
    WonOf,
    Not,
    AnyOf,
    AllOf,
    // comparison
    BothSaem,
    Diffrint,
    // string construction
    Smoosh,
    // casts
    IsNowA,
    Maek,
    A,
    // I/O
    Visible,
    Gimmeh,
    // branch
    ORly,
    YaRly,
    Mebbe,
    NoWai,
    Oic,
    // switch
    Wtf,
    Omg,
    Omgwtf,
    // loops
    ImInYr,
    Uppin,
    Nerfin,
    Yr,
    Til,
    Wile,
    ImOuttaYr,
    // functions
    HowIzI,
    IfUSaySo,
    IIz,
    Mkay,
    FoundYr,
    // break
    Gtfo,
    // argument conjunction
    An,
    // literals
    Numbr,
    Numbar,
    Yarn,
    Troof,
    Noob,
    Identifier,
}

impl TokenKind {
    /// The canonical surface spelling of this kind, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Hai => "HAI",
            TokenKind::Kthxbye => "KTHXBYE",
            TokenKind::Wazzup => "WAZZUP",
            TokenKind::Buhbye => "BUHBYE",
            TokenKind::IHasA => "I HAS A",
            TokenKind::Itz => "ITZ",
            TokenKind::R => "R",
            TokenKind::SumOf => "SUM OF",
            TokenKind::DiffOf => "DIFF OF",
            TokenKind::ProduktOf => "PRODUKT OF",
            TokenKind::QuoshuntOf => "QUOSHUNT OF",
            TokenKind::ModOf => "MOD OF",
            TokenKind::BiggrOf => "BIGGR OF",
            TokenKind::SmallrOf => "SMALLR OF",
            TokenKind::BothOf => "BOTH OF",
            TokenKind::EitherOf => "EITHER OF",
            TokenKind::WonOf => "WON OF",
            TokenKind::Not => "NOT",
            TokenKind::AnyOf => "ANY OF",
            TokenKind::AllOf => "ALL OF",
            TokenKind::BothSaem => "BOTH SAEM",
            TokenKind::Diffrint => "DIFFRINT",
            TokenKind::Smoosh => "SMOOSH",
            TokenKind::IsNowA => "IS NOW A",
            TokenKind::Maek => "MAEK",
            TokenKind::A => "A",
            TokenKind::Visible => "VISIBLE",
            TokenKind::Gimmeh => "GIMMEH",
            TokenKind::ORly => "O RLY?",
            TokenKind::YaRly => "YA RLY",
            TokenKind::Mebbe => "MEBBE",
            TokenKind::NoWai => "NO WAI",
            TokenKind::Oic => "OIC",
            TokenKind::Wtf => "WTF?",
            TokenKind::Omg => "OMG",
            TokenKind::Omgwtf => "OMGWTF",
            TokenKind::ImInYr => "IM IN YR",
            TokenKind::Uppin => "UPPIN",
            TokenKind::Nerfin => "NERFIN",
            TokenKind::Yr => "YR",
            TokenKind::Til => "TIL",
            TokenKind::Wile => "WILE",
            TokenKind::ImOuttaYr => "IM OUTTA YR",
            TokenKind::HowIzI => "HOW IZ I",
            TokenKind::IfUSaySo => "IF U SAY SO",
            TokenKind::IIz => "I IZ",
            TokenKind::Mkay => "MKAY",
            TokenKind::FoundYr => "FOUND YR",
            TokenKind::Gtfo => "GTFO",
            TokenKind::An => "AN",
            TokenKind::Numbr => "NUMBR",
            TokenKind::Numbar => "NUMBAR",
            TokenKind::Yarn => "YARN",
            TokenKind::Troof => "TROOF",
            TokenKind::Noob => "NOOB",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its exact source text and 1-based position.
///
/// String literals keep their surrounding quotes in `lexeme`; numeric lexemes
/// keep their surface text and are converted only at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }
}

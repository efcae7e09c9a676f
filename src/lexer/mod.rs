mod keywords;
mod token;

pub use keywords::*;
pub use token::*;

use std::{error::Error, fmt::Display};

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LexError(String);

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Error for LexError {}

/// Line-oriented lexer for LOLCODE.
///
/// Input is split on line terminators; comments never make it into the token
/// stream. Within a line, string literals are scanned first, then multi-word
/// keywords, then single words. Line and column are 1-based and refer to the
/// original source text.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    input: &'a str,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: vec![],
            input,
            line: 1,
        }
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        let mut in_block_comment = false;

        for (index, raw_line) in self.input.lines().enumerate() {
            self.line = index + 1;
            let stripped = raw_line.trim();

            if in_block_comment {
                if line_starts_with(stripped, "TLDR") {
                    in_block_comment = false;
                }
                continue;
            }

            if stripped.is_empty()
                || line_starts_with(stripped, "BTW")
                || line_starts_with(stripped, "TLDR")
            {
                continue;
            }

            if line_starts_with(stripped, "OBTW") {
                in_block_comment = true;
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            self.lex_line(stripped, indent)?;
        }

        debug!("lexed {} tokens", self.tokens.len());

        Ok(self.tokens)
    }

    fn lex_line(&mut self, stripped: &str, indent: usize) -> LexResult<()> {
        let bytes = stripped.as_bytes();
        let mut cursor = 0;

        while cursor < bytes.len() {
            if bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
                continue;
            }

            let column = indent + cursor + 1;

            if bytes[cursor] == b'"' {
                let Some(closing) = stripped[cursor + 1..].find('"') else {
                    return Err(LexError(format!(
                        "unterminated string literal at line {} column {column}",
                        self.line
                    )));
                };
                let lexeme = &stripped[cursor..cursor + closing + 2];
                self.tokens
                    .push(Token::new(TokenKind::Yarn, lexeme, self.line, column));
                cursor += lexeme.len();
                continue;
            }

            if let Some((text, kind)) = match_multi_word(&stripped[cursor..]) {
                self.tokens.push(Token::new(kind, text, self.line, column));
                cursor += text.len();
                continue;
            }

            let start = cursor;
            while cursor < bytes.len() && !bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            let word = &stripped[start..cursor];

            // rest of the line is a trailing comment
            if word.eq_ignore_ascii_case("BTW") {
                return Ok(());
            }

            self.tokens
                .push(Token::new(classify_word(word), word, self.line, column));
        }

        Ok(())
    }
}

fn line_starts_with(line: &str, keyword: &str) -> bool {
    line.len() >= keyword.len()
        && line.as_bytes()[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

/// Try all multi-word candidates at the current position, first match wins.
/// A candidate only matches when followed by end-of-line, whitespace, or
/// light punctuation, so `I HAS A` never swallows the start of an identifier.
fn match_multi_word(rest: &str) -> Option<(&'static str, TokenKind)> {
    for (text, kind) in MULTI_WORD_KEYWORDS {
        if rest.len() < text.len()
            || !rest.as_bytes()[..text.len()].eq_ignore_ascii_case(text.as_bytes())
        {
            continue;
        }

        match rest.as_bytes().get(text.len()) {
            None => return Some((text, *kind)),
            Some(next) if next.is_ascii_whitespace() => return Some((text, *kind)),
            Some(b',' | b';' | b')' | b'(' | b'.') => return Some((text, *kind)),
            Some(_) => {}
        }
    }

    None
}

fn classify_word(word: &str) -> TokenKind {
    let upper = word.to_ascii_uppercase();
    if let Some(kind) = SINGLE_WORD_KEYWORDS.get(upper.as_str()) {
        return *kind;
    }

    if is_numbr_literal(word) {
        return TokenKind::Numbr;
    }
    if is_numbar_literal(word) {
        return TokenKind::Numbar;
    }
    if word == "WIN" || word == "FAIL" {
        return TokenKind::Troof;
    }

    TokenKind::Identifier
}

fn is_numbr_literal(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_numbar_literal(word: &str) -> bool {
    let unsigned = word.strip_prefix('-').unwrap_or(word);
    let Some((integral, fractional)) = unsigned.split_once('.') else {
        return false;
    };

    !integral.is_empty()
        && !fractional.is_empty()
        && integral.bytes().all(|byte| byte.is_ascii_digit())
        && fractional.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .lex()
            .expect("lexing failed")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_lex_hello_world() {
        let tokens = Lexer::new("HAI\nVISIBLE \"HAI WORLD\"\nKTHXBYE").lex();

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::Hai, "HAI", 1, 1),
                Token::new(TokenKind::Visible, "VISIBLE", 2, 1),
                Token::new(TokenKind::Yarn, "\"HAI WORLD\"", 2, 9),
                Token::new(TokenKind::Kthxbye, "KTHXBYE", 3, 1),
            ]),
            tokens
        );
    }

    #[test]
    fn test_lex_multi_word_keyword() {
        let tokens = Lexer::new("I HAS A COUNT ITZ 5").lex();

        assert_eq!(
            Ok(vec![
                Token::new(TokenKind::IHasA, "I HAS A", 1, 1),
                Token::new(TokenKind::Identifier, "COUNT", 1, 9),
                Token::new(TokenKind::Itz, "ITZ", 1, 15),
                Token::new(TokenKind::Numbr, "5", 1, 19),
            ]),
            tokens
        );
    }

    #[test]
    fn test_lex_keyword_prefix_stays_identifier() {
        // `ANYTHING` must not match `ANY OF` or the keyword `AN`
        assert_eq!(vec![TokenKind::Identifier], kinds("ANYTHING"));
    }

    #[test]
    fn test_lex_multi_word_requires_boundary() {
        assert_eq!(
            vec![TokenKind::BothSaem, TokenKind::Identifier, TokenKind::An, TokenKind::Numbr],
            kinds("BOTH SAEM X AN 3")
        );
    }

    #[test]
    fn test_lex_keywords_case_insensitive() {
        assert_eq!(
            vec![TokenKind::Hai, TokenKind::Visible, TokenKind::Kthxbye],
            kinds("hai\nvisible\nkthxbye")
        );
    }

    #[test]
    fn test_lex_numeric_literals() {
        let tokens = Lexer::new("42 -17 3.14 -0.5").lex().expect("lexing failed");

        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        let lexemes = tokens
            .iter()
            .map(|token| token.lexeme.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                TokenKind::Numbr,
                TokenKind::Numbr,
                TokenKind::Numbar,
                TokenKind::Numbar
            ],
            kinds
        );
        assert_eq!(vec!["42", "-17", "3.14", "-0.5"], lexemes);
    }

    #[test]
    fn test_lex_malformed_number_is_identifier() {
        assert_eq!(vec![TokenKind::Identifier], kinds("1.2.3"));
        assert_eq!(vec![TokenKind::Identifier], kinds(".5"));
        assert_eq!(vec![TokenKind::Identifier], kinds("5."));
    }

    #[test]
    fn test_lex_troof_and_noob() {
        assert_eq!(
            vec![TokenKind::Troof, TokenKind::Troof, TokenKind::Noob],
            kinds("WIN FAIL NOOB")
        );
        // TROOF literals are case-sensitive
        assert_eq!(vec![TokenKind::Identifier], kinds("win"));
    }

    #[test]
    fn test_lex_comment_lines() {
        assert_eq!(
            vec![TokenKind::Hai, TokenKind::Kthxbye],
            kinds("HAI\nBTW nothing to see here\n\nKTHXBYE")
        );
    }

    #[test]
    fn test_lex_block_comment() {
        assert_eq!(
            vec![TokenKind::Hai, TokenKind::Kthxbye],
            kinds("HAI\nOBTW\n I HAS A GHOST\n VISIBLE GHOST\nTLDR\nKTHXBYE")
        );
    }

    #[test]
    fn test_lex_trailing_comment() {
        assert_eq!(
            vec![TokenKind::Visible, TokenKind::Numbr],
            kinds("VISIBLE 1 BTW prints one")
        );
    }

    #[test]
    fn test_lex_line_numbers_skip_comments() {
        let tokens = Lexer::new("HAI\nBTW comment\nVISIBLE 1\nKTHXBYE")
            .lex()
            .expect("lexing failed");

        assert_eq!(3, tokens[1].line);
        assert_eq!(4, tokens[3].line);
    }

    #[test]
    fn test_lex_column_accounts_for_indentation() {
        let tokens = Lexer::new("    VISIBLE 1").lex().expect("lexing failed");

        assert_eq!(5, tokens[0].column);
        assert_eq!(13, tokens[1].column);
    }

    #[test]
    fn test_lex_unterminated_string() {
        let result = Lexer::new("VISIBLE \"no end").lex();

        assert_eq!(
            Err(LexError(
                "unterminated string literal at line 1 column 9".into()
            )),
            result
        );
    }

    #[test]
    fn test_lex_string_keeps_quotes_and_spaces() {
        let tokens = Lexer::new("VISIBLE \"SUM OF 1 AN 2\"")
            .lex()
            .expect("lexing failed");

        assert_eq!(TokenKind::Yarn, tokens[1].kind);
        assert_eq!("\"SUM OF 1 AN 2\"", tokens[1].lexeme);
    }

    #[test]
    fn test_lex_bang_is_identifier() {
        let tokens = Lexer::new("VISIBLE \"X\" !").lex().expect("lexing failed");

        assert_eq!(TokenKind::Identifier, tokens[2].kind);
        assert_eq!("!", tokens[2].lexeme);
    }

    #[test]
    fn test_lex_position_matches_source() {
        let source = "HAI 1.2\n  I HAS A COUNT ITZ \"YARN IN HERE\"\nKTHXBYE";
        let tokens = Lexer::new(source).lex().expect("lexing failed");
        let lines = source.lines().collect::<Vec<_>>();

        for token in tokens {
            let line = lines[token.line - 1];
            let slice = &line[token.column - 1..token.column - 1 + token.lexeme.len()];
            assert_eq!(token.lexeme, slice);
        }
    }
}

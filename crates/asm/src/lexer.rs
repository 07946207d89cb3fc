//! Tokenizer for LS-8 assembly text.

use crate::error::AsmError;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// An identifier (mnemonic, register, label). Always uppercase.
    Ident(String),
    /// A numeric literal (decimal, `0x` hex or `0b` binary).
    Number(u64),
    /// Operand separator.
    Comma,
    /// Label definition marker.
    Colon,
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` or `#` and extend to end of line.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    let line = match line.find([';', '#']) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        // Split the word around punctuation so "R0,8" and "LOOP:" both work.
        let mut rest = word;
        while !rest.is_empty() {
            let end = rest.find([',', ':']).unwrap_or(rest.len());
            if end > 0 {
                tokens.push(word_token(&rest[..end], line_num)?);
            }
            match rest[end..].chars().next() {
                Some(',') => tokens.push(Token::Comma),
                Some(':') => tokens.push(Token::Colon),
                _ => {}
            }
            rest = rest.get(end + 1..).unwrap_or("");
        }
    }

    Ok(tokens)
}

fn word_token(word: &str, line_num: usize) -> Result<Token, AsmError> {
    let invalid = || AsmError::InvalidNumber {
        line: line_num,
        token: word.to_string(),
    };

    let lower = word.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
            .map(Token::Number)
            .map_err(|_| invalid())
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
            .map(Token::Number)
            .map_err(|_| invalid())
    } else if word.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
        word.parse().map(Token::Number).map_err(|_| invalid())
    } else {
        Ok(Token::Ident(word.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Token {
        Token::Ident(s.to_string())
    }

    #[test]
    fn empty_line() {
        assert_eq!(tokenize_line("", 1).unwrap(), vec![]);
    }

    #[test]
    fn comment_only() {
        assert_eq!(tokenize_line("; a comment", 1).unwrap(), vec![]);
        assert_eq!(tokenize_line("# also a comment", 1).unwrap(), vec![]);
    }

    #[test]
    fn simple_opcode() {
        assert_eq!(tokenize_line("HLT", 1).unwrap(), vec![ident("HLT")]);
    }

    #[test]
    fn operands_with_comma() {
        assert_eq!(
            tokenize_line("LDI R0,8", 1).unwrap(),
            vec![ident("LDI"), ident("R0"), Token::Comma, Token::Number(8)]
        );
    }

    #[test]
    fn operands_with_spaced_comma() {
        assert_eq!(
            tokenize_line("  mul r0 , r1  ; multiply", 1).unwrap(),
            vec![ident("MUL"), ident("R0"), Token::Comma, ident("R1")]
        );
    }

    #[test]
    fn label_definition() {
        assert_eq!(
            tokenize_line("loop: PRN R0", 1).unwrap(),
            vec![ident("LOOP"), Token::Colon, ident("PRN"), ident("R0")]
        );
    }

    #[test]
    fn number_bases() {
        assert_eq!(
            tokenize_line("DB 0x1F", 1).unwrap(),
            vec![ident("DB"), Token::Number(31)]
        );
        assert_eq!(
            tokenize_line("DB 0b1010", 1).unwrap(),
            vec![ident("DB"), Token::Number(10)]
        );
        assert_eq!(
            tokenize_line("DB 0XFF", 1).unwrap(),
            vec![ident("DB"), Token::Number(255)]
        );
    }

    #[test]
    fn invalid_hex_number() {
        assert_eq!(
            tokenize_line("DB 0xZZ", 3).unwrap_err(),
            AsmError::InvalidNumber {
                line: 3,
                token: "0xZZ".to_string()
            }
        );
    }

    #[test]
    fn invalid_binary_number() {
        assert_eq!(
            tokenize_line("DB 0b102", 5).unwrap_err(),
            AsmError::InvalidNumber {
                line: 5,
                token: "0b102".to_string()
            }
        );
    }

    #[test]
    fn digits_then_letters_is_invalid() {
        assert!(matches!(
            tokenize_line("LDI R0,8x", 1),
            Err(AsmError::InvalidNumber { .. })
        ));
    }
}

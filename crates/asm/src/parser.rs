//! Parser for LS-8 assembly tokens → statements.
//!
//! Dispatches on the opcode's operand layout. Label references are kept
//! symbolic here and resolved by the assembler's second pass.

use crate::error::AsmError;
use crate::lexer::Token;
use ls8_common::{Opcode, OperandKind, REGISTER_COUNT};

/// Directive that emits one raw byte.
pub(crate) const DATA_BYTE: &str = "DB";

/// A byte-valued operand that may still name a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Byte(u8),
    Label(String),
}

/// What a line emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement {
    /// An instruction with register indices and an optional immediate.
    Instruction { opcode: Opcode, operands: Vec<Value> },
    /// A `DB` data byte.
    Byte(Value),
}

impl Statement {
    /// Number of bytes the statement occupies.
    pub(crate) fn width(&self) -> usize {
        match self {
            Statement::Instruction { opcode, .. } => opcode.width() as usize,
            Statement::Byte(_) => 1,
        }
    }
}

/// A parsed line: an optional label followed by an optional statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Line {
    pub(crate) label: Option<String>,
    pub(crate) statement: Option<Statement>,
}

/// Parse the tokens of a single line.
pub(crate) fn parse_line(tokens: &[Token], line_num: usize) -> Result<Line, AsmError> {
    let mut line = Line::default();
    let mut rest = tokens;

    if let [Token::Ident(name), Token::Colon, tail @ ..] = rest {
        line.label = Some(name.clone());
        rest = tail;
    }

    let Some((head, args)) = rest.split_first() else {
        return Ok(line);
    };

    let mnemonic = match head {
        Token::Ident(s) => s.as_str(),
        other => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: describe(other),
            })
        }
    };

    if mnemonic == DATA_BYTE {
        let values = split_operands(args, line_num, DATA_BYTE, 1)?;
        line.statement = Some(Statement::Byte(expect_value(values[0], line_num)?));
        return Ok(line);
    }

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| AsmError::UnknownOpcode {
        line: line_num,
        token: mnemonic.to_string(),
    })?;

    let kinds = opcode.operands();
    let values = split_operands(args, line_num, opcode.mnemonic(), kinds.len())?;

    let mut operands = Vec::with_capacity(kinds.len());
    for (kind, token) in kinds.iter().zip(values) {
        let value = match kind {
            OperandKind::Register => Value::Byte(expect_register(token, line_num)?),
            OperandKind::Immediate => expect_value(token, line_num)?,
        };
        operands.push(value);
    }

    line.statement = Some(Statement::Instruction { opcode, operands });
    Ok(line)
}

/// Split `args` into exactly `expected` operands, with optional commas
/// between them.
fn split_operands<'t>(
    args: &'t [Token],
    line_num: usize,
    opcode: &'static str,
    expected: usize,
) -> Result<Vec<&'t Token>, AsmError> {
    let mut operands = Vec::new();
    let mut want_operand = true;

    for token in args {
        match token {
            Token::Comma if !want_operand => want_operand = true,
            Token::Comma | Token::Colon => {
                return Err(AsmError::UnexpectedToken {
                    line: line_num,
                    token: describe(token),
                })
            }
            _ if operands.len() == expected => {
                return Err(AsmError::UnexpectedToken {
                    line: line_num,
                    token: describe(token),
                })
            }
            _ => {
                operands.push(token);
                want_operand = false;
            }
        }
    }

    if operands.len() < expected || (want_operand && !operands.is_empty()) {
        return Err(AsmError::MissingArgument {
            line: line_num,
            opcode,
            expected,
        });
    }

    Ok(operands)
}

fn expect_register(token: &Token, line_num: usize) -> Result<u8, AsmError> {
    let invalid = || AsmError::InvalidRegister {
        line: line_num,
        token: describe(token),
    };

    let Token::Ident(name) = token else {
        return Err(invalid());
    };
    let index: u8 = name
        .strip_prefix('R')
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(invalid)?;
    if (index as usize) < REGISTER_COUNT {
        Ok(index)
    } else {
        Err(invalid())
    }
}

fn expect_value(token: &Token, line_num: usize) -> Result<Value, AsmError> {
    match token {
        Token::Number(n) => u8::try_from(*n)
            .map(Value::Byte)
            .map_err(|_| AsmError::InvalidNumber {
                line: line_num,
                token: n.to_string(),
            }),
        Token::Ident(name) => Ok(Value::Label(name.clone())),
        other => Err(AsmError::UnexpectedToken {
            line: line_num,
            token: describe(other),
        }),
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Ident(s) => s.clone(),
        Token::Number(n) => n.to_string(),
        Token::Comma => ",".to_string(),
        Token::Colon => ":".to_string(),
    }
}

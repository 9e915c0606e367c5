// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_ctx::options::ClassifyPolicy;

use crate::ir_types::ArithOp;

/// Characters the normalizer blanks out. `/` is left alone; callers
/// deal with division before normalizing.
const NORMALIZED_CHARS: [char; 5] = ['*', '+', '-', '(', ')'];

/// Replaces every `* + - ( )` in `expr` with a single space.
///
/// Purely textual: nothing is validated and malformed input comes back
/// with the same treatment.
pub fn normalize(expr: &str) -> String {
    expr.chars()
        .map(|c| if NORMALIZED_CHARS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Whitespace-separated operands of `text`, division included.
pub fn operands_of(text: &str) -> Vec<String> {
    normalize(&text.replace('/', " "))
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// A right-hand side with exactly one recognized operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: ArithOp,

    /// Raw text left of the operator.
    pub lhs: String,

    /// Raw text right of the operator.
    pub rhs: String,

    /// Normalized operands of the whole expression.
    pub operands: Vec<String>
}

impl BinaryExpr {
    /// Literal divisor; a decimal point in it asks for an extra store.
    pub fn divisor(&self) -> Option<&str> {
        match self.op {
            ArithOp::Div => Some(self.rhs.as_str()),
            _ => None
        }
    }

    pub fn has_float_divisor(&self) -> bool {
        self.divisor().is_some_and(|d| d.contains('.'))
    }
}

/// Classified right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rhs {
    Binary(BinaryExpr),

    /// No operator: a constant or a plain variable, normalized.
    Value(String)
}

pub fn classify(value: &str, policy: ClassifyPolicy) -> Rhs {
    match policy {
        ClassifyPolicy::Legacy => classify_textual(value),
        ClassifyPolicy::Structural => classify_structural(value)
    }
}

fn classify_textual(value: &str) -> Rhs {
    for op in ArithOp::LEGACY_PRIORITY {
        if value.contains(op.symbol()) {
            let mut pieces = value.split(op.symbol());
            let lhs = pieces.next().unwrap_or_default().trim();
            let rhs = pieces.next().unwrap_or_default().trim();
            return Rhs::Binary(BinaryExpr {
                op,
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
                operands: operands_of(value)
            });
        }
    }
    Rhs::Value(operands_of(value).join(" "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Op(ArithOp),
    LParen,
    RParen,
    Operand
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
    depth: usize
}

fn tokenize(value: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = vec![];
    let mut depth = 0usize;
    let mut operand_start: Option<usize> = None;

    for (idx, c) in value.char_indices() {
        let kind = match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            c if c.is_whitespace() => None,
            c => ArithOp::from_char(c).map(TokenKind::Op)
        };

        let is_operand_char = kind.is_none() && !c.is_whitespace();
        if is_operand_char {
            operand_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = operand_start.take() {
            tokens.push(Token { kind: TokenKind::Operand, start, end: idx, depth });
        }

        match kind {
            Some(TokenKind::LParen) => {
                tokens.push(Token { kind: TokenKind::LParen, start: idx, end: idx + 1, depth });
                depth += 1;
            },
            Some(TokenKind::RParen) => {
                depth = depth.saturating_sub(1);
                tokens.push(Token { kind: TokenKind::RParen, start: idx, end: idx + 1, depth });
            },
            Some(op) => tokens.push(Token { kind: op, start: idx, end: idx + 1, depth }),
            None => {}
        }
    }
    if let Some(start) = operand_start {
        tokens.push(Token { kind: TokenKind::Operand, start, end: value.len(), depth });
    }
    tokens
}

/// Picks the operator that would sit at the root of the expression
/// tree: shallowest nesting, then lowest precedence, then rightmost.
fn classify_structural(value: &str) -> Rhs {
    let tokens = tokenize(value);

    let root = tokens.iter()
        .enumerate()
        .filter_map(|(idx, tok)| match tok.kind {
            TokenKind::Op(op) => {
                let follows_operand = idx > 0 && matches!(
                    tokens[idx - 1].kind,
                    TokenKind::Operand | TokenKind::RParen
                );
                follows_operand.then_some((idx, op, tok))
            },
            _ => None
        })
        .min_by(|(ia, a, ta), (ib, b, tb)| {
            ta.depth.cmp(&tb.depth)
                .then(a.precedence().cmp(&b.precedence()))
                .then(ib.cmp(ia))
        });

    match root {
        Some((_, op, tok)) => {
            let lhs = &value[..tok.start];
            let rhs = &value[tok.end..];
            let mut operands = operands_of(lhs);
            operands.extend(operands_of(rhs));
            Rhs::Binary(BinaryExpr {
                op,
                lhs: strip_parens(lhs),
                rhs: strip_parens(rhs),
                operands
            })
        },
        None => Rhs::Value(strip_parens(value))
    }
}

fn strip_parens(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '(' && *c != ')' && !c.is_whitespace())
        .collect()
}

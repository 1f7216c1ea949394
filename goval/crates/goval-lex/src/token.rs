//! Token definitions for the expression lexer.
//!
//! A [`Token`] borrows its text from the source it was scanned from. Its
//! [`TokenKind`] is a closed sum type with one variant per syntactic role;
//! operators are further grouped by [`Operator`], and the subsets a parser
//! cares about are exposed as [`BinaryOp`] and [`PrefixOp`].

use std::fmt;

use goval_util::Span;
use serde::{Serialize, Serializer};

/// A lexical token.
///
/// `text` is always exactly `source[offset..offset + len]`.
///
/// # Example
///
/// ```
/// use goval_lex::{Lexer, TokenKind};
///
/// let token = Lexer::new("  foo").next_token();
/// assert_eq!(token.kind, TokenKind::Variable);
/// assert_eq!((token.offset, token.len, token.text), (2, 3, "foo"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// Syntactic role of the token.
    pub kind: TokenKind,
    /// Source text covered by the token.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    ///
    /// An [`TokenKind::Unknown`] token always covers exactly one character,
    /// which may span several bytes: `len` is 3 for U+FEFF.
    pub len: usize,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Self {
            kind,
            text,
            offset,
            len: text.len(),
        }
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Source range covered by the token.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.end())
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.text, self.span())
    }
}

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Zero length, always last.
    Eof,
    /// A numeric, string or boolean literal.
    Literal(LiteralKind),
    /// A plain identifier.
    Variable,
    /// An identifier registered as a function name.
    Function,
    /// A dotted identifier such as `foo.Bar`.
    Accessor,
    /// `,` or the membership keyword `in`.
    Separator(Separator),
    /// Grouping and punctuation.
    Delim(Delimiter),
    /// An operator.
    Op(Operator),
    /// A character no other rule accepts.
    Unknown,
}

impl TokenKind {
    /// Returns the binary operator this token denotes, if any.
    ///
    /// Includes the ternary and coalescing operators and both separators.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::token::{BinaryOp, Operator, Separator, TokenKind};
    ///
    /// assert_eq!(TokenKind::Op(Operator::EqEq).binary_op(), Some(BinaryOp::Eq));
    /// assert_eq!(TokenKind::Separator(Separator::In).binary_op(), Some(BinaryOp::In));
    /// assert_eq!(TokenKind::Op(Operator::Bang).binary_op(), None);
    /// ```
    pub fn binary_op(self) -> Option<BinaryOp> {
        let op = match self {
            TokenKind::Separator(Separator::Comma) => BinaryOp::Comma,
            TokenKind::Separator(Separator::In) => BinaryOp::In,
            TokenKind::Op(op) => match op {
                Operator::Plus => BinaryOp::Add,
                Operator::Minus => BinaryOp::Sub,
                Operator::Star => BinaryOp::Mul,
                Operator::Slash => BinaryOp::Div,
                Operator::Percent => BinaryOp::Mod,
                Operator::Pow => BinaryOp::Pow,
                Operator::Amp => BinaryOp::BitAnd,
                Operator::Pipe => BinaryOp::BitOr,
                Operator::Caret => BinaryOp::BitXor,
                Operator::Shl => BinaryOp::Shl,
                Operator::Shr => BinaryOp::Shr,
                Operator::Lt => BinaryOp::Lt,
                Operator::LtEq => BinaryOp::LtEq,
                Operator::Gt => BinaryOp::Gt,
                Operator::GtEq => BinaryOp::GtEq,
                Operator::EqEq => BinaryOp::Eq,
                Operator::NotEq => BinaryOp::NotEq,
                Operator::RegexMatch => BinaryOp::RegexMatch,
                Operator::RegexNotMatch => BinaryOp::RegexNotMatch,
                Operator::AndAnd => BinaryOp::And,
                Operator::OrOr => BinaryOp::Or,
                Operator::Question => BinaryOp::TernaryThen,
                Operator::Colon => BinaryOp::TernaryElse,
                Operator::QuestionQuestion => BinaryOp::Coalesce,
                Operator::PlusPlus
                | Operator::MinusMinus
                | Operator::Tilde
                | Operator::Bang
                | Operator::Assign => return None,
            },
            _ => return None,
        };
        Some(op)
    }

    /// Returns the prefix operator this token denotes, if any.
    pub fn prefix_op(self) -> Option<PrefixOp> {
        match self {
            TokenKind::Op(Operator::Minus) => Some(PrefixOp::Negate),
            TokenKind::Op(Operator::Tilde) => Some(PrefixOp::BitNot),
            TokenKind::Op(Operator::Bang) => Some(PrefixOp::Not),
            _ => None,
        }
    }

    /// Returns true for literal kinds.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Literal(_))
    }

    /// Returns a short name for the kind.
    ///
    /// Delimiters and operators are named by their spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Literal(kind) => kind.as_str(),
            TokenKind::Variable => "variable",
            TokenKind::Function => "function",
            TokenKind::Accessor => "accessor",
            TokenKind::Separator(_) => "separator",
            TokenKind::Delim(delim) => delim.as_str(),
            TokenKind::Op(op) => op.as_str(),
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Literal categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Decimal or `0x` hexadecimal number.
    Numeric,
    /// Quoted string or `[bracketed]` parameter name.
    String,
    /// `true` or `false`.
    Boolean,
}

impl LiteralKind {
    /// Returns the name of the literal category.
    pub const fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Numeric => "numeric",
            LiteralKind::String => "string",
            LiteralKind::Boolean => "boolean",
        }
    }
}

/// Separator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `,`
    Comma,
    /// `in` or `IN`
    In,
}

/// Delimiter tokens.
///
/// `[` and `.` are part of the vocabulary, but the lexer folds them into
/// bracketed parameters and numbers respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
}

impl Delimiter {
    /// Returns the spelling of the delimiter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
            Delimiter::LBracket => "[",
            Delimiter::RBracket => "]",
            Delimiter::LBrace => "{",
            Delimiter::RBrace => "}",
            Delimiter::Dot => ".",
            Delimiter::Semicolon => ";",
        }
    }
}

/// Operator tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `**`, also spelled `/*`
    Pow,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `=~`
    RegexMatch,
    /// `!~`
    RegexNotMatch,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `??`
    QuestionQuestion,
    /// `=`
    Assign,
}

impl Operator {
    /// Returns the canonical spelling of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Pow => "**",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
            Operator::Tilde => "~",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::RegexMatch => "=~",
            Operator::RegexNotMatch => "!~",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Bang => "!",
            Operator::Question => "?",
            Operator::Colon => ":",
            Operator::QuestionQuestion => "??",
            Operator::Assign => "=",
        }
    }

    /// Returns the operator family.
    pub const fn class(self) -> OperatorClass {
        match self {
            Operator::Plus
            | Operator::Minus
            | Operator::Star
            | Operator::Slash
            | Operator::Percent
            | Operator::Pow
            | Operator::PlusPlus
            | Operator::MinusMinus => OperatorClass::Arithmetic,
            Operator::Amp
            | Operator::Pipe
            | Operator::Caret
            | Operator::Tilde
            | Operator::Shl
            | Operator::Shr => OperatorClass::Bitwise,
            Operator::Lt
            | Operator::LtEq
            | Operator::Gt
            | Operator::GtEq
            | Operator::EqEq
            | Operator::NotEq
            | Operator::RegexMatch
            | Operator::RegexNotMatch => OperatorClass::Comparison,
            Operator::AndAnd | Operator::OrOr | Operator::Bang => OperatorClass::Logical,
            Operator::Question | Operator::Colon | Operator::QuestionQuestion => {
                OperatorClass::Ternary
            },
            Operator::Assign => OperatorClass::Assignment,
        }
    }
}

/// Operator families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `+ - * / % ** ++ --`
    Arithmetic,
    /// `& | ^ ~ << >>`
    Bitwise,
    /// `< <= > >= == != =~ !~`
    Comparison,
    /// `&& || !`
    Logical,
    /// `? : ??`
    Ternary,
    /// `=`
    Assignment,
}

/// Binary operators, as seen by an expression parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `**`
    Pow,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `=~`
    RegexMatch,
    /// `!~`
    RegexNotMatch,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `?` of `cond ? a : b`
    TernaryThen,
    /// `:` of `cond ? a : b`
    TernaryElse,
    /// `??`
    Coalesce,
    /// `in`
    In,
    /// `,`
    Comma,
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// `-`
    Negate,
    /// `~`
    BitNot,
    /// `!`
    Not,
}

impl TryFrom<TokenKind> for BinaryOp {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        kind.binary_op().ok_or(kind)
    }
}

impl TryFrom<TokenKind> for PrefixOp {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        kind.prefix_op().ok_or(kind)
    }
}

use std::fmt::Display;

use crate::{define_tokens, Position, Span};

use super::table::TOKEN_TABLE;

/// Lexical category a token kind belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Keyword,
    Primitive,
    Operator,
    Literal,
    Punctuation,
    Other,
}

define_tokens! {
    Keyword {
        If => "if",
        Else => "else",
        Unless => "unless",
        Macro => "macro",
        Define => "define",
        Fn => "fn",
        Op => "op",
        Inline => "inline",
        Return => "return",
        Enclosing => "enclosing",
        Async => "async",
        Spawn => "spawn",
        Await => "await",
        Thread => "thread",
        For => "for",
        While => "while",
        Break => "break",
        Continue => "continue",
        Case => "case",
        Match => "match",
        Switch => "switch",
        Default => "default",
        Enum => "enum",
        Type => "type",
        Class => "class",
        Union => "union",
        Struct => "struct",
        Abstract => "abstract",
        Interface => "interface",
        Is => "is",
        In => "in",
        Try => "try",
        Panic => "panic",
        Catch => "catch",
        Finally => "finally",
        Let => "let",
        Priv => "priv",
        Auto => "auto",
        Const => "const",
        Global => "global",
        From => "from",
        Using => "using",
        Import => "import",
        Extern => "extern",
        Yield => "yield",
    }
    Primitive {
        Void => "void",
        Bool => "bool",
        Byte => "byte",
        Char => "char",
        Ptr => "ptr",
        I8 => "i8",
        U8 => "u8",
        I16 => "i16",
        U16 => "u16",
        I32 => "i32",
        U32 => "u32",
        F32 => "f32",
        I64 => "i64",
        U64 => "u64",
        F64 => "f64",
        Float => "float",
        I128 => "i128",
        U128 => "u128",
        Int => "int",
        Decimal => "decimal",
        String => "string",
        List => "list",
        Tuple => "tuple",
        Set => "set",
        Map => "map",
        Any => "any",
    }
    Operator {
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        Mat => "@",
        Pow => "**",
        Abs => "+-",
        BitwiseAnd => "&",
        BitwiseNand => "~&",
        BitwiseOr => "|",
        BitwiseNor => "~|",
        BitwiseXor => "^",
        BitwiseNot => "~",
        ShiftLeft => "<<",
        ShiftRight => ">>",
        Equal => "==",
        NotEqual => "!=",
        GreaterThan => ">",
        LessThan => "<",
        GreaterThanEquals => ">=",
        LessThanEquals => "<=",
        RefEqual => "===",
        Assign => "=",
        AddAssign => "+=",
        SubAssign => "-=",
        MulAssign => "*=",
        DivAssign => "/=",
        ModAssign => "%=",
        MatAssign => "@=",
        NotAssign => "~=",
        PowerAssign => "**=",
        AndAssign => "&&=",
        NandAssign => "!&=",
        OrAssign => "||=",
        NorAssign => "!|=",
        XorAssign => "^^=",
        BitwiseAndAssign => "&=",
        BitwiseNandAssign => "~&=",
        BitwiseOrAssign => "|=",
        BitwiseNorAssign => "~|=",
        BitwiseXorAssign => "^=",
        ShiftLeftAssign => "<<=",
        ShiftRightAssign => ">>=",
        Inc => "++",
        Dec => "--",
        LogicalNot => "!",
        LogicalAnd => "&&",
        LogicalNand => "!&",
        LogicalOr => "||",
        LogicalNor => "!|",
        LogicalXor => "^^",
        Range => "..",
        RangeInclusive => "..=",
        Arrow => "->",
        Scope => "::",
    }
    Literal {
        LiteralTrue => "true",
        LiteralFalse => "false",
        LiteralNull => "null",
        LiteralInteger => "<integer>",
        LiteralFloat => "<float>",
        LiteralString => "<string>",
        LiteralChar => "<char>",
    }
    Punctuation {
        OpenParen => "(",
        CloseParen => ")",
        OpenBrace => "{",
        CloseBrace => "}",
        OpenBracket => "[",
        CloseBracket => "]",
        Comma => ",",
        Semicolon => ";",
        Colon => ":",
        QuestionMark => "?",
        Dot => ".",
        Hash => "#",
    }
    Other {
        Identifier => "<identifier>",
        Eof => "<eof>",
    }
}

impl TokenKind {
    /// Canonical spelling from the process-wide table.
    pub fn spelling(&self) -> &'static str {
        // Every generated kind has an entry, so the lookup cannot miss.
        TOKEN_TABLE.spelling_of(*self).unwrap_or("<unknown>")
    }

    /// Kinds whose spelling is a placeholder rather than literal source text.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            TokenKind::LiteralInteger
                | TokenKind::LiteralFloat
                | TokenKind::LiteralString
                | TokenKind::LiteralChar
                | TokenKind::Identifier
                | TokenKind::Eof
        )
    }

    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::AddAssign
                | TokenKind::SubAssign
                | TokenKind::MulAssign
                | TokenKind::DivAssign
                | TokenKind::ModAssign
                | TokenKind::MatAssign
                | TokenKind::NotAssign
                | TokenKind::PowerAssign
                | TokenKind::AndAssign
                | TokenKind::NandAssign
                | TokenKind::OrAssign
                | TokenKind::NorAssign
                | TokenKind::XorAssign
                | TokenKind::BitwiseAndAssign
                | TokenKind::BitwiseNandAssign
                | TokenKind::BitwiseOrAssign
                | TokenKind::BitwiseNorAssign
                | TokenKind::BitwiseXorAssign
                | TokenKind::ShiftLeftAssign
                | TokenKind::ShiftRightAssign
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn position(&self) -> &Position {
        &self.span.start
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.lexeme, self.span.start)
    }
}

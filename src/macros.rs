//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `define_tokens!` - Generates the token-kind enum and its spelling table
//!   from a single grouped list
//!
//! Keeping the kinds and their spellings in one list means the enum and the
//! table can never drift apart.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::LiteralInteger, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Generates `TokenKind`, `TokenKind::category` and `TOKEN_ENTRIES`.
///
/// Each group names a `TokenCategory` variant followed by `Kind => "spelling"`
/// pairs. `TokenCategory` must be in scope where the macro is invoked.
///
/// # Example
///
/// ```ignore
/// define_tokens! {
///     Keyword { If => "if", Else => "else" }
///     Punctuation { Comma => "," }
/// }
/// ```
#[macro_export]
macro_rules! define_tokens {
    ($( $category:ident { $( $kind:ident => $spelling:literal ),* $(,)? } )*) => {
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $( $( $kind, )* )*
        }

        /// Every token kind paired with its canonical spelling, in declaration order.
        pub const TOKEN_ENTRIES: &[(TokenKind, &str)] = &[
            $( $( (TokenKind::$kind, $spelling), )* )*
        ];

        impl TokenKind {
            pub fn category(&self) -> TokenCategory {
                match self {
                    $( $( TokenKind::$kind => TokenCategory::$category, )* )*
                }
            }
        }
    };
}

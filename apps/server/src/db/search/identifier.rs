//! Identifier clause tokenization.
//!
//! The identifier clause carries either one value (a payroll identifier or a
//! name fragment) or, in list variants, a comma-separated set of payroll
//! identifiers.

use super::policy::MatchMode;

/// How an identifier clause is matched after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierTokens {
    /// One token: payroll equality or a name fragment.
    Single(String),
    /// The clause split into several pieces: exact payroll membership only.
    /// Empty pieces are dropped, so this may hold fewer than two tokens.
    List(Vec<String>),
}

/// Tokenize an identifier clause. `None` when it carries no token at all.
///
/// In `Single` mode the whole clause is one token, commas included. In
/// `Multi` mode any comma makes the clause a list, even when only one piece
/// is non-empty (`"jane,"` never falls back to name matching).
pub fn identifier_tokens(clause: &str, mode: MatchMode) -> Option<IdentifierTokens> {
    if mode == MatchMode::Multi && clause.contains(',') {
        let tokens = clause
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        return Some(IdentifierTokens::List(tokens));
    }

    let token = clause.trim();
    if token.is_empty() {
        None
    } else {
        Some(IdentifierTokens::Single(token.to_string()))
    }
}

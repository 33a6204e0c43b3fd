//! `LIKE` patterns for free-text search filters.

use sea_orm::sea_query::LikeExpr;

const ESCAPE: char = '\\';

/// Matches values containing `search` literally.
///
/// `%` and `_` in the search term match themselves instead of acting as wildcards.
pub fn contains_pattern(search: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(search))).escape(ESCAPE)
}

fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '%' | '_') || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_wildcards_and_escape_char() {
        assert_eq!(escape_like("100%_off\\"), "100\\%\\_off\\\\");
        assert_eq!(escape_like("Travel"), "Travel");
    }
}

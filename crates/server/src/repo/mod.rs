//! Postgres access, one module per table. Every function takes the pool
//! explicitly and maps driver errors through `SqlxErrorExt`.

pub mod application;
pub mod company;
pub mod contact;
pub mod job;
pub mod profile;
pub mod refresh_token;
pub mod saved_job;
pub mod stats;
pub mod user;

/// `%term%` for ILIKE, with LIKE metacharacters escaped. `None` for blank input.
pub fn like_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Some(format!("%{escaped}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern(Some(" rust ")).as_deref(), Some("%rust%"));
        assert_eq!(like_pattern(Some("100%")).as_deref(), Some("%100\\%%"));
        assert_eq!(like_pattern(Some("   ")), None);
        assert_eq!(like_pattern(None), None);
    }
}

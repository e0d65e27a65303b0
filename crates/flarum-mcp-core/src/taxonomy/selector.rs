//! Tag selection: parsing, default substitution and cardinality

use super::error::TagError;

/// Split a comma-separated slug list, trimming entries and dropping empties
///
/// Order is kept and duplicates pass through.
pub fn parse_slugs(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick the final slug list for a discussion
///
/// A non-blank `default_tags` always wins and `raw_tags` is ignored. Lists
/// shorter than `min_count` are refused; lists longer than `max_count` are
/// cut down to their first `max_count` entries.
pub fn select(
    raw_tags: &str,
    default_tags: &str,
    min_count: usize,
    max_count: usize,
) -> Result<Vec<String>, TagError> {
    let mut slugs = if !default_tags.trim().is_empty() {
        parse_slugs(default_tags)
    } else if !raw_tags.trim().is_empty() {
        parse_slugs(raw_tags)
    } else {
        return Err(TagError::NoTagsProvided);
    };

    if slugs.is_empty() {
        return Err(TagError::NoTagsProvided);
    }

    if slugs.len() < min_count {
        return Err(TagError::InsufficientTags {
            have: slugs.len(),
            need: min_count,
        });
    }

    slugs.truncate(max_count);
    Ok(slugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empties() {
        assert_eq!(parse_slugs(" a , b,,c , "), vec!["a", "b", "c"]);
        assert!(parse_slugs("  ,  ").is_empty());
    }

    #[test]
    fn test_select_raw() {
        assert_eq!(select("shenghuo,jiankang", "", 1, 3).unwrap(), vec!["shenghuo", "jiankang"]);
    }

    #[test]
    fn test_defaults_always_win() {
        assert_eq!(select("a,b", "x, y", 1, 3).unwrap(), vec!["x", "y"]);
        assert_eq!(select("", "x", 1, 3).unwrap(), vec!["x"]);
    }

    #[test]
    fn test_blank_defaults_fall_back_to_raw() {
        assert_eq!(select("a", "   ", 1, 3).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_no_tags() {
        assert_eq!(select("", "", 1, 3), Err(TagError::NoTagsProvided));
        assert_eq!(select("   \t ", "", 1, 3), Err(TagError::NoTagsProvided));
        assert_eq!(select(" , ,", "", 1, 3), Err(TagError::NoTagsProvided));
    }

    #[test]
    fn test_insufficient() {
        assert_eq!(
            select("a", "", 2, 3),
            Err(TagError::InsufficientTags { have: 1, need: 2 })
        );
    }

    #[test]
    fn test_truncation_keeps_leading_entries() {
        assert_eq!(select("a,b,c", "", 1, 2).unwrap(), vec!["a", "b"]);
        assert_eq!(select("a,b,c,d,e", "", 1, 3).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_pass_through() {
        assert_eq!(select("a,a", "", 1, 3).unwrap(), vec!["a", "a"]);
    }

    #[test]
    fn test_min_checked_before_truncation() {
        // 3 given, min 3, max 2: the count check sees all 3
        assert_eq!(select("a,b,c", "", 3, 2).unwrap(), vec!["a", "b"]);
    }
}

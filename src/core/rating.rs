use crate::domain::model::RatingSet;

/// Parses a rating spec (`"3"` or `"2-4"`) into the ratings it allows.
///
/// Malformed input never errors: non-numeric parts become a value that matches
/// nothing, and a reversed range such as `"4-2"` is empty.
pub fn parse_ratings(spec: &str) -> RatingSet {
    match spec.split_once('-') {
        Some((start, end)) => match (to_rating(start), to_rating(end)) {
            (Some(start), Some(end)) => RatingSet::Range(start..=end),
            // 任一端無法解析時，範圍為空
            _ => RatingSet::Range(1..=0),
        },
        None => RatingSet::Single(to_rating(spec)),
    }
}

/// 整數或 `3.0` 這類無小數部分的數字才算有效；空字串視為 0
fn to_rating(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    let n = value.parse::<f64>().ok()?;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rating() {
        assert_eq!(parse_ratings("3").to_vec(), vec![Some(3)]);
        assert_eq!(parse_ratings("1").to_vec(), vec![Some(1)]);
    }

    #[test]
    fn test_range_expands_inclusive() {
        assert_eq!(parse_ratings("2-4").to_vec(), vec![Some(2), Some(3), Some(4)]);
        assert_eq!(
            parse_ratings("1-5").to_vec(),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(parse_ratings("4-2").to_vec().is_empty());
        assert!(parse_ratings("4-2").is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(parse_ratings("1-1").to_vec(), vec![Some(1)]);
    }

    #[test]
    fn test_non_numeric_single_matches_nothing() {
        let set = parse_ratings("abc");
        assert_eq!(set.to_vec(), vec![None]);
        for score in 0..=5 {
            assert!(!set.contains(score));
        }
    }

    #[test]
    fn test_malformed_range_is_empty() {
        assert!(parse_ratings("a-5").to_vec().is_empty());
        assert!(parse_ratings("1-").to_vec().is_empty());
        // 只在第一個連字號切分，"4-5" 不是數字
        assert!(parse_ratings("2-4-5").to_vec().is_empty());
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        assert_eq!(parse_ratings("7").to_vec(), vec![Some(7)]);
        assert_eq!(parse_ratings("0-2").to_vec(), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(parse_ratings(" 4 ").to_vec(), vec![Some(4)]);
        assert_eq!(parse_ratings("3.0").to_vec(), vec![Some(3)]);
        assert_eq!(parse_ratings("3.5").to_vec(), vec![None]);
        assert_eq!(parse_ratings("").to_vec(), vec![Some(0)]);
    }

    #[test]
    fn test_empty_range_start_counts_as_zero() {
        assert_eq!(
            parse_ratings("-3").to_vec(),
            vec![Some(0), Some(1), Some(2), Some(3)]
        );
        let set = parse_ratings("-3");
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_huge_range_is_not_materialized() {
        let set = parse_ratings("1-9000000000000");
        assert!(set.contains(5));
        assert!(!set.contains(0));
    }
}

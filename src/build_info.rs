//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD or "unknown" when git metadata is unavailable
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }
}

/// Row limit for "most recent" listings.
///
/// Rules:
/// - Absent or unparseable requests use the default of 10
/// - Supplied values are clamped to [1, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentLimit(u32);

impl RecentLimit {
    pub const DEFAULT: u32 = 10;
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(requested: i64) -> Self {
        Self(requested.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn from_request(requested: Option<i64>) -> Self {
        requested.map(Self::new).unwrap_or_default()
    }

    /// Parse a raw query-string value, falling back to the default.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::from_request(raw.and_then(|s| s.trim().parse::<i64>().ok()))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl Default for RecentLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(RecentLimit::from_request(None).get(), 10);
        assert_eq!(RecentLimit::default().get(), 10);
    }

    #[test]
    fn test_in_range_is_kept() {
        assert_eq!(RecentLimit::new(1).get(), 1);
        assert_eq!(RecentLimit::new(55).get(), 55);
        assert_eq!(RecentLimit::new(100).get(), 100);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(RecentLimit::new(0).get(), 1);
        assert_eq!(RecentLimit::new(-20).get(), 1);
        assert_eq!(RecentLimit::new(101).get(), 100);
        assert_eq!(RecentLimit::new(i64::MAX).get(), 100);
    }

    #[test]
    fn test_parse() {
        assert_eq!(RecentLimit::parse(Some("25")).get(), 25);
        assert_eq!(RecentLimit::parse(Some("500")).get(), 100);
        assert_eq!(RecentLimit::parse(Some("diez")).get(), 10);
        assert_eq!(RecentLimit::parse(Some("")).get(), 10);
        assert_eq!(RecentLimit::parse(None).get(), 10);
    }
}

/// inclusive
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct GoodRun {
    start: i32,
    last: i32,
}

impl GoodRun {
    #[inline]
    pub(crate) fn new(start: i32, last: i32) -> Self {
        debug_assert!(start <= last);
        GoodRun { start, last }
    }

    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[inline]
    pub fn last(&self) -> i32 {
        self.last
    }

    /// Number of integers in the run. Never zero.
    #[inline]
    pub fn len(&self) -> u64 {
        (i64::from(self.last) - i64::from(self.start) + 1) as u64
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, n: i32) -> bool {
        self.start <= n && n <= self.last
    }
}

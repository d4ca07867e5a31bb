use tracing::{debug, trace};

use crate::{BoundsError, GoodRun};

/// Longest run of consecutive integers in `[l, r]` that contains none of `bad_numbers`.
///
/// `bad_numbers` may hold duplicates and values outside `[l, r]`, those are ignored.
/// An inverted interval (`l > r`) holds no integers, so the result is 0.
///
/// ```
/// use good_segment::good_segment;
///
/// assert_eq!(good_segment(&[3, 5], 1, 10), 5);
/// assert_eq!(good_segment(&[1], 1, 5), 4);
/// assert_eq!(good_segment(&[], 5, 5), 1);
/// ```
pub fn good_segment(bad_numbers: &[i32], l: i32, r: i32) -> u64 {
    match Bounds::new(l, r) {
        Ok(bounds) => bounds.longest_good_run_len(bad_numbers),
        Err(err) => {
            debug!(%err, "no good run in inverted bounds");
            0
        }
    }
}

/// inclusive
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Bounds {
    lower: i32,
    upper: i32,
}

impl Bounds {
    pub fn new(lower: i32, upper: i32) -> Result<Self, BoundsError> {
        if lower > upper {
            return Err(BoundsError::Inverted { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    #[inline]
    pub fn lower(&self) -> i32 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> i32 {
        self.upper
    }

    #[inline]
    pub fn len(&self) -> u64 {
        (i64::from(self.upper) - i64::from(self.lower) + 1) as u64
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, n: i32) -> bool {
        self.lower <= n && n <= self.upper
    }

    pub fn longest_good_run_len(&self, bad_numbers: &[i32]) -> u64 {
        let points = self.points(bad_numbers);

        let mut longest = 0i64;
        for pair in points.windows(2) {
            let gap = pair[1] - pair[0] - 1;
            longest = longest.max(gap);
        }

        trace!(
            lower = self.lower,
            upper = self.upper,
            bad = points.len() - 2,
            longest,
            "computed longest good run"
        );
        longest as u64
    }

    /// Ties go to the leftmost run. `None` if every integer in the bounds is bad.
    pub fn longest_good_run(&self, bad_numbers: &[i32]) -> Option<GoodRun> {
        self.good_runs(bad_numbers)
            .into_iter()
            .reduce(|longest, run| if run.len() > longest.len() { run } else { longest })
    }

    /// Every maximal good run, in ascending order.
    pub fn good_runs(&self, bad_numbers: &[i32]) -> Vec<GoodRun> {
        self.points(bad_numbers)
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > 1)
            // Both ends land inside the bounds, so they fit back into i32.
            .map(|pair| GoodRun::new((pair[0] + 1) as i32, (pair[1] - 1) as i32))
            .collect()
    }

    /// In-bounds bad numbers, sorted and deduplicated, framed by `lower - 1` and `upper + 1`.
    /// Widened to i64 so the frame can sit past i32::MIN and i32::MAX.
    fn points(&self, bad_numbers: &[i32]) -> Vec<i64> {
        let mut points = Vec::with_capacity(bad_numbers.len() + 2);
        points.push(i64::from(self.lower) - 1);
        points.push(i64::from(self.upper) + 1);
        points.extend(
            bad_numbers
                .iter()
                .filter(|&&n| self.contains(n))
                .map(|&n| i64::from(n)),
        );

        points.sort_unstable();
        points.dedup();
        points
    }
}

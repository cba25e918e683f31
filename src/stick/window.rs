/// Contiguous id range of ants still on the stick
///
/// Stored half-open as `low..end` so the window can empty from either side
/// without underflowing. Exits only ever happen at the extremes, so the
/// active range stays contiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveWindow {
    low: usize,
    end: usize,
}

impl ActiveWindow {
    /// Window covering all of `count` ants
    pub fn new(count: usize) -> Self {
        Self { low: 0, end: count }
    }

    /// True once every ant has left the stick
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low >= self.end
    }

    /// Lowest active id
    #[inline]
    pub fn low(&self) -> usize {
        self.low
    }

    /// One past the highest active id
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of ants still active
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.low)
    }

    /// Check whether an id is inside the window
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        id >= self.low && id < self.end
    }

    /// Drop the leftmost id after a left exit
    #[inline]
    pub fn shrink_left(&mut self) {
        self.low += 1;
    }

    /// Drop the rightmost id after a right exit
    #[inline]
    pub fn shrink_right(&mut self) {
        self.end -= 1;
    }
}

use stepgrid_core::Point;

/// The coordinate a query is looking for.
///
/// Built once per query and handed by reference to every driver, so
/// concurrent or back-to-back queries never observe each other's goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target(Point);

impl Target {
    #[inline]
    pub const fn new(p: Point) -> Self {
        Self(p)
    }

    #[inline]
    pub const fn point(self) -> Point {
        self.0
    }

    /// Whether `p` is the goal.
    #[inline]
    pub fn is_reached(self, p: Point) -> bool {
        self.0 == p
    }
}

impl From<Point> for Target {
    fn from(p: Point) -> Self {
        Self(p)
    }
}

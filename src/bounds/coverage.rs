/// Coverage — 3-way classification of one bounding volume against another.
///
/// Result of classifying a "contained" volume against a "container":
/// - `NoCoverage` → the volumes are disjoint, skip the object
/// - `PartialCoverage` → the volumes overlap, draw (clipping handled by the GPU)
/// - `FullCoverage` → the container encloses the contained volume, draw

/// Result of classifying a contained volume against a container volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// The volumes are provably disjoint along some separating axis/plane
    NoCoverage,
    /// The volumes overlap without full enclosure
    PartialCoverage,
    /// Every point of the contained volume lies at or inside the container boundary
    FullCoverage,
}

impl Coverage {
    /// True unless the classification is `NoCoverage`.
    ///
    /// Partial and full coverage are treated the same by the draw
    /// decision: the object is visible.
    pub fn is_visible(self) -> bool {
        self != Coverage::NoCoverage
    }
}

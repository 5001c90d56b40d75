//! Staleness flags for widget nodes.

use bitflags::bitflags;

bitflags! {
    /// Per-node staleness flags.
    ///
    /// Measurement (`REQUISITION`) and assignment (`ALLOCATION`) are tracked
    /// separately so a layout pass only recomputes what a resize request
    /// actually touched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE          = 0;

        /// Cached requisition is stale and must be recalculated on next query.
        const REQUISITION   = 1 << 0;

        /// Node lies on the path of a resize request. Its next allocation is
        /// applied (and propagated to its children) even when the rectangle
        /// did not change.
        const ALLOCATION    = 1 << 1;

        /// Cached drawable was dropped and must be rebuilt before exposure.
        const DRAWABLE      = 1 << 2;

        /// Root only: something in the tree changed appearance since the last
        /// exposure.
        const REDRAW        = 1 << 3;
    }
}

impl DirtyFlags {
    /// Flags set on every node along a resize request.
    pub const RESIZE_CHAIN: Self = Self::REQUISITION.union(Self::ALLOCATION);

    /// Returns true if the requisition must be recomputed.
    #[inline]
    pub fn needs_requisition(&self) -> bool {
        self.contains(Self::REQUISITION)
    }

    /// Returns true if the next allocation must be applied unconditionally.
    #[inline]
    pub fn needs_allocation(&self) -> bool {
        self.contains(Self::ALLOCATION)
    }

    /// Returns true if the render cache has to be rebuilt.
    #[inline]
    pub fn needs_drawable(&self) -> bool {
        self.contains(Self::DRAWABLE)
    }
}

impl Default for DirtyFlags {
    fn default() -> Self {
        Self::NONE
    }
}

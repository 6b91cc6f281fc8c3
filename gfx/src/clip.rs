//! Clip regions: the still-visible part of a damage rectangle.

use alloc::vec::Vec;

use vitrine_abi::rect::Rect;

/// A set of rectangles whose interiors never overlap.
///
/// Built per compositing pass: seeded with the damage rectangle, then every
/// occluder is subtracted. What remains is exactly the area to paint.
#[derive(Clone, Debug, Default)]
pub struct ClipRegion {
    rects: Vec<Rect>,
}

impl ClipRegion {
    pub const fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add(rect);
        region
    }

    /// Make `rect` part of the region. Members it overlapped shrink to
    /// their complement first, so disjointness holds afterwards.
    pub fn add(&mut self, rect: Rect) {
        self.subtract(&rect);
        self.rects.push(rect);
    }

    /// Remove `cut` from the region.
    ///
    /// Each member intersecting `cut` is replaced, in place, by the strips
    /// of `member \ cut`; other members are untouched.
    pub fn subtract(&mut self, cut: &Rect) {
        if !self.rects.iter().any(|member| member.intersects(cut)) {
            return;
        }

        let mut next = Vec::with_capacity(self.rects.len() + 3);
        for member in self.rects.drain(..) {
            if member.intersects(cut) {
                next.extend_from_slice(member.split(cut).as_slice());
            } else {
                next.push(member);
            }
        }
        self.rects = next;
    }

    /// Restrict every member to `bounds`, dropping those left empty.
    pub fn intersect(&mut self, bounds: &Rect) {
        self.rects = self
            .rects
            .iter()
            .filter_map(|member| member.intersection(bounds))
            .collect();
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Covered pixel count, saturating. Exact because members are disjoint.
    pub fn area(&self) -> u64 {
        self.rects
            .iter()
            .fold(0u64, |acc, member| acc.saturating_add(member.area()))
    }

    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        self.rects.iter().any(|member| member.contains_point(x, y))
    }
}

impl<'a> IntoIterator for &'a ClipRegion {
    type Item = &'a Rect;
    type IntoIter = core::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

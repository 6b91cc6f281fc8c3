//! Axis-aligned integer rectangles in screen coordinates.
//!
//! All four bounds are inclusive: a 1x1 rectangle has `top == bottom` and
//! `left == right`. Rectangles are plain values; every operation here
//! returns a new rectangle and never mutates its inputs.

use core::fmt;

use crate::error::CompositorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    top: u32,
    left: u32,
    bottom: u32,
    right: u32,
}

impl Rect {
    /// Build a rectangle from inclusive bounds.
    ///
    /// Inverted bounds are an internal invariant violation and are rejected
    /// rather than producing a negative-area slice.
    #[inline]
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Result<Self, CompositorError> {
        if top > bottom || left > right {
            return Err(CompositorError::InvalidGeometry);
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Rectangle spanning `width` x `height` pixels from `(x, y)`.
    ///
    /// Returns `None` for an empty extent or when the far edge does not fit
    /// in the coordinate space.
    pub fn from_origin_size(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            top: y,
            left: x,
            bottom: y.checked_add(height - 1)?,
            right: x.checked_add(width - 1)?,
        })
    }

    #[inline]
    pub const fn top(&self) -> u32 {
        self.top
    }

    #[inline]
    pub const fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.bottom
    }

    #[inline]
    pub const fn right(&self) -> u32 {
        self.right
    }

    /// Column count. Widened so the full `0..=u32::MAX` span fits.
    #[inline]
    pub const fn width(&self) -> u64 {
        (self.right - self.left) as u64 + 1
    }

    #[inline]
    pub const fn height(&self) -> u64 {
        (self.bottom - self.top) as u64 + 1
    }

    /// Pixel count, saturating at `u64::MAX` for the full-range rectangle.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Inclusive overlap test. Rectangles sharing only an edge row or
    /// column intersect.
    #[inline]
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    #[inline]
    pub const fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    #[inline]
    pub const fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// The shared area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect {
            top: self.top.max(other.top),
            left: self.left.max(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.min(other.right),
        })
    }

    /// Cover `self \ cut` with at most four disjoint strips.
    ///
    /// The edges of `cut` are visited left, top, right, bottom. Each edge
    /// lying strictly inside the working rectangle peels off the strip on
    /// its far side and shrinks the working rectangle, which ends up equal
    /// to `self ∩ cut` and is not emitted.
    ///
    /// A `cut` that misses `self` leaves it whole: the result is `[self]`.
    /// A `cut` containing `self` yields no strips.
    pub fn split(&self, cut: &Rect) -> RectSplit {
        let mut out = RectSplit::new();
        if !self.intersects(cut) {
            out.push(*self);
            return out;
        }

        let mut rest = *self;

        if cut.left > rest.left {
            out.push(Rect {
                top: rest.top,
                left: rest.left,
                bottom: rest.bottom,
                right: cut.left - 1,
            });
            rest.left = cut.left;
        }

        if cut.top > rest.top {
            out.push(Rect {
                top: rest.top,
                left: rest.left,
                bottom: cut.top - 1,
                right: rest.right,
            });
            rest.top = cut.top;
        }

        if cut.right < rest.right {
            out.push(Rect {
                top: rest.top,
                left: cut.right + 1,
                bottom: rest.bottom,
                right: rest.right,
            });
            rest.right = cut.right;
        }

        if cut.bottom < rest.bottom {
            out.push(Rect {
                top: cut.bottom + 1,
                left: rest.left,
                bottom: rest.bottom,
                right: rest.right,
            });
        }

        out
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top:{}, left:{}, bottom:{}, right:{}",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// Pieces produced by [`Rect::split`], in emission order.
#[derive(Clone, Copy, Debug)]
pub struct RectSplit {
    pieces: [Rect; 4],
    count: u8,
}

impl RectSplit {
    const SLOT: Rect = Rect {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    const fn new() -> Self {
        Self {
            pieces: [Self::SLOT; 4],
            count: 0,
        }
    }

    #[inline]
    fn push(&mut self, rect: Rect) {
        self.pieces[self.count as usize] = rect;
        self.count += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rect] {
        &self.pieces[..self.count as usize]
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Rect> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a RectSplit {
    type Item = &'a Rect;
    type IntoIter = core::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Initial window placement.

use vitrine_abi::{BufferDescriptor, DisplayInfo};
use vitrine_lib::RandomSource;

/// Pick the top-left corner for a freshly opened window.
///
/// A window exactly the size of the screen snaps to the origin. Anything
/// else lands at a pseudo-random spot that keeps it fully on screen, with
/// `x` in `[0, screen_width - width)` and `y` likewise. An axis on which the
/// window does not fit with room to spare pins to 0.
pub fn assign_position(
    desc: &BufferDescriptor,
    screen: &DisplayInfo,
    rng: &mut dyn RandomSource,
) -> (u32, u32) {
    if desc.width == screen.width && desc.height == screen.height {
        return (0, 0);
    }

    let x = rng.next_below(screen.width.saturating_sub(desc.width));
    let y = rng.next_below(screen.height.saturating_sub(desc.height));
    (x, y)
}

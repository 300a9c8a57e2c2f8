// THEORY:
// The `connectivity` module sizes a contiguous dark region from a seed
// coordinate with a bounded, stack-based flood fill. It complements the
// density-based spot count in `defects`: the density ratio says how much of
// the skin is dark, this says whether the darkness clumps into one large
// contiguous area (a rot patch) rather than scattered speckles.
//
// Key architectural principles:
// 1.  **Bounded Traversal**: Every fill stops after a fixed visit budget.
//     The engine runs at frame cadence, so a pathological all-dark frame
//     must not turn one fill into a full-raster walk.
// 2.  **Coordinate-Keyed Visited Set**: Revisits are suppressed through a
//     shared `HashSet` of coordinates. Callers seeding several fills pass
//     the same set so each coordinate is expanded at most once across the
//     whole pass.
// 3.  **Secondary Signal Only**: The region size never rewrites the primary
//     spot count; it is reported as its own field.

use crate::core_modules::raster::PixelBuffer;
use std::collections::HashSet;

/// Hard cap on pixels visited per fill.
pub const REGION_VISIT_BUDGET: usize = 100;

/// A pixel joins a dark region when its brightness is below this.
pub const DARK_REGION_BRIGHTNESS: f64 = 60.0;

/// Sizes the 4-connected dark region containing `seed`, visiting at most
/// `REGION_VISIT_BUDGET` pixels. Returns 0 when the seed itself is not dark
/// or was already claimed by an earlier fill through `visited`.
pub fn dark_region_size(
    buffer: &PixelBuffer,
    seed: (u32, u32),
    visited: &mut HashSet<(u32, u32)>,
) -> usize {
    if visited.contains(&seed) || buffer.pixel(seed.0, seed.1).brightness() >= DARK_REGION_BRIGHTNESS
    {
        return 0;
    }

    let mut stack = vec![seed];
    visited.insert(seed);
    let mut region_size = 0usize;

    while let Some((x, y)) = stack.pop() {
        region_size += 1;
        if region_size >= REGION_VISIT_BUDGET {
            break;
        }

        for (dx, dy) in &[(0i64, 1i64), (0, -1), (1, 0), (-1, 0)] {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= buffer.width() as i64 || ny >= buffer.height() as i64 {
                continue;
            }
            let neighbor = (nx as u32, ny as u32);
            if !visited.contains(&neighbor)
                && buffer.pixel(neighbor.0, neighbor.1).brightness() < DARK_REGION_BRIGHTNESS
            {
                visited.insert(neighbor);
                stack.push(neighbor);
            }
        }
    }

    region_size
}

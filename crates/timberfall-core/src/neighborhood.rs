//! Cubic neighborhoods in a 3D grid.
//!
//! All scans enumerate offsets with x outermost and z innermost, each axis
//! ascending from -radius to +radius. Search results that depend on scan
//! order (the nearest-trunk locator returns the first trunk it sees) are
//! reproducible because of this fixed order.

use glam::IVec3;

/// Every offset in the cube of side `2 * radius + 1`, zero offset included.
/// A negative radius yields nothing.
pub fn cube_offsets(radius: i32) -> impl Iterator<Item = IVec3> {
    let r = radius.max(-1);
    (-r..=r).flat_map(move |x| {
        (-r..=r).flat_map(move |y| (-r..=r).map(move |z| IVec3::new(x, y, z)))
    })
}

/// The 26 neighbors at Chebyshev distance 1 (6 faces + 12 edges + 8 corners).
pub fn neighbors_26() -> impl Iterator<Item = IVec3> {
    cube_offsets(1).filter(|offset| *offset != IVec3::ZERO)
}

/// Number of positions in a cube of the given radius.
pub fn cube_volume(radius: i32) -> usize {
    if radius < 0 {
        return 0;
    }
    let side = (2 * radius + 1) as usize;
    side * side * side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_count() {
        assert_eq!(neighbors_26().count(), 26);
    }

    #[test]
    fn test_neighbors_unique() {
        let all: Vec<IVec3> = neighbors_26().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "offsets {i} and {j} coincide");
                }
            }
        }
    }

    #[test]
    fn test_no_zero_neighbor() {
        for offset in neighbors_26() {
            assert_ne!(offset, IVec3::ZERO);
            assert_eq!(offset.abs().max_element(), 1, "{offset:?}");
        }
    }

    #[test]
    fn test_cube_offsets_include_zero() {
        assert_eq!(cube_offsets(0).collect::<Vec<_>>(), vec![IVec3::ZERO]);
        assert!(cube_offsets(1).any(|o| o == IVec3::ZERO));
        assert_eq!(cube_offsets(1).count(), 27);
    }

    #[test]
    fn test_cube_volume_matches_enumeration() {
        for r in 0..=3 {
            assert_eq!(cube_offsets(r).count(), cube_volume(r), "radius {r}");
        }
        assert_eq!(cube_volume(3), 343);
        assert_eq!(cube_volume(2), 125);
        assert_eq!(cube_offsets(-1).count(), 0);
        assert_eq!(cube_volume(-1), 0);
    }

    #[test]
    fn test_scan_order_x_outermost() {
        let first: Vec<IVec3> = cube_offsets(1).take(3).collect();
        assert_eq!(
            first,
            vec![
                IVec3::new(-1, -1, -1),
                IVec3::new(-1, -1, 0),
                IVec3::new(-1, -1, 1),
            ]
        );
        assert_eq!(cube_offsets(1).last(), Some(IVec3::new(1, 1, 1)));
    }
}

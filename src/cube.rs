// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Cube map addressing.

Two directions of the same mapping live here:

- [`cube_coord`] turns a face plus a normalized UV on that face into a direction vector.  This is
  what the dispatcher uses to address cube resources from a 2D pixel position.
- [`select_face`] turns a direction back into a face and UV, using the major-axis rule.  This is
  what the software cube sampler uses to find a texel.

The two conventions agree on every face except [`CubeFace::PositiveX`], whose rows come back
mirrored: `cube_coord` follows the face orientation the front end displays, `select_face` follows
the hardware rule.

```
use texsample::cube::{cube_coord, CubeFace};

assert_eq!(cube_coord([0.5, 0.5], CubeFace::PositiveY), [0.0, 0.5, 0.0]);
assert_eq!(cube_coord([0.0, 0.0], CubeFace::PositiveZ), [-0.5, 0.5, 0.5]);
```
*/

use crate::Error;

/// Number of faces in a cube; also the stride between cubes in a cube array.
pub const CUBE_FACE_COUNT: i32 = 6;

/// A face of a cube map, ordered as faces are stored in layers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFace {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// The layer index of this face within its cube.
    pub const fn index(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CubeFace {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(CubeFace::PositiveX),
            1 => Ok(CubeFace::NegativeX),
            2 => Ok(CubeFace::PositiveY),
            3 => Ok(CubeFace::NegativeY),
            4 => Ok(CubeFace::PositiveZ),
            5 => Ok(CubeFace::NegativeZ),
            other => Err(Error::InvalidCubeFace(other)),
        }
    }
}

/// Maps a normalized UV on `face` to a direction vector.
///
/// The UV is centered to `[-0.5, 0.5]`, then rotated onto the face; the face's own axis is fixed
/// at `±0.5`.  The result is not normalized.
#[inline]
pub fn cube_coord(uv: [f32; 2], face: CubeFace) -> [f32; 3] {
    let u = uv[0] - 0.5;
    let v = uv[1] - 0.5;
    match face {
        CubeFace::PositiveX => [0.5, v, -u],
        CubeFace::NegativeX => [-0.5, -v, u],
        CubeFace::PositiveY => [u, 0.5, v],
        CubeFace::NegativeY => [u, -0.5, -v],
        CubeFace::PositiveZ => [u, -v, 0.5],
        CubeFace::NegativeZ => [-u, -v, -0.5],
    }
}

/// Splits a cube-array layer index into its face and the index of its cube.
///
/// `layer = face + 6 * cube`.  Negative layers wrap onto a valid face and a negative cube index;
/// the cube-array sampler clamps that to the first cube.
#[inline]
pub fn cube_array_address(layer: i32) -> (CubeFace, i32) {
    let face = match layer.rem_euclid(CUBE_FACE_COUNT) {
        0 => CubeFace::PositiveX,
        1 => CubeFace::NegativeX,
        2 => CubeFace::PositiveY,
        3 => CubeFace::NegativeY,
        4 => CubeFace::PositiveZ,
        _ => CubeFace::NegativeZ,
    };
    (face, layer.div_euclid(CUBE_FACE_COUNT))
}

/// Picks the face a direction points at, and the normalized UV where it hits that face.
///
/// Uses the major-axis rule: the component with the largest magnitude picks the face, ties going
/// to X before Y before Z.  A zero direction picks [`CubeFace::PositiveX`] at its center.
pub fn select_face(direction: [f32; 3]) -> (CubeFace, [f32; 2]) {
    let [x, y, z] = direction;
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
    //(face, sc, tc, major axis magnitude)
    let (face, sc, tc, ma) = if ax >= ay && ax >= az {
        if x >= 0.0 {
            (CubeFace::PositiveX, -z, -y, ax)
        } else {
            (CubeFace::NegativeX, z, -y, ax)
        }
    } else if ay >= az {
        if y >= 0.0 {
            (CubeFace::PositiveY, x, z, ay)
        } else {
            (CubeFace::NegativeY, x, -z, ay)
        }
    } else if z >= 0.0 {
        (CubeFace::PositiveZ, x, -y, az)
    } else {
        (CubeFace::NegativeZ, -x, -y, az)
    };
    if ma == 0.0 {
        return (face, [0.5, 0.5]);
    }
    let s = (sc / ma + 1.0) * 0.5;
    let t = (tc / ma + 1.0) * 0.5;
    (face, [s, t])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_axis(face: CubeFace) -> [f32; 3] {
        match face {
            CubeFace::PositiveX => [0.5, 0.0, 0.0],
            CubeFace::NegativeX => [-0.5, 0.0, 0.0],
            CubeFace::PositiveY => [0.0, 0.5, 0.0],
            CubeFace::NegativeY => [0.0, -0.5, 0.0],
            CubeFace::PositiveZ => [0.0, 0.0, 0.5],
            CubeFace::NegativeZ => [0.0, 0.0, -0.5],
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn center_is_the_fixed_axis() {
        for face in CubeFace::ALL {
            assert_eq!(cube_coord([0.5, 0.5], face), fixed_axis(face), "{face:?}");
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn corners() {
        //(uv, face, expected)
        let cases: [([f32; 2], CubeFace, [f32; 3]); 24] = [
            ([0.0, 0.0], CubeFace::PositiveX, [0.5, -0.5, 0.5]),
            ([1.0, 0.0], CubeFace::PositiveX, [0.5, -0.5, -0.5]),
            ([0.0, 1.0], CubeFace::PositiveX, [0.5, 0.5, 0.5]),
            ([1.0, 1.0], CubeFace::PositiveX, [0.5, 0.5, -0.5]),
            ([0.0, 0.0], CubeFace::NegativeX, [-0.5, 0.5, -0.5]),
            ([1.0, 0.0], CubeFace::NegativeX, [-0.5, 0.5, 0.5]),
            ([0.0, 1.0], CubeFace::NegativeX, [-0.5, -0.5, -0.5]),
            ([1.0, 1.0], CubeFace::NegativeX, [-0.5, -0.5, 0.5]),
            ([0.0, 0.0], CubeFace::PositiveY, [-0.5, 0.5, -0.5]),
            ([1.0, 0.0], CubeFace::PositiveY, [0.5, 0.5, -0.5]),
            ([0.0, 1.0], CubeFace::PositiveY, [-0.5, 0.5, 0.5]),
            ([1.0, 1.0], CubeFace::PositiveY, [0.5, 0.5, 0.5]),
            ([0.0, 0.0], CubeFace::NegativeY, [-0.5, -0.5, 0.5]),
            ([1.0, 0.0], CubeFace::NegativeY, [0.5, -0.5, 0.5]),
            ([0.0, 1.0], CubeFace::NegativeY, [-0.5, -0.5, -0.5]),
            ([1.0, 1.0], CubeFace::NegativeY, [0.5, -0.5, -0.5]),
            ([0.0, 0.0], CubeFace::PositiveZ, [-0.5, 0.5, 0.5]),
            ([1.0, 0.0], CubeFace::PositiveZ, [0.5, 0.5, 0.5]),
            ([0.0, 1.0], CubeFace::PositiveZ, [-0.5, -0.5, 0.5]),
            ([1.0, 1.0], CubeFace::PositiveZ, [0.5, -0.5, 0.5]),
            ([0.0, 0.0], CubeFace::NegativeZ, [0.5, 0.5, -0.5]),
            ([1.0, 0.0], CubeFace::NegativeZ, [-0.5, 0.5, -0.5]),
            ([0.0, 1.0], CubeFace::NegativeZ, [0.5, -0.5, -0.5]),
            ([1.0, 1.0], CubeFace::NegativeZ, [-0.5, -0.5, -0.5]),
        ];
        for (uv, face, expected) in cases {
            assert_eq!(cube_coord(uv, face), expected, "{face:?} at {uv:?}");
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn varying_axes_are_affine_in_uv() {
        //moving u by a quarter moves exactly one output axis by a quarter
        for face in CubeFace::ALL {
            let a = cube_coord([0.25, 0.5], face);
            let b = cube_coord([0.5, 0.5], face);
            let moved: Vec<f32> = (0..3).map(|i| (b[i] - a[i]).abs()).collect();
            assert_eq!(moved.iter().filter(|d| **d == 0.25).count(), 1, "{face:?}");
            assert_eq!(moved.iter().filter(|d| **d == 0.0).count(), 2, "{face:?}");
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn cube_array_layers_decompose() {
        for cube in 0..5 {
            for face in CubeFace::ALL {
                let layer = face.index() + CUBE_FACE_COUNT * cube;
                assert_eq!(cube_array_address(layer), (face, cube));
            }
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn negative_layers_wrap_to_negative_cubes() {
        assert_eq!(cube_array_address(-1), (CubeFace::NegativeZ, -1));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn face_indices() {
        for face in CubeFace::ALL {
            assert_eq!(CubeFace::try_from(face.index()), Ok(face));
        }
        assert_eq!(CubeFace::try_from(6i32), Err(Error::InvalidCubeFace(6)));
        assert_eq!(CubeFace::try_from(-1i32), Err(Error::InvalidCubeFace(-1)));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn selection_inverts_mapping_off_positive_x() {
        let uvs = [[0.1, 0.2], [0.5, 0.5], [0.9, 0.3], [0.25, 0.75]];
        for face in CubeFace::ALL.into_iter().filter(|f| *f != CubeFace::PositiveX) {
            for uv in uvs {
                let (selected, back) = select_face(cube_coord(uv, face));
                assert_eq!(selected, face);
                assert!((back[0] - uv[0]).abs() < 1e-6, "{face:?} {uv:?} -> {back:?}");
                assert!((back[1] - uv[1]).abs() < 1e-6, "{face:?} {uv:?} -> {back:?}");
            }
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn positive_x_rows_come_back_mirrored() {
        let (face, back) = select_face(cube_coord([0.25, 0.125], CubeFace::PositiveX));
        assert_eq!(face, CubeFace::PositiveX);
        assert!((back[0] - 0.25).abs() < 1e-6);
        assert!((back[1] - 0.875).abs() < 1e-6);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn zero_direction_is_centered() {
        assert_eq!(select_face([0.0, 0.0, 0.0]), (CubeFace::PositiveX, [0.5, 0.5]));
    }
}

//! Signed two-dimensional Morton codes.
//!
//! Each signed 32-bit axis is zig-zag mapped to an unsigned value
//! (`0, -1, 1, -2, 2, ...` → `0, 1, 2, 3, 4, ...`) and the two results are
//! bit-interleaved, `q` in the even bits and `r` in the odd bits. Cells
//! that are close on the plane tend to get close codes, and the mapping is
//! a bijection between `(i32, i32)` and `u64`.

use crate::Hex;

fn zigzag(v: i32) -> u32 {
    ((v << 1) ^ (v >> 31)) as u32
}

fn unzigzag(v: u32) -> i32 {
    ((v >> 1) as i32) ^ -((v & 1) as i32)
}

/// Spread the 32 bits of `v` into the even bits of a `u64`.
fn spread(v: u32) -> u64 {
    let mut x = v as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Gather the even bits of `x` back into a `u32`.
fn compact(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Pack a cell into its code.
pub fn encode(hex: Hex) -> u64 {
    spread(zigzag(hex.q)) | (spread(zigzag(hex.r)) << 1)
}

/// Unpack a code into its cell. Every `u64` is a valid code.
pub fn decode(code: u64) -> Hex {
    Hex::new(unzigzag(compact(code)), unzigzag(compact(code >> 1)))
}

//! Frame hashing for determinism checks.

use lgca_core::FrameAccess;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

fn fnv1a(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// FNV-1a hash over the frame's shape and every cell value, row-major.
///
/// The step id is not hashed: two frames with equal contents hash equal
/// regardless of when they were taken.
pub fn frame_hash<F: FrameAccess + ?Sized>(frame: &F) -> u64 {
    let shape = frame.shape();
    let mut h = fnv1a(FNV_OFFSET, &shape.rows.to_le_bytes());
    h = fnv1a(h, &shape.cols.to_le_bytes());
    for cell in frame.cells() {
        h = fnv1a(h, &[cell.bits()]);
    }
    h
}

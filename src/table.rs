//! Brightness lookup table.
//!
//! The fade index is a position in a fixed, nondecreasing table of duty
//! values. The default table follows a gamma 2.2 curve so the fade looks
//! linear to the eye.

/// Default fade table: 32 perceptually spaced steps from off to full duty.
pub const FADE_TABLE: [u8; 32] = [
    0, 1, 1, 2, 3, 5, 7, 10, 13, 17, 21, 26, 32, 38, 44, 52, 60, 68, 77, 87, 97, 108, 120, 132,
    145, 159, 173, 188, 204, 220, 237, 255,
];

/// Check that a fade table never steps down.
pub const fn is_nondecreasing(table: &[u8]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i] < table[i - 1] {
            return false;
        }
        i += 1;
    }
    true
}

//! Reference interval searches for differential testing.
//!
//! Both agree with compiled searches for every query: the index `i` with
//! `b[i] <= x < b[i + 1]`, or -1 when there is none.

use jitsearch_compiler::INTERVAL_MISS;

/// Scan adjacent pairs left to right.
pub fn linear_scan(breakpoints: &[f32], x: f32) -> i32 {
    breakpoints
        .windows(2)
        .position(|pair| pair[0] <= x && x < pair[1])
        .map_or(INTERVAL_MISS, |i| i as i32)
}

/// Bisect over interval starts. Index arithmetic is done in `i64`.
pub fn binary_scan(breakpoints: &[f32], x: f32) -> i32 {
    let n = breakpoints.len() as i64;
    let mut low = 0i64;
    let mut high = n - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        if mid + 1 >= n {
            return INTERVAL_MISS;
        }
        let start = breakpoints[mid as usize];
        let end = breakpoints[mid as usize + 1];
        if start <= x && x < end {
            return mid as i32;
        } else if start < x {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    INTERVAL_MISS
}

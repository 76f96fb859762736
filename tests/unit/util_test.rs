//! Tests for shared utilities

use lockrun::util::clock::now_ms;

#[test]
fn test_now_ms_positive() {
    assert!(now_ms() > 0);
}

#[test]
fn test_now_ms_monotonic() {
    let earlier = now_ms();
    let later = now_ms();
    assert!(later >= earlier);
}

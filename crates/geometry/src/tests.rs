use super::*;

// -------------------- Region containment --------------------

#[test]
fn contains_is_half_open() {
    let r = Region::new(10, 20, 15, 25);
    assert!(r.contains(10, 20));
    assert!(r.contains(14, 24));
    assert!(!r.contains(15, 24));
    assert!(!r.contains(14, 25));
    assert!(!r.contains(9, 20));
    assert!(!r.contains(10, 19));
}

#[test]
fn single_tile_region() {
    let r = Region::new(5, 5, 6, 6);
    assert!(r.contains(5, 5));
    assert!(!r.contains(6, 6));
    assert!(!r.contains(4, 5));
    assert!(!r.is_empty());
}

#[test]
fn degenerate_region_contains_nothing() {
    let r = Region::new(5, 5, 5, 5);
    assert!(r.is_empty());
    assert!(!r.contains(5, 5));
}

#[test]
fn inverted_region_contains_nothing() {
    let r = Region::new(10, 10, 0, 0);
    assert!(r.is_empty());
    assert!(!r.contains(5, 5));
    assert!(!r.contains(10, 10));
    assert!(!r.contains(0, 0));
}

#[test]
fn negative_coordinates() {
    let r = Region::new(-10, -10, -5, -5);
    assert!(r.contains(-10, -10));
    assert!(r.contains(-6, -6));
    assert!(!r.contains(-5, -5));
    assert!(!r.contains(0, 0));
}

// -------------------- Expansion --------------------

#[test]
fn expand_widens_every_side() {
    let r = Region::new(100, 200, 105, 203).expand(2);
    assert_eq!(r, Region::new(98, 198, 107, 205));
    assert!(r.contains(98, 198));
    assert!(r.contains(106, 204));
    assert!(!r.contains(107, 204));
    assert!(!r.contains(106, 205));
}

#[test]
fn expand_by_zero_is_identity() {
    let r = Region::new(1, 2, 3, 4);
    assert_eq!(r.expand(0), r);
}

#[test]
fn expand_saturates_at_i32_bounds() {
    let r = Region::new(i32::MIN + 1, 0, i32::MAX - 1, 4).expand(5);
    assert_eq!(r.from_x, i32::MIN);
    assert_eq!(r.to_x, i32::MAX);
    assert_eq!(r.from_y, -5);
    assert_eq!(r.to_y, 9);
}

// -------------------- Protection zone index --------------------

#[test]
fn zones_apply_padding_to_each_region() {
    let zones = ProtectedZones::build([Region::new(100, 200, 105, 203)], 2);
    assert_eq!(zones.len(), 1);
    assert!(zones.contains(98, 198));
    assert!(zones.contains(99, 199));
    assert!(zones.contains(106, 204));
    assert!(!zones.contains(97, 200));
    assert!(!zones.contains(107, 204));
}

#[test]
fn empty_index_protects_nothing() {
    let zones = ProtectedZones::default();
    assert!(zones.is_empty());
    assert!(!zones.contains(0, 0));

    let built = ProtectedZones::build([], 3);
    assert!(built.is_empty());
}

#[test]
fn any_zone_protects() {
    let zones = ProtectedZones::build([Region::new(0, 0, 2, 2), Region::new(50, 50, 52, 52)], 0);
    assert_eq!(zones.len(), 2);
    assert!(zones.contains(1, 1));
    assert!(zones.contains(51, 51));
    assert!(!zones.contains(10, 10));
}

#[test]
fn zero_padding_keeps_exact_footprint() {
    let zones = ProtectedZones::build([Region::new(10, 10, 12, 12)], 0);
    assert!(zones.contains(10, 10));
    assert!(zones.contains(11, 11));
    assert!(!zones.contains(12, 12));
    assert!(!zones.contains(9, 10));
}

use std::collections::BTreeMap;

/// Group values into fixed-width buckets keyed by their lower bound:
/// `bucket = floor(v / width) * width`. Boundary values land in the lower
/// bucket (plain floor-division semantics). Zero-count buckets are never
/// materialized, and the map iterates in ascending key order.
///
/// A non-positive or non-finite `width` yields an empty map; the
/// aggregation layer is total and never panics on bad input.
pub fn bucketize(values: &[f64], width: f64) -> BTreeMap<i64, u32> {
    let mut buckets = BTreeMap::new();
    if !width.is_finite() || width <= 0.0 {
        return buckets;
    }
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        let key = ((v / width).floor() * width) as i64;
        *buckets.entry(key).or_insert(0) += 1;
    }
    buckets
}

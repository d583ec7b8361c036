pub mod md;

/// Whether every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

/// Render `values` as `[a, b, c]`.
pub fn format_list<T: std::fmt::Display>(values: &[T]) -> String {
    let items = values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// `count` evenly spaced samples from `start` to `end`, both ends inclusive.
///
/// The last sample is `end` exactly. A single sample is `start`.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let step = (end - start) / last as f64;

            (0..count)
                .map(|i| if i == last { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

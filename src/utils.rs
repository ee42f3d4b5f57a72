/// Orderings the brute-force resolver compares: C(n, m) * m!, i.e. the
/// falling factorial n * (n - 1) * ... * (n - m + 1). Saturates at `usize::MAX`.
pub fn search_space(n: usize, m: usize) -> usize {
    if m > n {
        return 0;
    }
    (n - m + 1..=n).fold(1usize, |acc, factor| acc.saturating_mul(factor))
}

//! Destination-name similarity.

/// Prefix-match ratio between two destination names.
///
/// Both names are lowercased, then compared character by character from the
/// start; the score is the count of matching leading characters over the
/// longer name's character count. The metric only sees prefixes:
/// "Fürstenried West" and "Fürstenried Ost" score high because the shared
/// stem comes first, while names that only share a suffix score at or near
/// zero. Two empty names score 0.0.
///
/// The result is always in `0.0..=1.0`, and `1.0` exactly when the
/// lowercased names are equal and non-empty.
pub fn prefix_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }

    let matching = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();

    matching as f64 / longest as f64
}

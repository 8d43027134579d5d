/// Fraction of predictions equal to their label, 0 for empty input.
///
/// * `predictions` - Predicted outcomes.
/// * `labels` - True labels, same length as `predictions`.
pub fn accuracy(predictions: &[bool], labels: &[bool]) -> f64 {
    debug_assert_eq!(predictions.len(), labels.len());
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions.iter().zip(labels).filter(|(p, l)| p == l).count();
    correct as f64 / predictions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[true, false, true, true], &[true, true, true, false]), 0.5);
        assert_eq!(accuracy(&[true, false], &[true, false]), 1.0);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }
}

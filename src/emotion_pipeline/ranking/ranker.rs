use std::cmp::Ordering;

use tracing::debug;

use crate::emotion_pipeline::common::error::{EmotionError, Result};
use crate::emotion_pipeline::ranking::labels::{EMOTION_LABELS, NUM_CLASSES};
use crate::emotion_pipeline::ranking::types::{OutputVector, RankedEntry, RankedResult};

/// Normalizes raw scores to percentages of their sum and sorts them descending.
///
/// Ties keep ascending index order. Scores are not clamped, so negative inputs
/// yield negative percentages.
///
/// # Errors
///
/// * `EmotionError::DimensionMismatch` - `output` or `labels` is not `NUM_CLASSES` long
/// * `EmotionError::DegenerateDistribution` - the scores sum to zero
///
/// # Examples
///
/// ```
/// use facial_expression_rs::emotion_pipeline::{EMOTION_LABELS, OutputVector, rank};
///
/// let output = OutputVector::from([2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
/// let ranked = rank(&output, &EMOTION_LABELS).unwrap();
/// assert!(ranked.to_string().starts_with("Angry: 25.00%\n"));
/// ```
pub fn rank(output: &OutputVector, labels: &[&str]) -> Result<RankedResult> {
    if labels.len() != NUM_CLASSES {
        return Err(EmotionError::DimensionMismatch {
            expected: NUM_CLASSES,
            actual: labels.len(),
        });
    }
    if output.len() != labels.len() {
        return Err(EmotionError::DimensionMismatch {
            expected: labels.len(),
            actual: output.len(),
        });
    }

    let scores = output.as_slice();
    let sum: f32 = scores.iter().sum();
    if sum == 0.0 {
        return Err(EmotionError::DegenerateDistribution);
    }

    let percentages: Vec<f32> = scores.iter().map(|&s| (s / sum) * 100.0).collect();

    // Vec::sort_by is stable, which gives the index-order tie-break.
    let mut order: Vec<usize> = (0..percentages.len()).collect();
    order.sort_by(|&a, &b| descending(percentages[a], percentages[b]));

    let entries = order
        .into_iter()
        .map(|i| RankedEntry {
            label: labels[i].to_string(),
            percentage: percentages[i],
            index: i,
        })
        .collect();

    let ranked = RankedResult::new(entries);
    if let Some(top) = ranked.top() {
        debug!("Top class: {} (sum of raw scores {})", top, sum);
    }
    Ok(ranked)
}

/// Ranks against the model's emotion label table.
pub fn rank_emotions(output: &OutputVector) -> Result<RankedResult> {
    rank(output, &EMOTION_LABELS)
}

fn descending(a: f32, b: f32) -> Ordering {
    compare(b, a)
}

// Total order: every NaN is equal and above +inf, and -0.0 sorts below 0.0.
fn compare(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of(ranked: &RankedResult) -> Vec<&str> {
        ranked.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_skewed_scores_report() {
        let output = OutputVector::from([2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let ranked = rank(&output, &EMOTION_LABELS).unwrap();

        assert_eq!(
            ranked.to_string(),
            "Angry: 25.00%\n\
             Disgust: 12.50%\n\
             Fear: 12.50%\n\
             Happy: 12.50%\n\
             Sad: 12.50%\n\
             Surprise: 12.50%\n\
             Neutral: 12.50%\n"
        );
    }

    #[test]
    fn test_sorted_descending() {
        let output = OutputVector::from([0.05, 0.01, 0.02, 0.6, 0.1, 0.02, 0.2]);
        let ranked = rank_emotions(&output).unwrap();

        assert_eq!(
            labels_of(&ranked),
            ["Happy", "Neutral", "Sad", "Angry", "Fear", "Surprise", "Disgust"]
        );
        assert!(ranked
            .entries()
            .windows(2)
            .all(|w| w[0].percentage >= w[1].percentage));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let output = OutputVector::from([0.3, 0.7, 1.9, 0.01, 4.2, 0.0, 2.5]);
        let ranked = rank_emotions(&output).unwrap();

        let total: f32 = ranked.iter().map(|e| e.percentage).sum();
        assert!((total - 100.0).abs() < 1e-3, "total was {total}");
    }

    #[test]
    fn test_unnormalized_scores_are_normalized() {
        let output = OutputVector::from([0.0, 0.0, 0.0, 30.0, 0.0, 0.0, 10.0]);
        let ranked = rank_emotions(&output).unwrap();

        let top = ranked.top().unwrap();
        assert_eq!(top.label, "Happy");
        assert_eq!(top.index, 3);
        assert_eq!(top.percentage, 75.0);
        assert_eq!(ranked.entries()[1].to_string(), "Neutral: 25.00%");
    }

    #[test]
    fn test_ties_keep_index_order() {
        let output = OutputVector::from([1.0; 7]);
        let ranked = rank_emotions(&output).unwrap();

        assert_eq!(labels_of(&ranked), EMOTION_LABELS);
        let indices: Vec<usize> = ranked.iter().map(|e| e.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_all_zero_scores_are_degenerate() {
        let output = OutputVector::from([0.0; 7]);
        assert!(matches!(
            rank_emotions(&output),
            Err(EmotionError::DegenerateDistribution)
        ));
    }

    #[test]
    fn test_cancelling_scores_are_degenerate() {
        let output = OutputVector::from([1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(matches!(
            rank_emotions(&output),
            Err(EmotionError::DegenerateDistribution)
        ));
    }

    #[test]
    fn test_wrong_output_length() {
        let output = OutputVector::from([0.5, 0.5]);
        assert!(matches!(
            rank_emotions(&output),
            Err(EmotionError::DimensionMismatch {
                expected: 7,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_wrong_label_count() {
        let output = OutputVector::from([1.0; 7]);
        let labels = ["Angry", "Happy"];
        assert!(matches!(
            rank(&output, &labels),
            Err(EmotionError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_all_nan_scores_keep_index_order() {
        let output = OutputVector::from([1.0, f32::NAN, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let ranked = rank_emotions(&output).unwrap();

        // NaN poisons the sum, so every percentage is NaN and index order is kept.
        assert_eq!(ranked.len(), 7);
        assert_eq!(labels_of(&ranked), EMOTION_LABELS);
    }

    #[test]
    fn test_nan_percentage_ranks_first() {
        // inf / inf is NaN for Angry; every other class gets 1 / inf = 0.
        let output = OutputVector::from([f32::INFINITY, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let ranked = rank_emotions(&output).unwrap();

        assert_eq!(ranked.top().unwrap().label, "Angry");
        assert!(ranked.top().unwrap().percentage.is_nan());
        assert!(ranked.to_string().starts_with("Angry: NaN%\nDisgust: 0.00%\n"));
    }

    #[test]
    fn test_negative_zero_ranks_below_zero() {
        // Sum is -1: -0.0 / -1 = 0.0 for Angry, 0.0 / -1 = -0.0 for the other zeros.
        let output = OutputVector::from([-0.0, 0.0, 3.0, -4.0, 0.0, 0.0, 0.0]);
        let ranked = rank_emotions(&output).unwrap();

        assert_eq!(
            labels_of(&ranked),
            ["Happy", "Angry", "Disgust", "Sad", "Surprise", "Neutral", "Fear"]
        );
        assert_eq!(ranked.entries()[2].to_string(), "Disgust: -0.00%");
    }

    #[test]
    fn test_half_way_percentage_rounds_up() {
        let output = OutputVector::from([1.0, 799.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let ranked = rank_emotions(&output).unwrap();

        let angry = &ranked.entries()[1];
        assert_eq!(angry.label, "Angry");
        assert_eq!(angry.to_string(), "Angry: 0.13%");
        assert!(ranked.to_string().contains("\nAngry: 0.13%\n"));
    }

    #[test]
    fn test_negative_scores_are_not_clamped() {
        let output = OutputVector::from([-1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let ranked = rank_emotions(&output).unwrap();

        assert_eq!(ranked.top().unwrap().label, "Disgust");
        assert_eq!(ranked.top().unwrap().percentage, 150.0);
        let last = ranked.entries().last().unwrap();
        assert_eq!(last.label, "Angry");
        assert_eq!(last.percentage, -50.0);
    }
}

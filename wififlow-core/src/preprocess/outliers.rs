//! Interquartile-range outlier filtering per edge

use hashbrown::HashMap;
use log::debug;

use crate::model::{EdgeAggregate, EdgeKey, Transition};

/// Linear-interpolated quantile of an ascending slice, `q` in `[0, 1]`.
///
/// Position `(n - 1) * q` between the two closest ranks. Returns `None`
/// for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    #[allow(clippy::cast_precision_loss)]
    let pos = last as f64 * q.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(last);
    let frac = pos - pos.floor();
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Inclusive fences `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    const WHISKER: f64 = 1.5;

    /// Fences of a sample set, `None` when it is empty.
    ///
    /// Small groups use the same formula; a single sample gives
    /// `Q1 = Q3` and fences collapsing onto that sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let q1 = quantile(&sorted, 0.25)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(Self {
            lower: q1 - Self::WHISKER * iqr,
            upper: q3 + Self::WHISKER * iqr,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Groups transitions by edge and keeps, per group, the ones inside the
/// group's IQR fences. Groups are returned in edge order.
pub fn filter_outliers(transitions: &[Transition]) -> Vec<(EdgeKey, Vec<&Transition>)> {
    let mut groups: HashMap<EdgeKey, Vec<&Transition>> = HashMap::new();
    for transition in transitions {
        groups.entry(transition.edge()).or_default().push(transition);
    }

    let mut filtered: Vec<(EdgeKey, Vec<&Transition>)> = groups
        .into_iter()
        .filter_map(|(edge, group)| {
            let seconds: Vec<f64> = group.iter().map(|t| t.seconds).collect();
            let bounds = IqrBounds::from_samples(&seconds)?;
            let before = group.len();
            let kept: Vec<&Transition> = group
                .into_iter()
                .filter(|t| bounds.contains(t.seconds))
                .collect();
            if kept.len() < before {
                debug!(
                    "Edge {edge}: dropped {} of {before} transitions outside [{:.1}, {:.1}]",
                    before - kept.len(),
                    bounds.lower,
                    bounds.upper
                );
            }
            (!kept.is_empty()).then_some((edge, kept))
        })
        .collect();
    filtered.sort_by(|a, b| a.0.cmp(&b.0));
    filtered
}

/// Filters outliers and reduces each edge to (sum of seconds, count)
pub fn aggregate_edges(transitions: &[Transition]) -> Vec<EdgeAggregate> {
    filter_outliers(transitions)
        .into_iter()
        .map(|(edge, kept)| EdgeAggregate {
            seconds: kept.iter().map(|t| t.seconds).sum(),
            count: kept.len() as u64,
            from_router_id: edge.from_router_id,
            to_router_id: edge.to_router_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn transition(from: &str, to: &str, seconds: f64) -> Transition {
        Transition {
            from_router_id: from.into(),
            to_router_id: to.into(),
            seconds,
            ended_at: DateTime::parse_from_rfc3339("2022-12-01T10:00:00+03:00").unwrap(),
        }
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile(&sorted, 0.75), Some(3.25));
        assert_eq!(quantile(&sorted, 1.0), Some(4.0));
    }

    #[test]
    fn quantile_of_empty_is_none() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn single_sample_is_its_own_fence() {
        let bounds = IqrBounds::from_samples(&[42.0]).unwrap();
        assert_eq!(bounds.lower, 42.0);
        assert_eq!(bounds.upper, 42.0);
        assert!(bounds.contains(42.0));
    }

    #[test]
    fn far_sample_is_dropped() {
        let transitions: Vec<Transition> = [60.0, 62.0, 58.0, 61.0, 59.0, 3600.0]
            .into_iter()
            .map(|s| transition("a", "b", s))
            .collect();
        let aggregated = aggregate_edges(&transitions);
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].count, 5);
        assert_eq!(aggregated[0].seconds, 300.0);
    }

    #[test]
    fn constant_group_is_kept_whole() {
        let transitions: Vec<Transition> = (0..7).map(|_| transition("a", "b", 30.0)).collect();
        let filtered = filter_outliers(&transitions);
        assert_eq!(filtered[0].1.len(), 7);
    }

    #[test]
    fn edges_are_filtered_independently() {
        let mut transitions: Vec<Transition> = [10.0, 11.0, 12.0, 13.0]
            .into_iter()
            .map(|s| transition("a", "b", s))
            .collect();
        // would be an outlier for a -> b, but b -> a is its own group
        transitions.push(transition("b", "a", 500.0));
        let aggregated = aggregate_edges(&transitions);
        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].key(), EdgeKey::new("a", "b"));
        assert_eq!(aggregated[0].count, 4);
        assert_eq!(aggregated[1].key(), EdgeKey::new("b", "a"));
        assert_eq!(aggregated[1].seconds, 500.0);
    }

    #[test]
    fn kept_transitions_are_a_subset() {
        let samples = [5.0, 7.0, 8.0, 9.0, 11.0, 40.0, 1.0, 8.5];
        let transitions: Vec<Transition> =
            samples.into_iter().map(|s| transition("a", "b", s)).collect();
        for (_, kept) in filter_outliers(&transitions) {
            assert!(kept.iter().all(|t| samples.contains(&t.seconds)));
            assert!(kept.len() <= samples.len());
        }
    }

    #[test]
    fn mean_is_recovered_from_sum_and_count() {
        let samples = [20.0, 21.5, 19.25, 22.0];
        let transitions: Vec<Transition> =
            samples.into_iter().map(|s| transition("a", "b", s)).collect();
        let aggregated = aggregate_edges(&transitions);
        let expected = samples.iter().sum::<f64>() / 4.0;
        assert!((aggregated[0].mean_seconds() - expected).abs() < 1e-9);
    }
}

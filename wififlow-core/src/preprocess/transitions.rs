use itertools::Itertools;

use crate::model::{DetectionEvent, Transition};

/// Derives transitions from a set of detections.
///
/// Detections are grouped by device and ordered by timestamp (ties keep
/// their input order). Every consecutive pair whose sniffers differ yields
/// one transition; a device seen once yields nothing.
///
/// `from_router_id` is the earlier sighting and `to_router_id` the later
/// one, so a device seen at A and then at B gives `A -> B`. Edge files
/// written from these transitions label direction in travel order.
pub fn extract_transitions(mut events: Vec<DetectionEvent>) -> Vec<Transition> {
    events.sort_by(|a, b| a.user.cmp(&b.user).then(a.timestamp.cmp(&b.timestamp)));

    let mut transitions = Vec::new();
    for (_, user_events) in &events.iter().chunk_by(|e| e.user.as_str()) {
        for (prev, cur) in user_events.tuple_windows() {
            if prev.router_id == cur.router_id {
                continue;
            }
            transitions.push(Transition {
                from_router_id: prev.router_id.clone(),
                to_router_id: cur.router_id.clone(),
                seconds: seconds_between(prev, cur),
                ended_at: cur.timestamp,
            });
        }
    }
    transitions
}

#[allow(clippy::cast_precision_loss)]
fn seconds_between(prev: &DetectionEvent, cur: &DetectionEvent) -> f64 {
    let delta = cur.timestamp - prev.timestamp;
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::model::EdgeKey;

    fn event(user: &str, router: &str, ts: &str) -> DetectionEvent {
        DetectionEvent {
            user: user.into(),
            router_id: router.into(),
            timestamp: DateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f %z").unwrap(),
        }
    }

    #[test]
    fn single_detection_yields_nothing() {
        let events = vec![event("u1", "a", "2022-12-01 10:00:00.000000 +0300")];
        assert!(extract_transitions(events).is_empty());
    }

    #[test]
    fn direction_follows_travel_order() {
        let events = vec![
            event("u1", "a", "2022-12-01 10:00:00.000000 +0300"),
            event("u1", "b", "2022-12-01 10:01:00.000000 +0300"),
        ];
        let transitions = extract_transitions(events);
        assert_eq!(transitions[0].edge(), EdgeKey::new("a", "b"));
    }

    #[test]
    fn repeated_sniffer_is_not_a_transition() {
        let events = vec![
            event("u1", "a", "2022-12-01 10:00:00.000000 +0300"),
            event("u1", "a", "2022-12-01 10:00:30.000000 +0300"),
            event("u1", "b", "2022-12-01 10:01:30.000000 +0300"),
        ];
        let transitions = extract_transitions(events);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from_router_id, "a");
        assert_eq!(transitions[0].to_router_id, "b");
        // measured from the last sighting at "a"
        assert_eq!(transitions[0].seconds, 60.0);
    }

    #[test]
    fn unordered_input_is_sorted_per_user() {
        let events = vec![
            event("u1", "b", "2022-12-01 10:01:00.500000 +0300"),
            event("u2", "c", "2022-12-01 09:00:00.000000 +0300"),
            event("u1", "a", "2022-12-01 10:00:00.000000 +0300"),
        ];
        let transitions = extract_transitions(events);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].edge().from_router_id, "a");
        assert_eq!(transitions[0].seconds, 60.5);
        assert_eq!(transitions[0].hour(), 10);
    }

    #[test]
    fn users_do_not_chain_into_each_other() {
        let events = vec![
            event("u1", "a", "2022-12-01 10:00:00.000000 +0300"),
            event("u2", "b", "2022-12-01 10:00:10.000000 +0300"),
        ];
        assert!(extract_transitions(events).is_empty());
    }

    #[test]
    fn transition_count_matches_router_changes() {
        let routers = ["a", "b", "b", "c", "a", "a", "b"];
        let events = routers
            .iter()
            .enumerate()
            .map(|(i, r)| event("u1", r, &format!("2022-12-01 10:{i:02}:00.000000 +0300")))
            .collect();
        let changes = routers.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(extract_transitions(events).len(), changes);
    }
}

//! Route sequencing for a day's stops.
//!
//! Orders stops to reduce cumulative travel distance using a
//! nearest-neighbor heuristic. This is deliberately not an exact
//! solver: tour quality is best-effort, and the only guarantees are
//! that the output is a permutation of the input and that short lists
//! keep their order.

use crate::domain::Poi;

/// Compute a visiting order for the day's POIs.
///
/// Returns indices into `pois`. Lists of length 2 or less come back in
/// identity order; there is nothing to gain from reordering them.
/// Longer lists are ordered greedily: start at index 0, then repeatedly
/// hop to the nearest unvisited POI, breaking distance ties by lowest
/// index so the result is deterministic.
pub fn nearest_neighbor_order(pois: &[Poi]) -> Vec<usize> {
    if pois.len() <= 2 {
        return (0..pois.len()).collect();
    }

    let mut order = Vec::with_capacity(pois.len());
    let mut visited = vec![false; pois.len()];

    let mut current = 0;
    order.push(current);
    visited[current] = true;

    while order.len() < pois.len() {
        let here = &pois[current].location;

        let mut nearest: Option<(usize, f64)> = None;
        for (idx, poi) in pois.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let d = here.distance_km(&poi.location);
            // Strict less-than keeps the lowest index on ties.
            let better = match nearest {
                None => true,
                Some((_, best)) => d < best,
            };
            if better {
                nearest = Some((idx, d));
            }
        }

        // Unvisited POIs always remain here, so nearest is Some.
        let Some((next, _)) = nearest else { break };
        order.push(next);
        visited[next] = true;
        current = next;
    }

    order
}

/// Apply a sequencing order to a slice, cloning into the new order.
pub fn apply_order<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, PoiCategory};

    fn poi_at(name: &str, lat: f64, lon: f64) -> Poi {
        Poi {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: PoiCategory::Attraction,
            location: Coordinate::new(lat, lon).unwrap(),
            rating: None,
            price_level: None,
            visit_duration: None,
            description: None,
            review_count: 0,
            priority_score: None,
        }
    }

    #[test]
    fn empty_and_short_lists_keep_order() {
        assert_eq!(nearest_neighbor_order(&[]), Vec::<usize>::new());
        assert_eq!(nearest_neighbor_order(&[poi_at("A", 0.0, 0.0)]), vec![0]);
        assert_eq!(
            nearest_neighbor_order(&[poi_at("A", 0.0, 0.0), poi_at("B", 10.0, 10.0)]),
            vec![0, 1]
        );
    }

    #[test]
    fn picks_greedy_route() {
        // A at origin, C close by, B far away: greedy route is A, C, B.
        let pois = [
            poi_at("A", 0.0, 0.0),
            poi_at("B", 5.0, 5.0),
            poi_at("C", 0.1, 0.1),
        ];
        assert_eq!(nearest_neighbor_order(&pois), vec![0, 2, 1]);
    }

    #[test]
    fn equidistant_ties_break_by_lowest_index() {
        // B and C are mirror images around A.
        let pois = [
            poi_at("A", 0.0, 0.0),
            poi_at("B", 0.0, 1.0),
            poi_at("C", 0.0, -1.0),
        ];
        assert_eq!(nearest_neighbor_order(&pois), vec![0, 1, 2]);
    }

    #[test]
    fn apply_order_reorders() {
        let items = vec!["a", "b", "c"];
        assert_eq!(apply_order(&items, &[2, 0, 1]), vec!["c", "a", "b"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinate, PoiCategory};
    use proptest::prelude::*;

    fn arb_pois() -> impl Strategy<Value = Vec<Poi>> {
        prop::collection::vec((-80.0f64..=80.0, -170.0f64..=170.0), 0..12).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lon))| Poi {
                    id: format!("p{i}"),
                    name: format!("P{i}"),
                    category: PoiCategory::Attraction,
                    location: Coordinate::new(lat, lon).unwrap(),
                    rating: None,
                    price_level: None,
                    visit_duration: None,
                    description: None,
                    review_count: 0,
                    priority_score: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn output_is_a_permutation(pois in arb_pois()) {
            let order = nearest_neighbor_order(&pois);
            prop_assert_eq!(order.len(), pois.len());

            let mut sorted = order.clone();
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..pois.len()).collect();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn short_lists_are_identity(pois in arb_pois()) {
            if pois.len() <= 2 {
                let order = nearest_neighbor_order(&pois);
                let expected: Vec<usize> = (0..pois.len()).collect();
                prop_assert_eq!(order, expected);
            }
        }

        #[test]
        fn deterministic(pois in arb_pois()) {
            prop_assert_eq!(
                nearest_neighbor_order(&pois),
                nearest_neighbor_order(&pois)
            );
        }
    }
}

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::{
    common::MinHeap,
    core::{id::CityId, weight::extend},
    network::RoadNetwork,
};

use super::{Error, ShortestPaths};

pub fn dijkstra(
    network: &RoadNetwork,
    source: CityId,
    goal: Option<CityId>,
    unit_weight: bool,
) -> Result<ShortestPaths, Error> {
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = MinHeap::new();

    dist.insert(source, 0);
    queue.push(0, source);

    while let Some((city_dist, city)) = queue.pop() {
        // The city was pushed more than once during relaxation and a shorter
        // entry was already processed.
        if dist.get(&city).is_some_and(|&best| city_dist > best) {
            continue;
        }

        if goal == Some(city) {
            break;
        }

        for road in network.roads(city) {
            let next = road.to;
            let road_dist = if unit_weight { 1 } else { road.distance };

            // Sums that do not fit into the total distance are unreachable for
            // all practical purposes.
            let Some(next_dist) = extend(city_dist, road_dist) else {
                continue;
            };

            match dist.entry(next) {
                Entry::Occupied(mut curr_dist) => {
                    // Relaxation operation. If the distance is better than what
                    // we had so far, update it.
                    if next_dist < *curr_dist.get() {
                        curr_dist.insert(next_dist);
                        // The outdated entry stays in the heap and is skipped
                        // when popped.
                        queue.push(next_dist, next);
                        pred.insert(next, city);
                        tracing::trace!(%city, %next, next_dist, "relaxed");
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist);
                    queue.push(next_dist, next);
                    pred.insert(next, city);
                }
            }
        }
    }

    if let Some(goal) = goal {
        // Without early termination the whole component was settled.
        if !dist.contains_key(&goal) {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}

use rustc_hash::FxHashMap;

use crate::{
    common::{Queue, TypedBitSet, VisitSet},
    core::id::CityId,
    network::RoadNetwork,
};

use super::{Error, ShortestPaths};

pub fn bfs(
    network: &RoadNetwork,
    source: CityId,
    goal: Option<CityId>,
) -> Result<ShortestPaths, Error> {
    let mut visited = TypedBitSet::with_capacity(network.city_bound());

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = Queue::new();

    dist.insert(source, 0);
    visited.visit(source);
    queue.enqueue((source, 0));

    let mut reached = goal.is_none();

    while let Some((city, city_dist)) = queue.dequeue() {
        if goal == Some(city) {
            reached = true;
            break;
        }

        for road in network.roads(city) {
            let next = road.to;

            // Marking on enqueue keeps every city in the queue at most once,
            // and the first predecessor recorded is on a fewest-stops path.
            if !visited.visit(next) {
                continue;
            }

            let next_dist = city_dist + 1;
            dist.insert(next, next_dist);
            pred.insert(next, city);
            queue.enqueue((next, next_dist));
        }
    }

    if !reached {
        return Err(Error::GoalNotReached);
    }

    Ok(ShortestPaths { source, dist, pred })
}

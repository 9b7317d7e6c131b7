#![allow(dead_code)]

use citynet::RoadNetwork;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5eed_c17e_0a7d_2024;

pub const MAX_DISTANCE: u32 = 1000;

/// Enumerates pairs of cities `(v, w)` with `w < v`, each with probability
/// `p`, skipping over the rejected pairs geometrically.
pub struct RandomRoutes {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomRoutes {
    pub fn new(city_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: city_count,
            p,
        }
    }

    pub fn next_route(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn city_name(index: usize) -> String {
    format!("c{index}")
}

pub fn random_routes(city_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, u32)> {
    let mut routes = Vec::new();
    let mut pairs = RandomRoutes::new(city_count, density);

    while let Some((u, v)) = pairs.next_route(rng) {
        routes.push((u, v, rng.u32(1..=MAX_DISTANCE)));
    }

    routes
}

pub fn citynet_random(city_count: usize, density: f32, rng: &mut Rng) -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(city_count);

    // Cities are created in order so that their ids match the indices.
    for v in 1..city_count {
        network.add_route(&city_name(v - 1), &city_name(v), MAX_DISTANCE).unwrap();
    }

    for (u, v, distance) in random_routes(city_count, density, rng) {
        network.add_route(&city_name(u), &city_name(v), distance).unwrap();
    }

    network
}

pub fn citynet_complete(city_count: usize, rng: &mut Rng) -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(city_count);

    for v in 1..city_count {
        for u in 0..v {
            network
                .add_route(&city_name(u), &city_name(v), rng.u32(1..=MAX_DISTANCE))
                .unwrap();
        }
    }

    network
}

pub fn petgraph_random(city_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), u32> {
    let mut graph = UnGraph::with_capacity(city_count, 0);

    for _ in 0..city_count {
        graph.add_node(());
    }

    for v in 1..city_count {
        graph.update_edge(NodeIndex::new(v - 1), NodeIndex::new(v), MAX_DISTANCE);
    }

    for (u, v, distance) in random_routes(city_count, density, rng) {
        graph.update_edge(NodeIndex::new(u), NodeIndex::new(v), distance);
    }

    graph
}

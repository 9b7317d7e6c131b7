use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{common::UnionFind, core::weight::Distance, network::RoadNetwork};

pub fn network() -> NetworkStrategy {
    NetworkStrategy::new(StrategyParams::default())
}

#[derive(Debug)]
pub struct NetworkStrategy {
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
            }
        }
    }
}

impl NetworkStrategy {
    pub fn new(params: StrategyParams) -> Self {
        Self { params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `network().max_size(16).connected()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(max_distance, max_distance: Distance);
    delegate_builder_fn!(connected);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    max_distance: Distance,
    connected: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            max_distance: 1000,
            connected: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn max_distance(self, max_distance: Distance) -> Self {
        assert!(max_distance > 0, "maximum distance must be positive");
        Self {
            max_distance,
            ..self
        }
    }

    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl Strategy for NetworkStrategy {
    type Tree = NetworkValueTree;
    type Value = RoadNetwork;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let StrategyParams {
            max_size,
            max_distance,
            connected,
            density,
        } = self.params;

        let n = runner.rng().gen_range(0..=max_size);
        let p = (runner.rng().gen::<f32>() * density) as f64;

        let mut routes = Vec::new();

        // Erdős–Rényi model, every pair of cities is connected with
        // probability p.
        for v in 1..n {
            for u in 0..v {
                if runner.rng().gen_bool(p) {
                    let distance = runner.rng().gen_range(1..=max_distance);
                    routes.push((u, v, distance));
                }
            }
        }

        if connected {
            // Link consecutive cities that ended up in different components.
            let mut sets = UnionFind::new();
            for &(u, v, _) in &routes {
                sets.union(&u, &v);
            }

            for v in 1..n {
                if !sets.same_set(&(v - 1), &v) {
                    let distance = runner.rng().gen_range(1..=max_distance);
                    routes.push((v - 1, v, distance));
                    sets.union(&(v - 1), &v);
                }
            }
        }

        let command = if routes.is_empty() {
            None
        } else {
            Some(Shrink::City(0))
        };

        Ok(NetworkValueTree {
            city_count: n,
            routes,
            current: Removed::default(),
            high: None,
            command,
            // Removing cities or routes could disconnect the network.
            no_shrink: connected,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    City(usize),
    Route(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    cities: FxHashSet<usize>,
    routes: FxHashSet<usize>,
}

#[derive(Debug, Clone)]
pub struct NetworkValueTree {
    city_count: usize,
    routes: Vec<(usize, usize, Distance)>,
    current: Removed,
    high: Option<Removed>,
    command: Option<Shrink>,
    no_shrink: bool,
}

impl NetworkValueTree {
    fn route_exists(&self, e: usize) -> bool {
        let (u, v, _) = self.routes[e];
        !(self.current.routes.contains(&e)
            || self.current.cities.contains(&u)
            || self.current.cities.contains(&v))
    }

    fn next_command(&self, command: Shrink) -> Option<Shrink> {
        match command {
            Shrink::City(v) => ((v + 1)..self.city_count)
                .find(|w| !self.current.cities.contains(w))
                .map(Shrink::City)
                .or_else(|| {
                    (0..self.routes.len())
                        .find(|&e| self.route_exists(e))
                        .map(Shrink::Route)
                }),
            Shrink::Route(e) => ((e + 1)..self.routes.len())
                .find(|&f| self.route_exists(f))
                .map(Shrink::Route),
        }
    }
}

impl ValueTree for NetworkValueTree {
    type Value = RoadNetwork;

    fn current(&self) -> Self::Value {
        let mut network = RoadNetwork::with_capacity(self.city_count);

        for e in 0..self.routes.len() {
            if self.route_exists(e) {
                let (u, v, distance) = self.routes[e];
                network
                    .add_route(&format!("c{u}"), &format!("c{v}"), distance)
                    .expect("generated routes are valid");
            }
        }

        network
    }

    fn simplify(&mut self) -> bool {
        if self.no_shrink {
            return false;
        }

        // First try to remove cities one by one (with all their routes), then
        // individual routes.
        let command = match self.command {
            Some(command) => command,
            None => return false,
        };

        self.high = Some(self.current.clone());

        match command {
            Shrink::City(v) => {
                self.current.cities.insert(v);
            }
            Shrink::Route(e) => {
                self.current.routes.insert(e);
            }
        }

        self.command = self.next_command(command);
        true
    }

    fn complicate(&mut self) -> bool {
        match self.high.take() {
            Some(high) => {
                self.current = high;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{strategy::check_strategy_sanity, test_runner::TestRunner};

    use crate::{algo::reachable, core::id::CityId, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn strategy_sanity() {
        check_strategy_sanity(network().max_size(16), None);
    }

    #[test]
    fn generated_consistent() {
        let mut runner = TestRunner::deterministic();
        let strategy = network().max_size(24);

        for _ in 0..32 {
            let mut tree = strategy.new_tree(&mut runner).unwrap();
            check_consistency(&tree.current()).unwrap();

            while tree.simplify() {
                check_consistency(&tree.current()).unwrap();
            }
        }
    }

    #[test]
    fn generated_connected() {
        let mut runner = TestRunner::deterministic();
        let strategy = network().max_size(24).sparse().connected();

        for _ in 0..32 {
            let network = strategy.new_tree(&mut runner).unwrap().current();

            if network.city_count() > 0 {
                let start = CityId::from_usize(0);
                assert_eq!(reachable(&network, start).len(), network.city_count() - 1);
            }
        }
    }
}

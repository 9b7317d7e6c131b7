use crate::{core::id::CityId, network::RoadNetwork};

use super::{bfs::bfs, dijkstra::dijkstra, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a> {
    network: &'a RoadNetwork,
    goal: Option<CityId>,
    unit_weight: bool,
    algo: Option<Algo>,
}

impl ShortestPaths {
    pub fn on(network: &RoadNetwork) -> ShortestPathsBuilder<'_> {
        ShortestPathsBuilder {
            network,
            goal: None,
            unit_weight: false,
            algo: None,
        }
    }
}

impl<'a> ShortestPathsBuilder<'a> {
    /// Stop the search once the shortest path to `goal` is known.
    pub fn goal(self, goal: CityId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    /// Count every route as one stop instead of using its distance.
    pub fn unit_weight(self) -> Self {
        Self {
            unit_weight: true,
            ..self
        }
    }

    pub fn dijkstra(self) -> Self {
        self.using(Algo::Dijkstra)
    }

    /// Breadth-first search, which always uses [unit
    /// weights](Self::unit_weight).
    pub fn bfs(self) -> Self {
        self.unit_weight().using(Algo::Bfs)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self {
            algo: Some(algo),
            ..self
        }
    }

    pub fn run(self, source: CityId) -> Result<ShortestPaths, Error> {
        let algo = self.algo.unwrap_or_else(|| self.choose_algo());
        let ShortestPathsBuilder {
            network,
            goal,
            unit_weight,
            ..
        } = self;

        if !network.contains(source) || goal.is_some_and(|goal| !network.contains(goal)) {
            return Err(Error::CityNotFound);
        }

        let result = match algo {
            Algo::Dijkstra => dijkstra(network, source, goal, unit_weight),
            Algo::Bfs => bfs(network, source, goal),
        };

        match &result {
            Ok(paths) => tracing::debug!(
                ?algo,
                %source,
                goal = ?goal,
                settled = paths.dist.len(),
                "shortest paths found"
            ),
            Err(error) => tracing::debug!(?algo, %source, goal = ?goal, %error, "shortest paths failed"),
        }

        result
    }

    fn choose_algo(&self) -> Algo {
        if self.unit_weight {
            // All routes weigh the same, plain BFS finds the same distances
            // without the heap overhead.
            Algo::Bfs
        } else {
            Algo::Dijkstra
        }
    }
}

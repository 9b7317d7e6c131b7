use std::fmt;

use arbitrary::Arbitrary;

use crate::{
    core::{
        error::{AddRouteError, ReplaceRouteError},
        weight::Distance,
    },
    network::RoadNetwork,
};

/// Selects a city name relative to the current size of the network.
///
/// The name may denote an existing city or a new one (there are always at
/// least two names not in the network). It is spelled in either case so that
/// the case-insensitive lookup is exercised.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Name(pub usize);

impl Name {
    pub fn resolve(&self, city_count: usize) -> String {
        let m = city_count + 2;
        let index = self.0 % m;

        if (self.0 / m) % 2 == 0 {
            format!("c{index}")
        } else {
            format!("C{index}")
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp {
    AddRoute(Name, Name, Distance),
    UpdateRoute(Name, Name, Distance),
    RemoveRoute(Name, Name),
    Clear,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult {
    AddRoute(Result<Option<Distance>, AddRouteError>),
    UpdateRoute(Result<Distance, ReplaceRouteError>),
    RemoveRoute(Option<Distance>),
    Clear,
}

impl MutOp {
    pub fn apply(self, network: &mut RoadNetwork) -> MutOpResult {
        let n = network.city_count();

        match self {
            MutOp::AddRoute(u, v, distance) => {
                MutOpResult::AddRoute(network.add_route(&u.resolve(n), &v.resolve(n), distance))
            }
            MutOp::UpdateRoute(u, v, distance) => MutOpResult::UpdateRoute(network.update_route(
                &u.resolve(n),
                &v.resolve(n),
                distance,
            )),
            MutOp::RemoveRoute(u, v) => {
                MutOpResult::RemoveRoute(network.remove_route(&u.resolve(n), &v.resolve(n)))
            }
            MutOp::Clear => {
                network.clear();
                MutOpResult::Clear
            }
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MutOpsSeq {
    /// Applies the operations and prints them as a reproducible test case.
    pub fn replay(self, network: &mut RoadNetwork) {
        println!("let mut network = RoadNetwork::new();");
        println!();

        for op in self {
            let n = network.city_count();

            match &op {
                MutOp::AddRoute(u, v, distance) => println!(
                    "network.add_route({:?}, {:?}, {distance});",
                    u.resolve(n),
                    v.resolve(n)
                ),
                MutOp::UpdateRoute(u, v, distance) => println!(
                    "network.update_route({:?}, {:?}, {distance});",
                    u.resolve(n),
                    v.resolve(n)
                ),
                MutOp::RemoveRoute(u, v) => println!(
                    "network.remove_route({:?}, {:?});",
                    u.resolve(n),
                    v.resolve(n)
                ),
                MutOp::Clear => println!("network.clear();"),
            }

            op.apply(network);
        }

        println!();
        println!("check_consistency(&network).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut network);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

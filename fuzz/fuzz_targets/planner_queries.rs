#![no_main]

use libfuzzer_sys::fuzz_target;

use citynet::{
    core::Limits,
    infra::arbitrary::{MutOpsSeq, Name},
    RoutePlanner,
};

fuzz_target!(|input: (MutOpsSeq, Name, Name)| {
    let (ops, start, end) = input;
    let mut network = citynet::RoadNetwork::new();

    for op in ops {
        op.apply(&mut network);
    }

    let n = network.city_count();
    let (start, end) = (start.resolve(n), end.resolve(n));

    let mut planner = RoutePlanner::from_network(network);
    planner.set_limits(Limits::default().max_expansions(10_000));

    let shortest = planner.shortest_path(&start, &end);
    let fewest = planner.fewest_stops(&start, &end);
    let longest = planner.longest_path(&start, &end);

    // All three agree on whether the cities are connected, unless the
    // longest path search gave up.
    assert_eq!(shortest.found, fewest.found);
    if shortest.found {
        assert!(fewest.stops + 1 <= shortest.path.len());
        if longest.found {
            assert!(longest.distance >= shortest.distance);
        }
    } else {
        assert!(!longest.found);
    }

    let reachable = planner.reachable(&start);
    assert!(reachable.len() < planner.city_count().max(1));

    let cheapest = planner.cheapest_network();
    if cheapest.found {
        assert_eq!(
            cheapest.routes.len() + cheapest.components,
            planner.city_count()
        );
    }
});

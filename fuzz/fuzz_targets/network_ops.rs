#![no_main]

use libfuzzer_sys::fuzz_target;

use citynet::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    RoadNetwork,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut network = RoadNetwork::new();

    for op in ops {
        op.apply(&mut network);
        check_consistency(&network)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});

use equal_path::{
    config::Config,
    db::variable::VariableTable,
    decoding::{paths_from_model, solution_length},
    encoding::path_formula,
    oracle::{varisat::VarisatOracle, Oracle, Verdict},
    reports::Report,
    structures::graph::{Graph, GraphSource},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

mod common;
use common::*;

fn random_graph(rng: &mut StdRng, name: &str, max_order: usize, density: f64) -> Graph {
    let order = rng.random_range(1..=max_order);
    let mut edges = Vec::default();
    for from in 0..order {
        for to in 0..order {
            if from != to && rng.random_bool(density) {
                edges.push((from, to));
            }
        }
    }
    let source = rng.random_range(0..order);
    let target = match rng.random_bool(0.1) {
        true => source,
        false => rng.random_range(0..order),
    };
    Graph::from_edges(name, order, &edges, source, target)
}

mod single_graphs {
    use super::*;

    #[test]
    fn each_length_matches_enumeration() {
        let mut rng = StdRng::seed_from_u64(71);

        for instance in 0..48 {
            let graphs = [random_graph(&mut rng, &format!("g{instance}"), 6, 0.3)];
            let expected = accepting_lengths(&graphs[0]);

            let mut table = VariableTable::default();
            let mut oracle = VarisatOracle::default();

            for length in 0..graphs[0].order() {
                let formula = path_formula(&mut table, &graphs, length).unwrap();
                match oracle.solve(&formula).unwrap() {
                    Verdict::Satisfiable(model) => {
                        assert!(expected.contains(&length), "{instance} at {length}");
                        assert_eq!(solution_length(&model, &table, &graphs), Ok(length));

                        let paths = paths_from_model(&model, &table, &graphs, length).unwrap();
                        assert_eq!(paths[0].length(), length);
                        assert!(paths[0].is_accepting_in(&graphs[0]));
                    }
                    Verdict::Unsatisfiable => {
                        assert!(!expected.contains(&length), "{instance} at {length}")
                    }
                    Verdict::Unknown => panic!("No verdict on {instance} at {length}"),
                }
            }
        }
    }
}

mod collections {
    use super::*;

    #[test]
    fn global_decision_matches_enumeration() {
        let mut rng = StdRng::seed_from_u64(1729);

        for instance in 0..32 {
            let count = rng.random_range(2..=3);
            let graphs = (0..count)
                .map(|index| random_graph(&mut rng, &format!("g{instance}_{index}"), 6, 0.4))
                .collect::<Vec<_>>();
            let expected = common_lengths(&graphs);

            let decision = decide(&graphs, Config::default());
            match expected.is_empty() {
                true => assert_eq!(decision.report(), Report::Unsatisfiable, "{instance}"),
                false => {
                    assert_eq!(decision.report(), Report::Satisfiable, "{instance}");
                    let witness = decision.witnesses().next().unwrap();
                    assert!(expected.contains(&witness.length), "{instance}");
                    for (path, graph) in witness.paths.iter().zip(&graphs) {
                        assert!(path.is_accepting_in(graph));
                        assert_eq!(path.length(), witness.length);
                    }
                }
            }

            assert_eq!(witnessed_lengths(&graphs), expected, "{instance}");

            let mut config = Config::default();
            config.prefilter.value = true;
            assert_eq!(
                decide(&graphs, config).report(),
                decision.report(),
                "{instance}"
            );
        }
    }
}

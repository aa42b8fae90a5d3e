use equal_path::{
    config::Config,
    oracle::varisat::VarisatOracle,
    procedures::Session,
    render,
    reports::Report,
    structures::graph::{Graph, GraphSource},
};

mod common;
use common::*;

mod fixtures {
    use super::*;

    fn all_fixtures() -> Vec<Graph> {
        let pattern = graphs_path().join("*.dot");
        let mut graphs = Vec::default();
        for entry in glob::glob(pattern.to_str().unwrap()).unwrap() {
            graphs.push(load_graph(&entry.unwrap()));
        }
        graphs
    }

    #[test]
    fn each_fixture_reads() {
        let graphs = all_fixtures();
        assert_eq!(graphs.len(), 7);
        for graph in &graphs {
            assert!(graph.order() > 0, "{}", graph.name());
        }
    }

    #[test]
    fn lengths_match_enumeration() {
        for graph in all_fixtures() {
            let graphs = [graph];
            assert_eq!(
                witnessed_lengths(&graphs),
                accepting_lengths(&graphs[0]),
                "{}",
                graphs[0].name()
            );
        }
    }

    #[test]
    fn known_lengths() {
        let known: [(&str, &[usize]); 7] = [
            ("line", &[2]),
            ("triangle", &[1, 2]),
            ("even", &[2, 4]),
            ("odd", &[1, 3]),
            ("dead_end", &[]),
            ("loop", &[0]),
            ("crossing", &[3, 4]),
        ];
        for (name, lengths) in known {
            let graph = fixture(name);
            assert_eq!(
                accepting_lengths(&graph).into_iter().collect::<Vec<_>>(),
                lengths.to_vec(),
                "{name}"
            );
        }
    }
}

mod rendering {
    use super::*;

    #[test]
    fn dot_round_trip() {
        let graphs = [fixture("crossing")];
        let mut session =
            Session::new(Config::default(), &graphs, VarisatOracle::default()).unwrap();
        let decision = session.decide().unwrap();
        assert_eq!(decision.report(), Report::Satisfiable);
        let witness = decision.witnesses().next().unwrap();

        let dir = std::env::temp_dir().join(format!("equal_path_render_{}", std::process::id()));
        let file = render::write_dot(&dir, "crossing", &graphs, witness).unwrap();
        assert_eq!(
            file.file_name().unwrap().to_string_lossy(),
            format!("crossing-l{}.dot", witness.length)
        );

        let read = load_graph(&file);
        assert_eq!(read.order(), graphs[0].order());
        assert_eq!(read.size(), graphs[0].size());
        for vertex in 0..read.order() {
            assert_eq!(read.name_of(vertex), graphs[0].name_of(vertex));
            assert_eq!(read.is_source(vertex), graphs[0].is_source(vertex));
            assert_eq!(read.is_target(vertex), graphs[0].is_target(vertex));
            for other in 0..read.order() {
                assert_eq!(read.is_edge(vertex, other), graphs[0].is_edge(vertex, other));
            }
        }

        let text = std::fs::read_to_string(&file).unwrap();
        let marked = text.lines().filter(|line| line.contains("color=blue")).count();
        assert_eq!(marked, witness.length);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn listing() {
        let graphs = [fixture("line"), fixture("triangle")];
        let mut session =
            Session::new(Config::default(), &graphs, VarisatOracle::default()).unwrap();
        let decision = session.decide().unwrap();
        let witness = decision.witnesses().next().unwrap();

        assert_eq!(
            render::listing(&graphs, witness),
            "line: s -> a -> t\ntriangle: s -> m -> t\n"
        );
    }
}

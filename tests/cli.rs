use std::{
    path::{Path, PathBuf},
    process::{self, Output},
};

use equal_path::structures::graph::GraphSource;

mod common;
use common::*;

const BIN: &str = env!("CARGO_BIN_EXE_equal_path");

fn graph_file(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("graphs")
        .join(format!("{name}.dot"))
        .to_string_lossy()
        .into_owned()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("equal_path_cli_{}_{name}", process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) -> Output {
    match process::Command::new(BIN).args(args).output() {
        Ok(output) => output,
        Err(e) => panic!("Failed to run {BIN}: {e}"),
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lines of output other than comments.
fn decision_lines(output: &Output) -> Vec<String> {
    stdout(output)
        .lines()
        .filter(|line| !line.starts_with("c "))
        .map(|line| line.to_owned())
        .collect()
}

mod decisions {
    use super::*;

    #[test]
    fn usage_without_graphs() {
        let output = run(&[]);
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).contains("Usage"));
    }

    #[test]
    fn each_length_separately() {
        let output = run(&["-s", "-a", "-t", &graph_file("triangle")]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            decision_lines(&output),
            vec![
                "For k = 0:",
                "No",
                "For k = 1:",
                "Yes",
                "triangle: s -> t",
                "For k = 2:",
                "Yes",
                "triangle: s -> m -> t",
            ]
        );
    }

    #[test]
    fn decreasing_stops_at_first_yes() {
        let output = run(&["-s", "-d", &graph_file("triangle")]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(decision_lines(&output), vec!["For k = 2:", "Yes"]);
    }

    #[test]
    fn global_answers() {
        let output = run(&["-t", &graph_file("triangle"), &graph_file("line")]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            decision_lines(&output),
            vec!["Yes", "triangle: s -> m -> t", "line: s -> a -> t"]
        );

        let output = run(&["-p", &graph_file("even"), &graph_file("odd")]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(decision_lines(&output), vec!["No"]);
    }

    #[test]
    fn dot_files_written() {
        let dir = scratch_dir("dot");
        let (triangle, line) = (graph_file("triangle"), graph_file("line"));
        let output = process::Command::new(BIN)
            .args(["-f", "-o", "out", triangle.as_str(), line.as_str()])
            .current_dir(&dir)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(0));

        let written = dir.join("sol").join("out-l2.dot");
        let drawing = load_graph(&written);
        assert_eq!(drawing.order(), 6);
        assert_eq!(drawing.size(), 3 + 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}

mod dimacs {
    use super::*;

    /// Each DIMACS block of `text`, as the header and the clauses that follow.
    fn blocks(text: &str) -> Vec<((usize, usize), Vec<Vec<i64>>)> {
        let mut blocks = Vec::default();
        let mut lines = text.lines();
        while let Some(line) = lines.next() {
            let Some(header) = line.strip_prefix("p cnf ") else {
                continue;
            };
            let counts = header
                .split_whitespace()
                .map(|count| count.parse::<usize>().unwrap())
                .collect::<Vec<_>>();
            let clauses = (0..counts[1])
                .map(|_| {
                    lines
                        .next()
                        .unwrap()
                        .split_whitespace()
                        .map(|literal| literal.parse::<i64>().unwrap())
                        .filter(|literal| *literal != 0)
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            blocks.push(((counts[0], counts[1]), clauses));
        }
        blocks
    }

    #[test]
    fn headers_match_the_clauses() {
        // Lengths are prefiltered in descending order, so only the atoms allocated first remain.
        let output = run(&["-p", "-d", "--dimacs", &graph_file("line")]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(decision_lines(&output).last().map(|line| line.as_str()), Some("Yes"));

        let blocks = blocks(&stdout(&output));
        assert_eq!(blocks.len(), 4);

        for ((atoms, _), clauses) in blocks {
            let greatest = clauses
                .iter()
                .flatten()
                .map(|literal| literal.unsigned_abs() as usize)
                .max()
                .unwrap();
            assert_eq!(atoms, greatest);
        }
    }
}

mod failures {
    use super::*;

    fn scratch_graph(name: &str, dot: &str) -> String {
        let file = scratch_dir(name).join(format!("{name}.dot"));
        std::fs::write(&file, dot).unwrap();
        file.to_string_lossy().into_owned()
    }

    #[test]
    fn missing_file() {
        let output = run(&["tests/graphs/absent.dot"]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn malformed_graph() {
        let file = scratch_graph("malformed", "digraph g {\n a -> ;\n}\n");
        let output = run(&[&file]);
        assert_eq!(output.status.code(), Some(1));
        assert!(decision_lines(&output).is_empty());
    }

    #[test]
    fn graph_without_source() {
        let file = scratch_graph("sourceless", "digraph g { a -> b; b [final=1]; }\n");
        let output = run(&[&graph_file("line"), &file]);
        assert_eq!(output.status.code(), Some(1));
        assert!(decision_lines(&output).is_empty());
    }

    #[test]
    fn rejected_options() {
        let output = run(&["--output=.dot", &graph_file("line")]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).contains("output name"));

        let output = run(&["--formula-limit", "0", &graph_file("line")]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn oversize_formula() {
        let output = run(&["--formula-limit", "5", &graph_file("line")]);
        assert_eq!(output.status.code(), Some(1));
        assert!(decision_lines(&output).is_empty());
    }
}

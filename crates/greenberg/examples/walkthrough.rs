//! Walk a few small graphs through the Greenberg check.
//!
//! Purpose
//! - Show each verdict once: satisfied, not satisfied, nonplanar, not biconnected.
//! - Print the faces and the witness so the partition can be checked by hand.
//!
//! Run with `cargo run -p greenberg --example walkthrough`.

use greenberg::api::{check_eligibility, GreenbergChecker, Graph, Verdict};

fn cube() -> Graph {
    let mut g = Graph::new();
    for (u, v) in [
        ("000", "001"),
        ("000", "010"),
        ("000", "100"),
        ("001", "011"),
        ("001", "101"),
        ("010", "011"),
        ("010", "110"),
        ("011", "111"),
        ("100", "101"),
        ("100", "110"),
        ("101", "111"),
        ("110", "111"),
    ] {
        g.add_edge(u, v, 1.0);
    }
    g
}

fn main() {
    let k23 = Graph::from_edges([
        ("a", "x"),
        ("a", "y"),
        ("a", "z"),
        ("b", "x"),
        ("b", "y"),
        ("b", "z"),
    ]);
    let mut k5 = Graph::new();
    let labels = ["1", "2", "3", "4", "5"];
    for (i, u) in labels.iter().enumerate() {
        for v in &labels[i + 1..] {
            k5.add_edge(u, v, 1.0);
        }
    }
    let bowtie = Graph::from_edges([
        ("a", "b"),
        ("b", "c"),
        ("c", "a"),
        ("c", "d"),
        ("d", "e"),
        ("e", "c"),
    ]);

    let checker = GreenbergChecker::new();
    for (name, g) in [("cube", cube()), ("K2,3", k23), ("K5", k5), ("bowtie", bowtie)] {
        println!("== {name}: {} vertices, {} edges", g.vertex_count(), g.edge_count());
        let report = match checker.run(&g) {
            Ok(report) => report,
            Err(e) => {
                println!("   error: {e}");
                continue;
            }
        };
        if let Some(faces) = &report.faces {
            for face in faces {
                println!("   face k={} {face}", face.size());
            }
        }
        println!("   verdict: {}", report.verdict);
        if let Verdict::Satisfied(p) = &report.verdict {
            let side = |fs: &[greenberg::Face]| {
                fs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            };
            println!("   inside : {}", side(&p.inside));
            println!("   outside: {}", side(&p.outside));
        }
        println!("   eligibility: {:?}", check_eligibility(&g, &checker));
    }
}

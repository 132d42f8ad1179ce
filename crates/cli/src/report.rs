use anyhow::{Context, Result};
use greenberg::api::{
    dirac_condition, ore_condition, CheckError, CheckReport, ConnectivityOracle, Eligibility,
    Face, Graph, Lowpoint, OuterFace, OuterFaceSource, SearchStats, Stage,
};
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Eligibility of a finished (or failed) check.
///
/// Same answer as `check_eligibility`, without running the checker a second time.
pub fn eligibility(graph: &Graph, result: &Result<CheckReport, CheckError>) -> Eligibility {
    if ore_condition(graph) {
        return Eligibility::Guaranteed;
    }
    match result {
        Ok(report) => report.verdict.eligibility(),
        Err(_) => Eligibility::Unknown,
    }
}

/// JSON document for one check: verdict, faces, witness, solver counters, outer face.
pub fn check_document(
    graph: &Graph,
    result: &Result<CheckReport, CheckError>,
    outer: Option<&OuterFace>,
) -> Value {
    let degree = json!({
        "dirac": dirac_condition(graph),
        "ore": ore_condition(graph),
    });
    let hamiltonian = eligibility_name(eligibility(graph, result));
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            return json!({
                "verdict": Value::Null,
                "eligibility": hamiltonian,
                "degree_conditions": degree,
                "error": e.to_string(),
            })
        }
    };
    let faces: Vec<String> = report
        .faces
        .iter()
        .flat_map(|set| set.iter().map(Face::to_string))
        .collect();
    let partition = report.verdict.witness().map(|p| {
        json!({
            "inside": p.inside.iter().map(Face::to_string).collect::<Vec<_>>(),
            "outside": p.outside.iter().map(Face::to_string).collect::<Vec<_>>(),
            "sum": p.inside_sum(),
        })
    });
    json!({
        "verdict": report.verdict.name(),
        "eligibility": hamiltonian,
        "degree_conditions": degree,
        "stage": stage_name(report.stage),
        "faces": faces,
        "greenberg_sum": report.faces.as_ref().map(|set| set.greenberg_sum()),
        "partition": partition,
        "stats": report.stats.as_ref().map(stats_json),
        "outer_face": outer.map(outer_json),
    })
}

fn stats_json(stats: &SearchStats) -> Value {
    json!({
        "target": stats.target,
        "candidates": stats.candidates,
        "searched": stats.searched,
        "pruned": stats.pruned,
    })
}

fn outer_json(outer: &OuterFace) -> Value {
    match &outer.source {
        OuterFaceSource::Hull => json!({"index": outer.index, "source": "hull"}),
        OuterFaceSource::LargestFace { cause } => json!({
            "index": outer.index,
            "source": "largest_face",
            "cause": cause.to_string(),
        }),
    }
}

pub fn eligibility_name(e: Eligibility) -> &'static str {
    match e {
        Eligibility::Guaranteed => "guaranteed",
        Eligibility::Possible => "possible",
        Eligibility::Excluded => "excluded",
        Eligibility::Unknown => "unknown",
    }
}

fn stage_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Planarity => "planarity",
        Stage::Biconnectivity => "biconnectivity",
        Stage::Faces => "faces",
        Stage::GreenbergSum => "greenberg_sum",
        Stage::Partition => "partition",
    }
}

/// One-line summary for the terminal.
pub fn summary(graph: &Graph, result: &Result<CheckReport, CheckError>) -> String {
    let verdict = match result {
        Ok(report) => report.verdict.to_string(),
        Err(e) => format!("no verdict ({e})"),
    };
    format!(
        "{verdict} (hamiltonian: {})",
        eligibility_name(eligibility(graph, result))
    )
}

/// Plain-text dump of the graph state followed by the check outcome.
pub fn text_report(graph: &Graph, result: &Result<CheckReport, CheckError>) -> String {
    let lowpoint = Lowpoint;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    out.push_str(&graph.to_string());
    let cuts = lowpoint.articulation_points(graph);
    let _ = writeln!(out, "articulation points: [{}]", cuts.join(", "));
    let mut bridges: Vec<String> = lowpoint
        .bridges(graph)
        .iter()
        .map(|e| {
            let (u, v) = e.key();
            format!("{u}-{v}")
        })
        .collect();
    bridges.sort();
    let _ = writeln!(out, "bridges: [{}]", bridges.join(", "));
    let _ = writeln!(
        out,
        "dirac: {}, ore: {}",
        dirac_condition(graph),
        ore_condition(graph)
    );
    if let Ok(report) = result {
        for face in report.faces.iter().flatten() {
            let _ = writeln!(out, "face k={} {face}", face.size());
        }
    }
    out.push_str(&summary(graph, result));
    out.push('\n');
    out
}

/// Write `doc` to `out`, creating parent directories.
///
/// The written document carries a `provenance` block with the crate version, the
/// build's `GIT_COMMIT` (if set) and the run parameters.
pub fn write_report(out: &Path, doc: &Value, params: Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let mut doc = doc.clone();
    doc["provenance"] = json!({
        "version": greenberg::VERSION,
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "params": params,
    });
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

mod graph_file;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use greenberg::prelude::{
    select_outer_face, CircleLayout, FixedLayout, GreenbergChecker, LayoutOracle, SearchBudget,
    SolverCfg, Strategy,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

use graph_file::GraphFile;

#[derive(Parser)]
#[command(name = "greenberg")]
#[command(about = "Greenberg's Hamiltonicity condition for planar graphs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check a JSON graph file and print (or write) a JSON report
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Write the report (with a provenance block) here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Exhaustive)]
        strategy: StrategyArg,
        /// Skip the subset-sum reachability pass
        #[arg(long)]
        no_prune: bool,
        #[arg(long)]
        max_candidates: Option<u64>,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// List the faces of the default embedding
    Faces {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the graph state, cut vertices, bridges, faces and verdict as text
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Exhaustive,
    SubsetSum,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::SubsetSum => Strategy::SubsetSum,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            input,
            out,
            strategy,
            no_prune,
            max_candidates,
            timeout_ms,
        } => {
            let budget = SearchBudget {
                max_candidates,
                deadline: timeout_ms
                    .map(|ms| std::time::Instant::now() + Duration::from_millis(ms)),
                cancel: None,
            };
            let cfg = SolverCfg {
                strategy: strategy.into(),
                prune_unreachable: !no_prune,
                budget,
            };
            check(input, out, cfg)
        }
        Action::Faces { input } => faces(input),
        Action::Report { input } => text(input),
    }
}

fn check(input: PathBuf, out: Option<PathBuf>, cfg: SolverCfg) -> Result<()> {
    let file = GraphFile::read(&input)?;
    let graph = file.to_graph();
    tracing::info!(
        input = %input.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "check"
    );
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "strategy": format!("{:?}", cfg.strategy),
        "prune_unreachable": cfg.prune_unreachable,
        "max_candidates": cfg.budget.max_candidates,
    });
    let result = GreenbergChecker::new().with_cfg(cfg).run(&graph);
    let outer = match &result {
        Ok(r) => r.faces.as_ref().and_then(|faces| {
            let positions = match file.positions() {
                Some(positions) => FixedLayout { positions }.positions(&graph),
                None => CircleLayout::default().positions(&graph),
            };
            select_outer_face(faces, positions)
        }),
        Err(_) => None,
    };
    match &result {
        Ok(_) => tracing::info!("{}", report::summary(&graph, &result)),
        Err(e) => tracing::warn!(error = %e, "check did not finish"),
    }
    let doc = report::check_document(&graph, &result, outer.as_ref());
    match out {
        Some(out) => {
            report::write_report(&out, &doc, params)?;
            tracing::info!(out = %out.display(), "report written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn faces(input: PathBuf) -> Result<()> {
    let graph = GraphFile::read(&input)?.to_graph();
    let faces = graph
        .faces()
        .with_context(|| format!("embedding {}", input.display()))?;
    let Some(faces) = faces else {
        println!("not planar");
        return Ok(());
    };
    for face in faces {
        println!("{:>3}  {face}", face.size());
    }
    println!("S = {}", faces.greenberg_sum());
    Ok(())
}

fn text(input: PathBuf) -> Result<()> {
    let graph = GraphFile::read(&input)?.to_graph();
    let result = GreenbergChecker::new().run(&graph);
    print!("{}", report::text_report(&graph, &result));
    Ok(())
}

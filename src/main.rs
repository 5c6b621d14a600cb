use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, get_args};
use culvert_rs::config::{CulvertProject, load_project, save_project};
use culvert_rs::io::csv::{create_csv_writer, write_rating_curve};
use culvert_rs::io::results::CulvertResults;
use culvert_rs::samples::{self, SAMPLES};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = get_args();

    if args.list_samples {
        for sample in &SAMPLES {
            println!("{:<26} {}", sample.id, sample.name);
            println!("{:<26} {}", "", sample.description);
        }
        return Ok(());
    }

    let mut project = resolve_project(&args)?;
    if let Some(ks) = args.ks {
        project.ks = Some(ks);
    }
    debug!(?project, "Resolved project");

    if let Some(path) = &args.save_project {
        save_project(path, &project)?;
        info!("Project saved to {:?}", path);
    }

    let results = CulvertResults::compute(&project, args.steps)
        .context("Culvert calculation failed")?;

    let ctrl = &results.design.controlling;
    info!(
        "Design point: Q = {} cfs, HW = {:.3} ft ({} control), V = {:.2} ft/s",
        project.design_q, ctrl.hw, ctrl.condition, ctrl.velocity
    );
    info!("Rating curve: {} points", results.curve.len());

    if args.format.wants_summary() {
        print!("{}", results);
    }

    if args.format.wants_csv() {
        let mut wtr = create_csv_writer(&args.csv)
            .map_err(|e| anyhow!("Failed to create CSV file {:?}: {}", args.csv, e))?;
        write_rating_curve(&mut wtr, &results.curve, project.design_q, ctrl)
            .map_err(|e| anyhow!("Failed to write CSV file {:?}: {}", args.csv, e))?;
        info!("Rating curve saved to {:?}", args.csv);
    }

    Ok(())
}

fn resolve_project(args: &Args) -> Result<CulvertProject> {
    if let Some(id) = &args.sample {
        let sample = samples::find(id).ok_or_else(|| {
            anyhow!("Unknown sample {:?}; run with --list-samples to see the options", id)
        })?;
        info!("Using sample project: {}", sample.name);
        return Ok(sample.project);
    }

    let path = args
        .project
        .as_ref()
        .ok_or_else(|| anyhow!("No project file given"))?;
    let project = load_project(path)?;
    info!("Loaded project from {:?}", path);
    Ok(project)
}

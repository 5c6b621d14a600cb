use clap::Parser;
use culvert_rs::config::OutputFormat;
use culvert_rs::rating_curve::DEFAULT_STEPS;
use std::path::PathBuf;

/// Culvert headwater rating per FHWA HDS-5
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON project file describing the culvert
    #[arg(required_unless_present_any = ["sample", "list_samples"], conflicts_with = "sample")]
    pub project: Option<PathBuf>,

    /// Use a built-in sample project instead of a file
    #[arg(long)]
    pub sample: Option<String>,

    /// Print the built-in samples and exit
    #[arg(long)]
    pub list_samples: bool,

    /// Number of intervals between 10% and 150% of design flow
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Slope correction Ks, overrides the project value
    #[arg(long, allow_hyphen_values = true)]
    pub ks: Option<f64>,

    /// What to emit
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// CSV output path
    #[arg(long, default_value = "culvert_rating_curve.csv")]
    pub csv: PathBuf,

    /// Write the resolved project back out as JSON
    #[arg(long)]
    pub save_project: Option<PathBuf>,
}

pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample_run() {
        let args = Args::try_parse_from([
            "culvert_rs",
            "--sample",
            "highway-box",
            "--steps",
            "10",
            "--ks",
            "-0.5",
            "--format",
            "both",
        ])
        .unwrap();
        assert_eq!(args.sample.as_deref(), Some("highway-box"));
        assert_eq!(args.steps, 10);
        assert_eq!(args.ks, Some(-0.5));
        assert_eq!(args.format, OutputFormat::Both);
    }

    #[test]
    fn needs_a_project_source() {
        assert!(Args::try_parse_from(["culvert_rs"]).is_err());
        assert!(Args::try_parse_from(["culvert_rs", "--list-samples"]).is_ok());
        let args = Args::try_parse_from(["culvert_rs", "project.json"]).unwrap();
        assert_eq!(args.steps, DEFAULT_STEPS);
        assert_eq!(args.format, OutputFormat::Summary);
    }
}

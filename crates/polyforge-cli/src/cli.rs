use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "polyforge - builds 3D structure files of linear polymers, polypeptides, and polymer-peptide conjugates from a catalog of monomer building blocks.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the sequence specification file (NAME:RES:INV:REPS lines).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub sequence: PathBuf,

    /// Path to the monomer catalog in JSON format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub monomers: PathBuf,

    /// Path for the output structure file.
    #[arg(short, long, value_name = "PATH", default_value = "out.pdb")]
    pub output: PathBuf,

    /// Path to a TOML file with generation parameters; CLI flags override it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Record explicit intra-residue bonds in addition to the chain bonds.
    #[arg(short, long)]
    pub explicit_bonds: bool,

    /// Keep duplicate bond records instead of dropping them.
    #[arg(long)]
    pub keep_duplicate_bonds: bool,

    /// Override the minimum allowed distance between a new monomer and all
    /// placed atoms.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_distance: Option<f64>,

    /// Override the z-bias damping factor of the random walk.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub damping: Option<f64>,

    /// Override the number of random draws allowed per placement.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Override the number of whole-structure generation attempts.
    #[arg(long, value_name = "INT")]
    pub max_cycles: Option<usize>,

    /// Seed the random number generator for reproducible output.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_minimal_invocation() {
        let cli = Cli::parse_from(["polyforge", "-s", "seq.txt", "-m", "monomers.json"]);

        assert_eq!(cli.sequence, PathBuf::from("seq.txt"));
        assert_eq!(cli.monomers, PathBuf::from("monomers.json"));
        assert_eq!(cli.output, PathBuf::from("out.pdb"));
        assert!(!cli.explicit_bonds);
        assert!(!cli.keep_duplicate_bonds);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_overrides_and_toggles() {
        let cli = Cli::parse_from([
            "polyforge",
            "--sequence",
            "seq.txt",
            "--monomers",
            "monomers.json",
            "--output",
            "chain.pdb",
            "--explicit-bonds",
            "--keep-duplicate-bonds",
            "--min-distance",
            "1.5",
            "--max-cycles",
            "10",
            "--seed",
            "42",
            "-vv",
        ]);

        assert_eq!(cli.output, PathBuf::from("chain.pdb"));
        assert!(cli.explicit_bonds);
        assert!(cli.keep_duplicate_bonds);
        assert_eq!(cli.min_distance, Some(1.5));
        assert_eq!(cli.max_cycles, Some(10));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn missing_required_arguments_fail_to_parse() {
        assert!(Cli::try_parse_from(["polyforge", "-s", "seq.txt"]).is_err());
        assert!(Cli::try_parse_from(["polyforge", "-m", "monomers.json"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(
            Cli::try_parse_from(["polyforge", "-s", "a", "-m", "b", "-q", "-v"]).is_err()
        );
    }
}

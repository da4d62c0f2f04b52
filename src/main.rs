use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use doxtree::{Config, DoxygenFile, Environment, SourceLocation, VisibilityPolicy};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn cli() -> Command {
    Command::new("doxtree")
        .about("Render Doxygen XML for C sources as a documentation tree")
        .arg(
            Arg::new("files")
                .help("Source file names to look up in the Doxygen index, e.g. sum.h")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("doxygen-xml")
                .long("doxygen-xml")
                .short('x')
                .value_name("DIR")
                .help("Directory whose xml/ subdirectory holds the Doxygen output")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("skip-non-public")
                .long("skip-non-public")
                .action(ArgAction::SetTrue)
                .help("Leave out non-public members instead of failing"),
        )
        .arg(
            Arg::new("warn-unmatched")
                .long("warn-unmatched")
                .action(ArgAction::SetTrue)
                .help("Warn when a file is not in the Doxygen index"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Exit with an error if any warning was reported"),
        )
}

fn load_config(matches: &clap::ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("doxygen-xml") {
        config = config.with_doxygen_xml(dir);
    }
    if matches.get_flag("skip-non-public") {
        config = config.with_non_public(VisibilityPolicy::Skip);
    }
    if matches.get_flag("warn-unmatched") {
        config = config.with_warn_unmatched(true);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doxtree=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let env = Environment::new(config);

    let mut nodes = Vec::new();
    let mut warnings = Vec::new();
    for (position, filename) in matches
        .get_many::<String>("files")
        .into_iter()
        .flatten()
        .enumerate()
    {
        let directive =
            DoxygenFile::new(filename.as_str(), SourceLocation::new("<command line>", position + 1));
        let rendering = directive
            .run(&env)
            .with_context(|| format!("Failed to render {}", filename))?;
        nodes.extend(rendering.nodes);
        warnings.extend(rendering.warnings);
    }

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&nodes)?),
        _ => print!("{}", doxtree::writer::to_text(&nodes)),
    }

    if matches.get_flag("strict") && !warnings.is_empty() {
        bail!("{} warning(s) reported", warnings.len());
    }
    Ok(())
}

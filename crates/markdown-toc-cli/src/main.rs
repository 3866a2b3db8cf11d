use anyhow::{Context, Result};
use markdown_toc_config::Config;
use markdown_toc_engine::{
    Heading, generate_toc, node_count, read_headings, read_headings_from_path, write_toc,
};
use std::{env, io, path::PathBuf, process};

/// Where the heading list comes from
#[derive(Debug, PartialEq)]
enum Input {
    Stdin,
    File(PathBuf),
}

/// Pick the input from CLI arguments, falling back to the config file, then stdin.
/// Returns `None` for an invalid argument list.
fn parse_args(args: &[String], config: &Config) -> Option<Input> {
    match args {
        [_] => Some(
            config
                .default_input
                .clone()
                .map_or(Input::Stdin, Input::File),
        ),
        [_, path] if path == "-" => Some(Input::Stdin),
        [_, path] => Some(Input::File(PathBuf::from(path))),
        _ => None,
    }
}

fn read_input(input: &Input) -> Result<Vec<Heading>> {
    match input {
        Input::Stdin => {
            read_headings(io::stdin().lock()).context("Failed to read headings from stdin")
        }
        Input::File(path) => read_headings_from_path(path)
            .with_context(|| format!("Failed to read headings from '{}'", path.display())),
    }
}

fn run(input: &Input, config: &Config) -> Result<()> {
    let headings = read_input(input)?;
    let toc = generate_toc(&headings);
    log::info!(
        "Placed {} of {} headings, {} at top level",
        node_count(&toc),
        headings.len(),
        toc.len()
    );

    write_toc(io::stdout().lock(), &toc, config.pretty)
        .context("Failed to write table of contents")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "markdown-toc".to_string());

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(input) = parse_args(&args, &config) else {
        eprintln!("Usage: {program_name} [headings.json | -]");
        eprintln!("Reads stdin when no file is given and no default_input is configured");
        eprintln!("in {}", config_path.display());
        process::exit(1);
    };

    if let Err(e) = run(&input, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_no_argument_without_config_reads_stdin() {
        let input = parse_args(&args(&["markdown-toc"]), &Config::default());
        assert_eq!(input, Some(Input::Stdin));
    }

    #[test]
    fn test_no_argument_uses_configured_default() {
        let config = Config {
            default_input: Some(PathBuf::from("/docs/headings.json")),
            ..Config::default()
        };
        let input = parse_args(&args(&["markdown-toc"]), &config);
        assert_eq!(input, Some(Input::File(PathBuf::from("/docs/headings.json"))));
    }

    #[test]
    fn test_argument_overrides_config() {
        let config = Config {
            default_input: Some(PathBuf::from("/docs/headings.json")),
            ..Config::default()
        };
        let input = parse_args(&args(&["markdown-toc", "other.json"]), &config);
        assert_eq!(input, Some(Input::File(PathBuf::from("other.json"))));
    }

    #[test]
    fn test_dash_means_stdin() {
        let input = parse_args(&args(&["markdown-toc", "-"]), &Config::default());
        assert_eq!(input, Some(Input::Stdin));
    }

    #[test]
    fn test_too_many_arguments() {
        let input = parse_args(&args(&["markdown-toc", "a.json", "b.json"]), &Config::default());
        assert_eq!(input, None);
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let input = Input::File(PathBuf::from("/this/path/does/not/exist.json"));
        let error = read_input(&input).unwrap_err();
        assert!(format!("{error:#}").contains("/this/path/does/not/exist.json"));
    }
}

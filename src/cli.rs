use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use subdomain_cli::subdomain::{extract_subdomain_bytes, USAGE};

#[derive(Parser, Debug)]
#[command(
    name = "extract-subdomain",
    about = "Print the last `/`-separated segment of a branch name",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Branch name, e.g. `feature/team1/payments`. Exactly one is accepted.
    #[arg(
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true,
        value_parser = clap::value_parser!(OsString)
    )]
    branch_names: Vec<OsString>,
}

impl Cli {
    /// Every token after the program name is a branch name, including `--` and flag-like ones.
    fn parse_literal<I>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args
            .next()
            .unwrap_or_else(|| OsString::from("extract-subdomain"));
        let argv = [program, OsString::from("--")].into_iter().chain(args);
        Self::try_parse_from(argv)
    }
}

pub(crate) fn run() -> Result<ExitCode> {
    let branch_name = match Cli::parse_literal(std::env::args_os()) {
        Ok(cli) => match <[OsString; 1]>::try_from(cli.branch_names) {
            Ok([branch_name]) => branch_name,
            Err(given) => {
                tracing::debug!(count = given.len(), "wrong number of arguments");
                return usage();
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "unparseable arguments");
            return usage();
        }
    };

    let subdomain = extract_subdomain_bytes(branch_name.as_encoded_bytes());
    tracing::debug!(
        branch_name = %branch_name.to_string_lossy(),
        subdomain = %String::from_utf8_lossy(subdomain),
        "derived subdomain"
    );
    print_line(subdomain)?;
    Ok(ExitCode::SUCCESS)
}

fn usage() -> Result<ExitCode> {
    print_line(USAGE.as_bytes())?;
    Ok(ExitCode::from(1))
}

fn print_line(line: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(line).context("Failed to write to stdout")?;
    stdout.write_all(b"\n").context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::Cli;

    fn parse(args: &[&str]) -> Vec<OsString> {
        let argv = std::iter::once("extract-subdomain")
            .chain(args.iter().copied())
            .map(OsString::from);
        Cli::parse_literal(argv).unwrap().branch_names
    }

    #[test]
    fn end_of_options_marker_is_an_argument() {
        assert_eq!(parse(&["--"]), ["--"]);
        assert_eq!(parse(&["--", "a/b"]), ["--", "a/b"]);
        assert_eq!(parse(&["a/b", "--"]), ["a/b", "--"]);
    }

    #[test]
    fn flag_like_tokens_are_arguments() {
        assert_eq!(parse(&["--help"]), ["--help"]);
        assert_eq!(parse(&["-V", "--version"]), ["-V", "--version"]);
        assert!(parse(&[]).is_empty());
    }
}

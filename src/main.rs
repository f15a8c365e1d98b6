mod cli;

use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use log::{error, info, warn};

use cli::Cli;
use football_pages::config::{normalize_flags, read_args_file, Config, Selection, Theme};
use football_pages::progress::SpinnerHelper;
use football_pages::service::api_url;
use football_pages::{generate, Error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = normalize_flags(std::env::args());
  if args.len() <= 1 {
    print_usage();
    return ExitCode::FAILURE;
  }

  let cli = match parse(args) {
    Ok(cli) => cli,
    Err(e) => return fail(e),
  };
  if cli.usage {
    print_usage();
    return ExitCode::SUCCESS;
  }

  let config = match config(cli) {
    Ok(config) => config,
    Err(e) => return fail(e),
  };
  let spinner = match SpinnerHelper::create("Fetching football data".to_string()) {
    Ok(spinner) => spinner,
    Err(e) => return fail(e),
  };

  let result = generate(&config, &spinner).await;
  spinner.finish_and_clear();

  match result {
    Ok(report) => {
      info!(
        "{} succeeded, {} failed, {} file(s) written to {}",
        report.succeeded(),
        report.failed(),
        report.files_written(),
        config.selection.output.display()
      );
      if report.failed() > 0 {
        warn!("Pages of {} failed unit(s) are missing", report.failed());
        ExitCode::FAILURE
      } else {
        ExitCode::SUCCESS
      }
    }
    Err(e) => fail(e),
  }
}

/// Parses the command line. `--file` swaps the whole command line for the file's arguments.
fn parse(args: Vec<String>) -> Result<Cli, Error> {
  let cli = Cli::try_parse_from(&args).unwrap_or_else(|e| e.exit());
  match &cli.file {
    None => Ok(cli),
    Some(path) => {
      let from_file = read_args_file(path)?;
      let program = args.into_iter().take(1);
      Ok(Cli::try_parse_from(program.chain(from_file)).unwrap_or_else(|e| e.exit()))
    }
  }
}

fn config(cli: Cli) -> Result<Config, Error> {
  let selection = Selection::new(
    cli.leagues,
    &cli.generate,
    cli.output,
    Theme::from_bootstrap_flag(cli.bootstrap),
  )?;
  Ok(Config {
    selection,
    api_url: cli.api_url.unwrap_or_else(api_url),
    api_key: cli.api_key,
    assets_dir: cli.assets,
    timeout: Duration::from_secs(cli.timeout),
  })
}

fn fail(e: Error) -> ExitCode {
  match e {
    Error::Selection(message) => {
      eprintln!("{message}\n");
      print_usage();
      ExitCode::from(2)
    }
    e => {
      error!("{e}");
      ExitCode::FAILURE
    }
  }
}

fn print_usage() {
  if let Err(e) = Cli::command().print_help() {
    error!("Could not print usage: {e}");
  }
}

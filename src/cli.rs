use std::path::PathBuf;

use clap::Parser;
use football_pages::config::DEFAULT_OUTPUT;

/// Generates static HTML pages (teams, fixtures, league tables, squads) for the chosen
/// leagues from the football-data.org API. Flags may be written with one dash
/// (`-leagues PD`) or two (`--leagues PD`).
#[derive(Parser)]
#[clap(name = "football-pages", version)]
pub(crate) struct Cli {
  /// Comma separated league captions or short codes (e.g. `PD,PPL` or
  /// `"Primera Division 2015/16"`). Unknown names are ignored.
  #[clap(long, value_delimiter = ',')]
  pub(crate) leagues: Vec<String>,
  /// Comma separated pages to generate: `teams`, `fixtures`, `leagueTable`, `players`.
  #[clap(long, value_delimiter = ',')]
  pub(crate) generate: Vec<String>,
  /// Directory the site is written to.
  #[clap(long, default_value = DEFAULT_OUTPUT)]
  pub(crate) output: PathBuf,
  /// Style the pages with bootstrap (`bootstrap.min.css`) instead of `main.css`.
  #[clap(long)]
  pub(crate) bootstrap: bool,
  /// JSON file holding the arguments, e.g. `{"-leagues": "PD", "-generate": ["teams"]}`.
  /// When given, it replaces every other flag on the command line.
  #[clap(long)]
  pub(crate) file: Option<PathBuf>,
  /// Print this help and exit.
  #[clap(long)]
  pub(crate) usage: bool,
  /// football-data.org API key, sent as `X-Auth-Token`. Without one the anonymous quota applies.
  #[clap(long, env = "FOOTBALL_DATA_API_KEY", default_value = "", hide_env_values = true)]
  pub(crate) api_key: String,
  /// Base URL of the API. [default: http://api.football-data.org/alpha]
  #[clap(long, env = "FOOTBALL_DATA_API_URL")]
  pub(crate) api_url: Option<String>,
  /// Directory holding the stylesheets that get copied into the site.
  #[clap(long, default_value = "assets")]
  pub(crate) assets: PathBuf,
  /// Per-request timeout in seconds.
  #[clap(long, default_value_t = 30)]
  pub(crate) timeout: u64,
}

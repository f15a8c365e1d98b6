//! Where every generated page lives in the output tree, and how pages link to each other.

use std::path::{Path, PathBuf};

pub const INDEX: &str = "Index";
pub const LEAGUES_DIR: &str = "leagues";
pub const TEAMS_DIR: &str = "teams";
pub const FIXTURES_DIR: &str = "fixtures";
pub const LEAGUE_TABLES_DIR: &str = "leagueTables";
pub const ASSETS_DIR: &str = "assets";
pub const EXTENSION: &str = "html";

/// "Hamburg SV" => "HamburgSV". Teams have no reliable code, so file names come from display names.
///
/// Path separators and leading dots are dropped too, so the result always stays a single file
/// name inside its directory.
pub fn formatted_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '\\'))
        .collect();
    kept.trim_start_matches('.').to_string()
}

pub fn league_page_name(short_code: &str) -> String {
    formatted_name(short_code)
}

pub fn team_page_name(team_name: &str) -> String {
    formatted_name(team_name)
}

pub fn players_page_name(team_name: &str) -> String {
    format!("{}Players", formatted_name(team_name))
}

pub fn file_name(base_name: &str) -> String {
    format!("{base_name}.{EXTENSION}")
}

/// Directory for pages placed under `dir`; an empty `dir` is the output root.
pub fn directory(root: &Path, dir: &str) -> PathBuf {
    if dir.is_empty() {
        root.to_path_buf()
    } else {
        root.join(dir)
    }
}

/// Link to a page, from a page sitting at the output root.
pub fn link_from_root(dir: &str, base_name: &str) -> String {
    format!("{dir}/{file}", file = file_name(base_name))
}

/// Link to a page, from a page sitting one directory below the output root.
pub fn link_from_nested(dir: &str, base_name: &str) -> String {
    format!("../{dir}/{file}", file = file_name(base_name))
}

pub fn stylesheet_link(stylesheet: &str, nested: bool) -> String {
    if nested {
        format!("../{ASSETS_DIR}/{stylesheet}")
    } else {
        format!("{ASSETS_DIR}/{stylesheet}")
    }
}

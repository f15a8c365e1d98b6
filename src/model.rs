use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::error::Error::Selection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub href: String,
}

impl Link {
    /// The href with any whitespace removed; the API has been seen to embed stray spaces.
    pub fn uri(&self) -> String {
        self.href.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLinks {
    pub teams: Link,
    pub fixtures: Link,
    pub league_table: Link,
}

/// A league in a given season, as listed by the `soccerseasons` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(rename = "_links")]
    pub links: SeasonLinks,
    pub caption: String,
    #[serde(rename = "league")]
    pub short_code: String,
    #[serde(rename = "numberOfTeams")]
    pub team_count: u32,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub number_of_games: Option<u32>,
}

impl Season {
    /// The link a kind is fetched from. Players go through the teams listing first.
    pub fn link(&self, kind: Kind) -> &Link {
        match kind {
            Kind::Teams | Kind::Players => &self.links.teams,
            Kind::Fixtures => &self.links.fixtures,
            Kind::LeagueTable => &self.links.league_table,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamLinks {
    pub players: Link,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_links")]
    pub links: TeamLinks,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest_url: Option<String>,
    #[serde(default)]
    pub squad_market_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teams {
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    InPlay,
    Finished,
    Postponed,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixtureResult {
    #[serde(default)]
    pub goals_home_team: Option<u32>,
    #[serde(default)]
    pub goals_away_team: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub date: DateTime<Utc>,
    pub status: FixtureStatus,
    pub matchday: u32,
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub result: Option<FixtureResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixtures {
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: u32,
    pub team_name: String,
    #[serde(default)]
    pub played_games: Option<u32>,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals: u32,
    #[serde(default)]
    pub goals_against: Option<u32>,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTable {
    pub league_caption: String,
    #[serde(default)]
    pub matchday: Option<u32>,
    pub standing: Vec<Standing>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Players {
    pub players: Vec<Player>,
}

/// The artifact categories a run can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Teams,
    Fixtures,
    LeagueTable,
    Players,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Teams, Kind::Fixtures, Kind::LeagueTable, Kind::Players];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Teams => "teams",
            Kind::Fixtures => "fixtures",
            Kind::LeagueTable => "leagueTable",
            Kind::Players => "players",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "teams" => Ok(Kind::Teams),
            "fixtures" => Ok(Kind::Fixtures),
            "leagueTable" => Ok(Kind::LeagueTable),
            "players" => Ok(Kind::Players),
            invalid => {
                let expected: Vec<&str> = Kind::ALL.iter().map(Kind::as_str).collect();
                Err(Selection(format!(
                    "unknown artifact `{invalid}`, expected one of {}",
                    expected.join(", ")
                )))
            }
        }
    }
}

/// A fetched body, typed by the kind it was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Teams { league: Season, teams: Teams },
    Fixtures { league: Season, fixtures: Fixtures },
    LeagueTable { league: Season, table: LeagueTable },
    Players { team: Team, players: Players },
}

use chrono::{Datelike, NaiveDate};

use crate::config::Theme;
use crate::html::{self, escape};
use crate::layout::{self, FIXTURES_DIR, INDEX, LEAGUES_DIR, LEAGUE_TABLES_DIR, TEAMS_DIR};
use crate::model::{Fixture, FixtureStatus, LeagueTable, Player, Resource, Season, Team};

pub const SCORE_PLACEHOLDER: &str = "—";

/// Inputs every page shares: the look, and the day ages are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: Theme,
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn new(theme: Theme, today: NaiveDate) -> Self {
        RenderContext { theme, today }
    }

    fn style(&self) -> Style {
        match self.theme {
            Theme::Plain => Style {
                container: None,
                heading: None,
                table: "center_content",
                table_wrapper: "center_content",
            },
            Theme::Bootstrap => Style {
                container: Some("text-center container"),
                heading: Some("text-center"),
                table: "table table-striped",
                table_wrapper: "table-responsive container",
            },
        }
    }

    fn head(&self, title: &str, nested: bool) -> String {
        let stylesheet = layout::stylesheet_link(self.theme.stylesheet(), nested);
        html::init_page(title, Some(&stylesheet))
    }

    fn body(&self, title: &str, nested: bool, content: &str) -> String {
        let style = self.style();
        let mut page = self.head(title, nested);
        page += &html::tag("body");
        page += &html::wrap("div", style.container, content);
        page + &html::close_page()
    }
}

struct Style {
    container: Option<&'static str>,
    heading: Option<&'static str>,
    table: &'static str,
    table_wrapper: &'static str,
}

/// One rendered file: its directory under the output root, its base name and its markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub dir: &'static str,
    pub base_name: String,
    pub html: String,
}

/// Pages produced by one fetched resource. Teams yield one page per team, the rest one page.
pub fn render(ctx: &RenderContext, resource: &Resource) -> Vec<Page> {
    match resource {
        Resource::Teams { league, teams } => teams
            .teams
            .iter()
            .map(|team| Page {
                dir: TEAMS_DIR,
                base_name: layout::team_page_name(&team.name),
                html: team_page(ctx, &league.caption, team),
            })
            .collect(),
        Resource::Fixtures { league, fixtures } => vec![Page {
            dir: FIXTURES_DIR,
            base_name: layout::league_page_name(&league.short_code),
            html: fixtures_page(ctx, league, &fixtures.fixtures),
        }],
        Resource::LeagueTable { league, table } => vec![Page {
            dir: LEAGUE_TABLES_DIR,
            base_name: layout::league_page_name(&league.short_code),
            html: league_table_page(ctx, table),
        }],
        Resource::Players { team, players } => vec![Page {
            dir: TEAMS_DIR,
            base_name: layout::players_page_name(&team.name),
            html: players_page(ctx, team, &players.players),
        }],
    }
}

/// The index page plus one landing page per selected league.
pub fn landing_pages(ctx: &RenderContext, leagues: &[Season]) -> Vec<Page> {
    let index = Page {
        dir: "",
        base_name: INDEX.to_string(),
        html: index_page(ctx, leagues),
    };
    std::iter::once(index)
        .chain(leagues.iter().map(|league| Page {
            dir: LEAGUES_DIR,
            base_name: layout::league_page_name(&league.short_code),
            html: league_page(ctx, league),
        }))
        .collect()
}

pub fn index_page(ctx: &RenderContext, leagues: &[Season]) -> String {
    let content: String = leagues
        .iter()
        .map(|league| {
            let link = layout::link_from_root(LEAGUES_DIR, &layout::league_page_name(&league.short_code));
            html::tag_content("h1", &html::anchor(&link, &league.caption))
        })
        .collect();
    ctx.body(INDEX, false, &content)
}

pub fn league_page(ctx: &RenderContext, league: &Season) -> String {
    let style = ctx.style();
    let mut content = html::wrap("h1", style.heading, &escape(&league.caption));
    let page_name = layout::league_page_name(&league.short_code);
    let table_link = layout::link_from_nested(LEAGUE_TABLES_DIR, &page_name);
    content += &html::tag_content("h2", &html::anchor(&table_link, "League Table"));
    let fixtures_link = layout::link_from_nested(FIXTURES_DIR, &page_name);
    content += &html::tag_content("h2", &html::anchor(&fixtures_link, "Fixtures"));
    ctx.body(&league.caption, true, &content)
}

pub fn team_page(ctx: &RenderContext, league_caption: &str, team: &Team) -> String {
    let style = ctx.style();
    let mut content = html::wrap("h1", style.heading, &escape(league_caption));

    let mut card = match ctx.theme {
        Theme::Plain => html::tag_with_class("div", "team_card"),
        Theme::Bootstrap => html::tag("div"),
    };
    if let Some(crest) = &team.crest_url {
        card += &html::image(crest, 100);
    }
    let short_name = team.short_name.as_deref().unwrap_or_default();
    let market_value = team.squad_market_value.as_deref().unwrap_or_default();
    card += &match ctx.theme {
        Theme::Plain => {
            let items: String = [team.name.as_str(), short_name, market_value]
                .iter()
                .map(|detail| html::tag_content("li", &escape(detail)))
                .collect();
            html::tag_content("ul", &items)
        }
        Theme::Bootstrap => html::wrap_with_class(
            "p",
            "bg-success",
            &escape(&format!(
                "Name: \"{name}\" Code: \"{short_name}\" Market Value: {market_value}",
                name = team.name
            )),
        ),
    };
    card += &html::close_tag("div");
    content += &card;

    let players_link = layout::link_from_nested(TEAMS_DIR, &layout::players_page_name(&team.name));
    content += &html::tag_content("h3", &html::anchor(&players_link, "See Players"));
    ctx.body(&team.name, true, &content)
}

/// Splits fixtures into matchdays of `team_count / 2` games, in input order.
/// A trailing incomplete matchday is left out, as is everything when fewer than two teams play.
pub fn matchdays(fixtures: &[Fixture], team_count: u32) -> Vec<&[Fixture]> {
    let games_per_matchday = (team_count / 2) as usize;
    if games_per_matchday == 0 {
        return Vec::new();
    }
    fixtures.chunks_exact(games_per_matchday).collect()
}

/// `home - away` for finished games with a known result, a placeholder for anything else.
pub fn score(fixture: &Fixture) -> String {
    let result = fixture.result.as_ref();
    let goals = result.and_then(|r| r.goals_home_team.zip(r.goals_away_team));
    match (fixture.status, goals) {
        (FixtureStatus::Finished, Some((home, away))) => format!("{home} - {away}"),
        _ => SCORE_PLACEHOLDER.to_string(),
    }
}

pub fn fixtures_page(ctx: &RenderContext, league: &Season, fixtures: &[Fixture]) -> String {
    let style = ctx.style();
    let headers = ["Date", "Home", "Score", "Away", "Time"];
    let mut content = String::new();
    for matchday in matchdays(fixtures, league.team_count) {
        let Some(last) = matchday.last() else { continue };
        content += &html::wrap("h1", style.heading, &format!("Matchday {}", last.matchday));
        let rows: Vec<Vec<String>> = matchday
            .iter()
            .map(|game| {
                vec![
                    game.date.format("%m-%d").to_string(),
                    team_link(&game.home_team_name),
                    escape(&score(game)),
                    team_link(&game.away_team_name),
                    game.date.format("%H:%M").to_string(),
                ]
            })
            .collect();
        content += &html::wrap_with_class(
            "div",
            style.table_wrapper,
            &html::table(Some(style.table), &headers, &rows),
        );
    }
    ctx.body(&league.caption, true, &content)
}

pub fn league_table_page(ctx: &RenderContext, table: &LeagueTable) -> String {
    let style = ctx.style();
    let headers = ["Position", "Team Name", "Wins", "Draws", "Losses", "Goals", "Points"];
    let rows: Vec<Vec<String>> = table
        .standing
        .iter()
        .map(|row| {
            let goals = match row.goals_against {
                Some(against) => format!("{}:{}", row.goals, against),
                None => row.goals.to_string(),
            };
            vec![
                row.position.to_string(),
                team_link(&row.team_name),
                row.wins.to_string(),
                row.draws.to_string(),
                row.losses.to_string(),
                goals,
                row.points.to_string(),
            ]
        })
        .collect();

    let mut content = html::wrap("h1", style.heading, &escape(&table.league_caption));
    content += &html::wrap_with_class(
        "div",
        style.table_wrapper,
        &html::table(Some(style.table), &headers, &rows),
    );
    ctx.body(&table.league_caption, true, &content)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Keepers,
    Defenders,
    Midfielders,
    Forwards,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Keepers, Bucket::Defenders, Bucket::Midfielders, Bucket::Forwards];

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Keepers => "Keepers",
            Bucket::Defenders => "Defenders",
            Bucket::Midfielders => "Midfielders",
            Bucket::Forwards => "Forwards",
        }
    }
}

/// The fixed position table. Positions missing from it belong to no bucket.
pub fn position_bucket(position: &str) -> Option<Bucket> {
    match position {
        "Keeper" => Some(Bucket::Keepers),
        "Centre Back" | "Right-Back" | "Left-Back" => Some(Bucket::Defenders),
        "Attacking Midfield" | "Left Midfield" | "Right Midfield" | "Defensive Midfield"
        | "Central Midfield" => Some(Bucket::Midfielders),
        "Centre Forward" | "Secondary Striker" | "Right Wing" | "Left Wing" => Some(Bucket::Forwards),
        _ => None,
    }
}

/// Players grouped per bucket, in `Bucket::ALL` order, keeping input order within a bucket.
pub fn bucket_players(players: &[Player]) -> Vec<(Bucket, Vec<&Player>)> {
    Bucket::ALL
        .iter()
        .map(|bucket| {
            let members = players
                .iter()
                .filter(|p| p.position.as_deref().and_then(position_bucket) == Some(*bucket))
                .collect();
            (*bucket, members)
        })
        .collect()
}

/// Whole years between `birth` and `today`.
pub fn age(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

pub fn players_page(ctx: &RenderContext, team: &Team, players: &[Player]) -> String {
    let style = ctx.style();
    let headers = ["No.", "Name", "Position", "Country", "Age"];
    let mut content = html::wrap("h1", style.heading, &escape(&team.name));
    for (bucket, members) in bucket_players(players) {
        let rows: Vec<Vec<String>> = members
            .iter()
            .map(|player| {
                vec![
                    player.jersey_number.map(|n| n.to_string()).unwrap_or_default(),
                    escape(&player.name),
                    escape(player.position.as_deref().unwrap_or_default()),
                    escape(player.nationality.as_deref().unwrap_or_default()),
                    player
                        .date_of_birth
                        .map(|birth| age(birth, ctx.today).to_string())
                        .unwrap_or_default(),
                ]
            })
            .collect();
        content += &html::wrap("h1", style.heading, bucket.title());
        content += &html::wrap_with_class(
            "div",
            style.table_wrapper,
            &html::table(Some(style.table), &headers, &rows),
        );
    }
    ctx.body(&team.name, true, &content)
}

fn team_link(team_name: &str) -> String {
    let link = layout::link_from_nested(TEAMS_DIR, &layout::team_page_name(team_name));
    html::anchor(&link, team_name)
}

use std::fmt;
use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use indicatif::ProgressBar;
use log::{debug, error};
use serde::de::DeserializeOwned;
use tokio::task::JoinError;

use crate::error::Error;
use crate::model::{Kind, Resource, Season, Team, Teams};
use crate::service::{fetch_typed, ResourceLoader};
use crate::site::{PageSink, Published};

/// One fetch-render-write cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    League { kind: Kind, league: String },
    TeamPlayers { league: String, team: String },
}

impl Unit {
    fn league(kind: Kind, league: &Season) -> Self {
        Unit::League { kind, league: league.short_code.clone() }
    }

    fn team_players(league: &Season, team: &Team) -> Self {
        Unit::TeamPlayers { league: league.short_code.clone(), team: team.name.clone() }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::League { kind, league } => write!(f, "{kind} of {league}"),
            Unit::TeamPlayers { league, team } => write!(f, "players of {team} ({league})"),
        }
    }
}

/// How a unit ended: the files it wrote, and why it stopped short if it did.
///
/// A failed unit may still have written some of its pages.
#[derive(Debug)]
pub struct UnitOutcome {
    pub unit: Unit,
    pub written: usize,
    pub result: Result<(), Error>,
}

impl UnitOutcome {
    fn new(unit: Unit, written: usize, failure: Option<Error>) -> Self {
        let result = match failure {
            None => {
                debug!("{unit}: {written} file(s) written");
                Ok(())
            }
            Some(e) => {
                error!("Dropping {unit} after {written} file(s): {e}");
                Err(e)
            }
        };
        UnitOutcome { unit, written, result }
    }

    fn failed(unit: Unit, e: Error) -> Self {
        Self::new(unit, 0, Some(e))
    }

    fn published(unit: Unit, published: Published) -> Self {
        Self::new(unit, published.written, published.failure)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<UnitOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn files_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.written).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &UnitOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }
}

/// Handle on everything a call to [`Orchestrator::run`] set in motion.
pub struct Run {
    pending: FuturesUnordered<BoxFuture<'static, Vec<UnitOutcome>>>,
}

impl Run {
    /// Number of top-level tasks dispatched. A players task may fan out further.
    pub fn dispatched(&self) -> usize {
        self.pending.len()
    }

    /// Resolves once every dispatched task, and every task those spawned, has settled.
    pub async fn drain(mut self, progress: &ProgressBar) -> RunReport {
        let mut report = RunReport::default();
        while let Some(outcomes) = self.pending.next().await {
            progress.inc(1);
            report.outcomes.extend(outcomes);
        }
        report
    }
}

pub struct Orchestrator<L, S> {
    loader: Arc<L>,
    sink: Arc<S>,
}

impl<L, S> Orchestrator<L, S>
where
    L: ResourceLoader + 'static,
    S: PageSink + 'static,
{
    pub fn new(loader: Arc<L>, sink: Arc<S>) -> Self {
        Orchestrator { loader, sink }
    }

    /// Spawns one task per (kind, league) pair and returns without waiting on any of them.
    ///
    /// Tasks complete in no particular order. A failing task only loses its own output.
    pub fn run(&self, leagues: &[Season], kinds: &[Kind]) -> Run {
        let pending = FuturesUnordered::new();
        for &kind in kinds {
            for league in leagues {
                let unit = Unit::league(kind, league);
                let loader = Arc::clone(&self.loader);
                let sink = Arc::clone(&self.sink);
                let uri = league.link(kind).uri();
                let league = league.clone();

                let task: BoxFuture<'static, Vec<UnitOutcome>> = match kind {
                    Kind::Teams => simple_unit(loader, sink, unit.clone(), uri, move |teams| {
                        Resource::Teams { league, teams }
                    })
                    .boxed(),
                    Kind::Fixtures => simple_unit(loader, sink, unit.clone(), uri, move |fixtures| {
                        Resource::Fixtures { league, fixtures }
                    })
                    .boxed(),
                    Kind::LeagueTable => simple_unit(loader, sink, unit.clone(), uri, move |table| {
                        Resource::LeagueTable { league, table }
                    })
                    .boxed(),
                    Kind::Players => players_pipeline(loader, sink, unit.clone(), uri, league).boxed(),
                };

                let handle = tokio::spawn(task);
                pending.push(handle.map(move |joined| settle(unit, joined)).boxed());
            }
        }
        Run { pending }
    }
}

fn settle(unit: Unit, joined: Result<Vec<UnitOutcome>, JoinError>) -> Vec<UnitOutcome> {
    match joined {
        Ok(outcomes) => outcomes,
        Err(e) => vec![UnitOutcome::failed(unit, e.into())],
    }
}

async fn simple_unit<L, S, T, F>(
    loader: Arc<L>,
    sink: Arc<S>,
    unit: Unit,
    uri: String,
    into_resource: F,
) -> Vec<UnitOutcome>
where
    L: ResourceLoader,
    S: PageSink,
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(T) -> Resource + Send + 'static,
{
    let outcome = match fetch_typed::<L, T>(&loader, &uri).await {
        Ok(body) => UnitOutcome::published(unit, sink.publish(into_resource(body)).await),
        Err(e) => UnitOutcome::failed(unit, e),
    };
    vec![outcome]
}

/// Teams of the league first, then one spawned players fetch per team.
async fn players_pipeline<L, S>(
    loader: Arc<L>,
    sink: Arc<S>,
    unit: Unit,
    teams_uri: String,
    league: Season,
) -> Vec<UnitOutcome>
where
    L: ResourceLoader + 'static,
    S: PageSink + 'static,
{
    let teams = match fetch_typed::<L, Teams>(&loader, &teams_uri).await {
        Ok(teams) => teams.teams,
        Err(e) => return vec![UnitOutcome::failed(unit, e)],
    };

    let per_team = teams.into_iter().map(|team| {
        let unit = Unit::team_players(&league, &team);
        let handle = tokio::spawn(team_players(
            Arc::clone(&loader),
            Arc::clone(&sink),
            unit.clone(),
            team,
        ));
        handle.map(move |joined| match joined {
            Ok(outcome) => outcome,
            Err(e) => UnitOutcome::failed(unit, e.into()),
        })
    });
    join_all(per_team).await
}

async fn team_players<L, S>(loader: Arc<L>, sink: Arc<S>, unit: Unit, team: Team) -> UnitOutcome
where
    L: ResourceLoader,
    S: PageSink,
{
    let uri = team.links.players.uri();
    match fetch_typed(&*loader, &uri).await {
        Ok(players) => UnitOutcome::published(unit, sink.publish(Resource::Players { team, players }).await),
        Err(e) => UnitOutcome::failed(unit, e),
    }
}

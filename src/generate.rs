use std::sync::Arc;

use chrono::Local;
use indicatif::ProgressBar;
use log::{error, info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::orchestrator::{Orchestrator, RunReport};
use crate::render::RenderContext;
use crate::resolver::resolve;
use crate::service::FootballDataService;
use crate::site::Site;

/// Fetches the seasons, writes the landing pages and stylesheet, then fetches and writes
/// every requested page.
///
/// Fails fast only when the season list cannot be fetched or nothing matches the requested
/// leagues. Everything after that is settled per unit and reported in the [`RunReport`].
pub async fn generate(config: &Config, progress: &ProgressBar) -> Result<RunReport, Error> {
    let selection = &config.selection;
    let service = FootballDataService::new(&config.api_key, config.timeout)?;

    let seasons = service.seasons(&config.api_url).await?;
    let leagues = resolve(&seasons, &selection.leagues);
    if leagues.is_empty() {
        return Err(Error::Selection(format!(
            "none of the requested leagues ({}) is known",
            selection.leagues.join(", ")
        )));
    }
    info!(
        "Generating {} for {}",
        selection.kinds.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        leagues.iter().map(|l| l.short_code.as_str()).collect::<Vec<_>>().join(", ")
    );

    let site = Arc::new(Site::new(
        selection.output.clone(),
        RenderContext::new(selection.theme, Local::now().date_naive()),
    ));
    let landing = site.write_landing_pages(&leagues).await;
    if let Some(e) = landing.failure {
        warn!("Landing pages are incomplete ({} written): {e}", landing.written);
    }
    if let Err(e) = site.copy_stylesheet(&config.assets_dir).await {
        error!(
            "Could not copy {} from {}: {e}",
            selection.theme.stylesheet(),
            config.assets_dir.display()
        );
    }

    let run = Orchestrator::new(Arc::new(service), site).run(&leagues, &selection.kinds);
    progress.set_length(run.dispatched() as u64);
    Ok(run.drain(progress).await)
}

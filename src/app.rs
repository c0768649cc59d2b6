//! Page-load trigger: load the roster once and feed the result to the renderer.

use tracing::error;

use crate::data::{LoadOutcome, RosterError, RosterLoader, RosterPaths};
use crate::fetch::JsonFetcher;
use crate::rng::RandomSource;
use crate::view::{render_roster, render_roster_error, roster_container, Element};

pub struct RosterView {
    /// The rendered container, ready to embed in a page.
    pub container: Element,
    pub result: Result<LoadOutcome, RosterError>,
}

impl RosterView {
    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }
}

pub async fn init_roster<R: RandomSource + ?Sized>(
    fetcher: &dyn JsonFetcher,
    paths: RosterPaths,
    rng: &mut R,
) -> RosterView {
    let mut container = roster_container();
    let mut loader = RosterLoader::new(fetcher, paths);
    let result = loader.load(rng).await;

    match &result {
        Ok(outcome) => render_roster(&mut container, &outcome.students),
        Err(err) => {
            error!(error = %err, "unable to load roster");
            render_roster_error(&mut container);
        }
    }

    RosterView { container, result }
}

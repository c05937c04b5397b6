use clap::ArgMatches;

use taskprune_core::events;

mod helpers;
mod prune;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();
    prune::handle_prune_command(matches).await
}

use bandit_sim::config::AppConfig;
use bandit_sim::simulation::SourcePool;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let AppConfig {
        log_level,
        simulation,
        strategy,
    } = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let mut pool = SourcePool::new(
        simulation.n_sources,
        simulation.rates.clone(),
        simulation.balanced,
        simulation.seed,
    )?;
    let mut strategy = strategy.into_inner(simulation.n_sources);

    info!(pool = %pool, trials = simulation.trials, "starting simulation");

    let mut remaining = simulation.trials;
    while remaining > 0 {
        let batch = remaining.min(simulation.batch_size);
        let tot_returned = pool.throw(strategy.as_mut(), batch)?;
        remaining -= batch;

        info!(
            tot_thrown = pool.tot_thrown(),
            tot_returned,
            payout = tot_returned as f64 / pool.tot_thrown() as f64,
            "batch finished"
        );
    }

    // final counters for the plotting collaborator
    println!("{}", serde_json::to_string_pretty(&pool.stats())?);

    Ok(())
}

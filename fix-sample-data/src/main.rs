use anyhow::Context;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fix_sample_data::{Config, fixes, storage, utils::logger};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config.log_level);

    tracing::info!(path = %config.data_path.display(), "fixing sample data");

    // 2. Load the fixture
    let mut data = storage::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;

    // 3. Apply the fixes
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let summary = fixes::apply(&mut data, Utc::now().naive_utc(), &mut rng)?;

    // 4. Write it back in place
    storage::save(&config.data_path, &data)
        .with_context(|| format!("failed to write {}", config.data_path.display()))?;

    tracing::info!(
        veg_flags_fixed = summary.veg_flags_fixed,
        menu_items = summary.menu_items,
        reservations = summary.reservations,
        orders = summary.orders,
        "sample data fixed"
    );

    Ok(())
}

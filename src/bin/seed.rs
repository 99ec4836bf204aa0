use handmade_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    services::product_service,
    state::AppState,
};

/// Seed the demonstration catalog. Pass `--force` to replace existing products.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let force = std::env::args().skip(1).any(|arg| arg == "--force");
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let state = AppState::new(orm, &config);
    let report = product_service::seed_products(&state, force).await?;

    println!(
        "Seed {}: {} products (rate {})",
        report.status, report.count, config.usd_to_syp
    );
    Ok(())
}

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_site::config::AppConfig;
use portfolio_site::content::domain::sections::Collection;
use portfolio_site::gateway::adapter::outgoing::{RowGatewayMemory, RowGatewayPostgres};
use portfolio_site::gateway::application::ports::outgoing::RowGateway;
use portfolio_site::shared::assets::AssetResolver;
use portfolio_site::{init_routes, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Content source: Postgres, a JSON seed file, or nothing at all
    let mut db_arc = None;
    let gateway: Arc<dyn RowGateway> = match (&config.database_url, &config.seed_file) {
        (Some(db_url), _) => {
            let mut opt = ConnectOptions::new(db_url.clone());
            opt.max_connections(20)
                .min_connections(2)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .context("Failed to connect to database")?;
            let conn = Arc::new(conn);
            db_arc = Some(Arc::clone(&conn));

            info!("Serving content from Postgres");
            Arc::new(RowGatewayPostgres::new(conn, Collection::table_names()))
        }
        (None, Some(seed)) => {
            let gateway = RowGatewayMemory::from_seed_file(seed)
                .with_context(|| format!("Failed to load seed file {}", seed.display()))?;

            info!(
                "Serving content from {} ({} collections)",
                seed.display(),
                gateway.collection_names().len()
            );
            Arc::new(gateway)
        }
        (None, None) => {
            warn!("Neither DATABASE_URL nor SEED_FILE is set; every section renders its placeholder");
            Arc::new(
                Collection::table_names()
                    .fold(RowGatewayMemory::new(), |g, name| g.with_collection(name, vec![])),
            )
        }
    };

    let state = AppState::from_gateway(
        gateway,
        config.site.clone(),
        AssetResolver::new(config.asset_base_url.clone()),
    );

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes);

        if let Some(db) = &db_arc {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    exit_code(start())
}

fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error starting app: {e:#}");
            ExitCode::FAILURE
        }
    }
}

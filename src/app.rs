/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (CORS / default headers / request id / trace)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, handler::HandlerWithoutStateExt};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{self, handlers::root::not_found},
    config::Config,
    middleware,
    repos::StaticHeroRepo,
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,boruto_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    let repo = StaticHeroRepo::boruto()?;
    tracing::info!(
        "starting Boruto API in {:?} mode on {} ({} heroes, images from {})",
        config.app_env,
        config.addr,
        repo.hero_count(),
        config.images_dir.display()
    );

    let state = AppState::new(Arc::new(repo));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(state: AppState, config: &Config) -> Router {
    // Missing images get the same 404 body as any other unknown path.
    let images = ServeDir::new(&config.images_dir).not_found_service(not_found.into_service());

    let router = Router::new()
        .merge(api::routes())
        .nest_service("/images", images)
        .fallback(not_found)
        .with_state(state);

    let router = middleware::default_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}

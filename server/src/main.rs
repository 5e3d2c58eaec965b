mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::documents::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use services::github::GithubClient;
use services::translate::{GeminiTranslator, Translator};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let documents: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            Arc::new(PgDocumentStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory document store");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    // Translation is optional: the admin endpoint answers 503 without it.
    let translator: Option<Arc<dyn Translator>> = match config.gemini.clone() {
        Some(gemini) => match GeminiTranslator::new(gemini, config.timeouts) {
            Ok(translator) => {
                tracing::info!(model = translator.model(), "translator initialized");
                Some(Arc::new(translator))
            }
            Err(e) => {
                tracing::warn!(error = %e, "translator unavailable");
                None
            }
        },
        None => {
            tracing::info!("GEMINI_API_KEY not set; translation disabled");
            None
        }
    };

    let github = GithubClient::new(config.github_token.clone(), config.github_base_url.clone(), config.timeouts)
        .expect("github client init failed");

    let port = config.port;
    let state = state::AppState::new(documents, translator, github, config);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}

use lambda_http::{run, Error};
use bookshelf::books::factory::create_book_repository;
use bookshelf::catalog::controller::build_router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Configuration, Runtime};
use bookshelf::utils::logging::setup_tracing;

// BOOKSHELF_RUNTIME=lambda serves the same router through the Lambda runtime,
// see https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    // a missing .env file is fine, the environment alone is enough
    let _ = dotenvy::dotenv();
    let config = Configuration::from_env();
    setup_tracing(config.runtime);

    let state = AppState::new(&config, create_book_repository());

    match config.runtime {
        Runtime::Lambda => {
            tracing::info!("starting bookshelf on the lambda runtime");
            run(build_router::<lambda_http::Body>(state)).await
        }
        Runtime::Local => {
            let addr = tokio::net::lookup_host(config.bind_address()).await?
                .next()
                .ok_or_else(|| format!("could not resolve {}", config.bind_address()))?;
            tracing::info!("bookshelf listening on http://{}", addr);
            let app = build_router::<axum::body::Body>(state);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}

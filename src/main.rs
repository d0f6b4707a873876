use std::{env, process};

use spritegen::{app::env::Envy, sprites, AppState};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: GEMINI_API_KEY=<key> spritegen");
            process::exit(1);
        }
    };

    let state = AppState::new(envy);

    match sprites::service::run(&sprites::catalog::SPRITE_CATALOG, &state).await {
        Ok(report) => {
            println!(
                "Done! {} sprites generated, {} failed.",
                report.succeeded, report.failed
            );
        }
        Err(e) => {
            tracing::error!("{:?}", e);
            process::exit(1);
        }
    }
}

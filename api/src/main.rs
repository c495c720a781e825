use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use chefco_core::{
    application::create_service,
    domain::{
        authentication::value_objects::Identity,
        common::ChefcoConfig,
        crypto::ports::HasherRepository,
        menu_import::{
            entities::{CourseHandling, ImportSheetInput, ImportTarget},
            ports::MenuImportService,
        },
        user::{
            entities::{User, UserConfig},
            ports::UserRepository,
        },
    },
};

use crate::application::http::server::http_server;
use crate::args::{Args, Command};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Arc::new(Args::parse());

    match args.command.clone() {
        Some(Command::ImportMenu { file, menu }) => import_menu(&args, file, menu).await,
        Some(Command::CreateUser {
            username,
            email,
            password,
            staff,
        }) => create_user(&args, username, email, password, staff).await,
        None => serve(args).await,
    }
}

async fn serve(args: Arc<Args>) -> Result<(), anyhow::Error> {
    let state = http_server::state(args.clone()).await?;
    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

async fn import_menu(
    args: &Args,
    file: std::path::PathBuf,
    menu: String,
) -> Result<(), anyhow::Error> {
    let service = create_service(ChefcoConfig::from(args.clone())).await?;

    let admin = service
        .user_repository
        .get_by_username("admin".to_string())
        .await?
        .context("user 'admin' not found, create it first with create-user")?;

    let data = std::fs::read(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let report = service
        .import_quantity_sheet(
            Identity::User(admin),
            ImportSheetInput {
                target: ImportTarget::MenuName(menu),
                data,
                course_handling: CourseHandling::CreateMissing,
            },
        )
        .await?;

    for message in &report.messages {
        tracing::warn!("{message}");
    }
    println!("{}", report.summary());

    Ok(())
}

async fn create_user(
    args: &Args,
    username: String,
    email: String,
    password: String,
    staff: bool,
) -> Result<(), anyhow::Error> {
    let service = create_service(ChefcoConfig::from(args.clone())).await?;

    let password_hash = service.hasher.hash_password(&password).await?;
    let user = service
        .user_repository
        .create_user(User::new(UserConfig {
            username,
            email,
            password_hash,
            is_staff: staff,
        }))
        .await?;

    println!("created user {} ({})", user.username, user.id);

    Ok(())
}

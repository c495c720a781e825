use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use chefco_core::domain::common::{AuthConfig, ChefcoConfig, DatabaseConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "chefco", about = "ChefCo banquet planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import a banquet quantity sheet (CSV) into a menu.
    ImportMenu {
        /// Path to the CSV file.
        #[arg(long)]
        file: PathBuf,

        /// Target menu name, created when absent.
        #[arg(long, default_value = "Basic Menu 1")]
        menu: String,
    },
    /// Create a user account.
    CreateUser {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Grant catalog write access.
        #[arg(long, default_value_t = false)]
        staff: bool,
    },
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "chefco")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "chefco")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "chefco")]
    pub database_name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub openai_model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Token lifetime in seconds.
    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = 86_400)]
    pub token_ttl_secs: i64,
}

impl From<Args> for ChefcoConfig {
    fn from(args: Args) -> Self {
        ChefcoConfig {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_secs: args.auth.token_ttl_secs,
            },
        }
    }
}

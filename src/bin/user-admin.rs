//! User Account Administration CLI
//!
//! Administrative access to user accounts without going through the HTTP API.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;

use user_account_service::{
    config::AppConfig,
    database::{self, UserStore},
    models::requests::CreateUserRequest,
    service::{AccountService, SessionService},
};

/// User account administration CLI
#[derive(Parser)]
#[command(name = "user-admin", about = "User account administration CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show one user, including their token
    Get(IdArgs),
    /// Register a new user
    Create(CreateArgs),
    /// Force a user OFFLINE
    Logout(IdArgs),
}

#[derive(Args)]
struct IdArgs {
    /// User ID
    id: i64,
}

#[derive(Args)]
struct CreateArgs {
    /// Username
    #[arg(short, long)]
    username: String,

    /// Password
    #[arg(short, long)]
    password: String,

    /// Birthday (YYYY-MM-DD)
    #[arg(short, long)]
    birthday: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = AppConfig::from_env();
    config.validate()?;
    let pool = config.database.create_pool().await?;

    // Run migrations to ensure database is up to date
    database::run_migrations(&pool).await?;

    let store = UserStore::new(pool);
    let accounts = AccountService::new(store.clone());
    let sessions = SessionService::new(store);

    match cli.command {
        Commands::List => list_users(&accounts).await?,
        Commands::Get(args) => get_user(&accounts, args).await?,
        Commands::Create(args) => create_user(&accounts, args).await?,
        Commands::Logout(args) => force_logout(&accounts, &sessions, args).await?,
    }

    Ok(())
}

async fn list_users(accounts: &AccountService) -> Result<(), Box<dyn std::error::Error>> {
    let users = accounts.list_users().await?;

    if users.is_empty() {
        println!("No users found.");
        println!("Create one with: user-admin create --username alice --password secret");
        return Ok(());
    }

    println!(
        "{:<8} {:<30} {:<8} {:<12} {:<12}",
        "ID", "Username", "Status", "Registered", "Birthday"
    );
    println!("{}", "-".repeat(74));

    for user in users {
        println!(
            "{:<8} {:<30} {:<8} {:<12} {:<12}",
            user.id,
            truncate_string(&user.username, 29),
            user.status,
            user.registration_date,
            user.birthday
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}

async fn get_user(accounts: &AccountService, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let user = accounts.get_user(args.id).await?;

    println!("ID:         {}", user.id);
    println!("Username:   {}", user.username);
    println!("Status:     {}", user.status);
    println!("Registered: {}", user.registration_date);
    if let Some(birthday) = user.birthday {
        println!("Birthday:   {}", birthday);
    }
    println!("Token:      {}", user.token);

    Ok(())
}

async fn create_user(
    accounts: &AccountService,
    args: CreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = accounts
        .create_user(CreateUserRequest {
            username: args.username,
            password: args.password,
            birthday: args.birthday,
        })
        .await?;

    println!("Created user {} (ID {})", user.username, user.id);
    println!("Token: {}", user.token);

    Ok(())
}

async fn force_logout(
    accounts: &AccountService,
    sessions: &SessionService,
    args: IdArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = accounts.get_user(args.id).await?;
    sessions.logout(user.id, &user.token).await?;

    println!("User {} is now OFFLINE", user.username);

    Ok(())
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

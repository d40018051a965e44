/// Hoaxify - terminal client for the Hoaxify user directory
use clap::{ArgGroup, Parser, Subcommand};
use hoax_cli::{App, AppConfig, SignupInput, DEFAULT_LOG_FILTER};
use hoax_controllers::SubmitOutcome;
use hoax_core::UserUpdate;
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hoax")]
#[command(about = "Hoaxify user directory client", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./hoax.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse users page by page
    Users {
        /// Page to start on
        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },
    /// Create an account and log in
    Signup {
        /// Display name
        #[arg(short, long)]
        display_name: String,
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "HOAX_PASSWORD", hide_env_values = true)]
        password: String,
        /// Password repeat (defaults to the password)
        #[arg(long)]
        password_repeat: Option<String>,
    },
    /// Log in
    Login {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "HOAX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show a user's profile
    Show {
        /// Username
        username: String,
    },
    /// Update the logged-in user's profile
    #[command(group(ArgGroup::new("changes").required(true).multiple(true)))]
    Update {
        /// New display name
        #[arg(short, long, group = "changes")]
        display_name: Option<String>,
        /// New profile image
        #[arg(short, long, group = "changes")]
        image: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let app = App::init(config).await?;

    let mut out = std::io::stdout();

    let outcome = match cli.command {
        Commands::Users { page } => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            app.browse_users(page, input, &mut out).await?;
            None
        }
        Commands::Signup {
            display_name,
            username,
            password,
            password_repeat,
        } => {
            let input = SignupInput {
                display_name,
                username,
                password_repeat: password_repeat.unwrap_or_else(|| password.clone()),
                password,
            };
            Some(app.signup(input, &mut out).await?)
        }
        Commands::Login { username, password } => {
            Some(app.login(username, password, &mut out).await?)
        }
        Commands::Logout => {
            app.logout(&mut out).await?;
            None
        }
        Commands::Whoami => {
            app.whoami(&mut out).await?;
            None
        }
        Commands::Show { username } => {
            app.show_user(&username, &mut out).await?;
            None
        }
        Commands::Update {
            display_name,
            image,
        } => {
            let update = UserUpdate {
                display_name,
                image,
            };
            app.update_profile(update, &mut out).await?;
            None
        }
    };

    match outcome {
        Some(SubmitOutcome::Succeeded) | None => Ok(ExitCode::SUCCESS),
        Some(_) => Ok(ExitCode::FAILURE),
    }
}

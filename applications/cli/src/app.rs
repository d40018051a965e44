/// Command handlers for the `hoax` binary
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::render;
use hoax_client::{AuthHeader, ClientConfig, HoaxClient, UserApi};
use hoax_controllers::{
    ClientActions, LoginFormController, MemoryNavigator, SignupFormController, SubmitOutcome,
    UserListController, HOME,
};
use hoax_core::{Field, UserUpdate};
use hoax_session::{FileStorage, SessionStore};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Values typed into the signup form.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub display_name: String,
    pub username: String,
    pub password: String,
    pub password_repeat: String,
}

/// Wired client, session store and configuration.
pub struct App {
    config: AppConfig,
    client: Arc<HoaxClient>,
    session: Arc<SessionStore>,
}

impl App {
    /// Build the client and restore any stored session before the first request.
    pub async fn init(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let auth = AuthHeader::new();
        let client_config = ClientConfig::new(&config.api_base_url).with_timeout(config.timeout());
        let client = Arc::new(HoaxClient::with_auth(client_config, auth.clone())?);

        let storage = FileStorage::new(&config.storage_dir);
        let session = Arc::new(SessionStore::new(Arc::new(storage), auth));
        let restored = session.rehydrate().await?;
        debug!(
            logged_in = restored.is_logged_in,
            storage = %config.storage_dir.display(),
            "Session restored"
        );

        Ok(Self {
            config,
            client,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn actions(&self) -> Arc<ClientActions> {
        Arc::new(ClientActions::new(self.client.clone(), self.session.clone()))
    }

    /// Browse the user list, reading `n`/`p`/`q` commands from `input`.
    pub async fn browse_users<R, W>(&self, start_page: u32, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let controller = UserListController::new(self.client.clone(), self.config.users_page_size);
        if start_page == 0 {
            controller.start().await;
        } else {
            controller.load(start_page).await;
        }

        let mut lines = input.lines();
        loop {
            let state = controller.state().await;
            write!(out, "{}", render::user_list(&state))?;
            write!(out, "{}", render::list_prompt(&state))?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            match line.trim() {
                "n" | "next" => {
                    if controller.next().await.is_none() {
                        writeln!(out, "Already on the last page")?;
                    }
                }
                "p" | "previous" => {
                    if controller.previous().await.is_none() {
                        writeln!(out, "Already on the first page")?;
                    }
                }
                "q" | "quit" => break,
                "" => {}
                other => writeln!(out, "Unknown command: {other}")?,
            }
        }
        Ok(())
    }

    /// Print the first page of users.
    pub async fn home<W: Write>(&self, out: &mut W) -> Result<()> {
        let controller = UserListController::new(self.client.clone(), self.config.users_page_size);
        controller.start().await;
        write!(out, "{}", render::user_list(&controller.state().await))?;
        Ok(())
    }

    pub async fn signup<W: Write>(&self, input: SignupInput, out: &mut W) -> Result<SubmitOutcome> {
        let navigator = Arc::new(MemoryNavigator::new());
        let controller = SignupFormController::new()
            .with_actions(self.actions())
            .with_navigator(navigator.clone());

        controller.set_field(Field::DisplayName, input.display_name).await;
        controller.set_field(Field::Username, input.username).await;
        controller.set_field(Field::Password, input.password).await;
        controller.set_field(Field::PasswordRepeat, input.password_repeat).await;

        let outcome = controller.submit().await;
        match outcome {
            SubmitOutcome::Succeeded => {
                let session = self.session.current().await;
                writeln!(out, "Signed up as {}", render::session(&session))?;
            }
            SubmitOutcome::Rejected | SubmitOutcome::Disabled => {
                write!(out, "{}", render::signup_errors(&controller.form().await))?;
            }
            SubmitOutcome::Failed | SubmitOutcome::Ignored => {
                writeln!(out, "Signup failed")?;
            }
        }

        if navigator.current().as_deref() == Some(HOME) {
            self.home(out).await?;
        }
        Ok(outcome)
    }

    pub async fn login<W: Write>(
        &self,
        username: String,
        password: String,
        out: &mut W,
    ) -> Result<SubmitOutcome> {
        let controller = LoginFormController::new().with_actions(self.actions());
        controller.set_username(username).await;
        controller.set_password(password).await;

        let outcome = controller.submit().await;
        let form = controller.form().await;
        match outcome {
            SubmitOutcome::Succeeded => {
                let session = self.session.current().await;
                writeln!(out, "Logged in as {}", render::session(&session))?;
            }
            SubmitOutcome::Disabled => writeln!(out, "Username and password are required")?,
            _ => {
                if let Some(error) = render::login_error(&form) {
                    writeln!(out, "{error}")?;
                }
            }
        }
        Ok(outcome)
    }

    pub async fn logout<W: Write>(&self, out: &mut W) -> Result<()> {
        let was_logged_in = self.session.is_logged_in().await;
        self.session.logout().await?;
        if was_logged_in {
            writeln!(out, "Logged out")?;
        } else {
            writeln!(out, "Not logged in")?;
        }
        Ok(())
    }

    pub async fn whoami<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", render::session(&self.session.current().await))?;
        Ok(())
    }

    pub async fn show_user<W: Write>(&self, username: &str, out: &mut W) -> Result<()> {
        let user = self.client.get_user(username).await?;
        writeln!(out, "{}", render::profile(&user))?;
        Ok(())
    }

    /// Update the logged-in user's profile and the stored session.
    pub async fn update_profile<W: Write>(&self, update: UserUpdate, out: &mut W) -> Result<()> {
        let current = self.session.current().await;
        if !current.is_logged_in {
            return Err(CliError::NotLoggedIn);
        }
        if update.is_empty() {
            return Err(CliError::InvalidInput("nothing to update".to_string()));
        }

        let user = self.client.update_user(current.id, &update).await?;
        self.session.update_user(&update).await?;
        info!(username = %user.username, "Profile updated");

        writeln!(out, "{}", render::profile(&user))?;
        Ok(())
    }
}

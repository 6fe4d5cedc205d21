//! Command execution.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use shared_types::Credentials;
use tc_01_session::adapters::{FileSessionStore, RecordingNavigator};
use tc_01_session::{SessionConfig, SessionContext};
use tc_02_route_guard::{GuardConfig, RouteGuard, RouteTarget};
use tc_03_gateway_client::adapters::LastErrorStore;
use tc_03_gateway_client::{GatewayClient, GatewayConfig, QueryDescriptor};
use tc_04_query_layer::domain::pagination::DEFAULT_LIMIT;
use tc_04_query_layer::{
    auth, companies, countries, dashboard, trips, users, Pagination, QueryClient, QueryState,
};

use crate::cli::{CatalogueCommand, Cli, Command, PageArgs, UserCommand};
use crate::paths::resolve_session_path;

/// Everything one invocation needs.
pub struct Console {
    pub session: Arc<SessionContext>,
    pub client: QueryClient,
    pub errors: Arc<LastErrorStore>,
    pub guard: RouteGuard,
}

impl Console {
    pub fn open(cli: &Cli) -> Result<Self> {
        let session_path = resolve_session_path(cli.session_file.clone())?;
        debug!(path = %session_path.display(), "Using session file");

        let session_config = SessionConfig::from_env();
        session_config
            .validate()
            .context("invalid session configuration")?;
        let session = Arc::new(SessionContext::init(
            Arc::new(FileSessionStore::new(&session_path)),
            Arc::new(RecordingNavigator::new()),
            session_config.clone(),
        ));

        let mut gateway_config = GatewayConfig::from_env();
        if let Some(url) = &cli.base_url {
            gateway_config.base_url = url.clone();
        }
        gateway_config
            .validate()
            .context("invalid gateway configuration")?;

        let errors = Arc::new(LastErrorStore::new());
        let gateway = GatewayClient::with_reqwest(gateway_config, session.clone(), errors.clone())
            .context("failed to build HTTP client")?;

        let guard_config = GuardConfig {
            auth_entry_path: session_config.auth_entry_path,
            ..GuardConfig::default()
        };
        guard_config
            .validate()
            .context("invalid route guard configuration")?;

        Ok(Self {
            guard: RouteGuard::new(session.clone(), guard_config),
            client: QueryClient::with_gateway(gateway),
            session,
            errors,
        })
    }

    pub async fn execute(&self, command: Command) -> Result<Value> {
        match command {
            Command::Login { email, password } => {
                let credentials = Credentials::new(email, password);
                let response = auth::login(&self.client, &self.session, &credentials)
                    .await
                    .context("login failed")?;
                let admin = response.data.admin;
                Ok(json!({
                    "signedIn": true,
                    "role": admin.role,
                    "fullName": admin.full_name,
                    "email": admin.email,
                }))
            }
            Command::Logout => {
                if let Err(err) = auth::logout(&self.client, &self.session).await {
                    eprintln!("warning: server logout failed: {err}");
                }
                Ok(json!({ "signedIn": false }))
            }
            Command::Whoami => Ok(self.whoami()),
            Command::Route { name, path } => {
                let decision = self.guard.check(&RouteTarget::new(name, path));
                Ok(serde_json::to_value(decision)?)
            }
            Command::Trips(cmd) => self.catalogue(cmd, trips::list, trips::delete).await,
            Command::Companies(cmd) => {
                self.catalogue(cmd, companies::list, companies::delete).await
            }
            Command::Countries(cmd) => {
                self.catalogue(cmd, countries::list, countries::delete).await
            }
            Command::Users(UserCommand::List(page)) => {
                let pagination = pagination(page, users::DEFAULT_LIMIT);
                self.read::<users::UserList>(users::list(&pagination))
                    .await
                    .map(|list| json!(list))
            }
            Command::Users(UserCommand::Block { id }) => self.write(users::toggle_block(&id)).await,
            Command::Dashboard => self.read::<Value>(dashboard::overview()).await,
        }
    }

    fn whoami(&self) -> Value {
        let state = self.session.snapshot();
        json!({
            "authenticated": state.is_authenticated(),
            "role": state.effective_role(),
            "profile": state.profile,
        })
    }

    async fn catalogue(
        &self,
        command: CatalogueCommand,
        list: fn(&Pagination) -> QueryDescriptor,
        delete: fn(&str) -> QueryDescriptor,
    ) -> Result<Value> {
        match command {
            CatalogueCommand::List(page) => {
                let pagination = pagination(page, DEFAULT_LIMIT);
                self.read::<Value>(list(&pagination)).await
            }
            CatalogueCommand::Delete { id } => self.write(delete(&id)).await,
        }
    }

    /// Run a read to completion and return its data.
    async fn read<T>(&self, descriptor: QueryDescriptor) -> Result<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let handle = self.client.query::<T>(descriptor).await;
        match handle.state() {
            QueryState::Ready(value) => Ok(value),
            QueryState::Failed(message) => bail!("request failed: {message}"),
            QueryState::Idle | QueryState::Loading => bail!("request did not complete"),
        }
    }

    async fn write(&self, descriptor: QueryDescriptor) -> Result<Value> {
        let response = self
            .client
            .mutation::<Value>(descriptor)
            .execute()
            .await
            .context("request failed")?;
        Ok(response)
    }

    /// Final persist of the session.
    pub fn close(&self) {
        self.session.teardown();
    }
}

fn pagination(args: PageArgs, default_limit: u32) -> Pagination {
    Pagination::new(args.page, args.limit.unwrap_or(default_limit))
}

/// Entry point used by `main`.
pub async fn run(cli: Cli) -> Result<()> {
    let console = Console::open(&cli)?;
    let result = console.execute(cli.command.clone()).await;
    console.close();

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            if let Some(message) = console.errors.take() {
                eprintln!("server: {message}");
            }
            Err(err)
        }
    }
}

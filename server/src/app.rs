//! Core application

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use validator::Validate;

use crate::api::ApiServer;
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{DEFAULT_LOG_FILTER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::AppStorage;
use crate::data::SqliteService;
use crate::data::types::NewProduct;
use crate::domain::CatalogService;

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub database: Arc<SqliteService>,
    pub catalog: CatalogService,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config).await?;

        match command {
            Some(Commands::Seed { file, keep }) => app.seed(&file, keep).await,
            Some(Commands::Start) | None => Self::start_server(app).await,
        }
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let storage = AppStorage::init().await?;

        let db_path = storage.database_path(&config);
        let database = Arc::new(
            SqliteService::init(&db_path)
                .await
                .with_context(|| format!("Failed to open database: {}", db_path.display()))?,
        );
        tracing::debug!(path = %db_path.display(), "Database ready");

        let catalog = CatalogService::new(Arc::new(database.clone()));
        let shutdown = ShutdownService::new(database.clone());

        Ok(Self {
            shutdown,
            config,
            storage,
            database,
            catalog,
        })
    }

    fn init_logging() {
        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    /// Load products from a JSON file, then close the database
    async fn seed(self, file: &Path, keep: bool) -> Result<()> {
        let products = read_seed_file(file)?;
        let inserted = self
            .catalog
            .load_products(&products, keep)
            .await
            .context("Failed to load products")?;

        tracing::info!(inserted, keep, file = %file.display(), "Seeded products");
        self.shutdown.shutdown().await;
        Ok(())
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers FIRST (before any blocking calls)
        app.shutdown.install_signal_handlers();

        app.shutdown
            .register(app.database.start_checkpoint_task(app.shutdown.subscribe()))
            .await;

        tracing::info!(
            data_dir = %app.storage.data_dir().display(),
            "Catalog server starting"
        );

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.shutdown().await;

        Ok(())
    }

    #[cfg(test)]
    pub async fn for_test() -> Self {
        let database = Arc::new(SqliteService::in_memory().await.unwrap());
        let config = AppConfig {
            server: crate::core::config::ServerConfig {
                host: crate::core::constants::DEFAULT_HOST.to_string(),
                port: crate::core::constants::DEFAULT_PORT,
            },
            database: Default::default(),
        };
        Self {
            shutdown: ShutdownService::new(database.clone()),
            config,
            storage: AppStorage::init_for_test(std::env::temp_dir()),
            catalog: CatalogService::new(Arc::new(database.clone())),
            database,
        }
    }
}

/// Read and validate a JSON array of products
fn read_seed_file(path: &Path) -> Result<Vec<NewProduct>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let products: Vec<NewProduct> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in seed file: {}", path.display()))?;

    for (index, product) in products.iter().enumerate() {
        product
            .validate()
            .with_context(|| format!("Invalid product at index {} ({})", index, product.name))?;
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_seed_file() {
        let file = seed_file(
            r#"[
                {"name": "accent chair", "price": 25.99, "company": "marcos", "featured": true},
                {"name": "bar stool", "price": 40.99, "rating": 4.2, "company": "ikea"}
            ]"#,
        );
        let products = read_seed_file(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].rating, 4.5);
        assert!(products[0].featured);
        assert!(!products[1].featured);
    }

    #[test]
    fn test_read_seed_file_rejects_unknown_company() {
        let file = seed_file(r#"[{"name": "lamp", "price": 5.0, "company": "acme"}]"#);
        let err = read_seed_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn test_read_seed_file_rejects_invalid_json() {
        let file = seed_file("{not json");
        let err = read_seed_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_read_seed_file_missing() {
        assert!(read_seed_file(Path::new("/nonexistent/products.json")).is_err());
    }

    #[tokio::test]
    async fn test_bundled_fixture_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/products.json");
        let products = read_seed_file(&path).unwrap();

        let app = CoreApp::for_test().await;
        let inserted = app.catalog.load_products(&products, false).await.unwrap();
        assert_eq!(inserted as usize, products.len());
    }
}

//! Example: fetching the dashboard overview counters
//!
//! Signs in against a running Lectern backend (or re-uses credentials left
//! on disk by a previous run) and prints the overview counters.
//!
//! # Setup
//!
//! 1. Point the client at your backend: ```bash export
//!    LECTERN_API_BASE_URL=http://localhost:8080/api/v1 ```
//!
//! 2. Provide credentials for the first run: ```bash export
//!    LECTERN_EMAIL=admin@example.com LECTERN_PASSWORD=... ```
//!
//! 3. Run this example: ```bash cargo run --example dashboard_overview ```

use std::sync::Arc;

use lectern_client::{config, ApiClient};
use lectern_common::{FileStore, HttpRefreshApi, MemoryStore, TokenStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let api_config = config::load()?;

    let tokens = Arc::new(TokenStore::new(
        Arc::new(FileStore::new(".lectern-credentials.json")),
        Arc::new(MemoryStore::new()),
        Arc::new(HttpRefreshApi::new(&api_config.base_url)),
    ));

    let client = ApiClient::builder().config(api_config).tokens(tokens.clone()).build()?;

    if !tokens.is_authenticated() {
        let email = std::env::var("LECTERN_EMAIL")?;
        let password = std::env::var("LECTERN_PASSWORD")?;
        let session = client.auth().sign_in(&email, &password).await?;
        println!("signed in as {} ({})", session.user_id, session.role);
    }

    let school_id = tokens.session().map(|session| session.school_id).unwrap_or_default();
    let stats = client.dashboard().stats(&school_id).await?;

    println!("Dashboard overview");
    println!("==================");
    println!("schools:  {}", stats.total_schools);
    println!("books:    {}", stats.total_books);
    println!("admins:   {}", stats.total_admins);
    println!("students: {}", stats.total_students);

    Ok(())
}

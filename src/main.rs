// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` to surface construction failures.

use sitedesk_cli::{api::ApiClient, ui};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // Create an API client configured by the environment variable
    // `SITEDESK_API_URL` or default to http://localhost:8080/api.
    let api = ApiClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    ui::main_menu(api)
}

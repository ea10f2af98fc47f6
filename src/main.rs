mod cli;

use activity_signup_core::app::App;
use activity_signup_core::console::ConsoleView;
use activity_signup_core::create_client;
use activity_signup_core::error::Result;
use activity_signup_core::storage::FileTokenStore;

use cli::{CliConfig, Command};

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = CliConfig::parse()?;
    log::debug!("Using server {}", config.client.base_url);

    let client = create_client(config.client.base_url.clone()).await?;
    let store = FileTokenStore::new(&config.client.session_file);
    let echo_directory = config.command == Command::List;
    let mut app = App::new(client, store, ConsoleView::new(echo_directory));

    // Same as opening the page: check the stored login, then load the list.
    app.start().await;

    match config.command {
        Command::List => {}
        Command::Activities => app.view().print_selector(),
        Command::Whoami => app.view().print_banner(),
        Command::Login { username, password } => {
            if app.login(&username, &password).await {
                app.view().print_banner();
            }
        }
        Command::Logout => app.logout(),
        Command::Signup(form) => {
            app.signup(&form).await;
        }
        Command::Unregister(form) => {
            app.unregister(&form).await;
        }
    }

    let failed = app.view().login_error().is_some()
        || app.view().last_notification().is_some_and(|n| n.is_error());
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

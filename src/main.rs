//! Recycle web client - Entry Point
//!
//! Command-line front end for logging in and sending contact inquiries.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::info;

use recycle_web_client::auth::{login, logout};
use recycle_web_client::contact::{self, ContactForm, INQUIRY_TYPES};
use recycle_web_client::credentials::{Credential, CredentialStore, FileStore};
use recycle_web_client::error::ClientError;
use recycle_web_client::error::handlers::{handle_error, user_message};
use recycle_web_client::{ApiClient, ClientConfig};

#[derive(Parser, Debug)]
#[command(name = "recycle-web-client")]
#[command(about = "Log in and send contact inquiries to the recycling service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the issued tokens
    Login { username: String, password: String },

    /// Forget the stored tokens
    Logout,

    /// Report whether a token pair is stored
    Whoami,

    /// Send a contact inquiry
    Contact {
        /// One of: 서비스, 컨설팅, 가격, 기타
        #[arg(long, default_value = "")]
        inquiry_type: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        company: String,
        /// Format: 010-1234-5678
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        content: String,
        /// Agree to the collection and use of personal information
        #[arg(long)]
        agree: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            handle_error(&e);
            println!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<bool, ClientError> {
    let config = ClientConfig::load()?;
    let store: Arc<dyn CredentialStore> =
        Arc::new(FileStore::new(config.storage.token_file_path()));
    let client = ApiClient::new(&config.api, Arc::clone(&store))?;
    info!("Using backend {}", client.base_url());

    match command {
        Command::Login { username, password } => {
            let outcome = login(&client, store.as_ref(), &username, &password).await;
            println!("{}", outcome.message());
            Ok(outcome.is_success())
        }
        Command::Logout => {
            logout(store.as_ref())?;
            println!("Logged out.");
            Ok(true)
        }
        Command::Whoami => {
            let logged_in = Credential::load(store.as_ref())?.is_some();
            println!("{}", if logged_in { "Logged in." } else { "Not logged in." });
            Ok(true)
        }
        Command::Contact {
            inquiry_type,
            name,
            company,
            phone,
            email,
            content,
            agree,
        } => {
            if !inquiry_type.is_empty() && !INQUIRY_TYPES.contains(&inquiry_type.as_str()) {
                println!("Unknown inquiry type. Choose one of: {}", INQUIRY_TYPES.join(", "));
                return Ok(false);
            }

            let mut form = ContactForm::new();
            form.set_inquiry_type(inquiry_type);
            form.set_name(name);
            form.set_company(company);
            form.set_phone(phone);
            form.set_email(email);
            form.set_content(content);
            form.set_agree_to_terms(agree);

            for (field, message) in form.error_messages() {
                println!("{field}: {message}");
            }

            let result = contact::submit(&mut form, &client).await;
            if let Some(message) = form.status().message() {
                println!("{message}");
            }
            // The status line already reports the failure.
            Ok(result.is_ok())
        }
    }
}

//! Connect Shop CLI - USSD transfer codes and contact management.
//!
//! # Usage
//!
//! ```bash
//! # Verify transfer inputs
//! connect-shop verify 01012345678 01012345678 50
//!
//! # Print the transfer code (literal # for copying)
//! connect-shop code 01012345678 50
//!
//! # Print the tel: dial URI (%23 terminator)
//! connect-shop code 01012345678 50 --dial
//!
//! # Manage contacts
//! connect-shop contact add "Ahmed" 01012345678
//! connect-shop contact suggest 010
//! connect-shop contact list
//! ```
//!
//! # Commands
//!
//! - `verify` - Validate a phone, its confirmation, and an amount
//! - `code` - Build the `*9*7*{phone}*{amount}` transfer code
//! - `contact` - Add, find, edit, delete, list and suggest contacts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use connect_shop_cli::commands;

#[derive(Parser)]
#[command(name = "connect-shop")]
#[command(author, version, about = "Connect Shop USSD transfer tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a phone number, its confirmation, and an amount
    Verify {
        /// Recipient phone number (01x xxxx xxxx)
        phone: String,

        /// Phone number typed a second time
        confirm: String,

        /// Whole-pound amount
        amount: String,
    },
    /// Build the USSD transfer code
    Code {
        /// Recipient phone number
        phone: String,

        /// Whole-pound amount
        amount: String,

        /// Print the tel: dial URI instead of the copyable code
        #[arg(long)]
        dial: bool,
    },
    /// Manage saved contacts
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },
}

#[derive(Subcommand)]
enum ContactAction {
    /// Save a new contact
    Add {
        /// Contact name
        name: String,

        /// Contact phone number
        phone: String,
    },
    /// Look up a contact by phone number
    Find {
        /// Phone number to look up
        phone: String,
    },
    /// Look up a contact's number by name
    FindName {
        /// Name to look up
        name: String,
    },
    /// Rekey a contact found by its current phone number
    Edit {
        /// Current phone number
        phone: String,

        /// New contact name
        #[arg(short, long)]
        name: Option<String>,

        /// New phone number
        #[arg(short = 'p', long = "phone")]
        new_phone: Option<String>,
    },
    /// Delete a contact by phone number
    Delete {
        /// Phone number to delete
        phone: String,
    },
    /// List all contact names
    List,
    /// Autocomplete contacts by phone prefix
    Suggest {
        /// Typed phone prefix (3+ characters reach the store)
        prefix: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Verify {
            phone,
            confirm,
            amount,
        } => commands::code::verify(&phone, &confirm, &amount)?,
        Commands::Code {
            phone,
            amount,
            dial,
        } => commands::code::code(&phone, &amount, dial)?,
        Commands::Contact { action } => {
            let store = commands::contact::open_store()?;
            match action {
                ContactAction::Add { name, phone } => {
                    commands::contact::add(&store, &name, &phone)?;
                }
                ContactAction::Find { phone } => commands::contact::find(&store, &phone)?,
                ContactAction::FindName { name } => commands::contact::find_name(&store, &name)?,
                ContactAction::Edit {
                    phone,
                    name,
                    new_phone,
                } => commands::contact::edit(&store, &phone, name.as_deref(), new_phone.as_deref())?,
                ContactAction::Delete { phone } => commands::contact::delete(&store, &phone)?,
                ContactAction::List => commands::contact::list(&store)?,
                ContactAction::Suggest { prefix } => {
                    commands::contact::suggest(&store, &prefix)?;
                }
            }
        }
    }
    Ok(())
}

// UI layer: the three-level interactive menu and the per-resource flows.
// Menus dispatch on enumerated commands selected through `dialoguer`, and
// every flow recovers from API failures locally so the loop always regains
// control.

pub mod contacts;
pub mod users;

use std::time::Duration;

use anyhow::Result;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{ApiClient, ApiError, ContactApi, UserApi};

#[derive(Clone, Copy)]
enum MainCommand {
    Users,
    Contacts,
    Exit,
}

#[derive(Clone, Copy)]
enum CrudCommand {
    FindById,
    ObtainAll,
    Create,
    Update,
    Delete,
    Back,
}

const MAIN_MENU: [(&str, MainCommand); 3] = [
    ("Access Users CRUD", MainCommand::Users),
    ("Access Contact CRUD", MainCommand::Contacts),
    ("Exit", MainCommand::Exit),
];

const USERS_MENU: [(&str, CrudCommand); 6] = [
    ("Obtain user by id", CrudCommand::FindById),
    ("Obtain all users", CrudCommand::ObtainAll),
    ("Create user", CrudCommand::Create),
    ("Update user", CrudCommand::Update),
    ("Delete user", CrudCommand::Delete),
    ("Exit to main menu", CrudCommand::Back),
];

const CONTACTS_MENU: [(&str, CrudCommand); 6] = [
    ("Obtain contact by id", CrudCommand::FindById),
    ("Obtain all contacts", CrudCommand::ObtainAll),
    ("Create contact", CrudCommand::Create),
    ("Update contact", CrudCommand::Update),
    ("Delete contact", CrudCommand::Delete),
    ("Exit to main menu", CrudCommand::Back),
];

/// Main interactive loop. Blocks until the user picks Exit.
pub fn main_menu(api: ApiClient) -> Result<()> {
    let users = UserApi::new(api.clone());
    let contacts = ContactApi::new(api);
    loop {
        match select("--- Main Menu ---", &MAIN_MENU)? {
            MainCommand::Users => users_menu(&users)?,
            MainCommand::Contacts => contacts_menu(&contacts)?,
            MainCommand::Exit => {
                println!("Ending client process");
                return Ok(());
            }
        }
    }
}

fn users_menu(api: &UserApi) -> Result<()> {
    loop {
        match select("--- Users Menu ---", &USERS_MENU)? {
            CrudCommand::FindById => {
                users::find_by_id(api)?;
            }
            CrudCommand::ObtainAll => users::obtain_all(api)?,
            CrudCommand::Create => users::create(api)?,
            CrudCommand::Update => users::update(api)?,
            CrudCommand::Delete => users::delete(api)?,
            CrudCommand::Back => {
                println!("Exiting users menu");
                return Ok(());
            }
        }
    }
}

fn contacts_menu(api: &ContactApi) -> Result<()> {
    loop {
        match select("--- Contact Menu ---", &CONTACTS_MENU)? {
            CrudCommand::FindById => {
                contacts::find_by_id(api)?;
            }
            CrudCommand::ObtainAll => contacts::obtain_all(api)?,
            CrudCommand::Create => contacts::create(api)?,
            CrudCommand::Update => contacts::update(api)?,
            CrudCommand::Delete => contacts::delete(api)?,
            CrudCommand::Back => {
                println!("Exiting contact menu");
                return Ok(());
            }
        }
    }
}

fn select<C: Copy>(title: &str, entries: &[(&str, C)]) -> Result<C> {
    let labels: Vec<&str> = entries.iter().map(|(label, _)| *label).collect();
    let choice = Select::new()
        .with_prompt(title)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(entries[choice].1)
}

/// Spinner shown while a request is in flight.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Shared failure rendering: connection problems get their own message,
/// everything else is reported with full detail and logged.
pub(crate) fn report_api_error(err: ApiError, action: &str) {
    match err {
        ApiError::Connection(_) => {
            eprintln!("Error occurred while trying to connect to the server");
        }
        other => {
            log::error!("failed to {action}: {other:?}");
            eprintln!("An unexpected error occurred while trying to {action}:");
            eprintln!("{other:?}");
        }
    }
}

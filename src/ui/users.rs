// Interactive flows for the users resource.

use anyhow::Result;

use super::{report_api_error, spinner};
use crate::api::{ApiError, UserApi};
use crate::input;
use crate::models::{User, UserPatch};

/// Ask for an id and fetch the matching user. Returns the record so the
/// update and delete flows can reuse it.
pub fn find_by_id(api: &UserApi) -> Result<Option<User>> {
    println!("\n-- Finding user --");
    let id = input::prompt_id("Enter the user's id")?;
    let progress = spinner("Fetching user...");
    let outcome = api.find_by_id(id);
    progress.finish_and_clear();
    match outcome {
        Ok(user) => {
            println!("- User found -\n{user}");
            Ok(Some(user))
        }
        Err(ApiError::NotFound) => {
            println!("Couldn't find the user by id: {id}");
            Ok(None)
        }
        Err(err) => {
            report_api_error(err, "find the user");
            Ok(None)
        }
    }
}

pub fn obtain_all(api: &UserApi) -> Result<()> {
    println!("\n-- Printing all users --");
    let progress = spinner("Fetching users...");
    let outcome = api.obtain_all();
    progress.finish_and_clear();
    match outcome {
        Ok(users) if users.is_empty() => println!("There aren't any users in the database"),
        Ok(users) => {
            for user in users {
                println!("{user}");
                println!("-------------------------");
            }
        }
        Err(err) => report_api_error(err, "obtain the users"),
    }
    Ok(())
}

pub fn create(api: &UserApi) -> Result<()> {
    println!("\n-- Creating user --");
    let name = input::prompt_string("Enter the user's name")?;
    let last_name = input::prompt_string("Enter the user's last name")?;
    let phone_number = input::prompt_phone("Enter the phone number")?;
    let email = input::prompt_email("Enter the email")?;
    let password = input::prompt_password("Enter the password")?;
    let user = User::new(name, last_name, phone_number, email, password);

    if !input::confirm("Are you sure you want to create this user?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Creating user...");
    let outcome = api.create(&user);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("User created successfully"),
        Err(err) => report_api_error(err, "create the user"),
    }
    Ok(())
}

pub fn update(api: &UserApi) -> Result<()> {
    println!("\n-- Updating user --");
    println!("Selecting the user to be updated");
    let Some(mut user) = find_by_id(api)? else {
        return Ok(());
    };
    let Some(id) = user.id else {
        log::warn!("server returned a user record without an id");
        return Ok(());
    };
    println!("-------------------------");

    let patch = UserPatch {
        name: input::prompt_string_opt("Enter the new name (leave blank to keep the old one)")?,
        last_name: input::prompt_string_opt(
            "Enter the new last name (leave blank to keep the old one)",
        )?,
        phone_number: input::prompt_phone_opt(
            "Enter the new phone number (leave blank to keep the old one)",
        )?,
        email: input::prompt_email_opt("Enter the new email (leave blank to keep the old one)")?,
        password: input::prompt_password_opt(
            "Enter the new password (leave blank to keep the old one)",
        )?,
    };
    user.merge(patch);

    println!("The updated user will be:");
    println!("{user}");
    if !input::confirm("Are you sure you want to apply the changes?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Updating user...");
    let outcome = api.update(id, &user);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("User updated successfully"),
        Err(err) => report_api_error(err, "update the user"),
    }
    Ok(())
}

pub fn delete(api: &UserApi) -> Result<()> {
    println!("\n-- Deleting user --");
    println!("Selecting the user to be deleted");
    let Some(user) = find_by_id(api)? else {
        return Ok(());
    };
    let Some(id) = user.id else {
        log::warn!("server returned a user record without an id");
        return Ok(());
    };
    println!("-------------------------");

    if !input::confirm("Are you sure you want to delete this user?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Deleting user...");
    let outcome = api.delete(id);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("User deleted successfully"),
        Err(err) => report_api_error(err, "delete the user"),
    }
    Ok(())
}

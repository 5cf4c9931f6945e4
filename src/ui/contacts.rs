// Interactive flows for the contacts resource.

use anyhow::Result;

use super::{report_api_error, spinner};
use crate::api::{ApiError, ContactApi};
use crate::input;
use crate::models::{Contact, ContactPatch};

pub fn find_by_id(api: &ContactApi) -> Result<Option<Contact>> {
    println!("\n-- Finding contact --");
    let id = input::prompt_id("Enter the contact's id")?;
    let progress = spinner("Fetching contact...");
    let outcome = api.find_by_id(id);
    progress.finish_and_clear();
    match outcome {
        Ok(contact) => {
            println!("- Contact found -\n{contact}");
            Ok(Some(contact))
        }
        Err(ApiError::NotFound) => {
            println!("Couldn't find the contact by id: {id}");
            Ok(None)
        }
        Err(err) => {
            report_api_error(err, "find the contact");
            Ok(None)
        }
    }
}

pub fn obtain_all(api: &ContactApi) -> Result<()> {
    println!("\n-- Printing all contacts --");
    let progress = spinner("Fetching contacts...");
    let outcome = api.obtain_all();
    progress.finish_and_clear();
    match outcome {
        Ok(contacts) if contacts.is_empty() => {
            println!("There aren't any contacts in the database")
        }
        Ok(contacts) => {
            for contact in contacts {
                println!("{contact}");
                println!("-------------------------");
            }
        }
        Err(err) => report_api_error(err, "obtain the contacts"),
    }
    Ok(())
}

pub fn create(api: &ContactApi) -> Result<()> {
    println!("\n-- Creating contact --");
    let name = input::prompt_string("Enter your name")?;
    let email = input::prompt_email("Enter your email")?;
    let reason = input::prompt_reason("What is the reason of the contact?")?;
    let message = input::prompt_string("Write the message you want to send us")?;
    let contact = Contact::new(name, email, reason, message);

    if !input::confirm("Are you sure you want to create this contact?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Creating contact...");
    let outcome = api.create(&contact);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("Contact created successfully"),
        Err(err) => report_api_error(err, "create the contact"),
    }
    Ok(())
}

pub fn update(api: &ContactApi) -> Result<()> {
    println!("\n-- Updating contact --");
    println!("Selecting the contact to be updated");
    let Some(mut contact) = find_by_id(api)? else {
        return Ok(());
    };
    let Some(id) = contact.id else {
        log::warn!("server returned a contact record without an id");
        return Ok(());
    };
    println!("-------------------------");

    let patch = ContactPatch {
        name: input::prompt_string_opt("Enter the new name (leave blank to keep the old one)")?,
        email: input::prompt_email_opt("Enter the new email (leave blank to keep the old one)")?,
        reason: input::prompt_reason_opt("Select the new reason")?,
        message: input::prompt_string_opt(
            "Enter the new message (leave blank to keep the old one)",
        )?,
    };
    contact.merge(patch);

    println!("The updated contact will be:");
    println!("{contact}");
    if !input::confirm("Are you sure you want to apply the changes?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Updating contact...");
    let outcome = api.update(id, &contact);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("Contact updated successfully"),
        Err(err) => report_api_error(err, "update the contact"),
    }
    Ok(())
}

pub fn delete(api: &ContactApi) -> Result<()> {
    println!("\n-- Deleting contact --");
    println!("Selecting the contact to be deleted");
    let Some(contact) = find_by_id(api)? else {
        return Ok(());
    };
    let Some(id) = contact.id else {
        log::warn!("server returned a contact record without an id");
        return Ok(());
    };
    println!("-------------------------");

    if !input::confirm("Are you sure you want to delete this contact?")? {
        println!("Operation cancelled");
        return Ok(());
    }
    let progress = spinner("Deleting contact...");
    let outcome = api.delete(id);
    progress.finish_and_clear();
    match outcome {
        Ok(()) => println!("Contact deleted successfully"),
        Err(err) => report_api_error(err, "delete the contact"),
    }
    Ok(())
}

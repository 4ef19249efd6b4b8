//! Console front-end for the pre-approval wizard.
//!
//! The loop prompts for every field on the current step, then asks for an
//! action: continue, go back, re-edit the step, or (on the last step)
//! submit. All step transitions and validation live in the core wizard; this
//! module only translates terminal input into wizard calls and prints the
//! error map back.

use anyhow::Result;

use mortgage_core::{
    EmploymentStatus, FormField, LoanPurpose, LoggingSubmitter, Occupancy, PropertyType,
    STATE_CODES, SubmitError, Wizard, WizardStep,
};

use crate::input;

pub fn run() -> Result<()> {
    let mut wizard = Wizard::new();
    let mut submitter = LoggingSubmitter;

    println!("HomeLend mortgage pre-approval application");
    println!("Press Enter at any prompt to keep the value shown in brackets.");

    loop {
        let step = wizard.step();
        println!();
        println!(
            "Step {} of {}: {} ({}% complete)",
            step.number(),
            WizardStep::TOTAL,
            step.title(),
            step.progress_percent(),
        );

        for &field in step.fields() {
            if !prompt_field(&mut wizard, field)? {
                return Ok(());
            }
        }

        let Some(action) = prompt_action(step.is_final())? else {
            return Ok(());
        };
        match action {
            Action::Continue => {
                if !wizard.advance() {
                    print_errors(&wizard);
                }
            }
            Action::Submit => match wizard.submit(&mut submitter) {
                Ok(receipt) => {
                    println!();
                    println!("{}", receipt.confirmation);
                    return Ok(());
                }
                Err(SubmitError::InvalidFields) => print_errors(&wizard),
                Err(err) => return Err(err.into()),
            },
            Action::Back => {
                if !wizard.go_back() {
                    println!("Already on the first step.");
                }
            }
            Action::Edit => {}
            Action::Quit => return Ok(()),
        }
    }
}

enum Action {
    Continue,
    Submit,
    Back,
    Edit,
    Quit,
}

/// Prompts for one field and applies the edit. An empty line keeps the
/// current value. Returns `false` when stdin is exhausted.
fn prompt_field(
    wizard: &mut Wizard,
    field: FormField,
) -> Result<bool> {
    if field.is_flag() {
        let current = wizard.form().flag(field).unwrap_or(false);
        let shown = if current { "y" } else { "n" };
        let prompt = format!("  {} (y/n) [{shown}]: ", field.label());
        let Some(line) = input::read_line(&prompt)? else {
            return Ok(false);
        };
        match line.to_ascii_lowercase().as_str() {
            "" => {}
            "y" | "yes" => wizard.update_field(field, true.into()),
            "n" | "no" => wizard.update_field(field, false.into()),
            other => println!("  '{other}' is not y or n; keeping {shown}."),
        }
        return Ok(true);
    }

    let prompt = match choices_for(field) {
        Some(choices) => format!(
            "  {} ({}) [{}]: ",
            field.label(),
            choices,
            wizard.form().text(field).unwrap_or(""),
        ),
        None => format!(
            "  {} [{}]: ",
            field.label(),
            wizard.form().text(field).unwrap_or(""),
        ),
    };
    let Some(line) = input::read_line(&prompt)? else {
        return Ok(false);
    };
    if !line.is_empty() {
        wizard.update_field(field, line.into());
    }
    Ok(true)
}

/// The accepted tokens for enumerated fields, joined for the prompt.
fn choices_for(field: FormField) -> Option<String> {
    let tokens: Vec<&str> = match field {
        FormField::LoanPurpose => LoanPurpose::ALL.iter().map(|p| p.as_str()).collect(),
        FormField::PropertyType => PropertyType::ALL.iter().map(|p| p.as_str()).collect(),
        FormField::Occupancy => Occupancy::ALL.iter().map(|o| o.as_str()).collect(),
        FormField::EmploymentStatus => {
            EmploymentStatus::ALL.iter().map(|s| s.as_str()).collect()
        }
        FormField::State => return Some(format!("two-letter code, e.g. {}", STATE_CODES[4])),
        _ => return None,
    };
    Some(tokens.join(" | "))
}

fn prompt_action(is_final: bool) -> Result<Option<Action>> {
    let prompt = if is_final {
        "[s]ubmit, [b]ack, [e]dit this step, or [q]uit: "
    } else {
        "[c]ontinue, [b]ack, [e]dit this step, or [q]uit: "
    };
    loop {
        let Some(line) = input::read_line(prompt)? else {
            return Ok(None);
        };
        let action = match line.to_ascii_lowercase().as_str() {
            "c" | "continue" if !is_final => Action::Continue,
            "s" | "submit" if is_final => Action::Submit,
            "b" | "back" => Action::Back,
            "e" | "edit" => Action::Edit,
            "q" | "quit" => Action::Quit,
            _ => continue,
        };
        return Ok(Some(action));
    }
}

fn print_errors(wizard: &Wizard) {
    println!();
    println!("Please fix the following before continuing:");
    for (field, message) in wizard.errors().iter() {
        println!("  {}: {message}", field.label());
    }
}

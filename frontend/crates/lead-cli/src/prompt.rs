//! Line-oriented driver for the onboarding wizard.

use lead_core::{DraftField, OnboardingWizard};

use std::io::{self, BufRead, Write};

const BACK: &str = "back";
const QUIT: &str = "quit";
/// Longer choice lists are accepted but not printed
const MAX_LISTED_CHOICES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromptOutcome {
    /// The wizard is on its last step with every step filled in
    Submit,
    /// The user typed `quit` or closed the input
    Quit,
}

enum FieldInput {
    Value,
    Back,
    Quit,
}

/// Walk the wizard one step at a time.
///
/// Every field shows its current value; an empty line keeps it. Typing
/// `back` returns to the previous step and `quit` abandons the wizard.
pub(crate) fn run_wizard<R: BufRead, W: Write>(
    wizard: &mut OnboardingWizard,
    input: &mut R,
    output: &mut W,
) -> io::Result<PromptOutcome> {
    writeln!(output, "Type '{BACK}' to return to the previous step, '{QUIT}' to stop.")?;

    'steps: loop {
        let step = wizard.step();
        writeln!(output)?;
        writeln!(output, "{step}")?;
        if let Some(error) = wizard.error() {
            writeln!(output, "! {error}")?;
        }

        for field in DraftField::for_step(step) {
            match read_field(wizard, *field, input, output)? {
                FieldInput::Value => {}
                FieldInput::Back => {
                    if !wizard.back() {
                        writeln!(output, "! Already on the first step")?;
                    }
                    continue 'steps;
                }
                FieldInput::Quit => return Ok(PromptOutcome::Quit),
            }
        }

        if step.is_last() {
            return Ok(PromptOutcome::Submit);
        }
        wizard.next();
    }
}

fn read_field<R: BufRead, W: Write>(
    wizard: &mut OnboardingWizard,
    field: DraftField,
    input: &mut R,
    output: &mut W,
) -> io::Result<FieldInput> {
    loop {
        let marker = if field.is_required() { "*" } else { "" };
        let current = wizard.draft().get(field).to_string();
        match field.choices() {
            Some(choices) if choices.len() <= MAX_LISTED_CHOICES => {
                write!(output, "{}{marker} ({}) [{current}]: ", field.label(), choices.join(" / "))?
            }
            _ => write!(output, "{}{marker} [{current}]: ", field.label())?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(FieldInput::Quit);
        }

        let answer = line.trim();
        match answer {
            "" => return Ok(FieldInput::Value),
            BACK => return Ok(FieldInput::Back),
            QUIT => return Ok(FieldInput::Quit),
            _ => {}
        }

        if let Some(choices) = field.choices()
            && !choices.contains(&answer)
        {
            writeln!(output, "! Not one of the available choices")?;
            continue;
        }

        wizard.set_field(field, answer);
        return Ok(FieldInput::Value);
    }
}

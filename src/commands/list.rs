use crate::config::Config;
use crate::store::Store;
use crate::utils::clipboard::Clipboard;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::interactive::Interaction;
use crate::utils::output::{OutputStyle, print_success, print_warning};
use anyhow::Result;

pub fn handle_list_command(
    config: &Config,
    store: &Store,
    ui: &mut dyn Interaction,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let collection = store.load()?;

    if collection.prompts.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts".to_string(),
        });
        return Ok(());
    }

    OutputStyle::print_header(&format!("Saved Prompts ({})", collection.prompts.len()));
    for (index, prompt) in collection.prompts.iter().enumerate() {
        OutputStyle::print_prompt_line(index, prompt);
    }

    if !ui.confirm("Do you want to view details of a prompt?", false)? {
        return Ok(());
    }

    let index = prompt_for_index(ui, collection.prompts.len())?;
    let prompt = &collection.prompts[index];
    OutputStyle::print_prompt_details(prompt);

    if config.copy_on_list && ui.confirm("Copy this prompt to clipboard?", false)? {
        clipboard.copy(&prompt.content)?;
        print_success("Prompt copied to clipboard!");
    }

    Ok(())
}

/// Ask for a 1-based prompt number until it is in range; out-of-range
/// input never reaches the store
fn prompt_for_index(ui: &mut dyn Interaction, count: usize) -> Result<usize> {
    loop {
        let input = ui.input(&format!("Enter the number of the prompt to view (1-{count}): "))?;
        match input.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Ok(number - 1),
            _ => print_warning(&format!("Please enter a number between 1 and {count}")),
        }
    }
}

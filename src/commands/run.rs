use crate::commands::selection_labels;
use crate::models::Parameter;
use crate::store::Store;
use crate::template;
use crate::utils::clipboard::Clipboard;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::interactive::Interaction;
use crate::utils::output::{OutputStyle, print_success};
use anyhow::Result;

pub fn handle_run_command(
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

    let labels = selection_labels(&collection.prompts);
    let Some(index) = ui.select("Select a prompt to execute:", &labels)? else {
        handle_flow(FlowResult::Cancelled("Run cancelled".to_string()));
        return Ok(());
    };
    let prompt = &collection.prompts[index];

    let values = collect_values(ui, &prompt.parameters)?;
    let rendered = template::render_template(&prompt.content, &values);

    clipboard.copy(&rendered)?;
    print_success("Prompt copied to clipboard!");

    println!();
    println!("{}", OutputStyle::title("Executed Prompt:"));
    println!("{rendered}");

    Ok(())
}

/// Ask a value for each parameter in order; empty input takes the
/// stored default
fn collect_values(
    ui: &mut dyn Interaction,
    parameters: &[Parameter],
) -> Result<Vec<(String, String)>> {
    let mut values = Vec::with_capacity(parameters.len());

    for param in parameters {
        let value = ui.input_with_default(&format!("Value for {}", param.name), &param.default)?;
        values.push((param.name.clone(), value));
    }

    Ok(values)
}

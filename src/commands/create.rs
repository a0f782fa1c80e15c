use crate::commands::{acquire_content, collect_parameters};
use crate::config::Config;
use crate::store::Store;
use crate::utils::interactive::Interaction;
use crate::utils::output::{print_success, print_warning};
use anyhow::Result;

pub fn handle_create_command(
    config: &Config,
    store: &Store,
    ui: &mut dyn Interaction,
) -> Result<()> {
    let name = loop {
        let name = ui.input("Enter a name for the prompt: ")?;
        if !name.trim().is_empty() {
            break name.trim().to_string();
        }
        print_warning("Name is required");
    };

    let content = match acquire_content(config, ui, None)? {
        Some(content) => content,
        None => {
            print_warning("No content was provided. Aborting prompt creation.");
            return Ok(());
        }
    };

    let parameters = collect_parameters(ui, &content, &[])?;

    let mut collection = store.load()?;
    let prompt = store.create(&mut collection, name, content, parameters)?;
    print_success(&format!("Prompt '{}' created!", prompt.name));

    Ok(())
}

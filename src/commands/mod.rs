pub mod create;
pub mod edit;
pub mod list;
pub mod run;

use crate::config::Config;
use crate::models::{Parameter, Prompt};
use crate::template;
use crate::utils::editor;
use crate::utils::interactive::Interaction;
use crate::utils::output::print_info;
use anyhow::Result;

/// Ask for content via the external editor or the multiline terminal
/// entry. Returns `None` when the result is empty or whitespace-only;
/// callers decide whether that aborts (create) or keeps the prior
/// content (edit).
pub(crate) fn acquire_content(
    config: &Config,
    ui: &mut dyn Interaction,
    current: Option<&str>,
) -> Result<Option<String>> {
    let use_editor = ui.confirm("Open your editor to write the content?", true)?;

    let content = if use_editor {
        let editor_cmd = config.resolve_editor();
        print_info(&format!(
            "Opening {editor_cmd}; save and close the file when done"
        ));
        editor::open_editor(&editor_cmd, current)?
    } else {
        ui.multiline("Enter the content below, {{param}} marks a parameter:")?
    };

    if content.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(content))
    }
}

/// Detect placeholders in `content` and ask a default value for each,
/// pre-filling defaults carried over from `prior` by name
pub(crate) fn collect_parameters(
    ui: &mut dyn Interaction,
    content: &str,
    prior: &[Parameter],
) -> Result<Vec<Parameter>> {
    let names = template::extract_parameters(content);

    if names.is_empty() {
        print_info("No parameters detected. Use {{param}} syntax to define parameters.");
        return Ok(Vec::new());
    }

    print_info(&format!("Detected parameters: {}", names.join(", ")));

    let mut parameters = Vec::with_capacity(names.len());
    for name in names {
        let carried = prior
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.default.as_str())
            .unwrap_or("");
        let default = ui.input_with_default(&format!("Default value for {name}"), carried)?;
        parameters.push(Parameter { name, default });
    }

    Ok(parameters)
}

pub(crate) fn selection_labels(prompts: &[Prompt]) -> Vec<String> {
    prompts.iter().map(|p| p.to_string()).collect()
}

use crate::commands::{acquire_content, collect_parameters, selection_labels};
use crate::config::Config;
use crate::models::recompute_parameters;
use crate::store::Store;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::interactive::Interaction;
use crate::utils::output::{OutputStyle, print_info, print_success, print_warning};
use anyhow::Result;

pub fn handle_edit_command(config: &Config, store: &Store, ui: &mut dyn Interaction) -> Result<()> {
    let mut collection = store.load()?;

    if collection.prompts.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts".to_string(),
        });
        return Ok(());
    }

    let labels = selection_labels(&collection.prompts);
    let Some(index) = ui.select("Select a prompt to edit:", &labels)? else {
        handle_flow(FlowResult::Cancelled("Edit cancelled".to_string()));
        return Ok(());
    };
    let prompt = collection.prompts[index].clone();

    let name = ui.input_with_default("Enter a new name for the prompt", &prompt.name)?;

    println!("Current content:");
    println!("{}", OutputStyle::separator());
    println!("{}", prompt.content);
    println!("{}", OutputStyle::separator());

    let content = match acquire_content(config, ui, Some(&prompt.content))? {
        Some(content) => content,
        None => {
            print_warning("No content entered. Keeping original content.");
            prompt.content.clone()
        }
    };

    // Recompute parameters for the new content up front so the user
    // sees what survived before deciding whether to re-enter defaults
    let recomputed = recompute_parameters(&content, &prompt.parameters);

    let defaults = if recomputed.is_empty() {
        print_info("No parameters detected in the prompt.");
        recomputed
    } else if ui.confirm("Update parameter default values?", true)? {
        collect_parameters(ui, &content, &prompt.parameters)?
    } else {
        recomputed
    };

    let updated = store.update(&mut collection, index, |p| {
        p.name = name;
        p.set_content(content);
        p.set_defaults(&defaults);
    })?;

    print_success(&format!("Prompt '{}' updated!", updated.name));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parameter;
    use crate::utils::interactive::script::{Scripted, Step, input, multiline};
    use uuid::Uuid;

    fn temp_store() -> Store {
        let path = std::env::temp_dir()
            .join(format!("prompta-test-{}", Uuid::new_v4()))
            .join("prompts.json");
        Store::with_path(path)
    }

    fn param(name: &str, default: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            default: default.to_string(),
        }
    }

    fn seed(store: &Store, name: &str, content: &str, parameters: Vec<Parameter>) -> crate::models::Prompt {
        let mut collection = store.load().unwrap();
        store
            .create(&mut collection, name.to_string(), content.to_string(), parameters)
            .unwrap()
    }

    #[test]
    fn test_edit_recomputes_parameters_preserving_defaults() {
        let store = temp_store();
        let config = Config::default();
        seed(
            &store,
            "greet",
            "Hi {{name}} from {{city}}",
            vec![param("name", "Bo"), param("city", "Oslo")],
        );

        let mut ui = Scripted::new(vec![
            Step::Select(Some(0)),
            input(""), // keep the name
            Step::Confirm(false),
            multiline("Bye {{name}}"),
            Step::Confirm(false), // keep existing defaults
        ]);

        handle_edit_command(&config, &store, &mut ui).unwrap();

        let collection = store.load().unwrap();
        let prompt = &collection.prompts[0];
        assert_eq!(prompt.name, "greet");
        assert_eq!(prompt.content, "Bye {{name}}");
        // city dropped, name kept its default
        assert_eq!(prompt.parameters, vec![param("name", "Bo")]);
        assert!(prompt.updated_at.is_some());
    }

    #[test]
    fn test_edit_can_update_defaults_interactively() {
        let store = temp_store();
        let config = Config::default();
        seed(&store, "greet", "Hi {{name}}", vec![param("name", "Bo")]);

        let mut ui = Scripted::new(vec![
            Step::Select(Some(0)),
            input("greeting"),
            Step::Confirm(false),
            multiline("Hi {{name}}, meet {{other}}"),
            Step::Confirm(true), // update defaults
            input(""),           // keep Bo for name
            input("Ada"),        // new default for other
        ]);

        handle_edit_command(&config, &store, &mut ui).unwrap();

        let prompt = &store.load().unwrap().prompts[0];
        assert_eq!(prompt.name, "greeting");
        assert_eq!(
            prompt.parameters,
            vec![param("name", "Bo"), param("other", "Ada")]
        );
    }

    #[test]
    fn test_empty_edit_content_keeps_prior_content() {
        let store = temp_store();
        let config = Config::default();
        seed(&store, "greet", "Hi {{name}}", vec![param("name", "Bo")]);

        let mut ui = Scripted::new(vec![
            Step::Select(Some(0)),
            input(""),
            Step::Confirm(false),
            multiline(""),        // empty falls back to prior content
            Step::Confirm(false), // keep defaults
        ]);

        handle_edit_command(&config, &store, &mut ui).unwrap();

        let prompt = &store.load().unwrap().prompts[0];
        assert_eq!(prompt.content, "Hi {{name}}");
        assert_eq!(prompt.parameters, vec![param("name", "Bo")]);
    }

    #[test]
    fn test_cancelled_selection_leaves_store_untouched() {
        let store = temp_store();
        let config = Config::default();
        seed(&store, "greet", "Hi", vec![]);

        let mut ui = Scripted::new(vec![Step::Select(None)]);

        handle_edit_command(&config, &store, &mut ui).unwrap();

        let prompt = &store.load().unwrap().prompts[0];
        assert!(prompt.updated_at.is_none());
    }

    #[test]
    fn test_edit_never_reuses_or_mutates_the_id() {
        let store = temp_store();
        let config = Config::default();
        let created = seed(&store, "greet", "Hi", vec![]);

        let mut ui = Scripted::new(vec![
            Step::Select(Some(0)),
            input("renamed"),
            Step::Confirm(false),
            multiline("new text"),
        ]);

        handle_edit_command(&config, &store, &mut ui).unwrap();

        assert_eq!(store.load().unwrap().prompts[0].id, created.id);
    }
}

use crate::config::Config;
use crate::models::{Parameter, Prompt, PromptCollection};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

/// Whole-collection record store. One instance is built per invocation
/// and handed to the command that needs it; a command loads the full
/// document at most once and every mutation rewrites it in a single
/// save.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.store_file.clone(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted collection; a missing or empty file reads as
    /// an empty collection (first run auto-initializes)
    pub fn load(&self) -> Result<PromptCollection> {
        if !self.path.exists() {
            return Ok(PromptCollection::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read prompt store: {:?}", self.path))?;

        if content.trim().is_empty() {
            return Ok(PromptCollection::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse prompt store: {:?}", self.path))
    }

    /// Overwrite the entire persisted collection
    pub fn save(&self, collection: &PromptCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory: {parent:?}"))?;
        }

        let content = serde_json::to_string_pretty(collection)
            .context("Failed to serialize prompt collection")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write prompt store: {:?}", self.path))?;

        Ok(())
    }

    /// Append a freshly created prompt to the loaded collection and
    /// persist it
    pub fn create(
        &self,
        collection: &mut PromptCollection,
        name: String,
        content: String,
        parameters: Vec<Parameter>,
    ) -> Result<Prompt> {
        let prompt = Prompt::new(name, content, parameters);
        collection.prompts.push(prompt.clone());
        self.save(collection)?;
        Ok(prompt)
    }

    /// Mutate the record at `index`, stamp its update timestamp, and
    /// persist. The interactive layer validates selection bounds, so an
    /// out-of-range index here is a logic error surfaced as a failure.
    pub fn update<F>(&self, collection: &mut PromptCollection, index: usize, mutate: F) -> Result<Prompt>
    where
        F: FnOnce(&mut Prompt),
    {
        let prompt = collection
            .prompts
            .get_mut(index)
            .with_context(|| format!("No prompt at position {}", index + 1))?;

        mutate(prompt);
        prompt.updated_at = Some(Utc::now());
        let updated = prompt.clone();

        self.save(collection)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> Store {
        let path = std::env::temp_dir()
            .join(format!("prompta-test-{}", Uuid::new_v4()))
            .join("prompts.json");
        Store::with_path(path)
    }

    fn create_one(store: &Store, name: &str, content: &str) -> Prompt {
        let mut collection = store.load().unwrap();
        store
            .create(&mut collection, name.to_string(), content.to_string(), vec![])
            .unwrap()
    }

    #[test]
    fn test_load_is_empty_on_first_run() {
        let store = temp_store();
        let collection = store.load().unwrap();
        assert!(collection.prompts.is_empty());
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let store = temp_store();
        let mut collection = store.load().unwrap();

        let created = store
            .create(
                &mut collection,
                "greet".to_string(),
                "Hello {{name}}!".to_string(),
                vec![Parameter {
                    name: "name".to_string(),
                    default: "Bo".to_string(),
                }],
            )
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.prompts.len(), 1);
        assert_eq!(loaded.prompts[0].id, created.id);
        assert_eq!(loaded.prompts[0].content, "Hello {{name}}!");
        assert_eq!(loaded.prompts[0].parameters.len(), 1);
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let store = temp_store();
        create_one(&store, "greet", "Hi {{name}}");

        let first = std::fs::read_to_string(store.path.clone()).unwrap();
        let collection = store.load().unwrap();
        store.save(&collection).unwrap();
        let second = std::fs::read_to_string(store.path.clone()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_creations_in_same_process_get_distinct_ids() {
        let store = temp_store();

        // Back-to-back creations land in the same millisecond; ids must
        // not depend on timestamps
        let a = create_one(&store, "a", "a");
        let b = create_one(&store, "b", "b");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_stamps_timestamp_and_persists() {
        let store = temp_store();
        let created = create_one(&store, "greet", "Hi {{name}}");

        let mut collection = store.load().unwrap();
        let updated = store
            .update(&mut collection, 0, |p| {
                p.set_content("Bye {{name}}".to_string())
            })
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert!(updated.updated_at.is_some());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.prompts[0].content, "Bye {{name}}");
        assert!(loaded.prompts[0].updated_at.is_some());
    }

    #[test]
    fn test_update_out_of_range_is_an_error() {
        let store = temp_store();
        let mut collection = store.load().unwrap();
        let result = store.update(&mut collection, 3, |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn test_store_document_holds_prompts_key() {
        let store = temp_store();
        create_one(&store, "greet", "Hi");

        let raw = std::fs::read_to_string(store.path.clone()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(doc["prompts"].is_array());
    }
}

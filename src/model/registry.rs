use crate::losses::{DiceAndMae, LossFn};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps the custom component names a model artifact may reference to their
/// numeric definitions. The loader consults this table before deserializing
/// an artifact; an unresolved name is a load failure.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<dyn LossFn>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Registry pre-seeded with the components the shipped artifacts reference.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("DiceAndMAE", Arc::new(DiceAndMae::default()));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, component: Arc<dyn LossFn>) {
        self.components.insert(name.into(), component);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn LossFn>> {
        self.components.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }
}

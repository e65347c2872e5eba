use toolhub_core::{Category, ToolDescriptor, BUILTIN_TOOLS};

/// Ordered catalog of tool descriptors.
pub struct ToolRegistry {
    tools: Vec<&'static ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for tool in BUILTIN_TOOLS.iter() {
            registry.register(tool);
        }
        registry
    }

    /// Append a descriptor. A descriptor with an id already present replaces
    /// the earlier one in place.
    pub fn register(&mut self, tool: &'static ToolDescriptor) -> &mut Self {
        match self.tools.iter_mut().find(|t| t.id == tool.id) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&'static ToolDescriptor> {
        self.tools.iter().copied().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ToolDescriptor> + '_ {
        self.tools.iter().copied()
    }

    /// Tools admitted by `category`, in catalog order.
    pub fn filter(&self, category: Category) -> Vec<&'static ToolDescriptor> {
        self.iter().filter(|t| category.admits(t.category)).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

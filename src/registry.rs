//! Name-based lookup for hosts that register input bindings by string.

use fnv::FnvHashMap;

use crate::commands::Command;

/// Maps stable command identifiers to commands, one entry per command.
#[derive(Debug)]
pub struct CommandRegistry {
    by_name: FnvHashMap<&'static str, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut by_name = FnvHashMap::default();
        for command in Command::ALL {
            by_name.insert(command.name(), command);
        }
        Self { by_name }
    }

    /// Resolve a command identifier, e.g. `"convergence_distance_reset"`.
    pub fn get(&self, name: &str) -> Option<Command> {
        self.by_name.get(name).copied()
    }

    /// Iterate every registered (name, command) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Command)> + '_ {
        self.by_name.iter().map(|(&name, &command)| (name, command))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

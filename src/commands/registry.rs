// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Binary;

/// Capability table: binary id -> callable.
pub struct BinaryRegistry {
    binaries: HashMap<String, Box<dyn Binary>>,
}

impl BinaryRegistry {
    pub fn new() -> Self {
        Self {
            binaries: HashMap::new(),
        }
    }

    /// Register under the binary's own name. Replaces an earlier entry.
    pub fn register(&mut self, binary: Box<dyn Binary>) {
        self.binaries.insert(binary.name().to_string(), binary);
    }

    pub fn get(&self, id: &str) -> Option<&dyn Binary> {
        self.binaries.get(id).map(|b| b.as_ref())
    }

    /// Registered ids, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.binaries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, id: &str) -> bool {
        self.binaries.contains_key(id)
    }
}

impl Default for BinaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatBinary;
use super::cd_cmd::CdBinary;
use super::echo::EchoBinary;
use super::env::EnvBinary;
use super::id_cmd::IdBinary;
use super::ls::LsBinary;
use super::pwd::PwdBinary;
use super::stat_cmd::StatBinary;
use super::which_cmd::WhichBinary;
use super::whoami_cmd::WhoamiBinary;

/// Register every built-in binary
pub fn register_builtins(registry: &mut BinaryRegistry) {
    registry.register(Box::new(CatBinary));
    registry.register(Box::new(CdBinary));
    registry.register(Box::new(EchoBinary));
    registry.register(Box::new(EnvBinary));
    registry.register(Box::new(IdBinary));
    registry.register(Box::new(LsBinary));
    registry.register(Box::new(PwdBinary));
    registry.register(Box::new(StatBinary));
    registry.register(Box::new(WhichBinary));
    registry.register(Box::new(WhoamiBinary));
}

/// Registry holding all built-ins
pub fn create_builtin_registry() -> BinaryRegistry {
    let mut registry = BinaryRegistry::new();
    register_builtins(&mut registry);
    registry
}

//! Runner-environment implementation of the `ActionInputs` port.

use crate::application::ports::ActionInputs;

/// Reads inputs the way the runner supplies them: `INPUT_<NAME>` environment
/// variables, with the name uppercased and spaces replaced by underscores.
pub struct EnvInputs;

/// Environment variable name for an action input.
#[must_use]
pub fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

impl ActionInputs for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        match std::env::var(env_key(name)) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
            Err(_) => None,
        }
    }
}

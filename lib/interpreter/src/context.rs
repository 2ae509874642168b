use std::collections::HashMap;

use crate::{Error, Result};

/// Variables of one session. Entries are only ever added or overwritten.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Context {
    variables: HashMap<String, i64>,
}

impl Context {
    pub fn get(&self, name: &str) -> Result<i64> {
        self.variables.get(name).copied().ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        log::debug!("Setting {name} = {value}");
        self.variables.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn get_and_set() {
        let mut context = Context::default();
        assert!(!context.contains("x"));
        assert_eq!(context.get("x"), Err(Error::UnknownVariable("x".to_string())));
        assert_eq!(context.get("x").unwrap_err().to_string(), "Unknown variable x");

        context.set("x", 5);
        assert!(context.contains("x"));
        assert_eq!(context.get("x"), Ok(5));

        context.set("x", -7);
        assert_eq!(context.get("x"), Ok(-7));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut context = Context::default();
        context.set("Foo", 1);
        assert!(!context.contains("foo"));
        assert!(context.get("FOO").is_err());
    }
}

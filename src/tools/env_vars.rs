#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(not(test))]
use std::env;
use std::str::FromStr;

/// Retrieve the value of an environment variable, if set and not blank.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_env_value` could be tricky to test.
/// To do so, wrap your test with `with_env_vars(vars, fn)`.
/// This function is only available in a test context.
pub fn retrieve_env_value(name: &str) -> Option<String> {
    get_env_var(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Retrieve and parse an environment variable.
/// Falls back to `default` when the variable is missing or can't be parsed.
pub fn retrieve_parsed_env_value<T: FromStr>(name: &str, default: T) -> T {
    retrieve_env_value(name)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    /// A mutable map to host env vars for tests.
    /// When a test is run with `with_env_vars`,
    /// the inner map is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_VARS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| vars.borrow().get(name).cloned())
}

#[cfg(test)]
/// When running tests, env vars are isolated from the process environment.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_vars<F, T>(vars: Vec<(&str, &str)>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_VARS.with(|refcell| {
        let vars = vars
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

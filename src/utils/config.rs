/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets a comma separated list from an environment variable
///
/// Returns `default` when the variable is missing or when any entry fails to parse.
pub fn get_env_list_or_default<T: FromStr + Clone>(env_var: &str, default: &[T]) -> Vec<T> {
    let Ok(val) = env::var(env_var) else {
        return default.to_vec();
    };
    let parsed: Result<Vec<T>, _> = val
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<T>)
        .collect();
    match parsed {
        Ok(list) if !list.is_empty() => list,
        _ => {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default.to_vec()
        }
    }
}

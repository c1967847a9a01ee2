use std::env;
use std::str::FromStr;

use super::errors::{Error, Result};

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";
pub const WORD_BANK_USER_ID: &str = "WORD_BANK_USER_ID";
pub const WORD_BANK_NAME: &str = "WORD_BANK_NAME";
pub const WORD_BANK_SELECTED: &str = "WORD_BANK_SELECTED";
pub const TOP_N_WORDS: &str = "TOP_N_WORDS";

const DEFAULT_USER_ID: i64 = 9;
const DEFAULT_NAME: &str = "Common Words";
const DEFAULT_TOP_N: usize = 300;

/// Everything the seeding run needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub user_id: i64,
    pub name: String,
    pub is_selected: bool,
    pub top_n: usize,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first if a
    /// `.env` file should be taken into account.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(Error::MissingVar { name })
        };

        Ok(Config {
            supabase_url: required(SUPABASE_URL)?,
            supabase_key: required(SUPABASE_KEY)?,
            user_id: parse_or(&lookup, WORD_BANK_USER_ID, DEFAULT_USER_ID)?,
            name: lookup(WORD_BANK_NAME)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            is_selected: parse_or(&lookup, WORD_BANK_SELECTED, false)?,
            top_n: parse_or(&lookup, TOP_N_WORDS, DEFAULT_TOP_N)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| Error::InvalidVar { name, value }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[
            (SUPABASE_URL, "https://project.supabase.co"),
            (SUPABASE_KEY, "secret"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            Config {
                supabase_url: "https://project.supabase.co".to_string(),
                supabase_key: "secret".to_string(),
                user_id: 9,
                name: "Common Words".to_string(),
                is_selected: false,
                top_n: 300,
            }
        );
    }

    #[test]
    fn test_blank_name_uses_default() {
        let config = Config::from_lookup(lookup(&[
            (SUPABASE_URL, "http://localhost:54321"),
            (SUPABASE_KEY, "secret"),
            (WORD_BANK_NAME, " "),
        ]))
        .unwrap();
        assert_eq!(config.name, "Common Words");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SUPABASE_URL, "http://localhost:54321"),
            (SUPABASE_KEY, "secret"),
            (WORD_BANK_USER_ID, "12"),
            (WORD_BANK_NAME, "Basics"),
            (WORD_BANK_SELECTED, "true"),
            (TOP_N_WORDS, " 50 "),
        ]))
        .unwrap();
        assert_eq!(config.user_id, 12);
        assert_eq!(config.name, "Basics");
        assert!(config.is_selected);
        assert_eq!(config.top_n, 50);
    }

    #[test]
    fn test_missing_url() {
        let result = Config::from_lookup(lookup(&[(SUPABASE_KEY, "secret")]));
        assert!(matches!(result, Err(Error::MissingVar { name: SUPABASE_URL })));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let result = Config::from_lookup(lookup(&[
            (SUPABASE_URL, "http://localhost:54321"),
            (SUPABASE_KEY, "  "),
        ]));
        assert!(matches!(result, Err(Error::MissingVar { name: SUPABASE_KEY })));
    }

    #[test]
    fn test_invalid_top_n() {
        let result = Config::from_lookup(lookup(&[
            (SUPABASE_URL, "http://localhost:54321"),
            (SUPABASE_KEY, "secret"),
            (TOP_N_WORDS, "many"),
        ]));
        match result {
            Err(Error::InvalidVar { name, value }) => {
                assert_eq!(name, TOP_N_WORDS);
                assert_eq!(value, "many");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

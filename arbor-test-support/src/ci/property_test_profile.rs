//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite reads its case count, fork mode, and repeat count
//! from the same environment variables so CI can scale them in one place.

use std::env;

/// Environment variable controlling proptest case counts.
pub const ARBOR_PBT_CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";
/// Environment variable controlling how often determinism properties re-run
/// the same input.
pub const ARBOR_PBT_REPEAT_RUNS_ENV_KEY: &str = "ARBOR_PBT_REPEAT_RUNS";

/// Repeat count used when `ARBOR_PBT_REPEAT_RUNS` is unset or invalid.
pub const DEFAULT_REPEAT_RUNS: usize = 5;

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRunProfile {
    cases: u32,
    fork: bool,
    repeat_runs: usize,
}

impl PropertyRunProfile {
    /// Loads a profile from the environment, using `default_cases` when no
    /// valid case count override is present.
    ///
    /// Invalid overrides are logged with `tracing::warn!` and replaced by the
    /// defaults. Forking defaults to off.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::PropertyRunProfile;
    ///
    /// let profile = PropertyRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.repeat_runs() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self {
            cases: read_env_or_default(ARBOR_PBT_CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_env_or_default(ARBOR_PBT_FORK_ENV_KEY, false, parse_bool),
            repeat_runs: read_env_or_default(
                ARBOR_PBT_REPEAT_RUNS_ENV_KEY,
                DEFAULT_REPEAT_RUNS,
                parse_positive,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Number of times a determinism property re-runs one input.
    #[must_use]
    pub const fn repeat_runs(&self) -> usize {
        self.repeat_runs
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == T::default() {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

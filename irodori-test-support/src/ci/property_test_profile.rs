//! Environment-driven proptest tuning shared by every property suite.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const IRODORI_PBT_CASES_ENV_KEY: &str = "IRODORI_PBT_CASES";
/// Environment variable toggling forked proptest execution.
pub const IRODORI_PBT_FORK_ENV_KEY: &str = "IRODORI_PBT_FORK";

/// Reason an override was ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The value is not a positive integer.
    #[error("expected a positive case count, got `{raw}`")]
    InvalidCases {
        /// Raw value from the environment.
        raw: String,
    },
    /// The value is not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    InvalidFlag {
        /// Raw value from the environment.
        raw: String,
    },
}

/// Case count and fork flag resolved for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from `IRODORI_PBT_CASES` and `IRODORI_PBT_FORK`,
    /// falling back to the given defaults when a variable is unset or
    /// malformed. Malformed values are logged at `warn`.
    ///
    /// # Examples
    /// ```
    /// use irodori_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(IRODORI_PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(IRODORI_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, ProfileOverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test profile override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&cases| cases > 0)
        .ok_or_else(|| ProfileOverrideError::InvalidCases {
            raw: raw.to_owned(),
        })
}

fn parse_flag(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidFlag {
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears an environment variable, restoring it on drop.
    struct ScopedVar {
        key: &'static str,
        original: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let original = env::var(key).ok();
            apply(key, value);
            Self { key, original }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            apply(self.key, self.original.as_deref());
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        // SAFETY: tests serialise environment access with ENV_LOCK.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    fn load_with(cases: Option<&str>, fork: Option<&str>, defaults: (u32, bool)) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _cases = ScopedVar::new(IRODORI_PBT_CASES_ENV_KEY, cases);
        let _fork = ScopedVar::new(IRODORI_PBT_FORK_ENV_KEY, fork);
        ProptestRunProfile::load(defaults.0, defaults.1)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, (64, false));
        assert_eq!(profile, ProptestRunProfile { cases: 64, fork: false });
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn case_overrides_are_applied(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(load_with(Some(raw), None, (64, false)).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn malformed_case_overrides_fall_back(#[case] raw: &str) {
        assert_eq!(load_with(Some(raw), None, (64, false)).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("False", false)]
    #[case("0", false)]
    fn fork_overrides_are_applied(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(load_with(None, Some(raw), (64, !expected)).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2")]
    #[case("sometimes")]
    fn malformed_fork_overrides_fall_back(#[case] raw: &str) {
        assert!(load_with(None, Some(raw), (64, true)).fork());
    }

    #[test]
    fn parse_errors_keep_the_raw_value() {
        assert_eq!(
            parse_cases("zero"),
            Err(ProfileOverrideError::InvalidCases {
                raw: "zero".to_owned(),
            })
        );
        assert_eq!(
            parse_flag("maybe"),
            Err(ProfileOverrideError::InvalidFlag {
                raw: "maybe".to_owned(),
            })
        );
    }
}

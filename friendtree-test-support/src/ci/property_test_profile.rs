//! Property-test run profile shared by every friendtree suite.
//!
//! `PROPTEST_CASES` overrides the number of cases per property and
//! `FRIENDTREE_PBT_FORK` toggles forked execution. Malformed overrides are
//! reported through `tracing` and fall back to the suite default.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const FRIENDTREE_PBT_FORK_ENV_KEY: &str = "FRIENDTREE_PBT_FORK";

/// Case count and fork setting for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides from the environment, keeping the suite defaults
    /// for anything unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use friendtree_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FRIENDTREE_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest should fork a subprocess per case.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Restores a variable to its prior value when dropped.
    struct ScopedVar {
        key: &'static str,
        previous: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let previous = env::var(key).ok();
            // SAFETY: every test touching the environment holds ENV_LOCK.
            unsafe {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
            Self { key, previous }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            // SAFETY: every test touching the environment holds ENV_LOCK.
            unsafe {
                match &self.previous {
                    Some(value) => env::set_var(self.key, value),
                    None => env::remove_var(self.key),
                }
            }
        }
    }

    fn load_with(cases: Option<&str>, fork: Option<&str>, default_fork: bool) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _cases = ScopedVar::new(PROPTEST_CASES_ENV_KEY, cases);
        let _fork = ScopedVar::new(FRIENDTREE_PBT_FORK_ENV_KEY, fork);
        ProptestRunProfile::load(48, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, false);
        assert_eq!(profile.cases(), 48);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case(Some("1"), 1)]
    #[case(Some(" 512 "), 512)]
    #[case(Some("0"), 48)]
    #[case(Some("-3"), 48)]
    #[case(Some("many"), 48)]
    fn case_overrides_are_validated(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(load_with(raw, None, false).cases(), expected);
    }

    #[rstest]
    #[case("on", false, true)]
    #[case("YES", false, true)]
    #[case("0", true, false)]
    #[case("off", true, false)]
    #[case("sometimes", true, true)]
    #[case("", false, false)]
    fn fork_overrides_are_validated(
        #[case] raw: &str,
        #[case] default_fork: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(load_with(None, Some(raw), default_fork).fork(), expected);
    }
}

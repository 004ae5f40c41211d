//! Java installation lookup

use crate::diagnostics::Diagnostics;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Installation directory of the `java` found on `PATH`.
///
/// Symlinks such as `/usr/bin/java -> /etc/alternatives/java` are followed
/// to the real binary, whose grandparent is the installation.
pub fn detect_installation() -> Option<PathBuf> {
    let java = which::which("java").ok()?;
    let java = dunce::canonicalize(&java).unwrap_or(java);
    java.parent()?.parent().map(Path::to_path_buf)
}

/// Pick the Java installation the daemon will be launched with.
///
/// An explicit, non-empty path always wins. Otherwise `JAVA_HOME` is used,
/// with a warning when it disagrees with the installation on `PATH`; with
/// no `JAVA_HOME`, the installation on `PATH` is used. Without any of
/// these no daemon can be launched, so the run fails.
pub fn resolve_java_home(
    explicit: Option<&str>,
    env_java_home: Option<&str>,
    installation: Option<&Path>,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let java_home = match explicit.filter(|p| !p.is_empty()) {
        Some(path) => Some(path.to_string()),
        None => match (env_java_home.filter(|p| !p.is_empty()), installation) {
            (None, installation) => installation.map(|p| p.display().to_string()),
            (Some(env), Some(installation)) => {
                if !same_location(Path::new(env), installation) {
                    diagnostics.warn(
                        "JAVA_HOME",
                        format!(
                            "Java versions might not match : JAVA_HOME=[{}],process jre=[{}]",
                            env,
                            installation.display()
                        ),
                    );
                }
                Some(env.to_string())
            }
            (Some(env), None) => Some(env.to_string()),
        },
    };

    let java_home = java_home.ok_or(Error::JavaHomeUnresolved)?;
    diagnostics.info("JAVA_HOME", format!("Using [{java_home}] for JAVA_HOME"));
    Ok(java_home)
}

fn same_location(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_warning() {
        let mut diagnostics = Diagnostics::new();
        let home = resolve_java_home(
            Some("/opt/jdk"),
            Some("/usr/lib/jvm/other"),
            Some(Path::new("/usr/lib/jvm/third")),
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(home, "/opt/jdk");
        assert_eq!(diagnostics.warnings().count(), 0);
        assert!(diagnostics.mentions("JAVA_HOME"));
    }

    #[test]
    fn empty_explicit_falls_back_to_env() {
        let mut diagnostics = Diagnostics::new();
        let home = resolve_java_home(Some(""), Some("/opt/jdk"), None, &mut diagnostics).unwrap();
        assert_eq!(home, "/opt/jdk");
    }

    #[test]
    fn env_mismatch_warns_and_keeps_env() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let env = a.path().display().to_string();
        let mut diagnostics = Diagnostics::new();

        let home = resolve_java_home(None, Some(&env), Some(b.path()), &mut diagnostics).unwrap();

        assert_eq!(home, env);
        assert_eq!(diagnostics.warnings().count(), 1);
    }

    #[test]
    fn env_matching_installation_does_not_warn() {
        let a = TempDir::new().unwrap();
        let env = a.path().display().to_string();
        let mut diagnostics = Diagnostics::new();

        resolve_java_home(None, Some(&env), Some(a.path()), &mut diagnostics).unwrap();

        assert_eq!(diagnostics.warnings().count(), 0);
    }

    #[test]
    fn installation_used_without_env() {
        let mut diagnostics = Diagnostics::new();
        let home =
            resolve_java_home(None, None, Some(Path::new("/usr/lib/jvm/jdk")), &mut diagnostics)
                .unwrap();
        assert_eq!(home, "/usr/lib/jvm/jdk");
    }

    #[test]
    fn nothing_known_is_fatal() {
        let mut diagnostics = Diagnostics::new();
        let err = resolve_java_home(None, None, None, &mut diagnostics).unwrap_err();
        assert!(matches!(err, Error::JavaHomeUnresolved));
    }
}

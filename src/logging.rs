// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Call `logging::init(verbose)` once at the start of `main()`. `RUST_LOG`
//! takes precedence over the built-in directives.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "warn,iced_showcase=info";

/// Directives used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_DIRECTIVES: &str = "info,iced_showcase=debug,wgpu_hal=warn,wgpu_core=warn,naga=warn";

/// Installs the global subscriber writing to stderr.
///
/// A second call is ignored, which keeps tests that share a process quiet.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("[logging] subscriber already installed: {e}");
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(
                EnvFilter::try_new(default_directives(verbose)).is_ok(),
                "directives for verbose={verbose} should parse"
            );
        }
    }

    #[test]
    fn verbose_enables_debug_for_crate() {
        assert!(default_directives(true).contains("iced_showcase=debug"));
        assert!(!default_directives(false).contains("debug"));
    }
}

//! Rendering of the interactive prompt.

use std::fs;

use crate::env::Environment;

/// Render the prompt shown before each read: `user@hostname:path$ `.
///
/// The path is shortened to `~` when it lies under the snapshot's `HOME`.
/// Every component degrades to a default instead of failing — rendering
/// never raises, and with nothing resolvable the result is the fixed
/// `user@localhost:~$ `.
pub fn render(env: &Environment) -> String {
    let hostname = hostname().or_else(|| env.get("HOSTNAME").map(str::to_string));
    render_with_hostname(env, hostname)
}

fn render_with_hostname(env: &Environment, hostname: Option<String>) -> String {
    let user = env.get("USER").unwrap_or("user");
    let hostname = hostname.unwrap_or_else(|| "localhost".to_string());
    let path = env.current_dir.to_string_lossy();

    let display_path = match env.get("HOME") {
        Some(home) if !home.is_empty() && path.starts_with(home) => {
            format!("~{}", &path[home.len()..])
        }
        _ => path.into_owned(),
    };

    format!("{user}@{hostname}:{display_path}$ ")
}

/// Resolve the local hostname from the kernel, `None` when unavailable.
fn hostname() -> Option<String> {
    fs::read_to_string("/proc/sys/kernel/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

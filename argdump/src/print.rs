use std::fmt::Write as _;

use crate::arguments::Cmdline;

/// One `name: value` line per setting, then the operands.
pub fn render(cmdline: &Cmdline, operands: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "host: {}", cmdline.host);
    let _ = writeln!(out, "port: {}", cmdline.port);
    let _ = writeln!(out, "user: {}", cmdline.user.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "scope: {}", cmdline.scope);
    let _ = writeln!(out, "timeout: {}", cmdline.timeout);
    let _ = writeln!(
        out,
        "config: {}",
        cmdline
            .config
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string())
    );
    let _ = writeln!(out, "quiet: {}", cmdline.quiet);
    let _ = writeln!(out, "verbose: {}", cmdline.verbose);
    let _ = writeln!(out, "operands: {}", operands);
    out
}

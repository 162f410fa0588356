use std::fmt;
use std::path::PathBuf;

use utilargs::{keyword_argument, Binding, Keyword, Opt, Options, Registry};

use crate::error::{ArgdumpError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Base,
    One,
    Sub,
}

impl Keyword for Scope {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("base", Scope::Base), ("one", Scope::One), ("sub", Scope::Sub)];
}

keyword_argument!(Scope);

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Scope::KEYWORDS
            .iter()
            .find(|(_, scope)| scope == self)
            .map_or("?", |(name, _)| *name);
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cmdline {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub scope: Scope,
    pub timeout: f64,
    pub config: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Cmdline {
    fn default() -> Self {
        Cmdline {
            host: "localhost".to_string(),
            port: 8080,
            user: None,
            scope: Scope::Sub,
            timeout: 30.0,
            config: None,
            quiet: false,
            verbose: false,
            help: false,
        }
    }
}

impl Options for Cmdline {
    fn declare(registry: &mut Registry<Self>) {
        registry
            .field(Opt::short('h').with_long("host"), |c| &mut c.host)
            .field(Opt::short('p').with_long("port"), |c| &mut c.port)
            .field(Opt::short('D').with_long("user"), |c| &mut c.user)
            .field(Opt::short('s').with_long("scope"), |c| &mut c.scope)
            .field(Opt::short('t').with_long("timeout"), |c| &mut c.timeout)
            .field(Opt::short('f').with_long("config"), |c| &mut c.config)
            .field(Opt::short('q').with_long("quiet"), |c| &mut c.quiet)
            .field(Opt::short('v').with_long("verbose"), |c| &mut c.verbose)
            .field(Opt::short('H').with_long("help"), |c| &mut c.help);
    }
}

pub const USAGE: &str = r#"Usage: argdump [OPTION]... [--] [OPERAND]...
Bind command-line options onto a settings record and print it.

  -h, --host HOST        Server name.  Default is localhost.
  -p, --port PORT        Server port.  Default is 8080.
  -D, --user USER        User to connect as.
  -s, --scope SCOPE      One of base|one|sub.  Default is sub.
  -t, --timeout SECONDS  Timeout.  Default is 30.
  -f, --config FILE      Read key=value settings from FILE first;
                         options on the command line win.
  -q, --quiet            Print only the operands.
  -v, --verbose          Debug logging (RUST_LOG overrides).
  -H, --help             This help.

Single-letter flags can be grouped: -qv is -q -v.
Options are matched anywhere before the first --. The operands run
from the first argument that is not an option or an option's value
(or from just after --) to the end.
"#;

#[derive(Debug)]
pub struct Parsed {
    pub cmdline: Cmdline,
    pub operands: String,
}

fn check(binding: &Binding, source: &str) -> Result<()> {
    match binding.parameters().iter().find(|p| !p.converted()) {
        Some(p) => Err(ArgdumpError::Usage(format!(
            "{}: invalid value for {}: '{}'",
            source,
            p.descriptor(),
            p.value()
        ))),
        None => Ok(()),
    }
}

/// Whether `args` turn on `-v`, found by scanning alone so that nothing is
/// converted or logged yet.
pub fn wants_verbose<S: AsRef<str>>(args: &[S]) -> bool {
    let registry = Registry::<Cmdline>::of();
    utilargs::scan(args, registry.descriptors())
        .parameters()
        .iter()
        .any(|p| p.descriptor().long() == Some("verbose"))
}

/// Bind `args`, layered over the `--config` file when one is given.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Parsed> {
    let registry = Registry::<Cmdline>::of();

    let mut cmdline = Cmdline::default();
    let binding = registry.bind(args, &mut cmdline);
    check(&binding, "command line")?;

    if let Some(path) = cmdline.config.clone() {
        let file_args = utilargs::properties::read(&path)?;
        let mut layered = Cmdline::default();
        let file_binding = registry.bind(&file_args, &mut layered);
        check(&file_binding, &path.display().to_string())?;

        let binding = registry.bind(args, &mut layered);
        return Ok(Parsed {
            cmdline: layered,
            operands: binding.into_operands(),
        });
    }

    Ok(Parsed {
        cmdline,
        operands: binding.into_operands(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_arguments() {
        let empty: [&str; 0] = [];
        let parsed = parse_args(&empty).unwrap();
        assert_eq!(parsed.cmdline, Cmdline::default());
        assert_eq!(parsed.operands, "");
    }

    #[test]
    fn binds_every_option() {
        let parsed = parse_args(&[
            "-h", "example.com", "--port", "636", "-D", "admin", "-s", "base", "-t", "2.5", "-qv",
            "-H", "rest",
        ])
        .unwrap();
        let c = parsed.cmdline;
        assert_eq!(c.host, "example.com");
        assert_eq!(c.port, 636);
        assert_eq!(c.user.as_deref(), Some("admin"));
        assert_eq!(c.scope, Scope::Base);
        assert_eq!(c.timeout, 2.5);
        assert!(c.quiet && c.verbose && c.help);
        assert_eq!(parsed.operands, "rest");
    }

    #[test]
    fn invalid_value_is_usage_error() {
        let err = parse_args(&["-p", "http"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "command line: invalid value for -p/--port: 'http'"
        );
        assert!(parse_args(&["--scope", "all"]).is_err());
    }

    #[test]
    fn command_line_overrides_config() {
        let file = config_file("# defaults\nhost=db.internal\nport=5432\nuser=reader\n");
        let path = file.path().to_str().unwrap();
        let parsed = parse_args(&["-f", path, "-p", "6432", "--", "x"]).unwrap();
        let c = parsed.cmdline;
        assert_eq!(c.host, "db.internal");
        assert_eq!(c.port, 6432);
        assert_eq!(c.user.as_deref(), Some("reader"));
        assert_eq!(parsed.operands, "x");
    }

    #[test]
    fn invalid_config_value_names_file() {
        let file = config_file("timeout=soon\n");
        let path = file.path().to_str().unwrap();
        let err = parse_args(&["--config", path]).unwrap_err();
        assert!(err.to_string().contains("invalid value for -t/--timeout: 'soon'"));
    }

    #[test]
    fn missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argdump.properties");
        let err = parse_args(&["-f", path.to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, ArgdumpError::Config(_)));
    }

    #[test]
    fn verbose_found_before_binding() {
        assert!(wants_verbose(&["-p", "http", "--verbose"]));
        assert!(wants_verbose(&["-qv", "rest"]));
        assert!(!wants_verbose(&["-D", "-v"]));
        assert!(!wants_verbose(&["--", "-v"]));
    }

    #[test]
    fn scope_displays_keyword() {
        assert_eq!(Scope::One.to_string(), "one");
        assert_eq!(Scope::Sub.to_string(), "sub");
    }
}

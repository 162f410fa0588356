//! Test driver for utilargs end-to-end tests.
//!
//! - [`Fixture`]: a temporary directory for property files
//! - [`Sample`]: a target with one field of each interesting kind
//! - [`bind_in_threads`]: binds many argument vectors concurrently, one
//!   target per thread

use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;

use tempfile::TempDir;
use utilargs::{Opt, Options, Registry, UtilArgs};

/// Split a test command line on single spaces.
pub fn argv(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(' ').map(str::to_string).collect()
}

/// Temporary directory holding property files; removed on drop.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> io::Result<Fixture> {
        Ok(Fixture {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write `lines` (joined with `\n`) to `name` inside the fixture.
    pub fn properties(&self, name: &str, lines: &[&str]) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Options `a` `c/city` `n/name` `o` `t` `v` `y` `z`; `a`, `v` and `y` are
/// flags. `no_option` is never bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub name: Option<String>,
    pub city: Option<String>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
    pub amber: Option<bool>,
    pub number: i32,
    pub optional: Option<String>,
    pub integer: Option<i64>,
    pub no_option: Option<i64>,
}

impl Options for Sample {
    fn declare(registry: &mut Registry<Self>) {
        registry
            .field(Opt::short('n').with_long("name"), |s| &mut s.name)
            .field(Opt::short('c').with_long("city"), |s| &mut s.city)
            .field(Opt::short('v'), |s| &mut s.verbose)
            .field(Opt::short('y'), |s| &mut s.debug)
            .field(Opt::short('a'), |s| &mut s.amber)
            .field(Opt::short('o'), |s| &mut s.number)
            .field(Opt::short('t'), |s| &mut s.optional)
            .field(Opt::short('z'), |s| &mut s.integer);
    }
}

/// Bind each argument vector onto its own `T::default()` on its own thread.
/// Results come back in input order.
pub fn bind_in_threads<T>(argvs: &[Vec<String>]) -> Vec<UtilArgs<T>>
where
    T: Options + Default + Send,
{
    thread::scope(|scope| {
        let handles: Vec<_> = argvs
            .iter()
            .map(|args| scope.spawn(move || UtilArgs::process(args, T::default())))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(bound) => bound,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

mod options;
mod value;

use std::io::{BufRead, Stdout, Write};

pub use options::ShellOptions;
pub use value::{Algebra, AnySet};

use crate::prelude::*;

/// A line-oriented calculator holding named sets of either element kind.
pub struct SetShell<W: Write> {
    sets: BTreeMap<String, AnySet>,
    config: ShellOptions,
    out: W,
}

impl SetShell<Stdout> {
    /// Produces a new shell that answers on stdout.
    pub fn new(options: ShellOptions) -> SetShell<Stdout> {
        SetShell::with_writer(options, std::io::stdout())
    }

    /// Runs the shell on stdin.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        self.serve(stdin.lock())
    }
}

impl<W: Write> SetShell<W> {
    /// Produces a new shell that answers on the given writer.
    pub fn with_writer(options: ShellOptions, out: W) -> SetShell<W> {
        SetShell {
            sets: BTreeMap::new(),
            config: options,
            out,
        }
    }

    /// Answers commands, one per line, until `quit` or the end of the input.
    /// Only failures to read or write are returned; command errors are reported in-band.
    pub fn serve<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let cmdstr = match std::str::from_utf8(&line) {
                Ok(cmdstr) => cmdstr,
                Err(e) => {
                    let err = anyhow!("command is not valid UTF-8: {e}");
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)?;
                    continue;
                }
            };
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            if cmd == "quit" {
                log::debug!("quit requested");
                return Ok(());
            }
            self.apply(cmd, args.get(1..).unwrap_or_default())?;
        }
        log::debug!("end of input");
        Ok(())
    }

    /// Runs a command. `quit` is handled by [`SetShell::serve`], since it ends the session.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => return Ok(()),
            | "add" => self.add(args),
            | "contains" => self.contains(args),
            | "difference" | "intersection" | "union" => self.combine(cmd, args),
            | "drop" => self.drop_set(args),
            | "equal" => self.equal(args),
            | "info" => self.info(),
            | "int" | "text" => self.define(cmd, args),
            | "members" => self.members(args),
            | "remove" => self.remove(args),
            | "sets" => self.list(),
            | "size" => self.size(args),
            | "subset" => self.subset(args),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err:#}");
                self.err(&err)
            },
        }
    }

    /// Defines (or redefines) a named set from a literal, e.g. `int evens {0, 2, 4}`.
    fn define(&mut self, kind: &str, args: &[&str]) -> Result<()> {
        let Some((name, literal)) = args.split_first().filter(|(_, rest)| !rest.is_empty()) else {
            return Err(anyhow!("expected a name and a set literal"));
        };

        let set = AnySet::parse(kind, &literal.join(" "))?;
        writeln!(self.out, "{set}")?;
        self.sets.insert((*name).to_owned(), set);
        Ok(())
    }

    fn add(&mut self, args: &[&str]) -> Result<()> {
        let (name, elements) = named_elements(args)?;
        let set = self.get_mut(name)?;
        set.add(elements)?;

        let repr = set.to_string();
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    fn remove(&mut self, args: &[&str]) -> Result<()> {
        let (name, elements) = named_elements(args)?;
        let set = self.get_mut(name)?;
        set.remove(elements)?;

        let repr = set.to_string();
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    fn contains(&mut self, args: &[&str]) -> Result<()> {
        let [name, element] = arity(args)?;
        let found = self.get(name)?.contains(element)?;
        writeln!(self.out, "{found}")?;
        Ok(())
    }

    fn size(&mut self, args: &[&str]) -> Result<()> {
        let [name] = arity(args)?;
        let size = self.get(name)?.size();
        writeln!(self.out, "{size}")?;
        Ok(())
    }

    fn members(&mut self, args: &[&str]) -> Result<()> {
        let [name] = arity(args)?;
        let repr = self.get(name)?.to_string();
        writeln!(self.out, "{repr}")?;
        Ok(())
    }

    fn equal(&mut self, args: &[&str]) -> Result<()> {
        let [lhs, rhs] = arity(args)?;
        let equal = self.get(lhs)?.equal(self.get(rhs)?)?;
        writeln!(self.out, "{equal}")?;
        Ok(())
    }

    fn subset(&mut self, args: &[&str]) -> Result<()> {
        let [lhs, rhs] = arity(args)?;
        let subset = self.get(lhs)?.subset(self.get(rhs)?)?;
        writeln!(self.out, "{subset}")?;
        Ok(())
    }

    /// Stores `lhs <op> rhs` under `dest`, e.g. `union all evens odds`.
    fn combine(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let op = cmd.parse::<Algebra>()?;
        let [dest, lhs, rhs] = arity(args)?;

        let set = self.get(lhs)?.combine(op, self.get(rhs)?)?;
        writeln!(self.out, "{set}")?;
        self.sets.insert(dest.to_owned(), set);
        Ok(())
    }

    fn drop_set(&mut self, args: &[&str]) -> Result<()> {
        let [name] = arity(args)?;
        self.sets.remove(name).ok_or_else(|| anyhow!("unknown set {name}"))?;
        Ok(())
    }

    /// Lists every named set with its kind and size.
    fn list(&mut self) -> Result<()> {
        for (name, set) in &self.sets {
            writeln!(self.out, "{name} {} {}", set.kind(), set.size())?;
        }
        Ok(())
    }

    // accessors

    fn get(&self, name: &str) -> Result<&AnySet> {
        self.sets.get(name).ok_or_else(|| anyhow!("unknown set {name}"))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut AnySet> {
        self.sets.get_mut(name).ok_or_else(|| anyhow!("unknown set {name}"))
    }

    // basic printers

    /// Prints the shell's ID.
    fn info(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints an error to the output stream.
    fn err(&mut self, err: &Error) -> Result<()> {
        if !self.config.bare {
            writeln!(self.out, "err")?;
        }
        writeln!(self.out, "{err:#}")?;
        self.ok()
    }

    /// Prints the ok footer to the output stream.
    fn ok(&mut self) -> Result<()> {
        if !self.config.bare {
            writeln!(self.out, "ok")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

// parsers

/// Takes exactly `N` arguments.
fn arity<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| anyhow!("expected {N} arguments, received {}", args.len()))
}

/// Takes a set name followed by at least one element.
fn named_elements<'a, 'b>(args: &'b [&'a str]) -> Result<(&'a str, &'b [&'a str])> {
    match args.split_first() {
        Some((name, elements)) if !elements.is_empty() => Ok((*name, elements)),
        Some(_) => Err(anyhow!("no elements provided")),
        None    => Err(anyhow!("no set provided")),
    }
}

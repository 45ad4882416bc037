// File: ./src/cli.rs
//! Command-line options and help text.
use crate::config::Config;
use crate::model::DateErrorPolicy;
use anyhow::{Result, anyhow, bail};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub help: bool,
    pub root: Option<PathBuf>,
    pub logfile: Option<PathBuf>,
    pub basepath: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub url: Option<String>,
    pub skip_invalid_dates: bool,
}

impl CliOptions {
    /// Parses arguments without the program name. Values are given either
    /// as `--flag value` or `--flag=value`.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
                _ => (arg.clone(), None),
            };

            let mut value = || -> Result<String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .ok_or_else(|| anyhow!("Option '{}' needs a value", flag)),
                }
            };

            match flag.as_str() {
                "-h" | "--help" => opts.help = true,
                "-r" | "--root" => opts.root = Some(value()?.into()),
                "--logfile" => opts.logfile = Some(value()?.into()),
                "--basepath" => opts.basepath = Some(value()?.into()),
                "--input" => opts.input = Some(value()?.into()),
                "--url" => opts.url = Some(value()?),
                "--skip-invalid-dates" => opts.skip_invalid_dates = true,
                other => bail!("Unknown option '{}' (see --help)", other),
            }
        }

        Ok(opts)
    }

    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(p) = &self.logfile {
            config.logfile = p.clone();
        }
        if let Some(p) = &self.basepath {
            config.basepath = p.clone();
        }
        if let Some(u) = &self.url {
            config.feed_url = u.clone();
        }
        if self.skip_invalid_dates {
            config.on_date_error = DateErrorPolicy::Skip;
        }
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Sciopero v{} - Rome public transport strikes as JSON and iCalendar",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --logfile <path>        Path to the logfile (default: sciopero.log)");
    println!("    --basepath <dir>        Directory in which to save the files (default: .)");
    println!("    --url <url>             Feed to fetch instead of the configured one");
    println!("    --input <file.xml>      Read the feed from a local file, no network");
    println!("    --skip-invalid-dates    Drop items with impossible dates instead of failing");
    println!("    -r, --root <path>       Use a different directory for config and lock files");
    println!("    -h, --help              Show this help message.");
    println!();
    println!("OUTPUT:");
    println!("    all.json, past.json, ongoing.json, future.json, all.ical");
    println!();
    println!("CONFIG:");
    println!("    config.toml in the config directory (or <root>/config with --root).");
    println!("    Keys: feed_url, category, keyword, basepath, logfile,");
    println!("          on_date_error = \"abort\" | \"skip\",");
    println!("          [calendar] prodid, name, description, ttl");
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    structure_path: PathBuf,
    words_path: PathBuf,
    output_path: Option<PathBuf>,
    quiet: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            structure_path: value_path(matches, "structure")?,
            words_path: value_path(matches, "words")?,
            output_path: matches.value_of("output").map(PathBuf::from),
            quiet: matches.is_present("quiet"),
        })
    }

    pub fn structure_path(&self) -> &Path {
        &self.structure_path
    }

    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// returns true if the filled grid should not be printed
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

fn value_path(matches: &ArgMatches<'_>, name: &str) -> Result<PathBuf> {
    matches
        .value_of(name)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("missing argument: {}", name))
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("crossword")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Fill crossword puzzles from a word list")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .required(true)
                .index(1)
                .help("crossword structure file, with '_' for open cells"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .index(2)
                .help("word list file, one word per line"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .index(3)
                .help("save an SVG image of the filled crossword"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("do not print the filled crossword"),
        )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{clap_app, Options};

    fn parse(args: &[&str]) -> clap::Result<Options> {
        let matches = clap_app().get_matches_from_safe(args)?;
        Ok(Options::from_arg_matches(&matches).unwrap())
    }

    #[test]
    fn positional_args() {
        let options = parse(&["crossword", "structure.txt", "words.txt", "out.svg"]).unwrap();
        assert_eq!(Path::new("structure.txt"), options.structure_path());
        assert_eq!(Path::new("words.txt"), options.words_path());
        assert_eq!(Some(Path::new("out.svg")), options.output_path());
        assert!(!options.quiet());
    }

    #[test]
    fn output_is_optional() {
        let options = parse(&["crossword", "-q", "structure.txt", "words.txt"]).unwrap();
        assert_eq!(None, options.output_path());
        assert!(options.quiet());
    }

    #[test]
    fn usage_errors() {
        assert!(parse(&["crossword", "structure.txt"]).is_err());
        assert!(parse(&["crossword", "a", "b", "c", "d"]).is_err());
    }
}

use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use hxmlgen::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "print"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Print { global_cp: vec![] });
///
/// let parser = CliArgs::parse_from([
///     "", "--root", "games", "generate", "-o", "release.hxml",
///     "--global-cp", "/haxe/std", "--global-cp", "/haxe/extra",
/// ]);
/// assert_eq!(parser.root.as_deref(), Some("games"));
/// assert_eq!(
///     parser.command,
///     Command::Generate {
///         output: Some(String::from("release.hxml")),
///         global_cp: vec![String::from("/haxe/std"), String::from("/haxe/extra")],
///     }
/// );
/// ```
#[derive(Parser, Debug)]
#[command(name = "hxmlgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "hxmlgen generates standalone hxml build files for Haxe projects",
    long_about = "hxmlgen reads the hxproject*.toml files of a Haxe project and writes the \
    hxml build file that the Haxe compiler consumes with `haxe build.hxml`"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "hxmlgen maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(short, long, help = "Allows the user to specify the project's root")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Only the project files whose name contains this text are processed"
    )]
    pub match_files: Option<String>,

    #[arg(long, help = "Where the hxmlgen settings are stored")]
    pub settings_dir: Option<String>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Writes the hxml build file of every project found
    Generate {
        #[arg(
            short,
            long,
            help = "The build file to write. Defaults to build.hxml in the project directory"
        )]
        output: Option<String>,
        #[arg(long, help = "Extra classpath for every project, after the global ones")]
        global_cp: Vec<String>,
    },
    /// Prints the content of the build files to the standard output, writing nothing
    Print {
        #[arg(long, help = "Extra classpath for every project, after the global ones")]
        global_cp: Vec<String>,
    },
}

impl Command {
    pub fn global_cp(&self) -> &[String] {
        match self {
            Command::Generate { global_cp, .. } | Command::Print { global_cp } => global_cp,
        }
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::render::TocOptions;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "wikitoc")]
#[command(about = "Tables of contents for wiki pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a table of contents
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Print the heading outline of a page
    Outline {
        /// Page name
        page: String,
    },

    /// List the pages of the wiki
    Pages {
        /// Only pages starting with this prefix
        prefix: Option<String>,

        /// Reverse sort order
        #[arg(short, long, default_value_t = false)]
        reverse: bool,
    },
}

/// Output formats of the render command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Arguments of the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Pages to include; a trailing `*` selects every page with that prefix
    #[arg(value_name = "PAGE")]
    pub pages: Vec<String>,

    /// Page being viewed
    #[arg(short, long, value_name = "PAGE", default_value = "WikiStart")]
    pub current: String,

    /// Override the default heading of "Table of Contents"
    #[arg(long, value_name = "TEXT")]
    pub heading: Option<String>,

    /// Suppress display of the heading
    #[arg(long, default_value_t = false)]
    pub no_heading: bool,

    /// Display headings to a maximum depth
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Display inline rather than as a side bar
    #[arg(long, default_value_t = false)]
    pub inline: bool,

    /// Only display the name and title of each page
    #[arg(long, default_value_t = false)]
    pub title_index: bool,

    /// Title index of the pages in a section of the wiki
    #[arg(long, default_value_t = false)]
    pub section_index: bool,

    /// Suppress display of page titles
    #[arg(long, default_value_t = false)]
    pub no_title: bool,

    /// Sort expanded wildcards in reverse order
    #[arg(long, default_value_t = false)]
    pub reverse: bool,

    /// Read further page names, one per line, from this page
    #[arg(long, value_name = "PAGE")]
    pub from: Option<String>,

    /// Unnumbered lists
    #[arg(long, default_value_t = false)]
    pub no_numbering: bool,

    /// Render nothing
    #[arg(long, default_value_t = false)]
    pub no_float: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Liquid layout wrapping the HTML output
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Write to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Rendering options, with configured defaults filling in the gaps
    pub fn to_options(&self, config: &Config) -> TocOptions {
        TocOptions {
            pages: self.pages.clone(),
            heading: self.heading.clone().or_else(|| config.heading.clone()),
            no_heading: self.no_heading,
            depth: self.depth.or(Some(config.max_depth)),
            inline: self.inline || config.inline,
            title_index: self.title_index,
            section_index: self.section_index,
            no_title: self.no_title,
            reverse: self.reverse,
            from: self.from.clone(),
            no_numbering: self.no_numbering || config.no_numbering,
            no_float: self.no_float,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "wikitoc",
            "-s",
            "site",
            "render",
            "TracGuide",
            "Trac*",
            "--current",
            "TracGuide",
            "--depth",
            "3",
            "--no-numbering",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("site")));
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.pages, vec!["TracGuide", "Trac*"]);
        assert_eq!(args.current, "TracGuide");
        assert_eq!(args.depth, Some(3));
        assert!(args.no_numbering);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_pages_and_outline() {
        let cli = Cli::try_parse_from(["wikitoc", "pages", "Guide/", "--reverse"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pages { prefix: Some(ref p), reverse: true } if p == "Guide/"
        ));

        let cli = Cli::try_parse_from(["wikitoc", "-g", "outline", "WikiStart"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Outline { ref page } if page == "WikiStart"));
    }

    #[test]
    fn test_options_fall_back_to_config() {
        let cli = Cli::try_parse_from(["wikitoc", "render", "--inline"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        let config = Config {
            heading: Some("Contents".to_string()),
            no_numbering: true,
            max_depth: 4,
            ..Config::default()
        };

        let options = args.to_options(&config);
        assert_eq!(options.heading.as_deref(), Some("Contents"));
        assert!(options.no_numbering);
        assert!(options.inline);
        assert_eq!(options.depth, Some(4));
        assert_eq!(args.current, "WikiStart");
    }
}

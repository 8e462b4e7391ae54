use clap::CommandFactory;
use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate};
use miette::IntoDiagnostic;
use plumage_content::{
    ContentOptions, DisplaySettings, TRUNCATE_ARTICLES_DEFAULT, render_content, visible_text,
};
use std::io::{self, BufWriter, Read, Write};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "plumage")]
#[command(version)]
#[command(after_help = "Examples:\n\n\
    To truncate an article to 200 visible characters:\n\
    $ plumage -l 200 article.html\n\n\
    To highlight search matches in a fragment from stdin:\n\
    $ cat article.html | plumage --no-truncate -H \"rust feeds\"\n\n\
    To extract the visible text of an article:\n\
    $ plumage --no-truncate --text article.html")]
#[command(
    about = "plumage processes feed article HTML: bounded truncation, search highlighting and text extraction.",
    long_about = None
)]
pub struct Cli {
    #[clap(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    output: OutputArgs,

    #[clap(subcommand)]
    commands: Option<Commands>,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    files: Option<Vec<PathBuf>>,
}

#[derive(Clone, Debug, clap::Args, Default)]
struct InputArgs {
    /// Truncate articles to this many visible characters
    #[arg(short = 'l', long, default_value_t = TRUNCATE_ARTICLES_DEFAULT)]
    length: u32,

    /// Pass content through without truncating it
    #[arg(long, default_value = "false")]
    no_truncate: bool,

    /// Wrap matches of this query in <mark> tags
    #[arg(short = 'H', long)]
    highlight: Option<String>,
}

#[derive(Clone, Debug, clap::Args, Default)]
struct OutputArgs {
    /// Output the visible text instead of HTML
    #[arg(short = 't', long, default_value = "false")]
    text: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        if let Some(Commands::Completion { shell }) = &self.commands {
            generate(*shell, &mut Cli::command(), "plumage", &mut io::stdout());
            return Ok(());
        }

        let settings = DisplaySettings {
            truncate_articles: !self.input.no_truncate,
            truncation_length: self.input.length,
        };
        if settings.truncate_articles {
            settings.validate()?;
        }

        let mut options = ContentOptions::from(&settings);
        options.highlight = self.input.highlight.clone();

        let content = self.read_input()?;
        let rendered = render_content(&content, &options)?;
        let output = if self.output.text {
            visible_text(&rendered)
        } else {
            rendered
        };

        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        writer.write_all(output.as_bytes()).into_diagnostic()?;
        if !output.ends_with('\n') {
            writer.write_all(b"\n").into_diagnostic()?;
        }
        writer.flush().into_diagnostic()
    }

    fn read_input(&self) -> miette::Result<String> {
        match &self.files {
            Some(files) if !files.is_empty() => {
                let mut content = String::new();
                for file in files {
                    content.push_str(&fs::read_to_string(file).into_diagnostic()?);
                }
                Ok(content)
            }
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content).into_diagnostic()?;
                Ok(content)
            }
        }
    }
}

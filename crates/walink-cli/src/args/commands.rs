use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive form with live phone preview (default)")]
    Tui {
        #[arg(long, help = "Pre-fill the phone field")]
        phone: Option<String>,

        #[arg(long, help = "Pre-fill the message field")]
        message: Option<String>,
    },

    #[command(about = "Validate a phone number and message and print the wa.me link")]
    Link {
        #[arg(long, short, help = "Phone number with area code, 10 or 11 digits")]
        phone: String,

        #[arg(long, short, help = "Optional message, up to 200 characters")]
        message: Option<String>,

        #[arg(long, help = "Also copy the link to the system clipboard")]
        copy: bool,
    },

    #[command(about = "Apply the phone display mask to raw input")]
    Format {
        #[arg(help = "Raw phone text, e.g. 11987654321")]
        input: String,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the resolved config file path")]
    Path,

    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

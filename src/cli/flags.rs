use clap::Parser;

/// Generate random passwords and score their strength.
#[derive(Debug, Default, Parser)]
#[command(name = "keypass", version, about)]
pub struct CliFlags {
    /// Characters per password (clamped to 4-64)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Allow a character to appear more than once
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Keep look-alike characters (iIl1oO0)
    #[arg(long)]
    pub allow_similar: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and the strength summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Score a password instead of generating one ("-" or no value reads stdin)
    #[arg(short, long, value_name = "PASSWORD", num_args = 0..=1, default_missing_value = "-")]
    pub score: Option<String>,
}

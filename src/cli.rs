use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the word JSON files
    #[arg(default_value = "assets/words")]
    pub dir_path: String,

    /// Write the updated categories back in place
    #[arg(short, long)]
    pub write: bool,

    /// Maximum recursion depth (0 means no recursion)
    #[arg(short, long, default_value = "0")]
    pub max_depth: usize,

    /// Exclude patterns (glob patterns like "draft_*" or "archive")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// TOML file extending the built-in word lists and topic keywords
    #[arg(short, long)]
    pub lexicon: Option<String>,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<String>,

    /// Number of most frequent tags to report
    #[arg(long, default_value = "20")]
    pub top: usize,

    /// Uncategorized entries listed per file
    #[arg(long, default_value = "30")]
    pub show_limit: usize,
}

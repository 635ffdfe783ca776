use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[+] tick v", env!("CARGO_PKG_VERSION"), " - one list, done fast"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the list
    Add(AddArgs),
    /// List items
    List(ListArgs),
    /// Mark an item complete
    Done(KeyArgs),
    /// Mark an item not complete
    Undone(KeyArgs),
    /// Replace an item's text
    Edit(EditArgs),
    /// Remove an item
    Rm(KeyArgs),
    /// Remove all completed items
    Clear,
    /// Complete every item, or un-complete everything if all are done
    All,
    /// Print the number of items still to do
    Count,
    /// Print the resolved store directory
    Path,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only a subset (all, active, completed)
    #[arg(long, default_value = "all")]
    pub filter: String,
}

#[derive(Args)]
pub struct KeyArgs {
    /// Item key (as shown by `tk list`)
    pub key: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item key (as shown by `tk list`)
    pub key: u64,
    /// Replacement text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

use clap::Parser;

/// Walks through the sum-type demos and the search tree queries
#[derive(Parser, Debug, Clone)]
#[command(name = "sum-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Seed for the random tree
    #[arg(long, env = "SUM_TREE_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Also build a random search tree with this many values
    #[arg(long, value_name = "COUNT")]
    pub random: Option<usize>,

    /// Random values are drawn from 0..MAX_VALUE
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..))]
    pub max_value: i32,

    /// Also build a right-leaning chain this deep
    #[arg(long, value_name = "DEPTH")]
    pub deep: Option<usize>,

    /// Print the sample tree as Graphviz DOT
    #[arg(long)]
    pub dot: bool,
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use sum_tree::cli::Cli;
use sum_tree::logging::setup_logging;
use sum_tree::unions::{safe_divide, ContactInfo, SubmissionResult};
use sum_tree::{sample_tree, BinaryTree, TreeGraph, TreeResult};
use tracing::info;

fn show_unions() {
    println!("Contacts:");
    let contacts = [
        ContactInfo::Email("ada@example.org".to_string()),
        ContactInfo::Phone {
            country_code: 44,
            number: "20 7946 0018".to_string(),
        },
    ];
    for contact in &contacts {
        println!("  {}", contact);
    }

    println!("Submissions:");
    let submissions = [
        SubmissionResult::Accepted { score: 92 },
        SubmissionResult::Rejected {
            reason: "compile error".to_string(),
        },
        SubmissionResult::Pending,
    ];
    for submission in &submissions {
        println!("  {} (final: {})", submission, submission.is_final());
    }

    println!("Division:");
    for (dividend, divisor) in [(10, 3), (10, 0), (i32::MIN, -1)] {
        println!("  {} / {} = {}", dividend, divisor, safe_divide(dividend, divisor));
    }
}

fn show_tree(name: &str, tree: &BinaryTree) {
    println!("{}: {}", name, tree);
    println!("  is_empty: {}", tree.is_empty());
    println!("  height: {}", tree.height());
    println!("  find_max_value: {}", tree.find_max_value());
    for target in [15, 7, 3] {
        println!("  contains {}: {}", target, tree.contains(target));
    }
}

fn run(cli: &Cli) -> TreeResult<()> {
    show_unions();

    let sample = sample_tree();
    show_tree("Sample tree", &sample);

    if let Some(count) = cli.random {
        info!(count, seed = cli.seed, "building random tree");
        let mut rng = StdRng::seed_from_u64(cli.seed);
        let tree = BinaryTree::random_tree(&mut rng, count, 0..cli.max_value)?;
        println!("Random tree (seed {}):", cli.seed);
        println!("  in-order: {:?}", tree.in_order());
        println!("  height: {}", tree.height_iterative());
        println!("  find_max_value: {}", tree.find_max_value());
        tree.check_bst()?;
        println!("  search order: valid");
    }

    if let Some(depth) = cli.deep {
        info!(depth, "building right spine");
        let spine = BinaryTree::right_spine((0..depth).map(|v| v as i32).collect());
        println!("Right spine of {} nodes:", depth);
        println!("  height: {}", spine.height_iterative());
        println!("  find_max_value: {}", spine.find_max_value());
    }

    if cli.dot {
        println!("{}", TreeGraph::from_tree(&sample).to_dot());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

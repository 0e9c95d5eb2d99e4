use clap::Parser;

use logic_table::config::Config;
use logic_table::{evaluate_expression_with_config, token};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Propositional formula, e.g. "p -> (q & r)".
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Maximum number of distinct variables.
    #[clap(long, value_name = "INT", default_value = "16")]
    max_vars: usize,

    /// Do not print the step-by-step explanation of each row.
    #[clap(long)]
    no_trace: bool,

    /// Use `V`/`F` instead of `T`/`F` for truth values.
    #[clap(long)]
    verum: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    log::debug!("args = {:?}", args);

    let config = Config {
        max_variables: args.max_vars,
        true_symbol: if args.verum { "V" } else { "T" },
        ..Config::default()
    };

    let table = evaluate_expression_with_config(&args.expression, &config)?;

    println!("Expression: {}", table.expression);
    println!("Tokens: {}", token::join(&table.tokens));
    println!("RPN: {}", table.postfix);
    println!();

    if args.no_trace {
        print!("{}", table);
    } else {
        print!("{:#}", table);
    }

    println!();
    if table.error_count() > 0 {
        println!("{} of {} rows failed to evaluate.", table.error_count(), table.num_rows());
    } else if table.is_tautology() {
        println!("Tautology.");
    } else if table.is_contradiction() {
        println!("Contradiction.");
    } else {
        println!("Satisfied in {} of {} rows.", table.sat_count(), table.num_rows());
    }

    Ok(())
}

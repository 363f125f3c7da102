use clap::Parser;

use headerexposer::cli::{Cli, Commands};
use headerexposer::commands::{run_analyse, run_demo, run_show, run_validate};
use headerexposer::logging;
use headerexposer::output::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let stderr_colors = ErrorOutput::new(cli.color_mode()).uses_colors();
    logging::init(cli.verbose, cli.quiet, stderr_colors);

    let exit_code = match &cli.command {
        Commands::Analyse(args) => run_analyse(args, &cli),
        Commands::Demo(args) => run_demo(args, &cli),
        Commands::Show => run_show(&cli),
        Commands::Validate => run_validate(&cli),
    };

    std::process::exit(exit_code);
}

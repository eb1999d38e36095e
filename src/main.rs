use clap::Parser;
use mediaq::cli::{self, exit_codes, Cli};
use mediaq::logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::INVALID_ARGS
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    let output_mode = cli.output_mode();
    if let Err(err) = cli::run(cli) {
        let code = cli::report_error(&err, output_mode);
        std::process::exit(code);
    }
}

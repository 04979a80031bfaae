use clap::Parser;
use tracing::error;

use javags::cli_interface::JavagsArgs;
use javags::command_processing::handle_generate;
use javags::config_management::AppConfig;
use javags::errors::AppError;
use javags::field_selector::{AllFieldsSelector, ConsoleFieldSelector, FieldSelector};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = JavagsArgs::parse();
    if let Err(e) = run_app(args) {
        error!("Application failed: {}", e);
        std::process::exit(1);
    }
}

fn run_app(args: JavagsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    if args.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let selector: Box<dyn FieldSelector> = if args.all || config.selector.assume_all {
        Box::new(AllFieldsSelector)
    } else {
        Box::new(ConsoleFieldSelector::new())
    };

    handle_generate(&args.files, selector.as_ref(), args.dry_run)
}

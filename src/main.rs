//! tinpig's entry point.

use tinpig::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
    prompt::DialoguerPrompter,
};

fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    let prompter = DialoguerPrompter::new();
    match run(args, &prompter) {
        Ok(Some(project_path)) => {
            println!("\nProject created at '{}'.", project_path.display())
        }
        Ok(None) => {}
        Err(err) => default_error_handler(err),
    }
}

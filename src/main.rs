use clap::Parser;
use linked_list::shell::{self, Shell};
use std::path::PathBuf;

/// Command-line options. With no flags the scripted walkthrough is printed.
#[derive(Parser, Debug)]
#[command(about = "Fun with singly linked lists")]
struct CmdOptions {
    /// "Read commands from the terminal instead of running the walkthrough"
    #[arg(short, long)]
    interactive: bool,
    /// "Value the list is created with"
    #[arg(short, long, default_value = "5", allow_negative_numbers = true)]
    seed: i32,
    /// "File to keep interactive command history in"
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    if options.interactive {
        Shell::new(options.seed, options.history).run();
        return;
    }

    let stdout = std::io::stdout();
    if let Err(err) = shell::run_scenario(options.seed, &mut stdout.lock()) {
        log::error!("failed to print the walkthrough: {}", err);
        std::process::exit(1);
    }
}

use std::io;

use ascii_banner::banner;
use ascii_banner::cli::{
    handle_config_action, prompt_for_color, prompt_for_word, Args, Command, Mode,
};
use ascii_banner::config::Config;
use ascii_banner::error::BannerError;
use ascii_banner::interrupt::{ctrlc_received, setup_ctrlc_handler};
use ascii_banner::layout::build_text_columns;
use ascii_banner::scroll::{self, ScrollSettings};
use ascii_banner::terminal::{CursorGuard, TerminalSize};
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), BannerError> {
    let stdout = io::stdout();

    if let Some(Command::Config { action }) = args.command {
        return handle_config_action(action, args.config.as_deref(), &mut stdout.lock());
    }

    let config = Config::load(args.config.as_deref())?;

    let word = {
        let stdin = io::stdin();
        prompt_for_word(&mut stdin.lock(), &mut stdout.lock())?
    };
    if word.is_empty() {
        println!("No word given. Exiting.");
        return Ok(());
    }

    let color = {
        let stdin = io::stdin();
        prompt_for_color(&mut stdin.lock(), &mut stdout.lock(), config.color.default)?
    };
    log::info!(
        "rendering {:?} in {} mode, color {:?}",
        word,
        args.mode.name(),
        color
    );

    match args.mode {
        Mode::Static => {
            banner::print_banner(&mut stdout.lock(), &word, color, config.banner.border_char)?;
        }
        Mode::Scroll => {
            let text = build_text_columns(&word);
            let settings = ScrollSettings::new(TerminalSize::detect(), &config.animation, color);

            setup_ctrlc_handler()?;
            let mut out = stdout.lock();
            if !scroll::intro(&mut out, config.animation.intro_delay(), &ctrlc_received)? {
                return Ok(());
            }

            let out = CursorGuard::hide_terminal(out)?;
            scroll::run(out, &text, &settings, &ctrlc_received)?;
        }
    }

    Ok(())
}

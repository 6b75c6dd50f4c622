use name_core::{NameTranslator, TranslatorConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_DICTIONARY_PATH: &str = "learned_names.bin";

fn init_logging() {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    tracing::info!("name bridge starting");

    let mut config = TranslatorConfig::from_env();
    if config.dictionary_path.is_none() {
        config.dictionary_path = Some(PathBuf::from(DEFAULT_DICTIONARY_PATH));
    }
    let mut translator = NameTranslator::from_config(&config);
    if let Some(path) = translator.dictionary_path() {
        tracing::info!(path = %path.display(), "learned names store");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(input = %input, "bridge <-");
        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument),
            None => (input.as_str(), ""),
        };

        match command {
            "EXIT" => break,
            _ => {
                let reply = handle_command(command, argument, &mut translator);
                tracing::debug!(reply = %reply, "bridge ->");
                writeln!(stdout, "{}", reply)?;
                stdout.flush()?;
            }
        }
    }

    tracing::info!("saving learned names");
    if let Err(e) = translator.save_dictionary() {
        tracing::error!(error = %e, "could not save learned names");
    }
    Ok(())
}

fn handle_command(command: &str, argument: &str, translator: &mut NameTranslator) -> String {
    match command {
        "TRANSLATE" => format!("RESULT {}", translator.translate(argument)),
        "CLEAN" => format!("RESULT {}", translator.clean(argument)),
        "IS_ARABIC" => format!("BOOL {}", translator.is_arabic(argument)),
        "LEARN" => match argument.split_once('=') {
            Some((arabic, english)) if translator.user_confirms(arabic, english) => "OK".to_string(),
            Some(_) => "ERR both sides of LEARN must be non-empty".to_string(),
            None => "ERR expected LEARN <arabic>=<english>".to_string(),
        },
        other => format!("ERR unknown command '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_queries() {
        let mut translator = NameTranslator::new();
        assert_eq!(handle_command("TRANSLATE", "محمد زيد", &mut translator), "RESULT Mohammed Zyd");
        assert_eq!(handle_command("CLEAN", "مُحَمَّد", &mut translator), "RESULT محمد");
        assert_eq!(handle_command("IS_ARABIC", "Hello أحمد", &mut translator), "BOOL true");
        assert_eq!(handle_command("IS_ARABIC", "Hello", &mut translator), "BOOL false");
        assert_eq!(handle_command("TRANSLATE", "", &mut translator), "RESULT ");
    }

    #[test]
    fn learn_needs_both_sides() {
        let mut translator = NameTranslator::new();
        assert_eq!(handle_command("LEARN", "زيد=Zaid", &mut translator), "OK");
        assert_eq!(handle_command("TRANSLATE", "زيد", &mut translator), "RESULT Zaid");
        assert!(handle_command("LEARN", "زيد=", &mut translator).starts_with("ERR"));
        assert!(handle_command("LEARN", "Zaid", &mut translator).starts_with("ERR expected"));
    }

    #[test]
    fn rejects_unknown_commands() {
        let mut translator = NameTranslator::new();
        assert_eq!(
            handle_command("SHOUT", "x", &mut translator),
            "ERR unknown command 'SHOUT'"
        );
    }
}

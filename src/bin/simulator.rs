use crossterm::{
    execute,
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use name_core::{NameTranslator, TranslatorConfig};
use std::io::{self, stdin, stdout, Write};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = TranslatorConfig::from_env();
    let mut translator = NameTranslator::from_config(&config);
    let mut history: Vec<(String, String)> = Vec::new();

    loop {
        print_ui(&history)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            s if s.starts_with(":learn ") => {
                // :learn <arabic>=<english>
                let learned = s[":learn ".len()..]
                    .split_once('=')
                    .map(|(arabic, english)| translator.user_confirms(arabic, english))
                    .unwrap_or(false);
                let note = if learned { "learned" } else { "expected :learn <arabic>=<english>" };
                history.push((s.to_string(), note.to_string()));
            }
            s => {
                let report = format!(
                    "clean=[{}] arabic={} -> {}",
                    translator.clean(s),
                    translator.is_arabic(s),
                    translator.translate(s)
                );
                history.push((s.to_string(), report));
            }
        }
    }

    if let Err(e) = translator.save_dictionary() {
        tracing::error!(error = %e, "could not save learned names");
    }
    Ok(())
}

fn print_ui(history: &[(String, String)]) -> io::Result<()> {
    let mut out = stdout();
    execute!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(Color::Cyan),
        Print("Arabic Name Translator Simulator\n"),
        ResetColor,
        Print("---------------------------------------------------------------\n"),
        Print("Type a name and press [Enter]. ':learn <arabic>=<english>' to teach, 'exit' to quit.\n\n"),
    )?;

    for (input, report) in history.iter().rev().take(10).rev() {
        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!("  {}\n", input)),
            SetForegroundColor(Color::Green),
            Print(format!("    {}\n", report)),
            ResetColor,
        )?;
    }
    write!(out, "\n> ")?;
    out.flush()
}

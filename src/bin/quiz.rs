//! Interactive terminal questionnaire.
//!
//! Walks every catalog question, reads the chosen option number from stdin,
//! and prints the party ranking.
//!
//! # Environment Variables
//!
//! - `AFFINITY_QUESTIONS` — question catalog (default: `data/questions.json`)
//! - `AFFINITY_PARTIES` — party catalog (default: `data/parties.json`)
//! - `RUST_LOG` — log filter (default: `warn`)
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin affinity-quiz
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use affinity::{best_match, EngineConfig, SurveySession};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = EngineConfig::from_env();
    let data = config.load().with_context(|| {
        format!(
            "failed to load catalog ({}, {})",
            config.questions_path.display(),
            config.parties_path.display()
        )
    })?;

    let mut session = SurveySession::new(&data);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_quiz(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Ask every question, then print the ranking. Stops early on end of input.
fn run_quiz<R: BufRead, W: Write>(
    session: &mut SurveySession<'_>,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Responde a las siguientes preguntas según tu opinión.\n")?;

    'questions: while let Some(question) = session.current_question() {
        writeln!(out, "{}. {}", question.id, question.text)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "   {}. {}", i + 1, option)?;
        }

        loop {
            write!(out, "Elige una opción (número): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break 'questions;
            }

            let choice = match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(out, "Ingresa un número válido.")?;
                    continue;
                }
            };
            match session.select_index(&question.id, choice) {
                Ok(()) => break,
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(out, "Opción inválida. Intenta de nuevo.")?;
                }
            }
        }
        writeln!(out)?;

        if !session.next_question() {
            break;
        }
    }

    let results = session.results();
    writeln!(out, "\nResultado de afinidad política:\n")?;
    for result in &results {
        writeln!(out, "  {}", result)?;
    }
    if let Some(best) = best_match(&results) {
        writeln!(
            out,
            "\nEl partido más afín a tus respuestas es: {} con {:.2}% de afinidad.",
            best.name, best.affinity
        )?;
    }
    Ok(())
}

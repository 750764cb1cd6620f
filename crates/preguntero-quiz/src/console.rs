// SPDX-License-Identifier: AGPL-3.0-or-later
//! Interactive mock interview over any line reader and writer

use crate::bank::{Difficulty, QuestionBank};
use crate::session::{parse_count, QuizSession};
use crate::Result;
use rand::Rng;
use std::io::{BufRead, Write};

const WIDTH: usize = 70;

/// Write `text` and read one answer line; `None` once input is exhausted
fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn banner<W: Write + ?Sized>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    Ok(())
}

/// Run one mock interview.
///
/// Returns `None` when input ends before a difficulty is chosen or when the
/// chosen difficulty has no questions. Input that ends mid-session stops
/// asking questions and still prints the summary.
pub fn run_console<R, W, G>(
    bank: &QuestionBank,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Option<QuizSession>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    G: Rng + ?Sized,
{
    banner(out, "MOCK INTERVIEW - PREGUNTERO TÉCNICO")?;
    writeln!(out, "\nBienvenido a tu simulación de entrevista técnica.")?;
    writeln!(out, "Responde las preguntas y luego verifica tu respuesta.\n")?;
    writeln!(out, "Selecciona dificultad:")?;
    for difficulty in Difficulty::ALL {
        writeln!(
            out,
            "{}. {} ({} preguntas)",
            difficulty.menu_number(),
            difficulty.label(),
            bank.items(difficulty).len()
        )?;
    }

    let Some(choice) = prompt(input, out, "\nOpción (1-5): ")? else {
        return Ok(None);
    };
    let difficulty = Difficulty::from_menu_choice(&choice);
    let available = bank.items(difficulty).len();
    if available == 0 {
        writeln!(out, "Categoría no encontrada: {}", difficulty.label())?;
        tracing::info!(difficulty = difficulty.label(), "no questions for difficulty");
        return Ok(None);
    }

    let requested = prompt(input, out, &format!("\n¿Cuántas preguntas? (1-{available}): "))?;
    let count = parse_count(requested.as_deref().unwrap_or(""), available);
    let mut session = QuizSession::sample(bank, difficulty, count, rng)?;
    let total = session.total();

    let questions = session.questions().to_vec();
    for (index, item) in questions.iter().enumerate() {
        let number = index + 1;
        banner(out, &format!("PREGUNTA #{number}"))?;
        writeln!(out, "\n{}", item.question)?;

        if prompt(input, out, "\n[Presiona Enter para ver la respuesta...]")?.is_none() {
            break;
        }
        writeln!(out, "\nRESPUESTA:\n{}", "-".repeat(WIDTH))?;
        writeln!(out, "{}", item.answer)?;
        writeln!(out, "{}", "-".repeat(WIDTH))?;

        let Some(feedback) = prompt(input, out, "\n¿Tu respuesta fue similar a esta? (s/n): ")? else {
            break;
        };
        let recalled = feedback.eq_ignore_ascii_case("s");
        session.record(recalled);
        if recalled {
            writeln!(out, "¡Bien!")?;
        } else {
            writeln!(out, "Revisaré más esta pregunta...")?;
        }

        if number < total
            && prompt(input, out, "\n[Presiona Enter para la siguiente pregunta...]")?.is_none()
        {
            break;
        }
    }

    banner(out, "RESULTADO DE LA ENTREVISTA")?;
    writeln!(out, "Preguntas respondidas: {}/{}", session.answered(), total)?;
    writeln!(out, "Respuestas similares: {}/{}", session.score(), session.answered())?;
    writeln!(out, "Porcentaje: {:.1}%", session.percentage())?;
    writeln!(out, "{}", session.verdict().message())?;
    writeln!(out, "{}\n", "=".repeat(WIDTH))?;
    out.flush()?;

    tracing::info!(
        difficulty = difficulty.label(),
        score = session.score(),
        answered = session.answered(),
        "quiz finished"
    );
    Ok(Some(session))
}

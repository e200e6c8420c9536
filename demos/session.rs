//! Plays one seeded quiz session end to end and prints every screen.
//!
//! Run with: `RUST_LOG=debug cargo run --example session`
//!
//! The "player" answers correctly on odd questions and picks a distractor on
//! even ones, so both feedback paths show up. The seed makes the output
//! identical on every run.

use times_table_quiz::{view, Advance, QuizEngine, QuizSettings, SessionEvent, SetupForm};

fn main() -> Result<(), times_table_quiz::QuizError> {
    pretty_env_logger::init();

    let settings = QuizSettings::default().with_seed(42);
    let mut form = SetupForm::new(&settings);
    form.set_table(7)?;
    form.select_question_count(5)?;
    println!("Setup: table {} / {} questions", form.table(), form.question_count());

    // Caller-side cosmetic pause; the engine never waits.
    std::thread::sleep(settings.start_delay());

    let mut engine = QuizEngine::new(settings)?;
    let mut current = engine.start(form.config())?;

    let summary = loop {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {}  ({})", view::heading(&current), view::progress(&current));
        println!("  {}", view::prompt(&current));

        let correct = current.question().correct_answer();
        let pick = if current.question_index % 2 == 1 {
            correct
        } else {
            current.choices.iter().find(|&c| c != correct).unwrap_or(correct)
        };
        let result = engine.submit_answer(pick)?;

        for (choice, highlight) in view::highlights(&current, engine.selected_answer()) {
            println!("    [{choice:>3}] {highlight:?}");
        }
        println!("  {} — {}", view::feedback_title(&result), view::feedback_message(&result));
        println!("  ({})", view::feedback_action(&result));
        engine.acknowledge()?;

        match engine.advance()? {
            Advance::NextQuestion(next) => current = next,
            Advance::Completed(summary) => break summary,
        }
    };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Final score: {}", view::summary_line(&summary));

    for event in engine.drain_events() {
        if event == SessionEvent::Ended {
            form.on_session_ended();
        }
    }
    println!("Back to setup: table {} / {} questions", form.table(), form.question_count());
    Ok(())
}

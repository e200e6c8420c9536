use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    choices::{draw_multiplier, generate_choices},
    error::QuizError,
    models::{
        Advance, AnswerChoices, AnswerResult, Question, QuestionView, RoundStep, SessionConfig,
        SessionEvent, SessionPhase, SessionSummary,
    },
    settings::QuizSettings,
};

/// State owned by a running session. Dropped as a whole on completion or quit.
#[derive(Debug, Clone)]
struct ActiveSession {
    config: SessionConfig,
    question: Question,
    choices: AnswerChoices,
    question_index: u32,
    score: u32,
    selected: Option<u32>,
    step: RoundStep,
}

impl ActiveSession {
    fn view(&self) -> QuestionView {
        QuestionView {
            table: self.question.table,
            multiplier: self.question.multiplier,
            choices: self.choices,
            question_index: self.question_index,
            question_count: self.config.question_count,
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Configuring,
    Active(ActiveSession),
    Completed,
}

/// The quiz session state machine.
///
/// `Configuring -> Active -> Completed`, with `start` allowed again from
/// `Completed`. Every operation either returns an immutable snapshot or a
/// [`QuizError`]; the UI polls the snapshots and drains [`SessionEvent`]s to
/// drive its own animations and alerts.
///
/// Randomness comes from the injected `R`, so a seeded RNG replays the exact
/// same questions.
#[derive(Debug)]
pub struct QuizEngine<R: Rng = StdRng> {
    settings: QuizSettings,
    rng: R,
    state: State,
    events: Vec<SessionEvent>,
}

impl QuizEngine<StdRng> {
    /// Build an engine whose RNG is seeded from `settings.rng_seed`, or from
    /// entropy when no seed is set.
    pub fn new(settings: QuizSettings) -> Result<Self, QuizError> {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(settings: QuizSettings, rng: R) -> Result<Self, QuizError> {
        settings.validate()?;
        Ok(QuizEngine {
            settings,
            rng,
            state: State::Configuring,
            events: Vec::new(),
        })
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            State::Configuring => SessionPhase::Configuring,
            State::Active(s) => SessionPhase::Active {
                question_index: s.question_index,
                score: s.score,
                step: s.step,
            },
            State::Completed => SessionPhase::Completed,
        }
    }

    /// The question on screen, if a session is running.
    ///
    /// While feedback is showing this is still the question that was just
    /// answered, but `question_index` has already moved on.
    pub fn current_question(&self) -> Option<QuestionView> {
        match &self.state {
            State::Active(s) => Some(s.view()),
            _ => None,
        }
    }

    pub fn selected_answer(&self) -> Option<u32> {
        match &self.state {
            State::Active(s) => s.selected,
            _ => None,
        }
    }

    pub fn config(&self) -> Option<SessionConfig> {
        match &self.state {
            State::Active(s) => Some(s.config),
            _ => None,
        }
    }

    /// Take every event emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a session at question 1 with a score of 0.
    pub fn start(&mut self, config: SessionConfig) -> Result<QuestionView, QuizError> {
        if self.phase().is_active() {
            return Err(protocol_violation("start", self.phase()));
        }
        self.settings.check_config(&config)?;

        let question = Question { table: config.table, multiplier: draw_multiplier(&mut self.rng) };
        let choices = generate_choices(&mut self.rng, question.table, question.multiplier)?;
        let session = ActiveSession {
            config,
            question,
            choices,
            question_index: 1,
            score: 0,
            selected: None,
            step: RoundStep::AwaitingAnswer,
        };
        let view = session.view();
        self.state = State::Active(session);

        info!(
            "session started: table {} for {} questions",
            config.table, config.question_count
        );
        debug!("question 1: {question} choices {choices}");
        self.events.push(SessionEvent::Started(view));
        Ok(view)
    }

    /// Score `choice` against the current question and step the index forward.
    pub fn submit_answer(&mut self, choice: u32) -> Result<AnswerResult, QuizError> {
        let phase = self.phase();
        let session = match &mut self.state {
            State::Active(s) if s.step == RoundStep::AwaitingAnswer => s,
            _ => return Err(protocol_violation("submit_answer", phase)),
        };
        if !session.choices.contains(choice) {
            warn!("rejected answer {choice}: offered {}", session.choices);
            return Err(QuizError::AnswerNotOffered {
                choice,
                offered: session.choices.as_array(),
            });
        }

        let correct_answer = session.question.correct_answer();
        let correct = choice == correct_answer;
        session.selected = Some(choice);
        if correct {
            session.score += 1;
        }
        session.question_index += 1;
        session.step = RoundStep::ShowingFeedback;

        let result = AnswerResult {
            correct,
            selected: choice,
            correct_answer,
            score: session.score,
            question_index: session.question_index,
            question_count: session.config.question_count,
            is_session_over: session.question_index > session.config.question_count,
        };
        debug!(
            "answered {choice} for {} ({}), score {}",
            session.question,
            if correct { "correct" } else { "wrong" },
            result.score
        );
        self.events.push(SessionEvent::Answered(result));
        Ok(result)
    }

    /// Record that the feedback for the last answer has been shown.
    pub fn acknowledge(&mut self) -> Result<(), QuizError> {
        let phase = self.phase();
        match &mut self.state {
            State::Active(s) if s.step == RoundStep::ShowingFeedback => {
                s.step = RoundStep::FeedbackAcknowledged;
                Ok(())
            }
            _ => Err(protocol_violation("acknowledge", phase)),
        }
    }

    /// Move past acknowledged feedback: either a fresh question or the summary.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let phase = self.phase();
        let session = match &mut self.state {
            State::Active(s) if s.step == RoundStep::FeedbackAcknowledged => s,
            _ => return Err(protocol_violation("advance", phase)),
        };

        if session.question_index > session.config.question_count {
            let summary = SessionSummary {
                final_score: session.score,
                question_count: session.config.question_count,
            };
            self.state = State::Completed;
            info!(
                "session completed: {}/{}",
                summary.final_score, summary.question_count
            );
            self.events.push(SessionEvent::Completed(summary));
            self.events.push(SessionEvent::Ended);
            return Ok(Advance::Completed(summary));
        }

        let question = Question {
            table: session.config.table,
            multiplier: draw_multiplier(&mut self.rng),
        };
        let choices = generate_choices(&mut self.rng, question.table, question.multiplier)?;
        session.question = question;
        session.choices = choices;
        session.selected = None;
        session.step = RoundStep::AwaitingAnswer;

        let view = session.view();
        debug!("question {}: {question} choices {choices}", view.question_index);
        self.events.push(SessionEvent::Advanced(view));
        Ok(Advance::NextQuestion(view))
    }

    /// Abandon the running session. No summary is reported.
    pub fn quit(&mut self) -> Result<(), QuizError> {
        let phase = self.phase();
        match phase {
            SessionPhase::Active { question_index, score, .. } => {
                info!("session quit at question {question_index} with score {score}");
                self.state = State::Completed;
                self.events.push(SessionEvent::Ended);
                Ok(())
            }
            _ => Err(protocol_violation("quit", phase)),
        }
    }
}

fn protocol_violation(operation: &'static str, phase: SessionPhase) -> QuizError {
    warn!("`{operation}` called while {phase}");
    QuizError::ProtocolViolation { operation, phase }
}

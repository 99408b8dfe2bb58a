//! Mapping typed lines to quiz actions.

use quizflow_engine::{Phase, QuestionId, QuizFlow, Step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Answer {
        question: QuestionId,
        value: &'static str,
    },
    Continue,
    Back,
    AcceptOffer,
    DeclineOffer,
    AcceptPopup,
    DismissPopup,
    Quit,
    /// Input that means nothing on the current screen.
    Invalid(String),
    /// Nothing to do (e.g. typing during the analysis).
    Ignore,
}

/// Interpret `line` against whatever the flow is showing.
#[must_use]
pub fn parse(line: &str, flow: &QuizFlow) -> Command {
    let input = line.trim().to_ascii_lowercase();
    if matches!(input.as_str(), "q" | "quit" | "exit") {
        return Command::Quit;
    }

    match flow.phase() {
        Phase::Intro => match input.as_str() {
            "" | "s" | "start" => Command::Start,
            _ => Command::Invalid(line.trim().to_owned()),
        },
        Phase::Quiz { .. } => parse_step(&input, flow.current_step()),
        Phase::Analysis => Command::Ignore,
        Phase::Result if flow.is_popup_open() => match input.as_str() {
            "y" | "yes" => Command::AcceptPopup,
            "" | "n" | "no" | "x" => Command::DismissPopup,
            _ => Command::Invalid(line.trim().to_owned()),
        },
        Phase::Result => match input.as_str() {
            "y" | "yes" => Command::AcceptOffer,
            "n" | "no" => Command::DeclineOffer,
            _ => Command::Invalid(line.trim().to_owned()),
        },
    }
}

fn parse_step(input: &str, step: Option<Step>) -> Command {
    if matches!(input, "b" | "back") {
        return Command::Back;
    }
    match step {
        Some(Step::Info(_)) if input.is_empty() || input == "c" => Command::Continue,
        Some(Step::Question(question)) => input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i))
            .map_or_else(
                || Command::Invalid(input.to_owned()),
                |choice| Command::Answer {
                    question: question.id,
                    value: choice.text(),
                },
            ),
        _ => Command::Invalid(input.to_owned()),
    }
}

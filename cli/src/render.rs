//! Plain-terminal rendering of the quiz screens.
//!
//! Each screen is printed once when it changes. Styling goes through
//! crossterm so colours degrade cleanly on terminals without ANSI support.

use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use quizflow_core::result::{
    CTA_BUTTON_TEXT, DECLINE_BUTTON_TEXT, NEXT_STEPS, POPUP_BODY, POPUP_CTA_TEXT, POPUP_HEADLINE,
    RESULT_HEADLINE, RESULT_SUBHEADLINE, SUCCESS_RATE_PERCENT,
};
use quizflow_core::{
    ANALYSIS_FOOTER, ANALYSIS_HEADING, INTRO_BODY, INTRO_HEADLINE, INTRO_TAGLINE,
    START_BUTTON_TEXT,
};
use quizflow_engine::{MessageStatus, Phase, QuizFlow, ResultView, Severity, Step};

const BAR_WIDTH: usize = 30;

/// Identity of what is on screen. A new key means a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenKey {
    phase: Phase,
    analysis_message: Option<usize>,
    popup_open: bool,
    total_steps: Option<usize>,
}

impl ScreenKey {
    #[must_use]
    pub fn of(flow: &QuizFlow) -> Self {
        Self {
            phase: flow.phase(),
            analysis_message: flow.analysis_view().map(|view| view.current()),
            popup_open: flow.is_popup_open(),
            total_steps: flow.progress().map(|progress| progress.total),
        }
    }
}

pub fn screen(out: &mut impl Write, flow: &QuizFlow) -> io::Result<()> {
    writeln!(out)?;
    let drawn = match flow.phase() {
        Phase::Intro => intro(out),
        Phase::Quiz { .. } => step(out, flow),
        Phase::Analysis => analysis(out, flow),
        Phase::Result => {
            if let Some(view) = flow.result_view() {
                result(out, &view)?;
            }
            if flow.is_popup_open() {
                popup(out)?;
            }
            Ok(())
        }
    };
    drawn?;
    out.flush()
}

pub fn notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.yellow())?;
    out.flush()
}

pub fn link(out: &mut impl Write, url: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Open:".bold(), url.underlined().blue())?;
    out.flush()
}

fn intro(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", INTRO_TAGLINE.green())?;
    writeln!(out, "{}", INTRO_HEADLINE.bold())?;
    writeln!(out, "{INTRO_BODY}")?;
    writeln!(out)?;
    writeln!(out, "Press Enter to {}, or q to quit.", START_BUTTON_TEXT.bold())
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn step(out: &mut impl Write, flow: &QuizFlow) -> io::Result<()> {
    let (Some(current), Some(progress)) = (flow.current_step(), flow.progress()) else {
        return Ok(());
    };
    writeln!(
        out,
        "{} Question {} of {}",
        bar(progress.percent()).dark_grey(),
        progress.number,
        progress.total
    )?;

    match current {
        Step::Question(question) => {
            writeln!(out, "{}", question.title.bold())?;
            if let Some(subtitle) = question.subtitle {
                writeln!(out, "{}", subtitle.italic())?;
            }
            let selected = flow.selected_answer();
            for (i, choice) in question.options.iter().enumerate() {
                let marker = if selected == Some(choice.text()) {
                    ">"
                } else {
                    " "
                };
                writeln!(out, "{marker} {}. {}", i + 1, choice.text())?;
            }
            writeln!(out, "Type a number to answer, b to go back.")
        }
        Step::Info(info) => {
            writeln!(out, "{}", info.title.bold().cyan())?;
            writeln!(out, "{}", info.content)?;
            writeln!(out, "Press Enter to continue, b to go back.")
        }
    }
}

fn analysis(out: &mut impl Write, flow: &QuizFlow) -> io::Result<()> {
    let Some(view) = flow.analysis_view() else {
        return Ok(());
    };
    writeln!(out, "{}", ANALYSIS_HEADING.bold())?;
    writeln!(out, "{}", bar(view.percent()).blue())?;
    for (message, status) in view.messages() {
        match status {
            MessageStatus::Done => writeln!(out, "{} {message}", "✓".green())?,
            MessageStatus::Active => writeln!(out, "{} {}", "…".blue(), message.blue())?,
            MessageStatus::Pending => writeln!(out, "  {}", message.dark_grey())?,
        }
    }
    writeln!(out, "{}", ANALYSIS_FOOTER.italic())
}

fn severity_label(severity: Severity) -> StyledContent<&'static str> {
    let label = severity.label().bold();
    match severity {
        Severity::VeryBad => label.red(),
        Severity::Bad => label.dark_yellow(),
        Severity::NotGood | Severity::Okay => label.yellow(),
    }
}

fn result(out: &mut impl Write, view: &ResultView) -> io::Result<()> {
    writeln!(out, "{}", "Analysis Complete".green())?;
    writeln!(out, "{}", RESULT_HEADLINE.bold())?;
    writeln!(out, "{RESULT_SUBHEADLINE}")?;
    writeln!(out)?;
    writeln!(out, "Severity: {}", severity_label(view.severity))?;
    writeln!(out, "Profile: {}", view.persona.label().bold())?;
    writeln!(out, "{}", view.severity_summary())?;
    writeln!(
        out,
        "Expected regrowth: {} days | Risk of permanent loss: {}% | Success rate: {}%",
        view.regrowth_window(),
        view.loss_risk_percent(),
        SUCCESS_RATE_PERCENT
    )?;
    writeln!(out)?;
    writeln!(out, "{}", view.urgency.headline().bold().red())?;
    writeln!(out, "{}", view.urgency.body())?;
    writeln!(out)?;
    writeln!(out, "{}", "Next steps:".bold())?;
    for (i, next) in NEXT_STEPS.iter().enumerate() {
        writeln!(out, "  {}. {next}", i + 1)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", view.cta_banner().bold())?;
    writeln!(out, "  y) {}", CTA_BUTTON_TEXT.green())?;
    writeln!(out, "  n) {}", DECLINE_BUTTON_TEXT.dark_grey())
}

fn popup(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", POPUP_HEADLINE.bold().red())?;
    writeln!(out, "{POPUP_BODY}")?;
    writeln!(out, "  y) {}", POPUP_CTA_TEXT.green())?;
    writeln!(out, "  n) Close")
}

use crate::core::match_posts::{MatchLogic, MatchSummary};
use crate::core::process::ProcessLogic;
use crate::errors::{AppError, AppResult};
use crate::models::CleanedSample;
use crate::ui::messages::{error, header, success, warning};
use crate::utils::path::ParticipantLayout;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PipelineStep {
    /// Clean and reconstruct raw gaze data
    Process,
    /// Match gaze data with posts and screenshots
    Match,
}

impl PipelineStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::Process => "process",
            PipelineStep::Match => "match",
        }
    }
}

#[derive(Debug)]
pub struct StepOutcome {
    pub step: PipelineStep,
    pub error: Option<AppError>,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
pub struct ParticipantReport {
    pub participant: String,
    pub steps: Vec<StepOutcome>,
}

impl ParticipantReport {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.succeeded()).count()
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub participants: Vec<ParticipantReport>,
}

impl BatchReport {
    pub fn total_succeeded(&self) -> usize {
        self.participants.iter().map(|p| p.succeeded()).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.participants
            .iter()
            .map(|p| p.steps.len() - p.succeeded())
            .sum()
    }
}

/// Settings shared by every participant of a batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub width: u32,
    pub height: u32,
    pub continue_on_error: bool,
}

pub struct BatchLogic;

impl BatchLogic {
    /// Stage A then stage B for one participant, handing the trace over in
    /// memory. A reconstruction failure stops before matching.
    pub fn run_one(layout: &ParticipantLayout, width: u32, height: u32) -> AppResult<MatchSummary> {
        let cleaned = ProcessLogic::process(layout, width, height)?;
        MatchLogic::match_samples(layout, &cleaned)
    }

    /// Run `steps` for each participant in turn. Participants never share
    /// state; one failing does not stop the next.
    pub fn run(
        data_dir: &Path,
        participants: &[String],
        steps: &[PipelineStep],
        opts: &BatchOptions,
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for name in participants {
            header(format!("Participant: {name}"));
            report
                .participants
                .push(Self::run_participant(data_dir, name, steps, opts));
        }

        report
    }

    fn run_participant(
        data_dir: &Path,
        name: &str,
        steps: &[PipelineStep],
        opts: &BatchOptions,
    ) -> ParticipantReport {
        let mut outcomes = Vec::with_capacity(steps.len());

        let layout = match ParticipantLayout::new(data_dir, name) {
            Ok(layout) => layout,
            Err(e) => {
                error(&e);
                outcomes.push(StepOutcome {
                    step: steps.first().copied().unwrap_or(PipelineStep::Process),
                    error: Some(e.for_participant(name)),
                });
                return ParticipantReport {
                    participant: name.to_string(),
                    steps: outcomes,
                };
            }
        };

        // trace produced by a successful `process`, reused by a following `match`
        let mut cleaned: Option<Vec<CleanedSample>> = None;
        // a failed `process` leaves any older gaze_clean.csv stale
        let mut process_failed = false;

        for &step in steps {
            let result = match step {
                PipelineStep::Process => {
                    ProcessLogic::process(&layout, opts.width, opts.height).map(|c| {
                        cleaned = Some(c);
                    })
                }
                PipelineStep::Match if process_failed => {
                    warning("Skipping match: reconstruction did not complete");
                    Err(AppError::MissingPrerequisite(layout.clean_gaze()))
                }
                PipelineStep::Match => match cleaned.take() {
                    Some(samples) => MatchLogic::match_samples(&layout, &samples).map(|_| ()),
                    None => MatchLogic::match_from_file(&layout).map(|_| ()),
                },
            };
            if step == PipelineStep::Process {
                process_failed = result.is_err();
            }

            let failure = result.err().map(|e| e.for_participant(name));
            match &failure {
                None => success(format!("Step '{}' completed", step.as_str())),
                Some(e) => {
                    error(e);
                    warning(format!("Step '{}' failed for {name}", step.as_str()));
                }
            }

            let failed = failure.is_some();
            outcomes.push(StepOutcome {
                step,
                error: failure,
            });
            if failed && !opts.continue_on_error {
                warning("Stopping processing for this participant");
                break;
            }
        }

        ParticipantReport {
            participant: name.to_string(),
            steps: outcomes,
        }
    }
}

//! Interactive console flow: onboarding, check-in, selection, active
//! session, feedback, history, and profile views. A plain presentation state
//! machine; everything interesting happens inside the pipelines.

use crate::i18n::Translator;
use anyhow::Result;
use chrono::Utc;
use respite_core::{
    Activity, ActivityLog, Difficulty, EnergyLevel, Enjoyment, Feedback, Interactive, Language,
    Persona, SessionContext, UserProfile,
};
use respite_pipeline::{EncouragementPipeline, GenerationPipeline};
use respite_session::ProfileStore;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;

pub struct Console {
    store: Arc<dyn ProfileStore>,
    generation: GenerationPipeline,
    encouragement: EncouragementPipeline,
}

/// Ctrl+C / Ctrl+D anywhere ends the program cleanly, so every read can
/// yield "no input, wind down".
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(&line);
            Ok(Some(line.trim().to_string()))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn pick_number(
    rl: &mut DefaultEditor,
    prompt: &str,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = read_line(rl, &format!("{prompt} > "))? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("1-{max}?"),
        }
    }
}

impl Console {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        generation: GenerationPipeline,
        encouragement: EncouragementPipeline,
    ) -> Self {
        Self { store, generation, encouragement }
    }

    pub async fn run(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        let mut profile = match self.store.load().await? {
            Some(profile) => profile,
            None => match onboarding(&mut rl)? {
                Some(profile) => {
                    self.store.save(&profile).await?;
                    profile
                }
                None => return Ok(()),
            },
        };

        loop {
            let t = Translator::new(profile.language);
            println!("\n{}, {}!", t.t("checkin_greeting"), profile.name);
            let Some(choice) = read_line(&mut rl, &format!("{} > ", t.t("menu")))? else {
                break;
            };
            match choice.as_str() {
                "q" => break,
                "h" => show_history_view(&profile),
                "p" => show_profile_view(&profile),
                _ => {
                    if !self.check_in(&mut rl, &mut profile).await? {
                        break;
                    }
                }
            }
        }

        println!("{}", Translator::new(profile.language).t("goodbye"));
        Ok(())
    }

    /// One full check-in: context questions, generation, selection, session,
    /// feedback. Returns false when the user wound down mid-flow.
    async fn check_in(&self, rl: &mut DefaultEditor, profile: &mut UserProfile) -> Result<bool> {
        let t = Translator::new(profile.language);

        let minutes = loop {
            let Some(line) = read_line(rl, &format!("{} > ", t.t("checkin_minutes")))? else {
                return Ok(false);
            };
            match line.parse::<u32>() {
                Ok(n) if (SessionContext::MIN_MINUTES..=SessionContext::MAX_MINUTES).contains(&n) => {
                    break n;
                }
                _ => println!("5-60?"),
            }
        };

        println!("{}", t.t("checkin_energy"));
        for (idx, level) in EnergyLevel::ALL.iter().enumerate() {
            println!("  {}) {}", idx + 1, level);
        }
        let Some(energy_idx) = pick_number(rl, "1-3", EnergyLevel::ALL.len())? else {
            return Ok(false);
        };
        let ctx = SessionContext::new(minutes, EnergyLevel::ALL[energy_idx]);

        // One generation call in flight per check-in; the console blocks on
        // it until it settles (the pipeline itself never fails).
        println!("\n{}", t.t("generating"));
        let activities =
            self.generation.generate_activities(profile, ctx.minutes, ctx.energy).await;

        loop {
            println!("\n{}", t.t("selection_header"));
            for (idx, activity) in activities.iter().enumerate() {
                let marker = if idx == 0 { format!(" ({})", t.t("top_pick")) } else { String::new() };
                println!(
                    "  {}) {} [{} / {} min]{}",
                    idx + 1,
                    activity.title,
                    activity.category,
                    activity.duration_minutes,
                    marker
                );
                println!("     {}", activity.description);
                println!("     {}", activity.rationale);
            }

            let Some(line) = read_line(rl, &format!("{} > ", t.t("selection_pick")))? else {
                return Ok(false);
            };
            if line == "b" {
                return Ok(true);
            }
            let Ok(choice) = line.parse::<usize>() else {
                continue;
            };
            let Some(activity) = choice.checked_sub(1).and_then(|idx| activities.get(idx)) else {
                continue;
            };

            match self.run_session(rl, &t, activity)? {
                // Aborting a session is a pure state transition back to
                // selection; nothing to release.
                SessionOutcome::Aborted => continue,
                SessionOutcome::WoundDown => return Ok(false),
                SessionOutcome::Completed => {
                    return match self.finish_session(rl, profile, activity).await? {
                        Some(()) => Ok(true),
                        None => Ok(false),
                    };
                }
            }
        }
    }

    fn run_session(
        &self,
        rl: &mut DefaultEditor,
        t: &Translator,
        activity: &Activity,
    ) -> Result<SessionOutcome> {
        println!("\n== {} ==", activity.title);
        println!("{}", activity.description);

        if !activity.steps.is_empty() {
            println!("\n{}:", t.t("session_steps"));
            for (idx, step) in activity.steps.iter().enumerate() {
                println!("  {}. {}", idx + 1, step);
            }
        }

        match &activity.interactive {
            Some(Interactive::Quiz { quiz_data }) => {
                println!("\n{}", quiz_data.question);
                for (idx, option) in quiz_data.options.iter().enumerate() {
                    println!("  {}) {}", idx + 1, option);
                }
                let Some(answer_idx) = pick_number(rl, t.t("quiz_pick"), quiz_data.options.len())?
                else {
                    return Ok(SessionOutcome::WoundDown);
                };
                if quiz_data.options[answer_idx] == quiz_data.correct_answer {
                    println!("{}", t.t("quiz_correct"));
                } else {
                    println!("{} {}", t.t("quiz_incorrect"), quiz_data.correct_answer);
                }
                println!("{}", quiz_data.explanation);
            }
            Some(Interactive::Reading { content }) => {
                println!("\n{}", t.t("reading_header"));
                println!("{content}");
            }
            None => {
                if let Some(url) = &activity.source_url {
                    println!("\nSource: {url}");
                }
            }
        }

        loop {
            let Some(line) = read_line(rl, &format!("\n{} > ", t.t("session_done")))? else {
                return Ok(SessionOutcome::WoundDown);
            };
            match line.as_str() {
                "" => return Ok(SessionOutcome::Completed),
                "a" => return Ok(SessionOutcome::Aborted),
                _ => {}
            }
        }
    }

    /// Feedback, history append (through the retention cap), persistence,
    /// and the encouragement line.
    async fn finish_session(
        &self,
        rl: &mut DefaultEditor,
        profile: &mut UserProfile,
        activity: &Activity,
    ) -> Result<Option<()>> {
        let t = Translator::new(profile.language);

        println!("\n{}", t.t("feedback_difficulty"));
        let Some(difficulty_idx) = pick_number(rl, "1-3", 3)? else {
            return Ok(None);
        };
        let difficulty =
            [Difficulty::TooEasy, Difficulty::JustRight, Difficulty::TooHard][difficulty_idx];

        println!("{}", t.t("feedback_enjoyment"));
        let Some(enjoyment_idx) = pick_number(rl, "1-3", 3)? else {
            return Ok(None);
        };
        let enjoyment = [Enjoyment::Disliked, Enjoyment::Neutral, Enjoyment::Liked][enjoyment_idx];

        profile.record(ActivityLog {
            activity_id: activity.id.clone(),
            activity_title: activity.title.clone(),
            timestamp: Utc::now(),
            completed: true,
            feedback: Some(Feedback { difficulty, enjoyment, notes: None }),
        });
        self.store.save(profile).await?;

        let line = self.encouragement.generate_encouragement(profile, activity).await;
        println!("\n{line}");
        Ok(Some(()))
    }
}

enum SessionOutcome {
    Completed,
    Aborted,
    WoundDown,
}

/// First-run setup. The UI speaks English until a language is chosen.
fn onboarding(rl: &mut DefaultEditor) -> Result<Option<UserProfile>> {
    println!("Welcome to Respite - a few questions to get set up.\n");

    let name = loop {
        let Some(line) = read_line(rl, "What's your name? > ")? else {
            return Ok(None);
        };
        if !line.is_empty() {
            break line;
        }
    };

    println!("\nWhich best describes you?");
    for (idx, persona) in Persona::ALL.iter().enumerate() {
        println!("  {}) {}", idx + 1, persona);
    }
    let Some(persona_idx) = pick_number(rl, "1-7", Persona::ALL.len())? else {
        return Ok(None);
    };

    let goals = loop {
        let Some(line) = read_line(rl, "\nWhat are your goals? (comma-separated) > ")? else {
            return Ok(None);
        };
        let goals: Vec<String> =
            line.split(',').map(|g| g.trim().to_string()).filter(|g| !g.is_empty()).collect();
        if !goals.is_empty() {
            break goals;
        }
    };

    let language = loop {
        let Some(line) = read_line(rl, "\nLanguage - en or hi? > ")? else {
            return Ok(None);
        };
        match line.as_str() {
            "en" | "" => break Language::En,
            "hi" => break Language::Hi,
            _ => println!("en or hi?"),
        }
    };

    Ok(Some(UserProfile::new(name, Persona::ALL[persona_idx], goals, language)))
}

pub fn show_history_view(profile: &UserProfile) {
    let t = Translator::new(profile.language);
    if profile.history.is_empty() {
        println!("{}", t.t("history_empty"));
        return;
    }
    println!("{}", t.t("history_header"));
    for entry in profile.history.iter().rev() {
        let feedback = entry
            .feedback
            .as_ref()
            .map(|f| format!(" ({}, {})", f.enjoyment.as_str(), f.difficulty.as_str()))
            .unwrap_or_default();
        println!(
            "  {}  {}{}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.activity_title,
            feedback
        );
    }
}

pub fn show_profile_view(profile: &UserProfile) {
    let t = Translator::new(profile.language);
    println!("{}", t.t("profile_header"));
    println!("  {} ({})", profile.name, profile.persona);
    println!("  Goals: {}", profile.goals.join(", "));
    println!("  Sessions recorded: {}", profile.history.len());
}

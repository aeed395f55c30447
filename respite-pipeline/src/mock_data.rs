//! Hand-authored fallback activities: the universal safety net when live
//! generation is unavailable or fails at every tier. One entry per
//! representative style, in fixed order; always safe to show.

use respite_core::{Activity, ActivityCategory, Interactive, QuizData};

/// The fixed fallback set with `duration_minutes` overwritten to the
/// caller's requested minutes. All other fields are constant.
pub fn mock_activities(minutes: u32) -> Vec<Activity> {
    vec![
        Activity {
            id: "mock-1".to_string(),
            title: "The 4-7-8 Breathing Technique".to_string(),
            description: "A simple, powerful breathing pattern to reduce anxiety and reset your nervous system in just a few minutes.".to_string(),
            category: ActivityCategory::Body,
            duration_minutes: minutes,
            steps: vec![
                "Sit comfortably with your back straight.".to_string(),
                "Exhale completely through your mouth, making a whoosh sound.".to_string(),
                "Close your mouth and inhale quietly through your nose to a mental count of 4.".to_string(),
                "Hold your breath for a count of 7.".to_string(),
                "Exhale completely through your mouth, making a whoosh sound to a count of 8.".to_string(),
                "Repeat the cycle for 4 full breaths.".to_string(),
            ],
            rationale: "Perfect for resetting low energy or calming high stress quickly.".to_string(),
            source_url: Some("https://www.drweil.com/health-wellness/body-mind-spirit/stress-anxiety/breathing-three-exercises/".to_string()),
            interactive: None,
        },
        Activity {
            id: "mock-2".to_string(),
            title: "Logic Puzzle: The Two Doors".to_string(),
            description: "A classic logic riddle to wake up your brain without needing deep focus.".to_string(),
            category: ActivityCategory::Brain,
            duration_minutes: minutes,
            steps: vec![
                "Read the riddle below.".to_string(),
                "Think through the logic.".to_string(),
                "Select your answer.".to_string(),
            ],
            rationale: "Engages logical reasoning centers to boost alertness.".to_string(),
            source_url: None,
            interactive: Some(Interactive::Quiz {
                quiz_data: QuizData {
                    question: "You are in a room with two doors. One leads to freedom, the other to a lion. There are two guards. One always tells the truth, the other always lies. You don't know which is which. You can ask ONE question to ONE guard to find the door to freedom. What do you ask?".to_string(),
                    options: vec![
                        "Ask 'Is the left door freedom?'".to_string(),
                        "Ask 'If I asked the other guard which door leads to freedom, what would he say?'".to_string(),
                        "Ask 'Are you the liar?'".to_string(),
                    ],
                    correct_answer: "Ask 'If I asked the other guard which door leads to freedom, what would he say?'".to_string(),
                    explanation: "If you ask this, both guards will point to the WRONG door. The truth-teller knows the liar would point to the wrong door, so he points there. The liar lies about what the truth-teller would say, so he also points to the wrong door. Therefore, you choose the OPPOSITE door.".to_string(),
                },
            }),
        },
        Activity {
            id: "mock-3".to_string(),
            title: "Micro-Reading: The Stoic View".to_string(),
            description: "A short passage from Marcus Aurelius on handling today's challenges.".to_string(),
            category: ActivityCategory::Reflection,
            duration_minutes: minutes,
            steps: vec![
                "Read the short passage.".to_string(),
                "Reflect on how it applies to your current task.".to_string(),
                "Take one deep breath.".to_string(),
            ],
            rationale: "Provides perspective and emotional regulation for a busy professional.".to_string(),
            source_url: None,
            interactive: Some(Interactive::Reading {
                content: "\"When you wake up in the morning, tell yourself: The people I deal with today will be meddling, ungrateful, arrogant, dishonest, jealous, and surly. They are like this because they can't tell good from evil. But I have seen the beauty of good, and the ugliness of evil, and have recognized that the wrongdoer has a nature related to my own... and so none of them can hurt me.\"\n\n— Marcus Aurelius, Meditations".to_string(),
            }),
        },
    ]
}

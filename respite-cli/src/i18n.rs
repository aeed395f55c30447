//! Fixed UI strings for the console, keyed by message id. Generated content
//! arrives already localized from the pipeline; this table only covers the
//! chrome around it. Hindi falls back to English for any untranslated key.

use respite_core::Language;

pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t(&self, key: &str) -> &'static str {
        match self.language {
            Language::En => english(key),
            Language::Hi => hindi(key).unwrap_or_else(|| english(key)),
        }
    }
}

fn english(key: &str) -> &'static str {
    match key {
        "checkin_greeting" => "Good to see you",
        "checkin_minutes" => "How many minutes do you have? (5-60)",
        "checkin_energy" => "How is your energy right now?",
        "generating" => "Planning your break...",
        "selection_header" => "Here are three options for you:",
        "selection_pick" => "Pick an activity (1-3), or 'b' to go back",
        "top_pick" => "top pick",
        "session_steps" => "Steps",
        "quiz_pick" => "Your answer (enter a number)",
        "quiz_correct" => "Correct!",
        "quiz_incorrect" => "Not quite. The answer was:",
        "reading_header" => "Take a moment to read:",
        "session_done" => "Press Enter when you are done, or 'a' to abort",
        "feedback_difficulty" => "How was the difficulty? 1) too easy 2) just right 3) too hard",
        "feedback_enjoyment" => "How did it feel? 1) disliked 2) neutral 3) liked",
        "history_header" => "Your recent sessions:",
        "history_empty" => "No sessions recorded yet.",
        "profile_header" => "Your profile:",
        "menu" => "Press Enter to check in, 'h' for history, 'p' for profile, 'q' to quit",
        "goodbye" => "Take care!",
        _ => "",
    }
}

fn hindi(key: &str) -> Option<&'static str> {
    let text = match key {
        "checkin_greeting" => "आपसे मिलकर अच्छा लगा",
        "checkin_minutes" => "आपके पास कितने मिनट हैं? (5-60)",
        "checkin_energy" => "अभी आपकी ऊर्जा कैसी है?",
        "generating" => "आपके ब्रेक की योजना बन रही है...",
        "selection_header" => "आपके लिए तीन विकल्प:",
        "selection_pick" => "एक गतिविधि चुनें (1-3), या वापस जाने के लिए 'b'",
        "session_steps" => "चरण",
        "quiz_pick" => "आपका उत्तर (एक संख्या लिखें)",
        "quiz_correct" => "सही!",
        "quiz_incorrect" => "सही नहीं। उत्तर था:",
        "reading_header" => "एक क्षण निकालकर पढ़ें:",
        "session_done" => "पूरा होने पर Enter दबाएँ, या छोड़ने के लिए 'a'",
        "history_header" => "आपके हाल के सत्र:",
        "history_empty" => "अभी तक कोई सत्र दर्ज नहीं है।",
        "profile_header" => "आपकी प्रोफ़ाइल:",
        "goodbye" => "अपना ख्याल रखें!",
        _ => return None,
    };
    Some(text)
}

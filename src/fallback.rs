//! Offline keyword responder used when no provider answers.

/// Fallback answer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Study,
    Plan,
    Idea,
    Think,
    General,
}

/// Keyword sets in match order. First set with a hit wins.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Study, &["study", "padhai", "exam", "learn", "syllabus"]),
    (Category::Plan, &["plan", "schedule", "time", "manage", "yojana"]),
    (Category::Idea, &["idea", "suggestion", "business", "project", "startup"]),
    (Category::Think, &["think", "opinion", "view", "decision", "solve"]),
];

const STUDY: &str = "[STUDY] FACT: Your current methods are inefficient.

1. Active recall > Passive reading. Test yourself.
2. Spaced repetition: Review after 1 day, 3 days, 7 days.
3. Pomodoro: 25 min focus, 5 min break.
4. Teach what you learn (Feynman technique).

ACTION: Tomorrow, study 25 min, test 5 min. Repeat.";

const PLAN: &str = "[PLAN] TRUTH: You're wasting 3+ hours daily.

1. Time-block your day (Google Calendar).
2. Most important task FIRST.
3. Batch similar tasks.
4. Track time (Toggl app).

ACTION: Today, plan tomorrow's schedule minute-by-minute.";

const IDEA: &str = "[IDEA] REALITY: Your first 10 ideas will fail.

1. Solve YOUR own problem first.
2. Talk to 10 potential users.
3. Build MVP in 7 days max.
4. Charge money from day 1.

ACTION: List 3 problems you face daily. Solve one.";

const THINK: &str = "[THINK] LOGIC: Your emotions are lying to you.

1. Write down the problem.
2. List ALL possible solutions.
3. Pros/cons for each.
4. Choose based on data, not feelings.

ACTION: Next decision, write on paper. No mental processing.";

const GENERAL: &str = "[DIRECT] I need specifics.

Ask about:
• Study techniques
• Planning/scheduling  
• Idea generation
• Critical thinking

Be direct. No vague questions.";

impl Category {
    /// Canned reply for this category.
    pub fn response(self) -> &'static str {
        match self {
            Category::Study => STUDY,
            Category::Plan => PLAN,
            Category::Idea => IDEA,
            Category::Think => THINK,
            Category::General => GENERAL,
        }
    }
}

/// Pick a category by case-insensitive substring match.
///
/// Matching is on raw substrings, so "plan" also hits "planet" and "time"
/// hits "sometimes".
pub fn categorize(message: &str) -> Category {
    let lower = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Canned reply for a message. Total and pure.
pub fn classify(message: &str) -> &'static str {
    categorize(message).response()
}

//! Prompt construction for the oracle
//!
//! Every request carries the same persona preamble; the per-operation
//! prompts are short natural-language instructions.

/// System preamble sent with every text request
pub(crate) const SYSTEM_PERSONA: &str = "\
You are the AI backend of a satirical personal-productivity app. \
Tone: cynical, sarcastic, grimy, absurd, dark-humored - but STRICTLY NO VIOLENCE. \
Picture yourself as a resident of a mad, filthy, falling-apart provincial town who hates errands. \
Use slang like 'pal' and 'buddy', avoid hard profanity and anything gory. \
Focus on the miseries of modern life: queues, bureaucracy, utility bills, bad weather.";

pub(crate) fn absurd_task_prompt(task: &str) -> String {
    format!(
        "Rewrite this boring chore: \"{task}\" as a quest objective for a cynical \
         video-game character. Make it annoying, epic-but-stupid, or suspiciously \
         bureaucratic. 20 words max."
    )
}

pub(crate) fn excuse_prompt(task: &str) -> String {
    format!(
        "Invent an absurd, paranoid, or lazy excuse for why I did NOT do this task: \
         \"{task}\". Conspiracy theories, aliens, laziness, or bad weather all work. \
         One sentence max."
    )
}

pub(crate) fn madness_prompt() -> String {
    "Generate a 'madness of the day' event that could happen in a weird, grimy \
     provincial town. It should be funny and annoying."
        .to_string()
}

pub(crate) fn insult_prompt() -> String {
    "Give a short, sarcastic, funny roast about the user mashing a button in an \
     app to relieve stress."
        .to_string()
}

pub(crate) fn psych_profile_prompt(name: &str) -> String {
    format!(
        "Write a short (2 sentences max), funny, pseudo-bureaucratic case-file \
         assessment of a person named \"{name}\". Point out laziness, odd habits, \
         or paranoia. Style: police report from a madhouse."
    )
}

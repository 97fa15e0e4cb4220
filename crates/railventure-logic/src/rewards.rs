//! Mini-game and quiz reward calculators.
//!
//! Stations offer optional mini-games and a three-question quiz. Both
//! map a score to a money reward; the quiz also yields a qualitative
//! rating string.

/// Money reward for a mini-game: the score fraction of `max_reward`,
/// rounded half-up. Zero when `max_score` is zero; scores above
/// `max_score` are clamped.
pub fn minigame_reward(score: u32, max_score: u32, max_reward: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    let score = score.min(max_score);
    (f64::from(score) / f64::from(max_score) * f64::from(max_reward)).round() as u32
}

/// Quiz rating tiers by correct answers out of 3.
pub const QUIZ_RATINGS: [&str; 4] = ["Keep Learning", "Good Try", "Great Job", "Quiz Master"];

/// Money rewards by correct answers out of 3.
pub const QUIZ_REWARDS: [u32; 4] = [5, 10, 20, 30];

/// Money and rating for a quiz result. Counts above 3 saturate at the
/// top tier.
pub fn quiz_reward(correct: u32) -> (u32, &'static str) {
    let tier = correct.min(3) as usize;
    (QUIZ_REWARDS[tier], QUIZ_RATINGS[tier])
}

mod course;
mod forum;
mod ids;
mod quiz;
mod session;
mod transaction;
mod user;

pub use ids::{CourseId, PostId, QuizId, ReplyId, TransactionId, UserId};

pub use course::{Course, CourseLevel, Topic, TopicKind, TopicResource};
pub use forum::{ForumPost, ForumReply};
pub use quiz::{
    AnswerSheet, PASS_PERCENT, Question, Quiz, QuizLevel, QuizOutcome, UNANSWERED, result_percent,
};
pub use session::AuthSession;
pub use transaction::{
    REGISTRATION_BONUS_COINS, Transaction, TransactionKind, with_registration_bonus,
};
pub use user::{LeaderboardEntry, User};

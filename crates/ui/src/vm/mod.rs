mod badge_vm;
mod coin_ticker;
mod course_vm;
mod dashboard_vm;
mod quiz_vm;
mod time_fmt;
mod transaction_vm;

pub use badge_vm::{BadgeVm, SUPER_ACHIEVER, badge_glyph, map_badges};
pub use coin_ticker::{TICK_INTERVAL_MS, TICK_STEPS, ticker_values};
pub use course_vm::{
    CourseCardVm, level_class, map_course_cards, reward_on_completion_text, reward_text,
};
pub use dashboard_vm::{
    CELEBRATION_COIN_THRESHOLD, DashboardVm, LeaderboardRowVm, map_dashboard,
};
pub use quiz_vm::{OptionTone, QUIZ_BADGE_TARGET, option_class, option_tone, result_text};
pub use time_fmt::{format_date, format_datetime};
pub use transaction_vm::{TransactionRowVm, map_transaction_rows};

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::user_cache::UserCache;
use crate::views::ViewError;
use crate::vm::{
    LeaderboardRowVm, TICK_INTERVAL_MS, TransactionRowVm, map_dashboard, ticker_values,
};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let cache = use_context::<UserCache>();

    // Overrides the displayed balance while the claim animation runs.
    let mut ticker = use_signal(|| None::<i64>);
    let mut claim_note = use_signal(|| None::<(bool, String)>);
    let mut celebration_dismissed = use_signal(|| false);
    let mut claiming = use_signal(|| false);

    if ctx.session().is_none() {
        return rsx! {
            div { class: "page",
                p { "Please sign in to continue." }
                Link { to: Route::Login {}, "Go to login" }
            }
        };
    }

    let Some(snapshot) = cache.snapshot() else {
        return rsx! {
            div { class: "page", p { "Loading..." } }
        };
    };
    let vm = map_dashboard(&snapshot);
    let coins_shown = ticker().unwrap_or(vm.coins);

    let claim = {
        let ctx = ctx.clone();
        move |_| {
            if claiming() {
                return;
            }
            claiming.set(true);
            claim_note.set(None);
            let ctx = ctx.clone();
            spawn(async move {
                let Some(session) = ctx.session() else {
                    claiming.set(false);
                    return;
                };
                let start = cache.snapshot().map_or(0, |snap| snap.user.coins);
                match ctx.coins().claim_daily(&session).await {
                    Ok(claim) => {
                        let text = claim
                            .message
                            .unwrap_or_else(|| "Daily coins claimed!".to_owned());
                        claim_note.set(Some((false, text)));
                        for value in ticker_values(start, claim.coins) {
                            ticker.set(Some(value));
                            tokio::time::sleep(Duration::from_millis(TICK_INTERVAL_MS)).await;
                        }
                        cache.refresh(&ctx).await;
                        ticker.set(None);
                    }
                    Err(err) => {
                        claim_note.set(Some((true, ViewError::from(err).message().to_owned())));
                    }
                }
                claiming.set(false);
            });
        }
    };

    rsx! {
        div { class: "page dashboard",
            if vm.celebrate && !celebration_dismissed() {
                div { class: "celebration-overlay",
                    div { class: "celebration-card",
                        span { class: "celebration-emoji", "🎉" }
                        h2 { "Super Achiever!" }
                        p { "You crossed 1,000 Vitacoins!" }
                        span { class: "celebration-badge", "Super Achiever Badge" }
                        button { onclick: move |_| celebration_dismissed.set(true), "Close" }
                    }
                }
            }

            header { class: "dashboard-header",
                h1 { "Welcome, {vm.name}!" }
                p { class: "subtitle",
                    "Here's your Vitaversity journey at a glance. Earn coins, unlock badges, and help your peers!"
                }
                div { class: "stat-grid",
                    div { class: "stat stat-coins", "Total Coins: " span { class: "stat-value", "{coins_shown}" } }
                    div { class: "stat stat-badges", "Badges: " span { class: "stat-value", "{vm.badge_count}" } }
                    div { class: "stat stat-rank", "Leaderboard Rank: " span { class: "stat-value", "{vm.rank_label}" } }
                    div { class: "stat stat-courses", "Courses Completed: " span { class: "stat-value", "{vm.completed_courses}" } }
                }
                p { class: "tip", "Tip: Complete quizzes and help in forums to earn more coins and badges!" }
                if let Some(text) = vm.penalty_note.as_ref() {
                    div { class: "penalty-callout",
                        span { class: "penalty-label", "Penalty: " }
                        "{text}"
                    }
                }
            }

            section { class: "claim-section",
                div { class: "claim-balance",
                    div { class: "claim-title", "Vitacoins" }
                    div { class: "claim-coins", "{coins_shown} 🪙" }
                }
                button { class: "claim-button", onclick: claim, disabled: claiming(), "Claim Daily Coins" }
            }
            if let Some((is_error, text)) = claim_note() {
                div { class: if is_error { "claim-note error" } else { "claim-note" }, "{text}" }
            }

            section { class: "quick-links",
                Link { class: "quick-link quiz", to: Route::Quiz {}, "Go to Quiz" }
                Link { class: "quick-link courses", to: Route::Courses {}, "Browse Courses" }
                Link { class: "quick-link forum", to: Route::Forum {}, "Go to Forum" }
            }

            section { class: "dashboard-columns",
                div { class: "badges-panel",
                    h2 { "Badges" }
                    div { class: "badge-list",
                        for badge in vm.badges.iter() {
                            span { class: "badge", "{badge.glyph} {badge.name}" }
                        }
                        if vm.badges.is_empty() {
                            span { class: "empty", "No badges yet." }
                        }
                    }
                }
                div { class: "leaderboard-panel",
                    h2 { "Leaderboard" }
                    ul { class: "leaderboard",
                        for row in vm.leaderboard.iter() {
                            LeaderboardRow { row: row.clone() }
                        }
                    }
                }
            }

            section { class: "transactions-panel",
                h2 { "Transaction History" }
                ul { class: "transactions",
                    for row in vm.transactions.iter() {
                        TransactionRow { row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LeaderboardRow(row: LeaderboardRowVm) -> Element {
    rsx! {
        li { class: if row.is_me { "leaderboard-row me" } else { "leaderboard-row" },
            "{row.place}. {row.name} - {row.coins} coins"
        }
    }
}

#[component]
fn TransactionRow(row: TransactionRowVm) -> Element {
    rsx! {
        li { class: if row.is_credit { "tx credit" } else { "tx debit" },
            "{row.text} "
            span { class: "tx-date", "({row.date})" }
        }
    }
}

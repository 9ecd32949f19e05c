//! Due Date Badge Component
//!
//! Due date indicator shown on card fronts and in the card detail view.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::Icon;
use crate::models::Card;

/// Where the badge is displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeDisplay {
    Front,
    Modal,
}

/// Urgency of a due date relative to today
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl DueStatus {
    fn class(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "overdue",
            DueStatus::DueSoon => "due-soon",
            DueStatus::Upcoming => "upcoming",
        }
    }
}

pub fn due_status(due: NaiveDate, today: NaiveDate) -> DueStatus {
    let days_left = (due - today).num_days();
    if days_left < 0 {
        DueStatus::Overdue
    } else if days_left <= 1 {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

pub fn format_due(due: NaiveDate, shown_on: BadgeDisplay) -> String {
    match shown_on {
        BadgeDisplay::Front => due.format("%b %-d").to_string(),
        BadgeDisplay::Modal => due.format("%b %-d, %Y").to_string(),
    }
}

/// Local calendar date from the browser clock
fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// Due date badge; renders nothing for cards without a due date
#[component]
pub fn DueDateBadge(
    card: Card,
    shown_on: BadgeDisplay,
) -> impl IntoView {
    let Some(due) = card.due_date else {
        return ().into_any();
    };

    let status = today()
        .map(|today| due_status(due, today))
        .unwrap_or(DueStatus::Upcoming);
    let placement = match shown_on {
        BadgeDisplay::Front => "front",
        BadgeDisplay::Modal => "modal",
    };

    view! {
        <span
            class=format!("due-date-badge due-date-badge-{} {}", placement, status.class())
            title=due.to_string()
        >
            <Icon kind="clock" />
            <span class="due-date-badge-text">{format_due(due, shown_on)}</span>
        </span>
    }
    .into_any()
}

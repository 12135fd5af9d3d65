//! Pure rendering of an [`ActivitySet`] into the board's view tree.
//!
//! [`render`] never touches a display. The tree keeps raw server text; every
//! string goes through [`escape`] when it is turned into markup.

use crate::model::ActivitySet;
use crate::presenter::{encode_uri_component, escape, format_display_name, initials_from_name};
use std::fmt::Write;

pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const PLACEHOLDER_LABEL: &str = "-- Select an activity --";

/// Stable identity of a rendered participant row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub activity: String,
    pub email: String,
}

impl RowKey {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub key: RowKey,
    pub display_name: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// What the activity list area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Cards(Vec<ActivityCard>),
    Failed,
}

/// Output of one successful load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Placeholder first, then one option per activity.
    pub options: Vec<SelectOption>,
}

impl BoardView {
    pub fn rows(&self) -> impl Iterator<Item = &ParticipantRow> {
        self.cards.iter().flat_map(|c| c.participants.iter())
    }

    pub fn list_html(&self) -> String {
        cards_html(&self.cards)
    }

    pub fn options_html(&self) -> String {
        options_html(&self.options)
    }
}

pub fn render(activities: &ActivitySet) -> BoardView {
    let mut view = BoardView {
        cards: Vec::with_capacity(activities.len()),
        options: Vec::with_capacity(activities.len() + 1),
    };
    view.options.push(SelectOption::placeholder());

    for (name, details) in activities.iter() {
        let participants = details
            .participants
            .iter()
            .map(|p| ParticipantRow {
                key: RowKey::new(name, p.as_str()),
                display_name: format_display_name(p),
                initials: initials_from_name(p),
            })
            .collect();

        view.cards.push(ActivityCard {
            name: name.to_string(),
            description: details.description.clone().unwrap_or_default(),
            schedule: details.schedule.clone().unwrap_or_default(),
            spots_left: details.spots_left(),
            participants,
        });

        view.options.push(SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        });
    }

    view
}

impl ListView {
    pub fn to_html(&self) -> String {
        match self {
            ListView::Cards(cards) => cards_html(cards),
            ListView::Failed => format!("<p>{}</p>", escape(LOAD_FAILURE_TEXT)),
        }
    }
}

fn cards_html(cards: &[ActivityCard]) -> String {
    let mut html = String::new();
    for card in cards {
        let name = escape(&card.name);

        let participants = if card.participants.is_empty() {
            format!(r#"<p class="participants-empty">{NO_PARTICIPANTS_TEXT}</p>"#)
        } else {
            let mut list = String::from(r#"<ul class="participants-list">"#);
            for row in &card.participants {
                let _ = write!(
                    list,
                    concat!(
                        r#"<li><span class="avatar">{}</span>"#,
                        r#"<span class="participant-name">{}</span>"#,
                        r#"<button class="participant-remove" data-email="{}" data-activity="{}" title="Remove participant">✖</button></li>"#,
                    ),
                    escape(&row.initials),
                    escape(&row.display_name),
                    encode_uri_component(&row.key.email),
                    name,
                );
            }
            list.push_str("</ul>");
            list
        };

        let _ = write!(
            html,
            concat!(
                r#"<div class="activity-card">"#,
                "<h4>{name}</h4>",
                "<p>{description}</p>",
                "<p><strong>Schedule:</strong> {schedule}</p>",
                "<p><strong>Availability:</strong> {spots} spots left</p>",
                r#"<div class="participants-section" role="group" aria-label="{name} participants">"#,
                "<strong>Participants:</strong>{participants}</div>",
                "</div>",
            ),
            name = name,
            description = escape(&card.description),
            schedule = escape(&card.schedule),
            spots = card.spots_left,
            participants = participants,
        );
    }
    html
}

pub fn options_html(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape(&o.value),
                escape(&o.label)
            )
        })
        .collect()
}

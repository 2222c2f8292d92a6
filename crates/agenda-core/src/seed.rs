//! Fixed sample data loaded at startup. Nothing is persisted.

use chrono::{DateTime, Duration, Utc};
use agenda_types::model::{Contact, Meeting, Recurrence};

pub fn seed_contacts() -> Vec<Contact> {
    [
        ("c1", "Aria Montgomery", "Lead Product Manager", "Innovate Inc.", "aria.m@innovate.com", "555-0101"),
        ("c2", "Ben Carter", "Senior UX Designer", "Creative Solutions", "ben.c@creative.com", "555-0102"),
        ("c3", "Chloe Davis", "Head of Engineering", "Tech Forward", "chloe.d@techforward.com", "555-0103"),
        ("c4", "David Evans", "Marketing Director", "Innovate Inc.", "david.e@innovate.com", "555-0104"),
    ]
    .into_iter()
    .map(|(id, name, title, company, email, phone)| Contact {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        avatar_url: Contact::avatar_url_for(id),
        email: email.to_string(),
        phone: phone.to_string(),
    })
    .collect()
}

/// Sample meetings scheduled relative to `now`.
pub fn seed_meetings(now: DateTime<Utc>) -> Vec<Meeting> {
    vec![
        Meeting {
            id: "m1".to_string(),
            title: "Project Phoenix Kick-off".to_string(),
            time: now + Duration::hours(2),
            duration: 60,
            attendees: vec!["c1".to_string(), "c3".to_string()],
            agenda: "Initial planning and role assignment for the new Phoenix project. \
                     Discuss timelines and initial milestones."
                .to_string(),
            recurrence: Recurrence::None,
        },
        Meeting {
            id: "m2".to_string(),
            title: "Q3 Design Review".to_string(),
            time: now + Duration::days(1),
            duration: 90,
            attendees: vec!["c1".to_string(), "c2".to_string(), "c4".to_string()],
            agenda: "Review the latest UX mockups and marketing materials for the Q3 launch. \
                     Finalize design language and branding."
                .to_string(),
            recurrence: Recurrence::Weekly,
        },
        Meeting {
            id: "m3".to_string(),
            title: "Engineering Sync-up".to_string(),
            time: now + Duration::days(2),
            duration: 45,
            attendees: vec!["c3".to_string()],
            agenda: "Weekly technical sync to discuss progress, blockers, \
                     and upcoming sprint priorities."
                .to_string(),
            recurrence: Recurrence::None,
        },
    ]
}

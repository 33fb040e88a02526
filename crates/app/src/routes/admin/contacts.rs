use dioxus::prelude::*;
use shared_types::{
    t, AppError, ContactResponse, ContactSearchParams, ContactStatus, LoadState, Msg,
    PaginatedResponse, CONTACT_STATUSES,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, EmptyState, ErrorState, FormSelect, LoadingState, PageHeader,
    PageTitle, Pagination, ToastOptions,
};

use crate::components::ContactStatusBadge;
use crate::format::{non_blank, short_date};
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;

/// Admin inbox for the public contact form.
#[component]
pub fn AdminContacts() -> Element {
    let lang = use_lang();
    let mut status = use_signal(String::new);
    let mut page = use_signal(|| 1i64);

    let mut contacts = use_resource(move || {
        let params = ContactSearchParams {
            status: non_blank(&status.read()),
            page: Some(page()),
            limit: None,
        };
        async move { server::api::admin_list_contacts(params).await }
    });

    use_page_clamp(contacts, page);
    let state = LoadState::from_fetch(lang, contacts.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Contacts)} }
        }

        div { class: "filter-row",
            FormSelect {
                value: status(),
                onchange: move |evt: Event<FormData>| {
                    page.set(1);
                    status.set(evt.value());
                },
                option { value: "", {t(lang, Msg::AllStatuses)} }
                for s in CONTACT_STATUSES.iter().copied() {
                    option { value: s.as_str(), selected: status() == s.as_str(), {s.label(lang)} }
                }
            }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 4 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| contacts.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                div { class: "contact-list",
                    for contact in found.data {
                        ContactCard {
                            key: "{contact.id}",
                            contact,
                            on_changed: move |_| contacts.restart(),
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}

/// Status moves offered from `status`. Archived messages can be reopened.
fn contact_actions(status: ContactStatus) -> Vec<(ContactStatus, Msg)> {
    match status {
        ContactStatus::New => vec![
            (ContactStatus::Read, Msg::MarkRead),
            (ContactStatus::Replied, Msg::MarkReplied),
            (ContactStatus::Archived, Msg::Archive),
        ],
        ContactStatus::Read => vec![
            (ContactStatus::Replied, Msg::MarkReplied),
            (ContactStatus::Archived, Msg::Archive),
        ],
        ContactStatus::Replied => vec![(ContactStatus::Archived, Msg::Archive)],
        ContactStatus::Archived => vec![(ContactStatus::Read, Msg::MarkRead)],
    }
}

#[component]
fn ContactCard(contact: ContactResponse, on_changed: EventHandler<()>) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let id = use_signal(|| contact.id.clone());
    let received = short_date(&contact.created_at).to_string();

    let mut update = move |next: ContactStatus| {
        busy.set(true);
        spawn(async move {
            match server::api::admin_update_contact_status(id(), next).await {
                Ok(_) => {
                    toast.success(t(lang, Msg::ContactUpdated).to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
            }
            busy.set(false);
        });
    };

    rsx! {
        Card { class: if contact.status == ContactStatus::New { "contact-card unread" } else { "contact-card" },
            CardHeader {
                CardTitle { "{contact.subject}" }
                CardDescription {
                    "{contact.name} · "
                    a { href: "mailto:{contact.email}", "{contact.email}" }
                    " · {received}"
                }
                ContactStatusBadge { status: contact.status }
            }
            CardContent {
                p { class: "contact-message", "{contact.message}" }
            }
            CardFooter {
                for (next, caption) in contact_actions(contact.status) {
                    Button {
                        size: ButtonSize::Small,
                        variant: if next == ContactStatus::Archived { ButtonVariant::Ghost } else { ButtonVariant::Outline },
                        disabled: busy(),
                        onclick: move |_| update(next),
                        {t(lang, caption)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archived_messages_can_be_reopened() {
        let moves: Vec<_> = contact_actions(ContactStatus::Archived)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(moves, vec![ContactStatus::Read]);
    }

    #[test]
    fn no_action_targets_the_current_status() {
        for status in CONTACT_STATUSES.iter().copied() {
            assert!(contact_actions(status).iter().all(|(next, _)| *next != status));
        }
    }
}

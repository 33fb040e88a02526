use dioxus::prelude::*;
use shared_types::{t, AppError, DeclineDialog, JobAction, JobResponse, Msg, UserRole};
use shared_ui::{use_toast, Button, ButtonSize, ButtonVariant, ToastOptions};

use crate::i18n::use_lang;

/// Approve / decline / close buttons for one job row. Decline only opens
/// the shared dialog; the other actions call the server directly.
#[component]
pub fn ModerationButtons(
    job: JobResponse,
    dialog: Signal<DeclineDialog>,
    on_changed: EventHandler<()>,
) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut busy = use_signal(|| false);
    let mut dialog = dialog;
    let actions = JobAction::for_viewer(UserRole::Admin, job.status);

    let mut run = move |action: JobAction, id: String| {
        busy.set(true);
        spawn(async move {
            let (result, done) = match action {
                JobAction::Approve => (server::api::admin_approve_job(id).await, Msg::JobApproved),
                JobAction::Close => (server::api::admin_close_job(id).await, Msg::JobClosed),
                _ => {
                    busy.set(false);
                    return;
                }
            };
            match result {
                Ok(_) => {
                    toast.success(t(lang, done).to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
            }
            busy.set(false);
        });
    };

    rsx! {
        for action in actions {
            match action {
                JobAction::Approve => rsx! {
                    Button {
                        size: ButtonSize::Small,
                        disabled: busy(),
                        onclick: {
                            let id = job.id.clone();
                            move |_| run(JobAction::Approve, id.clone())
                        },
                        {t(lang, Msg::Approve)}
                    }
                },
                JobAction::Decline => rsx! {
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Destructive,
                        disabled: busy(),
                        onclick: {
                            let id = job.id.clone();
                            move |_| dialog.write().open(id.clone())
                        },
                        {t(lang, Msg::Decline)}
                    }
                },
                JobAction::Close => rsx! {
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: {
                            let id = job.id.clone();
                            move |_| run(JobAction::Close, id.clone())
                        },
                        {t(lang, Msg::Close)}
                    }
                },
                JobAction::Edit | JobAction::Submit | JobAction::Delete => rsx! {},
            }
        }
    }
}

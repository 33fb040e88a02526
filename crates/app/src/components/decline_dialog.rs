use dioxus::prelude::*;
use shared_types::{t, DeclineDialog, Msg};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogActions, DialogContent, DialogDescription, DialogRoot,
    DialogTitle, Textarea, ToastOptions,
};

use crate::i18n::use_lang;

/// Modal asking the admin for a decline reason. Stays open until the
/// decline call succeeds; `on_declined` then lets the page refetch.
#[component]
pub fn DeclineJobDialog(dialog: Signal<DeclineDialog>, on_declined: EventHandler<()>) -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut dialog = dialog;
    let mut submitting = use_signal(|| false);

    let state = dialog.read().clone();
    let reason_error = state
        .show_reason_error()
        .then(|| t(lang, Msg::DeclineReasonRequired).to_string());

    let handle_submit = move |_: MouseEvent| {
        let request = dialog.write().submit();
        let Ok((job_id, req)) = request else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            match server::api::admin_decline_job(job_id, req).await {
                Ok(_) => {
                    dialog.write().close();
                    toast.success(t(lang, Msg::JobDeclined).to_string(), ToastOptions::new());
                    on_declined.call(());
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(lang, &e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: state.is_open(),
            on_open_change: move |open: bool| {
                if !open {
                    dialog.write().close();
                }
            },
            DialogContent {
                DialogTitle { {t(lang, Msg::DeclineJobTitle)} }
                DialogDescription { {t(lang, Msg::DeclineJobPrompt)} }
                Textarea {
                    label: t(lang, Msg::DeclineReason).to_string(),
                    value: state.reason.clone(),
                    required: true,
                    error: reason_error,
                    on_input: move |evt: FormEvent| dialog.write().set_reason(evt.value()),
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dialog.write().close(),
                        {t(lang, Msg::Cancel)}
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        loading: submitting(),
                        onclick: handle_submit,
                        {t(lang, Msg::Decline)}
                    }
                }
            }
        }
    }
}

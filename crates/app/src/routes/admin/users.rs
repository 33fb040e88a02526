use dioxus::prelude::*;
use shared_types::{
    t, AppError, LoadState, Msg, PaginatedResponse, User, UserRole, UserSearchParams,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable,
    DataTableActions, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, EmptyState, ErrorState, FormSelect, Input, LoadingState, PageHeader, PageTitle,
    Pagination, SearchBar, ToastOptions,
};

use crate::auth::use_auth;
use crate::format::non_blank;
use crate::i18n::use_lang;
use crate::paging::use_page_clamp;

const ROLE_FILTERS: [UserRole; 3] = [UserRole::Employee, UserRole::Employer, UserRole::Admin];

#[component]
pub fn AdminUsers() -> Element {
    let lang = use_lang();
    let mut search_input = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut page = use_signal(|| 1i64);

    let mut users = use_resource(move || {
        let params = UserSearchParams {
            q: non_blank(&search.read()),
            role: non_blank(&role.read()),
            page: Some(page()),
            limit: None,
        };
        async move { server::api::admin_list_users(params).await }
    });

    use_page_clamp(users, page);
    let state = LoadState::from_fetch(lang, users.read().as_ref(), PaginatedResponse::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Users)} }
        }

        SearchBar {
            onsubmit: move |_| {
                page.set(1);
                search.set(search_input());
            },
            Input {
                value: search_input(),
                placeholder: t(lang, Msg::Email),
                on_input: move |evt: FormEvent| search_input.set(evt.value()),
            }
            FormSelect {
                value: role(),
                onchange: move |evt: Event<FormData>| {
                    page.set(1);
                    role.set(evt.value());
                },
                option { value: "", {t(lang, Msg::AllRoles)} }
                for r in ROLE_FILTERS {
                    option { value: r.as_str(), selected: role() == r.as_str(), {r.label(lang)} }
                }
            }
            Button { submit: true, {t(lang, Msg::Search)} }
        }

        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| users.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(found) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { {t(lang, Msg::Name)} }
                        DataTableColumn { {t(lang, Msg::Email)} }
                        DataTableColumn { {t(lang, Msg::Role)} }
                        DataTableColumn { {t(lang, Msg::Status)} }
                        DataTableColumn { {t(lang, Msg::Actions)} }
                    }
                    DataTableBody {
                        for user in found.data {
                            UserRow { key: "{user.id}", user, on_changed: move |_| users.restart() }
                        }
                    }
                }
                Pagination { lang, meta: found.meta, page }
            },
        }
    }
}

#[component]
fn UserRow(user: User, on_changed: EventHandler<()>) -> Element {
    let lang = use_lang();
    let auth = use_auth();
    let toast = use_toast();
    let mut busy = use_signal(|| false);

    let is_self = auth.is_me(user.id);
    let user_id = user.id;
    let next_active = !user.is_active;

    let handle_toggle = move |_: MouseEvent| async move {
        busy.set(true);
        match server::api::admin_set_user_active(user_id, next_active).await {
            Ok(_) => {
                toast.success(t(lang, Msg::UserUpdated).to_string(), ToastOptions::new());
                on_changed.call(());
            }
            Err(e) => toast.error(AppError::friendly_message(lang, &e.to_string()), ToastOptions::new()),
        }
        busy.set(false);
    };

    rsx! {
        DataTableRow { muted: !user.is_active,
            DataTableCell { "{user.display_name}" }
            DataTableCell { "{user.email}" }
            DataTableCell { {user.role().label(lang)} }
            DataTableCell {
                if user.is_active {
                    Badge { variant: BadgeVariant::Success, {t(lang, Msg::Active)} }
                } else {
                    Badge { variant: BadgeVariant::Outline, {t(lang, Msg::Inactive)} }
                }
            }
            DataTableActions {
                if !is_self {
                    Button {
                        size: ButtonSize::Small,
                        variant: if user.is_active { ButtonVariant::Destructive } else { ButtonVariant::Secondary },
                        loading: busy(),
                        onclick: handle_toggle,
                        {t(lang, if user.is_active { Msg::Deactivate } else { Msg::Activate })}
                    }
                }
            }
        }
    }
}

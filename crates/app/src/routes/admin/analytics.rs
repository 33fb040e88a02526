use dioxus::prelude::*;
use shared_types::{
    bar_percent, category_label, t, AnalyticsData, ApplicationStatus, JobStatus, Lang,
    LoadState, Msg, StatusCount,
};
use shared_ui::{
    BarItem, BarList, Card, CardContent, CardHeader, CardTitle, EmptyState, ErrorState,
    LoadingState, PageHeader, PageTitle,
};

use crate::i18n::use_lang;

/// Bars for grouped counts, labelled through `label`.
fn bars(counts: &[StatusCount], label: impl Fn(&str) -> String) -> Vec<BarItem> {
    counts
        .iter()
        .map(|c| BarItem {
            label: label(&c.key),
            count: c.count,
            percent: bar_percent(c.count, counts),
        })
        .collect()
}

fn job_status_label(key: &str, lang: Lang) -> String {
    JobStatus::parse(key).map_or_else(|| key.to_string(), |s| s.label(lang).to_string())
}

fn application_status_label(key: &str, lang: Lang) -> String {
    ApplicationStatus::parse(key).map_or_else(|| key.to_string(), |s| s.label(lang).to_string())
}

#[component]
pub fn AdminAnalytics() -> Element {
    let lang = use_lang();
    let mut data = use_resource(server::api::admin_analytics);
    let state = LoadState::from_fetch(lang, data.read().as_ref(), AnalyticsData::is_empty);

    rsx! {
        PageHeader {
            PageTitle { {t(lang, Msg::Analytics)} }
        }
        match state {
            LoadState::Loading => rsx! { LoadingState { lang, rows: 6 } },
            LoadState::Failed(message) => rsx! {
                ErrorState { lang, message, on_retry: move |_| data.restart() }
            },
            LoadState::Empty => rsx! { EmptyState { lang } },
            LoadState::Ready(analytics) => {
                let signups: Vec<StatusCount> = analytics
                    .signups_last_30_days
                    .iter()
                    .map(|d| StatusCount { key: d.day.clone(), count: d.count })
                    .collect();
                rsx! {
                    div { class: "analytics-grid",
                        ChartCard {
                            title: t(lang, Msg::JobsByStatus),
                            items: bars(&analytics.jobs_by_status, |k| job_status_label(k, lang)),
                        }
                        ChartCard {
                            title: t(lang, Msg::ApplicationsByStatus),
                            items: bars(&analytics.applications_by_status, |k| application_status_label(k, lang)),
                        }
                        ChartCard {
                            title: t(lang, Msg::JobsByCategory),
                            items: bars(&analytics.jobs_by_category, |k| category_label(k, lang)),
                        }
                        ChartCard {
                            title: t(lang, Msg::TotalUsers),
                            items: bars(&signups, str::to_string),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartCard(title: String, items: Vec<BarItem>) -> Element {
    let lang = use_lang();
    rsx! {
        Card { class: "chart-card",
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                if items.is_empty() {
                    EmptyState { lang }
                } else {
                    BarList { items }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_use_localized_labels() {
        let counts = vec![
            StatusCount { key: "active".into(), count: 4 },
            StatusCount { key: "pending".into(), count: 1 },
        ];
        let items = bars(&counts, |k| job_status_label(k, Lang::En));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].percent, 100);
        assert_eq!(items[1].percent, 25);
        assert_eq!(items[0].label, JobStatus::Active.label(Lang::En));
    }

    #[test]
    fn unknown_keys_are_shown_verbatim() {
        assert_eq!(job_status_label("archived", Lang::Ar), "archived");
    }
}

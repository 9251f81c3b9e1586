use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::IdentityUnavailable;
use crate::hooks::{use_patient_fetch, use_patient_scope, FetchState};
use crate::models::{AnalyticsFilter, BiologicalAnalytic, MoodAnalytic};
use crate::scoping::PatientScope;
use crate::services::{find_biological_analytic, find_mood_analytic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsKind {
    Mood,
    Biological,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticReport {
    Mood(MoodAnalytic),
    Biological(BiologicalAnalytic),
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsDashboardProps {
    pub kind: AnalyticsKind,
    #[prop_or_default]
    pub route_param: Option<String>,
}

#[function_component(AnalyticsDashboard)]
pub fn analytics_dashboard(props: &AnalyticsDashboardProps) -> Html {
    let scope = use_patient_scope(props.route_param.clone());
    let filter = use_state(AnalyticsFilter::current);

    let report = use_patient_fetch(
        scope.patient_id(),
        (props.kind, *filter),
        |patient_id, (kind, filter)| async move {
            match kind {
                AnalyticsKind::Mood => find_mood_analytic(filter, patient_id)
                    .await
                    .map(|found| found.map(AnalyticReport::Mood)),
                AnalyticsKind::Biological => find_biological_analytic(filter, patient_id)
                    .await
                    .map(|found| found.map(AnalyticReport::Biological)),
            }
        },
    );

    if let PatientScope::Unavailable(reason) = scope {
        return html! { <IdentityUnavailable {reason} /> };
    }

    let on_month = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(next) = select
                .value()
                .parse()
                .ok()
                .and_then(|month| AnalyticsFilter::new(month, filter.year))
            {
                filter.set(next);
            }
        })
    };
    let on_year = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(year) = input.value().parse() {
                filter.set(AnalyticsFilter { year, ..*filter });
            }
        })
    };

    let months = (1..=12u32)
        .map(|month| {
            html! {
                <option value={month.to_string()} selected={month == filter.month}>{month.to_string()}</option>
            }
        })
        .collect::<Html>();

    let body = match &*report {
        FetchState::Idle | FetchState::Loading => html! { <p class="loading">{"Loading..."}</p> },
        FetchState::Failed(e) => html! { <p class="error">{format!("Could not load analytics: {}", e)}</p> },
        FetchState::Loaded(None) => html! { <p class="empty">{"No data found for this period."}</p> },
        FetchState::Loaded(Some(AnalyticReport::Mood(analytic))) => mood_chart(analytic),
        FetchState::Loaded(Some(AnalyticReport::Biological(analytic))) => biological_table(analytic),
    };

    let title = match props.kind {
        AnalyticsKind::Mood => "Mood analytics",
        AnalyticsKind::Biological => "Biological functions",
    };

    html! {
        <section class="analytics-dashboard">
            <h2>{title}</h2>
            <div class="analytics-filter">
                <select onchange={on_month}>{months}</select>
                <input type="number" value={filter.year.to_string()} onchange={on_year} />
            </div>
            {body}
        </section>
    }
}

fn mood_chart(analytic: &MoodAnalytic) -> Html {
    let total = analytic.total().max(1);
    analytic
        .slices()
        .iter()
        .map(|(label, count)| {
            let width = format!("width: {}%", count * 100 / total);
            html! {
                <div class="mood-bar">
                    <span class="mood-label">{*label}</span>
                    <span class="mood-fill" style={width}></span>
                    <span class="mood-count">{count.to_string()}</span>
                </div>
            }
        })
        .collect()
}

fn biological_table(analytic: &BiologicalAnalytic) -> Html {
    let rows = [
        ("hunger", analytic.hunger),
        ("hydration", analytic.hydration),
        ("sleep", analytic.sleep),
        ("energy", analytic.energy),
    ];
    html! {
        <table class="biological-table">
            { for rows.iter().map(|(label, value)| html! {
                <tr><td>{*label}</td><td>{format!("{:.1}", value)}</td></tr>
            }) }
        </table>
    }
}

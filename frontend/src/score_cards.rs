use yew::prelude::*;
use shared::{CategoryScore, ScoreBreakdown, Severity};
use crate::styles::*;

fn render_progress(score: &CategoryScore) -> Html {
    let width = format!("width: {:.0}%", score.percent());
    html! {
        <div class="w-full h-2 bg-gray-700 rounded-full overflow-hidden">
            <div class={combine_classes("h-2 rounded-full", severity_bar(score.severity()))} style={width} />
        </div>
    }
}

fn render_severity_badge(severity: Option<Severity>) -> Html {
    match severity {
        Some(s) => html! { <span class={severity_badge(Some(s))}>{s.label()}</span> },
        None => html! { <span class={severity_badge(None)}>{"Pending"}</span> },
    }
}

pub fn render_overall(score: &CategoryScore) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, "text-center space-y-4")}>
            <div class={TEXT_MUTED}>{score.category.label()}</div>
            <div class={combine_classes("text-6xl font-extrabold", severity_text(score.severity()))}>
                {score.display_value()}
                <span class="text-2xl text-gray-400">{format!(" / {}", score.scale().max())}</span>
            </div>
            {render_severity_badge(score.severity())}
            {render_progress(score)}
            {render_reasoning(score)}
        </div>
    }
}

pub fn render_category(score: &CategoryScore) -> Html {
    html! {
        <div class={combine_classes(CARD_SECTION, SPACE_Y_BASE)}>
            <div class={FLEX_BETWEEN}>
                <h3 class="text-lg font-semibold text-gray-100">{score.category.label()}</h3>
                <span class={combine_classes("text-2xl font-bold", severity_text(score.severity()))}>
                    {score.display_value()}
                </span>
            </div>
            {render_progress(score)}
            <div class={FLEX_BETWEEN}>
                <span class={TEXT_MUTED}>{format!("out of {}", score.scale().max())}</span>
                {render_severity_badge(score.severity())}
            </div>
            {render_reasoning(score)}
        </div>
    }
}

fn render_reasoning(score: &CategoryScore) -> Html {
    match &score.reasoning {
        Some(text) => html! { <p class="text-sm text-gray-300 text-left leading-relaxed">{text}</p> },
        None => html! {},
    }
}

pub fn render_breakdown(breakdown: &ScoreBreakdown) -> Html {
    html! {
        <div class={SPACE_Y_LG}>
            {render_overall(&breakdown.overall)}
            <div class={GRID_CARDS}>
                {for breakdown.categories.iter().map(render_category)}
            </div>
        </div>
    }
}

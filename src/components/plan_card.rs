use log::info;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::plans::Plan;

#[derive(Properties, PartialEq)]
pub struct FeatureItemProps {
    pub text: &'static str,
    #[prop_or_default]
    pub highlighted: bool,
}

#[function_component(FeatureItem)]
pub fn feature_item(props: &FeatureItemProps) -> Html {
    html! {
        <div class="feature-item">
            <div class={classes!("feature-check", props.highlighted.then(|| "highlighted"))}>
                <Icon kind={IconKind::Check} size={12} stroke_width={3.0} />
            </div>
            <span class={classes!("feature-text", props.highlighted.then(|| "highlighted"))}>
                {props.text}
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: &'static Plan,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = props.plan;

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        info!("Plan selected: {}", plan.id);
    });

    let card = html! {
        <div class={classes!("plan-card", plan.recommended.then(|| "recommended"))}>
            {
                if plan.recommended {
                    html! { <div class="plan-card-glow"></div> }
                } else {
                    html! {}
                }
            }
            <div class="plan-header">
                <div>
                    <h3 class="plan-name">{plan.name}</h3>
                    <p class="plan-tier">{plan.tier}</p>
                </div>
                <div class="plan-pricing">
                    <div class="plan-price">{plan.price_label()}</div>
                    <div class="plan-list-price">{plan.list_price_label()}</div>
                </div>
            </div>

            <div class="plan-features">
                { for plan.features.iter().map(|text| html! {
                    <FeatureItem text={*text} highlighted={plan.recommended} />
                }) }
            </div>

            <button class={classes!("plan-select", plan.recommended.then(|| "primary"))} {onclick}>
                {plan.call_to_action}
                {
                    if plan.recommended {
                        html! { <Icon kind={IconKind::ChevronRight} size={18} stroke_width={3.0} /> }
                    } else {
                        html! {}
                    }
                }
            </button>
        </div>
    };

    match plan.badge() {
        Some(badge) => html! {
            <div class="plan-card-wrapper">
                <div class="plan-badge">{badge}</div>
                {card}
            </div>
        },
        None => card,
    }
}

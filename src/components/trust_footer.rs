use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

#[function_component(TrustFooter)]
pub fn trust_footer() -> Html {
    html! {
        <div class="trust-footer">
            <div class="trust-badges">
                <div class="trust-badge upi">
                    <span>{"UPI"}</span>
                </div>
                <div class="trust-divider"></div>
                <div class="trust-badge stripe">{"stripe"}</div>
                <div class="trust-divider"></div>
                <div class="trust-badge ssl">
                    <Icon kind={IconKind::Lock} size={12} />
                    {"256-Bit SSL"}
                </div>
            </div>

            <div class="guarantee">
                <Icon kind={IconKind::ShieldCheck} size={14} />
                <p>{"Money-back guarantee if logic is unsatisfactory."}</p>
            </div>
        </div>
    }
}

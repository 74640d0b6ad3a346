use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::plan_card::PlanCard;
use crate::components::sheet_state::{SheetAction, SheetState};
use crate::components::trust_footer::TrustFooter;
use crate::config;
use crate::plans::PLANS;

#[derive(Properties, PartialEq)]
pub struct PaywallSheetProps {
    /// Fired once the exit transition has finished; the owner should unmount the sheet.
    pub on_close: Callback<()>,
}

#[function_component(PaywallSheet)]
pub fn paywall_sheet(props: &PaywallSheetProps) -> Html {
    let state = use_reducer(SheetState::default);
    let exit_timer = use_mut_ref(|| None::<Timeout>);
    let exit_fired = use_mut_ref(|| false);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            dispatcher.dispatch(SheetAction::Mounted);

            let fill = Timeout::new(config::PROGRESS_DELAY_MS, move || {
                dispatcher.dispatch(SheetAction::ProgressElapsed);
            });

            move || drop(fill)
        }, ());
    }

    {
        let exit_timer = exit_timer.clone();
        let exit_fired = exit_fired.clone();
        use_unmount(move || {
            if exit_timer.borrow_mut().take().is_some() && !*exit_fired.borrow() {
                debug!("sheet torn down before exit finished, owner notification cancelled");
            }
        });
    }

    let handle_close = {
        let dispatcher = state.dispatcher();
        let exit_timer = exit_timer.clone();
        let exit_fired = exit_fired.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // A pending exit means this gesture was already handled.
            if exit_timer.borrow().is_some() {
                return;
            }
            dispatcher.dispatch(SheetAction::CloseRequested);

            let on_close = on_close.clone();
            let exit_fired = exit_fired.clone();
            // The handle cannot be dropped from inside its own callback, so it stays in the slot until unmount.
            let timeout = Timeout::new(config::EXIT_DELAY_MS, move || {
                *exit_fired.borrow_mut() = true;
                debug!("exit transition finished, notifying owner");
                on_close.emit(());
            });
            *exit_timer.borrow_mut() = Some(timeout);
        })
    };

    let shown = state.is_shown();
    let progress = state.progress;

    html! {
        <>
            <style>{SHEET_CSS}</style>
            <div
                class={classes!("sheet-backdrop", if shown { "shown" } else { "hidden" })}
                onclick={handle_close.clone()}
            />

            <div class={classes!("sheet-container", if shown { "open" } else { "closed" })}>
                <div class="sheet">
                    <div class="sheet-header">
                        <button class="sheet-close" aria-label="Close" onclick={handle_close}>
                            <Icon kind={IconKind::Close} size={20} />
                        </button>

                        <div class="sheet-progress">
                            <div class="sheet-progress-labels">
                                <span class="sheet-progress-label">{"Analysis in progress..."}</span>
                                <span class="sheet-progress-value">{format!("{}%", progress)}</span>
                            </div>
                            <div class="sheet-progress-track">
                                <div class="sheet-progress-bar" style={format!("width: {}%;", progress)}>
                                    <div class="sheet-progress-shimmer"></div>
                                </div>
                            </div>
                        </div>

                        <h2 class="sheet-title">{"Finalize Your Analysis."}</h2>
                        <p class="sheet-subtitle">{"Unlock your full report and care plan now."}</p>
                    </div>

                    <div class="sheet-body">
                        { for PLANS.iter().map(|plan| html! { <PlanCard key={plan.id} {plan} /> }) }
                        <TrustFooter />
                    </div>
                </div>
            </div>
        </>
    }
}

const SHEET_CSS: &str = r#"
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    @keyframes shimmer {
        from { transform: translateX(-100%); }
        to { transform: translateX(100%); }
    }
    .sheet-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(15, 23, 42, 0.6);
        backdrop-filter: blur(4px);
        z-index: 40;
        transition: opacity 0.3s;
    }
    .sheet-backdrop.shown { opacity: 1; }
    .sheet-backdrop.hidden { opacity: 0; }
    .sheet-container {
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        align-items: flex-end;
        pointer-events: none;
        transition: transform 0.5s cubic-bezier(0.32, 0.72, 0, 1);
    }
    .sheet-container.open { transform: translateY(0); }
    .sheet-container.closed { transform: translateY(100%); }
    .sheet {
        width: 100%;
        max-width: 28rem;
        max-height: 90vh;
        background: #fff;
        border-radius: 32px 32px 0 0;
        box-shadow: 0 -10px 40px -15px rgba(0, 0, 0, 0.2);
        pointer-events: auto;
        overflow: hidden;
        display: flex;
        flex-direction: column;
    }
    .sheet-header {
        position: relative;
        padding: 2rem 1.5rem 0.5rem;
        border-bottom: 1px solid #f8fafc;
    }
    .sheet-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        padding: 0.5rem;
        border: none;
        border-radius: 9999px;
        background: #f8fafc;
        color: #94a3b8;
        cursor: pointer;
        transition: color 0.2s;
    }
    .sheet-close:hover { color: #475569; }
    .sheet-progress { margin-bottom: 1.5rem; }
    .sheet-progress-labels {
        display: flex;
        justify-content: space-between;
        margin-bottom: 0.5rem;
        font-size: 0.75rem;
        font-weight: 700;
        color: #0f766e;
    }
    .sheet-progress-label {
        text-transform: uppercase;
        letter-spacing: 0.05em;
        animation: pulse 2s infinite;
    }
    .sheet-progress-track {
        height: 0.5rem;
        background: #f1f5f9;
        border-radius: 9999px;
        overflow: hidden;
    }
    .sheet-progress-bar {
        position: relative;
        height: 100%;
        border-radius: 9999px;
        background: linear-gradient(to right, #2dd4bf, #0d9488);
        transition: width 1s ease-out;
        overflow: hidden;
    }
    .sheet-progress-shimmer {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.3), transparent);
        animation: shimmer 2s infinite;
    }
    .sheet-title {
        font-size: 1.5rem;
        font-weight: 800;
        color: #0f172a;
        margin: 0 0 0.5rem;
    }
    .sheet-subtitle {
        font-size: 0.875rem;
        color: #64748b;
        margin: 0;
    }
    .sheet-body {
        overflow-y: auto;
        padding: 1.5rem 1.5rem 8rem;
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
        scrollbar-width: none;
    }
    .plan-card-wrapper { position: relative; }
    .plan-badge {
        position: absolute;
        top: -0.75rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 10;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: linear-gradient(to right, #0d9488, #14b8a6);
        color: #fff;
        font-size: 10px;
        font-weight: 700;
        white-space: nowrap;
    }
    .plan-card {
        position: relative;
        overflow: hidden;
        padding: 1.25rem;
        border: 1px solid #e2e8f0;
        border-radius: 20px;
        background: #fff;
        transition: border-color 0.2s, box-shadow 0.3s;
    }
    .plan-card.recommended {
        border: 2px solid #14b8a6;
        border-radius: 24px;
        background: rgba(240, 253, 250, 0.8);
        box-shadow: 0 10px 15px -3px rgba(19, 78, 74, 0.05);
    }
    .plan-card-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 8rem;
        height: 8rem;
        border-radius: 9999px;
        background: rgba(204, 251, 241, 0.5);
        transform: translate(50%, -50%);
        filter: blur(40px);
    }
    .plan-header {
        position: relative;
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 1rem;
    }
    .plan-name { margin: 0; font-size: 1.125rem; font-weight: 700; color: #1e293b; }
    .plan-tier { margin: 0; font-size: 0.75rem; font-weight: 500; color: #64748b; }
    .plan-card.recommended .plan-name { color: #042f2e; }
    .plan-card.recommended .plan-tier { color: #0f766e; }
    .plan-pricing { text-align: right; }
    .plan-price { font-size: 1.5rem; font-weight: 800; color: #1e293b; }
    .plan-list-price { font-size: 0.75rem; color: #94a3b8; text-decoration: line-through; }
    .plan-features {
        position: relative;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
    }
    .feature-item { display: flex; align-items: flex-start; gap: 0.75rem; }
    .feature-check {
        margin-top: 0.125rem;
        padding: 0.125rem;
        border-radius: 9999px;
        background: #f1f5f9;
        color: #0d9488;
    }
    .feature-check.highlighted { background: #ccfbf1; color: #0f766e; }
    .feature-text { font-size: 0.875rem; color: #475569; }
    .feature-text.highlighted { color: #134e4a; font-weight: 500; }
    .plan-select {
        width: 100%;
        padding: 0.875rem 0;
        border: 1px solid #e2e8f0;
        border-radius: 0.75rem;
        background: transparent;
        color: #475569;
        font-size: 0.875rem;
        font-weight: 600;
        cursor: pointer;
    }
    .plan-select.primary {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border: none;
        background: #f97316;
        color: #fff;
        font-weight: 700;
        box-shadow: 0 10px 15px -3px rgba(249, 115, 22, 0.25);
    }
    .plan-select:active { transform: scale(0.98); }
    .trust-footer {
        padding-top: 0.5rem;
        text-align: center;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .trust-badges {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        color: #94a3b8;
        filter: grayscale(1);
        opacity: 0.7;
    }
    .trust-badge { display: flex; align-items: center; gap: 0.25rem; font-weight: 700; color: #475569; }
    .trust-badge.upi { font-style: italic; letter-spacing: -0.05em; }
    .trust-badge.upi span { border-bottom: 2px solid #94a3b8; }
    .trust-badge.ssl { font-size: 10px; font-weight: 500; text-transform: uppercase; color: #94a3b8; }
    .trust-divider { width: 1px; height: 1rem; background: #cbd5e1; }
    .guarantee {
        display: flex;
        align-items: center;
        gap: 0.375rem;
        width: fit-content;
        margin: 0 auto;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: rgba(240, 253, 250, 0.5);
        color: rgba(15, 118, 110, 0.8);
    }
    .guarantee p { margin: 0; font-size: 10px; font-weight: 600; }
"#;
